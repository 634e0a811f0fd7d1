use anyhow::Result;
use serde_json::json;
use wiremock::{
    matchers::{any, body_json, header, method, path},
    Mock, ResponseTemplate,
};

use optout::{
    form::{Tone, EMPTY_EMAIL_PROMPT, GENERIC_ERROR_TEXT, RETRY_ERROR_TEXT},
    PreferencesClient, UnsubscribeForm,
};

use crate::helpers::{spawn_test_form, PageEvent, RecordingPage};

const UNSUB_PATH: &str = "/v1/users/public/email_preferences/unsubscribe/";

#[tokio::test]
async fn empty_email_prompts_without_issuing_a_request() -> Result<()> {
    let t = spawn_test_form().await?;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&t.backend)
        .await;

    for field in ["", " ", "\t", " \n "] {
        t.form.click(field).await;
    }

    assert_eq!(
        vec![PageEvent::Alert(EMPTY_EMAIL_PROMPT.to_owned()); 4],
        t.page.events()
    );

    Ok(())
}

#[tokio::test]
async fn successful_unsubscribe_shows_server_message_in_success_tone() -> Result<()> {
    let t = spawn_test_form().await?;

    Mock::given(path(UNSUB_PATH))
        .and(method("POST"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "email": "jane.doe@example.com",
            "name": "active10_mailing_list",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Unsubscribed successfully"
        })))
        .expect(1)
        .mount(&t.backend)
        .await;

    t.form.click("jane.doe@example.com").await;

    assert_eq!(
        Some((Tone::Success, "Unsubscribed successfully".to_owned())),
        t.page.last_status()
    );

    Ok(())
}

#[tokio::test]
async fn string_detail_is_shown_verbatim_in_error_tone() -> Result<()> {
    let t = spawn_test_form().await?;

    Mock::given(path(UNSUB_PATH))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "detail": "Email not found"
        })))
        .expect(1)
        .mount(&t.backend)
        .await;

    t.form.click("jane.doe@example.com").await;

    assert_eq!(
        Some((Tone::Error, "Email not found".to_owned())),
        t.page.last_status()
    );

    Ok(())
}

#[tokio::test]
async fn field_error_details_are_joined_with_a_comma() -> Result<()> {
    let t = spawn_test_form().await?;

    Mock::given(path(UNSUB_PATH))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [
                { "msg": "Invalid format" },
                { "msg": "Too short" },
            ]
        })))
        .expect(1)
        .mount(&t.backend)
        .await;

    t.form.click("jane.doe@example.com").await;

    assert_eq!(
        Some((Tone::Error, "Invalid format, Too short".to_owned())),
        t.page.last_status()
    );

    Ok(())
}

#[tokio::test]
async fn unusable_detail_falls_back_to_the_generic_error() -> Result<()> {
    let cases = [
        (json!({}), "missing detail"),
        (json!({ "detail": null }), "null detail"),
        (json!({ "detail": 17 }), "numeric detail"),
        (json!({ "detail": { "msg": "oops" } }), "object detail"),
    ];

    for (body, description) in cases {
        let t = spawn_test_form().await?;

        Mock::given(path(UNSUB_PATH))
            .and(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(body))
            .expect(1)
            .mount(&t.backend)
            .await;

        t.form.click("jane.doe@example.com").await;

        assert_eq!(
            Some((Tone::Error, GENERIC_ERROR_TEXT.to_owned())),
            t.page.last_status(),
            "wrong status for case: {description}",
        );
    }

    Ok(())
}

#[tokio::test]
async fn connection_failure_shows_the_retry_prompt() -> Result<()> {
    // A port that was free a moment ago and has nothing listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);

    let page = RecordingPage::default();
    let client = PreferencesClient::new(format!("http://{addr}"))?;
    let form = UnsubscribeForm::new(client, page.clone());

    form.click("jane.doe@example.com").await;

    assert_eq!(
        Some((Tone::Error, RETRY_ERROR_TEXT.to_owned())),
        page.last_status()
    );

    Ok(())
}

#[tokio::test]
async fn undecodable_replies_show_the_retry_prompt() -> Result<()> {
    let cases = [
        ResponseTemplate::new(200).set_body_string("not json"),
        ResponseTemplate::new(200).set_body_json(json!({ "ok": true })),
        ResponseTemplate::new(500).set_body_string("<html>oops</html>"),
    ];

    for reply in cases {
        let t = spawn_test_form().await?;

        Mock::given(path(UNSUB_PATH))
            .and(method("POST"))
            .respond_with(reply)
            .expect(1)
            .mount(&t.backend)
            .await;

        t.form.click("jane.doe@example.com").await;

        assert_eq!(
            Some((Tone::Error, RETRY_ERROR_TEXT.to_owned())),
            t.page.last_status()
        );
    }

    Ok(())
}

#[tokio::test]
async fn repeated_clicks_do_not_accumulate_output() -> Result<()> {
    let t = spawn_test_form().await?;

    Mock::given(path(UNSUB_PATH))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Unsubscribed successfully"
        })))
        .expect(2)
        .mount(&t.backend)
        .await;

    t.form.click("jane.doe@example.com").await;
    t.form.click("jane.doe@example.com").await;

    let expected = PageEvent::Status(Tone::Success, "Unsubscribed successfully".to_owned());
    assert_eq!(vec![expected.clone(), expected], t.page.events());

    Ok(())
}
