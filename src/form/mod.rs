//! The unsubscribe form and the policy that turns replies into on-page text.

mod data;
mod sink;

pub use data::{DataParsingError, EmailField};
pub use sink::{ConsoleSink, StatusSink, Tone};

use tracing::debug;
use uuid::Uuid;

use crate::api_client::{self, ErrorDetail, PreferencesClient};

/// Shown when the email field is empty at click time.
pub const EMPTY_EMAIL_PROMPT: &str = "Please enter your email address.";
/// Shown when the backend rejects the request without a usable explanation.
pub const GENERIC_ERROR_TEXT: &str = "An error occurred.";
/// Shown when the request never produced a decodable reply.
pub const RETRY_ERROR_TEXT: &str = "An error occurred. Please try again.";

/// The unsubscribe form.
///
/// Holds the client and the output sink it writes to, so tests can swap
/// either. Share it behind an `Arc` to allow overlapping clicks; the sink
/// sees them in completion order and the last write wins.
pub struct UnsubscribeForm<S: StatusSink> {
    client: PreferencesClient,
    sink: S,
}

impl<S: StatusSink> UnsubscribeForm<S> {
    pub fn new(client: PreferencesClient, sink: S) -> Self {
        UnsubscribeForm { client, sink }
    }

    /// Handles one click of the unsubscribe button.
    ///
    /// Checks the field value it was handed for presence, posts a single
    /// unsubscribe request and renders the outcome on the sink. Every
    /// failure ends up as on-page text, nothing propagates to the caller.
    #[tracing::instrument(
        name = "Submitting unsubscribe request",
        skip(self, email_field),
        fields(click_id = %Uuid::new_v4())
    )]
    pub async fn click<V: AsRef<str>>(&self, email_field: V) {
        let email = match EmailField::parse(email_field) {
            Ok(email) => email,
            Err(_) => {
                self.sink.alert(EMPTY_EMAIL_PROMPT);
                return;
            }
        };

        match self.client.unsubscribe(&email).await {
            Ok(reply) => self.sink.status(Tone::Success, &reply.message),
            Err(api_client::Error::Rejected { status, detail }) => {
                debug!("{:<12} - unsubscribe rejected: {status}", "form_click");
                self.sink.status(Tone::Error, &failure_text(detail.as_ref()));
            }
            Err(er) => {
                debug!("{:<12} - unsubscribe failed: {er:?}", "form_click");
                self.sink.status(Tone::Error, RETRY_ERROR_TEXT);
            }
        }
    }
}

/// Derives the on-page error line from the decoded failure detail.
fn failure_text(detail: Option<&ErrorDetail>) -> String {
    match detail {
        Some(ErrorDetail::Message(msg)) => msg.clone(),
        Some(ErrorDetail::Fields(fields)) => fields
            .iter()
            .map(|field| field.msg.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        Some(ErrorDetail::Other(_)) | None => GENERIC_ERROR_TEXT.to_owned(),
    }
}
