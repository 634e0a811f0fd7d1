//! HTTP client for the public email-preferences API.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Route of the public unsubscribe endpoint, relative to the API root.
const UNSUBSCRIBE_PATH: &str = "/v1/users/public/email_preferences/unsubscribe/";

/// The mailing list every request opts out of.
pub const MAILING_LIST_NAME: &str = "active10_mailing_list";

#[derive(Debug, Clone)]
pub struct PreferencesClient {
    pub http_client: Client,
    pub url: reqwest::Url,
}

impl PreferencesClient {
    pub fn new<S: AsRef<str>>(base_url: S) -> Result<Self> {
        let url =
            reqwest::Url::parse(base_url.as_ref()).map_err(|e| Error::UrlParsing(e.to_string()))?;

        let http_client = Client::builder().build()?;

        Ok(PreferencesClient { http_client, url })
    }

    /// Posts a single unsubscribe request and decodes the reply.
    ///
    /// One attempt per call: no retry, no timeout, no cancellation. A non-2xx
    /// reply with a JSON body becomes [`Error::Rejected`] carrying the decoded
    /// `detail`; everything else surfaces as a decode or transport error.
    pub async fn unsubscribe<S>(&self, email: S) -> Result<Unsubscribed>
    where
        S: AsRef<str>,
    {
        let url = self
            .url
            .join(UNSUBSCRIBE_PATH)
            .map_err(|e| Error::UrlParsing(e.to_string()))?;

        let payload = UnsubscribePayload {
            email: email.as_ref(),
            name: MAILING_LIST_NAME,
        };

        let resp = self.http_client.post(url).json(&payload).send().await?;

        let status = resp.status();
        if status.is_success() {
            let reply: Unsubscribed = resp.json().await?;
            return Ok(reply);
        }

        let body = resp.bytes().await?;
        let failure: Value = serde_json::from_slice(&body)?;
        let detail = failure.get("detail").cloned().map(ErrorDetail::from);

        Err(Error::Rejected { status, detail })
    }
}

#[derive(Serialize)]
struct UnsubscribePayload<'a> {
    email: &'a str,
    name: &'a str,
}

/// Successful reply of the unsubscribe endpoint.
#[derive(Deserialize, Debug)]
pub struct Unsubscribed {
    pub message: String,
}

/// The `detail` field of a failure reply.
///
/// The endpoint answers with either a plain string or a list of per-field
/// validation objects. Anything outside those two shapes lands in `Other`
/// so callers degrade deliberately instead of guessing.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldError>),
    Other(Value),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub msg: String,
}

// ###################################
// ->   TRY FROMs
// ###################################

impl From<Value> for ErrorDetail {
    fn from(value: Value) -> Self {
        match value {
            Value::String(msg) => ErrorDetail::Message(msg),
            Value::Array(items) => {
                let fields: Option<Vec<FieldError>> = items
                    .iter()
                    .map(|item| {
                        item.get("msg")
                            .and_then(Value::as_str)
                            .map(|msg| FieldError {
                                msg: msg.to_owned(),
                            })
                    })
                    .collect();

                match fields {
                    Some(fields) => ErrorDetail::Fields(fields),
                    None => ErrorDetail::Other(Value::Array(items)),
                }
            }
            other => ErrorDetail::Other(other),
        }
    }
}

// ###################################
// ->   ERROR & RESULT
// ###################################
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("url parsing error: {0}")]
    UrlParsing(String),
    #[error("unsubscribe rejected with status: {status}")]
    Rejected {
        status: StatusCode,
        detail: Option<ErrorDetail>,
    },

    #[error("reply decoding error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("transport error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
