use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod public;

pub use self::public::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("HTTP {status}: {text}")]
    Status { status: u16, text: String },

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if !response.ok() {
        return Err(Error::Status {
            status: response.status(),
            text: response.status_text(),
        });
    }
    let body = response.text().await?;
    decode_json(&body)
}

fn decode_json<T>(body: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|err| Error::Decode(err.to_string()))
}
