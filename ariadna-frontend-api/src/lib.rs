use gloo_net::http::Response;
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;

use ariadna_boundary as json;

mod public;

pub use self::public::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error(transparent)]
    Api(#[from] json::Error),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Fetch(format!("Invalid response: {err}"))
    }
}

/// The geocoding service answers with `null` instead of
/// an empty list and reports backend failures in the body.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload<T> {
    Results(Option<Vec<T>>),
    Failure(json::Error),
}

pub async fn into_results<T>(response: Response) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let ok = response.ok();
    let status = response.status();
    let body = response.text().await?;
    decode_results(ok, status, &body)
}

fn decode_results<T>(ok: bool, status: u16, body: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if !ok {
        log::warn!("Geocoding service responded with status {status}");
        return Err(serde_json::from_str::<json::Error>(body)
            .map_or(Error::Status(status), Error::Api));
    }
    match serde_json::from_str(body)? {
        Payload::Results(results) => Ok(results.unwrap_or_default()),
        Payload::Failure(err) => Err(err.into()),
    }
}
