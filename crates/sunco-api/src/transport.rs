// HTTP transport seam shared by every API call.
//
// The client owns one `Transport` and builds fully-formed `reqwest::Request`
// values itself, so a substitute transport only has to hand back responses.

use std::future::Future;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

const USER_AGENT: &str = concat!("sunco-api/", env!("CARGO_PKG_VERSION"));

/// Sends a prepared request and returns the raw response.
///
/// Implemented for `reqwest::Client`; tests plug in canned responses.
/// Implementations must be safe to share between concurrent callers.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: reqwest::Request,
    ) -> impl Future<Output = Result<reqwest::Response, reqwest::Error>> + Send;
}

impl Transport for reqwest::Client {
    fn send(
        &self,
        request: reqwest::Request,
    ) -> impl Future<Output = Result<reqwest::Response, reqwest::Error>> + Send {
        self.execute(request)
    }
}

impl<T: Transport> Transport for Arc<T> {
    fn send(
        &self,
        request: reqwest::Request,
    ) -> impl Future<Output = Result<reqwest::Response, reqwest::Error>> + Send {
        (**self).send(request)
    }
}

/// Build the default `reqwest::Client`.
///
/// No timeout is set; a hung connection behaves however reqwest's defaults do.
pub fn default_client() -> Result<reqwest::Client, Error> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(Error::Transport)
}

/// Encode `Authorization: Basic base64(key_id:secret)`, flagged sensitive so it
/// never shows up in debug output.
pub(crate) fn basic_auth_header(key_id: &str, secret: &SecretString) -> HeaderValue {
    let encoded = STANDARD.encode(format!("{key_id}:{}", secret.expose_secret()));
    // The base64 alphabet and "Basic " are all visible ASCII.
    let mut value = HeaderValue::try_from(format!("Basic {encoded}"))
        .expect("base64 output is always a valid header value");
    value.set_sensitive(true);
    value
}
