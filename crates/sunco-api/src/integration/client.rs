// Async HTTP client for the custom integration endpoints.
//
// Status codes are logged but never checked: every response body that parses
// is returned as a success, and update/delete ignore the body entirely.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::{Method, Request, Response};
use secrecy::SecretString;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::types::{
    CUSTOM_INTEGRATION_TYPE, CreateIntegrationRequest, CreateWebhookRequest, Integration,
    IntegrationEnvelope, IntegrationsEnvelope, UpdateIntegrationRequest,
};
use crate::error::Error;
use crate::transport::{self, Transport};

// ── Configuration ────────────────────────────────────────────────────

/// Connection settings for one Sunshine Conversations app.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    app_id: String,
    key_id: String,
    secret: SecretString,
}

impl ClientConfig {
    /// `base_url` is the API root, e.g. `https://api.smooch.io/`.
    /// A missing trailing `/` is added so templated paths compose.
    pub fn new(
        base_url: impl Into<String>,
        app_id: impl Into<String>,
        key_id: impl Into<String>,
        secret: SecretString,
    ) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            app_id: app_id.into(),
            key_id: key_id.into(),
            secret,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Basic-auth username.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// Basic-auth password.
    pub fn secret(&self) -> &SecretString {
        &self.secret
    }
}

// ── Path values ──────────────────────────────────────────────────────

/// Pass an id through untouched unless URL parsing would resolve part of it
/// away as a `.` or `..` segment, which would retarget the request.
///
/// Only the path portion counts: `?` and `#` end it, and `\` separates
/// segments like `/` does in http(s) URLs.
fn path_value(value: &str) -> Result<&str, Error> {
    let path = value.split(['?', '#']).next().unwrap_or_default();
    let dot_segment = path.split(['/', '\\']).any(|segment| {
        let segment = segment.to_ascii_lowercase().replace("%2e", ".");
        segment == "." || segment == ".."
    });
    if dot_segment {
        return Err(Error::InvalidPathSegment {
            value: value.to_owned(),
        });
    }
    Ok(value)
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the custom integration API.
///
/// Every request carries HTTP Basic auth built from the API key id and secret.
/// The transport is shared by all calls and may be used from many tasks at once.
pub struct IntegrationClient<T = reqwest::Client> {
    transport: T,
    config: ClientConfig,
    auth: HeaderValue,
}

impl IntegrationClient {
    /// Build a client backed by a default `reqwest::Client`.
    pub fn new(
        base_url: &str,
        app_id: &str,
        key_id: &str,
        secret: SecretString,
    ) -> Result<Self, Error> {
        Self::from_config(ClientConfig::new(base_url, app_id, key_id, secret))
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, Error> {
        Ok(Self::with_transport(config, transport::default_client()?))
    }
}

impl<T: Transport> IntegrationClient<T> {
    /// Build a client on top of a caller-supplied transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        let auth = transport::basic_auth_header(&config.key_id, &config.secret);
        Self {
            transport,
            config,
            auth,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// `{base}v2/apps/{appId}/integrations`
    fn integrations_url(&self) -> Result<Url, Error> {
        let url = format!(
            "{}v2/apps/{}/integrations",
            self.config.base_url,
            path_value(&self.config.app_id)?
        );
        Ok(Url::parse(&url)?)
    }

    /// `{base}v2/apps/{appId}/integrations/{integrationId}`
    fn integration_url(&self, integration_id: &str) -> Result<Url, Error> {
        let url = format!(
            "{}v2/apps/{}/integrations/{}",
            self.config.base_url,
            path_value(&self.config.app_id)?,
            path_value(integration_id)?
        );
        Ok(Url::parse(&url)?)
    }

    /// `{base}v2/apps/{appId}/integrations?filter[types]=custom`
    fn custom_integrations_url(&self) -> Result<Url, Error> {
        let url = format!(
            "{}v2/apps/{}/integrations?filter[types]={CUSTOM_INTEGRATION_TYPE}",
            self.config.base_url,
            path_value(&self.config.app_id)?
        );
        Ok(Url::parse(&url)?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    fn request(&self, method: Method, url: Url) -> Request {
        let mut request = Request::new(method, url);
        request.headers_mut().insert(AUTHORIZATION, self.auth.clone());
        request
    }

    fn json_request<B: Serialize>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> Result<Request, Error> {
        let bytes = serde_json::to_vec(body).map_err(Error::Serialization)?;
        let mut request = self.request(method, url);
        request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        *request.body_mut() = Some(bytes.into());
        Ok(request)
    }

    async fn execute(&self, request: Request) -> Result<Response, Error> {
        debug!("{} {}", request.method(), request.url());

        let resp = self.transport.send(request).await?;
        debug!(status = %resp.status(), "response received");
        Ok(resp)
    }

    /// Buffer the whole body and decode it, regardless of status.
    async fn decode<D: DeserializeOwned>(resp: Response) -> Result<D, Error> {
        let body = resp.bytes().await.map_err(Error::Body)?;
        serde_json::from_slice(&body).map_err(|e| {
            let body = String::from_utf8_lossy(&body).into_owned();
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Create a `custom` integration with a single webhook.
    ///
    /// A non-2xx response whose body is JSON of another shape comes back as a
    /// zero-valued [`Integration`], not an error.
    pub async fn create_integration(
        &self,
        display_name: &str,
        target: &str,
        triggers: &[String],
        include_full_user: bool,
        include_full_source: bool,
    ) -> Result<Integration, Error> {
        let body = CreateIntegrationRequest::custom(
            display_name,
            CreateWebhookRequest {
                target: target.to_owned(),
                triggers: triggers.to_vec(),
                include_full_user,
                include_full_source,
            },
        );
        let request = self.json_request(Method::POST, self.integrations_url()?, &body)?;

        let resp = self.execute(request).await?;
        let envelope: IntegrationEnvelope = Self::decode(resp).await?;
        Ok(envelope.integration)
    }

    /// Rename an integration.
    ///
    /// The response is discarded unread, so `Ok(())` only means the request
    /// was delivered.
    pub async fn update_integration(
        &self,
        integration_id: &str,
        display_name: &str,
    ) -> Result<(), Error> {
        let body = UpdateIntegrationRequest {
            display_name: display_name.to_owned(),
        };
        let request =
            self.json_request(Method::PATCH, self.integration_url(integration_id)?, &body)?;

        self.execute(request).await?;
        Ok(())
    }

    /// Delete an integration. Like [`update_integration`](Self::update_integration),
    /// server-side failures are not reported.
    pub async fn delete_integration(&self, integration_id: &str) -> Result<(), Error> {
        let request = self.request(Method::DELETE, self.integration_url(integration_id)?);

        self.execute(request).await?;
        Ok(())
    }

    /// All custom integrations of the app, in server order.
    pub async fn list_custom_integrations(&self) -> Result<Vec<Integration>, Error> {
        let request = self.request(Method::GET, self.custom_integrations_url()?);

        let resp = self.execute(request).await?;
        let envelope: IntegrationsEnvelope = Self::decode(resp).await?;
        Ok(envelope.integrations)
    }

    pub async fn get_integration(&self, integration_id: &str) -> Result<Integration, Error> {
        let request = self.request(Method::GET, self.integration_url(integration_id)?);

        let resp = self.execute(request).await?;
        let envelope: IntegrationEnvelope = Self::decode(resp).await?;
        Ok(envelope.integration)
    }
}
