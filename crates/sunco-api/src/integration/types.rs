//! Request and response types for the custom integration endpoints.
//!
//! Field names use camelCase via `#[serde(rename_all = "camelCase")]`.
//! Response types default every field, so a body missing keys decodes to
//! empty values instead of failing.

use serde::{Deserialize, Deserializer, Serialize};

/// The only integration type this client creates or lists.
pub const CUSTOM_INTEGRATION_TYPE: &str = "custom";

// ── Responses ────────────────────────────────────────────────────────

/// A custom integration as returned by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Integration {
    /// Server-assigned; never generated client-side.
    pub id: String,
    pub status: String,
    pub display_name: String,
    /// In the order the server returned them.
    #[serde(deserialize_with = "null_as_default")]
    pub webhooks: Vec<Webhook>,
}

impl Integration {
    /// Look up one of this integration's webhooks by id.
    pub fn webhook(&self, id: &str) -> Option<&Webhook> {
        self.webhooks.iter().find(|w| w.id == id)
    }
}

/// A webhook attached to an integration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Webhook {
    pub id: String,
    pub version: String,
    pub target: String,
    #[serde(deserialize_with = "null_as_default")]
    pub triggers: Vec<String>,
    /// Used by the integration owner to verify signed webhook payloads.
    pub secret: String,
}

/// `{ "integration": { ... } }`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct IntegrationEnvelope {
    pub integration: Integration,
}

/// `{ "integrations": [ ... ] }`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct IntegrationsEnvelope {
    #[serde(deserialize_with = "null_as_default")]
    pub integrations: Vec<Integration>,
}

// ── Requests ─────────────────────────────────────────────────────────

/// Body for `POST v2/apps/{appId}/integrations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntegrationRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub display_name: String,
    pub webhooks: Vec<CreateWebhookRequest>,
}

impl CreateIntegrationRequest {
    /// A `custom` integration carrying exactly one webhook.
    pub fn custom(display_name: impl Into<String>, webhook: CreateWebhookRequest) -> Self {
        Self {
            kind: CUSTOM_INTEGRATION_TYPE.to_owned(),
            display_name: display_name.into(),
            webhooks: vec![webhook],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebhookRequest {
    pub target: String,
    pub triggers: Vec<String>,
    pub include_full_user: bool,
    pub include_full_source: bool,
}

/// Body for `PATCH v2/apps/{appId}/integrations/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIntegrationRequest {
    pub display_name: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
