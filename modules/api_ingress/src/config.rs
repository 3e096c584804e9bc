use serde::{Deserialize, Serialize};

/// `modules.api_ingress` configuration section.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ApiIngressConfig {
    /// Listen address; when unset the server section's host:port is used.
    #[serde(default)]
    pub bind_addr: Option<String>,
    /// Serve the HTML API viewer at /docs.
    #[serde(default)]
    pub enable_docs: bool,
    #[serde(default)]
    pub cors_enabled: bool,
}
