/// Default analysis service address
pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:8000";

/// NEC edition requested when none is configured
pub const DEFAULT_NEC_VERSION: &str = "2023";

/// Where the analysis service lives and which code edition to check against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Base URL without trailing slash
    pub base_url: String,

    /// NEC edition passed as `nec_version`
    pub nec_version: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GATEWAY_URL.to_string(),
            nec_version: DEFAULT_NEC_VERSION.to_string(),
        }
    }
}

impl GatewayConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Load from `NEC_GATEWAY_URL` and `NEC_VERSION`, falling back to defaults
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("NEC_GATEWAY_URL").unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string());
        let nec_version =
            std::env::var("NEC_VERSION").unwrap_or_else(|_| DEFAULT_NEC_VERSION.to_string());

        Self::new(&base_url).with_nec_version(&nec_version)
    }

    pub fn with_nec_version(mut self, nec_version: &str) -> Self {
        self.nec_version = nec_version.to_string();
        self
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
