//! Identity service configuration from environment variables.

pub const API_KEY_VAR: &str = "IDENTITY_API_KEY";
pub const ENDPOINT_VAR: &str = "IDENTITY_ENDPOINT";
pub const DEFAULT_ENDPOINT: &str = "https://identitytoolkit.googleapis.com";

/// Where and how to reach the identity service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    pub api_key: String,
    pub endpoint: String,
}

impl IdentityConfig {
    /// Read the config from the environment.
    ///
    /// Native builds load `.env` first. Browser builds have no process
    /// environment, so the values are captured at compile time.
    pub fn from_env() -> Result<Self, String> {
        #[cfg(not(target_arch = "wasm32"))]
        dotenvy::dotenv().ok();

        Self::from_lookup(read_var)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| format!("{API_KEY_VAR} not set"))?;
        let endpoint = lookup(ENDPOINT_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Ok(Self {
            api_key,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of the sign-up call, key included.
    pub fn sign_up_url(&self) -> String {
        format!("{}/v1/accounts:signUp?key={}", self.endpoint, self.api_key)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(target_arch = "wasm32")]
fn read_var(name: &str) -> Option<String> {
    let value = match name {
        API_KEY_VAR => option_env!("IDENTITY_API_KEY"),
        ENDPOINT_VAR => option_env!("IDENTITY_ENDPOINT"),
        _ => None,
    };
    value.map(str::to_string)
}
