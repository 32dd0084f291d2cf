use crate::consts::cli_consts::{DEFAULT_API_URL, LOCAL_API_URL};
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the SOS feed deployments the dashboard can read from.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// The public flood support API.
    #[default]
    Production,
    /// A dashboard backend running on this machine.
    Local,
    /// Any other deployment, addressed by its full endpoint URL.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the SOS endpoint URL associated with the environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Production => DEFAULT_API_URL.to_string(),
            Environment::Local => LOCAL_API_URL.to_string(),
            Environment::Custom { api_url } => api_url.clone(),
        }
    }

    /// Reads `FLOOD_ENVIRONMENT`, falling back to production when unset or unparsable.
    pub fn from_env() -> Self {
        std::env::var("FLOOD_ENVIRONMENT")
            .unwrap_or_default()
            .parse::<Environment>()
            .unwrap_or_default()
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "local" => Ok(Environment::Local),
            lower if lower.starts_with("http://") || lower.starts_with("https://") => {
                Ok(Environment::Custom {
                    api_url: trimmed.to_string(),
                })
            }
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "Production"),
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}
