use std::{collections::HashMap, path::PathBuf};

use config::{Environment, File};
use masking::Secret;
use serde::Deserialize;
use verifier_env::{config::Log, env};

use crate::core::errors::{ApplicationError, ApplicationResult};

/// Command line arguments accepted by the service binary.
#[derive(clap::Parser, Default, Debug)]
#[command(version, about = "Connector webhook signature verification service")]
pub struct CmdLineConf {
    /// Config file.
    /// The application looks for `config/<RUN_ENV>.toml` relative to the
    /// workspace root if this option isn't specified.
    #[arg(short = 'f', long, value_name = "FILE")]
    pub config_path: Option<PathBuf>,
}

/// Application settings.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
    pub server: Server,
    pub log: Log,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Server {
    pub port: u16,
    pub host: String,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            port: 8080,
            host: String::from("127.0.0.1"),
        }
    }
}

impl Settings {
    pub fn new() -> ApplicationResult<Self> {
        Self::with_config_path(None)
    }

    pub fn with_config_path(config_path: Option<PathBuf>) -> ApplicationResult<Self> {
        let environment = env::which();
        let config_path = config_path.unwrap_or_else(|| {
            let mut config_dir = env::workspace_path();
            config_dir.push("config");
            config_dir.push(format!("{}.toml", environment.to_string().to_lowercase()));
            config_dir
        });

        // Values from the environment override values from the file.
        let config = config::Config::builder()
            .add_source(File::from(config_path).required(false))
            .add_source(
                Environment::with_prefix("WEBHOOK_VERIFIER")
                    .try_parsing(true)
                    .separator("__"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn validate(&self) -> ApplicationResult<()> {
        if self.server.host.is_empty() {
            return Err(ApplicationError::InvalidConfigurationValueError(
                "server host must not be empty".into(),
            ));
        }
        Ok(())
    }
}

const FALLBACK_SECRET_PREFIX: &str = "CONNECTOR_";
const FALLBACK_SECRET_SUFFIX: &str = "_WEBHOOK_SECRET";

/// Process-wide fallback webhook secrets, captured from
/// `CONNECTOR_<NAME>_WEBHOOK_SECRET` environment variables once at startup
/// and injected into credential resolution, keyed by lowercased connector
/// name. Resolution never touches `std::env` directly.
#[derive(Clone, Debug, Default)]
pub struct FallbackWebhookSecrets(HashMap<String, Secret<String>>);

impl FallbackWebhookSecrets {
    /// Captures all matching variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_pairs(std::env::vars())
    }

    /// Builds the lookup table from explicit name/value pairs.
    pub fn from_pairs(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        Self(
            vars.into_iter()
                .filter_map(|(name, value)| {
                    let connector = name
                        .strip_prefix(FALLBACK_SECRET_PREFIX)?
                        .strip_suffix(FALLBACK_SECRET_SUFFIX)?;
                    if connector.is_empty() || value.is_empty() {
                        return None;
                    }
                    Some((connector.to_lowercase(), Secret::new(value)))
                })
                .collect(),
        )
    }

    /// Looks up the fallback secret for a connector, honoring the
    /// `CONNECTOR_<CONNECTOR_NAME_UPPERCASED>_WEBHOOK_SECRET` contract.
    pub fn get(&self, connector_name: &str) -> Option<Secret<String>> {
        self.0.get(&connector_name.to_lowercase()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use masking::PeekInterface;

    use super::FallbackWebhookSecrets;

    #[test]
    fn captures_only_connector_webhook_secret_variables() {
        let secrets = FallbackWebhookSecrets::from_pairs([
            ("CONNECTOR_STRIPE_WEBHOOK_SECRET".to_string(), "whsec_env".to_string()),
            ("CONNECTOR_ADYEN_API_KEY".to_string(), "not_a_webhook_secret".to_string()),
            ("PATH".to_string(), "/usr/bin".to_string()),
            ("CONNECTOR__WEBHOOK_SECRET".to_string(), "nameless".to_string()),
        ]);

        assert_eq!(
            secrets.get("stripe").map(|secret| secret.peek().clone()),
            Some("whsec_env".to_string())
        );
        assert_eq!(secrets.get("adyen"), None);
    }

    #[test]
    fn lookup_is_case_insensitive_on_connector_name() {
        let secrets = FallbackWebhookSecrets::from_pairs([(
            "CONNECTOR_CHECKOUT_WEBHOOK_SECRET".to_string(),
            "cko_env".to_string(),
        )]);

        assert!(secrets.get("Checkout").is_some());
        assert!(secrets.get("CHECKOUT").is_some());
    }
}
