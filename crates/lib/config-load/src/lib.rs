//! Configuration loading orchestration for earbud-tray.

use std::path::PathBuf;

use config_core::Config;

/// The env var that overrides the config file location.
pub const ENV_VAR: &str = "EARBUD_TRAY_CONFIG";

/// Load configuration using the standard earbud-tray configuration loading process.
#[cfg(feature = "env")]
pub async fn with_default_env_var() -> Result<Loaded, WithDefaultEnvVarError> {
    let env_path = envfury::maybe(ENV_VAR).map_err(WithDefaultEnvVarError::Env)?;
    with(env_path)
        .await
        .map_err(WithDefaultEnvVarError::Resolver)
}

/// Errors that can occur during configuration loading.
#[cfg(feature = "env")]
#[derive(Debug, thiserror::Error)]
pub enum WithDefaultEnvVarError {
    /// Env variable reading error.
    #[error("config path env var read: {0}")]
    Env(#[source] envfury::Error<envfury::ValueError<<PathBuf as std::str::FromStr>::Err>>),

    /// Resolving configuration error.
    #[error(transparent)]
    Resolver(#[from] config_locate::LoadError<YamlError>),
}

/// A loaded configuration and the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    /// The configuration.
    pub config: Config,

    /// The file read; `None` when no file existed and defaults were used.
    pub path: Option<PathBuf>,
}

impl Loaded {
    /// Whether the app runs without any config file yet, i.e. for the first time.
    pub fn is_first_run(&self) -> bool {
        self.path.is_none()
    }
}

/// Load configuration using the standard earbud-tray configuration loading process but
/// with a custom env path value.
///
/// When no config file exists at all, the defaults are used.
pub async fn with(
    env_path: Option<PathBuf>,
) -> Result<Loaded, config_locate::LoadError<YamlError>> {
    let paths: Vec<PathBuf> = config_paths::resolve(env_path).collect();
    match config_locate::load(&paths, |s| config_yaml::parse_str(&s)).await {
        Ok(located) => {
            tracing::info!(message = "Loaded config", path = %located.path.display());
            Ok(Loaded {
                config: located.payload,
                path: Some(located.path),
            })
        }
        Err(error) if error.is_not_found() => {
            tracing::info!(message = "No config file found, using defaults", ?paths);
            Ok(Loaded {
                config: Config::default(),
                path: None,
            })
        }
        Err(error) => Err(error),
    }
}

/// A convenience type-alias for the YAML parser error type.
pub type YamlError = serde_yaml_bw::Error;
