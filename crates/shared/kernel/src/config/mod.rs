use config::{Case, Config, Environment, File};
use ridge_domain::constants::{DEFAULT_CONFIG_NAME, ENV_PREFIX, ENV_SEPARATOR};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

#[ridge_derive::ridge_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from a config file overlaid with `RIDGE__*` environment variables.
///
/// Layering, lowest priority first:
/// 1. **Defaults** from `T`'s `#[serde(default)]` implementations.
/// 2. **File**: `path` when given (must exist), otherwise the optional `demo.*`
///    file in the working directory. Any format the `config` crate knows is accepted.
/// 3. **Environment**: `RIDGE__SERVER__PORT=8080` maps to `server.port`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source
/// cannot be parsed, or the merged values do not fit `T`.
///
/// # Example
/// ```rust
/// use ridge_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let required = path.is_some();
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_NAME), |p| p.as_ref().to_path_buf());

    info!(path = %effective_path.display(), required, "Loading config");

    Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .convert_case(Case::Snake)
                .try_parsing(true),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ridge_domain::config::DemoConfig;
    use serial_test::serial;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn test_explicit_file_is_loaded() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let file = dir.path().join("demo.toml");
        fs::write(&file, "[server]\nport = 4100\n\n[assets]\ntailwind = \"/static/tw.js\"\n")?;

        let cfg: DemoConfig = load_config(Some(&file))?;
        assert_eq!(cfg.server.port, 4100);
        assert_eq!(cfg.assets.tailwind.as_deref(), Some("/static/tw.js"));
        Ok(())
    }

    #[test]
    #[serial]
    fn test_missing_explicit_file_fails() {
        let result = load_config::<DemoConfig>(Some("definitely/not/here.toml"));
        assert!(matches!(result, Err(ConfigError::Config { context: Some(_), .. })));
    }

    #[test]
    #[serial]
    fn test_missing_default_file_yields_defaults() -> Result<(), ConfigError> {
        let cfg: DemoConfig = load_config(None::<&Path>)?;
        assert_eq!(cfg.server.port, 3000);
        Ok(())
    }
}
