// file: src/config/loader.rs
// version: 1.0.0
// guid: 3c6cf64a-66ea-41f8-8b34-164a8c36eb96

//! Configuration file loading and environment variable substitution

use super::RunnerConfig;
use crate::error::{ConfigureError, Result};
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new config loader seeded with the process environment
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Load a runner configuration from a YAML or TOML file.
    ///
    /// The format follows the file extension: `.yaml`/`.yml` or `.toml`.
    pub fn load_runner_config<P: AsRef<Path>>(&self, path: P) -> Result<RunnerConfig> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigureError::config(format!(
                "Failed to read runner config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let expanded = self.expand_env_vars(&content)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let config: RunnerConfig = match extension.as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&expanded)?,
            Some("toml") => toml::from_str(&expanded)?,
            _ => {
                return Err(ConfigureError::config(format!(
                    "Unsupported config file format: {}",
                    path.display()
                )))
            }
        };

        config.validate()?;
        debug!("Loaded runner config from {}", path.display());

        Ok(config)
    }

    /// Expand `${VAR}` references in configuration content
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ConfigureError::config(format!("Invalid regex pattern: {}", e)))?;

        let mut missing_vars = Vec::new();
        let expanded = re.replace_all(content, |cap: &regex::Captures| {
            match self.env_vars.get(&cap[1]) {
                Some(value) => value.clone(),
                None => {
                    missing_vars.push(cap[1].to_string());
                    String::new()
                }
            }
        });

        if !missing_vars.is_empty() {
            missing_vars.sort();
            missing_vars.dedup();
            return Err(ConfigureError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(expanded.into_owned())
    }

    /// Set environment variable for substitution
    pub fn set_env_var(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.env_vars.insert(key.into(), value.into());
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn write_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_env_var_expansion() {
        let mut loader = ConfigLoader::new();
        loader.set_env_var("TEST_VAR", "test_value");

        let result = loader.expand_env_vars("user: ${TEST_VAR}").unwrap();
        assert_eq!(result, "user: test_value");
    }

    #[test]
    fn test_missing_env_var() {
        let loader = ConfigLoader::new();
        let result = loader.expand_env_vars("user: ${CWS_SURELY_UNSET_VAR}");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Missing environment variables: CWS_SURELY_UNSET_VAR"));
    }

    #[test]
    fn test_missing_env_var_reported_once() {
        let loader = ConfigLoader::new();
        let err = loader
            .expand_env_vars("${CWS_X_UNSET} ${CWS_Y_UNSET} ${CWS_X_UNSET}")
            .unwrap_err();
        assert!(err
            .to_string()
            .ends_with("Missing environment variables: CWS_X_UNSET, CWS_Y_UNSET"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let file = write_config(".yaml", "argv: [echo, hi]\nuse_sudo: true\n");
        let err = ConfigLoader::new().load_runner_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("use_sudo"));
    }

    #[test]
    fn test_load_yaml_config() -> Result<()> {
        let mut loader = ConfigLoader::new();
        loader.set_env_var("DEPLOY_USER", "deploy");

        let file = write_config(
            ".yaml",
            r#"
argv: ["systemctl", "enable", "--now", "nginx"]
use_elevation: true
elevation_user: ${DEPLOY_USER}
set_home_on_elevation: true
"#,
        );

        let config = loader.load_runner_config(file.path())?;
        assert_eq!(config.argv, ["systemctl", "enable", "--now", "nginx"]);
        assert!(config.use_elevation);
        assert_eq!(config.elevation_user, "deploy");
        assert!(config.set_home_on_elevation);
        assert!(config.kill_elevation_cred);

        Ok(())
    }

    #[test]
    fn test_load_toml_config() -> Result<()> {
        let file = write_config(
            ".toml",
            r#"
argv = ["locale-gen", "en_US.UTF-8"]
kill_elevation_cred = false
elevation_executable = "/usr/local/bin/sudo"
encoding = "latin1"
"#,
        );

        let config = ConfigLoader::new().load_runner_config(file.path())?;
        assert_eq!(config.argv, ["locale-gen", "en_US.UTF-8"]);
        assert!(!config.kill_elevation_cred);
        assert_eq!(config.elevation().executable.to_str(), Some("/usr/local/bin/sudo"));
        assert_eq!(config.output_encoding()?.name(), "windows-1252");

        Ok(())
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_config(".ini", "argv = true\n");
        let err = ConfigLoader::new().load_runner_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Unsupported config file format"));
    }

    #[test]
    fn test_invalid_config_fails_validation() {
        let file = write_config(".yml", "use_elevation: true\n");
        assert!(ConfigLoader::new().load_runner_config(file.path()).is_err());
    }
}
