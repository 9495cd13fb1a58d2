//! Configuration loading.

use std::path::{Path, PathBuf};

use tracing::warn;

use super::error::ConfigError;
use super::schema::Config;

/// Configuration file search paths, in priority order.
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // Priority 2: environment variable
    if let Ok(path) = std::env::var("VOTEGATE_CONFIG") {
        paths.push(PathBuf::from(path));
    }

    // Priority 3: system default
    paths.push(PathBuf::from("/etc/votegate/config.yaml"));

    // Priority 4: local default
    paths.push(PathBuf::from("./config.yaml"));

    paths
}

/// Find the first existing config file from the search paths.
pub fn find_config_file(explicit_path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    // Priority 1: explicit path from the host
    if let Some(path) = explicit_path {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        return Err(ConfigError::ConfigFileNotFound {
            searched: vec![path.to_path_buf()],
        });
    }

    let paths = default_config_paths();
    for path in &paths {
        if path.exists() {
            return Ok(path.clone());
        }
    }

    Err(ConfigError::ConfigFileNotFound { searched: paths })
}

/// Load configuration from a file path.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path)?;

    if contents.trim().is_empty() {
        return Err(ConfigError::EmptyConfigFile);
    }

    let config: Config = serde_saphyr::from_str(&contents)?;
    Ok(config)
}

/// Load from the search paths, degrading to defaults on any failure.
///
/// Missing or unreadable configuration is a diagnostic, not a failure: the
/// filter decides activation from whatever instructor set it ends up with,
/// and an empty one simply leaves it inactive.
pub fn load_or_default(explicit_path: Option<&Path>) -> Config {
    let path = match find_config_file(explicit_path) {
        Ok(path) => path,
        Err(error) => {
            warn!(%error, "no configuration found, using defaults");
            return Config::default();
        }
    };

    match load_config(&path) {
        Ok(config) => config,
        Err(error) => {
            warn!(path = %path.display(), %error, "could not load configuration, using defaults");
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_config_from_file() {
        let file = write_config("instructors: \"371BA68A,1A2B3C4D\"\n");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.instructor_ids().count(), 2);
    }

    #[test]
    fn test_load_config_empty_file() {
        let file = write_config("  \n");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::EmptyConfigFile)));
    }

    #[test]
    fn test_load_config_malformed_yaml() {
        let file = write_config("instructors: [unclosed\n");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_find_config_file_explicit_missing() {
        let result = find_config_file(Some(Path::new("/nonexistent/votegate.yaml")));
        assert!(matches!(
            result,
            Err(ConfigError::ConfigFileNotFound { ref searched }) if searched.len() == 1
        ));
    }

    #[test]
    fn test_load_or_default_missing_file_degrades() {
        let config = load_or_default(Some(Path::new("/nonexistent/votegate.yaml")));
        assert_eq!(config.instructor_ids().count(), 0);
    }

    #[test]
    fn test_load_or_default_malformed_degrades() {
        let file = write_config(": not yaml : [\n");
        let config = load_or_default(Some(file.path()));
        assert_eq!(config.instructor_ids().count(), 0);
    }

    #[test]
    #[serial_test::serial]
    fn test_env_var_joins_search_paths() {
        let file = write_config("instructors: \"371BA68A\"\n");
        // SAFETY: test is serialized; no other thread reads the environment.
        unsafe {
            std::env::set_var("VOTEGATE_CONFIG", file.path());
        }
        let found = find_config_file(None).unwrap();
        assert_eq!(found, file.path());
        unsafe {
            std::env::remove_var("VOTEGATE_CONFIG");
        }
    }
}
