//! Dotenv-format files as a configuration source.
//!
//! Loading a file never modifies the process environment; the values live in
//! an [`EnvFile`] that can be layered over [`ProcessEnv`](crate::ProcessEnv).
//!
//! `$VAR` and `${VAR}` in unquoted or double-quoted values are expanded from the
//! process environment, and unset variables expand to nothing. Single-quote a
//! value to keep it literal: `DISABLED_TOOLS='Run$Scan,Exec'`.

use std::collections::HashMap;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use thiserror::Error;

use crate::source::ConfigSource;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Env file parse error: {0}")]
    Dotenv(#[from] dotenvy::Error),
}

/// Variables loaded from a dotenv-format file.
#[derive(Debug, Clone, Default)]
pub struct EnvFile {
    vars: HashMap<String, String>,
}

impl EnvFile {
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl FromIterator<(String, String)> for EnvFile {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

impl ConfigSource for EnvFile {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Load variables from a dotenv-format file, falling back to an empty set if not found.
pub fn load_env_file(path: &Path) -> Result<EnvFile, ConfigError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(
                "Env file not found at {}, using process environment only",
                path.display()
            );
            return Ok(EnvFile::default());
        }
        Err(e) => return Err(e.into()),
    };

    let env = dotenvy::from_read_iter(file).collect::<Result<EnvFile, _>>()?;
    if env.is_empty() {
        tracing::warn!("Env file {} defines no variables", path.display());
    } else {
        tracing::debug!("Loaded {} variables from {}", env.len(), path.display());
    }
    Ok(env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::ToolFilter;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let env = load_env_file(&dir.path().join("absent.env")).unwrap();
        assert!(env.is_empty());
    }

    #[test]
    fn test_load_disabled_tools_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "# operator overrides\nDISABLED_TOOLS=\"ExecuteTerraformCommand, RunCheckovScan\"\nOTHER=1\n",
        )
        .unwrap();

        let env = load_env_file(&path).unwrap();
        assert_eq!(env.len(), 2);
        assert_eq!(env.get("OTHER"), Some("1".into()));

        let filter = ToolFilter::new(env);
        assert!(!filter.is_enabled("ExecuteTerraformCommand"));
        assert!(!filter.is_enabled("RunCheckovScan"));
        assert!(filter.is_enabled("SearchAwsProviderDocs"));
    }

    #[test]
    fn test_file_layered_over_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "DISABLED_TOOLS=RunCheckovScan\n").unwrap();

        let env = load_env_file(&path).unwrap();
        let fallback = |_: &str| Some("ExecuteTerraformCommand".to_string());
        let filter = ToolFilter::new(crate::Layered::new(env, fallback));
        assert!(!filter.is_enabled("RunCheckovScan"));
        assert!(filter.is_enabled("ExecuteTerraformCommand"));
    }

    #[test]
    fn test_unopenable_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let not_a_dir = dir.path().join("plain");
        std::fs::write(&not_a_dir, "").unwrap();

        let err = load_env_file(&not_a_dir.join(".env")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_empty_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "# nothing here\n").unwrap();

        assert!(load_env_file(&path).unwrap().is_empty());
    }

    #[test]
    fn test_dollar_expanded_unless_single_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "DISABLED_TOOLS=Run$TOOLSWITCHUNSETVAR_X,Exec\nLITERAL='Run$TOOLSWITCHUNSETVAR_X,Exec'\n",
        )
        .unwrap();

        let env = load_env_file(&path).unwrap();
        assert_eq!(env.get("DISABLED_TOOLS"), Some("Run_X,Exec".into()));
        assert_eq!(
            env.get("LITERAL"),
            Some("Run$TOOLSWITCHUNSETVAR_X,Exec".into())
        );
    }

    #[test]
    fn test_malformed_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "NOT VALID LINE\n").unwrap();

        let err = load_env_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Dotenv(_)));
    }
}
