use crate::driver::TraversalMode;
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use trivia_linter::{all_rule_ids, LintConfig};

/// Host configuration for an analysis run
///
/// ```yaml
/// traversal: parallel
/// lint:
///   rules:
///     IfSpacing: on
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub traversal: TraversalMode,
    #[serde(default)]
    pub lint: LintConfig,
}

/// Load an analysis config from the specified path.
/// Automatically detects the format based on file extension.
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_config(path: &Path) -> Result<AnalysisConfig> {
    tracing::debug!("Reading config file");
    let contents = fs::read_to_string(path)?;
    let config = load_config_from_str(&contents, path)?;
    tracing::info!(
        traversal = ?config.traversal,
        configured_rules = config.lint.rules.len(),
        "Config loaded successfully"
    );
    Ok(config)
}

/// Load an analysis config from a string.
/// The path is used for error messages and format detection.
#[tracing::instrument(skip(contents), fields(path = %path.display(), size = contents.len()))]
pub fn load_config_from_str(contents: &str, path: &Path) -> Result<AnalysisConfig> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
    tracing::debug!(extension, "Detecting config format");

    let config = match extension {
        "yml" | "yaml" => {
            tracing::trace!("Parsing as YAML");
            parse_yaml(contents, path)?
        }
        "json" => {
            tracing::trace!("Parsing as JSON");
            parse_json(contents, path)?
        }
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };

    validate_config(&config)?;
    Ok(config)
}

fn parse_yaml(contents: &str, path: &Path) -> Result<AnalysisConfig> {
    serde_saphyr::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("YAML parse error: {e}"),
    })
}

fn parse_json(contents: &str, path: &Path) -> Result<AnalysisConfig> {
    serde_json::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("JSON parse error: {e}"),
    })
}

/// Reject rule ids that match no built-in rule
fn validate_config(config: &AnalysisConfig) -> Result<()> {
    let valid = all_rule_ids();
    let unknown = config.lint.unknown_rules(&valid);
    if unknown.is_empty() {
        tracing::debug!("Config validation passed");
        return Ok(());
    }

    Err(ConfigError::UnknownRules {
        rules: unknown.into_iter().map(str::to_string).collect(),
        valid: valid.into_iter().map(str::to_string).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use trivia_linter::RuleSetting;

    #[test]
    fn test_load_yaml() {
        let yaml = r"
traversal: parallel
lint:
  rules:
    IfSpacing: off
";

        let mut file = NamedTempFile::with_suffix(".yml").unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file.flush().unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.traversal, TraversalMode::Parallel);
        assert_eq!(config.lint.setting("IfSpacing"), Some(RuleSetting::Off));
    }

    #[test]
    fn test_load_json() {
        let json = r#"{ "lint": { "rules": { "IfSpacing": true } } }"#;

        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file.flush().unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.traversal, TraversalMode::Sequential);
        assert_eq!(config.lint.setting("IfSpacing"), Some(RuleSetting::On));
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = load_config_from_str("{}", Path::new("trivia.json")).unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(&dir.path().join("missing.yml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = load_config_from_str("traversal: parallel", Path::new("trivia.toml"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_invalid_yaml_reports_path() {
        let result = load_config_from_str("traversal: sideways", Path::new("trivia.yaml"));
        match result {
            Err(ConfigError::Invalid { path, message }) => {
                assert_eq!(path, Path::new("trivia.yaml"));
                assert!(message.starts_with("YAML parse error"), "{message}");
            }
            other => panic!("expected invalid config error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_rules_are_rejected() {
        let json = r#"{ "lint": { "rules": { "IfSpacing": "on", "NoTabs": "off" } } }"#;
        let error = load_config_from_str(json, Path::new("trivia.json")).unwrap_err();
        assert_eq!(
            error.to_string(),
            "unknown lint rule(s): NoTabs. Valid rules: IfSpacing"
        );
    }
}
