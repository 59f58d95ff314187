use std::path::Path;

use tracing::warn;

use crate::ai::BotConfig;
use crate::error::ConfigError;
use crate::game::{DEFAULT_COLUMNS, DEFAULT_ROWS, WIN_LENGTH};

/// Board dimensions.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub columns: usize,
    pub rows: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub bot: BotConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.columns == 0 {
            return Err(ConfigError::Validation(
                "board.columns must be >= 1".into(),
            ));
        }
        if self.board.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be >= 1".into()));
        }
        if self.board.columns.max(self.board.rows) < WIN_LENGTH {
            return Err(ConfigError::Validation(format!(
                "board must have at least {} columns or rows",
                WIN_LENGTH
            )));
        }
        if self.bot.forced_move_count == 0 {
            return Err(ConfigError::Validation(
                "bot.forced_move_count must be >= 1".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.board.columns, 7);
        assert_eq!(config.board.rows, 6);
        assert!(config.bot.enabled);
        assert_eq!(config.bot.chaos_one_in, 6);
        assert_eq!(config.bot.forced_move_count, 3);
        assert_eq!(config.bot.seed, None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[bot]
seed = 42
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.bot.seed, Some(42));
        // Other fields should be defaults
        assert!(config.bot.enabled);
        assert_eq!(config.board, BoardConfig::default());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_validation_rejects_zero_columns() {
        let mut config = AppConfig::default();
        config.board.columns = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_rows() {
        let mut config = AppConfig::default();
        config.board.rows = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_board_too_small_to_win() {
        let mut config = AppConfig::default();
        config.board.columns = 3;
        config.board.rows = 3;
        assert!(config.validate().is_err());

        config.board.rows = 4;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_forced_move_count() {
        let mut config = AppConfig::default();
        config.bot.forced_move_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_chaos_is_valid() {
        let mut config = AppConfig::default();
        config.bot.chaos_one_in = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
columns = 9
rows = 7

[bot]
enabled = false
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.columns, 9);
        assert_eq!(config.board.rows, 7);
        assert!(!config.bot.enabled);
        // Others are defaults
        assert_eq!(config.bot.chaos_one_in, 6);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[board]\ncolumns = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));

        std::fs::write(&path, "[board\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
