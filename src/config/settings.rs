use crate::utils::error::{ExtError, Result};
use crate::utils::validation::{self, Validate};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{OnceLock, RwLock};

static CURRENT: OnceLock<RwLock<Settings>> = OnceLock::new();

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub locale: LocaleSettings,
    pub compression: CompressionSettings,
}

/// Culture-sensitive formatting rules. Defaults follow en-US.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleSettings {
    pub currency_symbol: String,
    pub thousands_separator: String,
    pub decimal_separator: String,
    pub currency_decimals: usize,
    pub week_start: String,
    pub date_format: String,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            currency_decimals: 2,
            week_start: "sunday".to_string(),
            date_format: "%m/%d/%Y".to_string(),
        }
    }
}

impl LocaleSettings {
    /// 解析週起始日，無法辨識時退回週日
    pub fn first_day_of_week(&self) -> Weekday {
        self.week_start.parse().unwrap_or(Weekday::Sun)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionSettings {
    pub level: u32,
}

impl Default for CompressionSettings {
    fn default() -> Self {
        Self { level: 6 }
    }
}

impl Settings {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ExtError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ExtError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CURRENCY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| ExtError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Snapshot of the process-wide settings.
    pub fn current() -> Settings {
        let lock = CURRENT.get_or_init(|| RwLock::new(Settings::default()));
        match lock.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Replaces the process-wide settings after validating them.
    pub fn install(settings: Settings) -> Result<()> {
        settings.validate()?;
        let lock = CURRENT.get_or_init(|| RwLock::new(Settings::default()));
        let mut guard = match lock.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        tracing::debug!("Installing settings: {:?}", settings);
        *guard = settings;
        Ok(())
    }
}

impl Validate for LocaleSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("locale.decimal_separator", &self.decimal_separator)?;
        validation::validate_range("locale.currency_decimals", self.currency_decimals, 0, 10)?;
        validation::validate_non_empty_string("locale.date_format", &self.date_format)?;

        if self.week_start.parse::<Weekday>().is_err() {
            return Err(ExtError::invalid_value(
                "locale.week_start",
                &self.week_start,
                "Unknown weekday name",
            ));
        }

        Ok(())
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        self.locale.validate()?;
        validation::validate_range("compression.level", self.compression.level, 0, 9)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_partial_settings() {
        let toml_content = r#"
[locale]
currency_symbol = "€"
thousands_separator = "."
decimal_separator = ","
week_start = "monday"
"#;

        let settings = Settings::from_toml_str(toml_content).unwrap();

        assert_eq!(settings.locale.currency_symbol, "€");
        assert_eq!(settings.locale.currency_decimals, 2);
        assert_eq!(settings.locale.first_day_of_week(), Weekday::Mon);
        assert_eq!(settings.compression.level, 6);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("EXTKIT_TEST_CURRENCY", "£");

        let toml_content = r#"
[locale]
currency_symbol = "${EXTKIT_TEST_CURRENCY}"
"#;

        let settings = Settings::from_toml_str(toml_content).unwrap();
        assert_eq!(settings.locale.currency_symbol, "£");

        std::env::remove_var("EXTKIT_TEST_CURRENCY");
    }

    #[test]
    fn test_settings_validation() {
        let toml_content = r#"
[compression]
level = 12
"#;

        let settings = Settings::from_toml_str(toml_content).unwrap();
        assert!(settings.validate().is_err());

        let bad_weekday = Settings::from_toml_str("[locale]\nweek_start = \"someday\"\n").unwrap();
        assert!(bad_weekday.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = Settings::from_toml_str("[locale\n");
        assert!(matches!(result, Err(ExtError::ConfigError { .. })));
    }

    #[test]
    fn test_settings_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[compression]\nlevel = 9\n")
            .unwrap();

        let settings = Settings::from_file(temp_file.path()).unwrap();
        assert_eq!(settings.compression.level, 9);
    }
}
