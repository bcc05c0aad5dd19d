use crate::core::{ConfigProvider, ErrorPolicy, Operation, OutputFormat};
use crate::utils::error::{OpsError, Result};
use crate::utils::validation::{validate_not_empty, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub settings: Option<SettingsConfig>,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsConfig {
    pub strict_division: Option<bool>,
    pub on_error: Option<ErrorPolicy>,
    pub output_format: Option<OutputFormat>,
}

impl BatchConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content).map_err(Self::parse_error)?;

        // 先解析再替換，變數內容不會被當作 TOML 語法
        let mut value = toml::Value::Table(table);
        Self::substitute_env_vars(&mut value)?;

        value.try_into().map_err(Self::parse_error)
    }

    fn parse_error(e: toml::de::Error) -> OpsError {
        OpsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        }
    }

    /// 替換字串值中的環境變數 (例如 ${USER})，未設定的變數保留原樣
    fn substitute_env_vars(value: &mut toml::Value) -> Result<()> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| OpsError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        Self::substitute_in_value(&re, value);
        Ok(())
    }

    fn substitute_in_value(re: &Regex, value: &mut toml::Value) {
        match value {
            toml::Value::String(text) => {
                let replaced = re
                    .replace_all(text, |caps: &regex::Captures| {
                        let var_name = &caps[1];
                        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
                    })
                    .into_owned();
                *text = replaced;
            }
            toml::Value::Array(items) => {
                for item in items {
                    Self::substitute_in_value(re, item);
                }
            }
            toml::Value::Table(table) => {
                for (_, item) in table.iter_mut() {
                    Self::substitute_in_value(re, item);
                }
            }
            _ => {}
        }
    }

    /// 套用命令列覆蓋設定
    pub fn apply_overrides(&mut self, strict: bool, format: Option<OutputFormat>) {
        let settings = self.settings.get_or_insert_with(SettingsConfig::default);
        if strict {
            settings.strict_division = Some(true);
        }
        if let Some(format) = format {
            settings.output_format = Some(format);
        }
    }

    fn settings(&self) -> Option<&SettingsConfig> {
        self.settings.as_ref()
    }
}

impl ConfigProvider for BatchConfig {
    fn strict_division(&self) -> bool {
        self.settings().and_then(|s| s.strict_division).unwrap_or(false)
    }

    fn on_error(&self) -> ErrorPolicy {
        self.settings().and_then(|s| s.on_error).unwrap_or_default()
    }

    fn output_format(&self) -> OutputFormat {
        self.settings().and_then(|s| s.output_format).unwrap_or_default()
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<()> {
        validate_not_empty("operations", self.operations.len())
    }
}
