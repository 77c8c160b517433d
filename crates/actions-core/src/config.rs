use crate::error::{ActionError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// LoggerConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default = "default_steps")]
    pub steps: u32,
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

fn default_steps() -> u32 {
    10
}

fn default_interval_ms() -> u64 {
    1000
}

impl LoggerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            interval_ms: default_interval_ms(),
        }
    }
}

// ---------------------------------------------------------------------------
// FortuneConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FortuneConfig {
    #[serde(default = "default_fortune")]
    pub text: String,
}

fn default_fortune() -> String {
    "Fortune favours the brave.".to_string()
}

impl Default for FortuneConfig {
    fn default() -> Self {
        Self {
            text: default_fortune(),
        }
    }
}

// ---------------------------------------------------------------------------
// ComboConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComboConfig {
    #[serde(default = "default_combo_count")]
    pub count: u32,
}

fn default_combo_count() -> u32 {
    3
}

impl Default for ComboConfig {
    fn default() -> Self {
        Self {
            count: default_combo_count(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logger: LoggerConfig,
    #[serde(default)]
    pub fortune: FortuneConfig,
    #[serde(default)]
    pub combo: ComboConfig,
}

impl Config {
    /// Load a config file. A missing or empty file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_yaml::to_string(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.logger.steps < 2 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!(
                    "logger.steps={} must be at least 2 so the logger action shows progress",
                    self.logger.steps
                ),
            });
        }

        if self.logger.interval_ms > 60_000 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "logger.interval_ms={} (>60s is unusual)",
                    self.logger.interval_ms
                ),
            });
        }

        if self.fortune.text.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "fortune.text must not be empty".to_string(),
            });
        }

        if self.combo.count == 0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "combo.count is 0: the combo action will tell no fortunes".to_string(),
            });
        }

        warnings
    }

    /// Fail if validation produced any error-level finding.
    pub fn ensure_valid(&self) -> Result<()> {
        let errors: Vec<String> = self
            .validate()
            .into_iter()
            .filter(|w| w.level == WarnLevel::Error)
            .map(|w| w.message)
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ActionError::InvalidConfig(errors.join("; ")))
        }
    }
}
