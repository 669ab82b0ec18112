//! Engine configuration loaded from the environment.

use std::env;

use crate::openness::{FormulaVersion, FormulaVersionError};

const DEFAULT_PRECISION: u32 = 3;

/// Tunables for the scoring engine and its telemetry.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Formula applied to monitorings created without an explicit version.
    pub default_formula: FormulaVersion,
    /// Decimal places for openness values at the presentation boundary.
    pub display_precision: u32,
    pub log_level: String,
}

impl EngineConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let default_formula = match env::var("OPENMON_FORMULA") {
            Ok(value) => {
                let code = value
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| ConfigError::InvalidFormulaCode(value.clone()))?;
                FormulaVersion::from_code(code)?
            }
            Err(_) => FormulaVersion::V8,
        };

        let display_precision = match env::var("OPENMON_PRECISION") {
            Ok(value) => value
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidPrecision(value.clone()))?,
            Err(_) => DEFAULT_PRECISION,
        };

        let log_level = env::var("OPENMON_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            default_formula,
            display_precision,
            log_level,
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_formula: FormulaVersion::V8,
            display_precision: DEFAULT_PRECISION,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("OPENMON_FORMULA must be a numeric expression code, got '{0}'")]
    InvalidFormulaCode(String),
    #[error(transparent)]
    UnknownFormula(#[from] FormulaVersionError),
    #[error("OPENMON_PRECISION must be a small non-negative integer, got '{0}'")]
    InvalidPrecision(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("OPENMON_FORMULA");
        env::remove_var("OPENMON_PRECISION");
        env::remove_var("OPENMON_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = EngineConfig::load().expect("config loads with defaults");
        assert_eq!(config.default_formula, FormulaVersion::V8);
        assert_eq!(config.display_precision, 3);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn formula_code_is_validated() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("OPENMON_FORMULA", "1");
        let config = EngineConfig::load().expect("v1 accepted");
        assert_eq!(config.default_formula, FormulaVersion::V1);

        env::set_var("OPENMON_FORMULA", "7");
        assert!(matches!(
            EngineConfig::load(),
            Err(ConfigError::UnknownFormula(FormulaVersionError::UnknownCode(7)))
        ));
        reset_env();
    }
}
