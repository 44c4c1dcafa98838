//! CLI configuration file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thermocity_components::limits::SliderLimits;
use thermocity_core::errors::ThermoResult;
use thermocity_core::parameters::ModelParameters;

/// Top-level TOML document read by `--config`.
///
/// ```toml
/// [model]
/// tcre = 0.45
/// sample_years = [2024, 2050, 2100]
///
/// [sliders]
/// forest = 400.0
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub model: ModelParameters,
    pub sliders: SliderLimits,
}

impl CliConfig {
    pub fn from_toml_str(s: &str) -> ThermoResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.model.validate()?;
        config.sliders.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ThermoResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thermocity_core::category::Category;

    #[test]
    fn test_empty_config_is_default() {
        let config = CliConfig::from_toml_str("").unwrap();
        assert_eq!(config.model, ModelParameters::default());
        assert_eq!(config.sliders, SliderLimits::default());
    }

    #[test]
    fn test_sections() {
        let config = CliConfig::from_toml_str(
            r#"
            [model]
            current_warming = 1.2

            [sliders]
            forest = 400.0
            "#,
        )
        .unwrap();
        assert_eq!(config.model.current_warming, 1.2);
        assert_eq!(config.sliders.max(Category::Forest), 400.0);
        assert_eq!(config.sliders.max(Category::Ocean), 500.0);
    }

    #[test]
    fn test_negative_slider_max_rejected() {
        let err = CliConfig::from_toml_str("[sliders]\nforest = -50.0\n").unwrap_err();
        assert!(err.to_string().contains("forest"));
    }

    #[test]
    fn test_infinite_slider_max_rejected() {
        assert!(CliConfig::from_toml_str("[sliders]\nocean = inf\n").is_err());
    }

    #[test]
    fn test_invalid_model_rejected() {
        assert!(CliConfig::from_toml_str("[model]\nsample_years = []\n").is_err());
    }
}
