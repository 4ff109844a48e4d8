//! Job configuration loading.
//!
//! The whole run configuration is one TOML file:
//!
//! ```toml
//! system_type = "SWR-IG"
//! finish = "Clear Anodized"
//! project_name = "Tower Lobby"
//! project_number = "P-1024"
//!
//! [joints]
//! top = 0.5
//! bottom = 0.125
//! left = 0.25
//! right = 0.25
//! ```
//!
//! Everything except `system_type` falls back to the order-form defaults;
//! `glass_offset_custom_in` is only read when `system_type = "Custom"`.

use std::fmt;
use std::fs;
use std::path::Path;

use swrkit_calc::spec::SpecRunConfig;

/// Errors raised while loading the job configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// File read failure.
    Io(std::io::Error),
    /// TOML deserialization failure.
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "Failed to read configuration file: {err}"),
            ConfigError::Parse(err) => write!(f, "Failed to parse configuration: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parse(value)
    }
}

/// Load the run configuration from a TOML file.
pub fn load_run_config(path_file_config: &Path) -> Result<SpecRunConfig, ConfigError> {
    let txt_config = fs::read_to_string(path_file_config)?;
    Ok(toml::from_str(&txt_config)?)
}

#[cfg(test)]
mod tests {
    use swrkit_calc::spec::{EnumFinish, EnumSystemType, SpecRunConfig};

    #[test]
    fn full_configuration_round_trips_through_toml() {
        let txt_config = r#"
system_type = "SWR-VIG"
finish = "Black Anodized"
glass_cutting_tolerance_in = 0.5
project_name = "Tower Lobby"
project_number = "P-1024"

[joints]
top = 0.375
bottom = 0.25
left = 0.125
right = 0.125
"#;

        let config: SpecRunConfig = toml::from_str(txt_config).expect("parse config");

        assert_eq!(config.system_type, EnumSystemType::Vig);
        assert_eq!(config.finish, EnumFinish::BlackAnodized);
        assert_eq!(config.glass_cutting_tolerance_in, 0.5);
        assert_eq!(config.joints.top, 0.375);
        assert_eq!(config.project_number, "P-1024");
        assert_eq!(config.glass_offset_custom_in, None);
    }

    #[test]
    fn minimal_configuration_falls_back_to_form_defaults() {
        let config: SpecRunConfig =
            toml::from_str("system_type = \"SWR\"\n").expect("parse config");

        assert_eq!(config.system_type, EnumSystemType::Plain);
        assert_eq!(config.finish, EnumFinish::MilFinish);
        assert_eq!(config.glass_cutting_tolerance_in, 0.625);
        assert_eq!(config.joints.top, 0.5);
        assert_eq!(config.joints.bottom, 0.125);
        assert_eq!(config.joints.left, 0.25);
        assert_eq!(config.joints.right, 0.25);
        assert!(config.project_name.is_empty());
    }

    #[test]
    fn custom_system_reads_the_user_offset() {
        let txt_config = "system_type = \"Custom\"\nglass_offset_custom_in = 3.25\n";

        let config: SpecRunConfig = toml::from_str(txt_config).expect("parse config");

        assert_eq!(config.system_type, EnumSystemType::Custom);
        assert_eq!(config.glass_offset_custom_in, Some(3.25));
    }
}
