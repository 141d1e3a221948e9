use std::fs::File;
use std::io::Read;

use recharge::helpers::RechargeError;
use recharge::modules::recharge::config::ParityFactors;
use recharge::modules::soil::models::SoilTable;
use serde_derive::{Deserialize, Serialize};

const DEFAULT_STORE_PATH: &str = "submissions.jsonl";

fn default_store_path() -> String {
    DEFAULT_STORE_PATH.to_owned()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigContainer {
    /// multipliers to match the reference workbook, identity when omitted
    #[serde(default)]
    pub parity: ParityFactors,
    /// where raw submissions are appended
    #[serde(default = "default_store_path")]
    pub store_path: String,
    /// decimals used for currency values in text reports
    #[serde(default)]
    pub currency_digits: usize,
    /// advisory soil profiles
    #[serde(default)]
    pub soils: SoilTable,
}

impl Default for ConfigContainer {
    fn default() -> Self {
        Self {
            parity: ParityFactors::default(),
            store_path: default_store_path(),
            currency_digits: 0,
            soils: SoilTable::default(),
        }
    }
}

impl ConfigContainer {
    pub fn from_file(config_file: &str) -> Result<ConfigContainer, RechargeError> {
        // Check the file extension to determine which method to use
        if config_file.ends_with(".yaml") || config_file.ends_with(".yml") {
            Self::from_yaml(config_file)
        } else {
            Err(RechargeError::from(format!(
                "Unsupported config file format: {}",
                config_file
            )))
        }
    }

    pub fn from_yaml(config_file: &str) -> Result<Self, RechargeError> {
        let mut file = File::open(config_file)
            .map_err(|err| format!("Cannot open config file {}: {}", config_file, err))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|err| format!("Cannot read config file {}: {}", config_file, err))?;

        Self::from_yaml_str(&contents)
            .map_err(|err| format!("Cannot parse config file {}: {}", config_file, err).into())
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, RechargeError> {
        // an empty document means every default
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let conf = serde_yaml::from_str(contents).map_err(|err| format!("{}", err))?;
        Ok(conf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        let conf = ConfigContainer::from_yaml_str("").expect("should parse");
        assert_eq!(conf, ConfigContainer::default());
        assert!(conf.parity.is_identity());
        assert_eq!(conf.store_path, "submissions.jsonl");
    }

    #[test]
    fn partial_parity_section() {
        let conf = ConfigContainer::from_yaml_str(
            "parity:\n  revenue: 0.98\ncurrency_digits: 2\nsoils:\n  - key: sand\n    label: Sand\n    in_per_day: 6.0\n",
        )
        .expect("should parse");
        assert_eq!(conf.parity.revenue, 0.98);
        assert_eq!(conf.parity.seasonal_af, 1.0);
        assert_eq!(conf.currency_digits, 2);
        assert_eq!(conf.soils.len(), 1);
        assert_eq!(conf.soils.get("SAND").map(|s| s.in_per_day), Some(6.0));
    }

    #[test]
    fn unsupported_extension() {
        assert!(ConfigContainer::from_file("config.txt").is_err());
    }

    #[test]
    fn malformed_yaml() {
        assert!(ConfigContainer::from_yaml_str("parity: [1, 2").is_err());
    }
}
