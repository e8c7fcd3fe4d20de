//! Data source configuration.
//!
//! [`DataConfig`] maps each [`City`] to its CSV file and records whether the source carries
//! demographic columns that need missing-value normalization. It is passed explicitly to the
//! loader; there is no process-wide mapping.
//!
//! A config can be loaded from JSON:
//!
//! ```json
//! {
//!   "data_dir": "/srv/bikeshare",
//!   "cities": {
//!     "chicago": { "file": "chicago.csv", "demographics": true },
//!     "washington": { "file": "washington.csv" }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BikeshareError, BikeshareResult};
use crate::selector::City;

/// Where one city's trips live and how to treat them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitySource {
    /// CSV file, relative to [`DataConfig::data_dir`] unless absolute.
    pub file: PathBuf,
    /// Whether the demographic columns are normalized after loading.
    #[serde(default)]
    pub demographics: bool,
}

impl CitySource {
    /// Source reading `file`, normalized after loading when `demographics` is set.
    pub fn new(file: impl Into<PathBuf>, demographics: bool) -> Self {
        Self {
            file: file.into(),
            demographics,
        }
    }
}

/// City-to-source mapping for the loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    pub cities: BTreeMap<City, CitySource>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for DataConfig {
    fn default() -> Self {
        let cities = BTreeMap::from([
            (City::Chicago, CitySource::new("chicago.csv", true)),
            (City::NewYorkCity, CitySource::new("new_york_city.csv", true)),
            (City::Washington, CitySource::new("washington.csv", false)),
        ]);
        Self {
            data_dir: default_data_dir(),
            cities,
        }
    }
}

impl DataConfig {
    /// Default mapping rooted at `data_dir`.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Read a JSON config file.
    pub fn from_json_path(path: impl AsRef<Path>) -> BikeshareResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text).map_err(|message| BikeshareError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    fn from_json_str(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| e.to_string())
    }

    /// Configured source for `city`.
    pub fn source(&self, city: City) -> BikeshareResult<&CitySource> {
        self.cities
            .get(&city)
            .ok_or(BikeshareError::CityNotConfigured { city })
    }

    /// Resolved path of `city`'s CSV file.
    pub fn path_for(&self, city: City) -> BikeshareResult<PathBuf> {
        Ok(self.data_dir.join(&self.source(city)?.file))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{CitySource, DataConfig};
    use crate::error::BikeshareError;
    use crate::selector::City;

    #[test]
    fn default_config_covers_all_cities() {
        let cfg = DataConfig::default();
        for city in City::ALL {
            assert!(cfg.source(city).is_ok(), "{city} missing");
        }
        assert!(cfg.source(City::Chicago).unwrap().demographics);
        assert!(cfg.source(City::NewYorkCity).unwrap().demographics);
        assert!(!cfg.source(City::Washington).unwrap().demographics);
    }

    #[test]
    fn path_for_joins_data_dir() {
        let cfg = DataConfig::with_data_dir("/data");
        assert_eq!(
            cfg.path_for(City::NewYorkCity).unwrap(),
            PathBuf::from("/data/new_york_city.csv")
        );
    }

    #[test]
    fn json_config_parses_snake_case_city_keys() {
        let cfg = DataConfig::from_json_str(
            r#"{"cities": {"washington": {"file": "dc.csv"}, "new_york_city": {"file": "nyc.csv", "demographics": true}}}"#,
        )
        .unwrap();
        assert_eq!(cfg.data_dir, PathBuf::from("."));
        assert_eq!(cfg.source(City::Washington).unwrap(), &CitySource::new("dc.csv", false));
        assert!(cfg.source(City::NewYorkCity).unwrap().demographics);
        assert!(matches!(
            cfg.source(City::Chicago),
            Err(BikeshareError::CityNotConfigured { city: City::Chicago })
        ));
    }

    #[test]
    fn json_config_rejects_unknown_city() {
        let err = DataConfig::from_json_str(r#"{"cities": {"boston": {"file": "b.csv"}}}"#)
            .unwrap_err();
        assert!(err.contains("boston"), "{err}");
    }
}
