//! Configuration schema definitions

use nearby_hours::ParserConfig;
use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub search: SearchConfig,

    /// Hour-string parsing keywords and separators
    #[serde(default)]
    pub hours: ParserConfig,

    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default search parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search radius in kilometers
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,

    /// Maximum number of results
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            radius_km: default_radius_km(),
            limit: default_limit(),
        }
    }
}

fn default_radius_km() -> f64 {
    1.0
}

fn default_limit() -> usize {
    10
}

/// Column names of the point-of-interest CSV file
///
/// Defaults follow the Seoul public parking lot dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Column holding the display name
    #[serde(default = "default_name_column")]
    pub name_column: String,

    /// Column holding latitude in degrees
    #[serde(default = "default_latitude_column")]
    pub latitude_column: String,

    /// Column holding longitude in degrees
    #[serde(default = "default_longitude_column")]
    pub longitude_column: String,

    /// Column holding free-text operating hours, if the dataset has one
    #[serde(default = "default_hours_column")]
    pub hours_column: Option<String>,

    /// Extra columns passed through as display attributes
    #[serde(default = "default_attribute_columns")]
    pub attribute_columns: Vec<String>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            name_column: default_name_column(),
            latitude_column: default_latitude_column(),
            longitude_column: default_longitude_column(),
            hours_column: default_hours_column(),
            attribute_columns: default_attribute_columns(),
        }
    }
}

fn default_name_column() -> String {
    "주차장명".to_string()
}

fn default_latitude_column() -> String {
    "위도".to_string()
}

fn default_longitude_column() -> String {
    "경도".to_string()
}

fn default_hours_column() -> Option<String> {
    Some("운영시간".to_string())
}

fn default_attribute_columns() -> Vec<String> {
    vec!["주소", "전화번호"].into_iter().map(String::from).collect()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
