//! Where the reference tables and district data come from.
//!
//! Every field has a default, so a config file is only needed to override something.
//! ```toml
//! user_agent = "my-scraper/0.1; me@example.com"
//!
//! [columns]
//! abbreviation = "ANSI"
//! ```

use std::path::Path;
use serde::Deserialize;
use url::Url;
use crate::error::{DistrictDataError, Result};

pub const CONFIG_FILE_NAME: &str = "config.toml";

const ABBREVIATIONS_URL : &str = "https://en.wikipedia.org/wiki/List_of_U.S._state_and_territory_abbreviations";
const SEATS_URL : &str = "https://en.wikipedia.org/wiki/2020_United_States_House_of_Representatives_elections";
const DISTRICT_CSV_BASE_URL : &str = "https://www.opensecrets.org/races/summary.csv?cycle=2020&id=";
const DEFAULT_USER_AGENT : &str = "election-data-api/0.1 (district election summaries)";

#[derive(Deserialize,Debug,Clone,PartialEq,Eq)]
#[serde(default)]
pub struct SourceConfig {
    /// Page with a table of state names and postal abbreviations.
    pub abbreviations_url : String,
    /// Page with a table of the number of House seats per state.
    pub seats_url : String,
    /// The abbreviation and two digit district number are appended to this to get the district CSV.
    pub district_csv_base_url : String,
    pub user_agent : String,
    pub columns : TableColumns,
}

/// Header labels used to find the needed columns in the reference tables.
#[derive(Deserialize,Debug,Clone,PartialEq,Eq)]
#[serde(default)]
pub struct TableColumns {
    pub state_name : String,
    pub abbreviation : String,
    pub seats_state : String,
    pub total_seats : String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            abbreviations_url: ABBREVIATIONS_URL.to_string(),
            seats_url: SEATS_URL.to_string(),
            district_csv_base_url: DISTRICT_CSV_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            columns: TableColumns::default(),
        }
    }
}

impl Default for TableColumns {
    fn default() -> Self {
        TableColumns {
            state_name: "Name".to_string(),
            abbreviation: "USPS".to_string(),
            seats_state: "State".to_string(),
            total_seats: "Total seats".to_string(),
        }
    }
}

impl SourceConfig {
    pub fn from_toml(text:&str) -> Result<Self> {
        let config : SourceConfig = toml::de::from_str(text).map_err(|e|DistrictDataError::Config(e.to_string()))?;
        for url in [&config.abbreviations_url,&config.seats_url,&config.district_csv_base_url] {
            Url::parse(url).map_err(|e|DistrictDataError::Config(format!("{} is not a valid URL: {}",url,e)))?;
        }
        if config.user_agent.trim().is_empty() { return Err(DistrictDataError::Config("user_agent must not be empty".to_string())) }
        Ok(config)
    }

    /// Load from `path` if given (it must exist), else from config.toml if that exists, else use the defaults.
    pub fn load(path:Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None if Path::new(CONFIG_FILE_NAME).exists() => Path::new(CONFIG_FILE_NAME),
            None => return Ok(SourceConfig::default()),
        };
        let text = std::fs::read_to_string(path).map_err(|e|DistrictDataError::Config(format!("Could not read {}: {}",path.display(),e)))?;
        SourceConfig::from_toml(&text)
    }
}
