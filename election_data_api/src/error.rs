//! Errors that can occur while loading reference data or fetching district data.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DistrictDataError>;

#[derive(Error, Debug)]
pub enum DistrictDataError {
    /// A document could not be downloaded, or the server did not answer with a success status.
    #[error("Could not retrieve {url}: {reason}")]
    SourceUnavailable { url: String, reason: String },

    /// A document was retrieved, but did not contain the expected table or columns.
    #[error("Could not parse {document}: {reason}")]
    ParseError { document: String, reason: String },

    #[error("No state could be found under the name '{0}'. Please use a full abbreviation or state name.")]
    InvalidStateInput(String),

    #[error("{}", district_out_of_range_message(.state_name, .district, .seat_count))]
    DistrictOutOfRange { state_name: String, district: u32, seat_count: u32 },

    #[error("No close match found for '{input}' (closest was '{best}' with score {score}). Please check your input.")]
    NoCloseMatch { input: String, best: String, score: u8 },

    #[error("No data found for state '{0}'. Please use a valid state abbreviation.")]
    UnknownState(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn district_out_of_range_message(state_name:&str,district:&u32,seat_count:&u32) -> String {
    if *district==0 { "District numbers must be greater than 0.".to_string() }
    else if *seat_count==1 { format!("'{}' only has {} district.",state_name,seat_count) }
    else { format!("'{}' only has {} districts.",state_name,seat_count) }
}

impl DistrictDataError {
    pub(crate) fn parse(document:&str,reason:impl ToString) -> Self {
        DistrictDataError::ParseError { document: document.to_string(), reason: reason.to_string() }
    }
    pub(crate) fn unavailable(url:&str,reason:impl ToString) -> Self {
        DistrictDataError::SourceUnavailable { url: url.to_string(), reason: reason.to_string() }
    }
}
