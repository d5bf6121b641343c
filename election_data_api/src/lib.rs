pub mod error;
pub mod config;
pub mod regions;
pub mod parse_util;
pub mod parse_reference_tables;
pub mod resolve;
pub mod district_data;
pub mod retrieve;
pub mod logging;
#[cfg(test)]
mod test_fixtures;

pub use error::{DistrictDataError, Result};
pub use parse_reference_tables::load_reference;
pub use retrieve::{fetch_all, fetch_district};
