//! The public entry points: fetch one district from a loosely typed state and number, or fetch
//! every district of a list of states (or of all states) into one [ResultSet].
//!
//! Everything is sequential. The first failure stops the whole run; there is no partial result.

use itertools::Itertools;
use log::{debug, info};
use crate::config::SourceConfig;
use crate::district_data::{fetch, DistrictRecord, ResultSet};
use crate::error::Result;
use crate::parse_util::DocumentSource;
use crate::regions::{ReferenceTable, StateRecord};
use crate::resolve::{padded_district, resolve_district, resolve_with_minimum_score, validate, ResolvedDistrict, BATCH_LOOKUP_MINIMUM_SCORE};

/// Resolve the state, check the district exists, and fetch its data.
pub fn fetch_district(source:&dyn DocumentSource,config:&SourceConfig,table:&ReferenceTable,state_input:&str,district:u32) -> Result<(ResolvedDistrict,Vec<DistrictRecord>)> {
    let resolved = resolve_district(state_input,district,table)?;
    let records = fetch(source,config,&resolved.abbreviation,district)?;
    Ok((resolved,records))
}

/// Fetch every district of the given states, or of every state in the table if `state_filter` is None.
/// States given more than once (after resolving) are only fetched once.
pub fn fetch_all(source:&dyn DocumentSource,config:&SourceConfig,table:&ReferenceTable,state_filter:Option<&[String]>) -> Result<ResultSet> {
    let states : Vec<&StateRecord> = match state_filter {
        None => table.states().iter().collect(),
        Some(filter) => {
            let resolved = filter.iter().map(|s|resolve_with_minimum_score(s,table,BATCH_LOOKUP_MINIMUM_SCORE).map(|r|r.record)).collect::<Result<Vec<_>>>()?;
            resolved.into_iter().unique_by(|s|s.abbreviation.clone()).collect()
        }
    };
    let mut results = ResultSet::new();
    for state in states {
        info!("Fetching {} districts for {}",state.seat_count,state.full_name);
        for district in 1..=state.seat_count {
            validate(state.abbreviation.as_str(),district,table)?;
            debug!("Fetching {}-{}",state.abbreviation,padded_district(district));
            results.extend(fetch(source,config,&state.abbreviation,district)?);
        }
    }
    info!("Fetched {} rows",results.len());
    Ok(results)
}
