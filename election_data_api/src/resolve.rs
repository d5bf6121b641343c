//! Turn what a user typed as a state into a known state, and check district numbers against it.
//!
//! Input longer than two characters is matched against full state names; exactly two characters
//! against abbreviations (so a two letter state name could never be matched by name). Matching is
//! approximate, see [name_matching].

use log::warn;
use crate::error::{DistrictDataError, Result};
use crate::regions::{Abbreviation, ReferenceTable, StateRecord};

/// A single lookup accepts its best match whatever the score, but reports any match scoring below this.
pub const SINGLE_LOOKUP_NOTICE_SCORE : u8 = 100;
/// Looking up a list of states to fetch rejects any match scoring below this.
pub const BATCH_LOOKUP_MINIMUM_SCORE : u8 = 80;

/// A state found from user input.
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct ResolvedState<'a> {
    pub record : &'a StateRecord,
    /// 0 to 100; 100 means an exact match.
    pub match_confidence : u8,
}

impl <'a> ResolvedState<'a> {
    pub fn abbreviation(&self) -> &'a Abbreviation { &self.record.abbreviation }
}

/// A resolved state together with a checked district number.
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct ResolvedDistrict {
    pub abbreviation : Abbreviation,
    pub district_number : u32,
    pub match_confidence : u8,
}

impl ResolvedDistrict {
    /// The district as used in URLs and output, e.g. `03`.
    pub fn padded_district(&self) -> String { padded_district(self.district_number) }
}

/// At least two digits, zero padded.
pub fn padded_district(district:u32) -> String { format!("{:02}",district) }

/// Find the closest state, as long as it scores at least `minimum_score`.
pub fn resolve_with_minimum_score<'a>(state_input:&str,table:&'a ReferenceTable,minimum_score:u8) -> Result<ResolvedState<'a>> {
    let length = state_input.chars().count();
    if length<2 { return Err(DistrictDataError::InvalidStateInput(state_input.to_string())) }
    let by_name = length>2;
    let best = if by_name {
        name_matching::extract_one(state_input,table.states().iter().map(|s|s.full_name.as_str()))
    } else {
        name_matching::extract_one(state_input,table.states().iter().map(|s|s.abbreviation.as_str()))
    }.ok_or_else(||DistrictDataError::InvalidStateInput(state_input.to_string()))?;
    let record = &table.states()[best.index];
    if best.score<minimum_score {
        let closest = if by_name { record.full_name.clone() } else { record.abbreviation.to_string() };
        return Err(DistrictDataError::NoCloseMatch { input: state_input.to_string(), best: closest, score: best.score });
    }
    if best.score<SINGLE_LOOKUP_NOTICE_SCORE {
        if by_name { warn!("No state by the name '{}'. Assuming you meant '{}'.",state_input,record.full_name); }
        else { warn!("No state abbreviation by the name '{}'. Assuming you meant '{}'.",state_input,record.abbreviation); }
    }
    Ok(ResolvedState{ record, match_confidence: best.score })
}

/// Find the closest state. Never fails for lack of a good match; inexact matches are reported with a warning.
pub fn resolve<'a>(state_input:&str,table:&'a ReferenceTable) -> Result<ResolvedState<'a>> {
    resolve_with_minimum_score(state_input,table,0)
}

/// Check that `district` is between 1 and the number of seats of the state with that abbreviation.
pub fn validate(abbreviation:&str,district:u32,table:&ReferenceTable) -> Result<()> {
    let state = table.by_abbreviation(abbreviation).ok_or_else(||DistrictDataError::UnknownState(abbreviation.to_string()))?;
    if district<1 || district>state.seat_count {
        return Err(DistrictDataError::DistrictOutOfRange { state_name: state.full_name.clone(), district, seat_count: state.seat_count });
    }
    Ok(())
}

/// Resolve the state, then validate the district for it.
pub fn resolve_district(state_input:&str,district:u32,table:&ReferenceTable) -> Result<ResolvedDistrict> {
    let state = resolve(state_input,table)?;
    validate(state.abbreviation().as_str(),district,table)?;
    Ok(ResolvedDistrict{ abbreviation: state.abbreviation().clone(), district_number: district, match_confidence: state.match_confidence })
}
