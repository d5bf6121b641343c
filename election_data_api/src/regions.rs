//! Political regions - U.S. states, their postal abbreviations and how many House districts each has.

use serde::{Serialize,Deserialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use crate::error::{DistrictDataError, Result};

/// A two letter postal code such as `TN`. Always stored upper case.
#[derive(Debug,Clone,PartialEq,Eq,Hash,PartialOrd,Ord,serde_with::DeserializeFromStr,serde_with::SerializeDisplay)]
pub struct Abbreviation(String);

#[derive(Debug,Clone,PartialEq,Eq)]
pub struct InvalidAbbreviation(pub String);

impl fmt::Display for InvalidAbbreviation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "'{}' is not a two letter abbreviation", self.0)
    }
}

impl FromStr for Abbreviation {
    type Err = InvalidAbbreviation;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.len()==2 && s.chars().all(|c|c.is_ascii_alphabetic()) { Ok(Abbreviation(s.to_ascii_uppercase())) }
        else { Err(InvalidAbbreviation(s.to_string())) }
    }
}

impl fmt::Display for Abbreviation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Abbreviation {
    pub fn as_str(&self) -> &str { &self.0 }
}

/// A state, as found in the reference tables.
#[derive(Debug,Clone,Serialize,Deserialize,Eq,PartialEq)]
pub struct StateRecord {
    pub full_name : String,
    pub abbreviation : Abbreviation,
    /// Number of seats in the House of Representatives, and thus the number of districts.
    pub seat_count : u32,
}

/// All known states, in a fixed order. Built once, then only read.
#[derive(Debug,Clone,Serialize,Eq,PartialEq)]
pub struct ReferenceTable {
    states : Vec<StateRecord>,
}

impl ReferenceTable {
    /// Check that names and abbreviations are unique and every state has at least one seat.
    pub fn new(states:Vec<StateRecord>) -> Result<Self> {
        const DOCUMENT : &str = "reference table";
        if states.is_empty() { return Err(DistrictDataError::parse(DOCUMENT,"no states found")) }
        let mut names = HashSet::new();
        let mut abbreviations = HashSet::new();
        for state in &states {
            if state.seat_count==0 { return Err(DistrictDataError::parse(DOCUMENT,format!("{} has no seats",state.full_name))) }
            if !names.insert(state.full_name.as_str()) { return Err(DistrictDataError::parse(DOCUMENT,format!("duplicate state name {}",state.full_name))) }
            if !abbreviations.insert(&state.abbreviation) { return Err(DistrictDataError::parse(DOCUMENT,format!("duplicate abbreviation {}",state.abbreviation))) }
        }
        Ok(ReferenceTable{states})
    }

    pub fn states(&self) -> &[StateRecord] { &self.states }
    pub fn len(&self) -> usize { self.states.len() }
    pub fn is_empty(&self) -> bool { self.states.is_empty() }

    pub fn by_abbreviation(&self,abbreviation:&str) -> Option<&StateRecord> {
        self.states.iter().find(|s|s.abbreviation.as_str()==abbreviation)
    }

    /// The number of districts in the state with the given abbreviation.
    pub fn seat_count(&self,abbreviation:&str) -> Result<u32> {
        self.by_abbreviation(abbreviation).map(|s|s.seat_count).ok_or_else(||DistrictDataError::UnknownState(abbreviation.to_string()))
    }
}
