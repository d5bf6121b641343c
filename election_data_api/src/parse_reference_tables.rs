//! Build the [ReferenceTable] of states from two Wikipedia pages:
//! * the list of U.S. state and territory abbreviations, giving the name and postal code of each state.
//! * the 2020 House of Representatives elections page, giving the total number of seats for each state.
//!
//! The two tables are joined on the state name, in the order of the seats table. Rows only present
//! in one table (territories, the country itself, the `Total` row) are dropped.

use std::collections::HashMap;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use crate::config::SourceConfig;
use crate::error::{DistrictDataError, Result};
use crate::parse_util::{DocumentSource, HtmlTable};
use crate::regions::{Abbreviation, ReferenceTable, StateRecord};

const TABLE_SELECTOR : &str = "table.wikitable";

/// Find the first wikitable with both columns, returning it and the two column indices.
fn find_table_with_columns(html:&str,document:&str,first:&str,second:&str) -> Result<(HtmlTable,usize,usize)> {
    let html = Html::parse_document(html);
    for table in HtmlTable::all_in_document(&html,TABLE_SELECTOR) {
        if let (Some(col1),Some(col2)) = (table.find_column(first),table.find_column(second)) {
            return Ok((table,col1,col2));
        }
    }
    Err(DistrictDataError::parse(document,format!("no table with columns '{}' and '{}'",first,second)))
}

/// Parse the abbreviations page into (full name, abbreviation) pairs. Rows without a valid two letter code are skipped.
pub fn parse_abbreviation_table(html:&str,config:&SourceConfig) -> Result<Vec<(String,Abbreviation)>> {
    let (table,col_name,col_abbreviation) = find_table_with_columns(html,&config.abbreviations_url,&config.columns.state_name,&config.columns.abbreviation)?;
    let mut res = Vec::new();
    for row in &table.rows {
        let name = HtmlTable::cell(row,col_name);
        if name.is_empty() { continue; }
        match HtmlTable::cell(row,col_abbreviation).parse::<Abbreviation>() {
            Ok(abbreviation) => res.push((name.to_string(),abbreviation)),
            Err(e) => debug!("Skipping {} : {}",name,e),
        }
    }
    Ok(res)
}

static FIRST_NUMBER : Lazy<Regex> = Lazy::new(||Regex::new(r"\d+").unwrap());

/// Parse the elections page into (full name, total seats) pairs. Rows without a number of seats are skipped.
pub fn parse_seat_table(html:&str,config:&SourceConfig) -> Result<Vec<(String,u32)>> {
    let (table,col_state,col_seats) = find_table_with_columns(html,&config.seats_url,&config.columns.seats_state,&config.columns.total_seats)?;
    let mut res = Vec::new();
    for row in &table.rows {
        let name = HtmlTable::cell(row,col_state);
        let seats = FIRST_NUMBER.find(HtmlTable::cell(row,col_seats)).and_then(|m|m.as_str().parse::<u32>().ok());
        match seats {
            Some(seats) if !name.is_empty() => res.push((name.to_string(),seats)),
            _ => debug!("Skipping seats row {:?}",row),
        }
    }
    Ok(res)
}

/// Join on full name, keeping the order of the seats. States with no abbreviation or zero seats are dropped.
pub fn join_tables(abbreviations:Vec<(String,Abbreviation)>,seats:Vec<(String,u32)>) -> Result<ReferenceTable> {
    let abbreviations : HashMap<String,Abbreviation> = abbreviations.into_iter().collect();
    let states = seats.into_iter().filter(|(_,seat_count)|*seat_count>0).filter_map(|(full_name,seat_count)|{
        let abbreviation = abbreviations.get(&full_name)?.clone();
        Some(StateRecord{full_name,abbreviation,seat_count})
    }).collect();
    ReferenceTable::new(states)
}

/// Download both pages and build the reference table. No retries; any failure is returned.
pub fn load_reference(source:&dyn DocumentSource,config:&SourceConfig) -> Result<ReferenceTable> {
    let abbreviations = parse_abbreviation_table(&source.get_text(&config.abbreviations_url)?,config)?;
    let seats = parse_seat_table(&source.get_text(&config.seats_url)?,config)?;
    let table = join_tables(abbreviations,seats)?;
    info!("Loaded {} states",table.len());
    Ok(table)
}
