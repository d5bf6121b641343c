//! Per district election summaries, as CSV files from OpenSecrets.
//!
//! Each CSV has one row per candidate, with the candidate name and party combined in one column,
//! e.g. `Jane Doe (D)`. This is split into a name column and a party column, and every row is
//! tagged with the state abbreviation and district.

use std::io::Write;
use itertools::Itertools;
use log::debug;
use serde::Serialize;
use crate::config::SourceConfig;
use crate::error::{DistrictDataError, Result};
use crate::parse_util::DocumentSource;
use crate::regions::Abbreviation;
use crate::resolve::padded_district;

/// Column in the downloaded CSV holding name and party.
pub const COMBINED_NAME_COLUMN : &str = "FirstLastP";
pub const NAME_COLUMN : &str = "FirstLast";
pub const PARTY_COLUMN : &str = "Party";
pub const STATE_COLUMN : &str = "State_Abbreviation";
pub const DISTRICT_COLUMN : &str = "District";
const ADDED_COLUMNS : [&str;4] = [STATE_COLUMN,DISTRICT_COLUMN,NAME_COLUMN,PARTY_COLUMN];

/// One candidate in one district.
#[derive(Debug,Clone,Serialize,PartialEq,Eq)]
pub struct DistrictRecord {
    pub state_abbreviation : Abbreviation,
    /// two digits, e.g. `07`
    pub district : String,
    pub candidate_name : String,
    pub party : String,
    /// All other columns from the CSV, in their original order, as (heading,value).
    pub fields : Vec<(String,String)>,
    /// Where in `fields` the name and party columns were.
    #[serde(skip)]
    name_position : usize,
}

impl DistrictRecord {
    /// Column headings and values in output order: state, district, then the CSV columns with the name and party in place of the combined column.
    pub fn row(&self) -> Vec<(&str,&str)> {
        let mut res = vec![(STATE_COLUMN,self.state_abbreviation.as_str()),(DISTRICT_COLUMN,self.district.as_str())];
        let (before,after) = self.fields.split_at(self.name_position.min(self.fields.len()));
        res.extend(before.iter().map(|(h,v)|(h.as_str(),v.as_str())));
        res.push((NAME_COLUMN,self.candidate_name.as_str()));
        res.push((PARTY_COLUMN,self.party.as_str()));
        res.extend(after.iter().map(|(h,v)|(h.as_str(),v.as_str())));
        res
    }
}

/// Split `Jane Doe (D)` into (`Jane Doe`,`D`). The party is the last word, without any parentheses.
pub fn split_name_and_party(combined:&str) -> (String,String) {
    let mut words : Vec<&str> = combined.split_whitespace().collect();
    match words.pop() {
        Some(last) => (words.join(" "),last.replace(['(',')'],"")),
        None => (String::new(),String::new()),
    }
}

/// The URL for one district's CSV.
pub fn district_url(config:&SourceConfig,abbreviation:&Abbreviation,district:u32) -> String {
    format!("{}{}{}",config.district_csv_base_url,abbreviation,padded_district(district))
}

/// Parse the text of a district CSV. `url` is only used for error messages.
pub fn parse_district_csv(text:&str,abbreviation:&Abbreviation,district:u32,url:&str) -> Result<Vec<DistrictRecord>> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headings = reader.headers().map_err(|e|DistrictDataError::parse(url,e))?.clone();
    let name_position = headings.iter().position(|h|h==COMBINED_NAME_COLUMN).ok_or_else(||DistrictDataError::parse(url,format!("no column {}",COMBINED_NAME_COLUMN)))?;
    // these headings are added to every record, so must not already be there.
    if let Some(clash) = headings.iter().find(|h|ADDED_COLUMNS.contains(h)) {
        return Err(DistrictDataError::parse(url,format!("column {} is already present",clash)));
    }
    let district = padded_district(district);
    let mut res = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e|DistrictDataError::parse(url,e))?;
        let (candidate_name,party) = split_name_and_party(&record[name_position]);
        let fields = headings.iter().zip(record.iter()).enumerate().filter(|(i,_)|*i!=name_position).map(|(_,(h,v))|(h.to_string(),v.to_string())).collect();
        res.push(DistrictRecord{ state_abbreviation: abbreviation.clone(), district: district.clone(), candidate_name, party, fields, name_position });
    }
    Ok(res)
}

/// Download and parse one district's CSV. No checks are made on the district number here; see [crate::resolve::validate].
pub fn fetch(source:&dyn DocumentSource,config:&SourceConfig,abbreviation:&Abbreviation,district:u32) -> Result<Vec<DistrictRecord>> {
    let url = district_url(config,abbreviation,district);
    let text = source.get_text(&url)?;
    let records = parse_district_csv(&text,abbreviation,district,&url)?;
    debug!("Found {} candidates for {}-{}",records.len(),abbreviation,padded_district(district));
    Ok(records)
}

/// All the records fetched, in order.
#[derive(Debug,Clone,Default,PartialEq,Eq)]
pub struct ResultSet {
    records : Vec<DistrictRecord>,
}

impl ResultSet {
    pub fn new() -> Self { ResultSet::default() }
    pub fn extend(&mut self,records:impl IntoIterator<Item=DistrictRecord>) { self.records.extend(records) }
    pub fn records(&self) -> &[DistrictRecord] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// All column headings of all records, in order of first appearance.
    pub fn columns(&self) -> Vec<String> {
        self.records.iter().flat_map(|r|r.row().into_iter().map(|(h,_)|h.to_string())).unique().collect()
    }

    /// Write as CSV with a heading line. Missing columns for a record are left empty.
    pub fn write_csv(&self,writer:impl Write) -> Result<()> {
        let columns = self.columns();
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(&columns)?;
        for record in &self.records {
            let row = record.row();
            writer.write_record(columns.iter().map(|c|row.iter().find(|(h,_)|h==c).map(|(_,v)|*v).unwrap_or("")))?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl From<Vec<DistrictRecord>> for ResultSet {
    fn from(records:Vec<DistrictRecord>) -> Self { ResultSet{records} }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{district_url as fixture_url, StaticSource, TN_07_CSV, AK_01_CSV};

    fn tn() -> Abbreviation { "TN".parse().unwrap() }

    #[test]
    fn test_split_name_and_party() {
        assert_eq!(("Jane Doe".to_string(),"D".to_string()),split_name_and_party("Jane Doe (D)"));
        assert_eq!(("Mark E Green".to_string(),"R".to_string()),split_name_and_party(" Mark  E Green (R) "));
        assert_eq!(("Someone".to_string(),"3rd".to_string()),split_name_and_party("Someone (3rd)"));
        assert_eq!((String::new(),"Smith".to_string()),split_name_and_party("Smith"));
        assert_eq!((String::new(),String::new()),split_name_and_party("  "));
    }

    #[test]
    fn test_url() {
        let config = SourceConfig::default();
        assert_eq!("https://www.opensecrets.org/races/summary.csv?cycle=2020&id=TN07",district_url(&config,&tn(),7));
        assert_eq!(fixture_url("CA12"),district_url(&config,&"CA".parse().unwrap(),12));
    }

    #[test]
    fn test_parse() {
        let records = parse_district_csv(TN_07_CSV,&tn(),7,"test").unwrap();
        assert_eq!(2,records.len());
        let first = &records[0];
        assert_eq!("TN",first.state_abbreviation.as_str());
        assert_eq!("07",first.district);
        assert_eq!("Mark E Green",first.candidate_name);
        assert_eq!("R",first.party);
        assert!(first.fields.contains(&("Total".to_string(),"1,234,567".to_string())));
        assert!(first.fields.iter().all(|(h,_)|h!=COMBINED_NAME_COLUMN));
        let headings : Vec<&str> = first.row().into_iter().map(|(h,_)|h).collect();
        assert_eq!(vec!["State_Abbreviation","District","FECCandID","FirstLast","Party","Incumbent","Total"],headings);
        assert_eq!("D",records[1].party);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_district_csv("FECCandID,Name\nX,Y\n",&tn(),7,"test"),Err(DistrictDataError::ParseError{..})));
        assert!(matches!(parse_district_csv("",&tn(),7,"test"),Err(DistrictDataError::ParseError{..})));
        assert!(matches!(parse_district_csv("FirstLastP,Total\nJane Doe (D),1,2\n",&tn(),7,"test"),Err(DistrictDataError::ParseError{..})));
        // a header with no rows is just an uncontested (or empty) district.
        assert!(parse_district_csv("FirstLastP,Total\n",&tn(),7,"test").unwrap().is_empty());
    }

    #[test]
    fn test_added_columns_must_be_new() {
        for heading in ["State_Abbreviation","District","FirstLast","Party"] {
            let text = format!("FirstLastP,{}\nJane Doe (D),Democratic\n",heading);
            match parse_district_csv(&text,&tn(),7,"test") {
                Err(DistrictDataError::ParseError{reason,..}) => assert!(reason.contains(heading)),
                other => panic!("Expected ParseError for {}, got {:?}",heading,other),
            }
        }
        assert!(matches!(parse_district_csv("FirstLastP,Party,District\nJane Doe (D),Democratic,7\n",&tn(),7,"test"),Err(DistrictDataError::ParseError{..})));
    }

    #[test]
    fn test_fetch_is_repeatable() {
        let source = StaticSource::default().with(&fixture_url("TN07"),TN_07_CSV);
        let config = SourceConfig::default();
        let first = fetch(&source,&config,&tn(),7).unwrap();
        let second = fetch(&source,&config,&tn(),7).unwrap();
        assert_eq!(first,second);
        assert!(matches!(fetch(&source,&config,&tn(),8),Err(DistrictDataError::SourceUnavailable{..})));
    }

    #[test]
    fn test_write_csv() {
        let mut results = ResultSet::new();
        results.extend(parse_district_csv(AK_01_CSV,&"AK".parse().unwrap(),1,"test").unwrap());
        results.extend(parse_district_csv("FirstLastP,Votes\nJane Doe (D),12\n",&tn(),3,"test").unwrap());
        let mut out = Vec::new();
        results.write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!("State_Abbreviation,District,FECCandID,FirstLast,Party,Incumbent,Total,Votes\n\
AK,01,H6AK00045,Don Young,R,Y,\"1,000\",\n\
TN,03,,Jane Doe,D,,,12\n",text);
    }
}
