//! Canned documents and an in-memory document source for tests.

use std::cell::RefCell;
use std::collections::HashMap;
use crate::config::SourceConfig;
use crate::error::{DistrictDataError, Result};
use crate::parse_util::DocumentSource;
use crate::regions::{ReferenceTable, StateRecord};

/// Shaped like the Wikipedia list of abbreviations: two header rows, a status column spanning rows,
/// the country itself as the first row, and territories with missing codes.
pub const ABBREVIATIONS_HTML : &str = r#"<html><body>
<table class="wikitable"><tr><th>Contents</th></tr><tr><td>Something else</td></tr></table>
<table class="wikitable sortable">
<tbody>
<tr><th colspan="2">Name and status of region</th><th rowspan="2">ISO</th><th colspan="2">ANSI</th><th rowspan="2">USPS</th><th rowspan="2">USCG</th><th rowspan="2">GPO</th><th rowspan="2">AP</th><th rowspan="2">Other abbreviations</th></tr>
<tr><th>Name</th><th>Status of region</th><th></th><th></th></tr>
<tr><td><span class="flagicon"></span> <a href="/wiki/United_States">United States of America</a></td><td>Federal state</td><td>US</td><td>US</td><td>00</td><td></td><td></td><td>U.S.</td><td>U.S.</td><td>USA</td></tr>
<tr><td><a href="/wiki/Alabama">Alabama</a></td><td rowspan="6">State</td><td>US-AL</td><td>AL</td><td>01</td><td>AL</td><td>AL</td><td>Ala.</td><td>Ala.</td><td>Alab.</td></tr>
<tr><td><a href="/wiki/Alaska">Alaska</a></td><td>US-AK</td><td>AK</td><td>02</td><td>AK</td><td>AK</td><td>Alaska</td><td>Alaska</td><td>Alas.</td></tr>
<tr><td><a href="/wiki/California">California</a></td><td>US-CA</td><td>CA</td><td>06</td><td>CA</td><td>CF</td><td>Calif.</td><td>Calif.</td><td>Cal.</td></tr>
<tr><td><a href="/wiki/Tennessee">Tennessee</a></td><td>US-TN</td><td>TN</td><td>47</td><td>TN</td><td>TN</td><td>Tenn.</td><td>Tenn.</td><td></td></tr>
<tr><td><a href="/wiki/Texas">Texas</a></td><td>US-TX</td><td>TX</td><td>48</td><td>TX</td><td>TX</td><td>Tex.</td><td>Texas</td><td>Tx.</td></tr>
<tr><td><a href="/wiki/Virginia">Virginia</a></td><td>US-VA</td><td>VA</td><td>51</td><td>VA</td><td>VA</td><td>Va.</td><td>Va.</td><td>Virg.</td></tr>
<tr><td><a href="/wiki/Guam">Guam</a></td><td>Insular area</td><td>US-GU</td><td>GU</td><td>66</td><td>GU</td><td>GU</td><td>Guam</td><td>Guam</td><td></td></tr>
<tr><td><a href="/wiki/Baker_Island">Baker Island</a></td><td>Uninhabited territory</td><td></td><td></td><td>81</td><td></td><td></td><td></td><td></td><td></td></tr>
</tbody></table>
</body></html>"#;

/// Shaped like the seats summary on the 2020 House elections page, including the Total row.
pub const SEATS_HTML : &str = r#"<html><body>
<table class="wikitable"><tr><th>Party</th><th>Votes</th></tr><tr><td>Democratic</td><td>77,483,936</td></tr></table>
<table class="wikitable sortable">
<tr><th rowspan="2">State</th><th rowspan="2">Total seats</th><th colspan="2">Democratic</th><th colspan="2">Republican</th></tr>
<tr><th>Seats</th><th>Change</th><th>Seats</th><th>Change</th></tr>
<tr><td><a href="/wiki/Alabama">Alabama</a></td><td>7</td><td>1</td><td></td><td>6</td><td></td></tr>
<tr><td><a href="/wiki/Alaska">Alaska</a></td><td>1</td><td>0</td><td></td><td>1</td><td></td></tr>
<tr><td><a href="/wiki/California">California</a></td><td>53</td><td>42</td><td>3</td><td>11</td><td>4</td></tr>
<tr><td><a href="/wiki/Tennessee">Tennessee</a></td><td>9</td><td>2</td><td></td><td>7</td><td></td></tr>
<tr><td><a href="/wiki/Texas">Texas</a></td><td>36</td><td>13</td><td></td><td>23</td><td></td></tr>
<tr><td><a href="/wiki/Virginia">Virginia</a><sup>[e]</sup></td><td>11</td><td>7</td><td></td><td>4</td><td></td></tr>
<tr><th>Total</th><td>435</td><td>222</td><td>13</td><td>213</td><td>13</td></tr>
</table>
</body></html>"#;

pub const TN_07_CSV : &str = "FECCandID,FirstLastP,Incumbent,Total\n\
H8TN07076,Mark E Green (R),Y,\"1,234,567\"\n\
H0TN07151,Kiran Sreepada (D),N,\"45,678\"\n";

pub const AK_01_CSV : &str = "FECCandID,FirstLastP,Incumbent,Total\n\
H6AK00045,Don Young (R),Y,\"1,000\"\n";

/// Serves fixed documents by URL, and remembers what was asked for.
#[derive(Default)]
pub struct StaticSource {
    documents : HashMap<String,String>,
    /// Served for any URL not in `documents`.
    fallback : Option<String>,
    pub requests : RefCell<Vec<String>>,
}

impl StaticSource {
    pub fn with(mut self,url:&str,body:&str) -> Self {
        self.documents.insert(url.to_string(),body.to_string());
        self
    }
    pub fn with_fallback(mut self,body:&str) -> Self {
        self.fallback=Some(body.to_string());
        self
    }
    /// The two reference documents at their default URLs.
    pub fn reference() -> Self {
        let config = SourceConfig::default();
        StaticSource::default().with(&config.abbreviations_url,ABBREVIATIONS_HTML).with(&config.seats_url,SEATS_HTML)
    }
}

impl DocumentSource for StaticSource {
    fn get_text(&self,url:&str) -> Result<String> {
        self.requests.borrow_mut().push(url.to_string());
        self.documents.get(url).or(self.fallback.as_ref()).cloned().ok_or_else(||DistrictDataError::unavailable(url,"HTTP status 404 Not Found"))
    }
}

/// The table that the reference documents above should produce.
pub fn reference_table() -> ReferenceTable {
    let states = [("Alabama","AL",7),("Alaska","AK",1),("California","CA",53),("Tennessee","TN",9),("Texas","TX",36),("Virginia","VA",11)];
    ReferenceTable::new(states.iter().map(|&(full_name,abbreviation,seat_count)|StateRecord{ full_name: full_name.to_string(), abbreviation: abbreviation.parse().unwrap(), seat_count }).collect()).unwrap()
}

pub fn district_url(abbreviation_and_district:&str) -> String {
    SourceConfig::default().district_csv_base_url+abbreviation_and_district
}
