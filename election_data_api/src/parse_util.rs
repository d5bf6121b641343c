//! Utilities for parse_reference_tables.rs and district_data.rs

use itertools::Itertools;
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use scraper::{ElementRef, Html, Selector};
use crate::config::SourceConfig;
use crate::error::{DistrictDataError, Result};

/// Somewhere documents can be retrieved from by URL.
pub trait DocumentSource {
    /// Get the whole document as text. Fails with SourceUnavailable if it can't be retrieved.
    fn get_text(&self,url:&str) -> Result<String>;
}

/// Download over HTTP(S), one request per document, with the configured (polite) user agent.
pub struct HttpSource {
    client : Client,
}

impl HttpSource {
    pub fn new(config:&SourceConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent).map_err(|e|DistrictDataError::Config(format!("Invalid user agent: {}",e)))?);
        let client = Client::builder().default_headers(headers).build().map_err(|e|DistrictDataError::Config(e.to_string()))?;
        Ok(HttpSource{client})
    }
}

impl DocumentSource for HttpSource {
    fn get_text(&self,url:&str) -> Result<String> {
        info!("Downloading {}",url);
        let response = self.client.get(url).send().map_err(|e|DistrictDataError::unavailable(url,e))?;
        let status = response.status();
        if !status.is_success() { return Err(DistrictDataError::unavailable(url,format!("HTTP status {}",status))) }
        response.text().map_err(|e|DistrictDataError::unavailable(url,e))
    }
}

static FOOTNOTE : Lazy<Regex> = Lazy::new(||Regex::new(r"\[[^\]]*\]").unwrap());

/// Clean up text from a table cell: remove footnote markers like `[a]` or `[12]`, and collapse whitespace (including non-breaking spaces).
pub fn clean_cell_text(s:&str) -> String {
    let without_footnotes = FOOTNOTE.replace_all(s,"");
    without_footnotes.split_whitespace().join(" ")
}

/// An html table expanded into a grid, so that cells spanning several rows or columns are repeated in each.
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct HtmlTable {
    /// Leading rows with no `td` cells.
    pub header_rows : Vec<Vec<String>>,
    pub rows : Vec<Vec<String>>,
}

fn span(cell:&ElementRef,attribute:&str) -> usize {
    cell.value().attr(attribute).and_then(|v|v.trim().parse::<usize>().ok()).filter(|&n|n>0).unwrap_or(1)
}

impl HtmlTable {
    pub fn from_element(table:ElementRef) -> Self {
        let select_tr = Selector::parse("tr").unwrap();
        let mut header_rows = Vec::new();
        let mut rows = Vec::new();
        // For each column, text still to be repeated below, and how many more rows.
        let mut pending : Vec<Option<(String,usize)>> = Vec::new();
        for tr in table.select(&select_tr) {
            let cells : Vec<ElementRef> = tr.children().filter_map(ElementRef::wrap).filter(|e|matches!(e.value().name(),"td"|"th")).collect();
            let is_header = !cells.iter().any(|c|c.value().name()=="td");
            let mut cells = cells.into_iter();
            let mut row = Vec::new();
            let mut col = 0;
            loop {
                if let Some(slot) = pending.get_mut(col) {
                    if let Some((text,left)) = slot.take() {
                        row.push(text.clone());
                        if left>1 { *slot=Some((text,left-1)); }
                        col+=1;
                        continue;
                    }
                }
                match cells.next() {
                    Some(cell) => {
                        let text = clean_cell_text(&cell.text().collect::<String>());
                        let rowspan = span(&cell,"rowspan");
                        for _ in 0..span(&cell,"colspan") {
                            if rowspan>1 {
                                if pending.len()<=col { pending.resize(col+1,None); }
                                pending[col]=Some((text.clone(),rowspan-1));
                            }
                            row.push(text.clone());
                            col+=1;
                        }
                    }
                    None if col<pending.len() && pending[col..].iter().any(|p|p.is_some()) => { row.push(String::new()); col+=1; }
                    None => break,
                }
            }
            if row.is_empty() { continue; }
            if is_header && rows.is_empty() { header_rows.push(row) } else { rows.push(row) }
        }
        HtmlTable{header_rows,rows}
    }

    /// All tables in the document with the given css selector, e.g. `table.wikitable`.
    pub fn all_in_document(html:&Html,selector:&str) -> Vec<HtmlTable> {
        match Selector::parse(selector) {
            Ok(selector) => html.select(&selector).map(HtmlTable::from_element).collect(),
            Err(_) => vec![],
        }
    }

    /// Index of the first column with the given header label (ignoring case) in any header row.
    pub fn find_column(&self,label:&str) -> Option<usize> {
        let width = self.header_rows.iter().map(|r|r.len()).max().unwrap_or(0);
        (0..width).find(|&col|self.header_rows.iter().any(|r|r.get(col).map(|h|h.eq_ignore_ascii_case(label)).unwrap_or(false)))
    }

    pub fn cell(row:&[String],col:usize) -> &str {
        row.get(col).map(|s|s.as_str()).unwrap_or("")
    }
}
