use std::fs::File;
use std::path::PathBuf;
use clap::Parser;
use log::info;
use election_data_api::config::SourceConfig;
use election_data_api::district_data::ResultSet;
use election_data_api::fetch_district;
use election_data_api::load_reference;
use election_data_api::logging::init_logging;
use election_data_api::parse_util::HttpSource;

/// Download the 2020 election summary for one congressional district as CSV.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// State name or two letter abbreviation. Close misspellings are accepted.
    state: String,
    /// District number, starting at 1.
    district: u32,
    #[clap(short, long)]
    /// Write the CSV here rather than to stdout.
    out: Option<PathBuf>,
    #[clap(short, long)]
    /// Configuration file. Defaults to config.toml if it exists.
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let config = SourceConfig::load(args.config.as_deref())?;
    let source = HttpSource::new(&config)?;
    let table = load_reference(&source,&config)?;
    let (resolved,records) = fetch_district(&source,&config,&table,&args.state,args.district)?;
    info!("Found {} candidates for {}-{} (match confidence {})",records.len(),resolved.abbreviation,resolved.padded_district(),resolved.match_confidence);
    let results = ResultSet::from(records);
    match &args.out {
        Some(path) => results.write_csv(File::create(path)?)?,
        None => results.write_csv(std::io::stdout().lock())?,
    }
    Ok(())
}
