use std::fs::File;
use std::path::PathBuf;
use clap::Parser;
use election_data_api::config::SourceConfig;
use election_data_api::fetch_all;
use election_data_api::load_reference;
use election_data_api::logging::init_logging;
use election_data_api::parse_util::HttpSource;

/// Download the 2020 election summaries for every district of some (or all) states, as one CSV.
/// This makes one request per district, so all states takes a while.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long, value_delimiter = ',')]
    /// Comma separated state names or abbreviations. All states if not given.
    states: Vec<String>,
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
    let filter = if args.states.is_empty() { None } else { Some(args.states.as_slice()) };
    let results = fetch_all(&source,&config,&table,filter)?;
    match &args.out {
        Some(path) => results.write_csv(File::create(path)?)?,
        None => results.write_csv(std::io::stdout().lock())?,
    }
    Ok(())
}
