use std::path::PathBuf;
use clap::Parser;
use election_data_api::config::SourceConfig;
use election_data_api::load_reference;
use election_data_api::logging::init_logging;
use election_data_api::parse_util::HttpSource;

/// Print the states, abbreviations and number of districts, as found on Wikipedia.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long, action)]
    /// Print as JSON rather than one state per line.
    json: bool,
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
    if args.json {
        println!("{}",serde_json::to_string_pretty(table.states())?);
    } else {
        for state in table.states() {
            println!("{},{},{}",state.abbreviation,state.full_name,state.seat_count);
        }
    }
    Ok(())
}
