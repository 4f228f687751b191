use clap::Parser;
use priceguide_scrape::ExtractConfig;
use priceguide_scrape::config::{DEFAULT_LINKS_FILE, DEFAULT_PAGE_FILE};
use std::error::Error;

#[derive(Parser, Debug)]
#[command(author, version, about = "Extract set links from a saved price guide page", long_about = None)]
struct Args {
    /// HTML file written by the capture step
    #[arg(short, long, default_value = DEFAULT_PAGE_FILE)]
    input: String,

    /// Where to write the JSON list of links
    #[arg(short, long, default_value = DEFAULT_LINKS_FILE)]
    output: String,

    /// Path to a JSON extraction configuration file
    #[arg(short, long)]
    config_file: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();

    let config = match &args.config_file {
        Some(path) => ExtractConfig::from_file(path)?,
        None => ExtractConfig::default(),
    };

    let links = priceguide_scrape::extract_with_config(&args.input, &args.output, &config)?;
    println!("Wrote {} links to {}", links.len(), args.output);

    Ok(())
}
