use clap::Parser;
use priceguide_scrape::SnapshotConfig;
use priceguide_scrape::config::{DEFAULT_MAX_WAIT_SECS, DEFAULT_PAGE_FILE};
use std::error::Error;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a price guide page and save its HTML", long_about = None)]
struct Args {
    /// Page to render
    #[arg(default_value = "https://www.psacard.com/priceguide/non-sports-tcg-card-values/7")]
    url: String,

    /// Where to write the rendered HTML
    #[arg(short, long, default_value = DEFAULT_PAGE_FILE)]
    output: String,

    /// Seconds to wait for the sets table
    #[arg(short, long, default_value_t = DEFAULT_MAX_WAIT_SECS)]
    wait: u64,

    /// Path to a JSON snapshot configuration file
    #[arg(short, long)]
    config_file: Option<String>,

    /// Run the browser without a window
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();

    let mut config = match &args.config_file {
        Some(path) => {
            println!("Loading configuration from file: {}", path);
            SnapshotConfig::from_file(path)?
        }
        None => SnapshotConfig::default(),
    }
    .with_max_wait(args.wait);

    if args.headless {
        config.flags.headless = true;
    }

    // Override the WebDriver URL with an environment variable if provided
    if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
        if !webdriver_url.is_empty() {
            config.webdriver_url = webdriver_url;
        }
    }

    println!("Note: capturing requires a running WebDriver server (e.g., ChromeDriver).");
    println!("Using WebDriver at {}", config.webdriver_url);

    let page = priceguide_scrape::capture_with_config(&args.url, &args.output, &config).await?;
    println!("Saved {} bytes from {} to {}", page.markup.len(), page.url, args.output);

    Ok(())
}
