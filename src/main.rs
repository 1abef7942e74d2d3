use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use portfolio_dashboard::app::{App, Config, Portfolio, report};

fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    let data = config.load_data()?;
    let portfolio = Portfolio::new(data, config.policy)?;

    if config.plain {
        print!("{}", report::render_plain(&portfolio));
    } else {
        let mut app = App::new(portfolio);
        app.run()?;
    }

    Ok(())
}
