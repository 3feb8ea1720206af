mod config;
mod service;
mod skills;

use anyhow::Result;
use config::Config;
use service::LoaderService;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Create and run the loader service
    let loader = LoaderService::new(config);
    loader.run()
}
