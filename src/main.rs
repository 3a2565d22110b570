use std::path::PathBuf;

use clap::Parser;
use log::info;
use webcode_dbconfig::{load, replace_shared, shared, EnvSource, JsonFileSource, OptionsSource};

/// Resolve and print the active database connection options
#[derive(Parser, Debug)]
#[command(name = "webcode-dbconfig", version, about, long_about = None)]
struct Cli {
    /// JSON settings file, read before the environment
    #[arg(env = "DB_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let file = cli.config.map(JsonFileSource::new);
    let env_source = EnvSource::new();

    let mut sources: Vec<&dyn OptionsSource> = Vec::new();
    if let Some(file) = &file {
        sources.push(file);
    }
    sources.push(&env_source);

    let options = load(&sources)?;
    let kind = options.validate()?;
    info!("Resolved {kind} connection options");

    replace_shared(options);
    println!("{}", serde_json::to_string_pretty(&*shared())?);

    Ok(())
}
