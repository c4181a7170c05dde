use std::{env, time::Instant};

use anyhow::Context;
use jspdl::{
    config::{Config, USAGE},
    driver::run,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let Some(config) = Config::from_args(env::args().skip(1)) else {
        println!("{}", USAGE);
        return Ok(());
    };

    let start = Instant::now();
    let analysis = run(&config)
        .with_context(|| format!("could not analyze {}", config.source.display()))?;

    println!("Tokenized in {:?}", analysis.lex_time);
    println!("Parsed in {:?}", analysis.parse_time);
    println!("Total time: {:?}", start.elapsed());

    let count = analysis.diagnostics().count();
    if count > 0 {
        println!("{} diagnostics written to {}", count, config.diagnostics.display());
    }

    Ok(())
}
