use std::fs::File;
use std::io::{self, BufReader};

use docmap_eval::{CliError, Config, run};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env();
    match execute(&config) {
        Ok(0) => {}
        Ok(failures) => {
            tracing::warn!(failures, "some cases failed");
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("docmap-eval: {e}");
            std::process::exit(1);
        }
    }
}

fn execute(config: &Config) -> Result<usize, CliError> {
    let stdout = io::stdout().lock();
    match &config.input {
        Some(path) => run(config, BufReader::new(File::open(path)?), stdout),
        None => run(config, io::stdin().lock(), stdout),
    }
}
