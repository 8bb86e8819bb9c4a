pub mod case;
pub mod config;
pub mod error;

pub use case::{Case, Outcome, run};
pub use config::Config;
pub use error::CliError;
