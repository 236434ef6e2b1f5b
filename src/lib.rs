pub mod cli;
pub mod error;
pub mod http;
pub mod logging;
pub mod models;
pub mod reporter;
pub mod scanner;

pub use error::ProbeError;
pub use models::{FoundEndpoints, HttpMethod, ProbeOutcome, ProbeReport};
pub use reporter::ConsoleReporter;
pub use scanner::{ProbeConfig, Prober};
