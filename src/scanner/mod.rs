mod engine;
pub mod interactive;

pub use engine::{DEFAULT_TIMEOUT_SECS, ProbeConfig, Prober};
