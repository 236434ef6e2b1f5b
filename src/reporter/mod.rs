mod console;

pub use console::{ConsoleReporter, NOTHING_FOUND};
