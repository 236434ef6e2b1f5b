//! Ad-hoc probing driven by lines read from the user

use std::io::{self, BufRead, Write};
use tracing::debug;

use super::Prober;
use crate::reporter::ConsoleReporter;

const QUIT_WORDS: [&str; 3] = ["quit", "exit", "q"];
const PROMPT: &str = "Endpoint to speculate: ";

pub fn is_quit(input: &str) -> bool {
    let input = input.trim();
    QUIT_WORDS.iter().any(|w| input.eq_ignore_ascii_case(w))
}

/// Reads paths until a quit word or end of input and returns how many were probed.
pub async fn run<R: BufRead>(prober: &Prober, mut input: R) -> io::Result<usize> {
    let reporter = ConsoleReporter::new();
    reporter.print_interactive_hint();

    let mut probed = 0;
    let mut line = String::new();

    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("input closed");
            println!();
            break;
        }

        let endpoint = line.trim();
        if is_quit(endpoint) {
            break;
        }

        let report = prober.probe(endpoint).await;
        reporter.print_report(&report);
        probed += 1;
    }

    Ok(probed)
}
