use anyhow::Result;
use std::time::Duration;
use tracing::info;

use crate::http::HttpClient;
use crate::models::{COMMON_ENDPOINTS, FoundEndpoints, PROBE_METHODS, ProbeReport};
use crate::reporter::ConsoleReporter;

pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ProbeConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct Prober {
    client: HttpClient,
    found: FoundEndpoints,
    reporter: ConsoleReporter,
}

impl Prober {
    pub fn new(config: &ProbeConfig) -> Result<Self> {
        let client = HttpClient::new(&config.base_url, config.timeout)?;

        Ok(Self {
            client,
            found: FoundEndpoints::new(),
            reporter: ConsoleReporter::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn found(&self) -> &FoundEndpoints {
        &self.found
    }

    /// One request per method, strictly in order. Never fails: transport errors
    /// end up as `ProbeOutcome::Failure` entries.
    pub async fn probe(&self, path: &str) -> ProbeReport {
        let mut report = ProbeReport::new(path);

        for method in PROBE_METHODS {
            let outcome = self.client.request(method, path).await;
            report.push(method, outcome);
        }

        report
    }

    pub async fn scan_common(&mut self) -> &FoundEndpoints {
        info!(base = self.client.base_url(), "scanning common endpoints");
        self.reporter.print_scan_start();

        for endpoint in COMMON_ENDPOINTS {
            self.reporter.print_trying(endpoint);
            let report = self.probe(endpoint).await;

            for (method, status) in report.found_methods() {
                self.reporter.print_found(method, status);
                self.found.record(endpoint, method);
            }
        }

        info!(found = self.found.len(), "common endpoint scan finished");
        self.reporter.print_summary(&self.found);
        &self.found
    }
}
