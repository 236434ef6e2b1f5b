use serde::Serialize;
use std::collections::HashMap;

use super::HttpMethod;

pub const PREVIEW_CHARS: usize = 200;
pub const FOUND_BELOW: u16 = 400;
pub const REPORTABLE_BELOW: u16 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum ProbeOutcome {
    Success {
        status: u16,
        headers: HashMap<String, String>,
        preview: Option<String>,
    },
    Failure {
        message: String,
    },
}

impl ProbeOutcome {
    pub fn success(status: u16, headers: HashMap<String, String>, body: &str) -> Self {
        Self::Success {
            status,
            headers,
            preview: Self::preview_of(body),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Success { status, .. } => Some(*status),
            Self::Failure { .. } => None,
        }
    }

    /// Counts towards the found-endpoints summary.
    pub fn is_found(&self) -> bool {
        self.status().is_some_and(|s| s < FOUND_BELOW)
    }

    /// Worth a line in interactive output. Failures always are.
    pub fn is_reportable(&self) -> bool {
        match self {
            Self::Success { status, .. } => *status < REPORTABLE_BELOW,
            Self::Failure { .. } => true,
        }
    }

    fn preview_of(body: &str) -> Option<String> {
        if body.is_empty() {
            return None;
        }
        Some(body.chars().take(PREVIEW_CHARS).collect())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub path: String,
    pub results: Vec<(HttpMethod, ProbeOutcome)>,
}

impl ProbeReport {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            results: Vec::new(),
        }
    }

    pub fn push(&mut self, method: HttpMethod, outcome: ProbeOutcome) {
        self.results.push((method, outcome));
    }

    pub fn get(&self, method: HttpMethod) -> Option<&ProbeOutcome> {
        self.results
            .iter()
            .find(|(m, _)| *m == method)
            .map(|(_, outcome)| outcome)
    }

    /// Methods that answered below 400, in probe order, with their status.
    pub fn found_methods(&self) -> impl Iterator<Item = (HttpMethod, u16)> + '_ {
        self.results
            .iter()
            .filter(|(_, outcome)| outcome.is_found())
            .filter_map(|(method, outcome)| outcome.status().map(|status| (*method, status)))
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FoundEndpoint {
    pub path: String,
    pub methods: Vec<HttpMethod>,
}

/// Paths that answered below 400, kept in the order they were first hit.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FoundEndpoints {
    entries: Vec<FoundEndpoint>,
}

impl FoundEndpoints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, path: &str, method: HttpMethod) {
        match self.entries.iter_mut().find(|e| e.path == path) {
            Some(entry) => entry.methods.push(method),
            None => self.entries.push(FoundEndpoint {
                path: path.to_string(),
                methods: vec![method],
            }),
        }
    }

    pub fn get(&self, path: &str) -> Option<&[HttpMethod]> {
        self.entries
            .iter()
            .find(|e| e.path == path)
            .map(|e| e.methods.as_slice())
    }

    pub fn entries(&self) -> &[FoundEndpoint] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
