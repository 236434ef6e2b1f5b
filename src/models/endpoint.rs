use serde::{Deserialize, Serialize};
use std::fmt;

pub const COMMON_ENDPOINTS: [&str; 8] = [
    "api", "v1", "users", "products", "auth", "login", "docs", "health",
];

pub const PROBE_METHODS: [HttpMethod; 5] = [
    HttpMethod::Get,
    HttpMethod::Post,
    HttpMethod::Put,
    HttpMethod::Delete,
    HttpMethod::Patch,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        };
        write!(f, "{}", s)
    }
}

impl HttpMethod {
    /// Everything except GET carries the placeholder body.
    pub fn sends_body(&self) -> bool {
        !matches!(self, HttpMethod::Get)
    }
}

/// Minimal JSON object sent with non-GET probes.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceholderBody {
    pub data: &'static str,
}

impl Default for PlaceholderBody {
    fn default() -> Self {
        Self { data: "speculated" }
    }
}
