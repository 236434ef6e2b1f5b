mod endpoint;
mod result;

pub use endpoint::{COMMON_ENDPOINTS, HttpMethod, PROBE_METHODS, PlaceholderBody};
pub use result::{
    FOUND_BELOW, FoundEndpoint, FoundEndpoints, PREVIEW_CHARS, ProbeOutcome, ProbeReport,
    REPORTABLE_BELOW,
};
