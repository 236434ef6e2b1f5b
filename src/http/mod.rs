mod client;

pub use client::{ACCEPT, HttpClient, USER_AGENT};
