//! Connectivity probe for the Gemini `generateContent` API.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod probe;

#[cfg(test)]
mod test_support;

pub use genai_probe_types as types;

pub use client::{Client, ClientBuilder, HttpOptions};
pub use config::ProbeConfig;
pub use error::{Error, Result};
pub use probe::Probe;
