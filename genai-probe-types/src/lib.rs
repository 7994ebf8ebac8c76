//! Shared types for the Gemini connectivity probe.

mod base64_serde;

pub mod config;
pub mod content;
pub mod enums;
pub mod models;
pub mod response;
