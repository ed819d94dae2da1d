//! Client-side core for the MindEase wellness app: assessment flow, content
//! catalogs, and the typed client for the remote API. Rendering is the shell's job.

pub mod config;
pub mod domain;
pub mod services;
pub mod state;
pub mod telemetry;
