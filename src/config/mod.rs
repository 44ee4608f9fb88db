//! Configuration for the hackbuddy CLI.
//!
//! Settings are layered: built-in defaults, then `~/.hackbuddy/config`
//! (JSON), then environment variables. The API key is never compiled in.

mod builder;
mod constants;
mod defaults;
mod environment;
mod loader;
mod types;
mod validation;

pub use types::{Config, ExportSettings, LlmSettings, ModelSettings};

pub use constants::{API_KEY_ENV_VAR, DEFAULT_TIMEOUT_SECS};

#[cfg(test)]
mod tests;
