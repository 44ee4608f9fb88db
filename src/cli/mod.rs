mod account;
mod analyze;
mod args;
mod commands;
mod config_cmd;
mod render;
mod setup;
mod util;

pub use args::Cli;
