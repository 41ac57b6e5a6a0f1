mod args;
mod commands;
mod form;
mod render;
mod setup;
mod util;

pub use args::Cli;
