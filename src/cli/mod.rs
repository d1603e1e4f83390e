mod args;
mod commands;
mod error;

pub(crate) use args::{Cli, PrefixArg};
pub(crate) use commands::Commands;
pub(crate) use error::AppError;
