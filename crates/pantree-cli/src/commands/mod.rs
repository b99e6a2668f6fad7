//! Command handlers for the pantree CLI.

mod resolve;
mod tree;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the matching command handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Resolve {
            names,
            path,
            indent,
            compact,
        } => {
            let indent = if compact { String::new() } else { indent };
            resolve::exec(&names, &path, &indent).await
        }
        Command::Tree { names, path, depth } => {
            tree::exec(&names, &path, depth.map(|d| d as usize)).await
        }
    }
}
