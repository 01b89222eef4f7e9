use anyhow::Result;

use super::args::{Arguments, Command};
use crate::core::{GenerateContext, GenerateResult};

/// Dispatch to the appropriate command handler based on the parsed arguments.
pub fn run(Arguments { command }: Arguments) -> Result<GenerateResult> {
    match command {
        Some(Command::Generate(cmd)) => {
            let ctx = GenerateContext::new(&cmd.args)?;
            ctx.run()
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
