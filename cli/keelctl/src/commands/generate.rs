//! Generate command.

use anyhow::Result;
use clap::Args;
use tracing::info;

use super::{resolve_entity, CommandContext, IdRow};
use crate::error::CliError;
use crate::output::print_output;

/// Upper bound on `--count`.
const MAX_COUNT: usize = 1000;

/// Generate fresh identifiers.
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Entity name (e.g. workspace, payment_intent).
    entity: String,

    /// Number of identifiers to generate.
    #[arg(long, short = 'n', default_value_t = 1)]
    count: usize,
}

impl GenerateCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let rows = self.rows()?;
        print_output(&rows, ctx.format);
        Ok(())
    }

    fn rows(&self) -> Result<Vec<IdRow>, CliError> {
        let entity = resolve_entity(&self.entity)?;
        if self.count == 0 || self.count > MAX_COUNT {
            return Err(CliError::InvalidCount {
                max: MAX_COUNT,
                actual: self.count,
            });
        }

        info!(entity = %entity, count = self.count, "Generating identifiers");
        Ok((0..self.count)
            .map(|_| IdRow::from(keel_id::generate(entity)))
            .collect())
    }
}
