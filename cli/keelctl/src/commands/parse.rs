//! Parse command.

use anyhow::Result;
use clap::Args;

use super::{resolve_entity, CommandContext, IdRow};
use crate::error::CliError;
use crate::output::print_single;

/// Parse an identifier for an entity and show its parts.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Entity name.
    entity: String,

    /// Identifier to parse.
    identifier: String,
}

impl ParseCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let row = self.row()?;
        print_single(&row, ctx.format);
        Ok(())
    }

    fn row(&self) -> Result<IdRow, CliError> {
        let entity = resolve_entity(&self.entity)?;
        let id = keel_id::parse(entity, &self.identifier)?;
        Ok(IdRow::from(id))
    }
}
