//! From-UUID command.

use anyhow::Result;
use clap::Args;

use super::{resolve_entity, CommandContext, IdRow};
use crate::error::CliError;
use crate::output::print_single;

/// Encode a UUID as an identifier.
#[derive(Debug, Args)]
pub struct FromUuidCommand {
    /// Entity name.
    entity: String,

    /// UUID (hyphenated, simple, braced or urn form).
    uuid: String,
}

impl FromUuidCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let row = self.encode()?;
        print_single(&row, ctx.format);
        Ok(())
    }

    fn encode(&self) -> Result<IdRow, CliError> {
        let entity = resolve_entity(&self.entity)?;
        let id = keel_id::from_uuid(entity, &self.uuid)?;
        Ok(IdRow::from(id))
    }
}
