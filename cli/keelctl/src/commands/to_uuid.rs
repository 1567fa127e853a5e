//! To-UUID command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use super::CommandContext;
use crate::error::CliError;
use crate::output::print_single;

/// Decode an identifier into its UUID.
#[derive(Debug, Args)]
pub struct ToUuidCommand {
    /// Identifier of any registered entity.
    identifier: String,
}

#[derive(Debug, Serialize, Tabled)]
struct UuidRow {
    #[tabled(rename = "UUID")]
    uuid: String,
    #[tabled(rename = "PREFIX")]
    prefix: String,
    #[tabled(rename = "ENTITY")]
    entity: String,
}

impl ToUuidCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let row = decode(&self.identifier)?;
        print_single(&row, ctx.format);
        Ok(())
    }
}

fn decode(identifier: &str) -> Result<UuidRow, CliError> {
    let decoded = keel_id::to_uuid(identifier)?;
    debug!(entity = %decoded.entity, "Decoded identifier");
    Ok(UuidRow {
        uuid: decoded.uuid_string(),
        prefix: decoded.prefix().to_string(),
        entity: decoded.entity.to_string(),
    })
}
