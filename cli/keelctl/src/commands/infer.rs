//! Infer command.

use anyhow::Result;
use clap::Args;

use super::entities::EntityRow;
use super::CommandContext;
use crate::error::CliError;
use crate::output::print_single;

/// Show which entity an identifier belongs to.
#[derive(Debug, Args)]
pub struct InferCommand {
    /// Identifier of any registered entity.
    identifier: String,
}

impl InferCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let row = self.row()?;
        print_single(&row, ctx.format);
        Ok(())
    }

    fn row(&self) -> Result<EntityRow, CliError> {
        let entity = keel_id::infer_entity(&self.identifier)?;
        Ok(EntityRow::from(entity))
    }
}

#[cfg(test)]
mod tests {
    use keel_id::{Entity, IdError};

    use super::*;

    fn command(identifier: &str) -> InferCommand {
        InferCommand {
            identifier: identifier.to_string(),
        }
    }

    #[test]
    fn infers_entity_of_generated_identifier() {
        let id = keel_id::generate(Entity::Conversation).to_string();
        let row = command(&id).row().unwrap();
        assert_eq!(row.name, "conversation");
        assert_eq!(row.prefix, "cnv");
    }

    #[test]
    fn unknown_prefix_is_invalid_id() {
        assert!(matches!(
            command("abc_01h455vb4pex5vsknk084sn02q").row(),
            Err(CliError::InvalidId(IdError::UnknownPrefix(_)))
        ));
    }

    #[test]
    fn padded_identifier_is_rejected() {
        assert!(matches!(
            command(" cnv_01h455vb4pex5vsknk084sn02q").row(),
            Err(CliError::InvalidId(IdError::UnknownPrefix(_)))
        ));
    }
}
