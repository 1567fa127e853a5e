//! Entities command.

use anyhow::Result;
use clap::Args;
use keel_id::Entity;
use serde::Serialize;
use tabled::Tabled;

use super::CommandContext;
use crate::output::print_output;

/// List registered entities and their prefixes.
#[derive(Debug, Args)]
pub struct EntitiesCommand {}

#[derive(Debug, Serialize, Tabled)]
pub struct EntityRow {
    #[tabled(rename = "NAME")]
    pub name: &'static str,
    #[tabled(rename = "PREFIX")]
    pub prefix: &'static str,
    #[tabled(rename = "ID_LENGTH")]
    pub id_length: usize,
}

impl From<Entity> for EntityRow {
    fn from(entity: Entity) -> Self {
        Self {
            name: entity.name(),
            prefix: entity.prefix(),
            id_length: entity.id_len(),
        }
    }
}

impl EntitiesCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let rows: Vec<EntityRow> = Entity::ALL.iter().copied().map(EntityRow::from).collect();
        print_output(&rows, ctx.format);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_for_workspace() {
        let row = EntityRow::from(Entity::Workspace);
        assert_eq!(row.name, "workspace");
        assert_eq!(row.prefix, "wsp");
        assert_eq!(row.id_length, 30);
    }
}
