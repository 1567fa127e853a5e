//! Error handling and display for the CLI.

use colored::Colorize;
use keel_id::{Entity, IdError};
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid identifier: {0}")]
    InvalidId(#[source] IdError),

    #[error("Unknown entity '{0}'")]
    UnknownEntity(String),

    #[error("--count must be between 1 and {max}, got {actual}")]
    InvalidCount { max: usize, actual: usize },
}

impl From<IdError> for CliError {
    fn from(err: IdError) -> Self {
        match err {
            IdError::UnknownEntity(name) => CliError::UnknownEntity(name),
            other => CliError::InvalidId(other),
        }
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    // Check for specific error types and provide hints
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::UnknownEntity(_) => {
                eprintln!(
                    "\n{} {}",
                    "Hint: registered entities are:".yellow(),
                    entity_names()
                );
            }
            CliError::InvalidId(IdError::UnknownPrefix(_)) => {
                eprintln!(
                    "\n{}",
                    "Hint: Run `keel-id entities` to list known prefixes.".yellow()
                );
            }
            _ => {}
        }
    }
}

fn entity_names() -> String {
    Entity::ALL
        .iter()
        .map(|e| e.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_entity_maps_to_configuration_error() {
        let err: CliError = Entity::from_name("widget").unwrap_err().into();
        assert!(matches!(err, CliError::UnknownEntity(name) if name == "widget"));
    }

    #[test]
    fn other_errors_map_to_invalid_id() {
        let err: CliError = keel_id::parse(Entity::Order, "").unwrap_err().into();
        assert!(matches!(err, CliError::InvalidId(IdError::Malformed { .. })));
    }

    #[test]
    fn entity_names_lists_registry() {
        let names = entity_names();
        assert!(names.starts_with("user, "));
        assert!(names.contains("payment_intent"));
    }
}
