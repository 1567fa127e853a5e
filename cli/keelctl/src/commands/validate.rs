//! Validate command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::debug;

use super::{resolve_entity, CommandContext};
use crate::output::{print_failure, print_single, print_success, OutputFormat};

/// Check whether a string is a valid identifier for an entity.
///
/// Exits with status 1 when the candidate is invalid.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Entity name.
    entity: String,

    /// Candidate identifier.
    candidate: String,
}

#[derive(Debug, Serialize, tabled::Tabled)]
struct ValidationReport {
    candidate: String,
    entity: String,
    valid: bool,
    #[tabled(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl ValidateCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<i32> {
        let report = self.report()?;
        debug!(valid = report.valid, "Validated candidate");

        match ctx.format {
            OutputFormat::Table => match &report.reason {
                None => print_success(&report.candidate),
                Some(reason) => print_failure(reason),
            },
            OutputFormat::Json => print_single(&report, ctx.format),
        }

        Ok(if report.valid { 0 } else { 1 })
    }

    fn report(&self) -> Result<ValidationReport> {
        let entity = resolve_entity(&self.entity)?;
        let valid = keel_id::validate(entity, &self.candidate);
        let reason = if valid {
            None
        } else {
            keel_id::parse(entity, &self.candidate)
                .err()
                .map(|err| err.to_string())
        };

        Ok(ValidationReport {
            candidate: self.candidate.clone(),
            entity: entity.to_string(),
            valid,
            reason,
        })
    }
}
