//! CLI commands.

mod entities;
mod from_uuid;
mod generate;
mod infer;
mod parse;
mod to_uuid;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use keel_id::{AnyId, Entity};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::config::Config;
use crate::error::CliError;
use crate::logging;
use crate::output::OutputFormat;

/// keel-id - Generate, inspect and convert keel identifiers.
#[derive(Debug, Parser)]
#[command(name = "keel-id")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, env = "KEEL_FORMAT")]
    format: Option<String>,

    /// Default log filter; a filter in KEEL_LOG takes precedence.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate fresh identifiers.
    Generate(generate::GenerateCommand),

    /// Check whether a string is a valid identifier for an entity.
    Validate(validate::ValidateCommand),

    /// Parse an identifier for an entity and show its parts.
    Parse(parse::ParseCommand),

    /// Decode an identifier into its UUID.
    ToUuid(to_uuid::ToUuidCommand),

    /// Encode a UUID as an identifier.
    FromUuid(from_uuid::FromUuidCommand),

    /// Show which entity an identifier belongs to.
    Infer(infer::InferCommand),

    /// List registered entities and their prefixes.
    Entities(entities::EntitiesCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command, returning the process exit code.
    pub fn run(self) -> Result<i32> {
        let config = Config::load()?;

        let level = self
            .log_level
            .as_deref()
            .or(config.log_level.as_deref())
            .unwrap_or(logging::DEFAULT_LEVEL);
        logging::init(level);

        let ctx = CommandContext {
            format: resolve_format(self.format.as_deref(), &config),
        };
        debug!(format = ?ctx.format, "Configuration loaded");

        match self.command {
            Commands::Generate(cmd) => cmd.run(&ctx).map(|()| 0),
            Commands::Validate(cmd) => cmd.run(&ctx),
            Commands::Parse(cmd) => cmd.run(&ctx).map(|()| 0),
            Commands::ToUuid(cmd) => cmd.run(&ctx).map(|()| 0),
            Commands::FromUuid(cmd) => cmd.run(&ctx).map(|()| 0),
            Commands::Infer(cmd) => cmd.run(&ctx).map(|()| 0),
            Commands::Entities(cmd) => cmd.run(&ctx).map(|()| 0),
            Commands::Version => {
                println!("keel-id {}", env!("CARGO_PKG_VERSION"));
                Ok(0)
            }
        }
    }
}

/// Flag (or KEEL_FORMAT) first, then config file, then table.
fn resolve_format(flag: Option<&str>, config: &Config) -> OutputFormat {
    flag.or(config.format.as_deref())
        .map(OutputFormat::from_name)
        .unwrap_or_default()
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
}

/// Resolve an entity name from the command line.
///
/// Unknown names are configuration errors, reported with the registry.
pub fn resolve_entity(name: &str) -> Result<Entity, CliError> {
    Entity::from_name(name).map_err(CliError::from)
}

/// One identifier, as shown by most commands.
#[derive(Debug, Serialize, Tabled)]
pub struct IdRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "ENTITY")]
    pub entity: String,
    #[tabled(rename = "UUID")]
    pub uuid: String,
    /// Creation time for UUIDv7-backed identifiers, `-` otherwise.
    #[tabled(rename = "CREATED_MS")]
    pub created_ms: String,
}

impl From<AnyId> for IdRow {
    fn from(id: AnyId) -> Self {
        let uuid = id.uuid();
        let created_ms = if uuid.get_version_num() == 7 {
            id.timestamp_ms().to_string()
        } else {
            "-".to_string()
        };
        Self {
            id: id.to_string(),
            entity: id.entity().to_string(),
            uuid: uuid.hyphenated().to_string(),
            created_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["keel-id", "generate", "workspace", "--format", "json"])
            .unwrap();
        assert_eq!(cli.format.as_deref(), Some("json"));
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn parses_kebab_case_subcommands() {
        let cli = Cli::try_parse_from([
            "keel-id",
            "from-uuid",
            "order",
            "01890a5d-ac96-774b-bcce-b302099a8057",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::FromUuid(_)));
        assert!(Cli::try_parse_from(["keel-id", "to-uuid"]).is_err());
    }

    #[test]
    fn format_prefers_flag_over_config() {
        let config = Config {
            format: Some("json".to_string()),
            log_level: None,
        };
        assert_eq!(resolve_format(Some("table"), &config), OutputFormat::Table);
        assert_eq!(resolve_format(None, &config), OutputFormat::Json);
        assert_eq!(
            resolve_format(None, &Config::default()),
            OutputFormat::Table
        );
    }

    #[test]
    fn resolve_entity_reports_unknown_names() {
        assert_eq!(resolve_entity("order").unwrap(), Entity::Order);
        assert!(matches!(
            resolve_entity(" order "),
            Err(CliError::UnknownEntity(_))
        ));
        assert!(matches!(
            resolve_entity("widget"),
            Err(CliError::UnknownEntity(_))
        ));
    }

    #[test]
    fn id_row_shows_creation_time_for_generated_ids() {
        let row = IdRow::from(keel_id::generate(Entity::Customer));
        assert!(row.id.starts_with("cus_"));
        assert_eq!(row.entity, "customer");
        assert_ne!(row.created_ms, "-");

        let nil = keel_id::from_uuid(Entity::Customer, "00000000-0000-0000-0000-000000000000")
            .unwrap();
        assert_eq!(IdRow::from(nil).created_ms, "-");
    }
}
