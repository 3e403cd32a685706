//! Implementation of the `agentscape list` command.

use super::display::{bullet_list, list_title, panel};
use super::{catalog_for, emit};
use crate::catalog::TemplateCatalog;
use crate::cli::ListArgs;
use crate::component::ComponentType;
use crate::config::Config;
use crate::error::{AgentscapeError, Result};
use colored::{Color, Colorize};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Serialize)]
struct Listing<'a> {
    #[serde(rename = "type")]
    kind: ComponentType,
    components: &'a [String],
}

/// Execute the `agentscape list` command.
///
/// Listing does not need a project, so the working directory is not scanned.
pub fn cmd_list(config: &Config, args: ListArgs) -> Result<()> {
    let catalog = catalog_for(config);
    list_components(&catalog, args.kind, args.json, &mut io::stdout())
}

pub(super) fn list_components(
    catalog: &TemplateCatalog,
    kind: ComponentType,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let names = catalog.list(kind)?;

    if json {
        let listing = Listing {
            kind,
            components: &names,
        };
        let rendered = serde_json::to_string_pretty(&listing).map_err(|e| {
            AgentscapeError::UserError(format!("failed to serialize listing: {}", e))
        })?;
        return emit(out, &rendered);
    }

    if names.is_empty() {
        return emit(out, &format!("No available {}", kind).yellow().to_string());
    }

    emit(out, &panel(&list_title(kind), &bullet_list(&names), Color::Blue))
}
