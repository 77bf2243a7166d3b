use crate::cli::{ExportArgs, ExportFormat};
use crate::config::AppConfig;
use crate::error::Result;
use residb::core::io::atom_table::write_atom_table;
use residb::core::io::declaration::write_definition;
use residb::core::table::registry::DefinitionTable;
use std::io::Write;
use tracing::info;

pub fn run(args: &ExportArgs, table: &DefinitionTable, config: &AppConfig) -> Result<()> {
    let content = render(args, table, config)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &content)?;
            info!("Wrote {} bytes to {:?}", content.len(), path);
        }
        None => std::io::stdout().lock().write_all(&content)?,
    }
    Ok(())
}

fn render(args: &ExportArgs, table: &DefinitionTable, config: &AppConfig) -> Result<Vec<u8>> {
    let group = table.resolve_lookup(&args.key)?;
    match args.format {
        ExportFormat::Toml => Ok(write_definition(&group.to_definition())?.into_bytes()),
        ExportFormat::Csv => {
            let charge_set = args.charge_set.as_deref().unwrap_or(&config.charge_set);
            let atom_type_set = args
                .atom_type_set
                .as_deref()
                .unwrap_or(&config.atom_type_set);
            let mut buffer = Vec::new();
            write_atom_table(&group, charge_set, atom_type_set, &mut buffer)?;
            Ok(buffer)
        }
    }
}
