use crate::error::Result;
use residb::core::table::registry::DefinitionTable;
use std::io::Write;
use tracing::info;

pub fn run(table: &DefinitionTable, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{:<24} {:<8} COMPONENTS", "NAME", "SYMBOL")?;
    for name in table.names() {
        let Some(definition) = table.get(name) else {
            continue;
        };
        let components = if definition.is_composite() {
            definition
                .components
                .iter()
                .map(|(role, group)| format!("{}={}", role, group))
                .collect::<Vec<_>>()
                .join(", ")
        } else {
            "-".to_string()
        };
        writeln!(
            out,
            "{:<24} {:<8} {}",
            name,
            definition.symbol.as_deref().unwrap_or("-"),
            components
        )?;
    }
    info!("Listed {} group(s).", table.len());
    Ok(())
}
