use crate::cli::ShowArgs;
use crate::error::Result;
use residb::core::models::resolved::ResolvedGroup;
use residb::core::models::topology::ChainEnd;
use residb::core::table::registry::DefinitionTable;
use std::io::Write;
use tracing::info;

pub fn run(args: &ShowArgs, table: &DefinitionTable, out: &mut impl Write) -> Result<()> {
    let group = table.resolve_lookup(&args.key)?;
    info!("Resolved '{}' to group '{}'.", args.key, group.name);
    render(&group, out)
}

fn render(group: &ResolvedGroup, out: &mut impl Write) -> Result<()> {
    match &group.symbol {
        Some(symbol) => writeln!(out, "{} ({})", group.name, symbol)?,
        None => writeln!(out, "{}", group.name)?,
    }
    writeln!(
        out,
        "  atoms: {}  bonds: {}",
        group.atom_count(),
        group.bond_count()
    )?;

    let link = |end| {
        group
            .chain_links
            .get(end)
            .map_or_else(|| "-".to_string(), ToString::to_string)
    };
    writeln!(
        out,
        "  chain links: head={} tail={}",
        link(ChainEnd::Head),
        link(ChainEnd::Tail)
    )?;

    for set in group.charges.keys() {
        if let Some(total) = group.total_charge(set) {
            writeln!(out, "  net charge ({}): {:.4}", set, total)?;
        }
    }
    if !group.pdbmap.is_empty() {
        let residues: Vec<_> = group.pdbmap.iter().map(|e| e.residue.as_str()).collect();
        writeln!(out, "  pdb residues: {}", residues.join(", "))?;
    }

    writeln!(out, "Atoms:")?;
    for (path, element) in &group.atoms {
        write!(out, "  {:<20} {:<3}", path.to_string(), element)?;
        for (set, charges) in &group.charges {
            if let Some(charge) = charges.get(path) {
                write!(out, " {}={:.4}", set, charge)?;
            }
        }
        for (set, types) in &group.atom_types {
            if let Some(atom_type) = types.get(path) {
                write!(out, " {}={}", set, atom_type)?;
            }
        }
        writeln!(out)?;
    }

    writeln!(out, "Bonds:")?;
    for bond in &group.bonds {
        writeln!(out, "  {}", bond)?;
    }
    Ok(())
}
