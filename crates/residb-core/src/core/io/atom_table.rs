use crate::core::models::resolved::ResolvedGroup;
use serde::Serialize;
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtomTableError {
    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Serialize)]
struct AtomRow<'a> {
    path: String,
    element: &'a str,
    charge: Option<f64>,
    atom_type: Option<&'a str>,
    pdb_names: String,
}

/// Writes one CSV row per atom of `group`.
///
/// Columns are `path, element, charge, atom_type, pdb_names`. The charge and atom type come
/// from the named parameter sets and are left empty when the set has no entry for the atom.
/// PDB names are written as `RESIDUE:NAME` joined by `;`.
pub fn write_atom_table<W: Write>(
    group: &ResolvedGroup,
    charge_set: &str,
    atom_type_set: &str,
    writer: W,
) -> Result<(), AtomTableError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (path, element) in &group.atoms {
        let pdb_names = group
            .pdb_names(path)
            .into_iter()
            .map(|(residue, name)| format!("{}:{}", residue, name))
            .collect::<Vec<_>>()
            .join(";");
        csv_writer.serialize(AtomRow {
            path: path.to_string(),
            element,
            charge: group.charge(charge_set, path),
            atom_type: group.atom_type(atom_type_set, path),
            pdb_names,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
