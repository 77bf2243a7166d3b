pub struct DefaultsConfig {
    pub charge_set: String,
    pub atom_type_set: String,
    pub strict: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            charge_set: "amber_charge".to_string(),
            atom_type_set: "amber91_atom_type".to_string(),
            strict: false,
        }
    }
}
