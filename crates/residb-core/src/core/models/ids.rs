use slotmap::new_key_type;

new_key_type! {
    /// Handle of a group registered in a
    /// [`DefinitionTable`](crate::core::table::registry::DefinitionTable), stable for the
    /// lifetime of the table.
    pub struct GroupId;
}
