//! Column metadata returned by schema introspection

/// One column of an introspected table.
///
/// Values are built once per result row and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Raw column name as stored in the catalog.
    pub name: String,

    /// Whether the column accepts NULL.
    pub nullable: bool,

    /// Database type name (e.g. `nvarchar`), as reported by the catalog.
    pub data_type: String,

    /// Whether the column participates in the table's primary key.
    pub primary_key: bool,
}

impl ColumnDescriptor {
    /// Create a new column descriptor
    pub fn new(
        name: impl Into<String>,
        nullable: bool,
        data_type: impl Into<String>,
        primary_key: bool,
    ) -> Self {
        Self {
            name: name.into(),
            nullable,
            data_type: data_type.into(),
            primary_key,
        }
    }
}
