//! SQL Server to C# type mappings.
//!
//! # Type Mappings
//!
//! | SQL Server | C# | Value type |
//! |------------|----|------------|
//! | `bit` | `bool` | yes |
//! | `tinyint` | `byte` | yes |
//! | `smallint` | `short` | yes |
//! | `int` | `int` | yes |
//! | `bigint` | `long` | yes |
//! | `real` | `float` | yes |
//! | `float` | `double` | yes |
//! | `decimal`, `numeric`, `money`, `smallmoney` | `decimal` | yes |
//! | `char`, `nchar`, `varchar`, `nvarchar`, `text`, `ntext`, `xml`, `sysname` | `string` | no |
//! | `date`, `datetime`, `datetime2`, `smalldatetime` | `DateTime` | yes |
//! | `datetimeoffset` | `DateTimeOffset` | yes |
//! | `time` | `TimeSpan` | yes |
//! | `uniqueidentifier` | `Guid` | yes |
//! | `binary`, `varbinary`, `image`, `timestamp`, `rowversion` | `byte[]` | no |
//!
//! Lookup is case-insensitive. Names missing from the table are an error.

use crate::error::{GenError, GenResult};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::fmt;

/// C# primitive kinds a column can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Bool,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Decimal,
    String,
    DateTime,
    DateTimeOffset,
    TimeSpan,
    Guid,
    Bytes,
}

impl PrimitiveType {
    /// The C# keyword or type name.
    pub fn csharp_name(&self) -> &'static str {
        match self {
            PrimitiveType::Bool => "bool",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Decimal => "decimal",
            PrimitiveType::String => "string",
            PrimitiveType::DateTime => "DateTime",
            PrimitiveType::DateTimeOffset => "DateTimeOffset",
            PrimitiveType::TimeSpan => "TimeSpan",
            PrimitiveType::Guid => "Guid",
            PrimitiveType::Bytes => "byte[]",
        }
    }

    /// Whether this is a C# value type (and so needs `?` to hold null).
    pub fn is_value_type(&self) -> bool {
        !matches!(self, PrimitiveType::String | PrimitiveType::Bytes)
    }

    /// Get the C# type string for a column.
    ///
    /// Nullable value types get a `?` suffix; reference types are already
    /// nullable and are returned unchanged.
    pub fn csharp_type(&self, nullable: bool) -> String {
        if nullable && self.is_value_type() {
            format!("{}?", self.csharp_name())
        } else {
            self.csharp_name().to_string()
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.csharp_name())
    }
}

const SQL_SERVER_TYPES: &[(&str, PrimitiveType)] = &[
    ("bit", PrimitiveType::Bool),
    ("tinyint", PrimitiveType::Byte),
    ("smallint", PrimitiveType::Short),
    ("int", PrimitiveType::Int),
    ("bigint", PrimitiveType::Long),
    ("real", PrimitiveType::Float),
    ("float", PrimitiveType::Double),
    ("decimal", PrimitiveType::Decimal),
    ("numeric", PrimitiveType::Decimal),
    ("money", PrimitiveType::Decimal),
    ("smallmoney", PrimitiveType::Decimal),
    ("char", PrimitiveType::String),
    ("nchar", PrimitiveType::String),
    ("varchar", PrimitiveType::String),
    ("nvarchar", PrimitiveType::String),
    ("text", PrimitiveType::String),
    ("ntext", PrimitiveType::String),
    ("xml", PrimitiveType::String),
    ("sysname", PrimitiveType::String),
    ("date", PrimitiveType::DateTime),
    ("datetime", PrimitiveType::DateTime),
    ("datetime2", PrimitiveType::DateTime),
    ("smalldatetime", PrimitiveType::DateTime),
    ("datetimeoffset", PrimitiveType::DateTimeOffset),
    ("time", PrimitiveType::TimeSpan),
    ("uniqueidentifier", PrimitiveType::Guid),
    ("binary", PrimitiveType::Bytes),
    ("varbinary", PrimitiveType::Bytes),
    ("image", PrimitiveType::Bytes),
    ("timestamp", PrimitiveType::Bytes),
    ("rowversion", PrimitiveType::Bytes),
];

/// Immutable lookup table from database type name to [`PrimitiveType`].
#[derive(Debug, Clone)]
pub struct TypeMap {
    entries: HashMap<&'static str, PrimitiveType>,
}

impl TypeMap {
    /// Build the SQL Server table.
    pub fn sql_server() -> Self {
        Self {
            entries: SQL_SERVER_TYPES.iter().copied().collect(),
        }
    }

    /// Get the shared SQL Server table, built on first use.
    pub fn global() -> &'static TypeMap {
        static INSTANCE: OnceCell<TypeMap> = OnceCell::new();
        INSTANCE.get_or_init(TypeMap::sql_server)
    }

    /// Look up a database type name, ignoring case.
    pub fn lookup(&self, db_type_name: &str) -> Option<PrimitiveType> {
        self.entries
            .get(db_type_name.to_lowercase().as_str())
            .copied()
    }

    /// Map the type of a named column.
    ///
    /// Fails with [`GenError::UnmappedType`] when the type is unknown.
    pub fn map_type(&self, column: &str, db_type_name: &str) -> GenResult<PrimitiveType> {
        self.lookup(db_type_name)
            .ok_or_else(|| GenError::unmapped(db_type_name, column))
    }

    /// Number of known database type names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TypeMap {
    fn default() -> Self {
        Self::sql_server()
    }
}
