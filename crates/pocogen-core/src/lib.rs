//! pocogen-core - Schema to C# class generation
//!
//! This crate provides:
//! - [`ColumnDescriptor`] describing one column of an introspected table
//! - [`NameConverter`] for turning raw identifiers into PascalCase names
//! - [`TypeMap`] and [`PrimitiveType`] for mapping database types to C# types
//! - [`emit_class`] for producing the class source text
//!
//! Nothing here performs I/O. Reading the schema and writing the output is
//! left to the caller.

pub mod column;
pub mod emit;
pub mod error;
pub mod naming;
pub mod types;

pub use column::ColumnDescriptor;
pub use emit::{EmitOptions, emit_class};
pub use error::{GenError, GenResult};
pub use naming::NameConverter;
pub use types::{PrimitiveType, TypeMap};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ColumnDescriptor, EmitOptions, GenError, GenResult, NameConverter, PrimitiveType, TypeMap,
        emit_class,
    };
}
