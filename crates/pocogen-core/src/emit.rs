//! C# class generation from column descriptors.
//!
//! Produces text such as:
//!
//! ```text
//! [Table("users")]
//! public class Users
//! {
//!   [Key]
//!   [Column("id")]
//!   public int Id { get; set; }
//!
//!   [Column("user_name")]
//!   public string UserName { get; set; }
//! }
//! ```
//!
//! Annotations are only written when the generated identifier differs from
//! the raw database identifier, so ORM-style consumers can still locate the
//! real table and columns.

use crate::column::ColumnDescriptor;
use crate::error::GenResult;
use crate::naming::NameConverter;
use crate::types::{PrimitiveType, TypeMap};

/// Indentation unit for each nesting level.
const INDENT: &str = "  ";

const USING_DIRECTIVES: &[&str] = &[
    "using System;",
    "using System.ComponentModel.DataAnnotations;",
    "using System.ComponentModel.DataAnnotations.Schema;",
];

/// Options controlling the generated text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitOptions {
    /// Use this class name instead of the converted table name.
    pub class_name: Option<String>,

    /// Wrap the class in a namespace block.
    pub namespace: Option<String>,

    /// Prefix the output with the `using` directives the annotations need.
    pub usings: bool,

    /// Database schema the table lives in, written into `[Table]`.
    pub schema: Option<String>,
}

impl EmitOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the class name
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Wrap the class in a namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Bind the class to a table in a specific schema
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Emit `using` directives
    pub fn with_usings(mut self, usings: bool) -> Self {
        self.usings = usings;
        self
    }
}

/// Generate the C# class for a table.
///
/// Every column type is mapped before any text is produced, so a single
/// unmapped type fails the whole table with no partial output.
pub fn emit_class(
    table_name: &str,
    columns: &[ColumnDescriptor],
    types: &TypeMap,
    names: &NameConverter,
    options: &EmitOptions,
) -> GenResult<String> {
    let mapped = columns
        .iter()
        .map(|column| Ok((column, types.map_type(&column.name, &column.data_type)?)))
        .collect::<GenResult<Vec<(&ColumnDescriptor, PrimitiveType)>>>()?;

    let class_name = options
        .class_name
        .clone()
        .unwrap_or_else(|| names.convert(table_name));

    let mut out = CodeWriter::new();

    if options.usings {
        for directive in USING_DIRECTIVES {
            out.line(directive);
        }
        out.blank();
    }

    if let Some(namespace) = &options.namespace {
        out.line(&format!("namespace {namespace}"));
        out.open();
    }

    // Compared against the literal table name, override or not
    if class_name != table_name || options.schema.is_some() {
        out.line(&table_attribute(table_name, options.schema.as_deref()));
    }
    out.line(&format!("public class {class_name}"));
    out.open();

    for (i, (column, ty)) in mapped.iter().enumerate() {
        if i > 0 {
            out.blank();
        }
        emit_property(&mut out, column, *ty, names);
    }

    out.close();

    if options.namespace.is_some() {
        out.close();
    }

    Ok(out.finish())
}

fn emit_property(
    out: &mut CodeWriter,
    column: &ColumnDescriptor,
    ty: PrimitiveType,
    names: &NameConverter,
) {
    if column.primary_key {
        out.line("[Key]");
    }

    let property_name = names.convert(&column.name);
    if property_name != column.name {
        out.line(&format!("[Column(\"{}\")]", escape_literal(&column.name)));
    }

    out.line(&format!(
        "public {} {} {{ get; set; }}",
        ty.csharp_type(column.nullable),
        property_name
    ));
}

fn table_attribute(table_name: &str, schema: Option<&str>) -> String {
    match schema {
        Some(schema) => format!(
            "[Table(\"{}\", Schema = \"{}\")]",
            escape_literal(table_name),
            escape_literal(schema)
        ),
        None => format!("[Table(\"{}\")]", escape_literal(table_name)),
    }
}

/// Escape a value for use inside a C# string literal.
fn escape_literal(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Line buffer that tracks brace nesting.
struct CodeWriter {
    buf: String,
    depth: usize,
}

impl CodeWriter {
    fn new() -> Self {
        Self {
            buf: String::new(),
            depth: 0,
        }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    fn blank(&mut self) {
        self.buf.push('\n');
    }

    fn open(&mut self) {
        self.line("{");
        self.depth += 1;
    }

    fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    fn finish(self) -> String {
        self.buf
    }
}
