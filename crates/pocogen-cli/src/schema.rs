//! SQL Server schema introspection.
//!
//! Issues a single read-only query against the `INFORMATION_SCHEMA` views and
//! returns the table's columns in ordinal order. A column is flagged as a
//! primary key when it takes part in any `PRIMARY KEY` constraint on the
//! table, so composite keys flag every member column.
//!
//! Without an explicit schema the table name must be unique across schemas;
//! a name found in several schemas is rejected rather than merged.

use pocogen_core::{ColumnDescriptor, GenError, GenResult};
use std::fmt::Display;
use tiberius::{Client, Config, Row};
use tokio::net::TcpStream;
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};

/// Column metadata query. `@P1` is the table name, `@P2` an optional schema.
pub const COLUMNS_QUERY: &str = "\
SELECT
    c.TABLE_SCHEMA,
    c.COLUMN_NAME,
    c.IS_NULLABLE,
    c.DATA_TYPE,
    CAST(CASE WHEN EXISTS (
        SELECT 1
        FROM INFORMATION_SCHEMA.TABLE_CONSTRAINTS tc
        JOIN INFORMATION_SCHEMA.KEY_COLUMN_USAGE kcu
            ON kcu.CONSTRAINT_NAME = tc.CONSTRAINT_NAME
            AND kcu.CONSTRAINT_SCHEMA = tc.CONSTRAINT_SCHEMA
        WHERE tc.CONSTRAINT_TYPE = 'PRIMARY KEY'
            AND tc.TABLE_SCHEMA = c.TABLE_SCHEMA
            AND tc.TABLE_NAME = c.TABLE_NAME
            AND kcu.COLUMN_NAME = c.COLUMN_NAME
    ) THEN 1 ELSE 0 END AS bit) AS IS_PRIMARY_KEY
FROM INFORMATION_SCHEMA.COLUMNS c
WHERE c.TABLE_NAME = @P1
    AND (@P2 IS NULL OR c.TABLE_SCHEMA = @P2)
ORDER BY c.TABLE_SCHEMA, c.ORDINAL_POSITION";

type SqlClient = Client<Compat<TcpStream>>;

/// Reads column metadata from a SQL Server database
pub struct SchemaReader {
    config: Config,
}

impl SchemaReader {
    /// Create a reader from an ADO.NET style connection string
    /// (`Server=tcp:host,1433;Database=app;User Id=sa;Password=...;`).
    pub fn from_connection_string(connection_string: &str) -> GenResult<Self> {
        let config = Config::from_ado_string(connection_string).map_err(db_error)?;
        Ok(Self { config })
    }

    /// Fetch the columns of `table`, optionally restricted to one schema.
    ///
    /// The connection lives only for the duration of this call.
    pub async fn fetch_columns(
        &self,
        table: &str,
        schema: Option<&str>,
    ) -> GenResult<Vec<ColumnDescriptor>> {
        let mut client = self.connect().await?;

        tracing::debug!(table, ?schema, "Querying column metadata");
        let rows = client
            .query(COLUMNS_QUERY, &[&table, &schema])
            .await
            .map_err(db_error)?
            .into_first_result()
            .await
            .map_err(db_error)?;

        let rows = rows
            .iter()
            .map(schema_column_from_row)
            .collect::<GenResult<Vec<_>>>()?;

        client.close().await.map_err(db_error)?;

        let columns = single_table_columns(table, schema, rows)?;

        tracing::info!(
            table,
            columns = columns.len(),
            primary_keys = columns.iter().filter(|c| c.primary_key).count(),
            "Read table schema"
        );

        Ok(columns)
    }

    async fn connect(&self) -> GenResult<SqlClient> {
        let addr = self.config.get_addr();
        tracing::debug!(%addr, "Connecting to SQL Server");

        let tcp = TcpStream::connect(addr.as_str()).await.map_err(db_error)?;
        tcp.set_nodelay(true).map_err(db_error)?;

        Client::connect(self.config.clone(), tcp.compat_write())
            .await
            .map_err(db_error)
    }
}

fn schema_column_from_row(row: &Row) -> GenResult<(String, ColumnDescriptor)> {
    let table_schema = row
        .try_get::<&str, _>("TABLE_SCHEMA")
        .map_err(db_error)?
        .unwrap_or_default()
        .to_string();
    let name = row.try_get::<&str, _>("COLUMN_NAME").map_err(db_error)?;
    let is_nullable = row.try_get::<&str, _>("IS_NULLABLE").map_err(db_error)?;
    let data_type = row.try_get::<&str, _>("DATA_TYPE").map_err(db_error)?;
    let primary_key = row.try_get::<bool, _>("IS_PRIMARY_KEY").map_err(db_error)?;

    Ok((
        table_schema,
        column_from_parts(name, is_nullable, data_type, primary_key)?,
    ))
}

/// Reduce `(schema, column)` rows to the columns of exactly one table.
///
/// Fails with [`GenError::TableNotFound`] when there are no rows and with
/// [`GenError::AmbiguousTable`] when the rows span more than one schema.
fn single_table_columns(
    table: &str,
    schema: Option<&str>,
    rows: Vec<(String, ColumnDescriptor)>,
) -> GenResult<Vec<ColumnDescriptor>> {
    let mut schemas: Vec<String> = Vec::new();
    for (table_schema, _) in &rows {
        if !schemas.contains(table_schema) {
            schemas.push(table_schema.clone());
        }
    }

    match schemas.len() {
        0 => Err(GenError::TableNotFound(qualified_name(table, schema))),
        1 => Ok(rows.into_iter().map(|(_, column)| column).collect()),
        _ => {
            schemas.sort();
            Err(GenError::AmbiguousTable {
                table: table.to_string(),
                schemas,
            })
        }
    }
}

/// Build a descriptor from the raw values of one result row.
fn column_from_parts(
    name: Option<&str>,
    is_nullable: Option<&str>,
    data_type: Option<&str>,
    primary_key: Option<bool>,
) -> GenResult<ColumnDescriptor> {
    let name = name.ok_or_else(|| GenError::Database("column with NULL name".to_string()))?;
    let data_type = data_type
        .ok_or_else(|| GenError::Database(format!("column '{name}' has no data type")))?;

    Ok(ColumnDescriptor::new(
        name,
        parse_nullable(is_nullable.unwrap_or_default()),
        data_type,
        primary_key.unwrap_or(false),
    ))
}

/// `INFORMATION_SCHEMA.COLUMNS.IS_NULLABLE` holds `YES` or `NO`.
fn parse_nullable(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("yes")
}

fn qualified_name(table: &str, schema: Option<&str>) -> String {
    match schema {
        Some(schema) => format!("{schema}.{table}"),
        None => table.to_string(),
    }
}

fn db_error(err: impl Display) -> GenError {
    GenError::Database(err.to_string())
}
