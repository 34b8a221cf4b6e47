//! Executes the DDL which (re)creates the benchmark tables.

use crate::{
    config::ConnectInfo,
    driver::{find_driver, Connection},
    error::Error,
    schema::{create_table_sql, drop_table_sql, generic_column_definitions, TPC_DS_TABLES},
};
use std::io::Write;
use tracing::{debug, info};

/// The statements which recreate one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDdl {
    pub table: String,
    pub drop: String,
    pub create: String,
}

impl TableDdl {
    fn new(table: &str, column_definitions: &str) -> Self {
        Self {
            table: table.to_owned(),
            drop: drop_table_sql(table),
            create: create_table_sql(table, column_definitions),
        }
    }
}

/// Plans a single generic table with `field_count` text fields.
pub fn plan_generic(table: &str, field_count: u32) -> Vec<TableDdl> {
    vec![TableDdl::new(table, &generic_column_definitions(field_count))]
}

/// Plans every TPC-DS table, in name order.
pub fn plan_tpc_ds() -> Vec<TableDdl> {
    TPC_DS_TABLES
        .iter()
        .map(|t| TableDdl::new(t.name, &t.column_definitions()))
        .collect()
}

/// Drops and creates each planned table in turn.
///
/// Stops at the first failing statement; later tables are not touched.
pub fn provision(conn: &mut dyn Connection, plan: &[TableDdl], out: &mut dyn Write) -> Result<(), Error> {
    for ddl in plan {
        for statement in [&ddl.drop, &ddl.create] {
            debug!(%statement, "execute");
            conn.execute(statement).map_err(|error| Error::Ddl {
                table: ddl.table.clone(),
                statement: statement.clone(),
                error,
            })?;
        }
        writeln!(out, "Table {} created..", ddl.table)?;
    }
    Ok(())
}

/// Resolves the driver, connects, provisions the plan and closes the connection.
pub fn run(info: &ConnectInfo, plan: &[TableDdl], out: &mut dyn Write) -> Result<(), Error> {
    let driver = find_driver(&info.driver).ok_or_else(|| Error::DriverNotFound(info.driver.clone()))?;
    info!(driver = driver.name(), url = %info.url, "connecting");
    let conn = driver.connect(info).map_err(|error| Error::Connect {
        url: info.url.clone(),
        error,
    })?;
    provision_and_close(conn, plan, out)
}

/// Provisions the plan over `conn`, then closes it.
///
/// The connection is closed exactly once whether or not provisioning
/// succeeds. An error from provisioning takes precedence over an error from
/// closing.
pub fn provision_and_close(
    mut conn: Box<dyn Connection>,
    plan: &[TableDdl],
    out: &mut dyn Write,
) -> Result<(), Error> {
    let result = provision(&mut *conn, plan, out);

    let announced = writeln!(out, "Closing database connection.");
    let closed = conn.close();
    info!(tables = plan.len(), ok = result.is_ok(), "connection closed");

    result?;
    closed.map_err(Error::Close)?;
    announced?;
    Ok(())
}
