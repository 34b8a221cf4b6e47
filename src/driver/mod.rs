//! Database drivers.
//!
//! A [`Driver`] is looked up by name from the `db.driver` property and opens
//! a single [`Connection`], through which every statement of a run is sent.

mod mysql;
mod postgres;
mod script;

pub use self::{mysql::MySqlDriver, postgres::PostgresDriver, script::ScriptDriver};

use crate::{config::ConnectInfo, error::DriverError};

/// An open database connection.
pub trait Connection {
    /// Executes a single statement, discarding any result rows.
    fn execute(&mut self, statement: &str) -> Result<(), DriverError>;

    /// Releases the connection.
    fn close(self: Box<Self>) -> Result<(), DriverError>;
}

/// A factory of database connections.
pub trait Driver: Sync {
    /// The canonical name of the driver.
    fn name(&self) -> &'static str;

    /// Other names accepted for this driver, including the JDBC driver class
    /// names commonly found in existing properties files.
    fn aliases(&self) -> &'static [&'static str];

    /// Opens a connection.
    fn connect(&self, info: &ConnectInfo) -> Result<Box<dyn Connection>, DriverError>;
}

static DRIVERS: &[&dyn Driver] = &[&PostgresDriver, &MySqlDriver, &ScriptDriver];

/// Finds a built-in driver by its name or one of its aliases.
pub fn find_driver(name: &str) -> Option<&'static dyn Driver> {
    let name = name.trim();
    DRIVERS
        .iter()
        .copied()
        .find(|d| d.name().eq_ignore_ascii_case(name) || d.aliases().iter().any(|a| *a == name))
}

/// Strips the `jdbc:` scheme prefix which JDBC URLs carry.
pub(crate) fn strip_jdbc_prefix(url: &str) -> &str {
    url.strip_prefix("jdbc:").unwrap_or(url)
}

/// Builds the current-thread runtime on which an async client is driven.
pub(crate) fn new_runtime() -> Result<tokio::runtime::Runtime, DriverError> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_driver() {
        let test_cases = [
            ("postgresql", Some("postgresql")),
            ("PostgreSQL", Some("postgresql")),
            ("postgres", Some("postgresql")),
            ("org.postgresql.Driver", Some("postgresql")),
            ("mysql", Some("mysql")),
            ("com.mysql.jdbc.Driver", Some("mysql")),
            ("com.mysql.cj.jdbc.Driver", Some("mysql")),
            ("org.mariadb.jdbc.Driver", Some("mysql")),
            (" script ", Some("script")),
            ("sql", Some("script")),
            ("oracle.jdbc.OracleDriver", None),
            ("", None),
        ];
        for (name, expected) in test_cases {
            assert_eq!(find_driver(name).map(|d| d.name()), expected, "{name}");
        }
    }

    #[test]
    fn test_strip_jdbc_prefix() {
        assert_eq!(
            strip_jdbc_prefix("jdbc:postgresql://localhost:5432/ycsb"),
            "postgresql://localhost:5432/ycsb"
        );
        assert_eq!(strip_jdbc_prefix("mysql://localhost/ycsb"), "mysql://localhost/ycsb");
    }
}
