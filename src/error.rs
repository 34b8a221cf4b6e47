//! Error types.

use std::{io, path::PathBuf};
use thiserror::Error as ThisError;

/// Failures reported by a database driver.
#[derive(ThisError, Debug)]
pub enum DriverError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    PostgreSQL(#[from] tokio_postgres::Error),

    #[error(transparent)]
    MySQL(#[from] mysql_async::Error),

    #[error(transparent)]
    MySQLUrl(#[from] mysql_async::UrlError),

    #[error("background connection task failed")]
    Join(#[from] tokio::task::JoinError),
}

/// Errors which terminate a `dbprovision` run.
#[derive(ThisError, Debug)]
pub enum Error {
    #[error("{0}")]
    Usage(String),

    #[error("Invalid number for field count: '{0}'")]
    InvalidFieldCount(String),

    #[error("cannot load properties file {}", .path.display())]
    LoadProperties {
        path: PathBuf,
        #[source]
        error: io::Error,
    },

    #[error("table name missing.")]
    MissingTableName,

    #[error("Missing connection information.")]
    MissingConnectionInfo,

    #[error("database driver '{0}' not found")]
    DriverNotFound(String),

    #[error("cannot connect to {url}")]
    Connect {
        url: String,
        #[source]
        error: DriverError,
    },

    #[error("Error in creating table {table}, failed to execute: {statement}")]
    Ddl {
        table: String,
        statement: String,
        #[source]
        error: DriverError,
    },

    #[error("failed to close database connection")]
    Close(#[source] DriverError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// The process exit status for this error.
    ///
    /// Usage problems and unreadable properties files are informational and
    /// exit with 0. Everything else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) | Self::LoadProperties { .. } => 0,
            _ => 1,
        }
    }

    /// Whether the usage text should follow the error message.
    pub fn shows_usage(&self) -> bool {
        matches!(self, Self::Usage(_) | Self::InvalidFieldCount(_) | Self::MissingTableName)
    }
}
