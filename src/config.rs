//! Resolved run configuration.

use crate::{error::Error, properties::Properties};

/// Property naming the database driver.
pub const DRIVER_CLASS: &str = "db.driver";
/// Property holding the connection URL.
pub const CONNECTION_URL: &str = "db.url";
/// Property holding the user name.
pub const CONNECTION_USER: &str = "db.user";
/// Property holding the password.
pub const CONNECTION_PASSWD: &str = "db.passwd";
/// Property holding the number of `FIELDn` columns in generic mode.
pub const FIELD_COUNT_PROPERTY: &str = "fieldcount";
pub const FIELD_COUNT_PROPERTY_DEFAULT: &str = "10";
/// Property selecting the table type. Its value must equal [`TPC_DS`] to select benchmark mode.
pub const TABLE_TYPE_PROPERTY: &str = "TPC_DS";
pub const TABLE_TYPE_PROPERTY_DEFAULT: &str = "GENERAL";
pub const TPC_DS: &str = "TPC_DS";

/// Which set of tables to create.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TableType {
    /// A single table with a key and `fieldcount` text fields.
    General,
    /// The TPC-DS benchmark tables.
    TpcDs,
}

/// Parameters needed to open a database connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectInfo {
    pub driver: String,
    pub url: String,
    pub user: String,
    pub password: String,
}

/// The merged configuration of a run. Immutable once constructed.
#[derive(Debug, Clone, Default)]
pub struct Config {
    props: Properties,
}

impl Config {
    pub fn new(props: Properties) -> Self {
        Self { props }
    }

    pub fn properties(&self) -> &Properties {
        &self.props
    }

    pub fn table_type(&self) -> TableType {
        if self.props.get_or(TABLE_TYPE_PROPERTY, TABLE_TYPE_PROPERTY_DEFAULT) == TPC_DS {
            TableType::TpcDs
        } else {
            TableType::General
        }
    }

    pub fn field_count(&self) -> Result<u32, Error> {
        let value = self.props.get_or(FIELD_COUNT_PROPERTY, FIELD_COUNT_PROPERTY_DEFAULT);
        value
            .trim()
            .parse()
            .map_err(|_| Error::InvalidFieldCount(value.to_owned()))
    }

    /// Extracts the connection parameters.
    ///
    /// The driver, URL and user are required. The password defaults to empty.
    pub fn connect_info(&self) -> Result<ConnectInfo, Error> {
        let required = |key: &str| {
            self.props
                .get(key)
                .map(str::to_owned)
                .ok_or(Error::MissingConnectionInfo)
        };
        Ok(ConnectInfo {
            driver: required(DRIVER_CLASS)?,
            url: required(CONNECTION_URL)?,
            user: required(CONNECTION_USER)?,
            password: self.props.get_or(CONNECTION_PASSWD, "").to_owned(),
        })
    }
}
