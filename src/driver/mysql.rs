//! MySQL and MariaDB driver built on `mysql_async`.

use super::{new_runtime, strip_jdbc_prefix, Connection, Driver};
use crate::{config::ConnectInfo, error::DriverError};
use mysql_async::{prelude::Queryable, Conn, Opts, OptsBuilder};
use tokio::runtime::Runtime;
use tracing::debug;

#[derive(Debug, Copy, Clone)]
pub struct MySqlDriver;

impl Driver for MySqlDriver {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &[
            "mariadb",
            "com.mysql.jdbc.Driver",
            "com.mysql.cj.jdbc.Driver",
            "org.mariadb.jdbc.Driver",
        ]
    }

    fn connect(&self, info: &ConnectInfo) -> Result<Box<dyn Connection>, DriverError> {
        let url = strip_jdbc_prefix(&info.url);
        let url = match url.strip_prefix("mariadb://") {
            Some(rest) => format!("mysql://{rest}"),
            None => url.to_owned(),
        };
        let opts = OptsBuilder::from_opts(Opts::from_url(&url)?)
            .user(Some(&info.user))
            .pass(Some(&info.password));

        let runtime = new_runtime()?;
        let conn = runtime.block_on(Conn::new(opts))?;
        debug!(url = %info.url, "connected to MySQL");
        Ok(Box::new(MySqlConnection { runtime, conn }))
    }
}

struct MySqlConnection {
    runtime: Runtime,
    conn: Conn,
}

impl Connection for MySqlConnection {
    fn execute(&mut self, statement: &str) -> Result<(), DriverError> {
        self.runtime.block_on(self.conn.query_drop(statement))?;
        Ok(())
    }

    fn close(self: Box<Self>) -> Result<(), DriverError> {
        let Self { runtime, conn } = *self;
        runtime.block_on(conn.disconnect())?;
        Ok(())
    }
}
