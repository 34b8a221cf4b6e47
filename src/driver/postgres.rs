//! PostgreSQL driver built on `tokio-postgres`.

use super::{new_runtime, strip_jdbc_prefix, Connection, Driver};
use crate::{config::ConnectInfo, error::DriverError};
use tokio::{runtime::Runtime, task::JoinHandle};
use tokio_postgres::{Client, Config, NoTls};
use tracing::debug;

#[derive(Debug, Copy, Clone)]
pub struct PostgresDriver;

impl Driver for PostgresDriver {
    fn name(&self) -> &'static str {
        "postgresql"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["postgres", "org.postgresql.Driver"]
    }

    fn connect(&self, info: &ConnectInfo) -> Result<Box<dyn Connection>, DriverError> {
        let mut config: Config = strip_jdbc_prefix(&info.url).parse()?;
        config.user(&info.user).password(&info.password);

        let runtime = new_runtime()?;
        let (client, connection) = runtime.block_on(config.connect(NoTls))?;
        let task = runtime.spawn(connection);
        debug!(url = %info.url, "connected to PostgreSQL");
        Ok(Box::new(PostgresConnection {
            runtime,
            client,
            task,
        }))
    }
}

struct PostgresConnection {
    runtime: Runtime,
    client: Client,
    task: JoinHandle<Result<(), tokio_postgres::Error>>,
}

impl Connection for PostgresConnection {
    fn execute(&mut self, statement: &str) -> Result<(), DriverError> {
        self.runtime.block_on(self.client.batch_execute(statement))?;
        Ok(())
    }

    fn close(self: Box<Self>) -> Result<(), DriverError> {
        let Self {
            runtime,
            client,
            task,
        } = *self;
        // the connection task ends once every client handle is gone.
        drop(client);
        runtime.block_on(task)??;
        Ok(())
    }
}
