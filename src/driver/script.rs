//! A driver which writes the statements to a SQL script instead of a server.
//!
//! The `db.url` names the output file, or `-` for the standard output.

use super::{Connection, Driver};
use crate::{config::ConnectInfo, error::DriverError};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

#[derive(Debug, Copy, Clone)]
pub struct ScriptDriver;

impl Driver for ScriptDriver {
    fn name(&self) -> &'static str {
        "script"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["sql"]
    }

    fn connect(&self, info: &ConnectInfo) -> Result<Box<dyn Connection>, DriverError> {
        let path = info.url.strip_prefix("file:").unwrap_or(&info.url);
        let writer: Box<dyn Write> = if path == "-" {
            Box::new(io::stdout())
        } else {
            Box::new(File::create(path)?)
        };
        Ok(Box::new(ScriptConnection {
            writer: BufWriter::new(writer),
        }))
    }
}

struct ScriptConnection {
    writer: BufWriter<Box<dyn Write>>,
}

impl Connection for ScriptConnection {
    fn execute(&mut self, statement: &str) -> Result<(), DriverError> {
        writeln!(self.writer, "{statement}")?;
        // keeps the script interleaved with the progress report on stdout.
        self.writer.flush()?;
        Ok(())
    }

    fn close(mut self: Box<Self>) -> Result<(), DriverError> {
        self.writer.flush()?;
        Ok(())
    }
}
