use clap::{CommandFactory as _, Parser as _};
use dbprovision::cli::{run, Args};
use std::{error::Error as StdError, io, process::exit};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // help, unknown flags and missing values are all informational.
            let _ = e.print();
            exit(0);
        }
    };

    let stdout = io::stdout();
    if let Err(e) = run(&args, &mut stdout.lock()) {
        eprintln!("{}", e);
        let mut err: &dyn StdError = &e;
        while let Some(source) = err.source() {
            eprintln!("Cause: {}", source);
            err = source;
        }
        if e.shows_usage() {
            let _ = Args::command().print_help();
        }
        exit(e.exit_code());
    }
}
