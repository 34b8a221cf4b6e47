//! CLI driver of `dbprovision`.

use crate::{
    config::{Config, TableType, FIELD_COUNT_PROPERTY, TABLE_TYPE_PROPERTY, TPC_DS},
    error::Error,
    properties::Properties,
    provision::{plan_generic, plan_tpc_ds, run as run_plan},
};
use clap::Parser;
use std::{io::Write, path::PathBuf};
use tracing::{debug, warn};

/// Arguments to the `dbprovision` CLI program.
#[derive(Parser, Debug, Default)]
#[command(
    name = "dbprovision",
    version,
    about = "Create Table Client. Drops and recreates the tables used by a benchmark.",
    arg_required_else_help = true,
    args_override_self = true
)]
pub struct Args {
    /// key=value properties defined.
    #[arg(short = 'p', value_name = "KEY=VALUE")]
    pub properties: Vec<String>,

    /// Location of the properties file to load.
    #[arg(short = 'P', value_name = "FILE")]
    pub property_files: Vec<PathBuf>,

    /// Name of the table.
    #[arg(short = 'n', value_name = "NAME")]
    pub table_name: Option<String>,

    /// Number of fields (default 10).
    #[arg(short = 'f', value_name = "COUNT", allow_negative_numbers = true)]
    pub field_count: Option<String>,

    /// Field of workload (TPC_DS).
    #[arg(short = 'F', value_name = "TYPE")]
    pub table_type: Option<String>,
}

/// Merges the property files and command-line settings into one configuration.
///
/// Files are applied in the order given, then `-p` overrides, then `-f`.
pub fn resolve(args: &Args) -> Result<Config, Error> {
    let mut props = Properties::new();
    for path in &args.property_files {
        let loaded = Properties::load(path).map_err(|error| Error::LoadProperties {
            path: path.clone(),
            error,
        })?;
        debug!(path = %path.display(), count = loaded.len(), "loaded properties file");
        props.merge(loaded);
    }

    let mut overrides = Properties::new();
    for entry in &args.properties {
        let (name, value) = entry
            .split_once('=')
            .ok_or_else(|| Error::Usage(format!("invalid property '{entry}', expected key=value")))?;
        overrides.set(name, value);
    }

    if let Some(table_type) = &args.table_type {
        if table_type == TPC_DS {
            overrides.set(TABLE_TYPE_PROPERTY, TPC_DS);
        } else {
            warn!(%table_type, "unsupported table type ignored");
        }
    }
    props.merge(overrides);

    if let Some(field_count) = &args.field_count {
        let count: i64 = field_count
            .parse()
            .map_err(|_| Error::InvalidFieldCount(field_count.clone()))?;
        if count > 0 {
            props.set(FIELD_COUNT_PROPERTY, count.to_string());
        }
    }

    Ok(Config::new(props))
}

/// Runs the CLI program, reporting each created table to `out`.
pub fn run(args: &Args, out: &mut dyn Write) -> Result<(), Error> {
    let config = resolve(args)?;

    let plan = match config.table_type() {
        TableType::TpcDs => plan_tpc_ds(),
        TableType::General => {
            let table_name = args.table_name.as_deref().ok_or(Error::MissingTableName)?;
            plan_generic(table_name, config.field_count()?)
        }
    };
    let info = config.connect_info()?;

    run_plan(&info, &plan, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CONNECTION_USER, DRIVER_CLASS};
    use std::fs::write;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("dbprovision").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_flags() {
        let args = parse(&[
            "-P", "a.properties", "-p", "db.user=ycsb", "-n", "usertable", "-p", "x=1=2", "-f", "3", "-P",
            "b.properties",
        ]);
        assert_eq!(args.properties, vec!["db.user=ycsb", "x=1=2"]);
        assert_eq!(
            args.property_files,
            vec![PathBuf::from("a.properties"), PathBuf::from("b.properties")]
        );
        assert_eq!(args.table_name.as_deref(), Some("usertable"));
        assert_eq!(args.field_count.as_deref(), Some("3"));
        assert_eq!(args.table_type, None);
    }

    #[test]
    fn test_repeated_flags_last_wins() {
        let args = parse(&["-n", "a", "-f", "2", "-F", "TPC_H", "-n", "b", "-f", "3", "-F", "TPC_DS"]);
        assert_eq!(args.table_name.as_deref(), Some("b"));
        assert_eq!(args.field_count.as_deref(), Some("3"));
        assert_eq!(args.table_type.as_deref(), Some("TPC_DS"));

        // repeatable flags still accumulate.
        let args = parse(&["-p", "a=1", "-p", "b=2", "-P", "x", "-P", "y"]);
        assert_eq!(args.properties, vec!["a=1", "b=2"]);
        assert_eq!(args.property_files.len(), 2);

        let config = resolve(&parse(&["-f", "10", "-f", "3"])).unwrap();
        assert_eq!(config.field_count().unwrap(), 3);
    }

    #[test]
    fn test_parse_errors() {
        let test_cases: &[&[&str]] = &[&[], &["-x"], &["-n"], &["-n", "t", "extra"], &["-F"]];
        for args in test_cases {
            let res = Args::try_parse_from(std::iter::once("dbprovision").chain(args.iter().copied()));
            assert!(res.is_err(), "{args:?}");
        }
    }

    #[test]
    fn test_command_line_overrides_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.properties");
        write(&path, "db.driver=X\ndb.user=from_file\nfieldcount=5\n").unwrap();

        let args = parse(&["-P", path.to_str().unwrap(), "-p", "db.driver=Y", "-n", "t"]);
        let config = resolve(&args).unwrap();
        assert_eq!(config.properties().get(DRIVER_CLASS), Some("Y"));
        assert_eq!(config.properties().get(CONNECTION_USER), Some("from_file"));
        assert_eq!(config.field_count().unwrap(), 5);
    }

    #[test]
    fn test_later_files_win() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.properties");
        let second = dir.path().join("second.properties");
        write(&first, "db.url=first\ndb.user=a\n").unwrap();
        write(&second, "db.url=second\n").unwrap();

        let args = parse(&["-P", first.to_str().unwrap(), "-P", second.to_str().unwrap()]);
        let config = resolve(&args).unwrap();
        assert_eq!(config.properties().get("db.url"), Some("second"));
        assert_eq!(config.properties().get("db.user"), Some("a"));
    }

    #[test]
    fn test_field_count_flag() {
        let config = resolve(&parse(&["-p", "fieldcount=7", "-f", "2"])).unwrap();
        assert_eq!(config.field_count().unwrap(), 2);

        // zero and negative counts leave the property alone.
        let config = resolve(&parse(&["-p", "fieldcount=7", "-f", "0"])).unwrap();
        assert_eq!(config.field_count().unwrap(), 7);
        let config = resolve(&parse(&["-f", "-4"])).unwrap();
        assert_eq!(config.field_count().unwrap(), 10);

        let err = resolve(&parse(&["-n", "t", "-f", "abc"])).unwrap_err();
        assert!(matches!(err, Error::InvalidFieldCount(ref v) if v == "abc"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_table_type_flag() {
        let config = resolve(&parse(&["-F", "TPC_DS"])).unwrap();
        assert_eq!(config.table_type(), TableType::TpcDs);

        let config = resolve(&parse(&["-F", "TPC_H"])).unwrap();
        assert_eq!(config.table_type(), TableType::General);

        let config = resolve(&parse(&["-p", "TPC_DS=TPC_DS"])).unwrap();
        assert_eq!(config.table_type(), TableType::TpcDs);
    }

    #[test]
    fn test_malformed_property() {
        let err = resolve(&parse(&["-p", "novalue"])).unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_missing_properties_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.properties");
        let err = resolve(&parse(&["-P", path.to_str().unwrap()])).unwrap_err();
        assert!(matches!(err, Error::LoadProperties { .. }));
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_missing_table_name() {
        let args = parse(&["-p", "db.driver=script", "-p", "db.url=-", "-p", "db.user=u"]);
        let mut out = Vec::new();
        let err = run(&args, &mut out).unwrap_err();
        assert!(matches!(err, Error::MissingTableName));
        assert_ne!(err.exit_code(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_connection_info() {
        for args in [
            &["-n", "t", "-p", "db.url=-", "-p", "db.user=u"][..],
            &["-n", "t", "-p", "db.driver=script", "-p", "db.user=u"][..],
            &["-n", "t", "-p", "db.driver=script", "-p", "db.url=-"][..],
            &["-F", "TPC_DS", "-p", "db.driver=script"][..],
        ] {
            let mut out = Vec::new();
            let err = run(&parse(args), &mut out).unwrap_err();
            assert!(matches!(err, Error::MissingConnectionInfo), "{args:?}");
            assert!(out.is_empty());
        }
    }

    #[test]
    fn test_run_tpc_ds_without_table_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tpcds.sql");
        let url = format!("db.url={}", path.display());
        let args = parse(&["-F", "TPC_DS", "-p", "db.driver=script", "-p", &url, "-p", "db.user=u"]);
        let mut out = Vec::new();
        run(&args, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), 25);
        assert!(out.ends_with("Table web_site created..\nClosing database connection.\n"));

        let script = std::fs::read_to_string(path).unwrap();
        assert_eq!(script.lines().filter(|l| l.starts_with("DROP TABLE IF EXISTS ")).count(), 24);
        assert_eq!(script.lines().filter(|l| l.starts_with("CREATE TABLE ")).count(), 24);
    }
}
