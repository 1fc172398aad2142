//! Click-to-sort table CLI.
//!
//! Replays column selections against a record set and prints the resulting
//! table, the same way a header click re-renders it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use sorter::core::types::ColumnKey;
use sorter::exit_codes;
use sorter::io::init::{CONFIG_FILE, InitOptions, init_sorter};
use sorter::logging;
use sorter::render::{OutputFormat, render};
use sorter::session::TableSession;

#[derive(Parser)]
#[command(
    name = "sorter",
    version,
    about = "Sort a small record table by column, toggling direction on repeat"
)]
struct Cli {
    /// Config file; defaults apply when it does not exist.
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write `sorter.toml` and `records.json` with the built-in records.
    Init {
        /// Overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the table in its loaded order, no column active.
    Show {
        #[command(flatten)]
        table: TableArgs,
    },
    /// Select columns in order (like header clicks) and print the result.
    Sort {
        #[command(flatten)]
        table: TableArgs,

        /// Print the table after every selection, not just the last.
        #[arg(long)]
        each: bool,

        /// Columns to select: id, name, age.
        #[arg(required = true)]
        columns: Vec<ColumnKey>,
    },
}

#[derive(Args)]
struct TableArgs {
    /// JSON record set; overrides `records_path` from config.
    #[arg(long)]
    records: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() {
    logging::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // `--help` / `--version` print to stdout and exit 0.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            std::process::exit(exit_codes::INVALID);
        }
    };
    if let Err(err) = run(cli) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Init { force } => cmd_init(force),
        Command::Show { table } => cmd_show(&cli.config, &table),
        Command::Sort {
            table,
            each,
            columns,
        } => cmd_sort(&cli.config, &table, each, &columns),
    }
}

fn cmd_init(force: bool) -> Result<()> {
    let root = std::env::current_dir().context("resolve working directory")?;
    let paths = init_sorter(&root, &InitOptions { force })?;
    println!("{}", paths.config_path.display());
    println!("{}", paths.records_path.display());
    Ok(())
}

fn cmd_show(config_path: &Path, table: &TableArgs) -> Result<()> {
    let session = TableSession::open(config_path, table.records.as_deref())?;
    print!("{}", render(&session.view(), table.format)?);
    Ok(())
}

fn cmd_sort(config_path: &Path, table: &TableArgs, each: bool, columns: &[ColumnKey]) -> Result<()> {
    let mut session = TableSession::open(config_path, table.records.as_deref())?;
    for (index, column) in columns.iter().enumerate() {
        session.select(*column);
        let last = index + 1 == columns.len();
        if each || last {
            if each && index > 0 {
                println!();
            }
            print!("{}", render(&session.view(), table.format)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["sorter", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true }));
    }

    #[test]
    fn parse_sort_columns_in_order() {
        let cli = Cli::parse_from(["sorter", "sort", "age", "age", "name"]);
        match cli.command {
            Command::Sort { columns, each, .. } => {
                assert_eq!(columns, vec![ColumnKey::Age, ColumnKey::Age, ColumnKey::Name]);
                assert!(!each);
            }
            _ => panic!("expected sort command"),
        }
    }

    #[test]
    fn parse_rejects_unknown_column() {
        assert!(Cli::try_parse_from(["sorter", "sort", "email"]).is_err());
    }

    #[test]
    fn parse_sort_requires_a_column() {
        assert!(Cli::try_parse_from(["sorter", "sort"]).is_err());
    }

    #[test]
    fn parse_global_config_and_format() {
        let cli = Cli::parse_from([
            "sorter", "show", "--config", "alt.toml", "--format", "json",
        ]);
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
        match cli.command {
            Command::Show { table } => assert_eq!(table.format, OutputFormat::Json),
            _ => panic!("expected show command"),
        }
    }
}
