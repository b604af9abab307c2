//! oxide-sqlstring CLI
//!
//! Command-line tool for formatting SQL templates and escaping values.

use std::io::Read;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_sqlstring::prelude::*;
use oxide_sqlstring::escape_identifier;

/// Escape values and format SQL templates, MySQL style.
#[derive(Parser)]
#[command(name = "oxide-sqlstring")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Substitute values into a SQL template.
    Format {
        /// SQL template (`-` reads it from stdin).
        template: String,

        /// Values as a JSON array, or a single JSON value.
        #[arg(long, default_value = "[]")]
        values: String,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Escape a single JSON value as a SQL literal.
    Escape {
        /// JSON value.
        value: String,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Escape identifiers.
    EscapeId {
        /// Identifiers to escape.
        #[arg(required = true)]
        names: Vec<String>,

        /// Quote each name as a whole instead of splitting on `.`.
        #[arg(long)]
        forbid_qualified: bool,
    },
}

#[derive(Args)]
struct OptionArgs {
    /// Render objects as '[object Object]' instead of expanding them.
    #[arg(long)]
    stringify_objects: bool,

    /// Time zone for dates: `local`, `Z` or an offset such as `+05:30`.
    #[arg(short, long, env = "SQLSTRING_TIMEZONE", default_value = "local")]
    timezone: String,
}

impl OptionArgs {
    fn to_options(&self) -> FormatOptions {
        let options = FormatOptions::new().timezone(self.timezone.as_str());
        if self.stringify_objects {
            options.stringify_objects(true)
        } else {
            options
        }
    }
}

fn parse_json(text: &str) -> anyhow::Result<SqlValue> {
    let json: serde_json::Value =
        serde_json::from_str(text).with_context(|| format!("Invalid JSON value: {text}"))?;
    Ok(SqlValue::from(json))
}

fn read_template(template: String) -> anyhow::Result<String> {
    if template != "-" {
        return Ok(template);
    }

    let mut sql = String::new();
    std::io::stdin()
        .read_to_string(&mut sql)
        .context("Failed to read template from stdin")?;
    Ok(sql)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Format {
            template,
            values,
            options,
        } => {
            let sql = read_template(template)?;
            let values = parse_json(&values)?;
            let options = options.to_options();
            debug!("Formatting with {options:?}");

            println!("{}", format_value(&sql, &values, &options));
        }

        Commands::Escape { value, options } => {
            let value = parse_json(&value)?;
            let options = options.to_options();
            let stringify = options.stringify_objects;

            println!("{}", escape_with(&value, stringify, &options.timezone));
        }

        Commands::EscapeId {
            names,
            forbid_qualified,
        } => {
            for name in &names {
                println!("{}", escape_identifier(name, forbid_qualified));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_option_args() {
        let cli = Cli::parse_from([
            "oxide-sqlstring",
            "format",
            "SELECT ?",
            "--stringify-objects",
            "--timezone",
            "+02:00",
        ]);
        let Commands::Format { options, .. } = cli.command else {
            panic!("expected the format command");
        };
        let options = options.to_options();
        assert_eq!(options.stringify_objects, Some(true));
        assert_eq!(options.timezone, Timezone::Offset(120));
    }

    #[test]
    fn test_parse_json() {
        assert_eq!(parse_json("[1, \"a\"]").unwrap(), params![1, "a"].to_sql_value());
        assert!(parse_json("{").is_err());
    }
}
