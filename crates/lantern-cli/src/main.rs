//! Lantern CLI
//!
//! Startup wiring for the logging facade: selects the process-wide sink
//! from flags, builds one record from the arguments, and submits it.

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use lantern_log::{set_sink, ConsoleSink, JsonSink};
use lantern_models::{Level, LogRecord, ParamValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Human-readable single-line output
    Console,
    /// One JSON document per record
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "lantern")]
#[command(about = "Lantern - structured logging facade", long_about = None)]
struct Cli {
    /// Renderer installed as the process-wide sink
    #[arg(long, value_enum, default_value = "console")]
    format: Format,

    /// Severity of the emitted record
    #[arg(long, default_value = "info")]
    level: Level,

    /// Originating source recorded on the record
    #[arg(long)]
    source: Option<String>,

    /// Annotation in KEY=VALUE form; repeatable, order preserved
    #[arg(long = "param", value_name = "KEY=VALUE")]
    params: Vec<String>,

    /// Message of the record
    message: String,
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.format {
        Format::Console => set_sink(ConsoleSink::stdout()),
        Format::Json => set_sink(JsonSink::stdout()),
    }

    let mut record = LogRecord::new(cli.level, cli.message);
    if let Some(source) = cli.source {
        record = record.with_source(source);
    }
    for raw in &cli.params {
        let (key, value) = parse_param(raw)?;
        record.set_param(key, value);
    }

    lantern_log::log(record);
    Ok(())
}

fn parse_param(raw: &str) -> Result<(String, ParamValue)> {
    let Some((key, value)) = raw.split_once('=') else {
        bail!("malformed --param {raw:?}: expected KEY=VALUE");
    };
    if key.is_empty() {
        bail!("malformed --param {raw:?}: empty key");
    }
    Ok((key.to_string(), coerce_value(value)))
}

// Values parse as null/bool/int/float before falling back to string.
fn coerce_value(raw: &str) -> ParamValue {
    if raw == "null" {
        return ParamValue::Null;
    }
    if let Ok(b) = raw.parse::<bool>() {
        return ParamValue::Bool(b);
    }
    if let Ok(i) = raw.parse::<i64>() {
        return ParamValue::Int(i);
    }
    if let Ok(f) = raw.parse::<f64>() {
        return ParamValue::Float(f);
    }
    ParamValue::String(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_param_splits_on_first_equals() {
        let (key, value) = parse_param("query=a=b").unwrap();
        assert_eq!(key, "query");
        assert_eq!(value, ParamValue::String("a=b".into()));
    }

    #[test]
    fn test_parse_param_rejects_missing_equals() {
        assert!(parse_param("noequals").is_err());
        assert!(parse_param("=value").is_err());
    }

    #[test]
    fn test_coerce_value_types() {
        assert_eq!(coerce_value("null"), ParamValue::Null);
        assert_eq!(coerce_value("true"), ParamValue::Bool(true));
        assert_eq!(coerce_value("42"), ParamValue::Int(42));
        assert_eq!(coerce_value("2.5"), ParamValue::Float(2.5));
        assert_eq!(coerce_value("plain"), ParamValue::String("plain".into()));
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "lantern",
            "--format",
            "json",
            "--level",
            "warn",
            "--param",
            "host=db-1",
            "disk low",
        ])
        .unwrap();
        assert_eq!(cli.format, Format::Json);
        assert_eq!(cli.level, Level::Warn);
        assert_eq!(cli.params, vec!["host=db-1"]);
        assert_eq!(cli.message, "disk low");
    }
}
