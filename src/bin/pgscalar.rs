// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::{Parser, ValueEnum};
use pgscalar::core::{Engine, EngineConfig, PgError, QueryResult};
use pgscalar::query_api::TypeCategory;
use pgscalar::sql_compiler::split_statements;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "pgscalar")]
#[command(version)]
#[command(about = "Evaluate scalar SQL expressions with PostgreSQL semantics")]
#[command(long_about = "Evaluate scalar SQL expressions with PostgreSQL semantics

USAGE MODES:
  Execute Command:     pgscalar -c \"SELECT gcd(12, 18)\"
  Execute from stdin:  echo \"SELECT sqrt(2::float8);\" | pgscalar

CONFIGURATION:
  Settings are read from <config dir>/pgscalar/config.toml (or --config):
    [engine]
    extra_float_digits = 1
    max_text_length = 1073741823
    log_statements = false

  PGSCALAR_<SETTING> environment variables override the file, and
  SET/RESET change them for the rest of the session.")]
struct Args {
    /// Execute SQL command(s); may be repeated
    #[arg(short, long, value_name = "SQL")]
    command: Vec<String>,

    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format for query results
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = match EngineConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("pgscalar: {}", e);
            return ExitCode::from(2);
        }
    };
    let mut engine = Engine::with_config(config);

    let scripts = if args.command.is_empty() {
        let mut input = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut input) {
            eprintln!("pgscalar: could not read standard input: {}", e);
            return ExitCode::from(2);
        }
        vec![input]
    } else {
        args.command
    };

    for script in &scripts {
        for statement in split_statements(script) {
            match engine.execute(&statement) {
                Ok(result) => {
                    let extra_float_digits = engine.config().extra_float_digits();
                    print!("{}", format_result(&result, args.format, extra_float_digits));
                }
                Err(err) => {
                    eprint!("{}", format_error(&err));
                    return ExitCode::from(1);
                }
            }
        }
    }
    ExitCode::SUCCESS
}

fn format_result(result: &QueryResult, format: OutputFormat, extra_float_digits: i32) -> String {
    if result.columns.is_empty() {
        return format!("{}\n", result.command_tag);
    }
    let cells: Vec<Vec<Option<String>>> = result
        .rows
        .iter()
        .map(|row| row.iter().map(|d| d.to_text(extra_float_digits)).collect())
        .collect();
    match format {
        OutputFormat::Table => format_table(result, &cells),
        OutputFormat::Json => format_json(result, &cells),
        OutputFormat::Csv => format_csv(result, &cells),
    }
}

/// psql's aligned format: centered headers, numbers right-aligned
fn format_table(result: &QueryResult, cells: &[Vec<Option<String>>]) -> String {
    let widths: Vec<usize> = result
        .columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            cells
                .iter()
                .filter_map(|row| row[i].as_ref())
                .map(|text| text.chars().count())
                .chain(std::iter::once(column.name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header: Vec<String> = result
        .columns
        .iter()
        .zip(&widths)
        .map(|(column, width)| format!(" {:^width$} ", column.name, width = width))
        .collect();
    out.push_str(header.join("|").trim_end());
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(width + 2)).collect();
    out.push_str(&rule.join("+"));
    out.push('\n');

    for row in cells {
        let line: Vec<String> = row
            .iter()
            .zip(&result.columns)
            .zip(&widths)
            .map(|((cell, column), width)| {
                let text = cell.as_deref().unwrap_or("");
                if column.ty.category() == TypeCategory::Numeric {
                    format!(" {:>width$} ", text, width = width)
                } else {
                    format!(" {:<width$} ", text, width = width)
                }
            })
            .collect();
        out.push_str(line.join("|").trim_end());
        out.push('\n');
    }

    match cells.len() {
        1 => out.push_str("(1 row)\n"),
        n => out.push_str(&format!("({} rows)\n", n)),
    }
    out.push('\n');
    out
}

fn format_json(result: &QueryResult, cells: &[Vec<Option<String>>]) -> String {
    let rows: Vec<serde_json::Value> = result
        .rows
        .iter()
        .zip(cells)
        .map(|(row, texts)| {
            let mut object = serde_json::Map::new();
            for ((column, datum), text) in result.columns.iter().zip(row).zip(texts) {
                object.insert(column.name.clone(), json_value(datum, text.as_deref()));
            }
            serde_json::Value::Object(object)
        })
        .collect();
    let mut out = serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".to_string());
    out.push('\n');
    out
}

fn json_value(datum: &pgscalar::Datum, text: Option<&str>) -> serde_json::Value {
    use pgscalar::Datum;
    match (datum, text) {
        (Datum::Null, _) | (_, None) => serde_json::Value::Null,
        (Datum::Bool(b), _) => serde_json::Value::Bool(*b),
        (Datum::Int2(_) | Datum::Int4(_) | Datum::Int8(_), _) => datum
            .as_i64()
            .map(serde_json::Value::from)
            .unwrap_or(serde_json::Value::Null),
        (Datum::Float4(_) | Datum::Float8(_), Some(text)) => datum
            .as_f64()
            .and_then(serde_json::Number::from_f64)
            .map(serde_json::Value::Number)
            .unwrap_or_else(|| serde_json::Value::String(text.to_string())),
        // numeric keeps its exact digits
        (_, Some(text)) => serde_json::Value::String(text.to_string()),
    }
}

fn format_csv(result: &QueryResult, cells: &[Vec<Option<String>>]) -> String {
    let mut out = String::new();
    let header: Vec<String> = result.columns.iter().map(|c| csv_field(&c.name)).collect();
    out.push_str(&header.join(","));
    out.push('\n');
    for row in cells {
        let fields: Vec<String> = row
            .iter()
            .map(|cell| cell.as_deref().map(csv_field).unwrap_or_default())
            .collect();
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}

fn csv_field(text: &str) -> String {
    if text.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

/// `ERROR:  22012: division by zero`, followed by DETAIL/HINT lines
fn format_error(err: &PgError) -> String {
    let mut out = format!("ERROR:  {}: {}\n", err.code, err.message);
    if let Some(detail) = &err.detail {
        out.push_str(&format!("DETAIL:  {}\n", detail));
    }
    if let Some(hint) = &err.hint {
        out.push_str(&format!("HINT:  {}\n", hint));
    }
    out
}
