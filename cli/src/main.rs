//! when CLI — driving adapter for config-driven `when` expressions.
//!
//! Subcommands:
//! - `eval <config> <value>` — print the action selected for `value`
//! - `check <config>` — validate config and report unreachable cases
//! - `help` — print usage
//!
//! Set `RUST_LOG=when=debug` (or `trace`) to see selection events on stderr.

use std::process;

use serde_json::Value;
use when::WhenConfig;

/// Scrutinees and candidates are arbitrary JSON values; actions are strings.
type Config = WhenConfig<Value, String>;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "eval" => cmd_eval(&args[2..]),
        "check" => cmd_check(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("error: unknown command \"{other}\"");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Install a stderr subscriber, only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Commands
// ═══════════════════════════════════════════════════════════════════════════════

fn cmd_eval(args: &[String]) -> Result<(), String> {
    let [config_path, raw] = args else {
        return Err("eval requires a config file path and a value".into());
    };

    let config = load_config(config_path)?;
    println!("{}", eval_config(&config, raw)?);
    Ok(())
}

fn cmd_check(args: &[String]) -> Result<(), String> {
    let [config_path] = args else {
        return Err("check requires a config file path".into());
    };

    let config = load_config(config_path)?;
    for line in check_report(&config)? {
        println!("{line}");
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════════
// Evaluation
// ═══════════════════════════════════════════════════════════════════════════════

fn eval_config(config: &Config, raw: &str) -> Result<String, String> {
    let value = parse_value(raw);
    tracing::debug!(%value, cases = config.len(), "evaluating");
    config.evaluate(&value).map_err(|e| e.to_string())
}

fn check_report(config: &Config) -> Result<Vec<String>, String> {
    let list = config.build().map_err(|e| format!("config invalid: {e}"))?;

    let mut lines = vec![format!("Config valid ({} cases)", list.len())];
    for index in list.unreachable() {
        lines.push(format!("warning: case {index} is unreachable"));
    }
    if !list.has_default() {
        lines.push("warning: no default case; unmatched values are an error".to_string());
    }
    Ok(lines)
}

// ═══════════════════════════════════════════════════════════════════════════════
// Config loading
// ═══════════════════════════════════════════════════════════════════════════════

fn load_config(path: &str) -> Result<Config, String> {
    let content =
        std::fs::read_to_string(path).map_err(|e| format!("failed to read \"{path}\": {e}"))?;

    let is_json = std::path::Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Config::from_json(&content).map_err(|e| e.to_string())
    } else {
        // Default to YAML (handles .yaml and .yml)
        serde_yaml::from_str(&content).map_err(|e| format!("YAML parse error: {e}"))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Argument parsing
// ═══════════════════════════════════════════════════════════════════════════════

/// Parse a scrutinee as JSON, falling back to a plain string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

fn print_usage() {
    eprintln!(
        "Usage: when <command> [options]

Commands:
  eval <config> <value>   Print the action selected for value (parsed as JSON,
                          or taken as a string if it is not valid JSON)
  check <config>          Validate config and report unreachable cases
  help                    Show this help"
    );
}
