//! Simple CLI that reads HTML from stdin and outputs JSON to stdout.
//!
//! ```text
//! mobilize_stdin [--url URL] [--mode none|mobilize|overlay] [--rules FILE]
//!                [--options FILE] [--remove CLASS]... [--indicator TEXT]
//!                [--tables] [--comments] [--no-heuristic]
//! ```
//!
//! `--options` loads a JSON `Options` and replaces everything set before it.
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::fs;
use std::io::{self, Read};
use std::process;

use rs_mobilizer::{mobilize_with_hooks, AbsoluteLinks, Hooks, MobilizeMode, Options, RuleError, SelectionKind};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Output {
    html: String,
    selection: SelectionKind,
    best_weight: Option<i32>,
    rule_errors: Vec<RuleError>,
    warnings: Vec<String>,
    error: Option<String>,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let mut value = || iter.next().cloned().ok_or_else(|| format!("{arg} needs a value"));
        match arg.as_str() {
            "--options" => {
                let path = value()?;
                let json = fs::read_to_string(&path).map_err(|e| format!("{path}: {e}"))?;
                options = Options::from_json(&json).map_err(|e| e.to_string())?;
            }
            "--url" => options.url = value()?,
            "--mode" => {
                options.mode = match value()?.as_str() {
                    "none" => MobilizeMode::None,
                    "mobilize" => MobilizeMode::Mobilize,
                    "overlay" => MobilizeMode::MobilizeWithTagOverlay,
                    other => return Err(format!("unknown mode: {other}")),
                };
            }
            "--rules" => {
                let path = value()?;
                options.rules_blob = Some(fs::read_to_string(&path).map_err(|e| format!("{path}: {e}"))?);
            }
            "--remove" => options.remove_classes.push(value()?),
            "--indicator" => options.content_indicator = Some(value()?),
            "--tables" => options.include_tables = true,
            "--comments" => options.load_comments = true,
            "--no-heuristic" => options.find_best_element = false,
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(options)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };

    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        process::exit(1);
    }

    let hooks = Hooks {
        markup: &AbsoluteLinks,
        ..Hooks::default()
    };

    let output = match mobilize_with_hooks(&html, &options, &hooks) {
        Ok(r) => Output {
            html: r.html,
            selection: r.selection,
            best_weight: r.best_weight,
            rule_errors: r.rule_errors,
            warnings: r.warnings,
            error: None,
        },
        Err(e) => Output {
            html: String::new(),
            selection: SelectionKind::Document,
            best_weight: None,
            rule_errors: Vec::new(),
            warnings: Vec::new(),
            error: Some(e.to_string()),
        },
    };

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
