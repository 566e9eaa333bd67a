//! eventmark CLI entry point.
//!
//! Reads a JSON array of calendar events, renders them as one markdown
//! block per the persisted settings and command-line overrides, and
//! writes the block to stdout.

use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use eventmark_cli::cli::Cli;
use eventmark_cli::config::Settings;
use eventmark_cli::error::CliResult;
use eventmark_core::{
    CalendarEvent, Cursor, FieldPath, RenderConfig, SELECTABLE_FIELDS, TracingConfig,
    init_tracing, render,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let tracing_config = if cli.debug {
        TracingConfig::verbose()
    } else {
        TracingConfig::default()
    };
    if let Err(e) = init_tracing(tracing_config) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    if cli.list_fields {
        for field in SELECTABLE_FIELDS {
            println!("{}", field);
        }
        return Ok(());
    }

    let settings = if let Some(ref path) = cli.config {
        Settings::load_from(path)?
    } else {
        Settings::load().unwrap_or_default()
    };

    let events = read_events(cli.file.as_deref())?;
    tracing::debug!(events = events.len(), "loaded events");

    let columns = if cli.columns.is_empty() {
        &settings.columns
    } else {
        &cli.columns
    };
    let config = RenderConfig {
        style: cli.style.map(Into::into).unwrap_or(settings.style),
        use_link: cli.use_link(settings.use_link),
        use_time: cli.use_time(settings.use_time),
        columns: columns.iter().map(|c| FieldPath::new(c.as_str())).collect(),
    };

    // stdout plays the document collaborator: the block is written
    // verbatim, plus a final newline when the style does not end in one.
    let result = render(&events, &config, Cursor::default());
    print!("{}", result.text);
    if !result.text.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn read_events(file: Option<&Path>) -> CliResult<Vec<CalendarEvent>> {
    let data = match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&data)?)
}
