//! Simple To-Do: a single list of one-line items kept in a plain-text data
//! file, one item per line.

pub mod args;
pub mod editor;
pub mod formatting;
mod help;
pub mod items;
pub mod layout;
pub mod operations;
pub mod store;

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::env;
use std::error::Error;
use std::str::FromStr;

use crate::store::{Store, data_dir};

pub fn entry() -> Result<(), Box<dyn Error>> {
    init_logging();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let cmd = if args.is_empty() { "list".to_string() } else { args.remove(0) };

    if matches!(cmd.as_str(), "help" | "-h" | "--help") {
        return help::run(args);
    }

    let store = Store::open(data_dir()?)?;

    match cmd.as_str() {
        "list" | "ls" => operations::list_items(args, &store)?,
        "add" => operations::add_item(args, &store)?,
        "edit" => operations::edit_item(args, &store)?,
        "delete" | "rm" => operations::delete_items(args, &store)?,
        "path" => println!("{}", store.data_file().display()),
        other => {
            help::run(Vec::new())?;
            return Err(format!("Unknown command: {other}").into());
        }
    }

    Ok(())
}

/// Diagnostics go to stderr at the level named by `SIMPLE_TODO_LOG`
/// (default `warn`). Logging is optional, so init errors are ignored.
fn init_logging() {
    let level = env::var("SIMPLE_TODO_LOG")
        .ok()
        .and_then(|v| LevelFilter::from_str(v.trim()).ok())
        .unwrap_or(LevelFilter::Warn);
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();
    let _ =
        TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Never);
}
