use crate::args::ArgParser;
use crate::editor::edit_text;
use crate::formatting::FormatContext;
use crate::items::{ItemList, sanitize};
use crate::layout::{
    DEFAULT_COLUMNS, pad_left, terminal_columns, truncate_with_ellipsis,
};
use crate::store::Store;
use log::{debug, info};
use std::error::Error;

pub const ADDED: &str = "Added todo item!";
pub const REMOVED: &str = "Item removed!";
pub const UPDATED: &str = "Item updated!";

pub fn add_item(args: Vec<String>, store: &Store) -> Result<(), Box<dyn Error>> {
    if args.is_empty() {
        return Err("Provide the item text, e.g. `todo add \"Buy milk\"`".into());
    }
    let text = args.join(" ");
    let mut items = store.load();
    let position = items.add(&text)?;
    store.save(&items)?;
    debug!("Inserted item at position {}", position + 1);

    let ctx = FormatContext::from_env();
    println!("{}", notice_line(&ctx, ADDED, position, items.get(position)?));
    Ok(())
}

pub fn edit_item(args: Vec<String>, store: &Store) -> Result<(), Box<dyn Error>> {
    if args.is_empty() {
        return Err("Usage: todo edit <n> [text...]".into());
    }
    let mut parser = ArgParser::new(args, "edit");
    let position = parser.extract_position()?;
    let replacement = parser.collect_remaining();

    let mut items = store.load();
    let current = items.get(position)?.to_string();
    debug!("Selected item at position {} for edit", position + 1);

    let edited = if replacement.is_empty() {
        edit_text(&current)?
    } else {
        replacement.join(" ")
    };
    // Editors append a trailing newline; a session that saved nothing
    // matches the stored text once that is stripped.
    let untouched = edited.trim_end_matches(['\r', '\n']) == current;
    if untouched || sanitize(&edited) == current {
        println!("No changes.");
        return Ok(());
    }

    items.set(position, &edited)?;
    store.save(&items)?;

    let ctx = FormatContext::from_env();
    println!("{}", notice_line(&ctx, UPDATED, position, items.get(position)?));
    Ok(())
}

pub fn delete_items(
    args: Vec<String>,
    store: &Store,
) -> Result<(), Box<dyn Error>> {
    if args.is_empty() {
        return Err("Usage: todo delete <n...>".into());
    }
    let mut parser = ArgParser::new(args, "delete");
    let mut positions = Vec::new();
    while parser.has_more() {
        positions.push(parser.extract_position()?);
    }

    let mut items = store.load();
    let removed = items.remove_many(&positions)?;
    store.save(&items)?;
    info!("Removed {} item(s); {} left", removed.len(), items.len());

    let ctx = FormatContext::from_env();
    for (position, text) in &removed {
        println!(
            "{} {} {}",
            ctx.format_removed(REMOVED),
            ctx.format_position(*position),
            ctx.format_item(text)
        );
    }
    Ok(())
}

pub fn list_items(args: Vec<String>, store: &Store) -> Result<(), Box<dyn Error>> {
    let mut plain = false;
    let mut width: Option<usize> = None;
    let mut parser = ArgParser::new(args, "list");
    while let Some(arg) = parser.next() {
        match arg.as_str() {
            "--plain" => plain = true,
            "--width" => {
                let raw = parser.extract_value("--width")?;
                let w = raw
                    .parse::<usize>()
                    .map_err(|_| format!("Invalid width: {raw}"))?;
                width = Some(w);
            }
            other => {
                return Err(format!("Unknown flag for list: {other}").into());
            }
        }
    }

    let items = store.load();
    let ctx = FormatContext::from_env_plain(plain);
    if items.is_empty() {
        println!(
            "{}",
            ctx.format_hint("No items yet. Try `todo add \"text\"`.")
        );
        return Ok(());
    }

    let width = width.or_else(terminal_columns).unwrap_or(DEFAULT_COLUMNS);
    for row in render_rows(&items, &ctx, width) {
        println!("{row}");
    }
    Ok(())
}

/// One row per item: a right-aligned `n.` label, a space, and the text cut
/// to fit `width` columns.
pub fn render_rows(
    items: &ItemList,
    ctx: &FormatContext,
    width: usize,
) -> Vec<String> {
    let label_width = items.len().to_string().len() + 1;
    let text_width = width.saturating_sub(label_width + 1).max(1);
    items
        .iter()
        .enumerate()
        .map(|(position, text)| {
            let label = pad_left(&ctx.format_position(position), label_width);
            let text = truncate_with_ellipsis(text, text_width);
            format!("{label} {}", ctx.format_item(&text)).trim_end().to_string()
        })
        .collect()
}

fn notice_line(
    ctx: &FormatContext,
    notice: &str,
    position: usize,
    text: &str,
) -> String {
    format!(
        "{} {} {}",
        ctx.format_notice(notice),
        ctx.format_position(position),
        ctx.format_item(text)
    )
}
