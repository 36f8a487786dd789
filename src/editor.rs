use std::env;
use std::error::Error;
use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

/// Resolve the editor command line from the environment.
pub fn editor_command() -> Vec<String> {
    editor_command_from(env::var("VISUAL").ok(), env::var("EDITOR").ok())
}

/// `visual`, then `editor`, then `vi`; blank values are skipped. The value
/// is split on whitespace so `code --wait` style commands work.
pub fn editor_command_from(
    visual: Option<String>,
    editor: Option<String>,
) -> Vec<String> {
    let raw = [visual, editor]
        .into_iter()
        .flatten()
        .find(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "vi".to_string());
    raw.split_whitespace().map(str::to_string).collect()
}

/// Open `initial` in the user's editor and return what was saved.
///
/// The text lives in a scratch file for the duration of the session; the
/// data file is never handed to the editor directly.
pub fn edit_text(initial: &str) -> Result<String, Box<dyn Error>> {
    let mut scratch = tempfile::Builder::new()
        .prefix("todo-item-")
        .suffix(".txt")
        .tempfile()?;
    writeln!(scratch, "{initial}")?;
    scratch.flush()?;

    let mut parts = editor_command().into_iter();
    let program = parts.next().ok_or("Editor command is empty")?;
    let status = Command::new(&program)
        .args(parts)
        .arg(scratch.path())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| format!("Failed to launch editor {program}: {e}"))?;
    if !status.success() {
        return Err("Editor exited with non-zero status".into());
    }

    Ok(fs::read_to_string(scratch.path())?)
}
