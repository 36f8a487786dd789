use crate::items::ItemList;
use log::{debug, error};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DATA_FILE: &str = "data.txt";

pub fn data_dir() -> io::Result<PathBuf> {
    if let Ok(dir) = std::env::var("SIMPLE_TODO_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").map_err(|_| {
        io::Error::other("HOME not set; set SIMPLE_TODO_DIR explicitly")
    })?;
    Ok(PathBuf::from(home).join(".simple_todo"))
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Line-per-item storage in a single file. Every save rewrites the whole
/// file; there is no locking between concurrent writers.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        ensure_dir(&dir)?;
        Ok(Self { dir })
    }

    pub fn data_file(&self) -> PathBuf {
        self.dir.join(DATA_FILE)
    }

    /// Read every line of the data file. Read failures fall back to an
    /// empty list so the list view always opens.
    pub fn load(&self) -> ItemList {
        let path = self.data_file();
        match fs::read(&path) {
            Ok(raw) => ItemList::from_lines(String::from_utf8_lossy(&raw).lines()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No data file at {}; starting empty", path.display());
                ItemList::new()
            }
            Err(e) => {
                error!("Error reading items from {}: {e}", path.display());
                ItemList::new()
            }
        }
    }

    pub fn save(&self, items: &ItemList) -> io::Result<()> {
        let path = self.data_file();
        let mut content = String::new();
        for item in items.iter() {
            content.push_str(item);
            content.push('\n');
        }
        fs::write(&path, content).inspect_err(|e| {
            error!("Error writing items to {}: {e}", path.display());
        })
    }
}
