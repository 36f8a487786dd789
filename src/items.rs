//! In-memory to-do list. Positions are zero-based here; the CLI layer
//! converts to and from the one-based numbers users see.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    Empty,
    OutOfRange { position: usize, len: usize },
}

impl fmt::Display for ItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemError::Empty => write!(f, "Item text is empty"),
            ItemError::OutOfRange { position, len } => {
                if *len == 0 {
                    write!(f, "Item {} not found (the list is empty)", position + 1)
                } else {
                    write!(
                        f,
                        "Item {} not found (the list has {} item{})",
                        position + 1,
                        len,
                        if *len == 1 { "" } else { "s" }
                    )
                }
            }
        }
    }
}

impl Error for ItemError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemList {
    items: Vec<String>,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from data file lines. Lines are taken as-is, blank
    /// lines included, so a reload never reorders or drops items.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { items: lines.into_iter().map(Into::into).collect() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn get(&self, position: usize) -> Result<&str, ItemError> {
        self.items
            .get(position)
            .map(String::as_str)
            .ok_or_else(|| self.out_of_range(position))
    }

    /// Append an item and return its position.
    pub fn add(&mut self, text: &str) -> Result<usize, ItemError> {
        let text = checked_text(text)?;
        self.items.push(text);
        Ok(self.items.len() - 1)
    }

    /// Replace the item at `position`, returning the previous text.
    pub fn set(
        &mut self,
        position: usize,
        text: &str,
    ) -> Result<String, ItemError> {
        let text = checked_text(text)?;
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(position)
            .ok_or(ItemError::OutOfRange { position, len })?;
        Ok(std::mem::replace(slot, text))
    }

    pub fn remove(&mut self, position: usize) -> Result<String, ItemError> {
        if position >= self.items.len() {
            return Err(self.out_of_range(position));
        }
        Ok(self.items.remove(position))
    }

    /// Remove several positions in one go. Positions refer to the list
    /// before any removal; the returned pairs are in ascending position
    /// order. Nothing is removed when any position is out of range.
    pub fn remove_many(
        &mut self,
        positions: &[usize],
    ) -> Result<Vec<(usize, String)>, ItemError> {
        let mut sorted = positions.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        if let Some(&bad) = sorted.iter().find(|&&p| p >= self.items.len()) {
            return Err(self.out_of_range(bad));
        }

        let mut removed: Vec<(usize, String)> = sorted
            .iter()
            .rev()
            .map(|&p| (p, self.items.remove(p)))
            .collect();
        removed.reverse();
        Ok(removed)
    }

    fn out_of_range(&self, position: usize) -> ItemError {
        ItemError::OutOfRange { position, len: self.items.len() }
    }
}

/// Fold line terminators (`\n`, `\r\n` and a lone `\r`) into spaces so an
/// item occupies exactly one line of the data file.
pub fn sanitize(text: &str) -> String {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn checked_text(text: &str) -> Result<String, ItemError> {
    let clean = sanitize(text);
    if clean.is_empty() { Err(ItemError::Empty) } else { Ok(clean) }
}
