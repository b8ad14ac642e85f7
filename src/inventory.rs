use std::fmt;
use std::io::Write;

use serde::{Deserialize, Serialize};

/// One CD entry as it lives in memory and on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdRecord {
    pub id: i64,
    pub title: String,
    pub artist: String,
}

impl CdRecord {
    pub fn new(id: i64, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
        }
    }
}

impl fmt::Display for CdRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{} (by:{})", self.id, self.title, self.artist)
    }
}

/// Outcome of a delete attempt, rendered by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed,
    NotFound,
}

impl DeleteOutcome {
    pub fn message(self) -> &'static str {
        match self {
            Self::Removed => "The CD was removed",
            Self::NotFound => "Could not find this CD!",
        }
    }
}

/// The in-memory working set of CD records, in insertion order.
///
/// IDs are user-supplied and NOT unique; duplicates are kept as-is and
/// [`Inventory::delete`] only ever removes the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    records: Vec<CdRecord>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to the end of the sequence. No uniqueness check.
    pub fn add(&mut self, record: CdRecord) {
        self.records.push(record);
    }

    /// Removes the first record whose id matches. If no record matches
    /// the inventory is left untouched.
    pub fn delete(&mut self, id: i64) -> DeleteOutcome {
        match self.records.iter().position(|r| r.id == id) {
            Some(index) => {
                self.records.remove(index);
                DeleteOutcome::Removed
            }
            None => DeleteOutcome::NotFound,
        }
    }

    pub fn records(&self) -> &[CdRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Writes the banner/header/rows/banner listing to `w`.
    pub fn render_into<W: Write>(&self, mut w: W) -> std::io::Result<()> {
        writeln!(w, "======= The Current Inventory: =======")?;
        writeln!(w, "ID\tCD Title (by: Artist)")?;
        writeln!(w)?;
        for record in &self.records {
            writeln!(w, "{record}")?;
        }
        writeln!(w, "======================================")
    }
}

impl FromIterator<CdRecord> for Inventory {
    fn from_iter<T: IntoIterator<Item = CdRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn render(inventory: &Inventory) -> Result<String> {
        let mut buf = Vec::new();
        inventory.render_into(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn add_then_render_exact_format() -> Result<()> {
        let mut inventory = Inventory::new();
        inventory.add(CdRecord::new(1, "Abbey Road", "The Beatles"));

        let out = render(&inventory)?;
        assert_eq!(
            out,
            "======= The Current Inventory: =======\n\
             ID\tCD Title (by: Artist)\n\
             \n\
             1\tAbbey Road (by:The Beatles)\n\
             ======================================\n"
        );
        Ok(())
    }

    #[test]
    fn render_empty_inventory() -> Result<()> {
        let out = render(&Inventory::new())?;
        assert_eq!(
            out,
            "======= The Current Inventory: =======\n\
             ID\tCD Title (by: Artist)\n\
             \n\
             ======================================\n"
        );
        Ok(())
    }

    #[test]
    fn delete_removes_first_match_only() {
        let mut inventory: Inventory = [
            CdRecord::new(7, "First", "A"),
            CdRecord::new(3, "Middle", "B"),
            CdRecord::new(7, "Second", "C"),
        ]
        .into_iter()
        .collect();

        assert_eq!(inventory.delete(7), DeleteOutcome::Removed);
        assert_eq!(
            inventory.records(),
            &[CdRecord::new(3, "Middle", "B"), CdRecord::new(7, "Second", "C")]
        );
    }

    #[test]
    fn delete_absent_id_leaves_inventory_unchanged() {
        let mut inventory: Inventory = [CdRecord::new(1, "Solo", "X")].into_iter().collect();

        assert_eq!(inventory.delete(99), DeleteOutcome::NotFound);
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn duplicate_ids_are_allowed() {
        let mut inventory = Inventory::new();
        inventory.add(CdRecord::new(5, "One", "A"));
        inventory.add(CdRecord::new(5, "Two", "B"));
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(DeleteOutcome::Removed.message(), "The CD was removed");
        assert_eq!(DeleteOutcome::NotFound.message(), "Could not find this CD!");
    }
}
