use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::error::{DiscrateError, Result};
use crate::inventory::{CdRecord, Inventory};
use crate::storage;

/// One of the six menu operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Load,
    Add,
    Display,
    Delete,
    Save,
    Exit,
}

impl MenuCommand {
    /// Parses a raw prompt entry, tolerating case and surrounding
    /// whitespace. Anything but the six letters is rejected here, so the
    /// dispatch loop only ever sees valid commands.
    fn from_input(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "l" => Some(Self::Load),
            "a" => Some(Self::Add),
            "i" => Some(Self::Display),
            "d" => Some(Self::Delete),
            "s" => Some(Self::Save),
            "x" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The interactive menu loop over generic streams.
///
/// Generic over input and output so scripted sessions in tests drive the
/// exact console protocol a user sees. The session owns the one in-memory
/// inventory and the storage path; nothing lives in process-wide state.
pub struct Repl<I, O>
where
    I: BufRead,
    O: Write,
{
    input_stream: I,
    output_stream: O,
    inventory: Inventory,
    storage_path: PathBuf,
}

impl<I, O> Repl<I, O>
where
    I: BufRead,
    O: Write,
{
    pub fn new(input_stream: I, output_stream: O, storage_path: PathBuf) -> Self {
        Self {
            input_stream,
            output_stream,
            inventory: Inventory::new(),
            storage_path,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Loads the saved inventory, then prompts until the user exits.
    /// Unanticipated storage failures propagate out of here and end the
    /// process; everything user-recoverable is handled in the loop.
    pub fn run(&mut self) -> Result<()> {
        self.reload()?;

        loop {
            self.print_menu()?;
            let command = match self.menu_choice()? {
                Some(command) => command,
                // input stream closed mid-session
                None => return Ok(()),
            };

            match command {
                MenuCommand::Exit => return Ok(()),
                MenuCommand::Load => self.handle_load()?,
                MenuCommand::Add => self.handle_add()?,
                MenuCommand::Display => self.display_inventory()?,
                MenuCommand::Delete => self.handle_delete()?,
                MenuCommand::Save => self.handle_save()?,
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(
            self.output_stream,
            "Menu\n\n[l] load Inventory from file\n[a] Add CD\n[i] Display Current Inventory"
        )?;
        writeln!(
            self.output_stream,
            "[d] delete CD from Inventory\n[s] Save Inventory to file\n[x] exit\n"
        )?;
        Ok(())
    }

    /// Repeats the prompt until one of the six valid characters arrives.
    /// `None` means the input stream reached end-of-file.
    fn menu_choice(&mut self) -> Result<Option<MenuCommand>> {
        loop {
            write!(
                self.output_stream,
                "Which operation would you like to perform? [l, a, i, d, s or x]: "
            )?;
            self.output_stream.flush()?;

            let Some(raw) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(command) = MenuCommand::from_input(&raw) {
                writeln!(self.output_stream)?;
                return Ok(Some(command));
            }
        }
    }

    fn handle_load(&mut self) -> Result<()> {
        writeln!(
            self.output_stream,
            "WARNING: If you continue, all unsaved data will be lost and the Inventory re-loaded from file."
        )?;
        let answer = self.prompt(
            "type 'yes' to continue and reload from file. otherwise reload will be canceled: ",
        )?;

        if answer.eq_ignore_ascii_case("yes") {
            writeln!(self.output_stream, "reloading...")?;
            self.reload()?;
        } else {
            self.prompt(
                "canceling... Inventory data NOT reloaded. Press [ENTER] to continue to the menu.",
            )?;
            self.display_inventory()?;
        }
        Ok(())
    }

    fn handle_add(&mut self) -> Result<()> {
        match self.prompt_record() {
            Ok(record) => {
                self.inventory.add(record);
                self.display_inventory()?;
            }
            // abandon the attempt, nothing partial is kept
            Err(err @ DiscrateError::InvalidId { .. }) => {
                writeln!(self.output_stream, "{err}")?;
            }
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn handle_delete(&mut self) -> Result<()> {
        self.display_inventory()?;
        let raw = self.prompt("Which ID would you like to delete? ")?;
        match parse_id(&raw) {
            Ok(id) => {
                let outcome = self.inventory.delete(id);
                writeln!(self.output_stream, "{}", outcome.message())?;
                writeln!(self.output_stream)?;
                self.display_inventory()?;
            }
            Err(err) => {
                writeln!(self.output_stream, "{err}")?;
            }
        }
        Ok(())
    }

    fn handle_save(&mut self) -> Result<()> {
        self.display_inventory()?;
        let answer = self.prompt("Save this inventory to file? [y/n] ")?;
        if answer.eq_ignore_ascii_case("y") {
            storage::save(&self.storage_path, &self.inventory)?;
        } else {
            self.prompt(
                "The inventory was NOT saved to file. Press [ENTER] to return to the menu.",
            )?;
        }
        Ok(())
    }

    /// Discards the working set and reads storage, announcing how the
    /// load was satisfied before listing the result.
    fn reload(&mut self) -> Result<()> {
        let (inventory, status) = storage::load(&self.storage_path)?;
        self.inventory = inventory;
        if let Some(message) = status.message() {
            writeln!(self.output_stream, "{message}")?;
        }
        self.display_inventory()
    }

    fn display_inventory(&mut self) -> Result<()> {
        self.inventory.render_into(&mut self.output_stream)?;
        Ok(())
    }

    /// Asks for the three record fields in order. Fails fast on a bad id
    /// so no partial record is ever built.
    fn prompt_record(&mut self) -> Result<CdRecord> {
        let raw = self.prompt("Enter ID: ")?;
        let id = parse_id(&raw)?;
        let title = self.prompt("What is the CD's title? ")?;
        let artist = self.prompt("What is the Artist's name? ")?;
        Ok(CdRecord::new(id, title, artist))
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output_stream, "{text}")?;
        self.output_stream.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    /// Reads one line, trimmed. `None` on end-of-file.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buffer = String::new();
        let read = self.input_stream.read_line(&mut buffer)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(buffer.trim().to_string()))
    }
}

fn parse_id(raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|_| DiscrateError::InvalidId { raw: raw.into() })
}
