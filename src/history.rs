// Command history: persistence settings, the shell's own recorder, and the
// "show commands" view over the line editor's log.
use std::path::PathBuf;

use log::debug;

use crate::error::{Result, ShellError};
use crate::setting::on_off;

/// Read-only view of the line editor's history, oldest first.
pub trait HistoryLog {
    fn len(&self) -> usize;
    fn get(&self, index: usize) -> Option<&str>;
}

impl HistoryLog for Vec<String> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<&str> {
        self.as_slice().get(index).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryField {
    Filename,
    Save,
    Size,
}

impl HistoryField {
    pub const ALL: [HistoryField; 3] = [HistoryField::Filename, HistoryField::Save, HistoryField::Size];

    pub fn parse(word: &str) -> Option<Self> {
        match word {
            "filename" => Some(HistoryField::Filename),
            "save" => Some(HistoryField::Save),
            "size" => Some(HistoryField::Size),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HistoryField::Filename => "filename",
            HistoryField::Save => "save",
            HistoryField::Size => "size",
        }
    }
}

pub struct HistoryBuffer {
    file: PathBuf,
    save_enabled: bool,
    max_size: usize,
    recorded: Vec<String>,
}

impl HistoryBuffer {
    pub fn new(file: PathBuf, save_enabled: bool, max_size: usize) -> Result<Self> {
        check_size(max_size)?;
        Ok(Self { file, save_enabled, max_size, recorded: Vec::new() })
    }

    pub fn file(&self) -> &PathBuf {
        &self.file
    }

    pub fn save_enabled(&self) -> bool {
        self.save_enabled
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn set_file(&mut self, file: PathBuf) {
        self.file = file;
    }

    pub fn set_save_enabled(&mut self, on: bool) {
        self.save_enabled = on;
    }

    pub fn set_max_size(&mut self, max_size: usize) -> Result<()> {
        check_size(max_size)?;
        self.max_size = max_size;
        self.trim();
        Ok(())
    }

    /// Shell-side record of a line, kept apart from the editor's log.
    pub fn record(&mut self, line: String) {
        self.recorded.push(line);
        self.trim();
    }

    pub fn recorded(&self) -> &[String] {
        &self.recorded
    }

    fn trim(&mut self) {
        if self.recorded.len() > self.max_size {
            let excess = self.recorded.len() - self.max_size;
            self.recorded.drain(..excess);
        }
    }

    pub fn show_summary(&self) -> Vec<String> {
        HistoryField::ALL
            .iter()
            .map(|f| format!("{}: {}", f.label(), self.show_field(*f)))
            .collect()
    }

    pub fn show_field(&self, field: HistoryField) -> String {
        match field {
            HistoryField::Filename => {
                format!("The command history file is \"{}\"", self.file.display())
            }
            HistoryField::Save => format!("Saving history is {}.", on_off(self.save_enabled)),
            HistoryField::Size => format!("Byebug history's maximum size is {}", self.max_size),
        }
    }

    /// The newest `count` (or `max_size`) editor entries, oldest first, each
    /// numbered by its position in the whole log, right-aligned to five columns.
    pub fn show_commands(&self, log: &dyn HistoryLog, count: Option<usize>) -> Vec<String> {
        if !self.save_enabled {
            return vec!["No readline support".to_string()];
        }
        let n = count.unwrap_or(self.max_size);
        let total = log.len();
        let start = total - n.min(total);
        debug!("show commands: {} of {} entries from {}", total - start, total, start + 1);
        (start..total)
            .filter_map(|i| log.get(i).map(|text| format!("{:>5}  {}", i + 1, text)))
            .collect()
    }
}

fn check_size(max_size: usize) -> Result<()> {
    if max_size == 0 {
        return Err(ShellError::InvalidValue { name: "history size".into(), value: "0".into() });
    }
    Ok(())
}
