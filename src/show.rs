// Splits `show` arguments and routes them to the registry or the history buffer.
use log::debug;

use crate::history::{HistoryBuffer, HistoryField, HistoryLog};
use crate::registry::{Composite, SettingsRegistry};

/// Borrowed view over everything `show` can read. Built per command so the
/// editor log is never held between turns.
pub struct ShowCommand<'a> {
    pub registry: &'a SettingsRegistry,
    pub history: &'a HistoryBuffer,
    pub log: &'a dyn HistoryLog,
    pub script_mode: bool,
}

impl<'a> ShowCommand<'a> {
    pub fn execute(&self, raw_args: &str) -> Vec<String> {
        let mut words = raw_args.split_whitespace();
        let name = words.next().unwrap_or("");
        let rest: Vec<&str> = words.collect();
        debug!("show {:?} {:?}", name, rest);

        match Composite::from_name(name) {
            Some(Composite::History) => self.history_lines(&rest),
            Some(Composite::Commands) => {
                let count = rest.first().and_then(|w| parse_count(w));
                self.history.show_commands(self.log, count)
            }
            None => self.registry.show(name, self.script_mode),
        }
    }

    fn history_lines(&self, rest: &[&str]) -> Vec<String> {
        match rest.first() {
            None => self.history.show_summary(),
            Some(word) => match HistoryField::parse(word) {
                Some(field) => vec![self.history.show_field(field)],
                None => vec![format!("Unknown show history subcommand {}", rest.join(" "))],
            },
        }
    }
}

fn parse_count(word: &str) -> Option<usize> {
    match word.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            debug!("ignoring malformed count {:?}", word);
            None
        }
    }
}
