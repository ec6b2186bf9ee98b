// Nearest-name lookup for mistyped shell verbs and setting names.
use strsim::levenshtein;

use crate::registry::SettingsRegistry;

pub const COMMANDS: [&str; 5] = ["show", "set", "help", "quit", "exit"];

/// Closest candidate at most `max_edits` away. A word that is already a
/// candidate has nothing to correct.
pub fn nearest<'a>(word: &str, candidates: &[&'a str], max_edits: usize) -> Option<&'a str> {
    if word.is_empty() || candidates.iter().any(|c| *c == word) {
        return None;
    }
    candidates
        .iter()
        .map(|c| (levenshtein(word, c), *c))
        .filter(|(d, _)| *d <= max_edits)
        .min_by_key(|(d, _)| *d)
        .map(|(_, c)| c)
}

/// Rewrites a verb one edit away from a known one; arguments are untouched.
pub fn correct_command(line: &str) -> Option<String> {
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    let fixed = nearest(verb, &COMMANDS, 1)?;
    Some(if rest.is_empty() { fixed.to_string() } else { format!("{} {}", fixed, rest) })
}

/// A hint for `show <name>` when `name` is not registered.
pub fn suggest_setting(registry: &SettingsRegistry, name: &str) -> Option<String> {
    let names: Vec<&str> = registry.entries().iter().map(|e| e.name()).collect();
    nearest(name, &names, 2).map(|n| format!("Did you mean \"show {}\"?", n))
}
