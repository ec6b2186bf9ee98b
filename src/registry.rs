// Catalog of every "show"-able option, in registration order.
use unicode_width::UnicodeWidthStr;

use crate::error::{Result, ShellError};
use crate::setting::{Render, Setting, Value};

pub const HELP_HEADER: &str = "List of \"show\" subcommands:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composite {
    History,
    Commands,
}

impl Composite {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "history" => Some(Composite::History),
            "commands" => Some(Composite::Commands),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Composite::History => "history",
            Composite::Commands => "commands",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Composite::History => "Generic command for showing command history parameters",
            Composite::Commands => "Show the history of commands you typed",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Entry {
    Scalar(Setting),
    Composite(Composite),
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::Scalar(s) => s.name,
            Entry::Composite(c) => c.name(),
        }
    }

    fn description(&self) -> &str {
        match self {
            Entry::Scalar(s) => s.description,
            Entry::Composite(c) => c.description(),
        }
    }
}

#[derive(Debug, Default)]
pub struct SettingsRegistry {
    entries: Vec<Entry>,
}

impl SettingsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in option at its default. `columns` seeds `width`.
    pub fn builtin(args: Vec<String>, columns: u16, version: &str) -> Result<Self> {
        use Render::*;
        use Value::*;

        let mut reg = Self::new();
        reg.register(Setting::new(
            "args",
            "Show argument list to give to the program being debugged when it is started",
            List(args),
            ArgList,
        ))?;
        reg.register(toggle("autoeval", "Evaluate every unrecognized command", true))?;
        reg.register(toggle("autoirb", "Invoke IRB on every stop", false))?;
        reg.register(toggle("autolist", "Execute 'list' command on every stop", true))?;
        reg.register(toggle("autoreload", "Reload source code when changed", true))?;
        reg.register(toggle("basename", "Show just basename in file names", false))?;
        reg.register(Setting::new(
            "callstyle",
            "Show parameter style used when showing call frames",
            Choice { selected: "long", choices: &["long", "short"] },
            Sentence("Frame call-display style is {}."),
        ))?;
        reg.register_composite(Composite::Commands)?;
        reg.register(Setting::new(
            "forcestep",
            "Show if setting forces each line to be different when stepping",
            Bool(false),
            Toggle("force-stepping"),
        ))?;
        reg.register(Setting::new(
            "fullpath",
            "Show if full file names are displayed in frames",
            Bool(true),
            Switch {
                on: "Displaying frame's full file names is on.",
                off: "Displaying frame's full file names is off.",
            },
        ))?;
        reg.register_composite(Composite::History)?;
        reg.register(Setting::new(
            "linetrace",
            "Show line execution tracing status",
            Bool(false),
            Toggle("line tracing"),
        ))?;
        reg.register(Setting::new(
            "linetrace_plus",
            "Show if line tracing shows every line or only different consecutive lines",
            Bool(false),
            Switch {
                on: "line tracing style is every line.",
                off: "line tracing style is different consecutive lines.",
            },
        ))?;
        reg.register(Setting::new(
            "listsize",
            "Show number of source lines to list by default",
            Integer(10),
            Sentence("Number of source lines to list is {}."),
        ))?;
        reg.register(Setting::new(
            "stack_on_error",
            "Show whether a stack trace is displayed when eval raises an exception",
            Bool(false),
            Switch {
                on: "Displaying stack trace is on.",
                off: "Displaying stack trace is off.",
            },
        ))?;
        reg.register(Setting::new(
            "version",
            "Show what version of the debugger this is",
            Text(version.to_string()),
            Sentence("Byebug {}"),
        ))?;
        reg.register(Setting::new(
            "width",
            "Show the number of characters per line for the debugger",
            Integer(i64::from(columns)),
            Sentence("width is {}."),
        ))?;
        Ok(reg)
    }

    pub fn register(&mut self, setting: Setting) -> Result<()> {
        self.insert(Entry::Scalar(setting))
    }

    pub fn register_composite(&mut self, composite: Composite) -> Result<()> {
        self.insert(Entry::Composite(composite))
    }

    fn insert(&mut self, entry: Entry) -> Result<()> {
        if self.entry(entry.name()).is_some() {
            return Err(ShellError::DuplicateName(entry.name().to_string()));
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Result<&Setting> {
        match self.entry(name) {
            Some(Entry::Scalar(s)) => Ok(s),
            _ => Err(ShellError::UnknownSetting(name.to_string())),
        }
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Setting> {
        self.entries
            .iter_mut()
            .find_map(|e| match e {
                Entry::Scalar(s) if s.name == name => Some(s),
                _ => None,
            })
            .ok_or_else(|| ShellError::UnknownSetting(name.to_string()))
    }

    /// Output lines for `show <name>`. Composite names are resolved by the
    /// caller, which owns the history buffer; here they count as unknown.
    pub fn show(&self, name: &str, script_mode: bool) -> Vec<String> {
        if name.is_empty() {
            return self.help();
        }
        match self.get(name) {
            Ok(setting) => vec![setting.render(script_mode)],
            Err(_) => vec![format!("Unknown show command {}", name)],
        }
    }

    pub fn help(&self) -> Vec<String> {
        let pad = self.entries.iter().map(|e| e.name().width()).max().unwrap_or(0);
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        lines.push(HELP_HEADER.to_string());
        for e in &self.entries {
            let name = e.name();
            let fill = " ".repeat(pad - name.width());
            lines.push(format!("{}{}  {}", name, fill, e.description()));
        }
        lines
    }

    pub fn set_bool(&mut self, name: &str, on: bool) -> Result<()> {
        let s = self.get_mut(name)?;
        match s.value {
            Value::Bool(ref mut b) => *b = on,
            _ => return Err(mismatch(s)),
        }
        Ok(())
    }

    pub fn set_integer(&mut self, name: &str, n: i64) -> Result<()> {
        let s = self.get_mut(name)?;
        match s.value {
            Value::Integer(ref mut v) => *v = n,
            _ => return Err(mismatch(s)),
        }
        Ok(())
    }

    pub fn set_choice(&mut self, name: &str, word: &str) -> Result<()> {
        let s = self.get_mut(name)?;
        let Value::Choice { ref mut selected, choices } = s.value else {
            return Err(mismatch(s));
        };
        match choices.iter().find(|c| **c == word) {
            Some(c) => {
                *selected = *c;
                Ok(())
            }
            None => Err(ShellError::InvalidValue { name: name.to_string(), value: word.to_string() }),
        }
    }

    pub fn set_text(&mut self, name: &str, text: &str) -> Result<()> {
        let s = self.get_mut(name)?;
        match s.value {
            Value::Text(ref mut t) => *t = text.to_string(),
            _ => return Err(mismatch(s)),
        }
        Ok(())
    }

    pub fn set_list(&mut self, name: &str, items: Vec<String>) -> Result<()> {
        let s = self.get_mut(name)?;
        match s.value {
            Value::List(ref mut l) => *l = items,
            _ => return Err(mismatch(s)),
        }
        Ok(())
    }

    pub fn reset(&mut self, name: &str) -> Result<()> {
        self.get_mut(name)?.reset();
        Ok(())
    }
}

fn toggle(name: &'static str, description: &'static str, on: bool) -> Setting {
    Setting::new(name, description, Value::Bool(on), Render::Toggle(name))
}

fn mismatch(s: &Setting) -> ShellError {
    ShellError::TypeMismatch { name: s.name.to_string(), expected: s.value.kind() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> SettingsRegistry {
        SettingsRegistry::builtin(vec!["foo".into(), "bar".into()], 120, "1.2.3").unwrap()
    }

    fn show1(reg: &SettingsRegistry, name: &str) -> String {
        let lines = reg.show(name, false);
        assert_eq!(lines.len(), 1, "{:?}", lines);
        lines.into_iter().next().unwrap()
    }

    #[test]
    fn boolean_defaults() {
        let reg = registry();
        assert_eq!(show1(&reg, "autolist"), "autolist is on.");
        assert_eq!(show1(&reg, "autoeval"), "autoeval is on.");
        assert_eq!(show1(&reg, "autoreload"), "autoreload is on.");
        assert_eq!(show1(&reg, "autoirb"), "autoirb is off.");
        assert_eq!(show1(&reg, "basename"), "basename is off.");
        assert_eq!(show1(&reg, "forcestep"), "force-stepping is off.");
        assert_eq!(show1(&reg, "fullpath"), "Displaying frame's full file names is on.");
        assert_eq!(show1(&reg, "linetrace"), "line tracing is off.");
        assert_eq!(show1(&reg, "stack_on_error"), "Displaying stack trace is off.");
    }

    #[test]
    fn plain_booleans_follow_name() {
        let mut reg = registry();
        for name in ["autoeval", "autoirb", "autolist", "autoreload", "basename"] {
            reg.set_bool(name, true).unwrap();
            assert_eq!(show1(&reg, name), format!("{} is on.", name));
            reg.set_bool(name, false).unwrap();
            assert_eq!(show1(&reg, name), format!("{} is off.", name));
        }
    }

    #[test]
    fn other_kinds() {
        let mut reg = registry();
        assert_eq!(show1(&reg, "callstyle"), "Frame call-display style is long.");
        assert_eq!(
            show1(&reg, "linetrace_plus"),
            "line tracing style is different consecutive lines."
        );
        assert_eq!(show1(&reg, "listsize"), "Number of source lines to list is 10.");
        assert_eq!(show1(&reg, "version"), "Byebug 1.2.3");
        assert_eq!(show1(&reg, "width"), "width is 120.");

        reg.set_choice("callstyle", "short").unwrap();
        reg.set_bool("linetrace_plus", true).unwrap();
        reg.set_integer("listsize", 25).unwrap();
        assert_eq!(show1(&reg, "callstyle"), "Frame call-display style is short.");
        assert_eq!(show1(&reg, "linetrace_plus"), "line tracing style is every line.");
        assert_eq!(show1(&reg, "listsize"), "Number of source lines to list is 25.");
    }

    #[test]
    fn args_respect_script_mode() {
        let reg = registry();
        assert_eq!(
            reg.show("args", false),
            vec!["Argument list to give program being debugged when it is started is \"foo bar\"."]
        );
        assert_eq!(
            reg.show("args", true),
            vec!["Argument list to give program being debugged when it is started is \"bar\"."]
        );
    }

    #[test]
    fn unknown_name_is_a_line() {
        let reg = registry();
        assert_eq!(reg.show("bla", false), vec!["Unknown show command bla"]);
        assert_eq!(reg.show("Autolist", false), vec!["Unknown show command Autolist"]);
        assert_eq!(reg.show("auto", false), vec!["Unknown show command auto"]);
    }

    #[test]
    fn help_lists_every_entry_in_order() {
        let reg = registry();
        let lines = reg.show("", false);
        assert_eq!(lines[0], HELP_HEADER);
        assert_eq!(lines.len(), reg.entries().len() + 1);
        for (line, e) in lines[1..].iter().zip(reg.entries()) {
            assert!(line.starts_with(e.name()), "{}", line);
        }
        assert!(lines[1].starts_with("args "));
        assert!(lines.iter().any(|l| l.starts_with("history ")));
    }

    #[test]
    fn duplicate_registration_fails() {
        let mut reg = registry();
        let err = reg.register(toggle("autolist", "", true)).unwrap_err();
        assert!(matches!(err, ShellError::DuplicateName(n) if n == "autolist"));
        let err = reg.register_composite(Composite::History).unwrap_err();
        assert!(matches!(err, ShellError::DuplicateName(_)));
    }

    #[test]
    fn setters_check_kind() {
        let mut reg = registry();
        assert!(matches!(reg.set_integer("autolist", 3), Err(ShellError::TypeMismatch { .. })));
        assert!(matches!(reg.set_bool("nope", true), Err(ShellError::UnknownSetting(_))));
        assert!(matches!(reg.set_choice("callstyle", "tall"), Err(ShellError::InvalidValue { .. })));
        assert!(matches!(reg.get("history"), Err(ShellError::UnknownSetting(_))));
    }

    #[test]
    fn reset_goes_back_to_default() {
        let mut reg = registry();
        reg.set_integer("listsize", 99).unwrap();
        reg.reset("listsize").unwrap();
        assert_eq!(show1(&reg, "listsize"), "Number of source lines to list is 10.");
    }

    #[test]
    fn show_is_repeatable() {
        let reg = registry();
        assert_eq!(reg.show("", false), reg.show("", false));
        assert_eq!(reg.show("width", false), reg.show("width", false));
    }
}
