// A single named, typed shell option and the sentence it shows as.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    Choice { selected: &'static str, choices: &'static [&'static str] },
    Text(String),
    List(Vec<String>),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "a boolean",
            Value::Integer(_) => "an integer",
            Value::Choice { .. } => "one of its choices",
            Value::Text(_) => "a string",
            Value::List(_) => "a list of words",
        }
    }
}

/// How a value becomes its banner line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    /// `<label> is on.` / `<label> is off.`
    Toggle(&'static str),
    /// Full sentences picked by a boolean.
    Switch { on: &'static str, off: &'static str },
    /// The value replaces the `{}` in the template.
    Sentence(&'static str),
    /// Program arguments, quoted. The first token is hidden in script mode.
    ArgList,
}

#[derive(Debug, Clone)]
pub struct Setting {
    pub name: &'static str,
    pub description: &'static str,
    pub value: Value,
    pub default: Value,
    pub render: Render,
}

impl Setting {
    pub fn new(name: &'static str, description: &'static str, value: Value, render: Render) -> Self {
        Self { name, description, default: value.clone(), value, render }
    }

    pub fn render(&self, script_mode: bool) -> String {
        match (self.render, &self.value) {
            (Render::Toggle(label), Value::Bool(on)) => format!("{} is {}.", label, on_off(*on)),
            (Render::Switch { on, off }, Value::Bool(b)) => {
                if *b { on.to_string() } else { off.to_string() }
            }
            (Render::ArgList, Value::List(args)) => {
                let skip = if script_mode { 1 } else { 0 };
                let shown: Vec<&str> = args.iter().skip(skip).map(String::as_str).collect();
                format!(
                    "Argument list to give program being debugged when it is started is \"{}\".",
                    shown.join(" ")
                )
            }
            (Render::Sentence(template), value) => template.replacen("{}", &plain(value), 1),
            // template and value disagree; show the raw value rather than nothing
            (_, value) => format!("{} is {}", self.name, plain(value)),
        }
    }

    pub fn reset(&mut self) {
        self.value = self.default.clone();
    }
}

pub fn on_off(b: bool) -> &'static str {
    if b { "on" } else { "off" }
}

fn plain(value: &Value) -> String {
    match value {
        Value::Bool(b) => on_off(*b).to_string(),
        Value::Integer(n) => n.to_string(),
        Value::Choice { selected, .. } => selected.to_string(),
        Value::Text(s) => s.clone(),
        Value::List(items) => items.join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_uses_label() {
        let mut s = Setting::new("forcestep", "", Value::Bool(false), Render::Toggle("force-stepping"));
        assert_eq!(s.render(false), "force-stepping is off.");
        s.value = Value::Bool(true);
        assert_eq!(s.render(false), "force-stepping is on.");
    }

    #[test]
    fn sentence_substitutes_integer_verbatim() {
        let s = Setting::new(
            "listsize",
            "",
            Value::Integer(10),
            Render::Sentence("Number of source lines to list is {}."),
        );
        assert_eq!(s.render(false), "Number of source lines to list is 10.");
    }

    #[test]
    fn arg_list_hides_first_token_in_script_mode() {
        let s = Setting::new(
            "args",
            "",
            Value::List(vec!["foo".into(), "bar".into()]),
            Render::ArgList,
        );
        assert!(s.render(false).ends_with("is \"foo bar\"."));
        assert!(s.render(true).ends_with("is \"bar\"."));
    }

    #[test]
    fn arg_list_empty_in_script_mode() {
        let s = Setting::new("args", "", Value::List(vec![]), Render::ArgList);
        assert!(s.render(true).ends_with("is \"\"."));
    }

    #[test]
    fn reset_restores_default() {
        let mut s = Setting::new("autolist", "", Value::Bool(true), Render::Toggle("autolist"));
        s.value = Value::Bool(false);
        s.reset();
        assert_eq!(s.value, Value::Bool(true));
    }
}
