// `set <name> <value...>`: the write side of the registry, for the driver loop.
use std::path::PathBuf;

use log::debug;

use crate::error::{Result, ShellError};
use crate::history::{HistoryBuffer, HistoryField};
use crate::registry::SettingsRegistry;
use crate::setting::Value;

pub fn execute(raw_args: &str, registry: &mut SettingsRegistry, history: &mut HistoryBuffer) -> Vec<String> {
    let words: Vec<&str> = raw_args.split_whitespace().collect();
    let Some((name, rest)) = words.split_first() else {
        return vec!["\"set\" must be followed by the name of a setting".to_string()];
    };
    debug!("set {:?} {:?}", name, rest);

    let outcome = if *name == "history" {
        set_history(rest, history)
    } else {
        set_scalar(name, rest, registry)
    };
    match outcome {
        Ok(line) => vec![line],
        Err(e) => vec![e.to_string()],
    }
}

fn set_history(rest: &[&str], history: &mut HistoryBuffer) -> Result<String> {
    let Some((word, values)) = rest.split_first() else {
        return Err(ShellError::InvalidValue { name: "history".into(), value: String::new() });
    };
    let field = HistoryField::parse(word)
        .ok_or_else(|| ShellError::UnknownSetting(format!("history {}", word)))?;
    match field {
        HistoryField::Filename => {
            let path = values.join(" ");
            if path.is_empty() {
                return Err(invalid("history filename", ""));
            }
            history.set_file(PathBuf::from(path));
        }
        HistoryField::Save => history.set_save_enabled(parse_bool("history save", values.first())?),
        HistoryField::Size => {
            let raw = values.first().copied().unwrap_or("");
            let size = raw.parse().map_err(|_| invalid("history size", raw))?;
            history.set_max_size(size)?;
        }
    }
    Ok(history.show_field(field))
}

fn set_scalar(name: &str, rest: &[&str], registry: &mut SettingsRegistry) -> Result<String> {
    let current = registry.get(name)?.value.clone();
    if rest == ["default"] && !matches!(current, Value::Text(_) | Value::List(_)) {
        registry.reset(name)?;
        return Ok(registry.get(name)?.render(false));
    }
    match current {
        Value::Bool(_) => registry.set_bool(name, parse_bool(name, rest.first())?)?,
        Value::Integer(_) => {
            let raw = rest.first().copied().unwrap_or("");
            let n = raw.parse().map_err(|_| invalid(name, raw))?;
            registry.set_integer(name, n)?;
        }
        Value::Choice { .. } => registry.set_choice(name, rest.first().copied().unwrap_or(""))?,
        Value::Text(_) => registry.set_text(name, &rest.join(" "))?,
        Value::List(_) => registry.set_list(name, rest.iter().map(|w| w.to_string()).collect())?,
    }
    Ok(registry.get(name)?.render(false))
}

fn parse_bool(name: &str, word: Option<&&str>) -> Result<bool> {
    match word.copied() {
        None | Some("on") | Some("true") | Some("1") => Ok(true),
        Some("off") | Some("false") | Some("0") => Ok(false),
        Some(other) => Err(invalid(name, other)),
    }
}

fn invalid(name: &str, value: &str) -> ShellError {
    ShellError::InvalidValue { name: name.to_string(), value: value.to_string() }
}
