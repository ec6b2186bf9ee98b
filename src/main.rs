mod autocorrect; mod config; mod error; mod history; mod host; mod registry; mod set; mod setting; mod show;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use log::{debug, info};

use config::ShellConfig;
use history::HistoryBuffer;
use host::{CrosstermTerminal, FixedTerminal, Host, Terminal};
use registry::SettingsRegistry;
use show::ShowCommand;

const PROMPT: &str = "(dbg) ";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = ShellConfig::load().context("reading shell configuration")?;
    let host = Host::from_env();
    // scripted runs have no terminal to ask
    let columns = if host.script_mode { FixedTerminal(80).columns() } else { CrosstermTerminal.columns() };
    let mut registry = SettingsRegistry::builtin(cfg.args.clone(), columns, &host.version)
        .context("registering built-in settings")?;
    registry.set_integer("listsize", cfg.listsize)?;
    let mut hist = HistoryBuffer::new(cfg.history_file(), cfg.history_save, cfg.history_size)?;
    info!(
        "history file {} (save {}, size {}), script mode {}",
        hist.file().display(),
        hist.save_enabled(),
        hist.max_size(),
        host.script_mode
    );

    // stands in for the line editor's own history
    let mut editor_log: Vec<String> = Vec::new();

    let stdin = io::stdin();
    let mut out = io::stdout();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let mut line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }
        editor_log.push(line.clone());

        // 1) Fix a mistyped verb
        if let Some(corrected) = autocorrect::correct_command(&line) {
            writeln!(out, "→ {}", corrected)?;
            line = corrected;
        }

        // 2) Record it shell-side
        hist.record(line.clone());
        debug!("{} lines recorded this session", hist.recorded().len());

        // 3) Dispatch
        let (cmd, rest) = line.split_once(' ').unwrap_or((line.as_str(), ""));
        let lines = match cmd {
            "quit" | "exit" => break,
            "show" => {
                let mut lines = ShowCommand {
                    registry: &registry,
                    history: &hist,
                    log: &editor_log,
                    script_mode: host.script_mode,
                }
                .execute(rest);
                let name = rest.split_whitespace().next().unwrap_or("");
                if registry.entry(name).is_none() {
                    lines.extend(autocorrect::suggest_setting(&registry, name));
                }
                lines
            }
            "set" => set::execute(rest, &mut registry, &mut hist),
            "help" => vec!["Commands: show [setting], set <setting> <value>, quit".to_string()],
            other => vec![format!("Unknown command: \"{}\". Try \"help\".", other)],
        };
        for l in lines {
            writeln!(out, "{}", l)?;
        }
    }
    Ok(())
}
