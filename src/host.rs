// Things the shell learns from the process it runs in.
use log::warn;

pub const SCRIPT_ENV: &str = "DBGSHELL_SCRIPT";
const FALLBACK_COLUMNS: u16 = 80;

pub trait Terminal {
    fn columns(&self) -> u16;
}

pub struct CrosstermTerminal;

impl Terminal for CrosstermTerminal {
    fn columns(&self) -> u16 {
        match crossterm::terminal::size() {
            Ok((cols, _)) if cols > 0 => cols,
            Ok(_) => FALLBACK_COLUMNS,
            Err(e) => {
                warn!("terminal size unavailable ({}), assuming {} columns", e, FALLBACK_COLUMNS);
                FALLBACK_COLUMNS
            }
        }
    }
}

/// A terminal of known width, for non-tty runs and tests.
pub struct FixedTerminal(pub u16);

impl Terminal for FixedTerminal {
    fn columns(&self) -> u16 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Host {
    pub version: String,
    pub script_mode: bool,
}

impl Host {
    pub fn from_env() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            script_mode: std::env::var_os(SCRIPT_ENV).is_some(),
        }
    }
}
