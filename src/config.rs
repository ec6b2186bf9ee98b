// Startup configuration: config.json in the user's config dir, then env overrides.
use std::{fs, path::Path, path::PathBuf};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;

use crate::error::{Result, ShellError};

pub const HISTORY_FILE_ENV: &str = "DBGSHELL_HISTORY_FILE";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub history_file: Option<PathBuf>,
    pub history_save: bool,
    pub history_size: usize,
    pub args: Vec<String>,
    pub listsize: i64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            history_file: None,
            history_save: true,
            history_size: 256,
            args: Vec::new(),
            listsize: 10,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "dbgshell", "dbgshell")
}

impl ShellConfig {
    pub fn load() -> Result<Self> {
        let mut cfg = match project_dirs() {
            Some(proj) => Self::load_from(&proj.config_dir().join("config.json"))?,
            None => Self::default(),
        };
        if let Some(file) = std::env::var_os(HISTORY_FILE_ENV) {
            cfg.history_file = Some(PathBuf::from(file));
        }
        Ok(cfg)
    }

    /// Missing file means defaults; a file that fails to parse is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no config at {}", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let cfg: Self = serde_json::from_str(&text)?;
        if cfg.history_size == 0 {
            return Err(ShellError::InvalidValue { name: "history_size".into(), value: "0".into() });
        }
        info!("loaded config from {}", path.display());
        Ok(cfg)
    }

    pub fn history_file(&self) -> PathBuf {
        if let Some(file) = &self.history_file {
            return file.clone();
        }
        project_dirs()
            .map(|proj| proj.data_dir().join("history"))
            .unwrap_or_else(|| PathBuf::from(".dbgshell_history"))
    }
}
