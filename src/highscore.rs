//! JSON file high score store.
//!
//! The file holds a single object, `{"high_score": 1200}`. A missing or
//! unreadable file counts as "no high score"; failures are logged and never
//! reach the game.

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::HighScoreStore;

const APP_DIR: &str = "blockfall";
const FILE_NAME: &str = "highscore.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u32,
}

/// `$XDG_CONFIG_HOME/blockfall/highscore.json`, else `$HOME/.config/blockfall/highscore.json`,
/// else `./highscore.json`.
pub fn default_high_score_path() -> PathBuf {
    high_score_path_from(
        std::env::var_os("XDG_CONFIG_HOME"),
        std::env::var_os("HOME"),
    )
}

fn high_score_path_from(xdg_config_home: Option<OsString>, home: Option<OsString>) -> PathBuf {
    let non_empty = |v: Option<OsString>| v.filter(|s| !s.is_empty()).map(PathBuf::from);

    if let Some(config) = non_empty(xdg_config_home) {
        return config.join(APP_DIR).join(FILE_NAME);
    }
    if let Some(home) = non_empty(home) {
        return home.join(".config").join(APP_DIR).join(FILE_NAME);
    }
    PathBuf::from(FILE_NAME)
}

/// High score kept in a JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHighScore {
    path: PathBuf,
}

impl FileHighScore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored value. A missing file is `Ok(None)`.
    pub fn read(&self) -> Result<Option<u32>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", self.path.display()))
            }
        };

        let record: HighScoreRecord = serde_json::from_str(&text)
            .with_context(|| format!("invalid high score file {}", self.path.display()))?;
        Ok(Some(record.high_score))
    }

    /// Write `score`, creating parent directories as needed.
    pub fn write(&self, score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let json = serde_json::to_string(&HighScoreRecord { high_score: score })?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}

impl HighScoreStore for FileHighScore {
    fn load_high_score(&mut self) -> Option<u32> {
        match self.read() {
            Ok(value) => value,
            Err(e) => {
                warn!("ignoring stored high score: {:#}", e);
                None
            }
        }
    }

    fn save_high_score(&mut self, score: u32) {
        match self.write(score) {
            Ok(()) => debug!("high score {} saved to {}", score, self.path.display()),
            Err(e) => warn!("could not save high score: {:#}", e),
        }
    }
}
