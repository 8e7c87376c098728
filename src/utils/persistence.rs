//! Where Word Snake keeps its files, and JSON load/save within it.
//!
//! Everything lives in one flat directory: `~/.word-snake/` unless
//! `WORD_SNAKE_HOME` points somewhere else.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const HOME_ENV: &str = "WORD_SNAKE_HOME";
const DIR_NAME: &str = ".word-snake";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// `$WORD_SNAKE_HOME`, or `~/.word-snake`. Created on first use.
    pub fn locate() -> io::Result<Self> {
        let root = match std::env::var_os(HOME_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::home_dir()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?
                .join(DIR_NAME),
        };
        Self::at(root)
    }

    pub fn at(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// A missing file is the normal first-run case. A corrupt one is logged
    /// and replaced by the default on the next save.
    pub fn load_or_default<T: Default + DeserializeOwned>(&self, name: &str) -> T {
        let path = self.file(name);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return T::default(),
            Err(e) => {
                log::warn!("cannot read {}: {}", path.display(), e);
                return T::default();
            }
        };
        serde_json::from_str(&json).unwrap_or_else(|e| {
            log::warn!("ignoring corrupt {}: {}", path.display(), e);
            T::default()
        })
    }

    /// Write through a sibling temp file and rename, so a crash mid-save
    /// leaves the previous progress intact.
    pub fn save<T: Serialize>(&self, name: &str, value: &T) -> io::Result<()> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let path = self.file(name);
        let staging = self.file(&format!("{}.tmp", name));
        fs::write(&staging, json)?;
        fs::rename(&staging, &path)
    }
}

/// Load `name` from the located data directory.
pub fn load_or_default<T: Default + DeserializeOwned>(name: &str) -> T {
    match DataDir::locate() {
        Ok(dir) => dir.load_or_default(name),
        Err(e) => {
            log::warn!("no data directory for {}: {}", name, e);
            T::default()
        }
    }
}

/// Save `value` as `name` in the located data directory.
pub fn save<T: Serialize>(name: &str, value: &T) -> io::Result<()> {
    DataDir::locate()?.save(name, value)
}
