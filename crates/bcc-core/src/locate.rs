use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::keypath::KeyPath;
use crate::resolve::resolve_path;

/// A configuration file read and parsed once, kept alongside its raw text for
/// the line hint.
#[derive(Debug, Clone)]
pub struct Locator {
    path: PathBuf,
    text: String,
    root: Value,
}

/// A resolved setting. `line` is approximate: it is the first line of the raw
/// file containing the last key segment, not the position the resolver walked.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding<'a> {
    pub value: &'a Value,
    pub line: Option<usize>,
}

impl Locator {
    pub fn open(path: &Path) -> Result<Self> {
        let data = fs::read(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = data.len(), "read config file");
        let root: Value = serde_json::from_slice(&data)?;
        debug!("parsed config JSON");
        let text = String::from_utf8_lossy(&data).into_owned();
        Ok(Self {
            path: path.to_path_buf(),
            text,
            root,
        })
    }

    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        let root: Value = serde_json::from_str(&text)?;
        Ok(Self {
            path: path.into(),
            text,
            root,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn find(&self, key: &KeyPath) -> Option<Finding<'_>> {
        let value = resolve_path(&self.root, key);
        debug!(key = %key, found = value.is_some(), "resolved setting");
        let value = value?;
        let line = key.last().and_then(|needle| line_hint(&self.text, needle));
        Some(Finding { value, line })
    }
}

/// 1-based number of the first line containing `needle` literally.
pub fn line_hint(text: &str, needle: &str) -> Option<usize> {
    text.split('\n')
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

/// Plain text form of a setting: strings unquoted, other scalars as their
/// JSON literal, objects and arrays as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
