use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::common::paths;
use crate::ui::prelude::*;

/// Record of the last install: what was selected and what verified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub selections: Vec<String>,
    /// Tool id to version string, verified tools only
    pub installed: BTreeMap<String, String>,
    pub timestamp: String,
}

impl Receipt {
    pub fn new(selections: Vec<String>, installed: BTreeMap<String, String>) -> Self {
        Self {
            selections,
            installed,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Read the receipt. Missing or corrupt receipts are `None`.
pub fn read_receipt() -> Result<Option<Receipt>> {
    read_receipt_from(&paths::receipt_path()?)
}

pub fn read_receipt_from(path: &Path) -> Result<Option<Receipt>> {
    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading receipt {}", path.display()))?;
    match serde_json::from_str(&raw) {
        Ok(receipt) => Ok(Some(receipt)),
        Err(e) => {
            emit(
                Level::Warn,
                "receipt.corrupt",
                &format!("  Warning: {} is corrupted ({}). Ignoring.", path.display(), e),
                None,
            );
            Ok(None)
        }
    }
}

pub fn write_receipt(receipt: &Receipt) -> Result<()> {
    paths::ensure_base_dir()?;
    write_receipt_to(receipt, &paths::receipt_path()?)
}

pub fn write_receipt_to(receipt: &Receipt, path: &Path) -> Result<()> {
    let mut json = serde_json::to_string_pretty(receipt).context("serializing receipt")?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("writing receipt to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_receipt_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let receipt = read_receipt_from(&dir.path().join("receipt.json")).unwrap();
        assert!(receipt.is_none());
    }

    #[test]
    fn written_receipt_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("receipt.json");
        let mut installed = BTreeMap::new();
        installed.insert("rg".to_string(), "ripgrep 14.1.0".to_string());
        let receipt = Receipt::new(vec!["rg".into(), "jq".into()], installed);

        write_receipt_to(&receipt, &path).unwrap();
        let back = read_receipt_from(&path).unwrap().unwrap();
        assert_eq!(back, receipt);
        assert!(chrono::DateTime::parse_from_rfc3339(&back.timestamp).is_ok());
    }

    #[test]
    fn corrupt_receipt_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("receipt.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(read_receipt_from(&path).unwrap().is_none());
    }
}
