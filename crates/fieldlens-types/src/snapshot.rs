use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// A debug snapshot: named values captured from one target image.
///
/// Snapshots are produced by a capture script on the debugger side and read
/// here as-is. Nothing is written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Target description (kernel build, image name), if the capture
    /// recorded one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    pub symbols: Vec<Symbol>,
}

/// One captured symbol: a name and the value it held at capture time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub value: Value,
}

impl Snapshot {
    pub fn load(path: &Path) -> Result<Snapshot> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse snapshot: {}", path.display()))
    }

    pub fn symbol(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_snapshot() {
        let raw = r#"{
            "target": "vmlinux-debug",
            "symbols": [
                {
                    "name": "curr_handle",
                    "value": {
                        "kind": "struct",
                        "type_name": "fs_handle_base",
                        "fields": [
                            {"name": "pos", "value": {"kind": "int", "value": 1024}}
                        ]
                    }
                }
            ]
        }"#;

        let snap: Snapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(snap.target.as_deref(), Some("vmlinux-debug"));
        assert_eq!(snap.symbols.len(), 1);

        let sym = snap.symbol("curr_handle").unwrap();
        assert_eq!(sym.value.field("pos").unwrap().as_int().unwrap(), 1024);
        assert!(snap.symbol("no_such_symbol").is_none());
    }

    #[test]
    fn test_parse_pointer_value() {
        let raw = r#"{
            "name": "pi",
            "value": {
                "kind": "pointer",
                "address": 4096,
                "pointee": {
                    "kind": "struct",
                    "type_name": "process",
                    "fields": [{"name": "pid", "value": {"kind": "int", "value": 42}}]
                }
            }
        }"#;

        let sym: Symbol = serde_json::from_str(raw).unwrap();
        assert_eq!(sym.value.field("pid").unwrap().as_int().unwrap(), 42);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Snapshot::load(Path::new("/nonexistent/snap.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/snap.json"));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snap.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Snapshot::load(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse snapshot"));
    }
}
