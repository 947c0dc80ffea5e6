use serde_json::{Map, Value};
use std::path::Path;
use tokio::fs;
use crate::utils::error::{Result, ScaffoldError};

/// A template's `package.json`, kept as an ordered JSON object so fields the
/// scaffolder does not touch are written back exactly as found.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    fields: Map<String, Value>,
}

impl Manifest {
    pub fn parse(content: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(content)? {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(ScaffoldError::Manifest(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Read the manifest at `path`
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            ScaffoldError::Manifest(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    /// Replace the file at `path` with this manifest
    pub async fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_pretty_string()?).await.map_err(|e| {
            ScaffoldError::Manifest(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    pub fn to_pretty_string(&self) -> Result<String> {
        let mut content = serde_json::to_string_pretty(&self.fields)?;
        content.push('\n');
        Ok(content)
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    pub fn version(&self) -> Option<&str> {
        self.fields.get("version").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Make the template the user's own: new name, reset version, no author
    pub fn rebrand(&mut self, package_name: &str, version: &str) {
        self.fields
            .insert("name".to_string(), Value::String(package_name.to_string()));
        self.fields
            .insert("version".to_string(), Value::String(version.to_string()));
        self.fields.shift_remove("author");
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
