//! Project name validation and the answers collected for one scaffold run

use crate::error::{Result, ScaffoldError};
use std::collections::BTreeMap;

/// Host prefix for generated module paths
pub const MODULE_HOST: &str = "github.com";

/// Strip exactly one trailing line ending (`\n` or `\r\n`)
pub fn strip_line_ending(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}

/// True when `name` is non-empty and made only of `[A-Za-z0-9_-]`
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Validate a raw input line as a project name.
///
/// One trailing line ending is removed first; anything left over
/// (including a second newline) makes the name invalid.
pub fn validate_project_name(raw: &str) -> Result<String> {
    let name = strip_line_ending(raw);
    if is_valid_name(name) {
        Ok(name.to_string())
    } else {
        Err(ScaffoldError::InvalidName(name.to_string()))
    }
}

/// Everything the operator answered, fixed once collected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    project_name: String,
    description: String,
    account_handle: String,
    features: BTreeMap<String, bool>,
}

impl ScaffoldRequest {
    /// Build a request from an already collected project name.
    ///
    /// The name is checked as-is (no line ending is stripped), so an
    /// invalid request can never be constructed.
    pub fn new(
        project_name: &str,
        description: impl Into<String>,
        account_handle: impl Into<String>,
        features: BTreeMap<String, bool>,
    ) -> Result<Self> {
        if !is_valid_name(project_name) {
            return Err(ScaffoldError::InvalidName(project_name.to_string()));
        }
        Ok(Self {
            project_name: project_name.to_string(),
            description: description.into(),
            account_handle: account_handle.into(),
            features,
        })
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn account_handle(&self) -> &str {
        &self.account_handle
    }

    pub fn features(&self) -> &BTreeMap<String, bool> {
        &self.features
    }

    /// Whether the optional folder `name` was answered affirmatively
    pub fn wants(&self, name: &str) -> bool {
        self.features.get(name).copied().unwrap_or(false)
    }

    /// Fully-qualified module path, e.g. `github.com/alice/myapp`
    pub fn module_path(&self) -> String {
        format!(
            "{}/{}/{}",
            MODULE_HOST, self.account_handle, self.project_name
        )
    }
}
