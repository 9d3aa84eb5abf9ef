//! Folder plan: which folders a scaffolded project gets
//!
//! The built-in plan can be replaced by a YAML file named in a
//! product-specific environment variable, e.g.
//!
//! ```yaml
//! mandatory: [pkg, docs]
//! optional:
//!   - name: api
//!     prompt: Will you need APIs?
//! markers: false
//! ```

use crate::error::{Result, ScaffoldError};
use crate::request::is_valid_name;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Marker file dropped into every created subfolder
pub const MARKER_FILE: &str = ".gitkeep";

/// A folder created only when its prompt is answered affirmatively
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalFolder {
    pub name: String,
    pub prompt: String,
}

impl OptionalFolder {
    fn new(name: &str, prompt: &str) -> Self {
        Self {
            name: name.to_string(),
            prompt: prompt.to_string(),
        }
    }
}

/// Folder layout of a generated project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolderPlan {
    /// Folder holding the entry-point source file
    pub entry_folder: String,

    /// Folders always created, in order
    pub mandatory: Vec<String>,

    /// Folders gated by a yes/no prompt, asked in order
    pub optional: Vec<OptionalFolder>,

    /// Drop a `.gitkeep` into every created subfolder
    pub markers: bool,
}

impl Default for FolderPlan {
    fn default() -> Self {
        Self::standard()
    }
}

impl FolderPlan {
    /// The built-in plan
    pub fn standard() -> Self {
        Self {
            entry_folder: "cmd".to_string(),
            mandatory: ["pkg", "docs", "internal", "examples"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            optional: vec![
                OptionalFolder::new("api", "Will you need APIs?"),
                OptionalFolder::new("server", "Will you need a server?"),
                OptionalFolder::new("db", "Will you need a database?"),
                OptionalFolder::new("scripts", "Will you need scripts?"),
                OptionalFolder::new("test", "Will you need a test folder?"),
                OptionalFolder::new("init", "Will you need system init configs?"),
                OptionalFolder::new("assets", "Will you need an assets folder?"),
            ],
            markers: true,
        }
    }

    /// Load a plan from a YAML file; omitted fields keep their built-in values
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ScaffoldError::io(path, e))?;
        let plan: FolderPlan =
            serde_yaml::from_str(&content).map_err(|source| ScaffoldError::PlanFormat {
                path: path.to_path_buf(),
                source,
            })?;
        plan.validate()?;
        Ok(plan)
    }

    /// Use the file named by `env_var` when it is set, the built-in plan otherwise
    pub fn resolve(env_var: &str) -> Result<Self> {
        match std::env::var_os(env_var) {
            Some(path) if !path.is_empty() => Self::from_yaml_file(Path::new(&path)),
            _ => Ok(Self::standard()),
        }
    }

    /// Every folder name must be a valid single path component and unique
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        let names = std::iter::once(&self.entry_folder)
            .chain(self.mandatory.iter())
            .chain(self.optional.iter().map(|f| &f.name));

        for name in names {
            if !is_valid_name(name) {
                return Err(ScaffoldError::InvalidPlan(format!(
                    "folder name {:?} must match [A-Za-z0-9_-]+",
                    name
                )));
            }
            if !seen.insert(name.as_str()) {
                return Err(ScaffoldError::InvalidPlan(format!(
                    "folder {:?} is listed more than once",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Look up an optional folder by name
    pub fn optional_folder(&self, name: &str) -> Option<&OptionalFolder> {
        self.optional.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_standard_plan_is_valid() {
        let plan = FolderPlan::standard();
        assert!(plan.validate().is_ok());
        assert_eq!(plan.entry_folder, "cmd");
        assert_eq!(plan.mandatory, vec!["pkg", "docs", "internal", "examples"]);
        assert_eq!(plan.optional.len(), 7);
        assert_eq!(
            plan.optional_folder("db").map(|f| f.prompt.as_str()),
            Some("Will you need a database?")
        );
    }

    #[test]
    fn test_duplicate_folder_rejected() {
        let mut plan = FolderPlan::standard();
        plan.mandatory.push("api".to_string());
        assert!(matches!(plan.validate(), Err(ScaffoldError::InvalidPlan(_))));
    }

    #[test]
    fn test_nested_folder_rejected() {
        let mut plan = FolderPlan::standard();
        plan.mandatory.push("../escape".to_string());
        assert!(matches!(plan.validate(), Err(ScaffoldError::InvalidPlan(_))));
    }

    #[test]
    fn test_yaml_override_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "mandatory: [pkg]\noptional:\n  - name: web\n    prompt: Will you need a web UI?"
        )
        .unwrap();

        let plan = FolderPlan::from_yaml_file(file.path()).unwrap();
        assert_eq!(plan.entry_folder, "cmd");
        assert_eq!(plan.mandatory, vec!["pkg"]);
        assert_eq!(plan.optional, vec![OptionalFolder::new("web", "Will you need a web UI?")]);
        assert!(plan.markers);
    }

    #[test]
    fn test_yaml_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mandatory: {{ not a list").unwrap();

        let err = FolderPlan::from_yaml_file(file.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::PlanFormat { .. }));
    }

    #[test]
    fn test_resolve_without_env_uses_standard() {
        let plan = FolderPlan::resolve("LAYOUT_CORE_TEST_UNSET_PLAN_VAR").unwrap();
        assert_eq!(plan, FolderPlan::standard());
    }
}
