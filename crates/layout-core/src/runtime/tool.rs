//! Dependency manager invocation
//!
//! Manifest creation is delegated to an external tool (e.g. `go mod init`),
//! run as a blocking subprocess inside the project root.

use crate::error::{Result, ScaffoldError};
use std::path::Path;
use std::process::{Command, Stdio};

/// Something that can write a dependency manifest into a directory
pub trait ManifestTool {
    /// Name of the manifest file the tool produces
    fn manifest_file(&self) -> &str;

    /// Create the manifest for `module_path` inside `dir`
    fn init(&self, dir: &Path, module_path: &str) -> Result<()>;
}

/// Configuration for a command-line dependency manager
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Name of the tool binary (e.g., "go")
    pub program: &'static str,
    /// Display name for user-facing messages
    pub display_name: &'static str,
    /// Arguments placed before the module path
    pub init_args: &'static [&'static str],
    /// Arguments that print the tool version
    pub version_args: &'static [&'static str],
    /// Manifest written by a successful init
    pub manifest_file: &'static str,
}

/// Manifest tool backed by an external command
#[derive(Debug, Clone)]
pub struct CommandTool {
    config: ToolConfig,
}

impl CommandTool {
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    /// Get the tool configuration
    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Human-readable init command, e.g. `go mod init github.com/a/b`
    pub fn init_command(&self, module_path: &str) -> String {
        let mut parts = vec![self.config.program];
        parts.extend(self.config.init_args);
        parts.push(module_path);
        parts.join(" ")
    }

    /// Get the installed tool version output (if available)
    pub fn get_version(&self) -> Option<String> {
        Command::new(self.config.program)
            .args(self.config.version_args)
            .output()
            .ok()
            .and_then(|output| {
                if output.status.success() {
                    String::from_utf8(output.stdout)
                        .ok()
                        .map(|s| s.trim().to_string())
                } else {
                    None
                }
            })
    }
}

impl ManifestTool for CommandTool {
    fn manifest_file(&self) -> &str {
        self.config.manifest_file
    }

    fn init(&self, dir: &Path, module_path: &str) -> Result<()> {
        let output = Command::new(self.config.program)
            .args(self.config.init_args)
            .arg(module_path)
            .current_dir(dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ScaffoldError::ToolNotFound {
                program: self.config.program.to_string(),
                source,
            })?;

        // The tool's own diagnostics are not surfaced; a refusal always
        // means the manifest is already there.
        if !output.status.success() {
            return Err(ScaffoldError::ManifestExists(
                self.config.manifest_file.to_string(),
            ));
        }

        let manifest = dir.join(self.config.manifest_file);
        if !manifest.is_file() {
            return Err(ScaffoldError::io(
                manifest,
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("{} did not create the manifest", self.config.display_name),
                ),
            ));
        }

        Ok(())
    }
}

/// Pre-configured manifest tool for Go modules
pub fn go_tool() -> CommandTool {
    CommandTool::new(ToolConfig {
        program: "go",
        display_name: "Go",
        init_args: &["mod", "init"],
        version_args: &["version"],
        manifest_file: "go.mod",
    })
}
