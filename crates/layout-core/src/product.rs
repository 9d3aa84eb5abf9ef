//! Product configuration trait for CLI binaries
//!
//! The binary decides identity and presentation; the core decides layout.

use std::path::Path;

/// Configuration trait for a scaffolding CLI
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name, also credited in generated READMEs
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Project home page, linked from generated READMEs
    fn repo_url(&self) -> &'static str;

    /// Environment variable pointing at a YAML folder plan override
    fn plan_env(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, root: &Path) -> Vec<String>;
}
