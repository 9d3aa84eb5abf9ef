//! Layout Core - scaffolding library behind `golayout`
//!
//! Creates a conventional Go project tree (`cmd/`, `pkg/`, `internal/`, ...)
//! from a handful of answers, in one pass that aborts on the first failure.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - name validation, templates, the folder plan,
//!   building and materializing filesystem operations, `go mod init` delegation
//! - **Layer 2: Workflow Orchestration** - `Scaffolder` and the `Prompter` trait
//!   for custom front ends
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use layout_core::{go_tool, FolderPlan, GoTemplates, LinePrompter, Scaffolder};
//!
//! let plan = FolderPlan::standard();
//! let scaffolder = Scaffolder {
//!     plan: &plan,
//!     templates: &GoTemplates::new("myscaffolder", "https://example.com/myscaffolder"),
//!     tool: &go_tool(),
//!     base_dir: std::path::Path::new("."),
//! };
//! let stdin = std::io::stdin();
//! let mut prompter = LinePrompter::new(stdin.lock(), std::io::stdout());
//! let scaffolded = scaffolder.run(&mut prompter)?;
//! ```

pub mod builder;
pub mod error;
pub mod materializer;
pub mod plan;
pub mod product;
pub mod prompt;
pub mod request;
pub mod runtime;
pub mod templates;
pub mod workflow;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use builder::{build_ops, ScaffoldOp};
pub use error::ScaffoldError;
pub use materializer::{list_tree, materialize};
pub use plan::{FolderPlan, OptionalFolder};
pub use product::ProductConfig;
pub use prompt::{collect_request, confirm_answer, is_affirmative, LinePrompter, Prompter};
pub use request::{validate_project_name, ScaffoldRequest};
pub use runtime::{go_tool, CommandTool, ManifestTool};
pub use templates::{GoTemplates, ProjectTemplates};
pub use workflow::{Scaffolded, Scaffolder};

#[cfg(feature = "tui")]
pub use tui::run;
