//! External toolchain handling
//!
//! This module provides:
//! - Manifest delegation to a dependency manager (`go mod init`)
//! - Toolchain detection and version advisories

pub mod check;
pub mod tool;

pub use check::{check_compatibility, check_toolchain, ToolchainInfo, MIN_GO_VERSION};
pub use tool::{go_tool, CommandTool, ManifestTool, ToolConfig};
