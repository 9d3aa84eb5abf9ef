//! Toolchain detection and version compatibility

use crate::runtime::tool::CommandTool;
use semver::Version;

/// Oldest Go release the generated README promises to support
pub const MIN_GO_VERSION: &str = "1.17.0";

/// Toolchain detection result
#[derive(Debug, Clone)]
pub struct ToolchainInfo {
    pub name: &'static str,
    pub version: Option<Version>,
    pub available: bool,
}

/// Check whether the tool behind `tool` is installed, and which version
pub fn check_toolchain(tool: &CommandTool) -> ToolchainInfo {
    let name = tool.config().display_name;
    match tool.get_version() {
        Some(output) => ToolchainInfo {
            name,
            version: parse_go_version(&output),
            available: true,
        },
        None => ToolchainInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Extract a version from `go version` output, e.g.
/// `go version go1.21.3 linux/amd64` -> 1.21.3.
///
/// Missing components are zero-filled and pre-release suffixes (`rc2`) dropped.
pub fn parse_go_version(output: &str) -> Option<Version> {
    let token = output.split_whitespace().find_map(|word| {
        word.strip_prefix("go")
            .filter(|v| v.starts_with(|c: char| c.is_ascii_digit()))
    })?;

    let numeric: String = token
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut parts = numeric
        .split('.')
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<u64>());
    let major = parts.next()?.ok()?;
    let minor = parts.next().transpose().ok()?.unwrap_or(0);
    let patch = parts.next().transpose().ok()?.unwrap_or(0);

    Some(Version::new(major, minor, patch))
}

/// Returns a warning message if `found` is older than `minimum`
pub fn check_compatibility(found: &Version, minimum: &str) -> Option<String> {
    let minimum_ver = match Version::parse(minimum) {
        Ok(v) => v,
        Err(_) => return None, // Can't compare, skip warning
    };

    if *found < minimum_ver {
        Some(format!(
            "Generated projects expect Go {} or newer, found {}",
            minimum_ver, found
        ))
    } else {
        None
    }
}
