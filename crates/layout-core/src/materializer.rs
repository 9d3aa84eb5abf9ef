//! Apply scaffold operations to the filesystem

use crate::builder::ScaffoldOp;
use crate::error::{Result, ScaffoldError};
use crate::runtime::ManifestTool;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Execute `ops` in order, stopping at the first failure.
///
/// Nothing created before a failure is removed. Returns every path that
/// was created, in creation order.
pub fn materialize<M: ManifestTool + ?Sized>(
    ops: &[ScaffoldOp],
    tool: &M,
) -> Result<Vec<PathBuf>> {
    let mut created = Vec::with_capacity(ops.len());

    for op in ops {
        match op {
            // Non-recursive: an existing root or folder is an error, never reused
            ScaffoldOp::CreateRoot(path) | ScaffoldOp::CreateDir(path) => {
                fs::create_dir(path).map_err(|e| ScaffoldError::io(path, e))?;
                created.push(path.clone());
            }
            ScaffoldOp::WriteFile { path, contents } => {
                fs::write(path, contents).map_err(|e| ScaffoldError::io(path, e))?;
                created.push(path.clone());
            }
            ScaffoldOp::InitManifest { dir, module_path } => {
                tool.init(dir, module_path)?;
                created.push(dir.join(tool.manifest_file()));
            }
        }
    }

    Ok(created)
}

/// List everything under `root` relative to it, sorted, directories
/// suffixed with `/`
pub fn list_tree(root: &Path) -> Result<Vec<String>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            ScaffoldError::io(path, e.into())
        })?;
        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");

        if entry.file_type().is_dir() {
            entries.push(format!("{}/", relative));
        } else {
            entries.push(relative);
        }
    }

    Ok(entries)
}
