//! Turn a request into the ordered list of filesystem operations

use crate::plan::{FolderPlan, MARKER_FILE};
use crate::request::ScaffoldRequest;
use crate::templates::ProjectTemplates;
use std::path::{Path, PathBuf};

/// One step of a scaffold run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOp {
    /// Create the project root; fails if it already exists
    CreateRoot(PathBuf),
    /// Create a subfolder of the root
    CreateDir(PathBuf),
    /// Write a file with the given contents
    WriteFile { path: PathBuf, contents: String },
    /// Run the dependency manager inside `dir`
    InitManifest { dir: PathBuf, module_path: String },
}

impl ScaffoldOp {
    /// Path the operation creates (the root directory for manifest init)
    pub fn path(&self) -> &Path {
        match self {
            ScaffoldOp::CreateRoot(path) | ScaffoldOp::CreateDir(path) => path,
            ScaffoldOp::WriteFile { path, .. } => path,
            ScaffoldOp::InitManifest { dir, .. } => dir,
        }
    }
}

/// Compute every operation for `request`, rooted at `base_dir/<project>`.
///
/// Pure: nothing touches the filesystem until the ops are materialized.
pub fn build_ops<T: ProjectTemplates + ?Sized>(
    request: &ScaffoldRequest,
    plan: &FolderPlan,
    templates: &T,
    base_dir: &Path,
) -> Vec<ScaffoldOp> {
    let name = request.project_name();
    let root = base_dir.join(name);
    let mut ops = vec![ScaffoldOp::CreateRoot(root.clone())];
    let mut subfolders = Vec::new();

    // Entry point
    let entry_dir = root.join(&plan.entry_folder);
    ops.push(ScaffoldOp::CreateDir(entry_dir.clone()));
    ops.push(ScaffoldOp::WriteFile {
        path: entry_dir.join(templates.entry_point_file(name)),
        contents: templates.entry_point(name),
    });
    subfolders.push(entry_dir);

    ops.push(ScaffoldOp::InitManifest {
        dir: root.clone(),
        module_path: request.module_path(),
    });

    let enabled_optional = plan
        .optional
        .iter()
        .filter(|folder| request.wants(&folder.name))
        .map(|folder| &folder.name);

    for folder in plan.mandatory.iter().chain(enabled_optional) {
        let dir = root.join(folder);
        ops.push(ScaffoldOp::CreateDir(dir.clone()));
        subfolders.push(dir);
    }

    if plan.markers {
        for dir in &subfolders {
            ops.push(ScaffoldOp::WriteFile {
                path: dir.join(MARKER_FILE),
                contents: String::new(),
            });
        }
    }

    ops.push(ScaffoldOp::WriteFile {
        path: root.join("README.md"),
        contents: templates.readme(name, request.description(), request.account_handle()),
    });
    ops.push(ScaffoldOp::WriteFile {
        path: root.join(".gitignore"),
        contents: templates.gitignore(),
    });

    ops
}
