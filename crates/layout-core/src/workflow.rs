//! Prompt, build and materialize in a single pass

use crate::builder::build_ops;
use crate::error::Result;
use crate::materializer::materialize;
use crate::plan::FolderPlan;
use crate::prompt::{collect_request, Prompter};
use crate::request::ScaffoldRequest;
use crate::runtime::ManifestTool;
use crate::templates::ProjectTemplates;
use std::path::{Path, PathBuf};

/// Result of a successful scaffold run
#[derive(Debug, Clone)]
pub struct Scaffolded {
    pub request: ScaffoldRequest,
    pub root: PathBuf,
    pub created: Vec<PathBuf>,
}

/// Everything a scaffold run needs besides the operator's answers
pub struct Scaffolder<'a, T: ?Sized, M: ?Sized> {
    pub plan: &'a FolderPlan,
    pub templates: &'a T,
    pub tool: &'a M,
    pub base_dir: &'a Path,
}

impl<T: ProjectTemplates + ?Sized, M: ManifestTool + ?Sized> Scaffolder<'_, T, M> {
    /// Collect answers from `prompter`, then create the project
    pub fn run<P: Prompter + ?Sized>(&self, prompter: &mut P) -> Result<Scaffolded> {
        let request = collect_request(prompter, self.plan)?;
        self.create(request)
    }

    /// Create the project for an already collected request
    pub fn create(&self, request: ScaffoldRequest) -> Result<Scaffolded> {
        let ops = build_ops(&request, self.plan, self.templates, self.base_dir);
        let created = materialize(&ops, self.tool)?;
        let root = self.base_dir.join(request.project_name());

        Ok(Scaffolded {
            request,
            root,
            created,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScaffoldError;
    use crate::materializer::tests::FakeGoTool;
    use crate::plan::MARKER_FILE;
    use crate::prompt::LinePrompter;
    use crate::templates::GoTemplates;
    use std::io::Cursor;

    fn run_with(input: &str, base_dir: &Path, tool: &FakeGoTool) -> Result<Scaffolded> {
        let plan = FolderPlan::standard();
        let templates = GoTemplates::new("golayout", "https://crates.io/crates/golayout");
        let scaffolder = Scaffolder {
            plan: &plan,
            templates: &templates,
            tool,
            base_dir,
        };
        let mut prompter = LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        scaffolder.run(&mut prompter)
    }

    #[test]
    fn test_demo_scenario() {
        let tmp = tempfile::tempdir().unwrap();
        let tool = FakeGoTool::default();

        let result = run_with("demo\nA demo tool\nbob\nn\nn\nn\n", tmp.path(), &tool).unwrap();
        let root = tmp.path().join("demo");
        assert_eq!(result.root, root);

        let main = std::fs::read_to_string(root.join("cmd/demo.go")).unwrap();
        assert!(main.contains("fmt.Println(\"Hello, World!\")"));

        let readme = std::fs::read_to_string(root.join("README.md")).unwrap();
        assert!(readme.starts_with("# demo\nA demo tool\n"));
        assert!(readme.contains("github.com/bob/demo"));

        let gitignore = std::fs::read_to_string(root.join(".gitignore")).unwrap();
        assert!(gitignore.starts_with("# Binaries for programs and plugins\n"));

        let manifest = std::fs::read_to_string(root.join("go.mod")).unwrap();
        assert!(manifest.starts_with("module github.com/bob/demo\n"));

        for folder in ["api", "server", "db"] {
            assert!(!root.join(folder).exists(), "{folder}");
        }
        for folder in ["pkg", "docs", "internal", "examples"] {
            assert!(root.join(folder).join(MARKER_FILE).is_file(), "{folder}");
        }
    }

    #[test]
    fn test_all_optional_folders_yes() {
        let tmp = tempfile::tempdir().unwrap();
        let input = "myapp\nMy app\nalice\ny\ny\ny\nyes\nYES\nY\n\n";

        run_with(input, tmp.path(), &FakeGoTool::default()).unwrap();

        let root = tmp.path().join("myapp");
        for folder in FolderPlan::standard().optional {
            let dir = root.join(&folder.name);
            assert!(dir.is_dir(), "{}", folder.name);
            assert!(dir.join(MARKER_FILE).is_file(), "{}", folder.name);
        }
    }

    #[test]
    fn test_all_optional_folders_no() {
        let tmp = tempfile::tempdir().unwrap();
        let input = "myapp\nMy app\nalice\nn\nn\nn\nn\nn\nn\nn\n";

        let result = run_with(input, tmp.path(), &FakeGoTool::default()).unwrap();

        let root = tmp.path().join("myapp");
        for folder in FolderPlan::standard().optional {
            assert!(!root.join(&folder.name).exists(), "{}", folder.name);
        }
        for folder in ["cmd", "pkg", "docs", "internal", "examples"] {
            assert!(root.join(folder).is_dir(), "{folder}");
        }
        assert!(result.created.contains(&root.join("README.md")));
    }

    #[test]
    fn test_second_run_fails_with_already_exists() {
        let tmp = tempfile::tempdir().unwrap();
        let tool = FakeGoTool::default();
        let input = "demo\nA demo tool\nbob\nn\nn\nn\n";

        run_with(input, tmp.path(), &tool).unwrap();
        let readme_before = std::fs::read_to_string(tmp.path().join("demo/README.md")).unwrap();

        let err = run_with("demo\nChanged\nbob\ny\n", tmp.path(), &tool).unwrap_err();

        assert!(matches!(err, ScaffoldError::AlreadyExists(_)));
        assert_eq!(tool.calls.get(), 1);
        let readme_after = std::fs::read_to_string(tmp.path().join("demo/README.md")).unwrap();
        assert_eq!(readme_before, readme_after);
        assert!(!tmp.path().join("demo/api").exists());
    }

    #[test]
    fn test_invalid_name_creates_nothing() {
        let tmp = tempfile::tempdir().unwrap();

        let err = run_with("my app\nx\nbob\n", tmp.path(), &FakeGoTool::default()).unwrap_err();

        assert!(matches!(err, ScaffoldError::InvalidName(_)));
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }
}
