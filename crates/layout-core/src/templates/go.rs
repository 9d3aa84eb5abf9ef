//! Go project templates

use super::ProjectTemplates;
use crate::request::MODULE_HOST;

const MAIN_GO: &str = r#"package main

import (
	"fmt"
)

func main() {
	fmt.Println("Hello, World!")
}
"#;

const GITIGNORE: &str = concat!(
    "# Binaries for programs and plugins\n",
    "*.exe\n",
    "*.exe~\n",
    "*.dll\n",
    "*.so\n",
    "*.dylib\n",
    "\t\n",
    "# Test binary, built with \"go test -c\"\n",
    "*.test\n",
    "\n",
    "# Output of the go coverage tool, specifically when used with LiteIDE\n",
    "*.out\n",
    "\n",
    "# Dependency directories (remove the comment below to include it)\n",
    "# vendor/\n",
    "\n",
    "# Go workspace file\n",
    "go.work",
);

/// Templates for a Go module laid out as `cmd/`, `pkg/`, `internal/`...
#[derive(Debug, Clone)]
pub struct GoTemplates {
    /// Name of the generating tool, credited at the bottom of the README
    generator: &'static str,
    /// Link target for the credit
    generator_url: &'static str,
}

impl GoTemplates {
    pub fn new(generator: &'static str, generator_url: &'static str) -> Self {
        Self {
            generator,
            generator_url,
        }
    }
}

impl ProjectTemplates for GoTemplates {
    fn entry_point_ext(&self) -> &'static str {
        "go"
    }

    fn manifest_file(&self) -> &'static str {
        "go.mod"
    }

    fn entry_point(&self, _project_name: &str) -> String {
        MAIN_GO.to_string()
    }

    fn readme(&self, project_name: &str, description: &str, account_handle: &str) -> String {
        let module = format!("{}/{}/{}", MODULE_HOST, account_handle, project_name);

        let mut readme = format!("# {}\n{}\n\n", project_name, description);
        readme.push_str("Installation 📡\n");
        readme.push_str("-------\n");
        readme.push_str("**Go 1.17+**\n");
        readme.push_str("```bash\n");
        readme.push_str(&format!("go install -v {}@latest\n", module));
        readme.push_str("```\n");
        readme.push_str("**otherwise**\n");
        readme.push_str("```bash\n");
        readme.push_str(&format!("go get -v {}\n", module));
        readme.push_str("```\n\n");
        readme.push_str("Usage 💻\n");
        readme.push_str("-------\n");
        readme.push_str("```bash\n");
        readme.push_str(&format!("{}\n", project_name));
        readme.push_str("```\n\n");
        readme.push_str(&format!(
            "Created with [{}]({})❤️",
            self.generator, self.generator_url
        ));
        readme
    }

    fn gitignore(&self) -> String {
        GITIGNORE.to_string()
    }
}
