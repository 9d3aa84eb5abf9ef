//! Literal file templates for generated projects
//!
//! Templates are plain string building; the output of each renderer is
//! fixed byte for byte.

pub mod go;

pub use go::GoTemplates;

/// File contents for one target language
pub trait ProjectTemplates {
    /// Extension of the entry-point source file (without the dot)
    fn entry_point_ext(&self) -> &'static str;

    /// Name of the dependency manifest (e.g. `go.mod`)
    fn manifest_file(&self) -> &'static str;

    /// Hello-world entry point
    fn entry_point(&self, project_name: &str) -> String;

    /// README.md content
    fn readme(&self, project_name: &str, description: &str, account_handle: &str) -> String;

    /// .gitignore content
    fn gitignore(&self) -> String;

    /// File name of the entry point for `project_name`
    fn entry_point_file(&self, project_name: &str) -> String {
        format!("{}.{}", project_name, self.entry_point_ext())
    }
}
