//! golayout - Go project layout scaffolding

use clap::Parser;
use layout_core::ProductConfig;
use std::path::Path;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// golayout product configuration
#[derive(Clone)]
pub struct GoLayoutConfig;

impl ProductConfig for GoLayoutConfig {
    fn name(&self) -> &'static str {
        "golayout"
    }

    fn display_name(&self) -> &'static str {
        "golayout"
    }

    fn plan_env(&self) -> &'static str {
        "GOLAYOUT_PLAN"
    }

    fn repo_url(&self) -> &'static str {
        "https://crates.io/crates/golayout"
    }

    fn docs_url(&self) -> &'static str {
        "https://go.dev/doc/install"
    }

    fn next_steps(&self, root: &Path) -> Vec<String> {
        vec![
            format!("cd {}", root.display()),
            "Open README.md and describe your project".to_string(),
            "go run ./cmd".to_string(),
        ]
    }
}

/// Create a Go project structure ready to be pushed on GitHub.
///
/// Everything is asked interactively: project name, description,
/// GitHub username and which optional folders to create.
#[derive(Parser, Debug)]
#[command(name = "golayout")]
#[command(version)]
pub struct Args {}

/// Render an error chain as a single diagnostic line
fn report(err: &anyhow::Error) -> String {
    format!("Error: {:#}", err)
}

fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let _args = Args::parse();
    let config = GoLayoutConfig;

    let result = layout_core::run(&config, CLI_VERSION);

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(err) = result {
        eprintln!("{}", report(&err));
        std::process::exit(1);
    }
}
