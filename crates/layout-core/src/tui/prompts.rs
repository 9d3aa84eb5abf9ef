//! Charm-style CLI prompts using cliclack

use crate::error::{Result as ScaffoldResult, ScaffoldError};
use crate::materializer::list_tree;
use crate::plan::FolderPlan;
use crate::product::ProductConfig;
use crate::prompt::{collect_request, confirm_answer, LinePrompter, Prompter};
use crate::runtime::{
    check_compatibility, check_toolchain, go_tool, CommandTool, MIN_GO_VERSION,
};
use crate::templates::GoTemplates;
use crate::workflow::{Scaffolded, Scaffolder};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::IsTerminal;
use std::path::Path;

/// Prompter drawing cliclack inputs; used when a person is at the terminal
struct ClackPrompter;

impl Prompter for ClackPrompter {
    fn ask(&mut self, question: &str) -> ScaffoldResult<Option<String>> {
        let label = question.trim_end_matches([':', ' ']);
        let answer: String = cliclack::input(label)
            .required(false)
            .interact()
            .map_err(ScaffoldError::Prompt)?;
        Ok(Some(answer))
    }

    fn confirm(&mut self, question: &str) -> ScaffoldResult<bool> {
        let answer: String = cliclack::input(question)
            .placeholder("Y/n")
            .required(false)
            .interact()
            .map_err(ScaffoldError::Prompt)?;
        Ok(confirm_answer(Some(answer.as_str())))
    }
}

/// Run the CLI with interactive prompts
pub fn run<C: ProductConfig>(config: &C, cli_version: &str) -> Result<()> {
    cliclack::intro(format!("{} {}", config.display_name(), cli_version))?;

    // Step 1: Check toolchain (advisory, `go mod init` reports the hard failure)
    let tool = go_tool();
    handle_toolchain_check(config, &tool)?;

    // Step 2: Resolve folder plan
    let plan = load_plan(config)?;

    // Step 3: Ask questions and create the project
    let templates = GoTemplates::new(config.name(), config.repo_url());
    let scaffolder = Scaffolder {
        plan: &plan,
        templates: &templates,
        tool: &tool,
        base_dir: Path::new("."),
    };

    let request = if attended() {
        collect_request(&mut ClackPrompter, &plan)?
    } else {
        let stdin = std::io::stdin();
        let mut prompter = LinePrompter::new(stdin.lock(), std::io::stdout());
        let request = collect_request(&mut prompter, &plan)?;
        // Piped answers are not echoed
        println!();
        request
    };

    let spinner = cliclack::spinner();
    spinner.start("Creating project...");
    let scaffolded = match scaffolder.create(request) {
        Ok(scaffolded) => {
            spinner.stop("Project created");
            scaffolded
        }
        Err(e) => {
            spinner.error("Failed to create project");
            return Err(e.into());
        }
    };

    // Step 4: Show what was created and what to do next
    print_summary(&scaffolded)?;
    print_next_steps(config, &scaffolded.root)?;

    Ok(())
}

/// Both ends of the terminal belong to a person
fn attended() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

fn handle_toolchain_check<C: ProductConfig>(config: &C, tool: &CommandTool) -> Result<()> {
    let info = check_toolchain(tool);

    if !info.available {
        cliclack::log::warning(format!(
            "{} is not installed; `{}` will fail. See {}",
            info.name,
            tool.init_command("<module>"),
            config.docs_url()
        ))?;
        return Ok(());
    }

    match &info.version {
        Some(version) => {
            cliclack::log::success(format!("{} installed ({})", info.name, version))?;
            if let Some(warning) = check_compatibility(version, MIN_GO_VERSION) {
                cliclack::log::warning(warning)?;
            }
        }
        None => {
            cliclack::log::success(format!("{} installed (unknown version)", info.name))?;
        }
    }

    Ok(())
}

fn load_plan<C: ProductConfig>(config: &C) -> Result<FolderPlan> {
    let env = config.plan_env();
    if let Some(path) = std::env::var_os(env).filter(|p| !p.is_empty()) {
        cliclack::log::info(format!(
            "Using folder plan from {}",
            Path::new(&path).display()
        ))?;
    }

    FolderPlan::resolve(env).with_context(|| format!("Failed to load folder plan (${})", env))
}

fn print_summary(scaffolded: &Scaffolded) -> Result<()> {
    let tree = list_tree(&scaffolded.root)?;
    let listing: Vec<String> = tree
        .iter()
        .map(|entry| {
            if entry.ends_with('/') {
                entry.cyan().to_string()
            } else {
                entry.dimmed().to_string()
            }
        })
        .collect();

    cliclack::log::success(format!(
        "Created {} entries in {}",
        scaffolded.created.len(),
        scaffolded.root.display()
    ))?;
    cliclack::note(scaffolded.request.project_name(), listing.join("\n"))?;

    Ok(())
}

fn print_next_steps<C: ProductConfig>(config: &C, root: &Path) -> Result<()> {
    let steps = config.next_steps(root);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
