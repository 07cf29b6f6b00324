use anyhow::Result;
use colored::Colorize;
use std::env;

use super::ProjectContext;
use crate::application::use_cases::update_workspace::UpdatePlan;
use crate::infrastructure::filesystem::config_store::DevupConfig;
use crate::infrastructure::filesystem::workspace_scanner::WorkspaceScanner;

/// Handler for the list command
pub struct ListCommand {
    pub overrides: DevupConfig,
}

impl ListCommand {
    pub fn new(overrides: DevupConfig) -> Self {
        Self { overrides }
    }

    pub async fn execute(&self) -> Result<()> {
        let project_dir = env::current_dir()?;
        let context = ProjectContext::load(&project_dir, self.overrides.clone()).await?;

        let internal = context.filter.filter(&context.manifest.dependencies);
        if internal.is_empty() {
            println!(
                "No internal dependencies found in {}.",
                context.config.manifest()
            );
            return Ok(());
        }

        let listing = WorkspaceScanner::scan(context.workspace.root());
        let plan = UpdatePlan::build(
            &internal,
            &context.workspace,
            &listing,
            context.config.default_branch(),
        )?;

        println!(
            "{} Workspace: {}",
            "::".blue().bold(),
            context.workspace.root().display()
        );
        for repository in &plan.repositories {
            let marker = if repository.present {
                "✓".green()
            } else {
                "✗".red()
            };
            let status = if repository.present {
                repository.locator.branch().cyan()
            } else {
                "not in workspace".dimmed()
            };
            println!(
                "{} {} -> {} ({})",
                marker,
                repository.dependency.bold(),
                status,
                repository.locator.clone_url()
            );
        }

        Ok(())
    }
}
