use anyhow::Result;
use colored::Colorize;
use std::env;

use super::ProjectContext;
use crate::application::use_cases::update_workspace::{
    UpdateWorkspaceConfig, UpdateWorkspaceUseCase,
};
use crate::infrastructure::filesystem::config_store::DevupConfig;
use crate::infrastructure::package::NpmPackageManager;
use crate::infrastructure::scm::GitScm;
use crate::presentation::ui::ConsoleSink;

/// Handler for the update command
pub struct UpdateCommand {
    pub overrides: DevupConfig,
    pub npm_update: bool,
    pub verbose: bool,
}

impl UpdateCommand {
    pub fn new(overrides: DevupConfig, npm_update: bool, verbose: bool) -> Self {
        Self {
            overrides,
            npm_update,
            verbose,
        }
    }

    pub async fn execute(&self) -> Result<()> {
        let project_dir = env::current_dir()?;
        let context = ProjectContext::load(&project_dir, self.overrides.clone()).await?;

        let scm = GitScm::new().with_remote(context.config.remote());
        let packages = NpmPackageManager::with_executable(context.config.package_manager());
        let sink = ConsoleSink::new();

        let config = UpdateWorkspaceConfig::new()
            .with_update_packages(self.npm_update)
            .with_default_branch(context.config.default_branch());
        let use_case =
            UpdateWorkspaceUseCase::new(config, context.filter.clone(), &scm, &packages, &sink);

        let report = use_case
            .execute(
                &context.workspace,
                &context.manifest.dependencies,
                context.config.manifest(),
            )
            .await?;

        if !report.updated.is_empty() {
            println!("{} Workspace updated!", "✓".green().bold());
        }

        if self.verbose {
            println!("  Repositories updated: {}", report.updated.len());
            if !report.skipped.is_empty() {
                println!(
                    "  Not in workspace: {}",
                    report.skipped.join(", ").dimmed()
                );
            }
            if report.packages_updated {
                println!("  Packages updated with: {}", context.config.package_manager());
            }
        }

        Ok(())
    }
}
