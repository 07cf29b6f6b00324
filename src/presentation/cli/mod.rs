pub mod commands;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::env;
use std::process::exit;

use crate::infrastructure::filesystem::config_store::DevupConfig;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("BUILD_DATE"),
    ")"
);

/// devup - Keep sibling development checkouts on the branches your manifest asks for
#[derive(Parser)]
#[command(name = "devup")]
#[command(about = "Keep sibling development checkouts on the branches your manifest asks for")]
#[command(version, long_version = LONG_VERSION)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Project directory (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Settings shared by commands that read the manifest and scan the workspace.
/// Each flag overrides the matching `devup.yaml` key.
#[derive(Args, Debug, Clone, Default)]
pub struct WorkspaceArgs {
    /// Directory holding the sibling checkouts, relative to the project
    #[arg(short, long)]
    pub workspace: Option<String>,

    /// Manifest declaring the dependencies
    #[arg(long)]
    pub manifest: Option<String>,

    /// Regular expression selecting internal dependencies by locator
    #[arg(long)]
    pub pattern: Option<String>,

    /// Branch used when a locator carries no #ref
    #[arg(long)]
    pub default_branch: Option<String>,
}

impl WorkspaceArgs {
    fn to_overrides(&self) -> DevupConfig {
        DevupConfig {
            workspace_root: self.workspace.clone(),
            manifest: self.manifest.clone(),
            default_branch: self.default_branch.clone(),
            internal_pattern: self.pattern.clone(),
            ..Default::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check out and pull every internal dependency present in the workspace
    Update {
        #[command(flatten)]
        workspace: WorkspaceArgs,

        /// Run the package-manager update in each checkout and in the project
        #[arg(short = 'u', long)]
        npm_update: bool,

        /// Package-manager executable (npm, yarn, pnpm)
        #[arg(long, env = "DEVUP_PACKAGE_MANAGER")]
        package_manager: Option<String>,

        /// Remote to pull from
        #[arg(long)]
        remote: Option<String>,
    },

    /// Show internal dependencies and whether they are checked out in the workspace
    List {
        #[command(flatten)]
        workspace: WorkspaceArgs,
    },

    /// Create a devup.yaml template in the project directory
    Init {
        /// Force overwrite existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub fn verbose(&self) -> bool {
        self.cli.verbose
    }

    pub async fn run(self) -> anyhow::Result<()> {
        colored::control::set_override(!self.cli.no_color);

        // Change directory if specified
        if let Some(ref dir) = self.cli.directory {
            env::set_current_dir(dir)?;
        }

        match self.handle_command().await {
            Ok(_) => Ok(()),
            Err(e) => {
                eprintln!("{} {:#}", "Error:".red().bold(), e);
                exit(1);
            }
        }
    }

    async fn handle_command(&self) -> anyhow::Result<()> {
        match &self.cli.command {
            Commands::Update {
                workspace,
                npm_update,
                package_manager,
                remote,
            } => {
                use crate::presentation::cli::commands::update::UpdateCommand;

                let overrides = DevupConfig {
                    package_manager: package_manager.clone(),
                    remote: remote.clone(),
                    ..workspace.to_overrides()
                };
                UpdateCommand::new(overrides, *npm_update, self.cli.verbose)
                    .execute()
                    .await
            }
            Commands::List { workspace } => {
                use crate::presentation::cli::commands::list::ListCommand;

                ListCommand::new(workspace.to_overrides()).execute().await
            }
            Commands::Init { force } => {
                use crate::presentation::cli::commands::init::InitCommand;

                InitCommand::new(*force).execute()
            }
        }
    }
}
