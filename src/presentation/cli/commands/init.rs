use anyhow::Result;
use std::env;

use crate::infrastructure::filesystem::config_store::{ConfigStore, CONFIG_FILE_NAME};

/// Create a devup.yaml template in the project directory
pub struct InitCommand {
    /// Force overwrite existing file
    pub force: bool,
}

impl InitCommand {
    pub fn new(force: bool) -> Self {
        Self { force }
    }

    /// Execute the init command
    pub fn execute(&self) -> Result<()> {
        let current_dir = env::current_dir()?;
        let target_file = ConfigStore::new().write_template(&current_dir, self.force)?;

        println!("✅ Successfully created {} template file", CONFIG_FILE_NAME);
        println!("📁 Location: {}", target_file.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Edit {} to match your workspace layout", CONFIG_FILE_NAME);
        println!("   2. Run 'devup list' to see which dependencies are checked out");
        println!("   3. Run 'devup update' to switch them to their branches");

        Ok(())
    }
}
