use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use hookgen_config::{CONFIG_FILE_NAME, ConfigFile};

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions, Target},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to hookgen.toml (defaults to ./hookgen.toml)
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Run only one generator
    #[arg(long, value_enum)]
    pub only: Option<Target>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config_file = ConfigFile::open(&self.config).unwrap_or_exit();

        let report = ops::generate(
            config_file.config(),
            GenerateOptions {
                only: self.only,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
