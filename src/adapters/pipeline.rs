//! Build pipeline adapter
//!
//! Runs the configured install and build commands in the repository
//! working directory. Defaults are the npm pair (`npm ci`, `npm run
//! build`); any argv can be configured through `selfheal.toml`.

use std::path::PathBuf;
use std::process::Command;

use log::debug;

use crate::core::models::StageError;
use crate::core::ports::BuildPipeline;

/// Build pipeline that shells out to configured commands
#[derive(Debug, Clone)]
pub struct CommandPipeline {
    workdir: PathBuf,
    install: Vec<String>,
    build: Vec<String>,
}

impl CommandPipeline {
    /// Create a pipeline with explicit install and build argvs
    #[must_use]
    pub const fn new(workdir: PathBuf, install: Vec<String>, build: Vec<String>) -> Self {
        Self {
            workdir,
            install,
            build,
        }
    }

    fn run(&self, argv: &[String]) -> Result<(), StageError> {
        let command = argv.join(" ");
        let (program, args) = argv.split_first().ok_or_else(|| StageError::Launch {
            command: String::from("(empty)"),
            reason: String::from("no command configured"),
        })?;

        debug!("running `{command}` in {}", self.workdir.display());
        let output = Command::new(program)
            .current_dir(&self.workdir)
            .args(args)
            .output()
            .map_err(|err| StageError::Launch {
                command: command.clone(),
                reason: err.to_string(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(StageError::Exited {
                command,
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

impl BuildPipeline for CommandPipeline {
    fn install(&self) -> Result<(), StageError> {
        self.run(&self.install)
    }

    fn build(&self) -> Result<(), StageError> {
        self.run(&self.build)
    }
}
