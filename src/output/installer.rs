//! Package installation through pip

#[cfg(test)]
use mockall::automock;

use tokio::process::Command;
use tracing::{debug, error};

/// Trait for installing packages with an external installer
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Installer: Send + Sync {
    /// Upgrades the installer itself
    async fn upgrade_self(&self) -> bool;

    /// Installs a `name==version` pin, returns whether it succeeded
    async fn install(&self, pin: &str) -> bool;
}

/// Installer that shells out to `pip`
pub struct PipInstaller {
    program: String,
}

impl PipInstaller {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    async fn run(&self, args: &[&str]) -> bool {
        debug!("Running {} {}", self.program, args.join(" "));

        match Command::new(&self.program).args(args).status().await {
            Ok(status) if status.success() => true,
            Ok(status) => {
                error!(
                    "`{} {}` exited with {}",
                    self.program,
                    args.join(" "),
                    status
                );
                false
            }
            Err(e) => {
                error!("Failed to run {}: {}", self.program, e);
                false
            }
        }
    }
}

#[async_trait::async_trait]
impl Installer for PipInstaller {
    async fn upgrade_self(&self) -> bool {
        self.run(&["install", "--upgrade", "pip"]).await
    }

    async fn install(&self, pin: &str) -> bool {
        self.run(&["install", pin]).await
    }
}
