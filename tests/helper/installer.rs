//! Installer test utilities

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use pip_date::output::installer::Installer;

/// Installer that records invocations instead of running pip
#[derive(Default)]
pub struct RecordingInstaller {
    failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `install` fail for the given pin
    pub fn failing_on(mut self, pin: &str) -> Self {
        self.failing.insert(pin.to_string());
        self
    }

    /// Recorded calls: `upgrade` for self-upgrades, the pin for installs
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Installer for RecordingInstaller {
    async fn upgrade_self(&self) -> bool {
        self.calls.lock().unwrap().push("upgrade".to_string());
        true
    }

    async fn install(&self, pin: &str) -> bool {
        self.calls.lock().unwrap().push(pin.to_string());
        !self.failing.contains(pin)
    }
}
