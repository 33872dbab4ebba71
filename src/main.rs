use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::warn;

use pip_date::app;
use pip_date::config::{
    DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_PIP_PROGRAM, DEFAULT_PYPI_REGISTRY, OutputMode,
    PackageSource, RegistryConfig, RunConfig,
};
use pip_date::output::installer::PipInstaller;
use pip_date::version::date::TargetDate;
use pip_date::version::registries::PypiRegistry;

#[derive(Parser)]
#[command(name = "pip-date")]
#[command(version, about = "PyPI filtering by date")]
struct Cli {
    /// Package name(s) or path to requirements file (if -r is enabled)
    #[arg(required = true, num_args = 1..)]
    package: Vec<String>,

    /// The date for which you need actual packages. Format: YYYY-MM-DD
    date: String,

    /// Treat the package argument as the path to a requirements.txt file
    #[arg(short = 'r', long = "requirements")]
    requirements: bool,

    /// Display a table with versions and release dates instead of installing
    #[arg(short = 'l', long = "list")]
    list: bool,

    /// Write the resolved requirements to this file instead of installing
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf>,

    /// Base URL of the package index
    #[arg(long, env = "PIP_DATE_INDEX_URL", default_value = DEFAULT_PYPI_REGISTRY)]
    index_url: String,

    /// Timeout for a single registry request, in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_FETCH_TIMEOUT_SECS)]
    timeout: u64,

    /// Installer program used in install mode
    #[arg(long, env = "PIP_DATE_PIP", default_value = DEFAULT_PIP_PROGRAM)]
    pip: String,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Also write JSON logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<RunConfig> {
        let target_date = TargetDate::parse(&self.date)?;

        let packages = if self.requirements {
            if self.package.len() > 1 {
                warn!(
                    "Only the first requirements file is read, ignoring {:?}",
                    &self.package[1..]
                );
            }
            PackageSource::RequirementsFile(PathBuf::from(&self.package[0]))
        } else {
            PackageSource::Names(self.package)
        };

        Ok(RunConfig {
            packages,
            target_date,
            output: OutputMode::from_flags(self.output, self.list),
            registry: RegistryConfig {
                base_url: self.index_url,
                timeout_secs: self.timeout,
            },
            pip_program: self.pip,
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _log_guard = pip_date::logging::init(cli.verbose, cli.log_file.as_deref())?;

    let config = cli.into_config()?;
    let registry = PypiRegistry::from_config(&config.registry)?;
    let installer = PipInstaller::new(config.pip_program.clone());

    let report = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(app::run(
            &config,
            &registry,
            &installer,
            &mut std::io::stdout(),
        ))?;

    if !report.skipped.is_empty() {
        warn!("Skipped packages: {}", report.skipped.join(", "));
    }

    Ok(())
}
