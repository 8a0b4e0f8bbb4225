//! CLI command implementations.
//!
//! - **compare**: price and score a set of vendors
//! - **sensitivity**: sweep one input across a range
//! - **vendors**: list the vendor catalog
//! - **init**: write a default `.nac-tco.toml`
//!
//! `compare` and `sensitivity` share scenario loading and report output,
//! both defined here.

pub mod compare;
pub mod init;
pub mod sensitivity;
pub mod vendors;

pub use compare::compare;
pub use init::init_config;
pub use sensitivity::run_sensitivity;
pub use vendors::list_vendors;

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::cli::{OutputArgs, ScenarioArgs};
use crate::comparison::ComparisonInputs;
use crate::config::{load_config, load_config_from_path, TcoConfig};
use crate::core::VendorIdentity;
use crate::formatting::FormattingConfig;
use crate::output::{self, OutputFormat, ReportWriter};

/// Config file plus command-line overrides, validated.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub config: TcoConfig,
    pub vendors: Vec<VendorIdentity>,
    /// Names from `--vendors` or the config that matched no known vendor.
    pub unrecognized: Vec<String>,
    pub inputs: ComparisonInputs,
}

pub fn load_scenario(args: &ScenarioArgs) -> Result<Scenario> {
    let config = match &args.config {
        Some(path) => load_config_from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => load_config(),
    };

    let mut params = config.organization_params();
    if let Some(devices) = args.devices {
        params.device_count = devices;
    }
    if let Some(locations) = args.locations {
        params.locations = locations;
    }
    if let Some(years) = args.years {
        params.years_to_project = years;
    }
    let inputs = config
        .comparison_inputs(params)
        .context("Invalid organization inputs")?;

    let names = args.vendors.clone().unwrap_or_else(|| config.vendor_names());
    let mut vendors = Vec::with_capacity(names.len());
    let mut unrecognized: Vec<String> = Vec::new();
    for name in &names {
        let resolution = VendorIdentity::parse_slug(name);
        vendors.push(resolution.vendor);
        let name = name.trim().to_string();
        if resolution.approximated && !unrecognized.contains(&name) {
            unrecognized.push(name);
        }
    }

    Ok(Scenario {
        config,
        vendors,
        unrecognized,
        inputs,
    })
}

/// `--format`, then the config file, then the output file's extension.
pub fn resolve_format(args: &OutputArgs, config: &TcoConfig) -> OutputFormat {
    args.format
        .map(OutputFormat::from)
        .or_else(|| config.default_format())
        .or_else(|| args.output.as_deref().and_then(output::format_for_path))
        .unwrap_or(OutputFormat::Terminal)
}

/// Run `write` against stdout or the `--output` file.
pub fn emit<F>(args: &OutputArgs, config: &TcoConfig, plain: bool, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn ReportWriter) -> Result<()>,
{
    let format = resolve_format(args, config);
    match &args.output {
        Some(path) => {
            // Files never get color codes
            let file = crate::io::create_output_file(path)?;
            let mut writer = output::create_writer(format, file, FormattingConfig::plain());
            write(writer.as_mut())?;
            report_written(path);
        }
        None => {
            let formatting = FormattingConfig::resolve(config.use_color(), plain);
            formatting.apply();
            let stdout = std::io::stdout();
            let mut writer = output::create_writer(format, stdout.lock(), formatting);
            write(writer.as_mut())?;
            std::io::stdout().flush()?;
        }
    }
    Ok(())
}

fn report_written(path: &Path) {
    tracing::info!(path = %path.display(), "Report written");
    eprintln!("Report written to {}", path.display());
}
