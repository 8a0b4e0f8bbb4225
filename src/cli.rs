use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::sensitivity::{SensitivityMetric, SensitivityVariable};

#[derive(Parser, Debug)]
#[command(name = "nac-tco")]
#[command(about = "Network access control TCO and ROI calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Plain output: no colors, ASCII tables
    #[arg(long, global = true)]
    pub plain: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare the cost, ROI, risk and features of NAC vendors
    Compare {
        #[command(flatten)]
        scenario: ScenarioArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Sweep one input and show how a metric moves for each vendor
    Sensitivity {
        /// Input to sweep
        #[arg(long, value_enum)]
        variable: Variable,

        /// Metric to report
        #[arg(long, value_enum, default_value = "tco")]
        metric: Metric,

        /// First value of the sweep (defaults per variable)
        #[arg(long, requires_all = ["end", "step"])]
        start: Option<f64>,

        /// Last value of the sweep, inclusive
        #[arg(long, requires_all = ["start", "step"])]
        end: Option<f64>,

        /// Distance between swept values
        #[arg(long, requires_all = ["start", "end"])]
        step: Option<f64>,

        #[command(flatten)]
        scenario: ScenarioArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the vendors the calculator knows
    Vendors,

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Directory to write the config file to
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

/// Where the scenario comes from, and flags that override it.
#[derive(Args, Debug, Clone, Default)]
pub struct ScenarioArgs {
    /// Configuration file (defaults to the nearest .nac-tco.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Vendors to compare, comma separated (e.g. portnox,cisco,no-nac)
    #[arg(long, value_delimiter = ',')]
    pub vendors: Option<Vec<String>>,

    /// Number of managed devices
    #[arg(long)]
    pub devices: Option<u32>,

    /// Number of sites
    #[arg(long)]
    pub locations: Option<u32>,

    /// Years to project
    #[arg(long)]
    pub years: Option<u32>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format (defaults to the config file, then the output file extension, then terminal)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Variable {
    Devices,
    Price,
    Discount,
    FteCost,
    FteAllocation,
    Maintenance,
    RiskReduction,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Metric {
    Tco,
    Savings,
    Roi,
    Payback,
    /// Sum of the value drivers
    Value,
}

impl From<OutputFormat> for crate::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::output::OutputFormat::Terminal,
        }
    }
}

impl From<Variable> for SensitivityVariable {
    fn from(v: Variable) -> Self {
        match v {
            Variable::Devices => SensitivityVariable::DeviceCount,
            Variable::Price => SensitivityVariable::PortnoxBasePrice,
            Variable::Discount => SensitivityVariable::PortnoxDiscount,
            Variable::FteCost => SensitivityVariable::FteCost,
            Variable::FteAllocation => SensitivityVariable::FteAllocation,
            Variable::Maintenance => SensitivityVariable::MaintenancePercentage,
            Variable::RiskReduction => SensitivityVariable::RiskReduction,
        }
    }
}

impl From<Metric> for SensitivityMetric {
    fn from(m: Metric) -> Self {
        match m {
            Metric::Tco => SensitivityMetric::Tco,
            Metric::Savings => SensitivityMetric::Savings,
            Metric::Roi => SensitivityMetric::Roi,
            Metric::Payback => SensitivityMetric::PaybackMonths,
            Metric::Value => SensitivityMetric::TotalValue,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            crate::output::OutputFormat::from(OutputFormat::Json),
            crate::output::OutputFormat::Json
        );
        assert_eq!(
            crate::output::OutputFormat::from(OutputFormat::Markdown),
            crate::output::OutputFormat::Markdown
        );
        assert_eq!(
            crate::output::OutputFormat::from(OutputFormat::Terminal),
            crate::output::OutputFormat::Terminal
        );
    }

    #[test]
    fn test_compare_flags() {
        let cli = Cli::try_parse_from([
            "nac-tco",
            "compare",
            "--vendors",
            "portnox,cisco",
            "--devices",
            "1200",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Compare { scenario, output } => {
                assert_eq!(
                    scenario.vendors,
                    Some(vec!["portnox".to_string(), "cisco".to_string()])
                );
                assert_eq!(scenario.devices, Some(1200));
                assert_eq!(output.format, Some(OutputFormat::Json));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_sweep_bounds_must_come_together() {
        let partial = Cli::try_parse_from([
            "nac-tco",
            "sensitivity",
            "--variable",
            "discount",
            "--start",
            "0",
        ]);
        assert!(partial.is_err());

        let full = Cli::try_parse_from([
            "nac-tco",
            "sensitivity",
            "--variable",
            "fte-cost",
            "--metric",
            "payback",
            "--start",
            "50000",
            "--end",
            "90000",
            "--step",
            "20000",
        ]);
        assert!(full.is_ok());
    }

    #[test]
    fn test_variable_conversion() {
        assert_eq!(
            SensitivityVariable::from(Variable::Maintenance),
            SensitivityVariable::MaintenancePercentage
        );
        assert_eq!(
            SensitivityMetric::from(Metric::Payback),
            SensitivityMetric::PaybackMonths
        );
        assert_eq!(
            SensitivityMetric::from(Metric::Value),
            SensitivityMetric::TotalValue
        );
    }
}
