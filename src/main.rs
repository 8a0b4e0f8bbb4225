use anyhow::Result;
use nac_tco::cli::{self, Commands};
use nac_tco::commands::{self, sensitivity::SensitivityArgs};
use nac_tco::observability;

fn main() -> Result<()> {
    observability::install_panic_hook();

    let cli = cli::parse_args();
    observability::init_tracing(cli.verbosity);
    observability::set_command(command_name(&cli.command));

    match cli.command {
        Commands::Compare { scenario, output } => {
            commands::compare(&scenario, &output, cli.plain)
        }
        Commands::Sensitivity {
            variable,
            metric,
            start,
            end,
            step,
            scenario,
            output,
        } => {
            let args = SensitivityArgs {
                variable,
                metric,
                start,
                end,
                step,
            };
            commands::run_sensitivity(&args, &scenario, &output, cli.plain)
        }
        Commands::Vendors => commands::list_vendors(cli.plain),
        Commands::Init { force, dir } => commands::init_config(&dir, force).map(|_| ()),
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Compare { .. } => "compare",
        Commands::Sensitivity { .. } => "sensitivity",
        Commands::Vendors => "vendors",
        Commands::Init { .. } => "init",
    }
}
