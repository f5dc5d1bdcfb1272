use clap::Parser;
use colored::Colorize;
use hoproute_core::cli::{self, Cli};
use hoproute_core::error::HopRouteError;
use hoproute_core::exit::HopRouteExit;

fn main() -> HopRouteExit {
    let cli = Cli::parse();

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(HopRouteExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            e.downcast_ref::<HopRouteError>()
                .map_or(HopRouteExit::Error, HopRouteExit::from_error)
        }
    }
}
