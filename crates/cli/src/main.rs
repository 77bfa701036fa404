//! The `lunar` binary: runs EVM bytecode and manages the CLI configuration.

pub(crate) mod error;
pub(crate) mod log_args;
pub(crate) mod output;
pub(crate) mod run;

use error::Error;
use log_args::LogArgs;
use output::{print_error, print_result};
use run::{run, RunArgs};
use tracing::debug;

use clap::{Parser, Subcommand};

use lunar_config::{config, ConfigArgs, Configuration};

#[derive(Debug, Parser)]
#[clap(name = "lunar", version)]
struct Arguments {
    #[clap(subcommand)]
    sub: Subcommands,

    #[clap(flatten)]
    logs: LogArgs,
}

#[derive(Debug, Subcommand)]
#[clap(about = "Lunar is a gas-metered interpreter for a subset of the EVM instruction set.")]
enum Subcommands {
    #[clap(name = "run", about = "Execute EVM bytecode and report its memory digest and gas usage")]
    Run(RunArgs),

    #[clap(name = "config", about = "Display and edit the current configuration")]
    Config(ConfigArgs),
}

fn main() -> Result<(), Error> {
    let args = Arguments::parse();

    // setup logging
    let _guard = args.logs.init_tracing();

    match args.sub {
        Subcommands::Run(cmd) => {
            let configuration = Configuration::load()
                .map_err(|e| Error::Generic(format!("failed to load configuration: {e}")))?;

            // malformed input is reported without executing anything
            match run(cmd, &configuration) {
                Ok(result) => print_result(&result),
                Err(e) => {
                    debug!(error = %e, "refusing to execute");
                    print_error(&e);
                }
            }
        }

        Subcommands::Config(cmd) => {
            config(cmd).map_err(|e| Error::Generic(format!("failed to configure: {e}")))?;
        }
    }

    Ok(())
}
