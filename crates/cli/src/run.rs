use clap::Parser;
use derive_builder::Builder;
use lunar_common::utils::strings::decode_hex;
use lunar_config::Configuration;
use lunar_vm::{Evm, ExecutionResult, Fork};
use tracing::debug;

use crate::error::Error;

#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Execute EVM bytecode and report the memory digest and gas usage",
    override_usage = "lunar run --bytecode <BYTECODE> [OPTIONS]"
)]
pub(crate) struct RunArgs {
    /// The bytecode to execute, as hex with an optional `0x` prefix.
    #[clap(long, short)]
    pub(crate) bytecode: Option<String>,

    /// The gas limit, in decimal. Defaults to the configured gas limit.
    #[clap(long, short)]
    pub(crate) gas: Option<String>,

    /// The fork whose instruction set to run. Defaults to the configured fork.
    #[clap(long, short)]
    pub(crate) fork: Option<String>,
}

impl RunArgsBuilder {
    #[allow(dead_code)]
    pub(crate) fn new() -> Self {
        Self { bytecode: Some(None), gas: Some(None), fork: Some(None) }
    }
}

/// Validates `args`, filling omitted values from `configuration`, and executes the bytecode.
/// Nothing is executed unless every input is well formed.
pub(crate) fn run(args: RunArgs, configuration: &Configuration) -> Result<ExecutionResult, Error> {
    let bytecode = args.bytecode.ok_or(Error::MissingBytecode)?;
    let code = decode_hex(&bytecode).map_err(|e| Error::InvalidBytecode(e.to_string()))?;

    let gas_limit = match args.gas {
        Some(gas) => gas.trim().parse::<u64>().map_err(|_| Error::InvalidGas)?,
        None => configuration.gas_limit,
    };

    let fork = match args.fork {
        Some(fork) => fork.parse::<Fork>()?,
        None => configuration.fork()?,
    };

    let evm = Evm::new(fork);
    debug!(code_len = code.len(), gas_limit, fork = %evm.fork(), "executing bytecode");
    Ok(evm.execute(&code, gas_limit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lunar_vm::Error as VmError;

    fn args(bytecode: Option<&str>, gas: Option<&str>, fork: Option<&str>) -> RunArgs {
        RunArgsBuilder::new()
            .bytecode(bytecode.map(str::to_string))
            .gas(gas.map(str::to_string))
            .fork(fork.map(str::to_string))
            .build()
            .expect("failed to build args")
    }

    #[test]
    fn test_run_with_explicit_flags() {
        let args = args(Some("0x600161000101"), Some("100"), Some("moon"));
        let result = run(args, &Configuration::default()).expect("run failed");

        assert!(result.is_success());
        assert_eq!(result.gas_used, 9);
        assert_eq!(result.gas_refund, 91);
    }

    #[test]
    fn test_run_falls_back_to_configuration() {
        let configuration = Configuration { gas_limit: 10, fork: "moon".to_string() };
        let result =
            run(args(Some("600161000101"), None, None), &configuration).expect("run failed");

        assert_eq!(result.gas_used, 9);
        assert_eq!(result.gas_refund, 1);
    }

    #[test]
    fn test_run_reports_execution_errors() {
        let args = args(Some("09"), Some("100"), None);
        let result = run(args, &Configuration::default()).expect("run failed");

        assert_eq!(result.error, Some(VmError::InvalidOpcode(0x09)));
        assert_eq!(result.gas_used, 0);
    }

    #[test]
    fn test_run_rejects_missing_bytecode() {
        let err = run(args(None, Some("100"), None), &Configuration::default())
            .expect_err("missing bytecode accepted");
        assert_eq!(err.to_string(), "missing flag --bytecode");
    }

    #[test]
    fn test_run_rejects_bad_gas() {
        for gas in ["", "ten", "-1", "0x10", "18446744073709551616"] {
            let err = run(args(Some("6001"), Some(gas), None), &Configuration::default())
                .expect_err("bad gas accepted");
            assert_eq!(err.to_string(), "gas should be a valid decimal", "gas {gas:?}");
        }
    }

    #[test]
    fn test_run_rejects_bad_bytecode_and_fork() {
        assert!(matches!(
            run(args(Some("0x6"), None, None), &Configuration::default()),
            Err(Error::InvalidBytecode(_))
        ));
        assert!(matches!(
            run(args(Some("6001"), None, Some("sun")), &Configuration::default()),
            Err(Error::UnknownFork(_))
        ));
    }
}
