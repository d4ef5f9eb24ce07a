//! Command-line interface.

use crate::detect::DetectPrefix;
use crate::output::{
    format_interface, format_netmask_table, format_result, interface_to_json,
    netmask_table_to_json, result_to_json,
};
use crate::processing::{compute_from_cidr, netmask_table};
use clap::{CommandFactory, Parser};
use std::io::{self, Write};

#[derive(Parser, Debug, Default)]
#[command(name = "lancalc")]
#[command(version, about = "LanCalc: IPv4 subnet calculator", long_about = None)]
#[command(
    after_help = "Examples:\n  lancalc 192.168.1.1/24\n  lancalc 10.0.0.1/8 --json\n  lancalc --interface"
)]
pub struct Cli {
    /// IPv4 address in CIDR notation (e.g., 192.168.1.1/24)
    pub address: Option<String>,

    /// Output result in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Show detected network interface information
    #[arg(short, long)]
    pub interface: bool,

    /// List every prefix length with its netmask
    #[arg(short, long)]
    pub masks: bool,

    /// Verbose logging (-v, -vv, -vvv for increasing verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

/// Execute the parsed command line, returning the process exit code.
pub fn run<W: Write, E: Write>(
    cli: &Cli,
    detector: &dyn DetectPrefix,
    out: &mut W,
    err: &mut E,
) -> u8 {
    match try_run(cli, detector, out, err) {
        Ok(code) => code,
        Err(e) => {
            log::error!("Failed writing output: {e}");
            1
        }
    }
}

fn try_run<W: Write, E: Write>(
    cli: &Cli,
    detector: &dyn DetectPrefix,
    out: &mut W,
    err: &mut E,
) -> io::Result<u8> {
    let color = !cli.no_color;

    if cli.interface {
        let address = detector.local_address();
        let prefix = detector.detect_prefix(&address);
        log::info!("Detected interface {address}/{prefix}");
        if cli.json {
            writeln!(out, "{}", interface_to_json(&address, prefix))?;
        } else {
            writeln!(out, "{}", format_interface(&address, prefix, color))?;
        }
        return Ok(0);
    }

    if cli.masks {
        let table = netmask_table();
        if cli.json {
            writeln!(out, "{}", netmask_table_to_json(&table))?;
        } else {
            writeln!(out, "{}", format_netmask_table(&table))?;
        }
        return Ok(0);
    }

    let Some(address) = cli.address.as_deref() else {
        writeln!(out, "{}", Cli::command().render_help())?;
        return Ok(0);
    };

    match compute_from_cidr(address) {
        Ok(res) => {
            if cli.json {
                writeln!(out, "{}", result_to_json(&res))?;
            } else {
                writeln!(out, "{}", format_result(&res, color))?;
            }
            Ok(0)
        }
        Err(e) if e.is_validation() => {
            writeln!(err, "Error: {e}")?;
            Ok(1)
        }
        Err(e) => {
            writeln!(err, "Unexpected error: {e}")?;
            Ok(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedDetector;

    impl DetectPrefix for FixedDetector {
        fn detect_prefix(&self, _address: &str) -> u8 {
            20
        }

        fn local_address(&self) -> String {
            "10.4.7.9".to_string()
        }
    }

    fn run_args(args: &[&str]) -> (u8, String, String) {
        let cli = Cli::try_parse_from(std::iter::once("lancalc").chain(args.iter().copied()))
            .expect("valid arguments");
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(&cli, &FixedDetector, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_cli_address() {
        let (code, out, err) = run_args(&["192.168.1.1/24", "--no-color"]);
        assert_eq!(code, 0);
        assert!(out.starts_with("Network: 192.168.1.0\n"));
        assert!(out.contains("Hosts: 254\n"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_cli_json() {
        let (code, out, _) = run_args(&["10.0.0.1/8", "-j"]);
        assert_eq!(code, 0);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["network"], "10.0.0.0");
        assert!(value.get("comment").is_none());
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_cli_invalid_address() {
        let (code, out, err) = run_args(&["999.0.0.1/24"]);
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(err, "Error: Invalid IP address: 999.0.0.1\n");
    }

    #[test]
    fn test_cli_missing_separator() {
        let (code, _, err) = run_args(&["10.0.0.1"]);
        assert_eq!(code, 1);
        assert_eq!(err, "Error: Missing '/' separator\n");
    }

    #[test]
    fn test_cli_interface() {
        let (code, out, _) = run_args(&["--interface", "--no-color"]);
        assert_eq!(code, 0);
        assert_eq!(out, "Address: 10.4.7.9\nPrefix: /20\n");

        let (_, out, _) = run_args(&["-i", "--json"]);
        assert_eq!(out, "{\"address\":\"10.4.7.9\",\"prefix\":\"/20\"}\n");
    }

    #[test]
    fn test_cli_masks() {
        let (code, out, _) = run_args(&["--masks"]);
        assert_eq!(code, 0);
        assert_eq!(out.lines().count(), 33);
    }

    #[test]
    fn test_cli_help_without_address() {
        let (code, out, _) = run_args(&[]);
        assert_eq!(code, 0);
        assert!(out.contains("IPv4 subnet calculator"));
    }

    #[test]
    fn test_cli_verbose_count() {
        let cli = Cli::try_parse_from(["lancalc", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
