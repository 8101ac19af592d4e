//! wirectl - byte packing, hex and checksum toolkit
//!
//! Command line front-end for the wirekit codec: build and inspect protocol
//! frames, render memory dumps and compute BCC/additive/CRC-16 checksums.

mod checksum;
mod codec;
mod config;
mod input;
mod ints;
mod report;

use crate::checksum::ChecksumArgs;
use crate::codec::{DumpArgs, HexCommands};
use crate::config::ConfigCommands;
use crate::ints::IntWidth;
use crate::report::{error_info, Report};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use common::WireConfig;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "wirectl")]
#[command(about = "wirectl - byte packing, hex and checksum toolkit")]
#[command(long_about = "wirectl - byte packing, hex and checksum toolkit

Commands:
  hex         Encode bytes as hex, decode hex into a memory dump
  dump        Memory dump of text, file or hex input
  checksum    BCC, additive or CRC-16 checksum
  pack        Big-endian bytes of an integer
  unpack      Read a big-endian integer from hex
  flip        Swap the high and low halves of an integer
  config      Show or scaffold configuration

Examples:
  wirectl hex encode --text 'AT+CSQ'            # 41542B435351
  wirectl checksum crc16 --hex 010300000001     # crc16: 0x1184 (4484)
  wirectl checksum bcc --file frame.bin
  wirectl dump --file capture.bin --offset 16 --length 64
  wirectl pack u16 0x1234                       # 1234
  wirectl flip u32 0x12345678                   # 0x12345678 -> 0x56781234

Configuration is read from wirekit.toml / wirekit.yaml, the file given with
--config, then WIREKIT_* environment variables (WIREKIT_CHECKSUM__ALGORITHM=bcc).")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Configuration file (.toml, .yaml, .yml or .json)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Machine-readable JSON output
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Hex encoding and decoding
    #[command(subcommand)]
    Hex(HexCommands),

    /// Memory dump of the input bytes
    Dump(DumpArgs),

    /// Checksum of the input bytes
    Checksum(ChecksumArgs),

    /// Big-endian bytes of an integer
    Pack {
        width: IntWidth,
        /// Decimal or 0x hex
        value: String,
    },

    /// Read a big-endian integer out of hex
    Unpack {
        width: IntWidth,
        hex: String,
        /// Byte offset of the integer
        #[arg(long, default_value_t = 0)]
        offset: usize,
    },

    /// Swap the high and low halves of an integer
    Flip {
        width: IntWidth,
        /// Decimal or 0x hex
        value: String,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() {
    let cli = Cli::parse();

    // Configure colored output
    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(&cli) {
        Ok(report) => print_report(&report, cli.json),
        Err(err) => {
            let info = error_info(&err);
            if cli.json {
                println!("{}", info.to_json());
            } else {
                eprintln!("{} {:#}", "Error:".red().bold(), err);
            }
            std::process::exit(i32::from(info.code));
        },
    }
}

fn run(cli: &Cli) -> Result<Report> {
    let config = WireConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging(cli, &config)?;
    debug!("Running {:?}", cli.command);

    dispatch(&cli.command, &config)
}

fn init_logging(cli: &Cli, config: &WireConfig) -> Result<()> {
    let mut log_config = config.logging.to_log_config();
    if cli.verbose {
        log_config.level = "debug".to_string();
    }
    if cli.no_color {
        log_config.ansi = false;
    }

    common::logging::init_with_config(&log_config).context("Failed to initialize logging")
}

fn dispatch(command: &Commands, config: &WireConfig) -> Result<Report> {
    match command {
        Commands::Hex(cmd) => codec::handle_hex(cmd, config),
        Commands::Dump(args) => codec::handle_dump(args, config),
        Commands::Checksum(args) => checksum::handle_checksum(args, config),
        Commands::Pack { width, value } => ints::pack(*width, value),
        Commands::Unpack { width, hex, offset } => ints::unpack(*width, hex, *offset),
        Commands::Flip { width, value } => ints::flip(*width, value),
        Commands::Config(cmd) => config::handle_command(cmd, config),
    }
}

fn print_report(report: &Report, json: bool) {
    if json {
        match serde_json::to_string_pretty(&report.json) {
            Ok(text) => println!("{}", text),
            Err(_) => println!("{}", report.json),
        }
        return;
    }

    if let Some(header) = &report.header {
        println!("{}", header.bright_cyan());
    }
    if !report.body.is_empty() {
        println!("{}", report.body);
    }
}
