//! `hex` and `dump` commands

use crate::input::{InputArgs, RangeArgs};
use crate::report::Report;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use common::WireConfig;
use serde_json::json;
use std::path::PathBuf;
use tracing::info;
use wire_codec::bytes::clamp_range;
use wire_codec::hex::{bytes_to_hex, bytes_to_hex_with_spaces, dump, encode_upper, hex_to_bytes};
use wire_codec::WireError;

#[derive(Subcommand, Debug)]
pub enum HexCommands {
    /// Encode bytes as uppercase hex
    #[command(about = "Render input bytes as uppercase hex")]
    Encode {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        range: RangeArgs,

        /// Separate bytes with a space
        #[arg(long)]
        spaces: bool,
    },

    /// Decode a hex string
    #[command(about = "Parse a hex string and show the bytes as a memory dump")]
    Decode {
        /// Hex digits, upper or lower case
        hex: String,

        /// First character to decode
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Number of characters (default: to the end)
        #[arg(long)]
        length: Option<usize>,

        /// Write the raw bytes to a file instead
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// Arguments of the `dump` command
#[derive(Args, Debug)]
pub struct DumpArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub range: RangeArgs,
}

pub fn handle_hex(cmd: &HexCommands, config: &WireConfig) -> Result<Report> {
    match cmd {
        HexCommands::Encode {
            input,
            range,
            spaces,
        } => {
            let data = input.read()?;
            let count = clamp_range(data.len(), range.offset, range.length()).len();
            let text = if *spaces {
                bytes_to_hex_with_spaces(&data, range.offset, range.length())
            } else {
                bytes_to_hex(&data, range.offset, range.length())
            };
            Ok(Report::new(text.clone(), json!({ "bytes": count, "hex": text })))
        },
        HexCommands::Decode {
            hex,
            offset,
            length,
            out,
        } => {
            let bytes = hex_to_bytes(hex, *offset, length.unwrap_or(usize::MAX))?;

            if let Some(path) = out {
                std::fs::write(path, &bytes)
                    .map_err(WireError::from)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("Wrote {} bytes to {}", bytes.len(), path.display());
                return Ok(Report::new(
                    format!("Wrote {} bytes to {}", bytes.len(), path.display()),
                    json!({ "bytes": bytes.len(), "path": path.display().to_string() }),
                ));
            }

            Ok(dump_report(
                &bytes,
                &RangeArgs::default(),
                config.dump.show_header,
            ))
        },
    }
}

pub fn handle_dump(args: &DumpArgs, config: &WireConfig) -> Result<Report> {
    let data = args.input.read()?;
    Ok(dump_report(&data, &args.range, config.dump.show_header))
}

fn dump_report(data: &[u8], range: &RangeArgs, show_header: bool) -> Report {
    let bytes = &data[clamp_range(data.len(), range.offset, range.length())];
    let text = dump(data, range.offset, range.length());
    let json = json!({
        "bytes": bytes.len(),
        "hex": encode_upper(bytes),
        "lines": text.lines().collect::<Vec<_>>(),
    });

    let report = Report::new(text, json);
    if show_header {
        report.with_header(format!("{} bytes", bytes.len()))
    } else {
        report
    }
}
