//! `checksum` command

use crate::input::{parse_number, stream_file, InputArgs};
use crate::report::Report;
use anyhow::Result;
use clap::Args;
use common::WireConfig;
use serde_json::json;
use tracing::debug;
use wire_codec::{Algorithm, Checksum};

#[derive(Args, Debug)]
pub struct ChecksumArgs {
    /// bcc, sum, crc16 or crc16-shift (default: from configuration)
    pub algorithm: Option<String>,

    #[command(flatten)]
    pub input: InputArgs,

    /// Initial register value, decimal or 0x hex (default: from configuration)
    #[arg(long)]
    pub initial: Option<String>,
}

pub fn handle_checksum(args: &ChecksumArgs, config: &WireConfig) -> Result<Report> {
    let name = args
        .algorithm
        .as_deref()
        .unwrap_or(&config.checksum.algorithm);
    let algorithm: Algorithm = name.parse()?;

    let initial = match &args.initial {
        Some(text) => parse_number("initial", text, u64::from(algorithm.max_initial()))? as u32,
        None => config.checksum.initial,
    };
    let mut acc = algorithm.accumulator(initial)?;

    let length = match &args.input.file {
        Some(path) => stream_file(path, &mut acc)?,
        None => {
            let data = args.input.read()?;
            acc.update(&data);
            data.len() as u64
        },
    };

    let value = acc.finalize();
    debug!("{} over {} bytes = {:#X}", algorithm, length, value);

    Ok(Report::new(
        format!(
            "{}: 0x{:0width$X} ({})",
            algorithm,
            value,
            value,
            width = algorithm.hex_width()
        ),
        json!({
            "algorithm": algorithm.name(),
            "initial": initial,
            "bytes": length,
            "value": value,
        }),
    ))
}
