use std::io::{Read, Write};

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use hydrosa_core::{SobolEstimator, pack, unpack, unpack_with_fill};
use serde::Serialize;

use crate::request::{PackRequest, SobolRequest, UnpackRequest};

#[derive(Parser, Debug)]
#[command(name = "hydrosa")]
#[command(about = "Sobol sensitivity indices and masked array packing over JSON")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Compute Sobol indices for a request read from stdin
    Sobol {
        /// Only compute first-order indices
        #[arg(long, conflicts_with = "total_order_only")]
        first_order_only: bool,

        /// Only compute total-order indices
        #[arg(long)]
        total_order_only: bool,
    },
    /// Pack an array under a mask
    Pack,
    /// Scatter a packed vector back under a mask
    Unpack,
}

/// Read the request for `command` from `reader` and write the JSON result to `writer`
pub fn run<R: Read, W: Write>(command: &Command, reader: R, mut writer: W) -> color_eyre::Result<()> {
    match command {
        Command::Sobol {
            first_order_only,
            total_order_only,
        } => {
            let request: SobolRequest =
                serde_json::from_reader(reader).wrap_err("failed to parse Sobol request")?;
            let request = request.with_overrides(*first_order_only, *total_order_only);
            tracing::info!(options = ?request.options, "computing Sobol indices");

            let indices = SobolEstimator::new(request.options)
                .compute(&request.input)
                .wrap_err("Sobol estimation failed")?;
            write_json(&mut writer, &indices)
        }
        Command::Pack => {
            let request: PackRequest =
                serde_json::from_reader(reader).wrap_err("failed to parse pack request")?;
            tracing::info!(array = ?request.array.shape(), mask = ?request.mask.shape(), "packing");

            let packed = pack(&request.array, &request.mask).wrap_err("pack failed")?;
            write_json(&mut writer, &packed)
        }
        Command::Unpack => {
            let request: UnpackRequest =
                serde_json::from_reader(reader).wrap_err("failed to parse unpack request")?;
            tracing::info!(vector = ?request.vector.shape(), mask = ?request.mask.shape(), "unpacking");

            let unpacked = match &request.field {
                Some(field) => unpack(&request.vector, &request.mask, field),
                None => unpack_with_fill(&request.vector, &request.mask, request.fill),
            }
            .wrap_err("unpack failed")?;
            write_json(&mut writer, &unpacked)
        }
    }
}

fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T) -> color_eyre::Result<()> {
    serde_json::to_writer(&mut *writer, value).wrap_err("failed to write result")?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
