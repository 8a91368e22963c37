// Snowcap: Synthesizing Network-Wide Configuration Updates
// Copyright (C) 2021  Tibor Schneider
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! Binary exposing the resilience engine's three analytical products over
//! the CLI surface named in the external interfaces section: `resilience`,
//! `path`, and `risk`.

mod batch;
mod commands;
mod error;
mod io;

use clap::{Args, Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

/// Arguments shared by the `resilience` and `path` subcommands.
#[derive(Args, Debug)]
pub(crate) struct CommonArgs {
    /// CAIDA-style AS relationship file: `ASN1|ASN2|REL[|...]` per line
    #[arg(long)]
    pub(crate) topology_file: PathBuf,
    /// Client list file: one AS per line, optional trailing timestamp
    #[arg(long)]
    pub(crate) client_file: PathBuf,
    /// Guard list file: one AS per line
    #[arg(long, visible_alias = "guard_file")]
    pub(crate) guard_as_file: PathBuf,
}

#[derive(Parser, Debug)]
#[command(name = "resilience-cli", author = "Tibor Schneider")]
struct CommandLineArguments {
    /// Analytical product to compute
    #[command(subcommand)]
    cmd: MainCommand,
}

#[derive(Subcommand, Debug)]
enum MainCommand {
    /// Compute per-(client, guard) resilience scores (C1 -> C2 -> C4)
    Resilience {
        #[command(flatten)]
        common: CommonArgs,
        /// Output path for the Resilience JSON document
        #[arg(long)]
        json: PathBuf,
        /// Worker thread count, defaults to the number of CPUs
        #[arg(long)]
        threads: Option<usize>,
    },
    /// Compute predicted forward/reverse AS paths (C1 -> C3 -> C5)
    Path {
        #[command(flatten)]
        common: CommonArgs,
        /// Output path for the Predicted path JSON document
        #[arg(long)]
        json: PathBuf,
        /// Worker thread count, defaults to the number of CPUs
        #[arg(long)]
        threads: Option<usize>,
        /// Disable lexicographic tiebreak; keep first-discovered path
        #[arg(long)]
        notiebreak: bool,
    },
    /// Aggregate risk downstream of an existing resilience output (C6 -> C7)
    Risk {
        /// Client list file: defines output order
        #[arg(long)]
        client_file: PathBuf,
        /// Resilience JSON document produced by the `resilience` subcommand
        #[arg(long)]
        resil_file: PathBuf,
        /// Guard list file: one AS per line
        #[arg(long, visible_alias = "guard_file")]
        guard_as_file: PathBuf,
        /// Guard bandwidth JSON map: `{ guard_AS: weight }`
        #[arg(long)]
        bw_file: Option<PathBuf>,
        /// Hijack map JSON: `{ client_AS: { guard_AS: [hijacker_AS, ...] } }`
        #[arg(long)]
        hijack_file: PathBuf,
        /// Fraction of guards eligible for selection, in (0, 1]
        #[arg(long, default_value_t = 1.0)]
        sample_size: f64,
        /// Resilience/bandwidth mixing factor in [0, 1]
        #[arg(long, default_value_t = 0.5)]
        alpha: f64,
        /// Total number of hijacker ASes in the threat model, a fixed
        /// configuration scalar independent of the loaded hijack map
        #[arg(long, default_value_t = 50)]
        num_hijack_total: usize,
        /// Output path for the Aggregated risk text document
        #[arg(long)]
        json: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();
    let args = CommandLineArguments::parse();

    match args.cmd {
        MainCommand::Resilience { common, json, threads } => {
            commands::run_resilience(common, json, threads)?
        }
        MainCommand::Path { common, json, threads, notiebreak } => {
            commands::run_path(common, json, threads, notiebreak)?
        }
        MainCommand::Risk {
            client_file,
            resil_file,
            guard_as_file,
            bw_file,
            hijack_file,
            sample_size,
            alpha,
            num_hijack_total,
            json,
        } => commands::run_risk(
            client_file,
            resil_file,
            guard_as_file,
            bw_file,
            hijack_file,
            sample_size,
            alpha,
            num_hijack_total,
            json,
        )?,
    }

    Ok(())
}
