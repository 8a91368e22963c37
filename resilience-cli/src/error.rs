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

//! Module containing the CLI binary's error type

use resilience_core::graph::AsId;
use thiserror::Error;

/// Error type for the `resilience-cli` binary
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading an input file failed
    #[error("could not read {path}: {source}")]
    Io {
        /// Path that could not be read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// A JSON input or output could not be (de)serialised
    #[error("JSON error in {path}: {source}")]
    Json {
        /// Path of the offending JSON document
        path: String,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },
    /// A client list line did not start with a valid AS identifier
    #[error("malformed client list line {line}: {content}")]
    MalformedClientLine {
        /// 1-indexed line number
        line: usize,
        /// Raw line content
        content: String,
    },
    /// A client list line carried a timestamp in a format other than
    /// `YYYY-MM-DD HH:MM:SS`
    #[error("malformed timestamp on client list line {line}: {content}")]
    MalformedTimestamp {
        /// 1-indexed line number
        line: usize,
        /// Raw line content
        content: String,
    },
    /// A guard list line did not parse as an AS identifier
    #[error("malformed guard list line {line}: {content}")]
    MalformedGuardLine {
        /// 1-indexed line number
        line: usize,
        /// Raw line content
        content: String,
    },
    /// The topology could not be parsed
    #[error("topology parse error: {0}")]
    Topology(#[from] resilience_core::graph::TopologyParseError),
    /// The core engine reported an error for one client; propagated only
    /// when there were no usable clients left at all
    #[error(transparent)]
    Core(#[from] resilience_core::Error),
    /// The risk subcommand's `--sample_size` was outside `(0, 1]`
    #[error("--sample_size must be in (0, 1], got {0}")]
    InvalidSampleSize(f64),
    /// No requested client AS was found in the topology
    #[error("no requested client AS was found in the topology")]
    NoUsableClients,
    /// A guard referenced by the resilience/path output was never scored
    #[error("guard {0:?} has no recorded resilience for client {1:?}")]
    MissingGuardScore(AsId, AsId),
}
