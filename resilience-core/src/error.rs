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

//! Module containing all error types

use crate::graph::AsId;
use thiserror::Error;

/// Main error type for the resilience engine
#[derive(Debug, Error)]
pub enum Error {
    /// A relationship record could not be parsed
    #[error("Malformed topology record on line {line}: {content}")]
    TopologyParse {
        /// Line number (1-indexed) in the topology file
        line: usize,
        /// Raw content of the offending line
        content: String,
    },
    /// A client AS identifier does not appear in the topology
    #[error("Client AS {0:?} is not known in the topology")]
    UnknownClientAs(AsId),
    /// A guard AS identifier does not appear in the topology
    #[error("Guard AS {0:?} is not known in the topology")]
    UnknownGuardAs(AsId),
    /// A client's entire resilience vector sums to zero
    #[error("Resilience vector for client {0:?} is entirely zero (disconnected)")]
    EmptyResilience(AsId),
    /// Two shortest paths to the same node have different lengths
    #[error("Path length invariant violated at AS {0:?}: lengths {1} and {2}")]
    PathLengthInvariant(AsId, usize, usize),
    /// The probability redistributor was invoked on an all-zero input
    #[error("Probability redistributor received an all-zero weight vector")]
    EmptyDistribution,
    /// At least one (client, guard) pair has no predicted path
    #[error("No path between client {0:?} and guard {1:?}")]
    IncompletePaths(AsId, AsId),
    /// The sole client in a batch could not be resolved against the topology
    #[error("The only requested client AS is unknown to the topology: {0:?}")]
    NoUsableClients(AsId),
}
