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

#![deny(missing_docs)]

//! # Resilience Core: AS-level valley-free path inference and Tor guard scoring
//!
//! This library computes, over the global inter-domain routing graph of
//! Autonomous Systems, the analytical products used to evaluate Tor
//! guard-relay selection strategies against network-level adversaries:
//! per-(client, guard) resilience scores, predicted AS-level paths, capped
//! guard-selection probability distributions, and aggregate client risk.
//!
//! This crate holds no I/O and no CLI surface: it consumes already-parsed
//! in-memory data (a [`graph::Topology`], AS identifiers, weight maps) and
//! returns plain values. The `resilience-cli` and `resilience-probability`
//! binaries own file formats, argument parsing, and batch orchestration.
//!
//! ## Structure
//!
//! - **[`graph`]**: the topology loader ([`graph::Topology`]), the counting
//!   BFS ([`graph::count_bfs`]) and the path BFS ([`graph::path_bfs`]) —
//!   both implementing the same three-phase valley-free discipline.
//! - **[`resilience`]**: converts a counting-BFS label map into per-guard
//!   resilience scores for one client.
//! - **[`path_select`]**: breaks ties between equally-short predicted paths.
//! - **[`redistribute`]**: turns a resilience (or mixed) weight vector into a
//!   capped guard-selection probability distribution.
//! - **[`risk`]**: mixes resilience with bandwidth and accumulates hijacker
//!   exposure across an ordered client list.
//! - **[`client`]**: orders a parsed client list by optional timestamp.
//! - **[`error`]**: the crate's [`Error`] type.

pub mod client;
pub mod error;
pub mod graph;
pub mod path_select;
pub mod redistribute;
pub mod resilience;
pub mod risk;

pub use error::Error;
