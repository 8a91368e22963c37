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

//! # Topology
//!
//! Loads CAIDA-style AS relationship records into an adjacency structure
//! keyed by [`AsId`], and exposes the customer/peer/provider sets each AS
//! needs for the valley-free BFS passes.

use super::types::{AsId, RelationshipKind};
use log::{debug, warn};
use std::collections::HashMap;
use std::collections::HashSet;
use thiserror::Error;

/// Error produced while parsing a topology file
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyParseError {
    /// A record did not have the shape `ASN1|ASN2|REL[|...]`
    #[error("Malformed topology record on line {line}: {content}")]
    MalformedRecord {
        /// 1-indexed line number
        line: usize,
        /// Raw line content
        content: String,
    },
    /// `REL` was present but not an integer, or not in `{-1, 0}`
    #[error("Invalid relationship code on line {line}: {content}")]
    InvalidRelationship {
        /// 1-indexed line number
        line: usize,
        /// Raw line content
        content: String,
    },
}

/// One AS's adjacency record: the customers, peers, and providers reachable
/// directly from it, per the relationship triple in spec §3.
#[derive(Debug, Default, Clone)]
pub struct AsRecord {
    /// ASes of which this AS is a provider
    pub customers: HashSet<AsId>,
    /// Peer ASes of this AS
    pub peers: HashSet<AsId>,
    /// ASes of which this AS is a customer
    pub providers: HashSet<AsId>,
}

/// The topology graph: a read-only mapping from AS to its relationship sets,
/// built once and shared across all per-root BFS computations.
#[derive(Debug, Default, Clone)]
pub struct Topology {
    nodes: HashMap<AsId, AsRecord>,
}

impl Topology {
    /// Build an empty topology
    pub fn new() -> Self {
        Self { nodes: HashMap::new() }
    }

    /// Parse a topology from a line-oriented `ASN1|ASN2|REL[|extra...]` text
    /// stream. `#`-prefixed lines and blank lines are ignored. Duplicate
    /// edges are tolerated (idempotent); self-loops are ignored.
    pub fn parse(input: &str) -> Result<Self, TopologyParseError> {
        let mut topo = Self::new();
        let mut duplicates = 0usize;

        for (idx, raw_line) in input.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split('|');
            let asn1 = fields.next().ok_or_else(|| TopologyParseError::MalformedRecord {
                line: line_no,
                content: line.to_string(),
            })?;
            let asn2 = fields.next().ok_or_else(|| TopologyParseError::MalformedRecord {
                line: line_no,
                content: line.to_string(),
            })?;
            let rel = fields.next().ok_or_else(|| TopologyParseError::MalformedRecord {
                line: line_no,
                content: line.to_string(),
            })?;

            let asn1: AsId = asn1.parse().map_err(|_| TopologyParseError::MalformedRecord {
                line: line_no,
                content: line.to_string(),
            })?;
            let asn2: AsId = asn2.parse().map_err(|_| TopologyParseError::MalformedRecord {
                line: line_no,
                content: line.to_string(),
            })?;
            let rel: i64 = rel.trim().parse().map_err(|_| TopologyParseError::InvalidRelationship {
                line: line_no,
                content: line.to_string(),
            })?;
            let kind = match rel {
                -1 => RelationshipKind::ProviderToCustomer,
                0 => RelationshipKind::PeerToPeer,
                _ => {
                    return Err(TopologyParseError::InvalidRelationship {
                        line: line_no,
                        content: line.to_string(),
                    })
                }
            };

            if asn1 == asn2 {
                // self-loops are ignored
                continue;
            }

            if !topo.insert_edge(asn1, asn2, kind) {
                duplicates += 1;
            }
        }

        if duplicates > 0 {
            debug!("topology load tolerated {} duplicate edges", duplicates);
        }

        Ok(topo)
    }

    /// Inserts both directions of an edge. Returns `false` if the edge (in
    /// either direction) already existed, so callers can count duplicates.
    fn insert_edge(&mut self, asn1: AsId, asn2: AsId, kind: RelationshipKind) -> bool {
        match kind {
            RelationshipKind::ProviderToCustomer => {
                let a = self.nodes.entry(asn1).or_default().customers.insert(asn2);
                let b = self.nodes.entry(asn2).or_default().providers.insert(asn1);
                a || b
            }
            RelationshipKind::PeerToPeer => {
                let a = self.nodes.entry(asn1).or_default().peers.insert(asn2);
                let b = self.nodes.entry(asn2).or_default().peers.insert(asn1);
                a || b
            }
        }
    }

    /// Number of distinct AS identifiers observed — the `TOTAL_AS` sentinel
    /// used throughout the BFS and resilience scoring.
    pub fn total_as(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the given AS appears in the topology
    pub fn contains(&self, asn: AsId) -> bool {
        self.nodes.contains_key(&asn)
    }

    /// Returns the adjacency record for an AS, if known
    pub fn record(&self, asn: AsId) -> Option<&AsRecord> {
        self.nodes.get(&asn)
    }

    /// Iterate over all AS identifiers present in the topology
    pub fn ases(&self) -> impl Iterator<Item = AsId> + '_ {
        self.nodes.keys().copied()
    }

    /// Filters a requested AS list down to the ones present in the
    /// topology, logging a warning for each one skipped.
    pub fn filter_known<'a>(
        &self,
        requested: impl IntoIterator<Item = &'a AsId>,
        role: &str,
    ) -> Vec<AsId> {
        requested
            .into_iter()
            .filter_map(|asn| {
                if self.contains(*asn) {
                    Some(*asn)
                } else {
                    warn!("{} AS {} not found in topology, skipping", role, asn);
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_basic_topology() {
        let topo = Topology::parse("1|2|-1\n2|3|0\n# a comment\n\n").unwrap();
        assert_eq!(topo.total_as(), 3);
        assert!(topo.record(AsId(1)).unwrap().customers.contains(&AsId(2)));
        assert!(topo.record(AsId(2)).unwrap().providers.contains(&AsId(1)));
        assert!(topo.record(AsId(2)).unwrap().peers.contains(&AsId(3)));
        assert!(topo.record(AsId(3)).unwrap().peers.contains(&AsId(2)));
    }

    #[test]
    fn mirrors_edges_symmetrically() {
        let topo = Topology::parse("10|20|-1\n20|30|0\n").unwrap();
        for asn in topo.ases() {
            let rec = topo.record(asn).unwrap();
            for c in &rec.customers {
                assert!(topo.record(*c).unwrap().providers.contains(&asn));
            }
            for p in &rec.providers {
                assert!(topo.record(*p).unwrap().customers.contains(&asn));
            }
            for peer in &rec.peers {
                assert!(topo.record(*peer).unwrap().peers.contains(&asn));
            }
        }
    }

    #[test]
    fn ignores_self_loops() {
        let topo = Topology::parse("5|5|-1\n5|6|0\n").unwrap();
        assert_eq!(topo.total_as(), 2);
        assert!(topo.record(AsId(5)).unwrap().customers.is_empty());
    }

    #[test]
    fn tolerates_duplicate_edges() {
        let topo = Topology::parse("1|2|-1\n1|2|-1\n1|2|-1|extra\n").unwrap();
        assert_eq!(topo.record(AsId(1)).unwrap().customers.len(), 1);
    }

    #[test]
    fn rejects_bad_relationship_code() {
        let err = Topology::parse("1|2|7\n").unwrap_err();
        assert_eq!(
            err,
            TopologyParseError::InvalidRelationship { line: 1, content: "1|2|7".to_string() }
        );
    }

    #[test]
    fn rejects_malformed_record() {
        let err = Topology::parse("1|2\n").unwrap_err();
        assert_eq!(
            err,
            TopologyParseError::MalformedRecord { line: 1, content: "1|2".to_string() }
        );
    }
}
