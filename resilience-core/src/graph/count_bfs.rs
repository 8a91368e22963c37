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

//! # Valley-free counting BFS
//!
//! Labels every AS reachable from a root under the Gao-Rexford valley-free
//! model with `(hop_count, equal_path_count, uphill_hops)`, without
//! materialising any actual paths. This is the backbone of the resilience
//! scorer.

use super::topology::Topology;
use super::types::AsId;
use std::collections::{HashMap, VecDeque};

/// Label attached to a node reached by the counting BFS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountLabel {
    /// Downhill (P2C) and peer hop count. Peer hops are weighted by
    /// `TOTAL_AS` so that a single peer hop always dominates any number of
    /// downhill hops within the reachable component.
    pub hop_count: u64,
    /// Number of distinct shortest valley-free paths from the root to this
    /// node.
    pub equal_path_count: u64,
    /// Number of customer-to-provider (uphill) steps from the root.
    pub uphill_hops: u32,
}

/// Runs the valley-free counting BFS from `root` over `topology`.
///
/// Implements the three-phase discipline of the valley-free model: an
/// uphill (C2P) phase explored level by level, with a peer (P2P) step and a
/// downhill (P2C) cascade run to completion for each uphill level before the
/// next uphill level begins. A node is labelled at most once; later arrivals
/// at the same `hop_count` only add to `equal_path_count`.
pub fn count_bfs(topology: &Topology, root: AsId) -> HashMap<AsId, CountLabel> {
    let total_as = topology.total_as() as u64;
    let mut labels: HashMap<AsId, CountLabel> = HashMap::new();
    labels.insert(root, CountLabel { hop_count: 0, equal_path_count: 1, uphill_hops: 0 });

    let mut level: Vec<AsId> = vec![root];
    let mut uphill_hops = 0u32;

    loop {
        downhill_and_peer_cascade(topology, &level, total_as, &mut labels);

        let mut next_level = Vec::new();
        for &node in &level {
            let (hop_count, equal_path_count) = {
                let l = &labels[&node];
                (l.hop_count, l.equal_path_count)
            };
            let providers = match topology.record(node) {
                Some(rec) => &rec.providers,
                None => continue,
            };
            for &provider in providers {
                match labels.get_mut(&provider) {
                    None => {
                        labels.insert(
                            provider,
                            CountLabel {
                                hop_count: 0,
                                equal_path_count,
                                uphill_hops: uphill_hops + 1,
                            },
                        );
                        next_level.push(provider);
                    }
                    Some(existing) if existing.uphill_hops == uphill_hops + 1 => {
                        existing.equal_path_count += equal_path_count;
                    }
                    _ => {}
                }
            }
        }

        if next_level.is_empty() {
            break;
        }
        level = next_level;
        uphill_hops += 1;
    }

    labels
}

/// For every node in `uphill_batch` (all sharing the same `uphill_hops`):
/// takes at most one peer hop, then runs a downhill (P2C) BFS cascade from
/// both the uphill batch itself and any freshly peer-hopped nodes. This is
/// run to completion before the caller advances to the next uphill level.
fn downhill_and_peer_cascade(
    topology: &Topology,
    uphill_batch: &[AsId],
    total_as: u64,
    labels: &mut HashMap<AsId, CountLabel>,
) {
    let mut peer_frontier = Vec::new();
    for &node in uphill_batch {
        let (hop_count, equal_path_count, uphill_hops) = {
            let l = &labels[&node];
            (l.hop_count, l.equal_path_count, l.uphill_hops)
        };
        let peers = match topology.record(node) {
            Some(rec) => &rec.peers,
            None => continue,
        };
        for &peer in peers {
            let target_hop = hop_count + total_as;
            match labels.get_mut(&peer) {
                None => {
                    labels.insert(
                        peer,
                        CountLabel { hop_count: target_hop, equal_path_count, uphill_hops },
                    );
                    peer_frontier.push(peer);
                }
                Some(existing) if existing.hop_count == target_hop => {
                    existing.equal_path_count += equal_path_count;
                }
                _ => {}
            }
        }
    }

    let mut queue: VecDeque<AsId> = VecDeque::with_capacity(uphill_batch.len() + peer_frontier.len());
    queue.extend(uphill_batch.iter().copied());
    queue.extend(peer_frontier.iter().copied());

    while let Some(current) = queue.pop_front() {
        let (hop_count, equal_path_count, uphill_hops) = {
            let l = &labels[&current];
            (l.hop_count, l.equal_path_count, l.uphill_hops)
        };
        let customers = match topology.record(current) {
            Some(rec) => &rec.customers,
            None => continue,
        };
        for &customer in customers {
            let target_hop = hop_count + 1;
            match labels.get_mut(&customer) {
                None => {
                    labels.insert(
                        customer,
                        CountLabel { hop_count: target_hop, equal_path_count, uphill_hops },
                    );
                    queue.push_back(customer);
                }
                Some(existing) if existing.hop_count == target_hop => {
                    existing.equal_path_count += equal_path_count;
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn s1_triangle() {
        // A|B|-1, B|C|-1, A|C|0
        let topo = Topology::parse("1|2|-1\n2|3|-1\n1|3|0\n").unwrap();
        let labels = count_bfs(&topo, AsId(1));
        assert_eq!(labels[&AsId(1)], CountLabel { hop_count: 0, equal_path_count: 1, uphill_hops: 0 });
        assert_eq!(labels[&AsId(2)], CountLabel { hop_count: 1, equal_path_count: 1, uphill_hops: 0 });
        // the direct downhill path (A->B->C, hop_count 2) beats the peer
        // path (A--C, hop_count TOTAL_AS), so the peer edge never improves
        // on C's label.
        assert_eq!(labels[&AsId(3)], CountLabel { hop_count: 2, equal_path_count: 1, uphill_hops: 0 });
    }

    #[test]
    fn s2_diamond() {
        // R|A|-1, R|B|-1, A|X|-1, B|X|-1
        let topo = Topology::parse("1|2|-1\n1|3|-1\n2|4|-1\n3|4|-1\n").unwrap();
        let labels = count_bfs(&topo, AsId(1));
        assert_eq!(labels[&AsId(4)], CountLabel { hop_count: 2, equal_path_count: 2, uphill_hops: 0 });
    }

    #[test]
    fn s3_uphill_then_peer() {
        // P|R|-1 (P provider of R), P|Q|0, Q|G|-1
        let topo = Topology::parse("2|1|-1\n2|3|0\n3|4|-1\n").unwrap();
        let labels = count_bfs(&topo, AsId(1));
        let total_as = topo.total_as() as u64;
        assert_eq!(labels[&AsId(2)].uphill_hops, 1);
        assert_eq!(labels[&AsId(2)].hop_count, 0);
        assert_eq!(labels[&AsId(3)].hop_count, total_as);
        assert_eq!(labels[&AsId(4)].hop_count, total_as + 1);
    }

    #[test]
    fn s4_valley_violation_rejected() {
        // A|B|-1, B|C|-1, C|D|-1, D|E|-1 (E provider of D)
        let topo = Topology::parse("1|2|-1\n2|3|-1\n3|4|-1\n5|4|-1\n").unwrap();
        let labels = count_bfs(&topo, AsId(1));
        assert!(!labels.contains_key(&AsId(5)));
    }

    #[test]
    fn monotonicity_equal_path_count_only_grows() {
        let topo = Topology::parse("1|2|-1\n1|3|-1\n2|4|-1\n3|4|-1\n4|5|-1\n").unwrap();
        let labels = count_bfs(&topo, AsId(1));
        // X has two shortest paths, so its downstream customer inherits
        // that multiplicity rather than re-deriving it.
        assert_eq!(labels[&AsId(4)].equal_path_count, 2);
        assert_eq!(labels[&AsId(5)].equal_path_count, 2);
    }
}
