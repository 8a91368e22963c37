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

//! # Valley-free path BFS
//!
//! Runs the same three-phase valley-free discipline as [`super::count_bfs`],
//! but records parent pointers instead of a path count, so that actual
//! shortest valley-free AS paths can be materialised on demand.

use super::topology::Topology;
use super::types::AsId;
use crate::error::Error;
use std::collections::{HashMap, VecDeque};

/// How a node was first reached by the path BFS. Once a path leaves the
/// uphill phase it may never re-enter it; this is enforced structurally by
/// the BFS's phase ordering rather than checked explicitly per edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrivalKind {
    /// The root itself.
    Root,
    /// Reached via a customer-to-provider (uphill) step.
    Uphill,
    /// Reached via a single peer-to-peer step.
    Peer,
    /// Reached via a provider-to-customer (downhill) step.
    Downhill,
}

/// One node's position in the parent-pointer DAG built by the path BFS.
#[derive(Debug, Clone)]
pub struct PathNode {
    /// Length of every shortest valley-free path from the root to this node.
    pub hop_count: u64,
    /// Number of uphill steps taken to reach this node.
    pub uphill_hops: u32,
    /// How this node was first reached.
    pub arrival: ArrivalKind,
    /// Every predecessor that lies on some shortest valley-free path to this
    /// node. More than one entry means multiple equal-length paths exist.
    pub parents: Vec<AsId>,
}

/// Runs the valley-free path BFS from `root`, returning a parent-pointer DAG.
/// Use [`shortest_paths`] to materialise actual path sequences from it.
pub fn path_bfs(topology: &Topology, root: AsId) -> HashMap<AsId, PathNode> {
    let total_as = topology.total_as() as u64;
    let mut nodes: HashMap<AsId, PathNode> = HashMap::new();
    nodes.insert(
        root,
        PathNode { hop_count: 0, uphill_hops: 0, arrival: ArrivalKind::Root, parents: Vec::new() },
    );

    let mut level: Vec<AsId> = vec![root];
    let mut uphill_hops = 0u32;

    loop {
        downhill_and_peer_cascade(topology, &level, total_as, &mut nodes);

        let mut next_level = Vec::new();
        for &node in &level {
            let hop_count = nodes[&node].hop_count;
            let providers = match topology.record(node) {
                Some(rec) => &rec.providers,
                None => continue,
            };
            for &provider in providers {
                match nodes.get_mut(&provider) {
                    None => {
                        nodes.insert(
                            provider,
                            PathNode {
                                hop_count: 0,
                                uphill_hops: uphill_hops + 1,
                                arrival: ArrivalKind::Uphill,
                                parents: vec![node],
                            },
                        );
                        next_level.push(provider);
                    }
                    Some(existing)
                        if existing.uphill_hops == uphill_hops + 1
                            && existing.hop_count == hop_count =>
                    {
                        existing.parents.push(node);
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

    nodes
}

fn downhill_and_peer_cascade(
    topology: &Topology,
    uphill_batch: &[AsId],
    total_as: u64,
    nodes: &mut HashMap<AsId, PathNode>,
) {
    let mut peer_frontier = Vec::new();
    for &node in uphill_batch {
        let (hop_count, uphill_hops) = {
            let n = &nodes[&node];
            (n.hop_count, n.uphill_hops)
        };
        let peers = match topology.record(node) {
            Some(rec) => &rec.peers,
            None => continue,
        };
        for &peer in peers {
            let target_hop = hop_count + total_as;
            match nodes.get_mut(&peer) {
                None => {
                    nodes.insert(
                        peer,
                        PathNode {
                            hop_count: target_hop,
                            uphill_hops,
                            arrival: ArrivalKind::Peer,
                            parents: vec![node],
                        },
                    );
                    peer_frontier.push(peer);
                }
                Some(existing) if existing.hop_count == target_hop => {
                    existing.parents.push(node);
                }
                _ => {}
            }
        }
    }

    let mut queue: VecDeque<AsId> = VecDeque::with_capacity(uphill_batch.len() + peer_frontier.len());
    queue.extend(uphill_batch.iter().copied());
    queue.extend(peer_frontier.iter().copied());

    while let Some(current) = queue.pop_front() {
        let (hop_count, uphill_hops) = {
            let n = &nodes[&current];
            (n.hop_count, n.uphill_hops)
        };
        let customers = match topology.record(current) {
            Some(rec) => &rec.customers,
            None => continue,
        };
        for &customer in customers {
            let target_hop = hop_count + 1;
            match nodes.get_mut(&customer) {
                None => {
                    nodes.insert(
                        customer,
                        PathNode {
                            hop_count: target_hop,
                            uphill_hops,
                            arrival: ArrivalKind::Downhill,
                            parents: vec![current],
                        },
                    );
                    queue.push_back(customer);
                }
                Some(existing) if existing.hop_count == target_hop => {
                    existing.parents.push(current);
                }
                _ => {}
            }
        }
    }
}

/// Materialises every shortest valley-free path from `root` to `target` by
/// walking the parent-pointer DAG backward. Returns one path per distinct
/// predecessor chain, each path target-first with `root` as the last
/// element.
///
/// Returns [`Error::PathLengthInvariant`] if two parent chains to the same
/// node disagree on length — a sign the DAG was built incorrectly, since
/// parents are only ever recorded at a single, uniform `hop_count`.
pub fn shortest_paths(
    nodes: &HashMap<AsId, PathNode>,
    root: AsId,
    target: AsId,
) -> Result<Vec<Vec<AsId>>, Error> {
    fn walk(
        nodes: &HashMap<AsId, PathNode>,
        root: AsId,
        current: AsId,
        expected_len: Option<usize>,
    ) -> Result<(Vec<Vec<AsId>>, usize), Error> {
        if current == root {
            return Ok((vec![vec![root]], 1));
        }
        let node = &nodes[&current];
        let mut out = Vec::new();
        let mut len = None;
        for &parent in &node.parents {
            let (mut sub_paths, sub_len) = walk(nodes, root, parent, expected_len)?;
            match len {
                None => len = Some(sub_len),
                Some(l) if l == sub_len => {}
                Some(l) => return Err(Error::PathLengthInvariant(current, l, sub_len)),
            }
            for p in &mut sub_paths {
                p.push(current);
            }
            out.extend(sub_paths);
        }
        Ok((out, len.unwrap_or(0) + 1))
    }

    if !nodes.contains_key(&target) {
        return Ok(Vec::new());
    }
    let (mut paths, _) = walk(nodes, root, target, None)?;
    for p in &mut paths {
        p.reverse();
    }
    Ok(paths)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn single_path() {
        let topo = Topology::parse("1|2|-1\n2|3|-1\n").unwrap();
        let nodes = path_bfs(&topo, AsId(1));
        let paths = shortest_paths(&nodes, AsId(1), AsId(3)).unwrap();
        assert_eq!(paths, vec![vec![AsId(3), AsId(2), AsId(1)]]);
    }

    #[test]
    fn diamond_has_two_paths() {
        let topo = Topology::parse("1|2|-1\n1|3|-1\n2|4|-1\n3|4|-1\n").unwrap();
        let nodes = path_bfs(&topo, AsId(1));
        let mut paths = shortest_paths(&nodes, AsId(1), AsId(4)).unwrap();
        paths.sort();
        assert_eq!(
            paths,
            vec![vec![AsId(4), AsId(2), AsId(1)], vec![AsId(4), AsId(3), AsId(1)]]
        );
    }

    #[test]
    fn arrival_kinds_respect_valley_free_order() {
        // 2 is a provider of 1; 2 peers with 3; 3 has customer 4.
        let topo = Topology::parse("2|1|-1\n2|3|0\n3|4|-1\n").unwrap();
        let nodes = path_bfs(&topo, AsId(1));
        assert_eq!(nodes[&AsId(2)].arrival, ArrivalKind::Uphill);
        assert_eq!(nodes[&AsId(3)].arrival, ArrivalKind::Peer);
        assert_eq!(nodes[&AsId(4)].arrival, ArrivalKind::Downhill);
    }

    #[test]
    fn unreachable_target_returns_no_paths() {
        let topo = Topology::parse("1|2|-1\n5|6|-1\n").unwrap();
        let nodes = path_bfs(&topo, AsId(1));
        assert_eq!(shortest_paths(&nodes, AsId(1), AsId(6)).unwrap(), Vec::<Vec<AsId>>::new());
    }
}
