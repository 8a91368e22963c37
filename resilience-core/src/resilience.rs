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

//! # Resilience scorer
//!
//! Converts a counting-BFS-labelled graph for one client into a
//! per-guard resilience score in `[0, 1]`.

use crate::error::Error;
use crate::graph::{AsId, CountLabel};
use std::collections::{HashMap, HashSet};

/// Scores every requested guard AS for one client, given that client's
/// counting BFS label map.
///
/// `labels` must come from [`crate::graph::count_bfs::count_bfs`] rooted at
/// `client`; `total_as` is the topology's `TOTAL_AS`. Nodes unreachable from
/// `client` (including requested guards that never appear in `labels`) are
/// absent from the result rather than scored zero.
pub fn resilience_scores(
    labels: &HashMap<AsId, CountLabel>,
    client: AsId,
    guards: &[AsId],
    total_as: usize,
) -> Result<HashMap<AsId, f64>, Error> {
    let mut entries: Vec<(AsId, CountLabel)> = labels
        .iter()
        .filter(|&(&asn, _)| asn != client)
        .map(|(&asn, &label)| (asn, label))
        .collect();
    entries.sort_by(|a, b| (b.1.uphill_hops, b.1.hop_count).cmp(&(a.1.uphill_hops, a.1.hop_count)));

    let unreachable = (total_as - 1 - entries.len()) as f64;
    let guard_set: HashSet<AsId> = guards.iter().copied().collect();
    let mut scores: HashMap<AsId, f64> = HashMap::new();

    let mut nodes_passed = 0usize;
    let mut i = 0;
    while i < entries.len() {
        let key = (entries[i].1.hop_count, entries[i].1.uphill_hops);
        let mut j = i;
        while j < entries.len() && (entries[j].1.hop_count, entries[j].1.uphill_hops) == key {
            j += 1;
        }
        let group = &entries[i..j];
        let group_total_equal_paths: u64 = group.iter().map(|(_, l)| l.equal_path_count).sum();

        for &(asn, label) in group {
            if guard_set.contains(&asn) {
                let tie_bonus = if group.len() > 1 {
                    label.equal_path_count as f64 / group_total_equal_paths as f64
                } else {
                    0.0
                };
                scores.insert(asn, nodes_passed as f64 + unreachable + tie_bonus);
            }
        }

        nodes_passed += group.len();
        i = j;
    }

    if scores.is_empty() {
        return Err(Error::EmptyResilience(client));
    }

    let denom = (total_as - 2) as f64;
    for v in scores.values_mut() {
        *v /= denom;
    }
    Ok(scores)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::{count_bfs, Topology};
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn diamond_splits_tie_evenly() {
        let topo = Topology::parse("1|2|-1\n1|3|-1\n2|4|-1\n3|4|-1\n").unwrap();
        let labels = count_bfs(&topo, AsId(1));
        let scores =
            resilience_scores(&labels, AsId(1), &[AsId(2), AsId(3)], topo.total_as()).unwrap();
        assert_approx_eq!(scores[&AsId(2)], scores[&AsId(3)]);
    }

    #[test]
    fn scores_are_normalised_and_monotone_with_distance() {
        let topo = Topology::parse("1|2|-1\n2|3|-1\n").unwrap();
        let labels = count_bfs(&topo, AsId(1));
        let scores = resilience_scores(&labels, AsId(1), &[AsId(2), AsId(3)], topo.total_as())
            .unwrap();
        assert!(scores[&AsId(2)] > scores[&AsId(3)]);
    }

    #[test]
    fn unreachable_guard_yields_empty_resilience_error() {
        let topo = Topology::parse("1|2|-1\n5|6|-1\n").unwrap();
        let labels = count_bfs(&topo, AsId(1));
        let err = resilience_scores(&labels, AsId(1), &[AsId(6)], topo.total_as()).unwrap_err();
        assert!(matches!(err, Error::EmptyResilience(AsId(1))));
    }
}
