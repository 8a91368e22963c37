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

//! # Risk aggregator
//!
//! Combines a per-client resilience vector with a guard bandwidth weight and
//! a per-client-per-guard hijacker set into a single risk curve, one value
//! per client in caller-supplied order.

use crate::error::Error;
use crate::graph::AsId;
use crate::redistribute::redistribute;
use std::collections::{HashMap, HashSet};

/// Mixes a client's guard-selection distribution with the guard bandwidth
/// weights: first redistributes the raw resilience vector into a capped
/// probability vector `r` (C6), then computes
/// `selection_weight(g) = alpha * r(g) + (1 - alpha) * bandwidth(g)` and
/// renormalises the result to sum to one. Guards absent from either map
/// contribute zero for that term.
pub fn mix_weights(
    resilience: &HashMap<AsId, f64>,
    bandwidth: &HashMap<AsId, f64>,
    guards: &[AsId],
    alpha: f64,
    k: usize,
) -> Result<Vec<f64>, Error> {
    let resilience_vec: Vec<f64> =
        guards.iter().map(|g| resilience.get(g).copied().unwrap_or(0.0)).collect();
    let r = redistribute(&resilience_vec, k)?;

    let mixed: Vec<f64> = guards
        .iter()
        .zip(&r)
        .map(|(g, &ri)| {
            let b = bandwidth.get(g).copied().unwrap_or(0.0);
            alpha * ri + (1.0 - alpha) * b
        })
        .collect();

    let sum: f64 = mixed.iter().sum();
    if sum <= 0.0 {
        return Err(Error::EmptyDistribution);
    }
    Ok(mixed.into_iter().map(|w| w / sum).collect())
}

/// Accumulates, per guard, the set of hijacker ASes observed across an
/// ordered sequence of clients. Once a hijacker is recorded against a guard
/// it is never removed — the set only grows as the client list is walked.
#[derive(Debug, Default, Clone)]
pub struct HijackAccumulator {
    per_guard: HashMap<AsId, HashSet<AsId>>,
}

impl HijackAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one client's `{guard: hijackers}` map into the running state.
    pub fn accumulate(&mut self, hijackers: &HashMap<AsId, HashSet<AsId>>) {
        for (&guard, set) in hijackers {
            self.per_guard.entry(guard).or_default().extend(set.iter().copied());
        }
    }

    /// Number of distinct hijacker ASes accumulated against `guard` so far.
    pub fn hijacker_count(&self, guard: AsId) -> usize {
        self.per_guard.get(&guard).map_or(0, |s| s.len())
    }
}

/// Computes one client's risk value from its chosen guard-selection
/// distribution and the hijacker state accumulated up to and including this
/// client: `Σ_g chosen_prob(g) · |accumulated_hijackers(g)| / num_hijack_total`.
pub fn client_risk(
    chosen_prob: &[f64],
    guards: &[AsId],
    accumulator: &HijackAccumulator,
    num_hijack_total: usize,
) -> f64 {
    if num_hijack_total == 0 {
        return 0.0;
    }
    let weighted: f64 = guards
        .iter()
        .zip(chosen_prob)
        .map(|(&g, &p)| p * accumulator.hijacker_count(g) as f64)
        .sum();
    weighted / num_hijack_total as f64
}

/// Runs the full risk aggregation for an ordered client list: redistributes
/// each client's resilience vector, mixes it with bandwidth, accumulates
/// hijackers, and scores each client in turn. Clients missing from
/// `resilience_per_client` are treated as having all-zero resilience.
#[allow(clippy::too_many_arguments)]
pub fn risk_curve(
    clients: &[AsId],
    resilience_per_client: &HashMap<AsId, HashMap<AsId, f64>>,
    bandwidth: &HashMap<AsId, f64>,
    hijack_map: &HashMap<AsId, HashMap<AsId, HashSet<AsId>>>,
    guards: &[AsId],
    alpha: f64,
    k: usize,
    num_hijack_total: usize,
) -> Result<Vec<f64>, Error> {
    let mut accumulator = HijackAccumulator::new();
    let mut curve = Vec::with_capacity(clients.len());
    let empty_resilience = HashMap::new();

    for &client in clients {
        let resilience = resilience_per_client.get(&client).unwrap_or(&empty_resilience);
        let chosen = mix_weights(resilience, bandwidth, guards, alpha, k)?;

        if let Some(hijackers) = hijack_map.get(&client) {
            accumulator.accumulate(hijackers);
        }

        curve.push(client_risk(&chosen, guards, &accumulator, num_hijack_total));
    }

    Ok(curve)
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn set(asns: &[u32]) -> HashSet<AsId> {
        asns.iter().map(|&n| AsId(n)).collect()
    }

    #[test]
    fn accumulator_only_grows() {
        let mut acc = HijackAccumulator::new();
        let mut round1 = HashMap::new();
        round1.insert(AsId(1), set(&[100]));
        acc.accumulate(&round1);
        assert_eq!(acc.hijacker_count(AsId(1)), 1);

        let mut round2 = HashMap::new();
        round2.insert(AsId(1), set(&[100, 200]));
        acc.accumulate(&round2);
        assert_eq!(acc.hijacker_count(AsId(1)), 2);
    }

    #[test]
    fn mix_weights_respects_alpha_extremes() {
        let guards = vec![AsId(1), AsId(2)];
        let mut resilience = HashMap::new();
        resilience.insert(AsId(1), 0.9);
        resilience.insert(AsId(2), 0.1);
        let mut bandwidth = HashMap::new();
        bandwidth.insert(AsId(1), 0.1);
        bandwidth.insert(AsId(2), 0.9);

        let all_resilience = mix_weights(&resilience, &bandwidth, &guards, 1.0, 1).unwrap();
        assert_approx_eq!(all_resilience[0], 0.9);

        let all_bandwidth = mix_weights(&resilience, &bandwidth, &guards, 0.0, 1).unwrap();
        assert_approx_eq!(all_bandwidth[0], 0.1);
    }

    #[test]
    fn risk_curve_is_nondecreasing_when_weights_are_stable() {
        let guards = vec![AsId(10), AsId(20)];
        let mut resilience = HashMap::new();
        resilience.insert(AsId(10), 0.6);
        resilience.insert(AsId(20), 0.4);
        let mut resilience_per_client = HashMap::new();
        resilience_per_client.insert(AsId(1), resilience.clone());
        resilience_per_client.insert(AsId(2), resilience.clone());
        resilience_per_client.insert(AsId(3), resilience);

        let bandwidth = HashMap::new();

        let mut hijack_map = HashMap::new();
        let mut h1 = HashMap::new();
        h1.insert(AsId(10), set(&[900]));
        hijack_map.insert(AsId(1), h1);
        let mut h2 = HashMap::new();
        h2.insert(AsId(10), set(&[901]));
        hijack_map.insert(AsId(2), h2);

        let clients = vec![AsId(1), AsId(2), AsId(3)];
        let curve = risk_curve(
            &clients,
            &resilience_per_client,
            &bandwidth,
            &hijack_map,
            &guards,
            1.0,
            2,
            10,
        )
        .unwrap();

        assert!(curve[0] <= curve[1]);
        assert!(curve[1] <= curve[2]);
    }
}
