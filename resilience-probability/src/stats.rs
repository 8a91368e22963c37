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

//! Aggregate statistics over one or more `resilience-cli risk` output
//! curves, mirroring the mobility-risk summaries in the original
//! `guard_as_country.py` / `counterraptor_client_country.py`.

use serde::Serialize;

/// Per-position summary across every loaded risk curve: running minimum,
/// maximum, mean and standard deviation at that client index.
#[derive(Debug, Clone, Serialize)]
pub struct PositionSummary {
    /// Client index within the curve (0-based)
    pub position: usize,
    /// Smallest risk value observed at this position across all curves
    pub min: f64,
    /// Largest risk value observed at this position across all curves
    pub max: f64,
    /// Mean risk value at this position across all curves
    pub mean: f64,
    /// Standard deviation of the risk value at this position
    pub stddev: f64,
}

/// Summarises a set of equal-length risk curves position by position.
///
/// Returns one [`PositionSummary`] per client index, plus the fraction of
/// adjacent-position steps across all curves that were non-decreasing.
/// Since hijacker exposure only ever grows as more clients are observed,
/// a well-formed risk curve is expected to be non-decreasing modulo
/// bandwidth-weight mixing, and this rate quantifies how often that held.
pub fn summarise(curves: &[Vec<f64>]) -> (Vec<PositionSummary>, f64) {
    let len = curves.iter().map(Vec::len).min().unwrap_or(0);
    let mut positions = Vec::with_capacity(len);

    for pos in 0..len {
        let values: Vec<f64> = curves.iter().map(|c| c[pos]).collect();
        let mean = statistical::mean(&values);
        let stddev = if values.len() > 1 { statistical::standard_deviation(&values, Some(mean)) } else { 0.0 };
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        positions.push(PositionSummary { position: pos, min, max, mean, stddev });
    }

    let mut nondecreasing_steps = 0usize;
    let mut total_steps = 0usize;
    for curve in curves {
        for w in curve.windows(2) {
            total_steps += 1;
            if w[1] >= w[0] {
                nondecreasing_steps += 1;
            }
        }
    }
    let monotonicity_rate =
        if total_steps == 0 { 1.0 } else { nondecreasing_steps as f64 / total_steps as f64 };

    (positions, monotonicity_rate)
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn summarises_per_position_stats() {
        let curves = vec![vec![0.1, 0.2, 0.3], vec![0.3, 0.2, 0.5]];
        let (summary, _) = summarise(&curves);
        assert_eq!(summary.len(), 3);
        assert_approx_eq!(summary[0].mean, 0.2);
        assert_approx_eq!(summary[0].min, 0.1);
        assert_approx_eq!(summary[0].max, 0.3);
    }

    #[test]
    fn monotonicity_rate_detects_a_decreasing_step() {
        let curves = vec![vec![0.1, 0.2, 0.1]];
        let (_, rate) = summarise(&curves);
        assert_approx_eq!(rate, 0.5);
    }
}
