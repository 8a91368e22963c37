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

//! # Probability redistributor
//!
//! Normalises a non-negative resilience weight vector into a capped
//! probability distribution of size `k`: every entry is at most `1/k`, and
//! the whole vector sums to `1`.

use crate::error::Error;

/// Redistributes `weights` into a probability vector capped at `1/k`.
///
/// Scales `weights` so they sum to `k`, then repeatedly pins any entry that
/// overshot `1` at the cap and rescales the rest, until nothing overshoots.
/// Finally divides every entry (pinned or not) by `k`.
pub fn redistribute(weights: &[f64], k: usize) -> Result<Vec<f64>, Error> {
    let n = weights.len();
    let sum: f64 = weights.iter().sum();
    if sum <= 0.0 {
        return Err(Error::EmptyDistribution);
    }

    let mut t: Vec<f64> = weights.iter().map(|w| k as f64 * w / sum).collect();
    let mut pinned = vec![false; n];
    let mut pinned_count = 0usize;

    loop {
        let mut newly_pinned = false;
        for i in 0..n {
            if !pinned[i] && t[i] > 1.0 {
                pinned[i] = true;
                pinned_count += 1;
                t[i] = 0.0;
                newly_pinned = true;
            }
        }
        if !newly_pinned {
            break;
        }

        let remaining_sum: f64 = (0..n).filter(|&i| !pinned[i]).map(|i| t[i]).sum();
        let target = (k - pinned_count) as f64;
        if remaining_sum > 0.0 {
            for i in 0..n {
                if !pinned[i] {
                    t[i] = t[i] / remaining_sum * target;
                }
            }
        }
    }

    let mut p: Vec<f64> = (0..n).map(|i| if pinned[i] { 1.0 } else { t[i] }).collect();
    for v in p.iter_mut() {
        *v /= k as f64;
    }
    Ok(p)
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn uniform_input_stays_uniform() {
        let p = redistribute(&[1.0, 1.0, 1.0, 1.0], 2).unwrap();
        for v in &p {
            assert_approx_eq!(*v, 0.25);
        }
        assert_approx_eq!(p.iter().sum::<f64>(), 1.0);
    }

    #[test]
    fn dominant_weight_gets_pinned_at_cap() {
        // One entry massively dominates, forcing a pin-and-rescale pass.
        let p = redistribute(&[100.0, 1.0, 1.0, 1.0], 2).unwrap();
        assert_approx_eq!(p[0], 0.5);
        assert_approx_eq!(p.iter().sum::<f64>(), 1.0);
        for v in &p {
            assert!(*v <= 0.5 + 1e-9);
        }
    }

    #[test]
    fn all_zero_weights_is_an_error() {
        let err = redistribute(&[0.0, 0.0, 0.0], 2).unwrap_err();
        assert!(matches!(err, Error::EmptyDistribution));
    }

    #[test]
    fn every_entry_is_capped_at_one_over_k() {
        let p = redistribute(&[50.0, 30.0, 15.0, 5.0, 1.0], 3).unwrap();
        for v in &p {
            assert!(*v <= 1.0 / 3.0 + 1e-9);
        }
        assert_approx_eq!(p.iter().sum::<f64>(), 1.0);
    }
}
