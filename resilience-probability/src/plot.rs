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

//! Renders the per-position risk summary as an HTML scatter plot.

use crate::stats::PositionSummary;
use plotly::common::Mode;
use plotly::{Plot, Scatter};
use std::error::Error;

/// Plots mean risk (with min/max as shaded traces) against client position,
/// writing the standalone HTML to `output` (or opening a browser tab when
/// `output` is `None`).
pub fn show(summary: &[PositionSummary], output: Option<&str>) -> Result<(), Box<dyn Error>> {
    let x: Vec<usize> = summary.iter().map(|s| s.position).collect();
    let mean: Vec<f64> = summary.iter().map(|s| s.mean).collect();
    let min: Vec<f64> = summary.iter().map(|s| s.min).collect();
    let max: Vec<f64> = summary.iter().map(|s| s.max).collect();

    let mut plot = Plot::new();
    plot.add_trace(Scatter::new(x.clone(), mean).name("mean risk").mode(Mode::Lines));
    plot.add_trace(Scatter::new(x.clone(), min).name("min risk").mode(Mode::Lines));
    plot.add_trace(Scatter::new(x, max).name("max risk").mode(Mode::Lines));

    match output {
        Some(path) => {
            std::fs::write(path, plot.to_html())?;
        }
        None => plot.show(),
    }
    Ok(())
}
