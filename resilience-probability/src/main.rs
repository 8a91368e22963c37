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

//! Downstream aggregation tool for `resilience-cli risk` output. Computes
//! per-position mean/stddev/min/max across one or more risk curves and,
//! optionally, renders a plot — mirroring the "aggregate risk curves"
//! deliverable without adding any new path-inference logic.

mod plot;
mod stats;

use clap::Parser;
use log::info;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "resilience-probability", author = "Tibor Schneider")]
struct CommandLineArguments {
    /// One or more risk curve files, as written by `resilience-cli risk`
    #[arg(required = true)]
    risk_files: Vec<PathBuf>,
    /// Write the per-position summary as JSON to this path
    #[arg(long)]
    summary_json: Option<PathBuf>,
    /// Render an HTML plot of the mean/min/max risk curve to this path
    #[arg(long)]
    plot_html: Option<PathBuf>,
}

fn load_curve(path: &PathBuf) -> Result<Vec<f64>, Box<dyn Error>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()?)
}

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();
    let args = CommandLineArguments::parse();

    let curves: Vec<Vec<f64>> =
        args.risk_files.iter().map(load_curve).collect::<Result<_, _>>()?;
    info!("loaded {} risk curve(s)", curves.len());

    let (summary, monotonicity_rate) = stats::summarise(&curves);
    info!(
        "{} position(s) summarised, {:.1}% of steps were non-decreasing",
        summary.len(),
        monotonicity_rate * 100.0
    );

    if let Some(path) = args.summary_json {
        std::fs::write(&path, serde_json::to_string_pretty(&summary)?)?;
    } else {
        for s in &summary {
            println!(
                "{}\tmean={:.6}\tstddev={:.6}\tmin={:.6}\tmax={:.6}",
                s.position, s.mean, s.stddev, s.min, s.max
            );
        }
    }

    if args.plot_html.is_some() || curves.len() > 1 {
        plot::show(&summary, args.plot_html.as_deref().and_then(|p| p.to_str()))?;
    }

    Ok(())
}
