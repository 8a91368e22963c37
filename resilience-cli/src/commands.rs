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

//! The three analytical subcommands: `resilience`, `path`, `risk`.

use crate::batch::run_batch;
use crate::error::CliError;
use crate::io;
use crate::CommonArgs;
use log::{info, warn};
use resilience_core::client::order_clients;
use resilience_core::graph::{count_bfs, path_bfs, shortest_paths, AsId};
use resilience_core::path_select::select_path;
use resilience_core::resilience::resilience_scores;
use resilience_core::risk::risk_curve;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Loads the topology, client list and guard list shared by `resilience` and
/// `path`, filtering out any AS absent from the topology.
fn load_common(common: &CommonArgs) -> Result<(resilience_core::graph::Topology, Vec<AsId>, Vec<AsId>), CliError> {
    let topology = io::load_topology(&common.topology_file)?;
    info!("loaded topology with {} ASes", topology.total_as());

    let client_entries = io::load_client_list(&common.client_file)?;
    let ordered = order_clients(&client_entries);
    let clients = topology.filter_known(ordered.iter(), "client");
    if clients.is_empty() {
        return Err(CliError::NoUsableClients);
    }

    let raw_guards = io::load_guard_list(&common.guard_as_file)?;
    let guards = topology.filter_known(raw_guards.iter(), "guard");

    Ok((topology, clients, guards))
}

/// Runs C1 -> C2 -> C4 (+ C8) for every client, writing the Resilience
/// output of the external interfaces section.
pub fn run_resilience(common: CommonArgs, json: PathBuf, threads: Option<usize>) -> Result<(), CliError> {
    let (topology, clients, guards) = load_common(&common)?;
    let topology = Arc::new(topology);
    let guards_for_closure = guards.clone();

    let results = run_batch(Arc::clone(&topology), &clients, threads, move |topo, client| {
        let labels = count_bfs(topo, client);
        match resilience_scores(&labels, client, &guards_for_closure, topo.total_as()) {
            Ok(scores) => Some(scores),
            Err(e) => {
                warn!("skipping client {:?}: {}", client, e);
                None
            }
        }
    });

    info!("scored {} of {} requested clients", results.len(), clients.len());
    let output: HashMap<AsId, HashMap<AsId, f64>> = results.into_iter().collect();
    io::write_resilience_output(&json, &output)
}

/// Runs C1 -> C3 -> C5 (+ C8) for every client, writing the Predicted path
/// output of the external interfaces section.
pub fn run_path(
    common: CommonArgs,
    json: PathBuf,
    threads: Option<usize>,
    notiebreak: bool,
) -> Result<(), CliError> {
    let (topology, clients, guards) = load_common(&common)?;

    info!("pre-computing path BFS for {} guard(s)", guards.len());
    let guard_maps: HashMap<AsId, HashMap<AsId, resilience_core::graph::PathNode>> =
        guards.iter().map(|&g| (g, path_bfs(&topology, g))).collect();
    let guard_maps = Arc::new(guard_maps);

    let topology = Arc::new(topology);
    let guards_for_closure = guards.clone();
    let tiebreak = !notiebreak;

    let results = run_batch(Arc::clone(&topology), &clients, threads, move |topo, client| {
        let client_nodes = path_bfs(topo, client);
        let mut per_guard: HashMap<AsId, (Vec<AsId>, Vec<AsId>)> = HashMap::new();
        let mut incomplete = false;

        for &guard in &guards_for_closure {
            // Forward (client -> guard): rooted at the guard, since
            // `shortest_paths` returns target-first sequences ending at root.
            let Some(guard_nodes) = guard_maps.get(&guard) else {
                warn!("client {:?} -> guard {:?}: no path BFS rooted at guard", client, guard);
                incomplete = true;
                continue;
            };
            let fwd_paths = match shortest_paths(guard_nodes, guard, client) {
                Ok(p) if !p.is_empty() => p,
                Ok(_) => {
                    incomplete = true;
                    continue;
                }
                Err(e) => {
                    warn!("client {:?} -> guard {:?}: {}", client, guard, e);
                    incomplete = true;
                    continue;
                }
            };
            // Reverse (guard -> client): rooted at the client.
            let rev_paths = match shortest_paths(&client_nodes, client, guard) {
                Ok(p) if !p.is_empty() => p,
                Ok(_) => {
                    incomplete = true;
                    continue;
                }
                Err(e) => {
                    warn!("guard {:?} -> client {:?}: {}", guard, client, e);
                    incomplete = true;
                    continue;
                }
            };

            match (select_path(&fwd_paths, tiebreak), select_path(&rev_paths, tiebreak)) {
                (Some(fwd), Some(rev)) => {
                    per_guard.insert(guard, (fwd.clone(), rev.clone()));
                }
                _ => incomplete = true,
            }
        }

        if incomplete || per_guard.is_empty() {
            None
        } else {
            Some(per_guard)
        }
    });

    info!("found paths for {} of {} requested clients", results.len(), clients.len());
    let output: HashMap<AsId, HashMap<AsId, (Vec<AsId>, Vec<AsId>)>> = results.into_iter().collect();
    io::write_path_output(&json, &output)
}

/// Runs C6 -> C7 downstream of a resilience output already on disk, writing
/// the Aggregated risk output of the external interfaces section.
#[allow(clippy::too_many_arguments)]
pub fn run_risk(
    client_file: PathBuf,
    resil_file: PathBuf,
    guard_as_file: PathBuf,
    bw_file: Option<PathBuf>,
    hijack_file: PathBuf,
    sample_size: f64,
    alpha: f64,
    num_hijack_total: usize,
    json: PathBuf,
) -> Result<(), CliError> {
    if !(sample_size > 0.0 && sample_size <= 1.0) {
        return Err(CliError::InvalidSampleSize(sample_size));
    }

    let client_entries = io::load_client_list(&client_file)?;
    let clients = order_clients(&client_entries);
    let guards = io::load_guard_list(&guard_as_file)?;

    let resil_content = std::fs::read_to_string(&resil_file)
        .map_err(|source| CliError::Io { path: resil_file.display().to_string(), source })?;
    let raw_resilience: HashMap<String, HashMap<String, f64>> =
        serde_json::from_str(&resil_content)
            .map_err(|source| CliError::Json { path: resil_file.display().to_string(), source })?;
    let resilience_per_client: HashMap<AsId, HashMap<AsId, f64>> = raw_resilience
        .into_iter()
        .filter_map(|(client, guards)| {
            let client_asn: u32 = client.parse().ok()?;
            let inner = guards
                .into_iter()
                .filter_map(|(g, v)| Some((AsId(g.parse::<u32>().ok()?), v)))
                .collect();
            Some((AsId(client_asn), inner))
        })
        .collect();

    let bandwidth = match bw_file {
        Some(path) => io::load_bandwidth_map(&path)?,
        None => HashMap::new(),
    };
    let hijack_map = io::load_hijack_map(&hijack_file)?;

    let k = ((sample_size * bandwidth.len() as f64).floor() as usize).max(1);

    let curve = risk_curve(&clients, &resilience_per_client, &bandwidth, &hijack_map, &guards, alpha, k, num_hijack_total)?;

    info!("computed risk curve over {} clients", curve.len());
    io::write_risk_curve(&json, &curve)
}
