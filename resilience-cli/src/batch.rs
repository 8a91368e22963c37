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

//! Fans a per-client computation out across worker threads.
//!
//! Adapted from `snowcap::synthesize_parallel`'s thread-pool shape: there,
//! every thread races on the same problem and the first result wins. Here,
//! clients are independent, so each thread instead owns a disjoint slice of
//! the client list and every result is kept.

use log::{error, info};
use resilience_core::graph::{AsId, Topology};
use std::sync::Arc;
use std::thread;

/// Runs `work` for every client in `clients`, spread across `threads`
/// worker threads (defaulting to [`num_cpus::get`]). `work` returns `None`
/// to skip a client (e.g. a per-client error already logged by the
/// caller-visible closure). Each worker computes and releases one client's
/// state before moving to the next, bounding resident memory to `O(threads)`
/// per-root maps at any instant.
pub fn run_batch<O, F>(topology: Arc<Topology>, clients: &[AsId], threads: Option<usize>, work: F) -> Vec<(AsId, O)>
where
    F: Fn(&Topology, AsId) -> Option<O> + Send + Sync + 'static,
    O: Send + 'static,
{
    let n_threads = threads.unwrap_or_else(num_cpus::get).max(1).min(clients.len().max(1));
    info!("spawning {} worker thread(s) for {} client(s)", n_threads, clients.len());

    let work = Arc::new(work);
    let mut chunks: Vec<Vec<AsId>> = (0..n_threads).map(|_| Vec::new()).collect();
    for (i, &client) in clients.iter().enumerate() {
        chunks[i % n_threads].push(client);
    }

    let handles: Vec<_> = chunks
        .into_iter()
        .map(|chunk| {
            let topo = Arc::clone(&topology);
            let work = Arc::clone(&work);
            thread::spawn(move || {
                let mut results = Vec::with_capacity(chunk.len());
                for client in chunk {
                    if let Some(out) = work(&topo, client) {
                        results.push((client, out));
                    }
                }
                results
            })
        })
        .collect();

    let mut all = Vec::with_capacity(clients.len());
    for handle in handles {
        match handle.join() {
            Ok(results) => all.extend(results),
            Err(_) => error!("a worker thread panicked during batch processing"),
        }
    }
    all
}
