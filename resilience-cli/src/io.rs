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

//! File parsing and JSON (de)serialisation for the CLI binaries. The core
//! crate never touches a filesystem; everything here turns raw bytes into
//! the plain in-memory values `resilience_core` consumes.

use crate::error::CliError;
use chrono::NaiveDateTime;
use resilience_core::client::ClientEntry;
use resilience_core::graph::{AsId, Topology};
use std::collections::{HashMap, HashSet};
use std::path::Path;

fn read_to_string(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path)
        .map_err(|source| CliError::Io { path: path.display().to_string(), source })
}

/// Loads and parses a CAIDA-style AS relationship file into a [`Topology`].
pub fn load_topology(path: &Path) -> Result<Topology, CliError> {
    let content = read_to_string(path)?;
    Topology::parse(&content).map_err(CliError::from)
}

/// Parses a client list: one AS per line, optionally followed by a
/// whitespace-separated `YYYY-MM-DD HH:MM:SS` timestamp.
pub fn load_client_list(path: &Path) -> Result<Vec<ClientEntry>, CliError> {
    let content = read_to_string(path)?;
    let mut entries = Vec::new();
    for (idx, raw_line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.splitn(2, char::is_whitespace);
        let asn_field = parts.next().unwrap_or("");
        let asn: AsId = asn_field.parse().map_err(|_| CliError::MalformedClientLine {
            line: line_no,
            content: line.to_string(),
        })?;

        let timestamp = match parts.next().map(str::trim).filter(|s| !s.is_empty()) {
            None => None,
            Some(ts) => Some(
                NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S")
                    .map_err(|_| CliError::MalformedTimestamp {
                        line: line_no,
                        content: line.to_string(),
                    })?
                    .and_utc()
                    .timestamp(),
            ),
        };

        entries.push(ClientEntry { asn, timestamp });
    }
    Ok(entries)
}

/// Parses a guard list: one AS identifier per line.
pub fn load_guard_list(path: &Path) -> Result<Vec<AsId>, CliError> {
    let content = read_to_string(path)?;
    let mut guards = Vec::new();
    for (idx, raw_line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let asn: AsId = line.parse().map_err(|_| CliError::MalformedGuardLine {
            line: line_no,
            content: line.to_string(),
        })?;
        guards.push(asn);
    }
    Ok(guards)
}

/// Parses a `guard_as_bw.json`-shaped bandwidth map: `{ guard_AS: weight }`.
pub fn load_bandwidth_map(path: &Path) -> Result<HashMap<AsId, f64>, CliError> {
    let content = read_to_string(path)?;
    let raw: HashMap<String, f64> = serde_json::from_str(&content)
        .map_err(|source| CliError::Json { path: path.display().to_string(), source })?;
    Ok(raw
        .into_iter()
        .filter_map(|(k, v)| k.parse::<u32>().ok().map(|asn| (AsId(asn), v)))
        .collect())
}

/// Parses a `cg_hijack_as.json`-shaped hijack map:
/// `{ client_AS: { guard_AS: [hijacker_AS, ...] } }`.
pub fn load_hijack_map(
    path: &Path,
) -> Result<HashMap<AsId, HashMap<AsId, HashSet<AsId>>>, CliError> {
    let content = read_to_string(path)?;
    let raw: HashMap<String, HashMap<String, Vec<u32>>> = serde_json::from_str(&content)
        .map_err(|source| CliError::Json { path: path.display().to_string(), source })?;

    let mut out = HashMap::new();
    for (client, guard_map) in raw {
        let Ok(client_asn) = client.parse::<u32>() else { continue };
        let mut guards = HashMap::new();
        for (guard, hijackers) in guard_map {
            let Ok(guard_asn) = guard.parse::<u32>() else { continue };
            guards.insert(AsId(guard_asn), hijackers.into_iter().map(AsId).collect());
        }
        out.insert(AsId(client_asn), guards);
    }
    Ok(out)
}

/// Writes the Resilience output of the external interfaces section:
/// `{ client_AS: { guard_AS: float_score } }`.
pub fn write_resilience_output(
    path: &Path,
    data: &HashMap<AsId, HashMap<AsId, f64>>,
) -> Result<(), CliError> {
    write_json(path, &stringify_outer(data))
}

/// Writes the Predicted path output:
/// `{ client_AS: { guard_AS: [forward_path, reverse_path] } }`.
pub fn write_path_output(
    path: &Path,
    data: &HashMap<AsId, HashMap<AsId, (Vec<AsId>, Vec<AsId>)>>,
) -> Result<(), CliError> {
    let stringified: HashMap<String, HashMap<String, (Vec<u32>, Vec<u32>)>> = data
        .iter()
        .map(|(client, guards)| {
            let inner = guards
                .iter()
                .map(|(guard, (fwd, rev))| {
                    (
                        guard.0.to_string(),
                        (
                            fwd.iter().map(|a| a.0).collect(),
                            rev.iter().map(|a| a.0).collect(),
                        ),
                    )
                })
                .collect();
            (client.0.to_string(), inner)
        })
        .collect();
    write_json(path, &stringified)
}

/// Writes the Aggregated risk output: one float per line, in input order.
pub fn write_risk_curve(path: &Path, curve: &[f64]) -> Result<(), CliError> {
    let body = curve.iter().map(|v| v.to_string()).collect::<Vec<_>>().join("\n");
    std::fs::write(path, body + "\n")
        .map_err(|source| CliError::Io { path: path.display().to_string(), source })
}

fn stringify_outer(data: &HashMap<AsId, HashMap<AsId, f64>>) -> HashMap<String, HashMap<String, f64>> {
    data.iter()
        .map(|(client, guards)| {
            let inner = guards.iter().map(|(g, v)| (g.0.to_string(), *v)).collect();
            (client.0.to_string(), inner)
        })
        .collect()
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), CliError> {
    let body = serde_json::to_string_pretty(value)
        .map_err(|source| CliError::Json { path: path.display().to_string(), source })?;
    std::fs::write(path, body)
        .map_err(|source| CliError::Io { path: path.display().to_string(), source })
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn parses_client_list_with_mixed_timestamps() {
        let f = write_temp("1\n2 2020-01-01 00:00:00\n# comment\n\n3\n");
        let entries = load_client_list(f.path()).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].asn, AsId(1));
        assert_eq!(entries[0].timestamp, None);
        assert!(entries[1].timestamp.is_some());
        assert_eq!(entries[2].asn, AsId(3));
    }

    #[test]
    fn rejects_malformed_client_line() {
        let f = write_temp("not-an-as\n");
        let err = load_client_list(f.path()).unwrap_err();
        assert!(matches!(err, CliError::MalformedClientLine { line: 1, .. }));
    }

    #[test]
    fn parses_guard_list() {
        let f = write_temp("10\n20\n\n30\n");
        assert_eq!(load_guard_list(f.path()).unwrap(), vec![AsId(10), AsId(20), AsId(30)]);
    }

    #[test]
    fn parses_bandwidth_map() {
        let f = write_temp(r#"{"10": 1.5, "20": 2.0}"#);
        let map = load_bandwidth_map(f.path()).unwrap();
        assert_eq!(map[&AsId(10)], 1.5);
        assert_eq!(map[&AsId(20)], 2.0);
    }
}
