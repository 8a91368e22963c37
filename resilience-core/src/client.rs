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

//! # Client ordering
//!
//! Orders a parsed client list by optional activation timestamp, the way
//! `orderClient` does in the original mobility analyses.

use crate::graph::AsId;

/// One parsed client-list line: an AS identifier with an optional
/// whitespace-separated activation timestamp (seconds since the epoch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientEntry {
    /// The client's AS identifier.
    pub asn: AsId,
    /// Activation timestamp, if the input line carried one.
    pub timestamp: Option<i64>,
}

/// Orders clients for the batch runner and risk aggregator.
///
/// If no entry carries a timestamp, input order is preserved verbatim. If at
/// least one does, the whole list is sorted by timestamp ascending; entries
/// without a timestamp sort after every timestamped entry, and ties (including
/// the untimed group among themselves) keep their relative input order.
pub fn order_clients(entries: &[ClientEntry]) -> Vec<AsId> {
    if !entries.iter().any(|e| e.timestamp.is_some()) {
        return entries.iter().map(|e| e.asn).collect();
    }

    let mut indexed: Vec<(usize, ClientEntry)> = entries.iter().copied().enumerate().collect();
    indexed.sort_by_key(|&(idx, e)| (e.timestamp.unwrap_or(i64::MAX), idx));
    indexed.into_iter().map(|(_, e)| e.asn).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn entry(asn: u32, ts: Option<i64>) -> ClientEntry {
        ClientEntry { asn: AsId(asn), timestamp: ts }
    }

    #[test]
    fn no_timestamps_preserves_input_order() {
        let entries = vec![entry(3, None), entry(1, None), entry(2, None)];
        assert_eq!(order_clients(&entries), vec![AsId(3), AsId(1), AsId(2)]);
    }

    #[test]
    fn sorts_ascending_by_timestamp() {
        let entries = vec![entry(1, Some(300)), entry(2, Some(100)), entry(3, Some(200))];
        assert_eq!(order_clients(&entries), vec![AsId(2), AsId(3), AsId(1)]);
    }

    #[test]
    fn untimed_entries_sort_after_timed_ones_preserving_relative_order() {
        let entries = vec![entry(1, None), entry(2, Some(50)), entry(3, None), entry(4, Some(10))];
        assert_eq!(order_clients(&entries), vec![AsId(4), AsId(2), AsId(1), AsId(3)]);
    }
}
