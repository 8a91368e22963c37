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

//! # Deterministic path selector
//!
//! Breaks ties among equally-short valley-free AS paths by lexicographic
//! comparison of AS numbers, exploiting [`crate::graph::AsId`]'s derived
//! `Ord`.

use crate::graph::AsId;

/// Selects one path from a non-empty set of equally-short candidates.
///
/// When `tiebreak` is `true` (the default CLI behaviour), returns the
/// lexicographically smallest sequence — `Vec<AsId>`'s derived `Ord`
/// compares element-wise, which is exactly AS-number comparison at each
/// position in turn. When `tiebreak` is `false` (`--notiebreak`), returns
/// whichever path the caller listed first, preserving the path BFS's
/// discovery order instead of imposing one.
pub fn select_path<'a>(paths: &'a [Vec<AsId>], tiebreak: bool) -> Option<&'a Vec<AsId>> {
    if tiebreak {
        paths.iter().min()
    } else {
        paths.first()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn picks_lexicographically_smallest() {
        let paths = vec![
            vec![AsId(1), AsId(5), AsId(9)],
            vec![AsId(1), AsId(3), AsId(9)],
            vec![AsId(1), AsId(4), AsId(9)],
        ];
        assert_eq!(select_path(&paths, true), Some(&vec![AsId(1), AsId(3), AsId(9)]));
    }

    #[test]
    fn shorter_prefix_is_not_smaller_without_equal_length() {
        // Compares element-wise: differs at index 1 already, so length past
        // that point never matters for equal-length inputs.
        let paths = vec![vec![AsId(1), AsId(2)], vec![AsId(1), AsId(1)]];
        assert_eq!(select_path(&paths, true), Some(&vec![AsId(1), AsId(1)]));
    }

    #[test]
    fn notiebreak_keeps_first_candidate() {
        let paths = vec![vec![AsId(9)], vec![AsId(1)]];
        assert_eq!(select_path(&paths, false), Some(&vec![AsId(9)]));
    }

    #[test]
    fn empty_input_yields_none() {
        let paths: Vec<Vec<AsId>> = Vec::new();
        assert_eq!(select_path(&paths, true), None);
    }
}
