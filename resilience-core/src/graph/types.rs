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

//! Module containing all type definitions shared across the graph engine

use std::fmt;
use std::str::FromStr;

/// AS Number. Treated as an opaque token everywhere except the lexicographic
/// tiebreak of the path selector, where its numeric ordering matters.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub struct AsId(pub u32);

impl fmt::Display for AsId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AsId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AsId(s.parse()?))
    }
}

/// Relationship kind between two ASes, as read from a CAIDA-style record.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum RelationshipKind {
    /// ASN1 is a provider of ASN2 (`REL = -1`)
    ProviderToCustomer,
    /// ASN1 and ASN2 are peers (`REL = 0`)
    PeerToPeer,
}
