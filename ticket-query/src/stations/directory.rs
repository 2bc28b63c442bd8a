//! Station name lookup.

use std::collections::HashMap;

use crate::domain::Telecode;

use super::data::STATIONS;

/// Station name to telecode lookup over the bundled table.
///
/// Read-only after construction; build it once at startup and share a
/// reference.
pub struct StationDirectory {
    map: HashMap<&'static str, Telecode>,
}

impl StationDirectory {
    /// Build the directory from the bundled table.
    ///
    /// Entries whose telecode fails to parse are dropped rather than
    /// failing the whole directory.
    pub fn bundled() -> Self {
        let map = STATIONS
            .iter()
            .filter_map(|(name, code)| Telecode::parse(code).ok().map(|code| (*name, code)))
            .collect();

        Self { map }
    }

    /// Look up a station's telecode by display name.
    pub fn get(&self, name: &str) -> Option<Telecode> {
        self.map.get(name).copied()
    }

    /// Number of stations in the directory.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
