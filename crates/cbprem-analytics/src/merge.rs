//! Left join of equity close/volume onto the bond daily series.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use cbprem_core::types::{BondRecord, EnrichedBondRecord, EquityRecord};
use cbprem_core::{Date, EquityCode};

use crate::linker::InstrumentLinker;

/// Left-joins equity data onto bond rows by (day, linked equity code).
///
/// Every bond row is preserved exactly once. A bond whose instrument has no
/// equity link, or whose linked equity has no row on that day, keeps `None`
/// equity fields. Duplicate equity rows for one (day, code) key are a
/// data-quality condition: the first row wins and a diagnostic is logged.
///
/// The premium is not computed here; `premium_rate` on the returned rows is
/// always `None`.
#[must_use]
pub fn merge_equity_close(
    bonds: &[BondRecord],
    equities: &[EquityRecord],
    linker: &InstrumentLinker,
) -> Vec<EnrichedBondRecord> {
    let mut index: HashMap<(Date, &EquityCode), &EquityRecord> = HashMap::new();
    for equity in equities {
        match index.entry((equity.day, &equity.equity_code)) {
            Entry::Vacant(slot) => {
                slot.insert(equity);
            }
            Entry::Occupied(_) => {
                tracing::warn!(day = %equity.day, equity_code = %equity.equity_code, "duplicate equity row ignored");
            }
        }
    }

    let mut unlinked: HashSet<&str> = HashSet::new();
    bonds
        .iter()
        .map(|bond| {
            let mut row = EnrichedBondRecord::from_bond(bond.clone());
            match linker.equity_for(&bond.instrument_id) {
                Some(code) => {
                    if let Some(equity) = index.get(&(bond.day, code)) {
                        row.equity_close = equity.close;
                        row.equity_volume = equity.volume;
                    }
                }
                None => {
                    if unlinked.insert(bond.instrument_id.as_str()) {
                        tracing::warn!(instrument_id = %bond.instrument_id, "no equity link for instrument");
                    }
                }
            }
            row
        })
        .collect()
}
