//! Bond-to-equity linkage built from instrument metadata.

use std::collections::HashMap;

use cbprem_core::types::InstrumentInfo;
use cbprem_core::{EquityCode, InstrumentId};

/// Resolves the static 1:1 relationship between convertible bonds and
/// their underlying equities, in both directions, plus display names.
///
/// Duplicate metadata rows for an instrument are a data-quality condition:
/// the first row wins and a diagnostic is logged, never an error.
#[derive(Debug, Clone, Default)]
pub struct InstrumentLinker {
    equity_by_instrument: HashMap<InstrumentId, EquityCode>,
    instrument_by_equity: HashMap<EquityCode, InstrumentId>,
    names: HashMap<InstrumentId, String>,
}

impl InstrumentLinker {
    /// Builds the linker from the instrument metadata table.
    #[must_use]
    pub fn from_instruments(instruments: &[InstrumentInfo]) -> Self {
        let mut linker = Self::default();
        for info in instruments {
            if linker
                .equity_by_instrument
                .contains_key(&info.instrument_id)
            {
                tracing::warn!(instrument_id = %info.instrument_id, "duplicate instrument metadata row ignored");
                continue;
            }
            linker
                .equity_by_instrument
                .insert(info.instrument_id.clone(), info.equity_code.clone());
            linker
                .instrument_by_equity
                .insert(info.equity_code.clone(), info.instrument_id.clone());
            linker
                .names
                .insert(info.instrument_id.clone(), info.display_name.clone());
        }
        linker
    }

    /// The underlying equity for a bond, if linked.
    #[must_use]
    pub fn equity_for(&self, instrument_id: &InstrumentId) -> Option<&EquityCode> {
        self.equity_by_instrument.get(instrument_id)
    }

    /// The bond converting into an equity, if linked.
    #[must_use]
    pub fn instrument_for(&self, equity_code: &EquityCode) -> Option<&InstrumentId> {
        self.instrument_by_equity.get(equity_code)
    }

    /// The display name of a bond, if known.
    #[must_use]
    pub fn display_name(&self, instrument_id: &InstrumentId) -> Option<&str> {
        self.names.get(instrument_id).map(String::as_str)
    }

    /// Finds a bond by its display name.
    #[must_use]
    pub fn find_by_name(&self, display_name: &str) -> Option<&InstrumentId> {
        self.names
            .iter()
            .find(|(_, name)| name.as_str() == display_name)
            .map(|(id, _)| id)
    }

    /// Number of linked instruments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.equity_by_instrument.len()
    }

    /// Whether no instrument is linked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.equity_by_instrument.is_empty()
    }
}
