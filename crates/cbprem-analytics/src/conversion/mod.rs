//! Point-in-time conversion price resolution.
//!
//! Conversion prices are time-versioned: each instrument carries a history
//! of dated change events, and every daily bond row needs the price that
//! was in effect on its own day. This module holds the per-instrument
//! [`ConversionPriceSchedule`], the [`ConversionPriceResolver`] that turns
//! a calendar day into a full [`ConversionPriceSnapshot`], and the
//! [`SnapshotCache`] that memoizes snapshots per distinct day.

mod cache;
mod resolver;
mod schedule;

pub use cache::SnapshotCache;
pub use resolver::{ConversionPriceResolver, ConversionPriceSnapshot};
pub use schedule::ConversionPriceSchedule;
