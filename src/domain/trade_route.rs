//! Evaluation of a single directed trade run between two settlements.

#![allow(dead_code)]

use super::cargo::CargoManifest;
use super::distance::{distance_km, format_distance, raw_distance};
use super::entities::Settlement;
use super::profit::{estimate_profit, format_profit};

/// Distance and profit for hauling a manifest from one settlement to another.
///
/// Measured from the source's departure point to the destination's arrival
/// point, so swapping the ends may change the figures.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteEstimate {
    pub source_id: String,
    pub destination_id: String,
    pub distance_km: f64,
    pub raw_distance: f64,
    pub profit: f64,
}

impl RouteEstimate {
    pub fn evaluate(source: &Settlement, destination: &Settlement, manifest: &CargoManifest) -> Self {
        let from = &source.source_point;
        let to = &destination.destination_point;
        let raw = raw_distance(from, to);

        Self {
            source_id: source.id.clone(),
            destination_id: destination.id.clone(),
            distance_km: distance_km(from, to),
            raw_distance: raw,
            profit: estimate_profit(raw, manifest),
        }
    }

    pub fn distance_label(&self) -> String {
        format_distance(self.distance_km)
    }

    pub fn profit_label(&self) -> String {
        format_profit(self.profit)
    }
}
