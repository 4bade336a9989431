//! Transport modes and catalog transport options.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A way of travelling between destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Bus,
    Train,
    Flight,
    Car,
}

impl TransportMode {
    /// All modes, in the order travel-time tables list them.
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Bus,
        TransportMode::Train,
        TransportMode::Flight,
        TransportMode::Car,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Bus => "bus",
            TransportMode::Train => "train",
            TransportMode::Flight => "flight",
            TransportMode::Car => "car",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A per-mode quantity, such as travel hours for one segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerMode {
    pub bus: f64,
    pub train: f64,
    pub flight: f64,
    pub car: f64,
}

impl PerMode {
    /// Build by evaluating `f` for every mode.
    pub fn from_fn(mut f: impl FnMut(TransportMode) -> f64) -> Self {
        Self {
            bus: f(TransportMode::Bus),
            train: f(TransportMode::Train),
            flight: f(TransportMode::Flight),
            car: f(TransportMode::Car),
        }
    }

    pub fn get(&self, mode: TransportMode) -> f64 {
        match mode {
            TransportMode::Bus => self.bus,
            TransportMode::Train => self.train,
            TransportMode::Flight => self.flight,
            TransportMode::Car => self.car,
        }
    }
}

impl std::ops::Add for PerMode {
    type Output = PerMode;

    fn add(self, rhs: PerMode) -> PerMode {
        PerMode::from_fn(|mode| self.get(mode) + rhs.get(mode))
    }
}

impl std::iter::Sum for PerMode {
    fn sum<I: Iterator<Item = PerMode>>(iter: I) -> Self {
        iter.fold(PerMode::default(), |acc, x| acc + x)
    }
}

/// A transport entry in the catalog.
///
/// When an entry carries `price_per_km`, it replaces the default per-km
/// rate for its mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportOption {
    pub id: String,
    #[serde(rename = "type")]
    pub mode: TransportMode,
    pub name: String,
    #[serde(default)]
    pub price_per_km: Option<f64>,
}
