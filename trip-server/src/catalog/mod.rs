//! In-memory catalog of destinations, hotels, transports and guides.
//!
//! The catalog is loaded once at start-up and never mutated afterwards.
//! Everything the planner derives from it (proximity scores, itineraries)
//! is returned as new values.

mod error;
#[cfg(test)]
pub(crate) mod fixtures;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{Destination, DestinationId, Guide, Hotel, TransportMode, TransportOption};

pub use error::CatalogError;

/// Read-only reference data for the planner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    destinations: Vec<Destination>,
    #[serde(default)]
    hotels: Vec<Hotel>,
    #[serde(default)]
    transports: Vec<TransportOption>,
    #[serde(default)]
    guides: Vec<Guide>,
}

impl Catalog {
    /// Build a catalog from its parts.
    ///
    /// # Errors
    ///
    /// Returns `Err` if two destinations share an id or a hotel points at a
    /// destination that is not present.
    pub fn new(
        destinations: Vec<Destination>,
        hotels: Vec<Hotel>,
        transports: Vec<TransportOption>,
        guides: Vec<Guide>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            destinations,
            hotels,
            transports,
            guides,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and validate a catalog from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            destinations = catalog.destinations.len(),
            hotels = catalog.hotels.len(),
            transports = catalog.transports.len(),
            guides = catalog.guides.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut ids = HashSet::new();
        for dest in &self.destinations {
            if !ids.insert(&dest.id) {
                return Err(CatalogError::DuplicateDestination(dest.id.to_string()));
            }
        }

        for hotel in &self.hotels {
            if !ids.contains(&hotel.destination_id) {
                return Err(CatalogError::UnknownHotelDestination {
                    hotel: hotel.id.clone(),
                    destination: hotel.destination_id.to_string(),
                });
            }
        }

        Ok(())
    }

    /// All destinations, in catalog order.
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// All hotels, in catalog order.
    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    /// All guides, in catalog order.
    pub fn guides(&self) -> &[Guide] {
        &self.guides
    }

    /// Look up a destination by id.
    pub fn destination(&self, id: &DestinationId) -> Option<&Destination> {
        self.destinations.iter().find(|d| &d.id == id)
    }

    /// Hotels of one destination, in catalog order.
    pub fn hotels_for(&self, id: &DestinationId) -> Vec<&Hotel> {
        self.hotels
            .iter()
            .filter(|h| &h.destination_id == id)
            .collect()
    }

    /// Look up a guide by id.
    pub fn guide(&self, id: &str) -> Option<&Guide> {
        self.guides.iter().find(|g| g.id == id)
    }

    /// Per-km rate published by the first catalog transport of `mode`, if any.
    pub fn rate_per_km(&self, mode: TransportMode) -> Option<f64> {
        self.transports
            .iter()
            .filter(|t| t.mode == mode)
            .find_map(|t| t.price_per_km)
    }

    /// Returns the number of destinations.
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Returns true if the catalog has no destinations.
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}
