//! Trip cost estimation.
//!
//! The estimate is advisory: every component is computed on its own, and a
//! component that cannot be computed from the catalog is logged and replaced
//! with its fallback so that a total is always produced.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::domain::{CostEstimate, Destination, DestinationId, Hotel, HotelTier, TransportMode};

use super::config::PlannerConfig;
use super::error::PlanError;
use super::matrix::{build_matrix, total_distance_km};

/// Request for a cost estimate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostRequest {
    pub destination_ids: Vec<DestinationId>,
    pub transport_type: TransportMode,
    pub hotel_type: HotelTier,
    pub number_of_days: u32,
    pub number_of_people: u32,
    #[serde(default)]
    pub guide_ids: Vec<String>,
    #[serde(default)]
    pub is_premium: bool,
}

impl CostRequest {
    /// Validate the request shape.
    pub fn validate(&self, config: &PlannerConfig) -> Result<(), PlanError> {
        if self.destination_ids.is_empty() {
            return Err(PlanError::InvalidRequest(
                "at least one destination is required".to_string(),
            ));
        }
        if self.number_of_days == 0 {
            return Err(PlanError::InvalidRequest(
                "number of days must be at least 1".to_string(),
            ));
        }
        if self.number_of_days > config.max_trip_days {
            return Err(PlanError::InvalidRequest(format!(
                "number of days must be at most {}",
                config.max_trip_days
            )));
        }
        if self.number_of_people == 0 {
            return Err(PlanError::InvalidRequest(
                "number of people must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Cost estimator over a catalog.
pub struct CostEstimator<'a> {
    catalog: &'a Catalog,
    config: &'a PlannerConfig,
}

impl<'a> CostEstimator<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a PlannerConfig) -> Self {
        Self { catalog, config }
    }

    /// Estimate the cost of a trip.
    ///
    /// # Errors
    ///
    /// Only an invalid request shape is an error. Missing catalog data
    /// degrades individual components to their fallbacks.
    pub fn estimate(&self, request: &CostRequest) -> Result<CostEstimate, PlanError> {
        request.validate(self.config)?;
        let hotels = self.hotels_cost(request);
        Ok(self.assemble(request, hotels))
    }

    /// Estimate the cost of a trip whose hotels have already been chosen.
    ///
    /// The nightly rate is the mean price of `hotels` instead of every
    /// catalog hotel of the tier. An empty selection uses the tier estimate.
    pub fn estimate_for_hotels(
        &self,
        request: &CostRequest,
        hotels: &[Hotel],
    ) -> Result<CostEstimate, PlanError> {
        request.validate(self.config)?;
        let prices: Vec<f64> = hotels.iter().map(|h| h.price_per_person).collect();
        let cost = self.nightly(&prices, request.hotel_type)
            * f64::from(request.number_of_days)
            * f64::from(request.number_of_people);
        Ok(self.assemble(request, Ok(cost)))
    }

    fn assemble(&self, request: &CostRequest, hotels: Result<f64, PlanError>) -> CostEstimate {
        let transport = self.transport_cost(request).unwrap_or_else(|e| {
            warn!(error = %e, "transport cost unavailable, using fallback");
            0.0
        });

        let hotels = hotels.unwrap_or_else(|e| {
            warn!(error = %e, "hotel cost unavailable, using tier estimate");
            self.config.hotel_fallback.get(request.hotel_type)
                * f64::from(request.number_of_days)
                * f64::from(request.number_of_people)
        });

        let destinations = self.destinations_cost(request).unwrap_or_else(|e| {
            warn!(error = %e, "entry fees unavailable, using fallback fare");
            self.config.entry_fee_fallback
                * request.destination_ids.len() as f64
                * f64::from(request.number_of_people)
        });

        let guides = self.guides_cost(request);

        let estimate = CostEstimate::new(transport, hotels, destinations, guides);
        debug!(total = estimate.total_cost, "estimated trip cost");
        estimate
    }

    fn resolve(&self, ids: &[DestinationId]) -> Result<Vec<&'a Destination>, PlanError> {
        ids.iter()
            .map(|id| {
                self.catalog
                    .destination(id)
                    .ok_or_else(|| PlanError::UnknownDestination(id.clone()))
            })
            .collect()
    }

    /// Route distance times the per-km rate, per person.
    ///
    /// Flights add the base fare to the scaled per-km component. A route
    /// with no costed distance has no transport cost.
    fn transport_cost(&self, request: &CostRequest) -> Result<f64, PlanError> {
        let destinations = self.resolve(&request.destination_ids)?;
        let distance = total_distance_km(&build_matrix(&destinations, self.config));
        if distance <= 0.0 {
            return Ok(0.0);
        }

        let mode = request.transport_type;
        let rate = self
            .catalog
            .rate_per_km(mode)
            .unwrap_or_else(|| self.config.rate_per_km.get(mode));

        let fare = match mode {
            TransportMode::Flight => {
                self.config.flight_base_fare + self.config.flight_distance_factor * distance * rate
            }
            _ => distance * rate,
        };

        let mut cost = fare * f64::from(request.number_of_people);
        if request.is_premium {
            cost *= 1.0 - self.config.premium_transport_discount;
        }
        Ok(cost)
    }

    /// Mean nightly price of matching hotels, times nights and people.
    fn hotels_cost(&self, request: &CostRequest) -> Result<f64, PlanError> {
        let destinations = self.resolve(&request.destination_ids)?;

        let prices: Vec<f64> = destinations
            .iter()
            .flat_map(|d| self.catalog.hotels_for(&d.id))
            .filter(|h| h.tier == request.hotel_type)
            .map(|h| h.price_per_person)
            .collect();

        let nightly = self.nightly(&prices, request.hotel_type);
        Ok(nightly * f64::from(request.number_of_days) * f64::from(request.number_of_people))
    }

    /// Mean of `prices`, or the tier estimate when there are none.
    fn nightly(&self, prices: &[f64], tier: HotelTier) -> f64 {
        if prices.is_empty() {
            debug!(%tier, "no hotel to price, using tier estimate");
            return self.config.hotel_fallback.get(tier);
        }
        prices.iter().sum::<f64>() / prices.len() as f64
    }

    /// Adult entry fees of all destinations, per person.
    fn destinations_cost(&self, request: &CostRequest) -> Result<f64, PlanError> {
        let destinations = self.resolve(&request.destination_ids)?;

        let per_person: f64 = destinations
            .iter()
            .map(|d| match &d.price {
                Some(price) => price.adult(),
                None => self.config.entry_fee_fallback,
            })
            .sum();

        Ok(per_person * f64::from(request.number_of_people))
    }

    /// Day rates of the selected guides, times days.
    ///
    /// Unknown guides are logged and contribute nothing.
    fn guides_cost(&self, request: &CostRequest) -> f64 {
        let per_day: f64 = request
            .guide_ids
            .iter()
            .map(|id| match self.catalog.guide(id) {
                Some(guide) => guide.price_per_day,
                None => {
                    warn!(error = %PlanError::UnknownGuide(id.clone()), "skipping guide");
                    0.0
                }
            })
            .sum();

        per_day * f64::from(request.number_of_days)
    }
}
