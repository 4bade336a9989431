//! Planner façade.
//!
//! `TripPlanner` resolves destination ids against the catalog and hands the
//! resolved destinations to the individual calculations.

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::domain::{
    BookingStatus, CostEstimate, Destination, DestinationId, Hotel, HotelTier, ItineraryDay,
    TransportMode, TravelStyle, TripPlan,
};

use super::config::PlannerConfig;
use super::cost::{CostEstimator, CostRequest};
use super::error::PlanError;
use super::feasibility::{
    FeasibilityReport, FeasibilityRequest, SuggestTransportRequest, TransportSuggestion,
    check_feasibility, suggest_transport,
};
use super::itinerary::{ItineraryGenerator, ItineraryRequest};
use super::matrix::{MatrixEntry, build_matrix};
use super::proximity::{average_proximity_score, nearby_hotels, select_hotels, tier_pools};

fn default_people() -> u32 {
    1
}

/// Request for a complete trip plan.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    pub destination_ids: Vec<DestinationId>,
    pub transport_type: TransportMode,
    #[serde(default)]
    pub hotel_type: HotelTier,
    pub number_of_days: u32,
    #[serde(default = "default_people")]
    pub number_of_people: u32,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub travel_style: TravelStyle,
    #[serde(default)]
    pub guide_ids: Vec<String>,
    #[serde(default)]
    pub is_premium: bool,
}

impl PlanRequest {
    fn itinerary_request(&self) -> ItineraryRequest {
        ItineraryRequest {
            destination_ids: self.destination_ids.clone(),
            transport_type: self.transport_type,
            number_of_days: self.number_of_days,
            start_date: self.start_date,
            travel_style: Some(self.travel_style),
            is_premium: self.is_premium,
        }
    }

    fn cost_request(&self) -> CostRequest {
        CostRequest {
            destination_ids: self.destination_ids.clone(),
            transport_type: self.transport_type,
            hotel_type: self.hotel_type,
            number_of_days: self.number_of_days,
            number_of_people: self.number_of_people,
            guide_ids: self.guide_ids.clone(),
            is_premium: self.is_premium,
        }
    }
}

/// Trip planner over a catalog and configuration.
pub struct TripPlanner<'a> {
    catalog: &'a Catalog,
    config: &'a PlannerConfig,
}

impl<'a> TripPlanner<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a PlannerConfig) -> Self {
        Self { catalog, config }
    }

    /// Look up every id, in order.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` for an empty list, `UnknownDestination` for the
    /// first id missing from the catalog.
    pub fn resolve(&self, ids: &[DestinationId]) -> Result<Vec<&'a Destination>, PlanError> {
        if ids.is_empty() {
            return Err(PlanError::InvalidRequest(
                "at least one destination is required".to_string(),
            ));
        }
        ids.iter()
            .map(|id| {
                self.catalog
                    .destination(id)
                    .ok_or_else(|| PlanError::UnknownDestination(id.clone()))
            })
            .collect()
    }

    /// Distance matrix for an ordered id list. An empty list gives an empty
    /// matrix.
    pub fn build_matrix(&self, ids: &[DestinationId]) -> Result<Vec<MatrixEntry>, PlanError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let destinations = self.resolve(ids)?;
        Ok(build_matrix(&destinations, self.config))
    }

    pub fn check_feasibility(
        &self,
        request: &FeasibilityRequest,
    ) -> Result<FeasibilityReport, PlanError> {
        let destinations = self.resolve(&request.destination_ids)?;
        let report = check_feasibility(
            &destinations,
            request.transport_type,
            request.number_of_days,
            self.config,
        );
        debug!(
            feasible = report.feasible,
            days_needed = report.days_needed,
            "checked feasibility"
        );
        Ok(report)
    }

    pub fn suggest_transport(
        &self,
        request: &SuggestTransportRequest,
    ) -> Result<TransportSuggestion, PlanError> {
        let destinations = self.resolve(&request.destination_ids)?;
        let suggestion = suggest_transport(
            &destinations,
            request.number_of_days,
            request.is_premium,
            self.config,
        );
        debug!(recommended = %suggestion.recommended_type, "suggested transport");
        Ok(suggestion)
    }

    /// Cost estimate. Unknown ids degrade to fallbacks instead of failing.
    pub fn estimate_cost(&self, request: &CostRequest) -> Result<CostEstimate, PlanError> {
        CostEstimator::new(self.catalog, self.config).estimate(request)
    }

    pub fn generate_itinerary(
        &self,
        request: &ItineraryRequest,
    ) -> Result<Vec<ItineraryDay>, PlanError> {
        request.validate(self.config)?;
        let destinations = self.resolve(&request.destination_ids)?;
        ItineraryGenerator::new(self.catalog, self.config).generate(&destinations, request)
    }

    /// Nearest hotels of one destination, closest first.
    ///
    /// `limit` defaults to the configured nearby-hotel limit.
    pub fn nearby_hotels(
        &self,
        id: &DestinationId,
        limit: Option<usize>,
    ) -> Result<Vec<Hotel>, PlanError> {
        let destination = self
            .catalog
            .destination(id)
            .ok_or_else(|| PlanError::UnknownDestination(id.clone()))?;
        Ok(nearby_hotels(
            destination,
            &self.catalog.hotels_for(id),
            limit.unwrap_or(self.config.nearby_hotel_limit),
        ))
    }

    /// Assemble a pending trip plan.
    pub fn plan_trip(&self, request: &PlanRequest) -> Result<TripPlan, PlanError> {
        let cost_request = request.cost_request();
        cost_request.validate(self.config)?;

        let destinations = self.resolve(&request.destination_ids)?;
        let itinerary = ItineraryGenerator::new(self.catalog, self.config)
            .generate(&destinations, &request.itinerary_request())?;

        let pools = tier_pools(self.catalog, &destinations, request.hotel_type);
        let hotels = select_hotels(&pools, request.travel_style);
        let hotel_proximity_score = average_proximity_score(&hotels);

        let cost = CostEstimator::new(self.catalog, self.config)
            .estimate_for_hotels(&cost_request, &hotels)?;

        debug!(
            days = itinerary.len(),
            hotels = hotels.len(),
            total = cost.total_cost,
            "assembled trip plan"
        );

        Ok(TripPlan {
            user_id: request.user_id.clone(),
            destination_ids: request.destination_ids.clone(),
            transport_type: request.transport_type,
            hotel_type: request.hotel_type,
            number_of_days: request.number_of_days,
            number_of_people: request.number_of_people,
            start_date: request.start_date,
            travel_style: request.travel_style,
            is_premium: request.is_premium,
            itinerary,
            hotels,
            hotel_proximity_score,
            cost,
            status: BookingStatus::Pending,
        })
    }
}
