//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::{
    ClockTime, CostEstimate, DestinationId, Hotel, ItineraryDay, ScheduledActivity, TripPlan,
};
use crate::planner::{
    CostRequest, FeasibilityReport, FeasibilityRequest, ItineraryRequest, MatrixEntry, PlanError,
    PlanRequest, SuggestTransportRequest, TransportSuggestion, day_schedule,
};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/destinations", get(list_destinations))
        .route("/api/destinations/:id/hotels", get(destination_hotels))
        .route("/api/trip/matrix", post(build_matrix))
        .route("/api/trip/feasibility", post(check_feasibility))
        .route("/api/trip/suggest-transport", post(suggest_transport))
        .route("/api/trip/estimate", post(estimate_cost))
        .route("/api/trip/itinerary", post(generate_itinerary))
        .route("/api/trip/plan", post(plan_trip))
        .route("/api/schedule", get(day_schedule_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Parse a JSON body, logging it on failure.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(body), "invalid request body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// All catalog destinations.
async fn list_destinations(
    State(state): State<AppState>,
    Query(query): Query<DestinationsQuery>,
) -> Result<Json<Vec<DestinationSummary>>, AppError> {
    let at = query
        .at
        .as_deref()
        .map(ClockTime::parse_hhmm)
        .transpose()
        .map_err(|e| AppError::BadRequest {
            message: format!("Invalid time {}: {e}", query.at.as_deref().unwrap_or("")),
        })?;

    let summaries = state
        .catalog
        .destinations()
        .iter()
        .map(|d| DestinationSummary::from_destination(d, at.and_then(|t| d.crowd_at(t))))
        .collect();

    Ok(Json(summaries))
}

/// Nearest hotels of a destination.
async fn destination_hotels(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<HotelsQuery>,
) -> Result<Json<Vec<Hotel>>, AppError> {
    let id = DestinationId::new(id);
    let hotels = state
        .planner()
        .nearby_hotels(&id, query.limit)
        .map_err(|_| AppError::NotFound {
            message: format!("Destination {id} not found"),
        })?;
    Ok(Json(hotels))
}

async fn build_matrix(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<MatrixEntry>>, AppError> {
    let req: MatrixRequest = parse_body(&body)?;
    Ok(Json(state.planner().build_matrix(&req.destination_ids)?))
}

async fn check_feasibility(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<FeasibilityReport>, AppError> {
    let req: FeasibilityRequest = parse_body(&body)?;
    Ok(Json(state.planner().check_feasibility(&req)?))
}

async fn suggest_transport(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TransportSuggestion>, AppError> {
    let req: SuggestTransportRequest = parse_body(&body)?;
    Ok(Json(state.planner().suggest_transport(&req)?))
}

async fn estimate_cost(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CostEstimate>, AppError> {
    let req: CostRequest = parse_body(&body)?;
    Ok(Json(state.planner().estimate_cost(&req)?))
}

async fn generate_itinerary(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<ItineraryDay>>, AppError> {
    let req: ItineraryRequest = parse_body(&body)?;
    Ok(Json(state.planner().generate_itinerary(&req)?))
}

/// Assemble a pending trip plan for the booking store.
async fn plan_trip(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TripPlan>, AppError> {
    let req: PlanRequest = parse_body(&body)?;
    Ok(Json(state.planner().plan_trip(&req)?))
}

/// Detailed schedule for one day.
async fn day_schedule_handler(Query(query): Query<ScheduleQuery>) -> Json<Vec<ScheduledActivity>> {
    Json(day_schedule(query.kind, query.style, &query.destination))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::InvalidRequest(message) => AppError::BadRequest { message },
            // Ids in a request body are part of the request, not a resource
            PlanError::UnknownDestination(_) | PlanError::UnknownGuide(_) => {
                AppError::BadRequest {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::golden_triangle;
    use crate::domain::{BookingStatus, TransportMode, TravelStyle};
    use crate::planner::{DayKind, PlannerConfig};

    fn state() -> AppState {
        AppState::new(golden_triangle(), PlannerConfig::default())
    }

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn lists_every_destination() {
        let Json(list) = list_destinations(State(state()), Query(DestinationsQuery::default()))
            .await
            .unwrap();
        let ids: Vec<&str> = list.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["agra", "jaipur", "delhi"]);
        assert!(list.iter().all(|d| d.crowd_level.is_none()));
    }

    #[tokio::test]
    async fn rejects_malformed_crowd_time() {
        let query = DestinationsQuery {
            at: Some("noon".into()),
        };
        let err = list_destinations(State(state()), Query(query)).await.unwrap_err();
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn hotels_for_known_destination() {
        let Json(hotels) = destination_hotels(
            State(state()),
            Path("agra".to_string()),
            Query(HotelsQuery { limit: Some(1) }),
        )
        .await
        .unwrap();
        assert_eq!(hotels.len(), 1);
        assert_eq!(hotels[0].id, "agra-near");
    }

    #[tokio::test]
    async fn hotels_for_unknown_destination_is_not_found() {
        let err = destination_hotels(
            State(state()),
            Path("atlantis".to_string()),
            Query(HotelsQuery::default()),
        )
        .await
        .unwrap_err();
        assert_eq!(status_of(err), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn matrix_follows_request_order() {
        let body = Bytes::from(r#"{"destinationIds": ["delhi", "agra", "jaipur"]}"#);
        let Json(matrix) = build_matrix(State(state()), body).await.unwrap();

        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix[0].from_id.as_str(), "delhi");
        assert_eq!(matrix[1].to_id.as_str(), "jaipur");
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let err = build_matrix(State(state()), Bytes::from("{not json"))
            .await
            .unwrap_err();
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_destination_in_body_is_bad_request() {
        let body = Bytes::from(
            r#"{
                "destinationIds": ["agra", "atlantis"],
                "transportType": "bus",
                "numberOfDays": 3
            }"#,
        );
        let err = check_feasibility(State(state()), body).await.unwrap_err();
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn feasibility_over_http() {
        let body = Bytes::from(
            r#"{
                "destinationIds": ["agra", "jaipur"],
                "transportType": "train",
                "numberOfDays": 1
            }"#,
        );
        let Json(report) = check_feasibility(State(state()), body).await.unwrap();
        assert!(!report.feasible);
        assert_eq!(report.days_short, Some(report.days_needed - 1));
    }

    #[tokio::test]
    async fn suggestion_over_http() {
        let body = Bytes::from(
            r#"{"destinationIds": ["agra", "jaipur"], "numberOfDays": 3, "isPremium": true}"#,
        );
        let Json(suggestion) = suggest_transport(State(state()), body).await.unwrap();
        // About 218 km over 3 days
        assert_eq!(suggestion.recommended_type, TransportMode::Bus);
        assert!(suggestion.premium_advantages.is_some());
    }

    #[tokio::test]
    async fn estimate_over_http() {
        let body = Bytes::from(
            r#"{
                "destinationIds": ["agra"],
                "transportType": "car",
                "hotelType": "standard",
                "numberOfDays": 1,
                "numberOfPeople": 2
            }"#,
        );
        let Json(estimate) = estimate_cost(State(state()), body).await.unwrap();
        assert_eq!(estimate.destinations_cost, 2200.0);
        assert_eq!(estimate.transport_cost, 0.0);
    }

    #[tokio::test]
    async fn zero_people_estimate_is_bad_request() {
        let body = Bytes::from(
            r#"{
                "destinationIds": ["agra"],
                "transportType": "car",
                "hotelType": "budget",
                "numberOfDays": 1,
                "numberOfPeople": 0
            }"#,
        );
        let err = estimate_cost(State(state()), body).await.unwrap_err();
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn itinerary_over_http() {
        let body = Bytes::from(
            r#"{
                "destinationIds": ["agra", "jaipur"],
                "transportType": "train",
                "numberOfDays": 4,
                "startDate": "2025-10-01"
            }"#,
        );
        let Json(days) = generate_itinerary(State(state()), body).await.unwrap();
        assert_eq!(days.len(), 4);
        assert!(days[1].is_transit_day);
        assert_eq!(days[3].date.to_string(), "2025-10-04");
    }

    #[tokio::test]
    async fn oversized_trip_is_bad_request() {
        let body = Bytes::from(
            r#"{
                "destinationIds": ["agra"],
                "transportType": "train",
                "numberOfDays": 4294967295,
                "startDate": "2025-10-01"
            }"#,
        );
        let err = generate_itinerary(State(state()), body.clone())
            .await
            .unwrap_err();
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);

        let err = plan_trip(State(state()), body).await.unwrap_err();
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn plan_over_http_is_pending() {
        let body = Bytes::from(
            r#"{
                "userId": "u-42",
                "destinationIds": ["agra", "jaipur", "delhi"],
                "transportType": "car",
                "hotelType": "standard",
                "numberOfDays": 6,
                "numberOfPeople": 2,
                "startDate": "2025-10-01",
                "travelStyle": "base-hotel",
                "guideIds": ["g2"]
            }"#,
        );
        let Json(plan) = plan_trip(State(state()), body).await.unwrap();
        assert_eq!(plan.status, BookingStatus::Pending);
        assert_eq!(plan.travel_style, TravelStyle::BaseHotel);
        assert_eq!(plan.hotels.len(), 1);
        assert_eq!(plan.itinerary.len(), 6);
        assert_eq!(plan.cost.guides_cost, 12000.0);
    }

    #[tokio::test]
    async fn schedule_over_http() {
        let query = ScheduleQuery {
            kind: DayKind::Full,
            style: TravelStyle::BaseHotel,
            destination: "Amber Fort".into(),
        };
        let Json(schedule) = day_schedule_handler(Query(query)).await;
        assert_eq!(schedule[1].activity, "Explore Amber Fort");
    }

    #[tokio::test]
    async fn error_body_shape() {
        let response = AppError::NotFound {
            message: "gone".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "gone");
    }
}
