use crate::domain::DestinationId;

/// Error from trip planning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// Request shape leaves nothing to compute
    #[error("invalid trip request: {0}")]
    InvalidRequest(String),

    /// Destination id not in the catalog
    #[error("unknown destination: {0}")]
    UnknownDestination(DestinationId),

    /// Guide id not in the catalog
    #[error("unknown guide: {0}")]
    UnknownGuide(String),
}

/// A planner configuration value outside its usable range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{field} {requirement}")]
pub struct InvalidConfig {
    pub field: &'static str,
    pub requirement: &'static str,
}
