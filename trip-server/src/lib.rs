//! Trip planner server.
//!
//! A planning engine for multi-destination trips: distances, feasibility,
//! transport recommendation, cost estimate, hotel selection and a
//! day-by-day itinerary, served as a JSON API.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod planner;
pub mod web;
