//! Serialized snapshot model.
//!
//! Field names here are the wire names of the emitted JSON document:
//! `collection_date`, `airlines` (with embedded routes and flights),
//! `airports` (with embedded busiest routes), and `popular_routes`.

use chrono::{NaiveDate, NaiveDateTime};
use flight_catalog::{Alliance, Coordinates};
use serde::{Deserialize, Serialize};

/// Top-level snapshot document, serialized once per generation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightData {
    pub collection_date: NaiveDate,
    pub airlines: Vec<Airline>,
    pub airports: Vec<Airport>,
    pub popular_routes: Vec<PopularRoute>,
}

/// A sampled airline with synthesized performance and its owned routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airline {
    pub airline_id: String,
    pub name: String,
    pub country: String,
    pub headquarters: String,
    pub website: String,
    pub fleet_size: u32,
    pub destinations: u32,
    pub logo: String,
    pub alliance: Option<Alliance>,
    pub recent_performance: AirlinePerformance,
    pub routes: Vec<Route>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirlinePerformance {
    pub on_time_percentage: f64,
    pub cancellation_rate: f64,
    pub average_delay_minutes: u32,
    pub customer_satisfaction: f64,
}

/// A sampled airport with its serving relation and derived busiest routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airport {
    pub iata_code: String,
    pub name: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub website: String,
    pub terminals: u32,
    pub gates: u32,
    pub location: Coordinates,
    pub airlines_serving: Vec<String>,
    pub amenities: Vec<String>,
    pub performance_stats: AirportPerformance,
    pub busiest_routes: Vec<BusiestRoute>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirportPerformance {
    pub average_departure_delay: f64,
    pub average_arrival_delay: f64,
    pub security_wait_time_minutes: u32,
}

/// A connection owned by exactly one airline. Both endpoints are members
/// of the sampled airport set and never coincide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub origin: String,
    pub destination: String,
    pub route_id: String,
    pub distance_miles: u32,
    pub most_recent_flight: Flight,
    pub next_flight: Flight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightStatus {
    Scheduled,
    #[serde(rename = "On Time")]
    OnTime,
    Delayed,
}

/// One scheduled flight instance on a route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    pub flight_number: String,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub duration_minutes: u32,
    pub aircraft: String,
    pub status: FlightStatus,
    pub terminals: Terminals,
    pub on_time_percentage: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terminals {
    pub departure: String,
    pub arrival: String,
}

/// Derived per-airport outbound traffic entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusiestRoute {
    pub destination: String,
    pub flights_per_day: u32,
    pub airlines: Vec<String>,
}

/// Ranked airport-pair entry with synthesized pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopularRoute {
    pub route_id: String,
    pub origin_city: String,
    pub destination_city: String,
    pub distance_miles: u32,
    pub airlines_serving: Vec<String>,
    pub flights_per_day: u32,
    pub average_price: PriceLadder,
    pub average_duration_minutes: u32,
    pub best_time_to_book_days: u32,
}

/// Four-tier fare ladder in whole dollars.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriceLadder {
    pub economy: u32,
    pub premium_economy: u32,
    pub business: u32,
    pub first: u32,
}
