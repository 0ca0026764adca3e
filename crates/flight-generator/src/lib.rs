//! Synthetic Flight Network Generator
//!
//! Builds a self-consistent network of airlines, airports, and routes from
//! the static reference catalog, without calling any live API. One seeded
//! generation pass:
//!
//! ```text
//! catalog -> sample airlines -> sample airports (serving relation)
//!            -> airline routes (+ flight pairs)
//!            -> busiest routes per airport
//!            -> popular-route ranking
//! ```
//!
//! Randomness is threaded explicitly: every stage takes `&mut impl Rng` and
//! the binary seeds a single `ChaCha8Rng`, so a given seed reproduces the
//! same snapshot byte for byte.

use chrono::NaiveDate;
use flight_catalog::Catalog;
use rand::Rng;
use thiserror::Error;

pub mod busiest;
pub mod model;
pub mod popular;
pub mod routes;
pub mod sampler;

pub use model::FlightData;

/// Seed used when the caller does not provide one.
pub const DEFAULT_SEED: u64 = 42;

/// Earth mean radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Fallback carriers used to pad thin popular-route intersections.
pub const MAJOR_CARRIERS: [&str; 5] = ["AA", "DL", "UA", "LH", "BA"];

/// Default sampling bounds for the airline and airport subsets.
pub const AIRLINE_SAMPLE_MIN: usize = 30;
pub const AIRLINE_SAMPLE_MAX: usize = 40;
pub const AIRPORT_SAMPLE_MIN: usize = 40;
pub const AIRPORT_SAMPLE_MAX: usize = 50;

/// Bounds on how many airlines serve a single airport.
pub const MIN_SERVING_AIRLINES: usize = 5;
pub const MAX_SERVING_AIRLINES: usize = 15;

/// Airlines serving fewer sampled airports than this draw their routes from
/// the full sampled airport set instead.
pub const ROUTE_FALLBACK_THRESHOLD: usize = 4;

pub const DEFAULT_ROUTES_PER_AIRLINE: usize = 10;
pub const DEFAULT_BUSIEST_ROUTES_PER_AIRPORT: usize = 10;
pub const DEFAULT_POPULAR_ROUTES: usize = 50;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("requested {requested} {what} but the catalog holds {available}")]
    SampleExceedsCatalog {
        what: &'static str,
        requested: usize,
        available: usize,
    },
    #[error("need at least {min} airlines for the serving relation, requested {requested}")]
    TooFewAirlines { requested: usize, min: usize },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Knobs for a single generation pass.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub num_airlines: usize,
    pub num_airports: usize,
    pub routes_per_airline: usize,
    pub busiest_routes_per_airport: usize,
    pub popular_routes: usize,
}

impl GeneratorConfig {
    /// Draw the default sample counts from the seeded random source.
    pub fn sampled(rng: &mut impl Rng) -> Self {
        Self {
            num_airlines: rng.gen_range(AIRLINE_SAMPLE_MIN..=AIRLINE_SAMPLE_MAX),
            num_airports: rng.gen_range(AIRPORT_SAMPLE_MIN..=AIRPORT_SAMPLE_MAX),
            routes_per_airline: DEFAULT_ROUTES_PER_AIRLINE,
            busiest_routes_per_airport: DEFAULT_BUSIEST_ROUTES_PER_AIRPORT,
            popular_routes: DEFAULT_POPULAR_ROUTES,
        }
    }

    /// Check the sample counts against the catalog. This is the only
    /// failure point of the whole pipeline.
    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        if self.num_airlines > catalog.airlines().len() {
            return Err(GeneratorError::SampleExceedsCatalog {
                what: "airlines",
                requested: self.num_airlines,
                available: catalog.airlines().len(),
            });
        }
        if self.num_airports > catalog.airports().len() {
            return Err(GeneratorError::SampleExceedsCatalog {
                what: "airports",
                requested: self.num_airports,
                available: catalog.airports().len(),
            });
        }
        if self.num_airlines < MIN_SERVING_AIRLINES {
            return Err(GeneratorError::TooFewAirlines {
                requested: self.num_airlines,
                min: MIN_SERVING_AIRLINES,
            });
        }
        Ok(())
    }
}

/// Great-circle distance between two coordinate pairs in statute miles,
/// via the haversine formula.
pub fn haversine_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Scheduled block time in minutes for a route of the given length.
/// Models ~480 mph cruise plus a fixed taxi/climb allowance.
pub fn flight_duration_minutes(distance_miles: f64) -> u32 {
    (distance_miles / 8.0) as u32 + 30
}

/// Run the full generation pass: sample, relate, synthesize, rank.
///
/// `collection_date` stamps the snapshot and anchors the flight schedules;
/// the caller reads the clock so generation itself stays I/O-free.
pub fn generate(
    catalog: &Catalog,
    config: &GeneratorConfig,
    rng: &mut impl Rng,
    collection_date: NaiveDate,
) -> Result<FlightData> {
    config.validate(catalog)?;

    let mut airlines = sampler::sample_airlines(catalog, config, rng);
    let mut airports = sampler::sample_airports(catalog, &airlines, config, rng);

    routes::generate_airline_routes(&mut airlines, &airports, config, collection_date, rng);
    busiest::derive_busiest_routes(&mut airports, &airlines, config, rng);
    let popular_routes = popular::rank_popular_routes(&airports, config, rng);

    Ok(FlightData {
        collection_date,
        airlines,
        airports,
        popular_routes,
    })
}
