//! Catalog subset sampling and synthetic attribute attachment.
//!
//! Airlines are sampled first; airports second, because each airport's
//! serving relation draws from the already-sampled airline codes.

use flight_catalog::{alliance_for, Catalog, AMENITIES};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use crate::model::{Airline, AirlinePerformance, Airport, AirportPerformance};
use crate::{GeneratorConfig, MAX_SERVING_AIRLINES, MIN_SERVING_AIRLINES};

/// Round to one decimal place.
fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Sample `num_airlines` catalog airlines without replacement and attach
/// fresh recent-performance metrics. Routes are filled in later.
pub fn sample_airlines(
    catalog: &Catalog,
    config: &GeneratorConfig,
    rng: &mut impl Rng,
) -> Vec<Airline> {
    let selected: Vec<_> = catalog
        .airlines()
        .choose_multiple(rng, config.num_airlines)
        .collect();

    let mut airlines = Vec::with_capacity(selected.len());
    for info in selected {
        airlines.push(Airline {
            airline_id: info.code.clone(),
            name: info.name.clone(),
            country: info.country.clone(),
            headquarters: info.headquarters.clone(),
            website: info.website.clone(),
            fleet_size: info.fleet_size,
            destinations: info.destinations,
            logo: info.logo.clone(),
            alliance: alliance_for(&info.code),
            recent_performance: AirlinePerformance {
                on_time_percentage: round1(rng.gen_range(75.0..95.0)),
                cancellation_rate: round1(rng.gen_range(0.5..3.0)),
                average_delay_minutes: rng.gen_range(5.0..30.0_f64).round() as u32,
                customer_satisfaction: round1(rng.gen_range(3.0..4.8)),
            },
            routes: Vec::new(),
        });
    }

    info!(
        "Sampled {} airlines from catalog of {}",
        airlines.len(),
        catalog.airlines().len()
    );

    airlines
}

/// Sample `num_airports` catalog airports without replacement, draw each
/// one's serving airlines from the sampled airline set, and attach
/// amenities and performance stats. Busiest routes are filled in later.
pub fn sample_airports(
    catalog: &Catalog,
    airlines: &[Airline],
    config: &GeneratorConfig,
    rng: &mut impl Rng,
) -> Vec<Airport> {
    let airline_ids: Vec<String> = airlines.iter().map(|a| a.airline_id.clone()).collect();

    let selected: Vec<_> = catalog
        .airports()
        .choose_multiple(rng, config.num_airports)
        .collect();

    let mut airports = Vec::with_capacity(selected.len());
    for info in selected {
        let serving_count =
            rng.gen_range(MIN_SERVING_AIRLINES..=MAX_SERVING_AIRLINES.min(airline_ids.len()));
        let airlines_serving: Vec<String> = airline_ids
            .choose_multiple(rng, serving_count)
            .cloned()
            .collect();

        let amenity_count = rng.gen_range(5..=10);
        let amenities: Vec<String> = AMENITIES
            .choose_multiple(rng, amenity_count)
            .map(|s| s.to_string())
            .collect();

        airports.push(Airport {
            iata_code: info.code.clone(),
            name: info.name.clone(),
            city: info.city.clone(),
            state: info.state.clone(),
            country: info.country.clone(),
            website: info.website.clone(),
            terminals: info.terminals,
            gates: info.gates,
            location: info.location,
            airlines_serving,
            amenities,
            performance_stats: AirportPerformance {
                average_departure_delay: round1(rng.gen_range(5.0..25.0)),
                average_arrival_delay: round1(rng.gen_range(5.0..20.0)),
                security_wait_time_minutes: rng.gen_range(5..=30),
            },
            busiest_routes: Vec::new(),
        });
    }

    info!(
        "Sampled {} airports from catalog of {}",
        airports.len(),
        catalog.airports().len()
    );

    airports
}
