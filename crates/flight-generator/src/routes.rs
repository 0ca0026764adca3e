//! Route and flight synthesis per airline.
//!
//! Each airline's routes are drawn from the unordered pairs of airports it
//! serves: enumerate, shuffle, take the first `routes_per_airline`. Every
//! route carries two flight instances: the most recent departure and the
//! identical next-day leg.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use flight_catalog::AIRCRAFT_TYPES;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::model::{Airline, Airport, Flight, FlightStatus, Route, Terminals};
use crate::{flight_duration_minutes, haversine_miles, GeneratorConfig, ROUTE_FALLBACK_THRESHOLD};

/// Status draw pool. `Scheduled` appears twice to double its weight.
const STATUS_POOL: [FlightStatus; 4] = [
    FlightStatus::Scheduled,
    FlightStatus::OnTime,
    FlightStatus::Delayed,
    FlightStatus::Scheduled,
];

const DEPARTURE_TERMINALS: [&str; 8] = ["A", "B", "C", "D", "E", "F", "T", "S"];

/// Populate each airline's route list from the airports it serves.
pub fn generate_airline_routes(
    airlines: &mut [Airline],
    airports: &[Airport],
    config: &GeneratorConfig,
    collection_date: NaiveDate,
    rng: &mut impl Rng,
) {
    let by_code: HashMap<&str, &Airport> = airports
        .iter()
        .map(|a| (a.iata_code.as_str(), a))
        .collect();
    let all_codes: Vec<&str> = airports.iter().map(|a| a.iata_code.as_str()).collect();

    for airline in airlines.iter_mut() {
        let mut serving: Vec<&str> = airports
            .iter()
            .filter(|a| a.airlines_serving.contains(&airline.airline_id))
            .map(|a| a.iata_code.as_str())
            .collect();

        // Too thin a network to pair up: fall back to the full sampled set
        if serving.len() < ROUTE_FALLBACK_THRESHOLD {
            debug!(
                "Airline {} serves only {} airports, drawing routes from all {}",
                airline.airline_id,
                serving.len(),
                all_codes.len()
            );
            serving = all_codes.clone();
        }

        let mut pairs: Vec<(&str, &str)> = Vec::new();
        for i in 0..serving.len() {
            for j in (i + 1)..serving.len() {
                pairs.push((serving[i], serving[j]));
            }
        }
        pairs.shuffle(rng);
        pairs.truncate(config.routes_per_airline);

        let mut routes = Vec::with_capacity(pairs.len());
        for (origin, destination) in pairs {
            // Both codes come from the sampled airport slice
            let origin_airport = by_code[origin];
            let destination_airport = by_code[destination];

            let distance = haversine_miles(
                origin_airport.location.latitude,
                origin_airport.location.longitude,
                destination_airport.location.latitude,
                destination_airport.location.longitude,
            );

            let (most_recent_flight, next_flight) =
                synthesize_flight_pair(&airline.airline_id, distance, collection_date, rng);

            routes.push(Route {
                origin: origin.to_string(),
                destination: destination.to_string(),
                route_id: format!("{}-{}-{}", airline.airline_id, origin, destination),
                distance_miles: distance as u32,
                most_recent_flight,
                next_flight,
            });
        }
        airline.routes = routes;
    }

    let total: usize = airlines.iter().map(|a| a.routes.len()).sum();
    info!(
        "Generated {} routes across {} airlines",
        total,
        airlines.len()
    );
}

/// Synthesize the most-recent flight and its next-day twin for a route.
///
/// The pair shares flight number, aircraft, terminals, duration, and
/// on-time percentage; the next-day leg departs exactly 24 hours later and
/// re-rolls its status. Flight numbers are not unique across routes.
fn synthesize_flight_pair(
    airline_id: &str,
    distance_miles: f64,
    date: NaiveDate,
    rng: &mut impl Rng,
) -> (Flight, Flight) {
    let duration_minutes = flight_duration_minutes(distance_miles);

    // Departures land on the 5-minute grid during daytime hours
    let hour = rng.gen_range(6..=20);
    let minute = 5 * rng.gen_range(0..12);
    let departure = date
        .and_hms_opt(hour, minute, 0)
        .expect("departure grid is a valid wall-clock time");
    let arrival = departure + Duration::minutes(i64::from(duration_minutes));

    let flight_number = format!("{}{}", airline_id, rng.gen_range(100..=9999));
    let aircraft = AIRCRAFT_TYPES[rng.gen_range(0..AIRCRAFT_TYPES.len())].to_string();
    let terminals = Terminals {
        departure: DEPARTURE_TERMINALS[rng.gen_range(0..DEPARTURE_TERMINALS.len())].to_string(),
        arrival: rng.gen_range(1u8..=9).to_string(),
    };
    let on_time_percentage = rng.gen_range(70..=95);

    let most_recent = Flight {
        flight_number: flight_number.clone(),
        departure,
        arrival,
        duration_minutes,
        aircraft: aircraft.clone(),
        status: STATUS_POOL[rng.gen_range(0..STATUS_POOL.len())],
        terminals: terminals.clone(),
        on_time_percentage,
    };

    let next = Flight {
        flight_number,
        departure: departure + Duration::days(1),
        arrival: arrival + Duration::days(1),
        duration_minutes,
        aircraft,
        status: STATUS_POOL[rng.gen_range(0..STATUS_POOL.len())],
        terminals,
        on_time_percentage,
    };

    (most_recent, next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler;
    use flight_catalog::Catalog;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use chrono::Timelike;

    fn test_config() -> GeneratorConfig {
        GeneratorConfig {
            num_airlines: 35,
            num_airports: 45,
            routes_per_airline: 10,
            busiest_routes_per_airport: 10,
            popular_routes: 50,
        }
    }

    fn generate_fixture() -> (Vec<Airline>, Vec<Airport>) {
        let catalog = Catalog::builtin();
        let config = test_config();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut airlines = sampler::sample_airlines(&catalog, &config, &mut rng);
        let airports = sampler::sample_airports(&catalog, &airlines, &config, &mut rng);
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        generate_airline_routes(&mut airlines, &airports, &config, date, &mut rng);
        (airlines, airports)
    }

    #[test]
    fn test_route_caps_and_endpoints() {
        let (airlines, airports) = generate_fixture();
        let codes: Vec<&str> = airports.iter().map(|a| a.iata_code.as_str()).collect();

        for airline in &airlines {
            assert!(airline.routes.len() <= 10);
            for route in &airline.routes {
                assert_ne!(route.origin, route.destination);
                assert!(codes.contains(&route.origin.as_str()));
                assert!(codes.contains(&route.destination.as_str()));
                assert_eq!(
                    route.route_id,
                    format!("{}-{}-{}", airline.airline_id, route.origin, route.destination)
                );
            }
        }
    }

    #[test]
    fn test_flight_pair_shares_identity_fields() {
        let (airlines, _) = generate_fixture();

        for airline in &airlines {
            for route in &airline.routes {
                let recent = &route.most_recent_flight;
                let next = &route.next_flight;

                assert_eq!(recent.flight_number, next.flight_number);
                assert_eq!(recent.aircraft, next.aircraft);
                assert_eq!(recent.duration_minutes, next.duration_minutes);
                assert_eq!(recent.on_time_percentage, next.on_time_percentage);
                assert_eq!(recent.terminals.departure, next.terminals.departure);
                assert_eq!(recent.terminals.arrival, next.terminals.arrival);
                assert_eq!(next.departure - recent.departure, Duration::days(1));
                assert_eq!(next.arrival - recent.arrival, Duration::days(1));
            }
        }
    }

    #[test]
    fn test_flight_schedule_on_grid() {
        let (airlines, _) = generate_fixture();

        for airline in &airlines {
            for route in &airline.routes {
                let dep = route.most_recent_flight.departure;
                assert!((6..=20).contains(&dep.hour()));
                assert_eq!(dep.minute() % 5, 0);
                assert_eq!(dep.second(), 0);

                let expected =
                    flight_duration_minutes(f64::from(route.distance_miles));
                // distance_miles is truncated, so the derived duration may
                // differ from the stored one by at most a minute
                let stored = route.most_recent_flight.duration_minutes;
                assert!(stored == expected || stored == expected + 1);
            }
        }
    }

    #[test]
    fn test_flight_number_format() {
        let (airlines, _) = generate_fixture();

        for airline in &airlines {
            for route in &airline.routes {
                let number = &route.most_recent_flight.flight_number;
                let suffix = number
                    .strip_prefix(airline.airline_id.as_str())
                    .expect("flight number starts with airline code");
                let suffix: u32 = suffix.parse().expect("numeric suffix");
                assert!((100..=9999).contains(&suffix));
            }
        }
    }

    #[test]
    fn test_on_time_percentage_bounds() {
        let (airlines, _) = generate_fixture();

        for airline in &airlines {
            for route in &airline.routes {
                let pct = route.most_recent_flight.on_time_percentage;
                assert!((70..=95).contains(&pct));
                assert!(DEPARTURE_TERMINALS
                    .contains(&route.most_recent_flight.terminals.departure.as_str()));
                let gate: u8 = route.most_recent_flight.terminals.arrival.parse().unwrap();
                assert!((1..=9).contains(&gate));
            }
        }
    }
}
