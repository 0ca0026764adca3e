//! Busiest-route derivation per airport.
//!
//! Real route destinations come first, deduplicated in first-seen order
//! (airline order, then that airline's route order). Airports with thin
//! outbound traffic are padded from a shuffled pool of the remaining
//! sampled airports so every airport gets a full table when possible.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use crate::model::{Airline, Airport, BusiestRoute};
use crate::GeneratorConfig;

/// Attach up to `busiest_routes_per_airport` outbound entries to each
/// airport, each with a synthesized daily-flight count and a sample of the
/// airport's serving airlines.
pub fn derive_busiest_routes(
    airports: &mut [Airport],
    airlines: &[Airline],
    config: &GeneratorConfig,
    rng: &mut impl Rng,
) {
    let all_codes: Vec<String> = airports.iter().map(|a| a.iata_code.clone()).collect();
    let cap = config.busiest_routes_per_airport;

    for airport in airports.iter_mut() {
        let mut destinations: Vec<String> = Vec::new();
        for airline in airlines {
            for route in &airline.routes {
                if route.origin == airport.iata_code && !destinations.contains(&route.destination)
                {
                    destinations.push(route.destination.clone());
                }
            }
        }

        // Pad thin tables from the other sampled airports
        let mut pool: Vec<&String> = all_codes
            .iter()
            .filter(|code| **code != airport.iata_code)
            .collect();
        pool.shuffle(rng);
        for code in pool {
            if destinations.len() >= cap {
                break;
            }
            if !destinations.contains(code) {
                destinations.push(code.clone());
            }
        }
        destinations.truncate(cap);

        let serving = &airport.airlines_serving;
        let mut busiest = Vec::with_capacity(destinations.len());
        for destination in destinations {
            busiest.push(BusiestRoute {
                destination,
                flights_per_day: rng.gen_range(5..=50),
                airlines: serving
                    .choose_multiple(rng, 3.min(serving.len()))
                    .cloned()
                    .collect(),
            });
        }
        airport.busiest_routes = busiest;
    }

    info!("Derived busiest routes for {} airports", airports.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AirlinePerformance, AirportPerformance, Route};
    use crate::{routes, sampler};
    use flight_catalog::{Catalog, Coordinates};
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn test_config() -> GeneratorConfig {
        GeneratorConfig {
            num_airlines: 35,
            num_airports: 45,
            routes_per_airline: 10,
            busiest_routes_per_airport: 10,
            popular_routes: 50,
        }
    }

    fn make_airport(code: &str, serving: &[&str]) -> Airport {
        Airport {
            iata_code: code.to_string(),
            name: code.to_string(),
            city: code.to_string(),
            state: String::new(),
            country: "Testland".to_string(),
            website: String::new(),
            terminals: 2,
            gates: 50,
            location: Coordinates {
                latitude: 0.0,
                longitude: 0.0,
            },
            airlines_serving: serving.iter().map(|s| s.to_string()).collect(),
            amenities: Vec::new(),
            performance_stats: AirportPerformance {
                average_departure_delay: 10.0,
                average_arrival_delay: 10.0,
                security_wait_time_minutes: 15,
            },
            busiest_routes: Vec::new(),
        }
    }

    fn make_airline(code: &str, route_pairs: &[(&str, &str)]) -> Airline {
        let routes = route_pairs
            .iter()
            .map(|(origin, destination)| Route {
                origin: origin.to_string(),
                destination: destination.to_string(),
                route_id: format!("{}-{}-{}", code, origin, destination),
                distance_miles: 500,
                most_recent_flight: dummy_flight(code),
                next_flight: dummy_flight(code),
            })
            .collect();

        Airline {
            airline_id: code.to_string(),
            name: code.to_string(),
            country: "Testland".to_string(),
            headquarters: String::new(),
            website: String::new(),
            fleet_size: 100,
            destinations: 50,
            logo: String::new(),
            alliance: None,
            recent_performance: AirlinePerformance {
                on_time_percentage: 85.0,
                cancellation_rate: 1.0,
                average_delay_minutes: 12,
                customer_satisfaction: 4.0,
            },
            routes,
        }
    }

    fn dummy_flight(code: &str) -> crate::model::Flight {
        let departure = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        crate::model::Flight {
            flight_number: format!("{}123", code),
            departure,
            arrival: departure + chrono::Duration::minutes(90),
            duration_minutes: 90,
            aircraft: "Airbus A320".to_string(),
            status: crate::model::FlightStatus::Scheduled,
            terminals: crate::model::Terminals {
                departure: "A".to_string(),
                arrival: "1".to_string(),
            },
            on_time_percentage: 80,
        }
    }

    #[test]
    fn test_route_destinations_come_first_in_seen_order() {
        let mut airports = vec![
            make_airport("AAA", &["X1", "X2", "X3", "X4", "X5"]),
            make_airport("BBB", &["X1", "X2", "X3", "X4", "X5"]),
            make_airport("CCC", &["X1", "X2", "X3", "X4", "X5"]),
            make_airport("DDD", &["X1", "X2", "X3", "X4", "X5"]),
        ];
        // Two airlines both fly AAA->BBB; dedup keeps one entry
        let airlines = vec![
            make_airline("X1", &[("AAA", "BBB")]),
            make_airline("X2", &[("AAA", "BBB"), ("AAA", "CCC")]),
        ];
        let mut config = test_config();
        config.busiest_routes_per_airport = 3;

        let mut rng = ChaCha8Rng::seed_from_u64(21);
        derive_busiest_routes(&mut airports, &airlines, &config, &mut rng);

        let busiest = &airports[0].busiest_routes;
        assert_eq!(busiest.len(), 3);
        assert_eq!(busiest[0].destination, "BBB");
        assert_eq!(busiest[1].destination, "CCC");
        // Third entry is filler: not self, not already present
        assert_eq!(busiest[2].destination, "DDD");
    }

    #[test]
    fn test_caps_and_no_self_reference() {
        let catalog = Catalog::builtin();
        let config = test_config();
        let mut rng = ChaCha8Rng::seed_from_u64(22);
        let mut airlines = sampler::sample_airlines(&catalog, &config, &mut rng);
        let mut airports = sampler::sample_airports(&catalog, &airlines, &config, &mut rng);
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        routes::generate_airline_routes(&mut airlines, &airports, &config, date, &mut rng);

        derive_busiest_routes(&mut airports, &airlines, &config, &mut rng);

        for airport in &airports {
            assert!(airport.busiest_routes.len() <= config.busiest_routes_per_airport);

            let destinations: HashSet<&str> = airport
                .busiest_routes
                .iter()
                .map(|r| r.destination.as_str())
                .collect();
            assert_eq!(destinations.len(), airport.busiest_routes.len());
            assert!(!destinations.contains(airport.iata_code.as_str()));

            for route in &airport.busiest_routes {
                assert!((5..=50).contains(&route.flights_per_day));
                assert!(route.airlines.len() <= 3);
                for code in &route.airlines {
                    assert!(airport.airlines_serving.contains(code));
                }
            }
        }
    }

    #[test]
    fn test_padding_respects_pool_exhaustion() {
        // Only three airports total, so at most two destinations exist
        let mut airports = vec![
            make_airport("AAA", &["X1", "X2", "X3", "X4", "X5"]),
            make_airport("BBB", &["X1", "X2", "X3", "X4", "X5"]),
            make_airport("CCC", &["X1", "X2", "X3", "X4", "X5"]),
        ];
        let airlines: Vec<Airline> = Vec::new();
        let config = test_config();

        let mut rng = ChaCha8Rng::seed_from_u64(23);
        derive_busiest_routes(&mut airports, &airlines, &config, &mut rng);

        for airport in &airports {
            assert_eq!(airport.busiest_routes.len(), 2);
        }
    }
}
