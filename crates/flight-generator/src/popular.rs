//! Popular-route ranking over sampled airport pairs.
//!
//! Popularity score for a pair (a, b):
//!
//! ```text
//! score = 2 * (gates_a + gates_b) + |serving_a| + |serving_b|
//! ```
//!
//! Pairs are ranked descending with a stable tie-break, so equal-score
//! pairs keep their outer-then-inner enumeration order. The score is a
//! synthetic heuristic, not real traffic data.

use rand::Rng;
use tracing::info;

use crate::model::{Airport, PopularRoute, PriceLadder};
use crate::{flight_duration_minutes, haversine_miles, GeneratorConfig, MAJOR_CARRIERS};

/// Synthetic popularity score for an airport pair.
pub fn popularity_score(a: &Airport, b: &Airport) -> u32 {
    2 * (a.gates + b.gates) + a.airlines_serving.len() as u32 + b.airlines_serving.len() as u32
}

/// Fare ladder derived from great-circle distance. Economy is
/// `100 + 0.1 * miles`; the upper tiers are fixed multiples of economy,
/// all truncated to whole dollars.
pub fn price_ladder(distance_miles: f64) -> PriceLadder {
    let economy = (100.0 + distance_miles * 0.1) as u32;
    PriceLadder {
        economy,
        premium_economy: (f64::from(economy) * 1.6) as u32,
        business: (f64::from(economy) * 3.5) as u32,
        first: (f64::from(economy) * 6.0) as u32,
    }
}

/// Airlines serving both endpoints, in the origin airport's serving order,
/// padded from the major carriers when the intersection has fewer than
/// three entries. At most five entries.
fn serving_intersection(origin: &Airport, destination: &Airport) -> Vec<String> {
    let mut serving: Vec<String> = origin
        .airlines_serving
        .iter()
        .filter(|code| destination.airlines_serving.contains(*code))
        .cloned()
        .collect();

    if serving.len() < 3 {
        for major in MAJOR_CARRIERS {
            if serving.len() >= 5 {
                break;
            }
            if !serving.iter().any(|c| c == major) {
                serving.push(major.to_string());
            }
        }
    }

    serving.truncate(5);
    serving
}

/// Rank all unordered airport pairs by popularity and build the top-N
/// popular-route table with synthesized pricing.
pub fn rank_popular_routes(
    airports: &[Airport],
    config: &GeneratorConfig,
    rng: &mut impl Rng,
) -> Vec<PopularRoute> {
    let mut pairs: Vec<(usize, usize, u32)> = Vec::new();
    for i in 0..airports.len() {
        for j in (i + 1)..airports.len() {
            pairs.push((i, j, popularity_score(&airports[i], &airports[j])));
        }
    }

    // Stable sort keeps enumeration order for equal scores
    pairs.sort_by(|a, b| b.2.cmp(&a.2));

    let mut popular = Vec::with_capacity(config.popular_routes.min(pairs.len()));
    for &(i, j, _) in pairs.iter().take(config.popular_routes) {
        let origin = &airports[i];
        let destination = &airports[j];

        let distance = haversine_miles(
            origin.location.latitude,
            origin.location.longitude,
            destination.location.latitude,
            destination.location.longitude,
        );

        popular.push(PopularRoute {
            route_id: format!(
                "{}-{}",
                origin.city.replace(' ', ""),
                destination.city.replace(' ', "")
            ),
            origin_city: origin.city.clone(),
            destination_city: destination.city.clone(),
            distance_miles: distance as u32,
            airlines_serving: serving_intersection(origin, destination),
            flights_per_day: rng.gen_range(10..=60),
            average_price: price_ladder(distance),
            average_duration_minutes: flight_duration_minutes(distance),
            best_time_to_book_days: rng.gen_range(21..=60),
        });
    }

    info!("Ranked {} popular routes", popular.len());
    popular
}
