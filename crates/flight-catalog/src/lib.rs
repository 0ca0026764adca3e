//! Flight Reference Catalog
//!
//! Static reference tables for the synthetic flight network generator:
//! airline and airport metadata, alliance membership, and the amenity and
//! aircraft vocabularies. Pure data with read-only lookups; all synthesis
//! happens downstream in `flight-generator`.

use serde::{Deserialize, Serialize};

/// Global airline alliances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alliance {
    SkyTeam,
    #[serde(rename = "Star Alliance")]
    StarAlliance,
    Oneworld,
}

/// Airline reference metadata, keyed by IATA code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirlineInfo {
    pub code: String,
    pub name: String,
    pub country: String,
    pub headquarters: String,
    pub website: String,
    pub fleet_size: u32,
    pub destinations: u32,
    pub logo: String,
}

/// Geographic coordinates in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Airport reference metadata, keyed by IATA code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirportInfo {
    pub code: String,
    pub name: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub website: String,
    pub terminals: u32,
    pub gates: u32,
    pub location: Coordinates,
}

/// Amenities an airport can offer.
pub const AMENITIES: &[&str] = &[
    "free_wifi",
    "lounges",
    "dining",
    "shopping",
    "charging_stations",
    "duty_free",
    "currency_exchange",
    "rental_cars",
    "prayer_rooms",
    "children_play_areas",
    "pet_relief_areas",
    "smoking_areas",
    "spa_services",
    "showers",
    "medical_services",
];

/// Aircraft types in active service across the catalog airlines.
pub const AIRCRAFT_TYPES: &[&str] = &[
    "Boeing 737-800",
    "Boeing 737-900",
    "Boeing 747-400",
    "Boeing 777-200",
    "Boeing 777-300",
    "Boeing 787-8",
    "Boeing 787-9",
    "Boeing 767-300",
    "Boeing 767-400",
    "Airbus A319",
    "Airbus A320",
    "Airbus A321",
    "Airbus A330-200",
    "Airbus A330-300",
    "Airbus A350-900",
    "Airbus A380",
    "Embraer E170",
    "Embraer E190",
];

/// Alliance membership by airline code. Codes absent here are unaffiliated.
const ALLIANCE_ROWS: &[(&str, Alliance)] = &[
    ("DL", Alliance::SkyTeam),
    ("AF", Alliance::SkyTeam),
    ("KL", Alliance::SkyTeam),
    ("AZ", Alliance::SkyTeam),
    ("KE", Alliance::SkyTeam),
    ("MU", Alliance::SkyTeam),
    ("AM", Alliance::SkyTeam),
    ("SU", Alliance::SkyTeam),
    ("UA", Alliance::StarAlliance),
    ("LH", Alliance::StarAlliance),
    ("NH", Alliance::StarAlliance),
    ("CA", Alliance::StarAlliance),
    ("SQ", Alliance::StarAlliance),
    ("TG", Alliance::StarAlliance),
    ("SK", Alliance::StarAlliance),
    ("OS", Alliance::StarAlliance),
    ("LX", Alliance::StarAlliance),
    ("AC", Alliance::StarAlliance),
    ("BR", Alliance::StarAlliance),
    ("TK", Alliance::StarAlliance),
    ("ET", Alliance::StarAlliance),
    ("AA", Alliance::Oneworld),
    ("BA", Alliance::Oneworld),
    ("QF", Alliance::Oneworld),
    ("CX", Alliance::Oneworld),
    ("JL", Alliance::Oneworld),
    ("IB", Alliance::Oneworld),
    ("QR", Alliance::Oneworld),
    ("AS", Alliance::Oneworld),
    ("MH", Alliance::Oneworld),
    ("LA", Alliance::Oneworld),
];

/// Look up alliance membership for an airline code.
pub fn alliance_for(code: &str) -> Option<Alliance> {
    ALLIANCE_ROWS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, alliance)| *alliance)
}

// (code, name, country, headquarters, website, fleet_size, destinations, logo)
type AirlineRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    u32,
    u32,
    &'static str,
);

const AIRLINE_ROWS: &[AirlineRow] = &[
    ("DL", "Delta Air Lines", "United States", "Atlanta, Georgia", "https://www.delta.com", 850, 325, "https://example.com/logos/delta.png"),
    ("AA", "American Airlines", "United States", "Fort Worth, Texas", "https://www.aa.com", 914, 350, "https://example.com/logos/american.png"),
    ("UA", "United Airlines", "United States", "Chicago, Illinois", "https://www.united.com", 857, 342, "https://example.com/logos/united.png"),
    ("WN", "Southwest Airlines", "United States", "Dallas, Texas", "https://www.southwest.com", 735, 121, "https://example.com/logos/southwest.png"),
    ("B6", "JetBlue Airways", "United States", "New York, New York", "https://www.jetblue.com", 280, 100, "https://example.com/logos/jetblue.png"),
    ("AS", "Alaska Airlines", "United States", "Seattle, Washington", "https://www.alaskaair.com", 330, 115, "https://example.com/logos/alaska.png"),
    ("F9", "Frontier Airlines", "United States", "Denver, Colorado", "https://www.flyfrontier.com", 110, 100, "https://example.com/logos/frontier.png"),
    ("NK", "Spirit Airlines", "United States", "Miramar, Florida", "https://www.spirit.com", 175, 83, "https://example.com/logos/spirit.png"),
    ("LH", "Lufthansa", "Germany", "Cologne, Germany", "https://www.lufthansa.com", 280, 220, "https://example.com/logos/lufthansa.png"),
    ("BA", "British Airways", "United Kingdom", "London, England", "https://www.britishairways.com", 277, 183, "https://example.com/logos/british_airways.png"),
    ("AF", "Air France", "France", "Paris, France", "https://www.airfrance.com", 224, 201, "https://example.com/logos/air_france.png"),
    ("KL", "KLM Royal Dutch Airlines", "Netherlands", "Amstelveen, Netherlands", "https://www.klm.com", 120, 145, "https://example.com/logos/klm.png"),
    ("EK", "Emirates", "United Arab Emirates", "Dubai, UAE", "https://www.emirates.com", 269, 157, "https://example.com/logos/emirates.png"),
    ("QF", "Qantas", "Australia", "Sydney, Australia", "https://www.qantas.com", 133, 85, "https://example.com/logos/qantas.png"),
    ("SQ", "Singapore Airlines", "Singapore", "Singapore", "https://www.singaporeair.com", 130, 64, "https://example.com/logos/singapore.png"),
    ("CX", "Cathay Pacific", "Hong Kong", "Hong Kong", "https://www.cathaypacific.com", 155, 77, "https://example.com/logos/cathay.png"),
    ("JL", "Japan Airlines", "Japan", "Tokyo, Japan", "https://www.jal.com", 167, 95, "https://example.com/logos/jal.png"),
    ("NH", "All Nippon Airways", "Japan", "Tokyo, Japan", "https://www.ana.co.jp", 211, 97, "https://example.com/logos/ana.png"),
    ("TK", "Turkish Airlines", "Turkey", "Istanbul, Turkey", "https://www.turkishairlines.com", 389, 304, "https://example.com/logos/turkish.png"),
    ("EY", "Etihad Airways", "United Arab Emirates", "Abu Dhabi, UAE", "https://www.etihad.com", 102, 68, "https://example.com/logos/etihad.png"),
    ("QR", "Qatar Airways", "Qatar", "Doha, Qatar", "https://www.qatarairways.com", 234, 160, "https://example.com/logos/qatar.png"),
    ("AC", "Air Canada", "Canada", "Montreal, Canada", "https://www.aircanada.com", 169, 217, "https://example.com/logos/aircanada.png"),
    ("AM", "Aeromexico", "Mexico", "Mexico City, Mexico", "https://www.aeromexico.com", 118, 90, "https://example.com/logos/aeromexico.png"),
    ("AZ", "ITA Airways", "Italy", "Rome, Italy", "https://www.itaspa.com", 52, 45, "https://example.com/logos/ita.png"),
    ("LA", "LATAM Airlines", "Chile", "Santiago, Chile", "https://www.latamairlines.com", 320, 144, "https://example.com/logos/latam.png"),
    ("VS", "Virgin Atlantic", "United Kingdom", "Crawley, UK", "https://www.virginatlantic.com", 40, 33, "https://example.com/logos/virgin.png"),
    ("WS", "WestJet", "Canada", "Calgary, Canada", "https://www.westjet.com", 124, 108, "https://example.com/logos/westjet.png"),
    ("SK", "SAS Scandinavian Airlines", "Sweden", "Stockholm, Sweden", "https://www.flysas.com", 135, 123, "https://example.com/logos/sas.png"),
    ("ET", "Ethiopian Airlines", "Ethiopia", "Addis Ababa, Ethiopia", "https://www.ethiopianairlines.com", 130, 125, "https://example.com/logos/ethiopian.png"),
    ("KE", "Korean Air", "South Korea", "Seoul, South Korea", "https://www.koreanair.com", 169, 125, "https://example.com/logos/korean.png"),
    ("CA", "Air China", "China", "Beijing, China", "https://www.airchina.com", 428, 201, "https://example.com/logos/airchina.png"),
    ("MU", "China Eastern Airlines", "China", "Shanghai, China", "https://www.ceair.com", 570, 220, "https://example.com/logos/chinaeastern.png"),
    ("CI", "China Airlines", "Taiwan", "Taipei, Taiwan", "https://www.china-airlines.com", 88, 95, "https://example.com/logos/chinaairlines.png"),
    ("BR", "EVA Air", "Taiwan", "Taipei, Taiwan", "https://www.evaair.com", 85, 67, "https://example.com/logos/evaair.png"),
    ("MH", "Malaysia Airlines", "Malaysia", "Kuala Lumpur, Malaysia", "https://www.malaysiaairlines.com", 81, 59, "https://example.com/logos/malaysia.png"),
    ("TG", "Thai Airways", "Thailand", "Bangkok, Thailand", "https://www.thaiairways.com", 82, 84, "https://example.com/logos/thai.png"),
    ("SU", "Aeroflot", "Russia", "Moscow, Russia", "https://www.aeroflot.ru", 186, 146, "https://example.com/logos/aeroflot.png"),
    ("OS", "Austrian Airlines", "Austria", "Vienna, Austria", "https://www.austrian.com", 82, 130, "https://example.com/logos/austrian.png"),
    ("LX", "Swiss International Air Lines", "Switzerland", "Basel, Switzerland", "https://www.swiss.com", 105, 102, "https://example.com/logos/swiss.png"),
    ("IB", "Iberia", "Spain", "Madrid, Spain", "https://www.iberia.com", 141, 131, "https://example.com/logos/iberia.png"),
];

// (code, name, city, state, country, website, terminals, gates, lat, lon)
type AirportRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    u32,
    u32,
    f64,
    f64,
);

const AIRPORT_ROWS: &[AirportRow] = &[
    ("ATL", "Hartsfield-Jackson Atlanta International Airport", "Atlanta", "Georgia", "United States", "https://www.atl.com", 7, 192, 33.6407, -84.4277),
    ("LAX", "Los Angeles International Airport", "Los Angeles", "California", "United States", "https://www.flylax.com", 9, 146, 33.9416, -118.4085),
    ("ORD", "O'Hare International Airport", "Chicago", "Illinois", "United States", "https://www.flychicago.com/ohare", 4, 191, 41.9742, -87.9073),
    ("DFW", "Dallas/Fort Worth International Airport", "Dallas", "Texas", "United States", "https://www.dfwairport.com", 5, 165, 32.8998, -97.0403),
    ("DEN", "Denver International Airport", "Denver", "Colorado", "United States", "https://www.flydenver.com", 1, 115, 39.8561, -104.6737),
    ("JFK", "John F. Kennedy International Airport", "New York", "New York", "United States", "https://www.jfkairport.com", 6, 128, 40.6413, -73.7781),
    ("SFO", "San Francisco International Airport", "San Francisco", "California", "United States", "https://www.flysfo.com", 4, 115, 37.7749, -122.4194),
    ("SEA", "Seattle-Tacoma International Airport", "Seattle", "Washington", "United States", "https://www.portseattle.org/sea-tac", 1, 90, 47.4502, -122.3088),
    ("LAS", "Harry Reid International Airport", "Las Vegas", "Nevada", "United States", "https://www.harryreidairport.com", 2, 110, 36.0840, -115.1537),
    ("MCO", "Orlando International Airport", "Orlando", "Florida", "United States", "https://www.orlandoairports.net", 4, 129, 28.4312, -81.3081),
    ("MIA", "Miami International Airport", "Miami", "Florida", "United States", "https://www.miami-airport.com", 3, 131, 25.7932, -80.2906),
    ("CLT", "Charlotte Douglas International Airport", "Charlotte", "North Carolina", "United States", "https://www.cltairport.com", 1, 115, 35.2144, -80.9473),
    ("PHX", "Phoenix Sky Harbor International Airport", "Phoenix", "Arizona", "United States", "https://www.skyharbor.com", 3, 120, 33.4352, -112.0101),
    ("IAH", "George Bush Intercontinental Airport", "Houston", "Texas", "United States", "https://www.fly2houston.com", 5, 130, 29.9902, -95.3368),
    ("BOS", "Boston Logan International Airport", "Boston", "Massachusetts", "United States", "https://www.massport.com/logan-airport", 4, 102, 42.3656, -71.0096),
    ("DTW", "Detroit Metropolitan Wayne County Airport", "Detroit", "Michigan", "United States", "https://www.metroairport.com", 2, 129, 42.2162, -83.3554),
    ("MSP", "Minneapolis-Saint Paul International Airport", "Minneapolis", "Minnesota", "United States", "https://www.mspairport.com", 2, 131, 44.8848, -93.2223),
    ("LHR", "London Heathrow Airport", "London", "", "United Kingdom", "https://www.heathrow.com", 4, 115, 51.4700, -0.4543),
    ("CDG", "Paris Charles de Gaulle Airport", "Paris", "", "France", "https://www.parisaeroport.fr", 3, 104, 49.0097, 2.5479),
    ("FRA", "Frankfurt Airport", "Frankfurt", "", "Germany", "https://www.frankfurt-airport.com", 2, 142, 50.0379, 8.5622),
    ("AMS", "Amsterdam Airport Schiphol", "Amsterdam", "", "Netherlands", "https://www.schiphol.nl", 1, 165, 52.3105, 4.7683),
    ("MAD", "Adolfo Suarez Madrid-Barajas Airport", "Madrid", "", "Spain", "https://www.aena.es/en/madrid-barajas-airport", 4, 104, 40.4983, -3.5676),
    ("FCO", "Leonardo da Vinci-Fiumicino Airport", "Rome", "", "Italy", "https://www.adr.it/fiumicino", 4, 85, 41.8003, 12.2389),
    ("BCN", "Barcelona-El Prat Airport", "Barcelona", "", "Spain", "https://www.aena.es/en/barcelona-airport", 2, 67, 41.2974, 2.0833),
    ("LGW", "London Gatwick Airport", "London", "", "United Kingdom", "https://www.gatwickairport.com", 2, 66, 51.1537, -0.1821),
    ("MUC", "Munich Airport", "Munich", "", "Germany", "https://www.munich-airport.com", 2, 90, 48.3537, 11.7860),
    ("IST", "Istanbul Airport", "Istanbul", "", "Turkey", "https://www.istairport.com", 1, 143, 41.2608, 28.7418),
    ("SYD", "Sydney Airport", "Sydney", "New South Wales", "Australia", "https://www.sydneyairport.com.au", 3, 65, -33.9399, 151.1753),
    ("MEL", "Melbourne Airport", "Melbourne", "Victoria", "Australia", "https://www.melbourneairport.com.au", 4, 56, -37.6690, 144.8410),
    ("HND", "Tokyo Haneda Airport", "Tokyo", "", "Japan", "https://tokyo-haneda.com", 3, 114, 35.5494, 139.7798),
    ("NRT", "Narita International Airport", "Tokyo", "", "Japan", "https://www.narita-airport.jp", 3, 96, 35.7719, 140.3929),
    ("ICN", "Incheon International Airport", "Seoul", "", "South Korea", "https://www.airport.kr", 2, 128, 37.4602, 126.4407),
    ("PEK", "Beijing Capital International Airport", "Beijing", "", "China", "https://www.bcia.com.cn", 3, 120, 40.0799, 116.6031),
    ("PVG", "Shanghai Pudong International Airport", "Shanghai", "", "China", "https://www.shanghaiairport.com", 2, 98, 31.1443, 121.8083),
    ("HKG", "Hong Kong International Airport", "Hong Kong", "", "China", "https://www.hongkongairport.com", 2, 90, 22.3080, 113.9185),
    ("SIN", "Singapore Changi Airport", "Singapore", "", "Singapore", "https://www.changiairport.com", 4, 140, 1.3644, 103.9915),
    ("BKK", "Suvarnabhumi Airport", "Bangkok", "", "Thailand", "https://www.suvarnabhumiairport.com", 1, 107, 13.6900, 100.7501),
    ("KUL", "Kuala Lumpur International Airport", "Kuala Lumpur", "", "Malaysia", "https://www.klia.com.my", 2, 115, 2.7456, 101.7099),
    ("DEL", "Indira Gandhi International Airport", "Delhi", "", "India", "https://www.newdelhiairport.in", 3, 130, 28.5561, 77.1000),
    ("BOM", "Chhatrapati Shivaji Maharaj International Airport", "Mumbai", "", "India", "https://www.csmia.aero", 2, 78, 19.0896, 72.8656),
    ("DXB", "Dubai International Airport", "Dubai", "", "United Arab Emirates", "https://www.dubaiairports.ae", 3, 184, 25.2532, 55.3657),
    ("DOH", "Hamad International Airport", "Doha", "", "Qatar", "https://dohahamadairport.com", 1, 140, 25.2609, 51.6138),
    ("AUH", "Abu Dhabi International Airport", "Abu Dhabi", "", "United Arab Emirates", "https://www.abudhabiairport.ae", 3, 65, 24.4330, 54.6511),
    ("GRU", "Sao Paulo/Guarulhos International Airport", "Sao Paulo", "", "Brazil", "https://www.gru.com.br", 3, 95, -23.4356, -46.4731),
    ("MEX", "Mexico City International Airport", "Mexico City", "", "Mexico", "https://www.aicm.com.mx", 2, 85, 19.4361, -99.0719),
    ("YYZ", "Toronto Pearson International Airport", "Toronto", "Ontario", "Canada", "https://www.torontopearson.com", 2, 112, 43.6777, -79.6248),
    ("YVR", "Vancouver International Airport", "Vancouver", "British Columbia", "Canada", "https://www.yvr.ca", 3, 80, 49.1967, -123.1815),
    ("ZRH", "Zurich Airport", "Zurich", "", "Switzerland", "https://www.zurich-airport.com", 3, 67, 47.4582, 8.5555),
    ("VIE", "Vienna International Airport", "Vienna", "", "Austria", "https://www.viennaairport.com", 3, 60, 48.1103, 16.5697),
    ("CPH", "Copenhagen Airport", "Copenhagen", "", "Denmark", "https://www.cph.dk", 3, 62, 55.6180, 12.6508),
];

/// Read-only registry over the built-in reference tables.
pub struct Catalog {
    airlines: Vec<AirlineInfo>,
    airports: Vec<AirportInfo>,
}

impl Catalog {
    /// Build the catalog from the compiled-in tables.
    pub fn builtin() -> Self {
        let airlines = AIRLINE_ROWS
            .iter()
            .map(
                |&(code, name, country, headquarters, website, fleet_size, destinations, logo)| {
                    AirlineInfo {
                        code: code.to_string(),
                        name: name.to_string(),
                        country: country.to_string(),
                        headquarters: headquarters.to_string(),
                        website: website.to_string(),
                        fleet_size,
                        destinations,
                        logo: logo.to_string(),
                    }
                },
            )
            .collect();

        let airports = AIRPORT_ROWS
            .iter()
            .map(
                |&(code, name, city, state, country, website, terminals, gates, lat, lon)| {
                    AirportInfo {
                        code: code.to_string(),
                        name: name.to_string(),
                        city: city.to_string(),
                        state: state.to_string(),
                        country: country.to_string(),
                        website: website.to_string(),
                        terminals,
                        gates,
                        location: Coordinates {
                            latitude: lat,
                            longitude: lon,
                        },
                    }
                },
            )
            .collect();

        Self { airlines, airports }
    }

    pub fn airlines(&self) -> &[AirlineInfo] {
        &self.airlines
    }

    pub fn airports(&self) -> &[AirportInfo] {
        &self.airports
    }

    /// Look up an airline by IATA code.
    pub fn airline(&self, code: &str) -> Option<&AirlineInfo> {
        self.airlines.iter().find(|a| a.code == code)
    }

    /// Look up an airport by IATA code.
    pub fn airport(&self, code: &str) -> Option<&AirportInfo> {
        self.airports.iter().find(|a| a.code == code)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_sizes() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.airlines().len(), 40);
        assert_eq!(catalog.airports().len(), 50);
        assert_eq!(AMENITIES.len(), 15);
        assert_eq!(AIRCRAFT_TYPES.len(), 18);
    }

    #[test]
    fn test_codes_unique() {
        let catalog = Catalog::builtin();
        let airline_codes: HashSet<&str> =
            catalog.airlines().iter().map(|a| a.code.as_str()).collect();
        assert_eq!(airline_codes.len(), catalog.airlines().len());

        let airport_codes: HashSet<&str> =
            catalog.airports().iter().map(|a| a.code.as_str()).collect();
        assert_eq!(airport_codes.len(), catalog.airports().len());
    }

    #[test]
    fn test_coordinates_in_range() {
        let catalog = Catalog::builtin();
        for airport in catalog.airports() {
            assert!(
                (-90.0..=90.0).contains(&airport.location.latitude),
                "{} latitude out of range",
                airport.code
            );
            assert!(
                (-180.0..=180.0).contains(&airport.location.longitude),
                "{} longitude out of range",
                airport.code
            );
        }
    }

    #[test]
    fn test_alliance_lookup() {
        assert_eq!(alliance_for("DL"), Some(Alliance::SkyTeam));
        assert_eq!(alliance_for("UA"), Some(Alliance::StarAlliance));
        assert_eq!(alliance_for("AA"), Some(Alliance::Oneworld));
        assert_eq!(alliance_for("WN"), None); // Southwest flies alone
        assert_eq!(alliance_for("ZZ"), None);
    }

    #[test]
    fn test_alliance_rows_reference_catalog_airlines() {
        let catalog = Catalog::builtin();
        for airline in catalog.airlines() {
            // Lookup must not panic for any catalog code
            let _ = alliance_for(&airline.code);
        }
        // Every alliance row points at a real catalog airline
        for (code, _) in super::ALLIANCE_ROWS {
            assert!(
                catalog.airline(code).is_some(),
                "alliance row {} missing from airline table",
                code
            );
        }
    }

    #[test]
    fn test_lookup_by_code() {
        let catalog = Catalog::builtin();
        let atl = catalog.airport("ATL").unwrap();
        assert_eq!(atl.city, "Atlanta");
        assert_eq!(atl.gates, 192);

        let dl = catalog.airline("DL").unwrap();
        assert_eq!(dl.name, "Delta Air Lines");
        assert_eq!(dl.fleet_size, 850);

        assert!(catalog.airport("XXX").is_none());
    }
}
