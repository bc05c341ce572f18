use serde::{Deserialize, Serialize};

use super::GroundingSource;

/// One flight option as extracted from a model reply.
///
/// Field names follow the wire contract the search prompt dictates; position
/// in the result sequence is the model's relevance order and the option
/// carries no identity of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightOption {
    #[serde(rename = "from")]
    origin: String,
    #[serde(rename = "to")]
    destination: String,
    airline: String,
    price: f64,
    stops: u32,
    duration: String,
}

impl FlightOption {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        airline: impl Into<String>,
        price: f64,
        stops: u32,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            airline: airline.into(),
            price,
            stops,
            duration: duration.into(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn airline(&self) -> &str {
        &self.airline
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stops(&self) -> u32 {
        self.stops
    }

    pub fn duration(&self) -> &str {
        &self.duration
    }

    pub fn is_direct(&self) -> bool {
        self.stops == 0
    }

    pub fn display_line(&self) -> String {
        let stops = match self.stops {
            0 => "non-stop".to_string(),
            1 => "1 stop".to_string(),
            n => format!("{n} stops"),
        };
        format!(
            "{} -> {}  {}  INR {:.0}  {}  {}",
            self.origin, self.destination, self.airline, self.price, stops, self.duration
        )
    }
}

/// The combined output of one flight search: options in relevance order plus
/// the deduplicated grounding sources the model cited.
///
/// Created fresh per query; the pipeline keeps no state between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightSearchResult {
    flights: Vec<FlightOption>,
    sources: Vec<GroundingSource>,
}

impl FlightSearchResult {
    pub fn new(flights: Vec<FlightOption>, sources: Vec<GroundingSource>) -> Self {
        Self { flights, sources }
    }

    pub fn flights(&self) -> &[FlightOption] {
        &self.flights
    }

    pub fn sources(&self) -> &[GroundingSource] {
        &self.sources
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_option_deserializes_wire_names() {
        let json = r#"{"from":"JFK","to":"LHR","airline":"Acme Air","price":45000,"stops":1,"duration":"11h 20m"}"#;
        let flight: FlightOption = serde_json::from_str(json).unwrap();

        assert_eq!(flight.origin(), "JFK");
        assert_eq!(flight.destination(), "LHR");
        assert_eq!(flight.airline(), "Acme Air");
        assert_eq!(flight.price(), 45000.0);
        assert_eq!(flight.stops(), 1);
        assert_eq!(flight.duration(), "11h 20m");
        assert!(!flight.is_direct());
    }

    #[test]
    fn test_display_line_pluralizes_stops() {
        let direct = FlightOption::new("DEL", "BOM", "IndiGo", 5200.0, 0, "2h 10m");
        assert!(direct.display_line().contains("non-stop"));

        let two_stops = FlightOption::new("DEL", "SFO", "United", 78000.0, 2, "22h 5m");
        assert!(two_stops.display_line().contains("2 stops"));
    }
}
