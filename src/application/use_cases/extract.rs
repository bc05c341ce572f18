//! Response extraction.
//!
//! Two strategies, matched to the output mode each operation requests of the
//! model: the search path carries its payload in a fenced ```json block
//! inside free text, while the itinerary path returns a schema-constrained
//! body parseable as-is. Both fail closed: any missing block, parse error,
//! or schema violation is a [`DomainError::MalformedResponse`], never an
//! empty-but-successful result.

use crate::domain::{DomainError, FlightOption, Itinerary};

const FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// Locate the first ```json fenced block and return its inner text.
fn fenced_json(text: &str) -> Option<&str> {
    let start = text.find(FENCE_OPEN)? + FENCE_OPEN.len();
    let rest = &text[start..];
    let end = rest.find(FENCE_CLOSE)?;
    Some(rest[..end].trim())
}

/// Extract the flight options embedded in a free-text model reply.
///
/// The reply must contain a fenced ```json block whose contents parse as an
/// array of flight objects. Records are trusted as parsed and returned in
/// order; there is no per-field repair or best-effort fallback.
pub fn extract_flight_options(text: &str) -> Result<Vec<FlightOption>, DomainError> {
    let block = fenced_json(text)
        .ok_or_else(|| DomainError::malformed("no fenced json block in reply"))?;

    serde_json::from_str::<Vec<FlightOption>>(block)
        .map_err(|e| DomainError::malformed(format!("fenced block is not a flight array: {e}")))
}

/// Parse a schema-constrained reply body as an itinerary.
///
/// The body is expected to be the itinerary JSON directly, with no fence
/// stripping. A successful generation always carries at least one day.
pub fn extract_itinerary(body: &str) -> Result<Itinerary, DomainError> {
    let itinerary = serde_json::from_str::<Itinerary>(body.trim())
        .map_err(|e| DomainError::malformed(format!("body is not a valid itinerary: {e}")))?;

    if itinerary.days().is_empty() {
        return Err(DomainError::malformed("itinerary contains no days"));
    }

    Ok(itinerary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLIGHT_REPLY: &str = "Here are your options:\n```json\n[{\"from\":\"JFK\",\"to\":\"LHR\",\"airline\":\"Acme Air\",\"price\":45000,\"stops\":1,\"duration\":\"11h 20m\"}]\n```\nSafe travels!";

    #[test]
    fn test_extracts_flights_from_fenced_block() {
        let flights = extract_flight_options(FLIGHT_REPLY).unwrap();
        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].origin(), "JFK");
        assert_eq!(flights[0].destination(), "LHR");
        assert_eq!(flights[0].price(), 45000.0);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let first = extract_flight_options(FLIGHT_REPLY).unwrap();
        let second = extract_flight_options(FLIGHT_REPLY).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_missing_fence_fails_closed() {
        let err = extract_flight_options("no structured data here").unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_invalid_block_contents_fail_closed() {
        let err = extract_flight_options("```json\nnot an array\n```").unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_wrong_shape_in_block_fails_closed() {
        // Valid JSON, but an object rather than the expected array.
        let err = extract_flight_options("```json\n{\"from\":\"JFK\"}\n```").unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_preserves_option_order() {
        let reply = r#"```json
[{"from":"DEL","to":"BOM","airline":"A","price":1,"stops":0,"duration":"2h"},
 {"from":"DEL","to":"BOM","airline":"B","price":2,"stops":1,"duration":"4h"}]
```"#;
        let flights = extract_flight_options(reply).unwrap();
        assert_eq!(flights[0].airline(), "A");
        assert_eq!(flights[1].airline(), "B");
    }

    #[test]
    fn test_itinerary_parses_directly() {
        let body = r#"{"title":"Trip","days":[{"day":1,"title":"Arrival","activities":[{"time":"Morning","description":"Check in"}]}]}"#;
        let itinerary = extract_itinerary(body).unwrap();
        assert_eq!(itinerary.title(), "Trip");
        assert_eq!(itinerary.days().len(), 1);
    }

    #[test]
    fn test_itinerary_missing_required_field_fails_closed() {
        let body = r#"{"title":"Trip","days":[{"day":1,"title":"Arrival"}]}"#;
        let err = extract_itinerary(body).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_itinerary_with_no_days_fails_closed() {
        let err = extract_itinerary(r#"{"title":"Trip","days":[]}"#).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_itinerary_tolerates_surrounding_whitespace() {
        let body = "\n  {\"title\":\"Trip\",\"days\":[{\"day\":1,\"title\":\"Arrival\",\"activities\":[{\"time\":\"Morning\",\"description\":\"Check in\"}]}]}  \n";
        assert!(extract_itinerary(body).is_ok());
    }
}
