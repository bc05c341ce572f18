//! Prompt construction for the two supported operations.
//!
//! Both builders are pure string construction: the output contract the
//! extractor relies on is spelled out verbatim in the instruction text, so
//! any drift between prompt and parser shows up here first.

/// Instructions for the grounded flight search.
///
/// The model is told to use the web-search tool and to reply with nothing
/// but a JSON array of flight objects inside a fenced ```json block. Prices
/// are requested in INR without a currency symbol so the field stays numeric.
pub fn flight_search_prompt(query: &str) -> String {
    format!(
        r#"You are a world-class flight travel expert. Your task is to find flight routes based on the user's query.
Use the web search tool to find the most relevant and up-to-date information.

User Query: "{query}"

Your response MUST be a JSON array of flight objects wrapped in a markdown JSON code block.
Each object in the array should represent a unique flight option and must have the following structure:
{{
  "from": "Departure Airport Code (e.g., JFK)",
  "to": "Arrival Airport Code (e.g., LHR)",
  "airline": "Airline Name",
  "price": <numeric value in INR, without currency symbol>,
  "stops": <number of stops>,
  "duration": "Total travel time (e.g., '12h 30m')"
}}
Do not include any text outside of the markdown JSON code block. Provide at least 5 options if possible."#
    )
}

/// Instructions for the three-day itinerary.
///
/// The field structure itself is enforced by the declared response schema,
/// not by this text; the prompt only shapes the content.
pub fn itinerary_prompt(destination: &str) -> String {
    format!(
        "Generate a detailed and engaging 3-day travel itinerary for a trip to {destination}. \
         The itinerary should be creative and include a mix of popular attractions, local \
         experiences, and dining suggestions. For each day, provide a title and a list of \
         activities with suggested times (e.g., \"Morning\", \"Afternoon\", \"Evening\")."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_prompt_embeds_query() {
        let prompt = flight_search_prompt("JFK to LHR in October");
        assert!(prompt.contains("\"JFK to LHR in October\""));
    }

    #[test]
    fn test_flight_prompt_states_output_contract() {
        let prompt = flight_search_prompt("anywhere");
        assert!(prompt.contains("JSON array"));
        assert!(prompt.contains("markdown JSON code block"));
        assert!(prompt.contains("\"from\""));
        assert!(prompt.contains("\"duration\""));
        assert!(prompt.contains("at least 5 options"));
    }

    #[test]
    fn test_itinerary_prompt_embeds_destination() {
        let prompt = itinerary_prompt("Kyoto");
        assert!(prompt.contains("trip to Kyoto"));
        assert!(prompt.contains("3-day"));
    }
}
