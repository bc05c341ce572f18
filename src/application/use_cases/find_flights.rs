use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::application::use_cases::dedup_sources::dedup_sources;
use crate::application::use_cases::{extract, prompts};
use crate::application::GenerativeClient;
use crate::domain::{DomainError, FlightSearchResult};

/// Grounded flight search: prompt construction, a single web-grounded model
/// call, fenced-block extraction, and citation deduplication.
///
/// Each execution is a stateless single-shot request; concurrent executions
/// over the same client are safe since the client is the only shared state
/// and it is read-only.
pub struct FindFlightsUseCase {
    client: Arc<dyn GenerativeClient>,
}

impl FindFlightsUseCase {
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        Self { client }
    }

    pub async fn execute(&self, query: &str) -> Result<FlightSearchResult, DomainError> {
        info!("Searching flights for: {query}");
        let start_time = Instant::now();

        let prompt = prompts::flight_search_prompt(query);
        let reply = self.client.generate_grounded(&prompt).await?;

        // Extraction fails closed: a reply without a parseable fenced block
        // propagates as MalformedResponse rather than an empty result.
        let flights = extract::extract_flight_options(reply.text())?;
        let sources = dedup_sources(reply.citations());

        info!(
            "Found {} flight options with {} grounding sources in {:.2}s",
            flights.len(),
            sources.len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(FlightSearchResult::new(flights, sources))
    }
}
