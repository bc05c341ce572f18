use std::sync::Arc;
use std::time::Instant;

use serde_json::{json, Value};
use tracing::info;

use crate::application::use_cases::{extract, prompts};
use crate::application::GenerativeClient;
use crate::domain::{DomainError, Itinerary};

/// Declared output schema for itinerary generation.
///
/// `day`, `title`, and `activities` are required on every day and `time` and
/// `description` on every activity, so the service rejects shapes the
/// deserializer could not represent.
fn itinerary_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": {
                "type": "STRING",
                "description": "The overall title for the itinerary, e.g., 'A 3-Day Adventure in London'"
            },
            "days": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "day": { "type": "NUMBER", "description": "The day number, e.g., 1" },
                        "title": {
                            "type": "STRING",
                            "description": "A catchy title for the day's plan, e.g., 'Historic Landmarks & Theatrics'"
                        },
                        "activities": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "time": {
                                        "type": "STRING",
                                        "description": "A time block, e.g., 'Morning', 'Afternoon', 'Evening'"
                                    },
                                    "description": {
                                        "type": "STRING",
                                        "description": "A detailed description of the activity or suggestion."
                                    }
                                },
                                "required": ["time", "description"]
                            }
                        }
                    },
                    "required": ["day", "title", "activities"]
                }
            }
        },
        "required": ["title", "days"]
    })
}

/// Itinerary generation: prompt construction, a single schema-constrained
/// model call, and a direct parse of the reply body.
pub struct GenerateItineraryUseCase {
    client: Arc<dyn GenerativeClient>,
}

impl GenerateItineraryUseCase {
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        Self { client }
    }

    pub async fn execute(&self, destination: &str) -> Result<Itinerary, DomainError> {
        info!("Generating itinerary for: {destination}");
        let start_time = Instant::now();

        let prompt = prompts::itinerary_prompt(destination);
        let schema = itinerary_schema();
        let body = self.client.generate_structured(&prompt, &schema).await?;

        let itinerary = extract::extract_itinerary(&body)?;

        info!(
            "Generated {}-day itinerary in {:.2}s",
            itinerary.days().len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(itinerary)
    }
}
