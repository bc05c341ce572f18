use serde::{Deserialize, Serialize};

/// A complete travel itinerary, produced in one shot from a
/// schema-constrained model call.
///
/// Every field below is mandatory: the deserializer enforces the declared
/// output schema, so a body missing `title`, `days`, or any nested required
/// field fails to parse rather than yielding partial data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    title: String,
    days: Vec<ItineraryDay>,
}

impl Itinerary {
    pub fn new(title: impl Into<String>, days: Vec<ItineraryDay>) -> Self {
        Self {
            title: title.into(),
            days,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn days(&self) -> &[ItineraryDay] {
        &self.days
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryDay {
    day: u32,
    title: String,
    activities: Vec<Activity>,
}

impl ItineraryDay {
    pub fn new(day: u32, title: impl Into<String>, activities: Vec<Activity>) -> Self {
        Self {
            day,
            title: title.into(),
            activities,
        }
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    time: String,
    description: String,
}

impl Activity {
    pub fn new(time: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            description: description.into(),
        }
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
