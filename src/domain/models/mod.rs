mod flight;
mod grounding;
mod itinerary;

pub use flight::*;
pub use grounding::*;
pub use itinerary::*;
