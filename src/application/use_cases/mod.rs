mod dedup_sources;
mod extract;
mod find_flights;
mod generate_itinerary;
mod prompts;

pub use dedup_sources::*;
pub use extract::*;
pub use find_flights::*;
pub use generate_itinerary::*;
pub use prompts::*;
