pub mod application;
pub mod connector;
pub mod domain;

pub use application::{
    dedup_sources, extract_flight_options, extract_itinerary, FindFlightsUseCase,
    GenerateItineraryUseCase, GenerativeClient,
};

pub use connector::{GeminiClient, MockGenerativeClient};

pub use domain::{
    Activity, DomainError, FlightOption, FlightSearchResult, GroundedReply, GroundingSource,
    Itinerary, ItineraryDay, RawCitation,
};
