mod gemini_client;
mod mock_client;

pub use gemini_client::*;
pub use mock_client::*;
