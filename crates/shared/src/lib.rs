mod date;
mod error;
pub mod itinerary;
pub mod trip;

pub use date::*;
pub use error::*;
