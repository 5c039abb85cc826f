mod controller;
pub mod form;
mod state;

pub use controller::*;
pub use form::{FormField, FormUpdate, can_submit, validate_submission};
pub use state::*;
