mod advice_request;
mod expertise_level;
mod outcome;

pub use advice_request::*;
pub use expertise_level::*;
pub use outcome::*;
