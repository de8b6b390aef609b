pub mod country;
pub mod tourist_spot;

pub use country::*;
pub use tourist_spot::*;
