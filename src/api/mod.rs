pub mod countries;
pub mod health;
pub mod swagger;
pub mod tourist_spots;
