pub mod country_service;
pub mod tourist_spot_service;
