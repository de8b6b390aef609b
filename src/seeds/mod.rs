pub mod countries_seed;
