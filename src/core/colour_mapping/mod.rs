pub mod colouring;
pub mod factory;
pub mod gradient;
pub mod kinds;
pub mod map;
pub mod normalization;
pub mod stops;
