pub mod api;
pub mod quiz;
pub mod results;
