pub mod routes;
pub mod startup;
pub mod errors;
pub mod metrics;
pub mod views;

pub use startup::run;
