pub mod metrics;
pub mod routes;
pub mod sample;
