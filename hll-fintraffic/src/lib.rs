pub mod error;
pub mod facility;
pub mod prediction;
pub mod utilization;

#[cfg(feature = "api")]
pub mod cache;
#[cfg(feature = "api")]
pub mod client;
