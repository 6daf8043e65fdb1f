//! Great-circle distance on a spherical Earth.

mod haversine;

pub use haversine::{haversine_distance, path_length};
