pub mod cache;
pub mod error;
pub mod gazetteer;
pub mod location_resolver;
pub mod nominatim;
pub mod populate;

pub use error::ResolveError;
pub use location_resolver::{LocationQuery, LocationResolver};
