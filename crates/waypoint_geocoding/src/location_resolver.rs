use std::{fmt::Display, future::Future};

use waypoint_routing::GeoPoint;

use crate::error::ResolveError;

/// A place name, optionally scoped by a region such as "Tamil Nadu, India".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocationQuery {
    pub name: String,
    pub region: Option<String>,
}

impl LocationQuery {
    pub fn new(name: impl Into<String>) -> Self {
        LocationQuery {
            name: name.into(),
            region: None,
        }
    }

    pub fn with_region(name: impl Into<String>, region: impl Into<String>) -> Self {
        LocationQuery {
            name: name.into(),
            region: Some(region.into()),
        }
    }

    pub fn search_text(&self) -> String {
        match &self.region {
            Some(region) => format!("{}, {}", self.name, region),
            None => self.name.clone(),
        }
    }
}

impl Display for LocationQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.search_text())
    }
}

pub trait LocationResolver {
    /// `Ok(None)` when the place is unknown to the service, `Err` when the
    /// service itself failed.
    fn resolve(
        &self,
        query: &LocationQuery,
    ) -> impl Future<Output = Result<Option<GeoPoint>, ResolveError>> + Send;
}
