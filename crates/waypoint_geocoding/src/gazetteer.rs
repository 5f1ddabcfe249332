use fxhash::FxHashMap;
use waypoint_routing::GeoPoint;

use crate::{
    error::ResolveError,
    location_resolver::{LocationQuery, LocationResolver},
};

pub const TAMIL_NADU_REGION: &str = "Tamil Nadu, India";

const TAMIL_NADU_CITIES: [(&str, f64, f64); 16] = [
    ("Chennai", 13.0827, 80.2707),
    ("Coimbatore", 11.0168, 76.9558),
    ("Madurai", 9.9252, 78.1198),
    ("Tiruchirappalli", 10.7905, 78.7047),
    ("Salem", 11.6643, 78.1460),
    ("Erode", 11.3410, 77.7172),
    ("Vellore", 12.9165, 79.1325),
    ("Tirunelveli", 8.7139, 77.7567),
    ("Thoothukudi", 8.7642, 78.1348),
    ("Thanjavur", 10.7870, 79.1378),
    ("Dindigul", 10.3673, 77.9803),
    ("Nagercoil", 8.1833, 77.4119),
    ("Karur", 10.9601, 78.0766),
    ("Kanchipuram", 12.8342, 79.7036),
    ("Namakkal", 11.2189, 78.1677),
    ("Cuddalore", 11.7480, 79.7714),
];

/// Offline resolver backed by a fixed table of places.
///
/// Names are matched case-insensitively; the region qualifier is ignored.
#[derive(Default, Clone)]
pub struct GazetteerResolver {
    entries: Vec<(String, GeoPoint)>,
    index: FxHashMap<String, usize>,
}

impl GazetteerResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, GeoPoint)>,
        S: Into<String>,
    {
        let mut gazetteer = Self::new();
        for (name, coordinate) in entries {
            gazetteer.insert(name, coordinate);
        }
        gazetteer
    }

    /// The major cities of Tamil Nadu.
    pub fn tamil_nadu() -> Self {
        Self::from_entries(
            TAMIL_NADU_CITIES
                .iter()
                .map(|&(name, lat, lng)| (name, GeoPoint::new(lat, lng))),
        )
    }

    pub fn insert(&mut self, name: impl Into<String>, coordinate: GeoPoint) {
        let name = name.into();
        let key = name.to_lowercase();

        match self.index.get(&key) {
            Some(&entry) => self.entries[entry] = (name, coordinate),
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((name, coordinate));
            }
        }
    }

    pub fn lookup(&self, name: &str) -> Option<GeoPoint> {
        self.index
            .get(&name.trim().to_lowercase())
            .map(|&entry| self.entries[entry].1)
    }

    /// Known places in insertion order.
    pub fn entries(&self) -> &[(String, GeoPoint)] {
        &self.entries
    }
}

impl LocationResolver for GazetteerResolver {
    async fn resolve(&self, query: &LocationQuery) -> Result<Option<GeoPoint>, ResolveError> {
        Ok(self.lookup(&query.name))
    }
}
