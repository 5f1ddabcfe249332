use std::{
    hash::{Hash, Hasher},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use fxhash::FxHasher64;
use tracing::{debug, warn};
use waypoint_routing::GeoPoint;

use crate::{
    error::ResolveError,
    location_resolver::{LocationQuery, LocationResolver},
};

const CACHE_FOLDER_ENV_VAR: &str = "WAYPOINT_CACHE_FOLDER";

pub fn cache_folder_from_env() -> Option<PathBuf> {
    std::env::var(CACHE_FOLDER_ENV_VAR).ok().map(PathBuf::from)
}

fn get_filename(query: &LocationQuery) -> String {
    let mut hasher = FxHasher64::default();
    query.search_text().to_lowercase().hash(&mut hasher);
    format!("{:016x}.json", hasher.finish())
}

/// Keeps successful resolutions of the wrapped resolver as JSON files.
/// Unresolved places are not cached.
pub struct CachedResolver<R> {
    inner: R,
    folder: PathBuf,
}

impl<R> CachedResolver<R> {
    pub fn new(inner: R, folder: impl Into<PathBuf>) -> Result<Self, ResolveError> {
        let folder = folder.into();
        std::fs::create_dir_all(&folder)?;
        Ok(Self { inner, folder })
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    fn cached(&self, query: &LocationQuery) -> Result<Option<GeoPoint>, ResolveError> {
        let file_path = self.folder.join(get_filename(query));

        if !file_path.is_file() {
            return Ok(None);
        }

        let file = std::fs::File::open(file_path)?;
        let coordinate: GeoPoint = serde_json::from_reader(file)?;
        Ok(Some(coordinate))
    }

    fn store(&self, query: &LocationQuery, coordinate: &GeoPoint) -> Result<(), ResolveError> {
        let file = std::fs::File::create(self.folder.join(get_filename(query)))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, coordinate)?;
        writer.flush()?;
        Ok(())
    }
}

impl<R: LocationResolver + Sync> LocationResolver for CachedResolver<R> {
    async fn resolve(&self, query: &LocationQuery) -> Result<Option<GeoPoint>, ResolveError> {
        match self.cached(query) {
            Ok(Some(coordinate)) => {
                debug!(%query, "CachedResolver: cache hit");
                return Ok(Some(coordinate));
            }
            Ok(None) => {}
            // A bad entry is a miss, the fresh result replaces it
            Err(error) => warn!(%query, %error, "CachedResolver: ignoring unreadable entry"),
        }

        let resolved = self.inner.resolve(query).await?;
        if let Some(coordinate) = &resolved {
            self.store(query, coordinate)?;
        }

        Ok(resolved)
    }
}
