use crate::io::error::Result;
use image::RgbaImage;
use std::collections::HashMap;
use std::sync::Arc;

/// Decoded swatch textures keyed by name
///
/// Owns every buffer it hands out references to; dropping the cache
/// releases them. Swatch files are assumed immutable while a cache lives.
#[derive(Default)]
pub struct SwatchCache {
    textures: HashMap<String, Arc<RgbaImage>>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Lookup counters for a swatch cache
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups served from memory
    pub hits: usize,
    /// Lookups that ran the loader
    pub misses: usize,
    /// Misses where the loader found no file
    pub missing: usize,
}

impl SwatchCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached names
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// True if nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Retrieve a cached texture or load and store it
    ///
    /// `load` returns `Ok(None)` when no file backs `name`; `fallback` is
    /// then cached under that name so the miss is only paid once.
    ///
    /// # Errors
    ///
    /// Propagates loader errors; nothing is cached in that case
    pub fn get_or_load<F>(
        &mut self,
        name: &str,
        fallback: &Arc<RgbaImage>,
        load: F,
    ) -> Result<Arc<RgbaImage>>
    where
        F: FnOnce() -> Result<Option<RgbaImage>>,
    {
        if let Some(texture) = self.textures.get(name) {
            self.stats.hits += 1;
            return Ok(Arc::clone(texture));
        }

        self.stats.misses += 1;
        let texture = match load()? {
            Some(img) => Arc::new(img),
            None => {
                self.stats.missing += 1;
                Arc::clone(fallback)
            }
        };

        self.textures.insert(name.to_string(), Arc::clone(&texture));
        Ok(texture)
    }
}
