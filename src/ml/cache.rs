//! Load-once handle for the process-wide predictive model.

use std::sync::{Arc, Mutex, OnceLock};

use super::{ModelLoadError, PredictiveModel};

static GLOBAL: ModelCache = ModelCache::new();

/// Single-initialization slot holding a read-only model.
///
/// Loads are serialized behind `init`, so concurrent first callers run the
/// loader once and share its result. A failed load leaves the slot empty and
/// the next caller retries.
#[derive(Debug, Default)]
pub struct ModelCache {
    slot: OnceLock<Arc<dyn PredictiveModel>>,
    init: Mutex<()>,
}

impl ModelCache {
    /// Create an empty cache.
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    /// Return the cached model, running `load` only if the slot is empty.
    pub fn get_or_load<F>(&self, load: F) -> Result<Arc<dyn PredictiveModel>, ModelLoadError>
    where
        F: FnOnce() -> Result<Arc<dyn PredictiveModel>, ModelLoadError>,
    {
        if let Some(model) = self.slot.get() {
            return Ok(Arc::clone(model));
        }
        let _init = self.init.lock().unwrap_or_else(|err| err.into_inner());
        if let Some(model) = self.slot.get() {
            return Ok(Arc::clone(model));
        }
        let loaded = load()?;
        Ok(Arc::clone(self.slot.get_or_init(|| loaded)))
    }

    /// Return the cached model if one has been loaded.
    pub fn get(&self) -> Option<Arc<dyn PredictiveModel>> {
        self.slot.get().cloned()
    }
}

/// The model cache shared by the whole process.
pub fn global() -> &'static ModelCache {
    &GLOBAL
}
