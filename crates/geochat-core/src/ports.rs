//! Port definitions

use std::sync::{Arc, Mutex};

use crate::models::MapInstance;

/// Port for the process-wide map instance slot.
///
/// The web client reads a global handle that the map library installs; here
/// the slot is injected so "not yet initialized" is a representable state
/// instead of an undefined lookup. Callers that find no instance log and
/// return; a missing map is never fatal.
pub trait MapRegistry: Send + Sync {
    /// Install a freshly rendered map instance, replacing any prior one.
    fn install(&self, instance: MapInstance);

    /// Handle to the current instance, if one has been rendered.
    fn current(&self) -> Option<Arc<Mutex<MapInstance>>>;
}
