// Application state
// Shared, read-only handle to the service layer

use crate::services::SwiftCodeService;
use crate::store::SwiftCodeStore;
use std::sync::Arc;

/// Main application state
///
/// Handlers receive it as `State<Arc<AppState>>`. The store behind the
/// service owns all mutable data.
#[derive(Clone)]
pub struct AppState {
    /// SWIFT code service
    pub service: SwiftCodeService,
}

impl AppState {
    /// Build state over a store
    pub fn new(store: Arc<dyn SwiftCodeStore>) -> Self {
        Self {
            service: SwiftCodeService::new(store),
        }
    }
}
