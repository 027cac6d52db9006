use std::sync::Arc;

use axum::extract::FromRef;

use crate::{geo::GeoLocator, store::ScanStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ScanStore>,
    pub geo: Arc<dyn GeoLocator>,
}

impl FromRef<AppState> for Arc<dyn ScanStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Arc<dyn GeoLocator> {
    fn from_ref(state: &AppState) -> Self {
        state.geo.clone()
    }
}
