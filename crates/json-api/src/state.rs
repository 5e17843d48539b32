//! State

use std::sync::Arc;

use catalogo_app::{context::AppContext, domain::products::ProductsService};

/// Shared handler state, injected into the depot once per server.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) products: Arc<dyn ProductsService>,
}

impl State {
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self {
            products: app.products,
        })
    }
}
