//! App Router

use salvo::Router;

use crate::{errors::route_not_found, healthcheck, products};

/// Every documented route of the API.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("productos")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(Router::with_path("disponibles").get(products::available::handler))
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
}

/// Append the catch-all 404 route. Must be the last child pushed.
pub(crate) fn with_fallback(router: Router) -> Router {
    router.push(Router::with_path("{**rest}").goal(route_not_found))
}
