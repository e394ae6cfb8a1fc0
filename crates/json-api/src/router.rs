//! App Router

use std::{path::PathBuf, sync::Arc};

use salvo::{
    affix_state::inject,
    cors::{Any, Cors},
    http::Method,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};

use crate::{
    checkout, errors, healthcheck, images, lessons,
    observability::{metrics_handler, request_logging},
    orders,
    state::State,
};

/// JSON API routes, without docs, metrics or static files.
pub(crate) fn api_router() -> Router {
    Router::new()
        .get(healthcheck::handler)
        .push(
            Router::with_path("lessons")
                .get(lessons::index::handler)
                .push(
                    Router::with_path("{id}")
                        .get(lessons::get::handler)
                        .put(lessons::update::handler),
                ),
        )
        .push(Router::with_path("checkout").post(checkout::create::handler))
        .push(
            Router::with_path("orders")
                .post(orders::create::handler)
                .push(Router::with_path("{id}").get(orders::get::handler)),
        )
}

fn cors() -> impl Handler {
    Cors::new()
        .allow_origin(Any)
        .allow_methods(vec![Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers(Any)
        .into_handler()
}

/// Full HTTP service: API, OpenAPI docs, metrics, images and error rendering.
pub(crate) fn service(state: Arc<State>, images_dir: PathBuf) -> Service {
    let api = api_router();

    let doc =
        OpenApi::new("Afterschool Lessons API", env!("CARGO_PKG_VERSION")).merge_router(&api);

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(request_logging)
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(images::router(images_dir))
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"))
        .push(api);

    Service::new(router).hoop(cors()).catcher(errors::catcher())
}
