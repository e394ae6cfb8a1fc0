//! Static lesson images

use std::path::PathBuf;

use salvo::{prelude::*, serve_static::StaticDir};

/// Replace the static handler's bare 404 with an image-specific message.
#[handler]
async fn image_not_found(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    ctrl.call_next(req, depot, res).await;

    if res.status_code == Some(StatusCode::NOT_FOUND) {
        res.render(StatusError::not_found().brief("Image not found"));
    }
}

/// Router serving files below `images_dir` at `/images/...`.
pub(crate) fn router(images_dir: PathBuf) -> Router {
    Router::with_path("images/{**path}")
        .hoop(image_not_found)
        .get(StaticDir::new([images_dir]))
}
