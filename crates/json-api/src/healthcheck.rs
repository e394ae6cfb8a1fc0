//! Availability Handler

use salvo::prelude::*;

pub(crate) const AVAILABILITY_MESSAGE: &str = "Backend running successfully!";

/// Plain text availability message served at the root path.
#[handler]
pub(crate) async fn handler(res: &mut Response) {
    res.render(Text::Plain(AVAILABILITY_MESSAGE));
}
