use actix_session::SessionExt;
use actix_web::{error::ErrorUnauthorized, FromRequest};
use futures_util::future::{ready, Ready};

use crate::session_state::TypedSession;

// Extractor for the logged in user. Role gating happens against the stored
// role inside the store operations, not here; the session only proves who is
// calling.
pub struct CurrentUser(pub String);

impl FromRequest for CurrentUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &actix_web::HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let session = TypedSession(req.get_session());

        match session.get_login() {
            Ok(Some(login)) => ready(Ok(CurrentUser(login))),
            _ => ready(Err(ErrorUnauthorized("Not logged in")))
        }
    }
}
