use actix_session::{Session, SessionExt, SessionGetError, SessionInsertError};
use actix_web::FromRequest;
use futures_util::future::{ready, Ready};

// Cookie session holding the authenticated login, the way the old console
// front end held the logged in user for the lifetime of its menu loop.
pub struct TypedSession(pub Session);

impl TypedSession {
    const LOGIN_KEY: &'static str = "login";

    pub fn get_login(&self) -> Result<Option<String>, SessionGetError>{
        self.0.get(Self::LOGIN_KEY)
    }

    pub fn insert_login(&self, login: &str) -> Result<(), SessionInsertError>{
        self.0.insert(Self::LOGIN_KEY, login)
    }

    pub fn renew(&self){
        self.0.renew();
    }

    pub fn purge(&self){
        self.0.purge();
    }
}

impl FromRequest for TypedSession {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &actix_web::HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let session = req.get_session();
        ready(Ok(TypedSession(session)))
    }
}
