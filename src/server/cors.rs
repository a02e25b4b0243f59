// src/server/cors.rs
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{Request, Response};

/// Attaches the permissive cross-origin headers to every response, API and
/// static files alike. Origin `*`, methods `GET, OPTIONS`, and the header
/// allowlist match the upstream contract.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new("Access-Control-Allow-Methods", "GET, OPTIONS"));
        response.set_header(Header::new(
            "Access-Control-Allow-Headers",
            "X-Requested-With, Content-Type, Authorization",
        ));
    }
}
