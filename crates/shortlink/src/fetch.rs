//! Short key lookup and redirect.

use shortlink_record::{decode, StoredValue};
use tracing::{error, info};

use crate::config::Config;
use crate::http::{precheck, Request, Response, StatusCode};
use crate::status::ErrorKind;
use crate::store::KvStore;

/// Redirects to the URL stored under the request's short key.
///
/// Success is `302 Found` with the URL in both the `Location` header and the
/// body. Failures are mapped through [`crate::status_for`].
pub fn fetch<S: KvStore + ?Sized>(req: &Request, store: &S, config: &Config) -> Response {
    info!(uri = %req.uri, "url fetch started");
    if let Some(response) = precheck(req) {
        return response;
    }
    match resolve(req, store, config) {
        Ok(value) => Response::new(StatusCode::FOUND)
            .with_header("Location", value.url.as_str())
            .with_body(value.url),
        Err(err) => {
            error!(error = %err, "url fetch failed");
            Response::from_error(&err)
        }
    }
}

/// Looks up and decodes the record named by the request's short key.
pub fn resolve<S: KvStore + ?Sized>(
    req: &Request,
    store: &S,
    config: &Config,
) -> Result<StoredValue, ErrorKind> {
    let key = req.query(&config.key_param).ok_or(ErrorKind::MissingKey)?;
    let record = store.get(&key)?;
    Ok(decode(&record)?)
}
