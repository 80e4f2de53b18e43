//! Storing URLs under short keys.

use shortlink_record::{decode, encode, StoredValue};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::http::{precheck, Request, Response, StatusCode};
use crate::short_key::{generate_key, key_available};
use crate::status::ErrorKind;
use crate::store::KvStore;

/// Stores the request's URL and answers `200 OK` with its short key.
///
/// Inputs:
/// - `url` query parameter (required): the URL to store.
/// - `alias` query parameter: caller-chosen short key. Without it a key is
///   derived from the URL.
/// - `password` header: secret stored with the record. Records without a
///   secret can never be replaced.
/// - `old_password` header: secret of the record being replaced. Defaults to
///   `password`.
pub fn shorten<S: KvStore + ?Sized>(req: &Request, store: &S, config: &Config) -> Response {
    info!(uri = %req.uri, "url shortening started");
    if let Some(response) = precheck(req) {
        return response;
    }
    match register(req, store, config) {
        Ok(key) => Response::new(StatusCode::OK).with_body(key),
        Err(err) => {
            error!(error = %err, "url shortening failed");
            Response::from_error(&err)
        }
    }
}

/// Writes the record for `req` and returns the key it was stored under.
pub fn register<S: KvStore + ?Sized>(
    req: &Request,
    store: &S,
    config: &Config,
) -> Result<String, ErrorKind> {
    let url = req.query(&config.url_param).ok_or(ErrorKind::MissingUrl)?;
    let alias = req.query(&config.alias_param);
    let password = req.header(&config.password_header).map(str::to_owned);
    let old_password = req
        .header(&config.old_password_header)
        .map(str::to_owned)
        .or_else(|| password.clone());

    let key = match &alias {
        Some(alias) => alias.clone(),
        None => generate_key(store, &url, config.short_key_length)
            .ok_or(ErrorKind::GeneratedKeyTaken)?,
    };

    if !key_available(store, &key) && !authenticate(store, &key, old_password.as_deref()) {
        return Err(match alias {
            Some(_) => ErrorKind::AliasTaken,
            None => ErrorKind::GeneratedKeyTaken,
        });
    }

    let record = encode(&StoredValue {
        url,
        secret: password,
    })?;
    store.put(&key, record).map_err(ErrorKind::Write)?;
    info!(key = %key, "short link stored");
    Ok(key)
}

/// Whether `password` matches the secret of the record stored under `key`.
fn authenticate<S: KvStore + ?Sized>(store: &S, key: &str, password: Option<&str>) -> bool {
    let Ok(record) = store.get(key) else {
        return false;
    };
    let stored = match decode(&record) {
        Ok(value) => value,
        Err(err) => {
            warn!(key = %key, error = %err, "value in store is invalid");
            return false;
        }
    };
    match (stored.secret(), password) {
        (Some(secret), Some(given)) => secret == given,
        // Records without a secret are not editable.
        _ => false,
    }
}
