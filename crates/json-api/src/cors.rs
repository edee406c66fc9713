//! Cross-origin request handling

use salvo::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Cors, CorsHandler},
    http::{
        Method,
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderName, HeaderValue},
    },
};
use thiserror::Error;

use crate::config::cors::CorsConfig;

const ANY: &str = "*";

#[derive(Debug, Error)]
pub(crate) enum CorsConfigError {
    #[error("invalid CORS origin {0:?}")]
    Origin(String),

    #[error("invalid CORS method {0:?}")]
    Method(String),
}

fn trimmed(values: &[String]) -> impl Iterator<Item = &str> {
    values
        .iter()
        .map(String::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Build the CORS hoop from configuration.
///
/// Credentials are only allowed when origins are listed explicitly. A
/// wildcard method list then mirrors the preflight's requested method, since
/// `*` cannot be combined with credentials.
pub(crate) fn build(config: &CorsConfig) -> Result<CorsHandler, CorsConfigError> {
    let allow_any_origin =
        config.allow_origins.is_empty() || trimmed(&config.allow_origins).any(|origin| origin == ANY);

    let methods = trimmed(&config.allow_methods)
        .filter(|method| *method != ANY)
        .map(|method| {
            Method::from_bytes(method.to_ascii_uppercase().as_bytes())
                .map_err(|_ignored| CorsConfigError::Method(method.to_owned()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let allow_any_method =
        methods.is_empty() || trimmed(&config.allow_methods).any(|method| method == ANY);

    let headers: Vec<HeaderName> = vec![
        CONTENT_TYPE,
        ACCEPT,
        AUTHORIZATION,
        HeaderName::from_static("x-request-id"),
    ];

    let cors = Cors::new().allow_headers(AllowHeaders::list(headers));

    let cors = if allow_any_method && allow_any_origin {
        cors.allow_methods(AllowMethods::any())
    } else if allow_any_method {
        cors.allow_methods(AllowMethods::mirror_request())
    } else {
        cors.allow_methods(AllowMethods::list(methods))
    };

    let cors = if allow_any_origin {
        cors.allow_origin(AllowOrigin::any())
    } else {
        let origins = trimmed(&config.allow_origins)
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_ignored| CorsConfigError::Origin(origin.to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        cors.allow_origin(AllowOrigin::list(origins))
            .allow_credentials(true)
    };

    Ok(cors.into_handler())
}
