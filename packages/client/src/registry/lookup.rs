//! Registry lookup transport.
//!
//! One outbound `GET {base-url}/api/v1/clients/{identifier}` per lookup.
//! No retries, no caching, no deduplication of concurrent calls.

use bytes::Bytes;
use http::{header, Method, Request, Uri};
use http_body_util::{BodyExt, Empty};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::{TokioExecutor, TokioTimer};

use crate::config::RegistryConfig;
use crate::error::ValidationError;
use crate::registry::Certificate;

pub(crate) type RegistryConnector = hyper_rustls::HttpsConnector<HttpConnector>;

/// Shared hyper client used for every lookup a validator performs.
pub(crate) type RegistryHttpClient = Client<RegistryConnector, Empty<Bytes>>;

/// Build the hyper client for `config`.
///
/// Plain-http targets stay reachable so local registries can be pointed at
/// with `base_url`; https targets verify against the webpki root set.
pub(crate) fn build_http_client(config: &RegistryConfig) -> RegistryHttpClient {
    let mut connector = HttpConnector::new();
    connector.set_connect_timeout(Some(config.connect_timeout));
    connector.enforce_http(false);

    let connector = hyper_rustls::HttpsConnectorBuilder::new()
        .with_webpki_roots()
        .https_or_http()
        .enable_http1()
        .wrap_connector(connector);

    Client::builder(TokioExecutor::new())
        .pool_timer(TokioTimer::new())
        .build(connector)
}

/// Perform the single lookup request for `identifier`.
///
/// Every status, transport, and decode failure collapses into
/// [`ValidationError::LookupFailed`]; the underlying cause is logged at
/// debug level and then discarded.
pub(crate) async fn fetch_certificate(
    client: &RegistryHttpClient,
    config: &RegistryConfig,
    identifier: &str,
) -> Result<Certificate, ValidationError> {
    let uri = lookup_uri(config, identifier)?;

    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::ACCEPT, "application/json")
        .header(header::USER_AGENT, config.user_agent.as_str())
        .body(Empty::new())
        .map_err(|e| lookup_failed("request", &e))?;

    let response = tokio::time::timeout(config.timeout, client.request(request))
        .await
        .map_err(|elapsed| lookup_failed("timeout", &elapsed))?
        .map_err(|e| lookup_failed("transport", &e))?;

    let status = response.status();
    if !status.is_success() {
        tracing::debug!(%status, "registry returned non-success status");
        return Err(ValidationError::LookupFailed);
    }

    let body = response
        .into_body()
        .collect()
        .await
        .map_err(|e| lookup_failed("body", &e))?
        .to_bytes();

    serde_json::from_slice(&body).map_err(|e| lookup_failed("decode", &e))
}

/// Build the lookup URI. The identifier is embedded in the path exactly as
/// supplied; an identifier the URI grammar rejects fails the lookup like
/// any other cause.
fn lookup_uri(config: &RegistryConfig, identifier: &str) -> Result<Uri, ValidationError> {
    let base = config.base_url.as_str().trim_end_matches('/');
    format!("{base}/api/v1/clients/{identifier}")
        .parse::<Uri>()
        .map_err(|e| lookup_failed("uri", &e))
}

fn lookup_failed(stage: &'static str, cause: &dyn std::fmt::Display) -> ValidationError {
    tracing::debug!(stage, %cause, "certificate lookup failed");
    ValidationError::LookupFailed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_uri_embeds_the_raw_identifier() {
        let config = RegistryConfig::with_base_url("http://127.0.0.1:8080").expect("valid config");
        let uri = lookup_uri(&config, "1234567890").expect("valid uri");
        assert_eq!(uri.to_string(), "http://127.0.0.1:8080/api/v1/clients/1234567890");
    }

    #[test]
    fn lookup_uri_does_not_double_the_separator() {
        let config =
            RegistryConfig::with_base_url("http://127.0.0.1:8080/").expect("valid config");
        let uri = lookup_uri(&config, "42").expect("valid uri");
        assert_eq!(uri.path(), "/api/v1/clients/42");
    }

    #[test]
    fn identifier_rejected_by_the_uri_grammar_fails_the_lookup() {
        let config = RegistryConfig::default();
        assert_eq!(
            lookup_uri(&config, "12 34").unwrap_err(),
            ValidationError::LookupFailed
        );
    }
}
