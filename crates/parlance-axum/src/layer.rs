// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-request locale binding middleware.
//!
//! [`I18nLayer`] runs before every handler: it reads the locale cookie,
//! resolves the effective locale against the configured set, fetches that
//! locale's catalog from the shared cache and attaches a
//! [`Translator`] plus [`ActiveLocale`] to the request extensions.
//!
//! The middleware never fails a request and never touches the response:
//! an unsupported or absent cookie resolves to the default locale, and a
//! broken catalog has already been absorbed into an empty one by the cache.
//! Setting the cookie is the endpoints' job (see [`crate::router`]), not
//! this layer's. Because there is no rejection branch, the service reuses
//! the inner service's future type directly.

use axum::body::Body;
use http::header::COOKIE;
use http::{HeaderMap, Request};
use parlance_i18n::{resolve_locale, Translator};
use std::task::{Context, Poll};
use tower::{Layer, Service};

use crate::extract::ActiveLocale;
use crate::state::I18nState;

/// Tower layer attaching a [`Translator`] to every request.
///
/// # Example
///
/// ```ignore
/// Router::new()
///     .route("/greet", get(greet))
///     .layer(I18nLayer::new(state.clone()))
///     .with_state(state);
/// ```
#[derive(Debug, Clone)]
pub struct I18nLayer {
	state: I18nState,
}

impl I18nLayer {
	/// Create the layer over shared i18n state.
	pub fn new(state: I18nState) -> Self {
		Self { state }
	}
}

impl<S> Layer<S> for I18nLayer {
	type Service = I18nService<S>;

	fn layer(&self, inner: S) -> Self::Service {
		I18nService {
			inner,
			state: self.state.clone(),
		}
	}
}

/// Service wrapper for [`I18nLayer`].
#[derive(Debug, Clone)]
pub struct I18nService<S> {
	inner: S,
	state: I18nState,
}

impl<S> Service<Request<Body>> for I18nService<S>
where
	S: Service<Request<Body>>,
{
	type Response = S::Response;
	type Error = S::Error;
	type Future = S::Future;

	fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
		self.inner.poll_ready(cx)
	}

	fn call(&mut self, mut req: Request<Body>) -> Self::Future {
		let config = self.state.config();
		let cookie = extract_locale_cookie(req.headers(), config.cookie_name());
		let locale = resolve_locale(cookie.as_deref(), config).to_string();

		tracing::debug!(
			locale = %locale,
			cookie_present = cookie.is_some(),
			"resolved request locale"
		);

		let catalog = self.state.cache().get(&locale);
		let translator = Translator::new(&locale, catalog);

		req.extensions_mut().insert(translator);
		req.extensions_mut().insert(ActiveLocale(locale));

		self.inner.call(req)
	}
}

/// Extract the locale cookie value from the `Cookie` header.
///
/// # Arguments
///
/// * `headers` - the HTTP request headers
/// * `cookie_name` - the configured locale cookie name
///
/// # Returns
///
/// The raw cookie value if present, or `None` if the cookie is missing.
/// The value is not validated here; resolution decides whether it names a
/// supported locale.
pub fn extract_locale_cookie(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
	headers
		.get(COOKIE)?
		.to_str()
		.ok()?
		.split(';')
		.find_map(|cookie| {
			let cookie = cookie.trim();
			let (name, value) = cookie.split_once('=')?;

			if name == cookie_name {
				Some(value.to_string())
			} else {
				None
			}
		})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::extract::Localizer;
	use axum::{routing::get, Router};
	use http::header::HeaderValue;
	use http::StatusCode;
	use parlance_i18n::I18nConfig;
	use std::fs;
	use tower::ServiceExt;

	fn write_catalog(root: &std::path::Path, locale: &str, body: &str) {
		let dir = root.join(locale).join("messages");
		fs::create_dir_all(&dir).expect("create catalog dir");
		fs::write(dir.join("messages"), body).expect("write catalog");
	}

	fn test_state(root: &std::path::Path) -> I18nState {
		let config = I18nConfig::new(
			root,
			vec!["en".to_string(), "zh_TW".to_string()],
			"en",
		)
		.expect("valid config");
		I18nState::new(config)
	}

	async fn greet(Localizer(t): Localizer) -> String {
		format!("{}:{}", t.locale(), t.t("hello"))
	}

	fn app(state: I18nState) -> Router {
		Router::new()
			.route("/greet", get(greet))
			.layer(I18nLayer::new(state.clone()))
			.with_state(state)
	}

	async fn body_string(resp: axum::response::Response) -> String {
		let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
			.await
			.expect("read body");
		String::from_utf8(bytes.to_vec()).expect("utf-8 body")
	}

	mod cookie_extraction {
		use super::*;

		#[test]
		fn extracts_locale_from_single_cookie() {
			let mut headers = HeaderMap::new();
			headers.insert(COOKIE, HeaderValue::from_static("locale=zh_TW"));

			assert_eq!(
				extract_locale_cookie(&headers, "locale"),
				Some("zh_TW".to_string())
			);
		}

		#[test]
		fn extracts_locale_from_multiple_cookies() {
			let mut headers = HeaderMap::new();
			headers.insert(
				COOKIE,
				HeaderValue::from_static("session=abc123; locale=en; theme=dark"),
			);

			assert_eq!(
				extract_locale_cookie(&headers, "locale"),
				Some("en".to_string())
			);
		}

		#[test]
		fn returns_none_when_no_cookie_header() {
			let headers = HeaderMap::new();
			assert_eq!(extract_locale_cookie(&headers, "locale"), None);
		}

		#[test]
		fn returns_none_when_locale_cookie_missing() {
			let mut headers = HeaderMap::new();
			headers.insert(COOKIE, HeaderValue::from_static("session=abc123"));

			assert_eq!(extract_locale_cookie(&headers, "locale"), None);
		}

		#[test]
		fn handles_whitespace_around_cookies() {
			let mut headers = HeaderMap::new();
			headers.insert(
				COOKIE,
				HeaderValue::from_static("  locale=en  ; theme=dark"),
			);

			assert_eq!(
				extract_locale_cookie(&headers, "locale"),
				Some("en".to_string())
			);
		}

		#[test]
		fn honors_a_custom_cookie_name() {
			let mut headers = HeaderMap::new();
			headers.insert(
				COOKIE,
				HeaderValue::from_static("lang=zh_TW; locale=en"),
			);

			assert_eq!(
				extract_locale_cookie(&headers, "lang"),
				Some("zh_TW".to_string())
			);
		}
	}

	mod binding {
		use super::*;

		#[tokio::test]
		async fn no_cookie_binds_the_default_locale() {
			let dir = tempfile::tempdir().expect("tempdir");
			write_catalog(dir.path(), "en", r#"{"hello":"Hello"}"#);
			let app = app(test_state(dir.path()));

			let req = Request::get("/greet").body(Body::empty()).expect("request");
			let resp = app.oneshot(req).await.expect("response");

			assert_eq!(resp.status(), StatusCode::OK);
			assert_eq!(body_string(resp).await, "en:Hello");
		}

		#[tokio::test]
		async fn supported_cookie_binds_that_locale() {
			let dir = tempfile::tempdir().expect("tempdir");
			write_catalog(dir.path(), "en", r#"{"hello":"Hello"}"#);
			write_catalog(dir.path(), "zh_TW", r#"{"hello":"哈囉"}"#);
			let app = app(test_state(dir.path()));

			let req = Request::get("/greet")
				.header(COOKIE, "locale=zh_TW")
				.body(Body::empty())
				.expect("request");
			let resp = app.oneshot(req).await.expect("response");

			assert_eq!(resp.status(), StatusCode::OK);
			assert_eq!(body_string(resp).await, "zh_TW:哈囉");
		}

		#[tokio::test]
		async fn unsupported_cookie_binds_the_default_locale() {
			let dir = tempfile::tempdir().expect("tempdir");
			write_catalog(dir.path(), "en", r#"{"hello":"Hello"}"#);
			let app = app(test_state(dir.path()));

			let req = Request::get("/greet")
				.header(COOKIE, "locale=fr")
				.body(Body::empty())
				.expect("request");
			let resp = app.oneshot(req).await.expect("response");

			assert_eq!(resp.status(), StatusCode::OK);
			assert_eq!(body_string(resp).await, "en:Hello");
		}

		#[tokio::test]
		async fn missing_catalog_still_serves_the_request() {
			// No catalog on disk at all: every key is identity.
			let dir = tempfile::tempdir().expect("tempdir");
			let app = app(test_state(dir.path()));

			let req = Request::get("/greet").body(Body::empty()).expect("request");
			let resp = app.oneshot(req).await.expect("response");

			assert_eq!(resp.status(), StatusCode::OK);
			assert_eq!(body_string(resp).await, "en:hello");
		}
	}
}
