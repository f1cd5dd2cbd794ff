// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Extractors for the request-scoped translator and resolved locale.
//!
//! [`crate::I18nLayer`] populates the request extensions before the handler
//! runs; these extractors are the read-only view handlers get. Extraction
//! only fails if the layer was never installed, which is a wiring bug, not
//! a runtime condition - it rejects with 500 and an error log.

use axum::extract::FromRequestParts;
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::request::Parts;
use http::StatusCode;
use parlance_i18n::Translator;

use crate::routes::ErrorResponse;

/// The translator bound to this request's resolved locale.
///
/// # Example
///
/// ```ignore
/// async fn greet(Localizer(t): Localizer) -> String {
///     t.t("server.greeting").to_string()
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Localizer(pub Translator);

/// The locale code resolved for this request.
#[derive(Debug, Clone)]
pub struct ActiveLocale(pub String);

/// Rejection for a request that never passed through [`crate::I18nLayer`].
#[derive(Debug, Clone, Copy)]
pub struct MissingI18nLayer;

impl std::fmt::Display for MissingI18nLayer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "i18n layer not installed")
	}
}

impl std::error::Error for MissingI18nLayer {}

impl IntoResponse for MissingI18nLayer {
	fn into_response(self) -> Response {
		(
			StatusCode::INTERNAL_SERVER_ERROR,
			Json(ErrorResponse {
				error: "internal_error".to_string(),
				message: "i18n layer not installed".to_string(),
			}),
		)
			.into_response()
	}
}

impl<S> FromRequestParts<S> for Localizer
where
	S: Send + Sync,
{
	type Rejection = MissingI18nLayer;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		parts
			.extensions
			.get::<Translator>()
			.cloned()
			.map(Localizer)
			.ok_or_else(|| {
				tracing::error!("translator missing from request extensions; is I18nLayer installed?");
				MissingI18nLayer
			})
	}
}

impl<S> FromRequestParts<S> for ActiveLocale
where
	S: Send + Sync,
{
	type Rejection = MissingI18nLayer;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		parts.extensions.get::<ActiveLocale>().cloned().ok_or_else(|| {
			tracing::error!("active locale missing from request extensions; is I18nLayer installed?");
			MissingI18nLayer
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::body::Body;
	use axum::{routing::get, Router};
	use http::Request;
	use tower::ServiceExt;

	async fn needs_translator(Localizer(t): Localizer) -> String {
		t.t("hello").to_string()
	}

	async fn needs_locale(ActiveLocale(locale): ActiveLocale) -> String {
		locale
	}

	#[tokio::test]
	async fn missing_layer_rejects_with_500() {
		let app = Router::new().route("/", get(needs_translator));

		let req = Request::get("/").body(Body::empty()).expect("request");
		let resp = app.oneshot(req).await.expect("response");

		assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[tokio::test]
	async fn missing_layer_rejects_active_locale_too() {
		let app = Router::new().route("/", get(needs_locale));

		let req = Request::get("/").body(Body::empty()).expect("request");
		let resp = app.oneshot(req).await.expect("response");

		assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
	}
}
