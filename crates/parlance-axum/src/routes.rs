// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale endpoints: set the locale cookie, dump a locale's catalog.
//!
//! Unlike the silent cookie-or-default fallback on the request path, these
//! endpoints reject unsupported locales explicitly - the caller named a
//! locale, so coercing it to the default would hide the mistake.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use http::header::SET_COOKIE;
use http::StatusCode;
use serde::Serialize;

use crate::state::I18nState;

/// Lifetime of the locale cookie: 30 days.
const LOCALE_COOKIE_MAX_AGE_SECS: u64 = 30 * 24 * 3600;

/// Success body for `GET /api/set-language/{locale}`.
#[derive(Debug, Clone, Serialize)]
pub struct SetLanguageResponse {
	/// Always `"success"`.
	pub status: String,
	/// The locale the cookie was set to.
	pub locale: String,
}

/// JSON error body for rejected locale endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
	/// Stable error code.
	pub error: String,
	/// Human-readable message.
	pub message: String,
}

/// The locale endpoints.
///
/// - `GET /api/set-language/{locale}` - set the locale cookie; 400 for an
///   unsupported locale
/// - `GET /api/translations/{locale}` - the locale's full key -> text
///   catalog as a JSON object; 404 for an unsupported locale
pub fn router() -> Router<I18nState> {
	Router::new()
		.route("/api/set-language/{locale}", get(set_language))
		.route("/api/translations/{locale}", get(get_translations))
}

/// GET /api/set-language/{locale} - persist the locale choice in a cookie.
///
/// The cookie takes effect on subsequent requests; the current request's
/// locale was already resolved by the layer before this handler ran.
async fn set_language(
	State(state): State<I18nState>,
	Path(locale): Path<String>,
) -> Response {
	if !state.config().is_supported(&locale) {
		tracing::debug!(locale = %locale, "set-language rejected: unsupported locale");
		return (
			StatusCode::BAD_REQUEST,
			Json(ErrorResponse {
				error: "unsupported_locale".to_string(),
				message: format!("locale {locale:?} is not supported"),
			}),
		)
			.into_response();
	}

	let cookie = format!(
		"{}={}; Path=/; Max-Age={}; SameSite=Lax",
		state.config().cookie_name(),
		locale,
		LOCALE_COOKIE_MAX_AGE_SECS
	);

	tracing::debug!(locale = %locale, "locale cookie set");

	(
		StatusCode::OK,
		[(SET_COOKIE, cookie)],
		Json(SetLanguageResponse {
			status: "success".to_string(),
			locale,
		}),
	)
		.into_response()
}

/// GET /api/translations/{locale} - the full catalog for client-side use.
async fn get_translations(
	State(state): State<I18nState>,
	Path(locale): Path<String>,
) -> Response {
	if !state.config().is_supported(&locale) {
		tracing::debug!(locale = %locale, "translations rejected: unsupported locale");
		return (
			StatusCode::NOT_FOUND,
			Json(ErrorResponse {
				error: "unsupported_locale".to_string(),
				message: format!("locale {locale:?} is not supported"),
			}),
		)
			.into_response();
	}

	let catalog = state.cache().get(&locale);
	Json((*catalog).clone()).into_response()
}
