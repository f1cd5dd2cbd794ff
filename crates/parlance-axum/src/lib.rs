// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Axum/tower surface for Parlance i18n.
//!
//! This crate binds the `parlance-i18n` core to HTTP requests:
//! - [`I18nLayer`] - per-request middleware that resolves the locale from
//!   the locale cookie and attaches a [`parlance_i18n::Translator`] to the
//!   request extensions
//! - [`Localizer`] / [`ActiveLocale`] - extractors handlers use to read the
//!   attached translator and resolved locale
//! - [`router`] - the two locale endpoints: set the locale cookie, and dump
//!   a full locale catalog for client-side use
//!
//! # Request Flow
//!
//! ```text
//! Request → I18nLayer (cookie → resolve → cached catalog → Translator)
//!         → handler (Localizer) → Response
//! ```
//!
//! The middleware has no failure branch: catalog problems are absorbed into
//! an empty catalog by the cache, and an unsupported cookie silently falls
//! back to the default locale. Only the endpoints, where a caller names a
//! locale explicitly, reject unsupported locales.
//!
//! # Example
//!
//! ```no_run
//! use axum::{routing::get, Router};
//! use parlance_axum::{I18nLayer, I18nState, Localizer};
//! use parlance_i18n::I18nConfig;
//!
//! async fn greet(Localizer(t): Localizer) -> String {
//!     t.t("hello").to_string()
//! }
//!
//! let config = I18nConfig::new(
//!     "/var/lib/parlance/locales",
//!     vec!["en".to_string(), "zh_TW".to_string()],
//!     "en",
//! )?;
//! let state = I18nState::new(config);
//!
//! let app: Router = Router::new()
//!     .route("/greet", get(greet))
//!     .merge(parlance_axum::router())
//!     .layer(I18nLayer::new(state.clone()))
//!     .with_state(state);
//! # Ok::<(), parlance_i18n::ConfigError>(())
//! ```

mod extract;
mod layer;
mod routes;
mod state;

pub use extract::{ActiveLocale, Localizer, MissingI18nLayer};
pub use layer::{extract_locale_cookie, I18nLayer, I18nService};
pub use routes::{router, ErrorResponse, SetLanguageResponse};
pub use state::I18nState;
