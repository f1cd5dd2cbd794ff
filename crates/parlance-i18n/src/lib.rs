// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) core for Parlance.
//!
//! This crate resolves a client's preferred locale and serves message-key
//! lookups out of per-locale translation catalogs loaded from disk. It is
//! framework-free; the HTTP surface lives in `parlance-axum`.
//!
//! # Pieces
//!
//! - [`I18nConfig`] - supported locales, default locale, catalog root
//! - [`resolve_locale`] - cookie-or-default locale resolution
//! - [`CatalogCache`] - load-once-per-locale catalog store
//! - [`Translator`] - per-request key -> localized text lookup
//! - [`CatalogLoader`] - seam for the on-disk catalog format
//!
//! # Lookup Flow
//!
//! ```text
//! cookie value → resolve_locale → CatalogCache::get → Translator::t(key)
//! ```
//!
//! # Fallback Policy
//!
//! A key absent from the active catalog translates to itself (gettext
//! convention). A catalog that is missing or malformed on disk degrades to
//! an empty catalog, so every key falls back to itself; catalog problems
//! never fail a request.
//!
//! # Example
//!
//! ```no_run
//! use parlance_i18n::{CatalogCache, FsCatalogLoader, I18nConfig, Translator, resolve_locale};
//! use std::sync::Arc;
//!
//! let config = I18nConfig::new(
//!     "/var/lib/parlance/locales",
//!     vec!["en".to_string(), "zh_TW".to_string()],
//!     "en",
//! )?;
//!
//! let loader = FsCatalogLoader::new(&config);
//! let cache = CatalogCache::new(config.supported_locales(), Arc::new(loader));
//!
//! let locale = resolve_locale(Some("zh_TW"), &config);
//! let translator = Translator::new(locale, cache.get(locale));
//! assert_eq!(translator.t("missing.key"), "missing.key");
//! # Ok::<(), parlance_i18n::ConfigError>(())
//! ```

mod cache;
mod catalog;
mod config;
mod error;
mod resolve;
mod translator;

pub use cache::CatalogCache;
pub use catalog::{Catalog, CatalogLoader, FsCatalogLoader};
pub use config::{
	I18nConfig, DEFAULT_COOKIE_NAME, DEFAULT_DOMAIN, DEFAULT_LOCALE_ENV_VAR, LOCALEDIR_ENV_VAR,
	SUPPORTED_LOCALES_ENV_VAR,
};
pub use error::{CatalogError, ConfigError};
pub use resolve::resolve_locale;
pub use translator::Translator;
