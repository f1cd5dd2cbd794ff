// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for configuration and catalog loading.
//!
//! [`ConfigError`] is fatal: it is surfaced at startup and the application
//! must not begin serving requests. [`CatalogError`] never crosses the
//! request path; [`crate::CatalogCache`] absorbs it into an empty catalog.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal configuration errors, surfaced at initialization.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The supported-locale set is empty.
	#[error("supported locale set must not be empty")]
	NoSupportedLocales,

	/// The default locale is not a member of the supported set.
	#[error("default locale {default_locale:?} is not in the supported set {supported_locales:?}")]
	DefaultLocaleNotSupported {
		default_locale: String,
		supported_locales: Vec<String>,
	},

	/// The catalog root does not exist or is not a directory.
	#[error("localedir {path:?} is not a directory")]
	LocaledirMissing { path: PathBuf },

	/// A required environment variable is unset (see [`crate::I18nConfig::from_env`]).
	#[error("missing environment variable {name}")]
	MissingEnv { name: &'static str },
}

/// Errors from loading a single locale's catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// No catalog exists for this locale.
	#[error("no catalog for locale {locale:?} at {path:?}")]
	NotFound { locale: String, path: PathBuf },

	/// The catalog file exists but could not be read.
	#[error("failed to read catalog at {path:?}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The catalog file exists but is not a valid key -> text object.
	#[error("malformed catalog at {path:?}")]
	Malformed {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}
