// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Immutable i18n configuration, validated at startup.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Default name of the locale-selection cookie.
pub const DEFAULT_COOKIE_NAME: &str = "locale";

/// Default message domain (the per-locale catalog subdirectory).
pub const DEFAULT_DOMAIN: &str = "messages";

/// Environment variable naming the catalog root directory.
pub const LOCALEDIR_ENV_VAR: &str = "PARLANCE_I18N_LOCALEDIR";

/// Environment variable listing supported locales, comma-separated.
pub const SUPPORTED_LOCALES_ENV_VAR: &str = "PARLANCE_I18N_SUPPORTED_LOCALES";

/// Environment variable naming the default locale.
pub const DEFAULT_LOCALE_ENV_VAR: &str = "PARLANCE_I18N_DEFAULT_LOCALE";

/// Configuration for locale resolution and catalog loading.
///
/// Set once at startup and immutable afterwards. Construction validates the
/// invariants (non-empty supported set, default locale in the supported set,
/// catalog root present on disk), so a held `I18nConfig` is always valid.
///
/// Locale codes are opaque strings compared by exact equality; no
/// case-folding or region-stripping is performed anywhere. `zh_TW` and
/// `zh-TW` are two different locales.
#[derive(Debug, Clone)]
pub struct I18nConfig {
	localedir: PathBuf,
	supported_locales: Vec<String>,
	default_locale: String,
	cookie_name: String,
	domain: String,
}

impl I18nConfig {
	/// Create a validated configuration.
	///
	/// # Arguments
	///
	/// * `localedir` - root directory holding one subdirectory per locale
	/// * `supported_locales` - non-empty set of locale codes
	/// * `default_locale` - locale used when a request names no valid locale;
	///   must be a member of `supported_locales`
	///
	/// # Errors
	///
	/// Returns a [`ConfigError`] if the supported set is empty, the default
	/// locale is not a member of it, or `localedir` is not a directory.
	/// Configuration errors are fatal: do not start serving requests.
	pub fn new(
		localedir: impl Into<PathBuf>,
		supported_locales: Vec<String>,
		default_locale: impl Into<String>,
	) -> Result<Self, ConfigError> {
		let localedir = localedir.into();
		let default_locale = default_locale.into();

		if supported_locales.is_empty() {
			return Err(ConfigError::NoSupportedLocales);
		}

		if !supported_locales.iter().any(|l| *l == default_locale) {
			return Err(ConfigError::DefaultLocaleNotSupported {
				default_locale,
				supported_locales,
			});
		}

		if !localedir.is_dir() {
			return Err(ConfigError::LocaledirMissing { path: localedir });
		}

		Ok(Self {
			localedir,
			supported_locales,
			default_locale,
			cookie_name: DEFAULT_COOKIE_NAME.to_string(),
			domain: DEFAULT_DOMAIN.to_string(),
		})
	}

	/// Create configuration from `PARLANCE_I18N_*` environment variables.
	///
	/// Reads [`LOCALEDIR_ENV_VAR`], [`SUPPORTED_LOCALES_ENV_VAR`]
	/// (comma-separated, whitespace around entries ignored) and
	/// [`DEFAULT_LOCALE_ENV_VAR`], then applies the same validation as
	/// [`I18nConfig::new`].
	pub fn from_env() -> Result<Self, ConfigError> {
		let localedir = std::env::var(LOCALEDIR_ENV_VAR).map_err(|_| ConfigError::MissingEnv {
			name: LOCALEDIR_ENV_VAR,
		})?;
		let supported =
			std::env::var(SUPPORTED_LOCALES_ENV_VAR).map_err(|_| ConfigError::MissingEnv {
				name: SUPPORTED_LOCALES_ENV_VAR,
			})?;
		let default_locale =
			std::env::var(DEFAULT_LOCALE_ENV_VAR).map_err(|_| ConfigError::MissingEnv {
				name: DEFAULT_LOCALE_ENV_VAR,
			})?;

		let supported_locales: Vec<String> = supported
			.split(',')
			.map(|l| l.trim().to_string())
			.filter(|l| !l.is_empty())
			.collect();

		Self::new(localedir, supported_locales, default_locale)
	}

	/// Set the locale cookie name (default: `locale`).
	pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
		self.cookie_name = name.into();
		self
	}

	/// Set the message domain (default: `messages`).
	pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
		self.domain = domain.into();
		self
	}

	/// Root directory of the on-disk catalogs.
	pub fn localedir(&self) -> &Path {
		&self.localedir
	}

	/// The configured supported-locale set.
	pub fn supported_locales(&self) -> &[String] {
		&self.supported_locales
	}

	/// The locale used when a request names no supported locale.
	pub fn default_locale(&self) -> &str {
		&self.default_locale
	}

	/// Name of the locale-selection cookie.
	pub fn cookie_name(&self) -> &str {
		&self.cookie_name
	}

	/// The fixed message domain.
	pub fn domain(&self) -> &str {
		&self.domain
	}

	/// Whether `locale` is a member of the supported set (exact match).
	pub fn is_supported(&self, locale: &str) -> bool {
		self.supported_locales.iter().any(|l| l == locale)
	}
}
