// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use crate::config::I18nConfig;

/// Resolve the effective locale for one request.
///
/// Resolution order (highest to lowest priority):
/// 1. The locale cookie value, if present, non-empty and supported
/// 2. The configured default locale
///
/// Matching is exact string equality. An empty cookie value counts as
/// absent, and a regional variant of a supported code (`en-US` when only
/// `en` is supported) does not match. There is no Accept-Language
/// negotiation; cookie-or-default is the whole policy.
///
/// # Arguments
///
/// * `cookie_value` - raw locale cookie value from the request, if any
/// * `config` - validated i18n configuration
///
/// # Returns
///
/// A locale code borrowed from `config`, guaranteed to be supported.
///
/// # Example
///
/// ```
/// use parlance_i18n::{resolve_locale, I18nConfig};
///
/// # let dir = tempfile::tempdir().unwrap();
/// let config = I18nConfig::new(dir.path(), vec!["en".into(), "zh_TW".into()], "en")?;
///
/// assert_eq!(resolve_locale(Some("zh_TW"), &config), "zh_TW");
/// assert_eq!(resolve_locale(Some("fr"), &config), "en");
/// assert_eq!(resolve_locale(None, &config), "en");
/// # Ok::<(), parlance_i18n::ConfigError>(())
/// ```
pub fn resolve_locale<'a>(cookie_value: Option<&str>, config: &'a I18nConfig) -> &'a str {
	if let Some(value) = cookie_value {
		if !value.is_empty() {
			if let Some(supported) = config.supported_locales().iter().find(|l| *l == value) {
				return supported;
			}
		}
	}

	config.default_locale()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config(dir: &tempfile::TempDir) -> I18nConfig {
		I18nConfig::new(
			dir.path(),
			vec!["en".to_string(), "zh_TW".to_string()],
			"en",
		)
		.expect("valid config")
	}

	#[test]
	fn supported_cookie_takes_priority() {
		let dir = tempfile::tempdir().expect("tempdir");
		let config = config(&dir);
		assert_eq!(resolve_locale(Some("zh_TW"), &config), "zh_TW");
		assert_eq!(resolve_locale(Some("en"), &config), "en");
	}

	#[test]
	fn absent_cookie_falls_to_default() {
		let dir = tempfile::tempdir().expect("tempdir");
		let config = config(&dir);
		assert_eq!(resolve_locale(None, &config), "en");
	}

	#[test]
	fn unsupported_cookie_falls_to_default() {
		let dir = tempfile::tempdir().expect("tempdir");
		let config = config(&dir);
		assert_eq!(resolve_locale(Some("fr"), &config), "en");
		assert_eq!(resolve_locale(Some("invalid"), &config), "en");
	}

	#[test]
	fn empty_cookie_is_treated_as_absent() {
		let dir = tempfile::tempdir().expect("tempdir");
		let config = config(&dir);
		assert_eq!(resolve_locale(Some(""), &config), "en");
	}

	#[test]
	fn regional_variant_of_supported_code_does_not_match() {
		let dir = tempfile::tempdir().expect("tempdir");
		let config = config(&dir);
		assert_eq!(resolve_locale(Some("en-US"), &config), "en");
		assert_eq!(resolve_locale(Some("zh_TW.UTF-8"), &config), "en");
	}

	#[test]
	fn matching_is_case_sensitive() {
		let dir = tempfile::tempdir().expect("tempdir");
		let config = config(&dir);
		assert_eq!(resolve_locale(Some("EN"), &config), "en");
		assert_eq!(resolve_locale(Some("zh_tw"), &config), "en");
	}

	mod property_tests {
		use super::*;
		use proptest::prelude::*;

		proptest! {
			/// The resolved locale is always a member of the supported set,
			/// whatever the cookie contains.
			#[test]
			fn resolution_always_yields_a_supported_locale(cookie in any::<Option<String>>()) {
				let dir = tempfile::tempdir().expect("tempdir");
				let config = config(&dir);

				let resolved = resolve_locale(cookie.as_deref(), &config);
				prop_assert!(config.is_supported(resolved));
			}

			/// A cookie naming a supported locale always resolves to exactly
			/// that locale; anything else resolves to the default.
			#[test]
			fn resolution_is_cookie_or_default(cookie in "[a-zA-Z_\\-]{0,8}") {
				let dir = tempfile::tempdir().expect("tempdir");
				let config = config(&dir);

				let resolved = resolve_locale(Some(&cookie), &config);
				if config.is_supported(&cookie) {
					prop_assert_eq!(resolved, cookie.as_str());
				} else {
					prop_assert_eq!(resolved, config.default_locale());
				}
			}
		}
	}
}
