// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-request translator bound to one resolved locale.

use std::sync::Arc;

use crate::catalog::Catalog;

/// Message-key lookup over one resolved locale's catalog.
///
/// Constructed fresh per request and destroyed with it; cloning is cheap
/// (two `Arc` bumps) because the translator borrows the cached catalog
/// rather than copying it.
///
/// A key absent from the catalog translates to itself - the gettext
/// identity-fallback convention. This holds even when the catalog is the
/// empty one a failed load degraded to, so translation never errors and
/// never produces an empty string for a missing key.
#[derive(Debug, Clone)]
pub struct Translator {
	locale: Arc<str>,
	catalog: Arc<Catalog>,
}

impl Translator {
	/// Bind a translator to a resolved locale and its catalog.
	pub fn new(locale: &str, catalog: Arc<Catalog>) -> Self {
		Self {
			locale: Arc::from(locale),
			catalog,
		}
	}

	/// The resolved locale this translator serves.
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Localized text for `key`, or `key` itself if untranslated.
	pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
		self.catalog.get(key).unwrap_or(key)
	}

	/// Short alias for [`Translator::translate`].
	pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
		self.translate(key)
	}

	/// The catalog this translator reads from.
	pub fn catalog(&self) -> &Arc<Catalog> {
		&self.catalog
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn translator() -> Translator {
		let catalog: Catalog = [
			("hello".to_string(), "Hello".to_string()),
			(
				"welcome".to_string(),
				"Welcome to our application!".to_string(),
			),
		]
		.into_iter()
		.collect();
		Translator::new("en", Arc::new(catalog))
	}

	#[test]
	fn translates_known_keys() {
		let t = translator();
		assert_eq!(t.t("hello"), "Hello");
		assert_eq!(t.translate("welcome"), "Welcome to our application!");
	}

	#[test]
	fn unknown_key_falls_back_to_itself() {
		let t = translator();
		assert_eq!(t.t("goodbye"), "goodbye");
		assert_eq!(t.t(""), "");
	}

	#[test]
	fn empty_catalog_is_all_identity() {
		let t = Translator::new("zh_TW", Arc::new(Catalog::empty()));
		assert_eq!(t.locale(), "zh_TW");
		assert_eq!(t.t("hello"), "hello");
		assert_eq!(t.t("welcome"), "welcome");
	}

	#[test]
	fn clone_shares_the_catalog() {
		let t = translator();
		let clone = t.clone();
		assert!(Arc::ptr_eq(t.catalog(), clone.catalog()));
	}

	mod property_tests {
		use super::*;
		use proptest::prelude::*;

		proptest! {
			/// Identity fallback: any key absent from the catalog translates
			/// to exactly itself, never empty, never an error.
			#[test]
			fn missing_keys_translate_to_themselves(key in "\\PC*") {
				let t = Translator::new("en", Arc::new(Catalog::empty()));
				prop_assert_eq!(t.t(&key), key.as_str());
			}
		}
	}
}
