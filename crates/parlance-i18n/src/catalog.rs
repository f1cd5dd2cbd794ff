// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation catalogs and the on-disk loader seam.
//!
//! A [`Catalog`] is a flat message-key -> localized-text map for exactly one
//! locale, immutable once loaded. [`CatalogLoader`] abstracts the compiled
//! on-disk format; [`FsCatalogLoader`] is the production implementation,
//! reading compiled JSON objects from
//! `<localedir>/<locale>/<domain>/messages`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::config::I18nConfig;
use crate::error::CatalogError;

/// All message-key -> localized-text mappings for one locale.
///
/// Immutable for the life of the process once loaded; there is no hot
/// reload. Serializes transparently as a JSON object, which is exactly the
/// body of the dump-catalog endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
	entries: BTreeMap<String, String>,
}

impl Catalog {
	/// Create a catalog from its entries.
	pub fn new(entries: BTreeMap<String, String>) -> Self {
		Self { entries }
	}

	/// The empty catalog: every key falls back to itself.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Localized text for `key`, if the catalog has it.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.get(key).map(String::as_str)
	}

	/// Iterate over `(key, text)` pairs in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the catalog has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl FromIterator<(String, String)> for Catalog {
	fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().collect(),
		}
	}
}

/// Seam for the compiled catalog format.
///
/// Given a locale code, produce that locale's catalog or report why not.
/// Implementations must distinguish absence ([`CatalogError::NotFound`])
/// from read and parse failures so callers can log accurately, though the
/// cache degrades all three the same way.
pub trait CatalogLoader: Send + Sync {
	/// Load the catalog for `locale`.
	fn load(&self, locale: &str) -> Result<Catalog, CatalogError>;
}

/// Filesystem loader for compiled JSON catalogs.
///
/// Layout: `<localedir>/<locale>/<domain>/messages`, one file per locale,
/// containing a single JSON object of key -> text pairs.
#[derive(Debug, Clone)]
pub struct FsCatalogLoader {
	localedir: PathBuf,
	domain: String,
}

impl FsCatalogLoader {
	/// Create a loader for the configured catalog root and domain.
	pub fn new(config: &I18nConfig) -> Self {
		Self {
			localedir: config.localedir().to_path_buf(),
			domain: config.domain().to_string(),
		}
	}

	/// Path of the catalog file for `locale`.
	fn catalog_path(&self, locale: &str) -> PathBuf {
		self.localedir.join(locale).join(&self.domain).join("messages")
	}
}

impl CatalogLoader for FsCatalogLoader {
	fn load(&self, locale: &str) -> Result<Catalog, CatalogError> {
		let path = self.catalog_path(locale);

		let bytes = match std::fs::read(&path) {
			Ok(bytes) => bytes,
			Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
				return Err(CatalogError::NotFound {
					locale: locale.to_string(),
					path,
				});
			}
			Err(source) => return Err(CatalogError::Io { path, source }),
		};

		let entries: BTreeMap<String, String> = serde_json::from_slice(&bytes)
			.map_err(|source| CatalogError::Malformed {
				path: path.clone(),
				source,
			})?;

		Ok(Catalog::new(entries))
	}
}
