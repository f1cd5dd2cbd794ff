// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Process-lifetime catalog cache with per-locale load-once semantics.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::catalog::{Catalog, CatalogLoader};

/// In-memory store of loaded catalogs, keyed by locale code.
///
/// One slot is pre-allocated per supported locale at construction and the
/// slot map is never touched again, so lookups take no lock. Each slot is a
/// [`OnceCell`]: the first caller for a locale performs the disk load while
/// concurrent callers for that same locale wait on the cell, and loads for
/// *different* locales proceed in parallel. Exactly one underlying load
/// happens per locale for the life of the process; entries are never
/// evicted (the catalog set is bounded by the supported-locale set).
///
/// A load failure of any kind - missing catalog, unreadable file, malformed
/// content - degrades to a shared empty catalog stored in the slot. Every
/// key then falls back to itself; a broken catalog never becomes a
/// request-time fault, and the load is not re-attempted.
pub struct CatalogCache {
	slots: HashMap<String, OnceCell<Arc<Catalog>>>,
	loader: Arc<dyn CatalogLoader>,
	empty: Arc<Catalog>,
}

impl CatalogCache {
	/// Create an empty cache over the supported-locale set.
	///
	/// # Arguments
	///
	/// * `supported_locales` - the startup-fixed locale set; one cache slot
	///   is allocated per member
	/// * `loader` - the catalog-format collaborator invoked on first access
	pub fn new(supported_locales: &[String], loader: Arc<dyn CatalogLoader>) -> Self {
		let slots = supported_locales
			.iter()
			.map(|locale| (locale.clone(), OnceCell::new()))
			.collect();

		Self {
			slots,
			loader,
			empty: Arc::new(Catalog::empty()),
		}
	}

	/// The catalog for `locale`, loading it on first access.
	///
	/// Callers are expected to pass a supported locale (locale resolution
	/// guarantees this on the request path). A locale outside the supported
	/// set is answered with the empty catalog and logged, not panicked on -
	/// nothing reachable from a request may fail here.
	pub fn get(&self, locale: &str) -> Arc<Catalog> {
		let Some(slot) = self.slots.get(locale) else {
			tracing::warn!(locale, "catalog requested for unsupported locale");
			return Arc::clone(&self.empty);
		};

		let catalog = slot.get_or_init(|| match self.loader.load(locale) {
			Ok(catalog) => {
				tracing::debug!(locale, entries = catalog.len(), "catalog loaded");
				Arc::new(catalog)
			}
			Err(err) => {
				tracing::warn!(locale, error = %err, "catalog load failed, serving empty catalog");
				Arc::clone(&self.empty)
			}
		});

		Arc::clone(catalog)
	}

	/// Whether the catalog for `locale` has been loaded (or degraded) already.
	pub fn is_loaded(&self, locale: &str) -> bool {
		self.slots
			.get(locale)
			.is_some_and(|slot| slot.get().is_some())
	}
}

impl fmt::Debug for CatalogCache {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let loaded: Vec<_> = self
			.slots
			.iter()
			.filter(|(_, slot)| slot.get().is_some())
			.map(|(locale, _)| locale.as_str())
			.collect();
		f.debug_struct("CatalogCache")
			.field("locales", &self.slots.keys().collect::<Vec<_>>())
			.field("loaded", &loaded)
			.finish()
	}
}
