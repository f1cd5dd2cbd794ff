// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared i18n state: configuration plus the catalog cache.

use std::sync::Arc;

use parlance_i18n::{CatalogCache, CatalogLoader, FsCatalogLoader, I18nConfig};

/// Application-owned i18n state.
///
/// One instance is constructed at startup and handed to both [`crate::I18nLayer`]
/// and [`crate::router`]; its lifecycle is the application's, not a
/// process-global's. Cloning is cheap (`Arc` all the way down) and every
/// clone shares the same catalog cache.
#[derive(Debug, Clone)]
pub struct I18nState {
	config: Arc<I18nConfig>,
	cache: Arc<CatalogCache>,
}

impl I18nState {
	/// Build state over the filesystem catalog loader.
	pub fn new(config: I18nConfig) -> Self {
		let loader = Arc::new(FsCatalogLoader::new(&config));
		Self::with_loader(config, loader)
	}

	/// Build state over a custom catalog loader.
	///
	/// Used by tests and by deployments with a different compiled-catalog
	/// format.
	pub fn with_loader(config: I18nConfig, loader: Arc<dyn CatalogLoader>) -> Self {
		let cache = Arc::new(CatalogCache::new(config.supported_locales(), loader));
		Self {
			config: Arc::new(config),
			cache,
		}
	}

	/// The validated i18n configuration.
	pub fn config(&self) -> &I18nConfig {
		&self.config
	}

	/// The shared catalog cache.
	pub fn cache(&self) -> &CatalogCache {
		&self.cache
	}
}
