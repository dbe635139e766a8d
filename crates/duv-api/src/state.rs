//! # Application State
//!
//! The single `Store` of the process, shared by every handler.
//!
//! The lock is `parking_lot::RwLock` and is never held across an `.await`.
//! Each handler runs its whole store operation (checks and mutation) inside
//! one closure passed to [`AppState::read`] or [`AppState::write`], so no
//! other request can interleave between a reference check and the write it
//! guards.

use std::sync::Arc;
use std::time::Duration;

use duv_core::{LenientResolve, ReferencePolicy, Store, StrictValidate};
use parking_lot::RwLock;

use crate::config::ApiConfig;

/// Request handling switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerSettings {
    pub lenient_declaration_updates: bool,
    pub require_crew_service_id: bool,
    pub body_limit_bytes: usize,
}

impl Default for HandlerSettings {
    fn default() -> Self {
        Self::from(&ApiConfig::default())
    }
}

impl From<&ApiConfig> for HandlerSettings {
    fn from(config: &ApiConfig) -> Self {
        Self {
            lenient_declaration_updates: config.lenient_declaration_updates,
            require_crew_service_id: config.require_crew_service_id,
            body_limit_bytes: config.body_limit_bytes,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    store: Arc<RwLock<Store>>,
    pub settings: HandlerSettings,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self::with_settings(store, HandlerSettings::default())
    }

    pub fn with_settings(store: Store, settings: HandlerSettings) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            settings,
        }
    }

    /// Run `f` against a consistent snapshot of the store
    pub fn read<R>(&self, f: impl FnOnce(&Store) -> R) -> R {
        f(&self.store.read())
    }

    /// Run `f` with exclusive access to the store
    pub fn write<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        f(&mut self.store.write())
    }

    /// Policy applied to references supplied in a declaration update
    pub fn declaration_update_policy(&self) -> &'static dyn ReferencePolicy {
        if self.settings.lenient_declaration_updates {
            &LenientResolve
        } else {
            &StrictValidate
        }
    }

    /// Whether the store lock can be taken within `timeout`
    pub fn is_ready(&self, timeout: Duration) -> bool {
        self.store.try_read_for(timeout).is_some()
    }

    /// Hand the store back once every other handle is gone
    ///
    /// Returns `None` while the router (or a test) still holds a clone.
    pub fn into_store(self) -> Option<Store> {
        Arc::try_unwrap(self.store).ok().map(RwLock::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_follows_settings() {
        let strict = AppState::new(Store::new());
        assert_eq!(strict.declaration_update_policy().name(), "strict_validate");

        let lenient = AppState::with_settings(
            Store::new(),
            HandlerSettings {
                lenient_declaration_updates: true,
                ..HandlerSettings::default()
            },
        );
        assert_eq!(lenient.declaration_update_policy().name(), "lenient_resolve");
    }

    #[test]
    fn write_is_visible_to_later_reads() {
        let state = AppState::new(Store::new());
        state.write(|store| {
            duv_core::ops::ship_ops::create_ship(store, duv_core::ShipFields::new("Aurora", "Malta"))
        })
        .unwrap();

        assert_eq!(state.read(|store| store.ships().len()), 1);
        assert!(state.is_ready(Duration::from_millis(10)));
    }

    #[test]
    fn into_store_requires_sole_owner() {
        let state = AppState::new(Store::new());
        let other = state.clone();
        assert!(state.into_store().is_none());
        assert!(other.into_store().is_some());
    }
}
