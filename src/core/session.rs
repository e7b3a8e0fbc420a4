//! A discovery session bound to a catalog and a storage backend
//!
//! Saved ids and search history are read once when the session opens and
//! written back whenever an action changes them.

use crate::core::discovery::{Action, DiscoverySettings, DiscoveryState, Effect, SavedCourses};
use crate::core::models::Catalog;
use crate::core::storage::{
    load_or_default, save_json, KeyValueStore, StorageError, SAVED_COURSES_KEY,
    SEARCH_HISTORY_KEY,
};
use crate::{debug, error, info};
use std::error::Error;
use std::fmt;
use std::time::Instant;

/// A write that failed after an action had already been applied
///
/// The action's effects are carried along so callers can still report them.
#[derive(Debug)]
pub struct PersistError {
    /// Effects of the applied action
    pub effects: Vec<Effect>,
    /// First storage failure
    pub source: StorageError,
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.source, f)
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Discovery state plus the catalog it browses and the store it persists to
#[derive(Debug)]
pub struct Session<S: KeyValueStore> {
    catalog: Catalog,
    state: DiscoveryState,
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    /// Open a session, restoring saved courses and search history from `store`
    #[must_use]
    pub fn open(catalog: Catalog, settings: DiscoverySettings, store: S) -> Self {
        let saved: SavedCourses = load_or_default(&store, SAVED_COURSES_KEY);
        let history: Vec<String> = load_or_default(&store, SEARCH_HISTORY_KEY);
        info!(
            "session opened: {} courses, {} saved, {} remembered searches",
            catalog.len(),
            saved.len(),
            history.len()
        );
        let state = DiscoveryState::restore(&catalog, settings, saved, history);
        Self {
            catalog,
            state,
            store,
        }
    }

    /// Apply an action now
    ///
    /// # Errors
    /// Returns a [`PersistError`] if a changed value could not be persisted.
    /// The state transition has already happened and is kept, and the error
    /// holds its effects.
    pub fn dispatch(&mut self, action: Action) -> Result<Vec<Effect>, PersistError> {
        self.dispatch_at(action, Instant::now())
    }

    /// Apply an action at an explicit instant
    ///
    /// # Errors
    /// See [`dispatch`](Self::dispatch).
    pub fn dispatch_at(&mut self, action: Action, now: Instant) -> Result<Vec<Effect>, PersistError> {
        let effects = self.state.apply(&self.catalog, action, now);
        let mut failure = None;
        for effect in &effects {
            let written = match effect {
                Effect::SavedChanged => {
                    debug!("persisting {} saved courses", self.state.saved().len());
                    save_json(&mut self.store, SAVED_COURSES_KEY, self.state.saved())
                }
                Effect::HistoryChanged => {
                    debug!("persisting {} search terms", self.state.history().len());
                    save_json(
                        &mut self.store,
                        SEARCH_HISTORY_KEY,
                        self.state.history().terms(),
                    )
                }
                Effect::Notify(_) | Effect::ScrollToResults => Ok(()),
            };
            if let Err(e) = written {
                error!("{e}");
                failure.get_or_insert(e);
            }
        }
        match failure {
            Some(source) => Err(PersistError { effects, source }),
            None => Ok(effects),
        }
    }

    /// Catalog being browsed
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current discovery state
    #[must_use]
    pub const fn state(&self) -> &DiscoveryState {
        &self.state
    }

    /// Storage backend
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Close the session and hand back the storage backend
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }
}
