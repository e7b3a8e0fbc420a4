//! CLI command handlers for `coursefinder`.
//!
//! Each command is implemented in its own submodule. Commands that browse the
//! catalog share a [`Session`] opened by [`open_session`].

pub mod compare;
pub mod config;
pub mod facets;
pub mod history;
pub mod list;
pub mod saved;
pub mod shell;

use course_finder::config::Config;
use course_finder::core::discovery::{Action, DiscoverySettings, Effect};
use course_finder::core::models::Catalog;
use course_finder::core::render::ViewRenderer;
use course_finder::core::session::Session;
use course_finder::core::storage::FileStore;
use course_finder::{error, info};

/// Session type used by every browsing command
pub type CliSession = Session<FileStore>;

/// Load the configured catalog and open a session on the configured data directory
///
/// # Errors
/// Returns a printable message if the catalog file cannot be loaded.
pub fn open_session(config: &Config) -> Result<CliSession, String> {
    let catalog = if config.catalog.file.is_empty() {
        Catalog::sample()
    } else {
        Catalog::load(&config.catalog.file).map_err(|e| {
            error!("Failed to load catalog {}: {e}", config.catalog.file);
            format!("✗ Failed to load catalog {}: {e}", config.catalog.file)
        })?
    };
    info!("Catalog loaded: {} courses", catalog.len());

    let store = FileStore::new(&config.storage.data_dir);
    let settings = DiscoverySettings::from_config(&config.catalog);
    Ok(Session::open(catalog, settings, store))
}

/// Apply an action, printing any notifications it raises
///
/// Storage failures are reported but the state change and its notices are kept.
pub fn dispatch(session: &mut CliSession, renderer: &dyn ViewRenderer, action: Action) -> Vec<Effect> {
    let effects = session.dispatch(action).unwrap_or_else(|e| {
        eprintln!("✗ {e}");
        e.effects
    });
    for effect in &effects {
        if let Effect::Notify(kind) = effect {
            println!("{}", renderer.notice(kind));
        }
    }
    effects
}
