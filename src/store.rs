//! Global Application State Store
//!
//! Uses Leptos reactive_stores; the roster itself is one field and is only
//! changed through its update functions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use roster_core::{load_all_records, Roster, RosterConfig};

use crate::fetch::BrowserFetch;

#[derive(Clone, Debug, Default, Store)]
pub struct RosterState {
    pub config: RosterConfig,
    pub roster: Roster,
}

impl RosterState {
    pub fn new(config: RosterConfig) -> Self {
        let roster = Roster::new(&config);
        Self { config, roster }
    }
}

/// Type alias for the store
pub type RosterStore = Store<RosterState>;

/// Get the roster store from context
pub fn use_roster_store() -> RosterStore {
    expect_context::<RosterStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Start the one acquisition of this session. Later calls do nothing.
pub fn store_load_roster(store: RosterStore) {
    if !store.roster().write().begin_loading() {
        return;
    }
    let config = store.config().read_untracked().clone();
    spawn_local(async move {
        log::info!("[APP] Loading characters from {}", config.base_endpoint);
        let result = load_all_records(&BrowserFetch, &config).await;
        if let Err(e) = &result {
            log::error!("[APP] Load failed: {}", e);
        }
        store.roster().write().finish_loading(result);
    });
}
