//! Local form-state store.
//!
//! All form state lives in one JSON document on disk: loaded once at
//! startup, written back on every change. The store is deliberately
//! forgiving - a missing, corrupt or partial file yields defaults, because a
//! quotation tool must never refuse to start over a half-typed saved form.
//!
//! Schema migrations happen here, at the load boundary, and nowhere else.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::models::{BookingDetails, CustomerData, EventParameters, ItemSelection, QuoteRequest};

/// Everything the forms have captured, across both flows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub event: EventParameters,
    #[serde(default)]
    pub selection: ItemSelection,
    #[serde(default)]
    pub customer: CustomerData,
    #[serde(default)]
    pub booking: BookingDetails,
    #[serde(default)]
    pub quote_request: QuoteRequest,
}

/// Owns the persisted document and mirrors every change to disk.
pub struct FormStore {
    path: PathBuf,
    state: RwLock<PersistedState>,
}

impl FormStore {
    /// Load the saved state, or start fresh when there is nothing usable.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = match fs::read_to_string(&path) {
            Ok(raw) => parse_state(&raw).unwrap_or_else(|e| {
                warn!("Discarding unreadable state file {}: {}", path.display(), e);
                PersistedState::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No saved state at {}, starting fresh", path.display());
                PersistedState::default()
            }
            Err(e) => {
                warn!("Failed to read state file {}: {}", path.display(), e);
                PersistedState::default()
            }
        };
        Self {
            path,
            state: RwLock::new(state),
        }
    }

    /// A full copy of the current state for rendering or calculation.
    pub fn snapshot(&self) -> PersistedState {
        self.state.read().expect("state lock poisoned").clone()
    }

    /// Apply a mutation and write the document back.
    ///
    /// Write failures are logged but never propagated: losing a save must
    /// not take the in-memory session down with it.
    pub fn update<F>(&self, mutate: F)
    where
        F: FnOnce(&mut PersistedState),
    {
        let mut state = self.state.write().expect("state lock poisoned");
        mutate(&mut state);
        if let Err(e) = write_state(&self.path, &state) {
            warn!("Failed to save state to {}: {}", self.path.display(), e);
        }
    }
}

fn write_state(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}

fn parse_state(raw: &str) -> Result<PersistedState, serde_json::Error> {
    let mut doc: serde_json::Value = serde_json::from_str(raw)?;
    migrate(&mut doc);
    serde_json::from_value(doc)
}

/// Upgrade older document shapes in place.
///
/// Older quote-request saves stored a single branding discriminator
/// `branding.requirement: "none" | "brand-logo" | "brand-colour"`; newer
/// documents carry two independent boolean flags instead.
fn migrate(doc: &mut serde_json::Value) {
    let Some(branding) = doc
        .get_mut("quote_request")
        .and_then(|qr| qr.get_mut("branding"))
        .and_then(|b| b.as_object_mut())
    else {
        return;
    };

    let Some(requirement) = branding.remove("requirement") else {
        return;
    };

    let (logo, colours) = match requirement.as_str() {
        Some("brand-logo") => (true, false),
        Some("brand-colour") => (false, true),
        _ => (false, false),
    };
    branding.insert("include_brand_logo".to_string(), logo.into());
    branding.insert("match_brand_colours".to_string(), colours.into());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TentColor;

    fn temp_state_path() -> PathBuf {
        std::env::temp_dir().join(format!("venusevents-state-{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn missing_file_starts_fresh() {
        let path = temp_state_path();
        let store = FormStore::load(&path);
        assert_eq!(store.snapshot(), PersistedState::default());
    }

    #[test]
    fn update_round_trips_through_disk() {
        let path = temp_state_path();
        let store = FormStore::load(&path);
        store.update(|state| {
            state.selection.tent_10x10.quantity = 2;
            state.selection.tent_10x10.color = TentColor::Red;
            state.event.estimated_guests = 120;
            state.customer.name = "Aminah".to_string();
        });

        let reloaded = FormStore::load(&path);
        let state = reloaded.snapshot();
        assert_eq!(state.selection.tent_10x10.quantity, 2);
        assert_eq!(state.selection.tent_10x10.color, TentColor::Red);
        assert_eq!(state.event.estimated_guests, 120);
        assert_eq!(state.customer.name, "Aminah");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn corrupt_file_starts_fresh() {
        let path = temp_state_path();
        fs::write(&path, "{not json at all").unwrap();
        let store = FormStore::load(&path);
        assert_eq!(store.snapshot(), PersistedState::default());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn partial_document_merges_with_defaults() {
        let state = parse_state(r#"{"selection": {"table_sets": 5}}"#).unwrap();
        assert_eq!(state.selection.table_sets, 5);
        assert_eq!(state.event, EventParameters::default());
        assert_eq!(state.booking, BookingDetails::default());
    }

    #[test]
    fn migrates_legacy_brand_logo_requirement() {
        let state = parse_state(
            r#"{"quote_request": {"branding": {"requirement": "brand-logo", "logo_on_dessert": true}}}"#,
        )
        .unwrap();
        let branding = &state.quote_request.branding;
        assert!(branding.include_brand_logo);
        assert!(!branding.match_brand_colours);
        assert!(branding.logo_on_dessert);
    }

    #[test]
    fn migrates_legacy_brand_colour_requirement() {
        let state = parse_state(
            r#"{"quote_request": {"branding": {"requirement": "brand-colour"}}}"#,
        )
        .unwrap();
        assert!(!state.quote_request.branding.include_brand_logo);
        assert!(state.quote_request.branding.match_brand_colours);
    }

    #[test]
    fn migrates_legacy_none_requirement() {
        let state =
            parse_state(r#"{"quote_request": {"branding": {"requirement": "none"}}}"#).unwrap();
        assert!(!state.quote_request.branding.include_brand_logo);
        assert!(!state.quote_request.branding.match_brand_colours);
    }

    #[test]
    fn new_documents_pass_migration_untouched() {
        let state = parse_state(
            r#"{"quote_request": {"branding": {"include_brand_logo": true}}}"#,
        )
        .unwrap();
        assert!(state.quote_request.branding.include_brand_logo);
    }
}
