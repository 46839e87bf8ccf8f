//! Mutation dispatch and payload derivation.
//!
//! [`ChartSession`] is the single entry point for user actions. It owns the
//! entity store, the chart title, and the ephemeral display filter, applies
//! exactly one action per request, and re-derives the chart geometry, the
//! roster view, and the export artifact from the post-mutation snapshot so
//! the presentation layer always receives one consistent combination.
//!
//! Collaborator failures stop here. A failed logo fetch degrades the add to
//! a logo-less entity, a rejected add leaves the store untouched, and a
//! delete of an unknown entity is a no-op; in every case the session still
//! returns a complete payload.

use crate::errors::CoreError;
use crate::export;
use crate::layout;
use crate::logo::LogoResolver;
use crate::roster;
use crate::store::{EntityStore, Snapshot};
use quadra_types::{Action, ExportArtifact, Quadrant, RenderPayload};
use std::sync::Arc;

/// Title shown before the user edits it.
pub const DEFAULT_TITLE: &str = "Magic Quadrant";

/// The chart's single-writer state machine.
pub struct ChartSession {
    store: EntityStore,
    title: String,
    dual_use_only: bool,
    resolver: Arc<dyn LogoResolver>,
}

impl ChartSession {
    pub fn new(resolver: Arc<dyn LogoResolver>) -> Self {
        Self::with_title(resolver, DEFAULT_TITLE)
    }

    pub fn with_title(resolver: Arc<dyn LogoResolver>, title: impl Into<String>) -> Self {
        Self {
            store: EntityStore::new(),
            title: title.into(),
            dual_use_only: false,
            resolver,
        }
    }

    /// Apply one action and return the payload derived from the result.
    ///
    /// Never fails: invalid or inapplicable actions leave the state as it
    /// was and the returned payload simply reflects the unchanged state.
    pub async fn apply(&mut self, action: Action) -> RenderPayload {
        match action {
            Action::SetTitle { title } => {
                self.title = title;
            }
            Action::AddEntity {
                name,
                quadrant,
                dual_use,
                logo_url,
            } => {
                self.apply_add(name, quadrant, dual_use, logo_url).await;
            }
            Action::DeleteEntity { token } => {
                let name = token.entity_name();
                if self.store.delete(name) {
                    log::info!("Deleted entity '{}'", name);
                } else {
                    log::debug!("Delete of unknown entity '{}' ignored", name);
                }
            }
            Action::SetFilter { dual_use_only } => {
                self.dual_use_only = dual_use_only;
            }
            Action::Reset => {
                self.store.reset();
                self.dual_use_only = false;
                log::info!("Chart reset");
            }
        }
        self.render()
    }

    async fn apply_add(&mut self, name: String, quadrant: Quadrant, dual_use: bool, logo_url: String) {
        if let Err(e) = EntityStore::validate_entry(&name, &logo_url) {
            log::warn!("Rejected add: {}", e);
            return;
        }
        let logo = match self.resolver.resolve(&name, &logo_url).await {
            Ok(image) => Some(image),
            Err(e) => {
                log::warn!("Storing '{}' without a logo: {}", name, e);
                None
            }
        };
        if let Err(e) = self
            .store
            .add(name.as_str(), quadrant, dual_use, logo_url.as_str(), logo)
        {
            // validate_entry ran above; only a store-level rejection lands here.
            log::warn!("Rejected add of '{}': {}", name, e);
            return;
        }
        log::info!("Added entity '{}' to {}", name, quadrant);
    }

    /// Derive the payload for the current state without applying an action.
    pub fn render(&self) -> RenderPayload {
        let snapshot = self.store.snapshot();
        let export = export::export_artifact(&snapshot).unwrap_or_else(|e| {
            log::error!("Export derivation failed: {}", e);
            ExportArtifact {
                filename: export::EXPORT_FILENAME.to_string(),
                media_type: export::EXPORT_MEDIA_TYPE.to_string(),
                data_uri: format!("data:{};base64,", export::EXPORT_MEDIA_TYPE),
            }
        });
        RenderPayload {
            title: self.title.clone(),
            chart: layout::chart_geometry(&snapshot, self.dual_use_only),
            roster: roster::roster_view(&snapshot),
            export,
            dual_use_only: self.dual_use_only,
        }
    }

    /// The roster as raw CSV bytes for a direct download response.
    pub fn export_csv(&self) -> Result<Vec<u8>, CoreError> {
        export::csv_bytes(&self.store.snapshot())
    }

    /// A grouped view of the current store state.
    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn dual_use_only(&self) -> bool {
        self.dual_use_only
    }
}
