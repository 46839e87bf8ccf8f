//! Action types for the quadrant chart protocol.
//!
//! Every user interaction is a single discriminated action constructed by the
//! presentation boundary and passed to the engine as one value. This replaces
//! any "which input changed" inference with an explicit tagged type: exactly
//! one action is applied per request.

use crate::types::{DeleteToken, Quadrant};
use serde::{Deserialize, Serialize};

/// A single user action against the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Replace the chart title. Entity state is untouched.
    SetTitle {
        /// The new title text.
        title: String,
    },
    /// Register a company on the chart.
    AddEntity {
        /// Company name; unique across the whole chart.
        name: String,
        /// The quadrant the company is assigned to.
        quadrant: Quadrant,
        /// Whether the company has dual-use capability.
        #[serde(rename = "dualUse", default)]
        dual_use: bool,
        /// Source URL for the company logo.
        #[serde(rename = "logoUrl")]
        logo_url: String,
    },
    /// Remove a company identified by its roster token.
    DeleteEntity {
        /// Token taken verbatim from a roster entry.
        token: DeleteToken,
    },
    /// Set the dual-use-only display filter. Entity state is untouched.
    SetFilter {
        /// Show only dual-use companies when true.
        #[serde(rename = "dualUseOnly")]
        dual_use_only: bool,
    },
    /// Clear all entities and the display filter. The title is kept.
    Reset,
}

impl Action {
    /// Create a title edit action.
    pub fn set_title(title: impl Into<String>) -> Self {
        Action::SetTitle {
            title: title.into(),
        }
    }

    /// Create an add action.
    pub fn add_entity(
        name: impl Into<String>,
        quadrant: Quadrant,
        dual_use: bool,
        logo_url: impl Into<String>,
    ) -> Self {
        Action::AddEntity {
            name: name.into(),
            quadrant,
            dual_use,
            logo_url: logo_url.into(),
        }
    }

    /// Create a delete action from a roster token.
    pub fn delete_entity(token: DeleteToken) -> Self {
        Action::DeleteEntity { token }
    }

    /// Create a filter toggle action.
    pub fn set_filter(dual_use_only: bool) -> Self {
        Action::SetFilter { dual_use_only }
    }
}
