//! Render payload types: everything a client needs to draw the chart.
//!
//! The engine returns all derived views together after every action so the
//! client never observes a roster that disagrees with the chart or an export
//! that disagrees with either.

use crate::types::{DeleteToken, LogoImage, Quadrant};
use serde::{Deserialize, Serialize};

/// A straight divider line on the chart plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DividerLine {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

/// A quadrant caption placed at the chart edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadrantLabel {
    /// The quadrant this label belongs to.
    pub quadrant: Quadrant,
    pub x: f64,
    pub y: f64,
    /// The caption text.
    pub text: String,
}

/// A logo placed on the chart: computed position plus fixed footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLogo {
    /// Name of the company the logo belongs to.
    pub name: String,
    /// Center x coordinate on the 0-100 plane.
    pub x: f64,
    /// Center y coordinate on the 0-100 plane.
    pub y: f64,
    /// Footprint width in plane units.
    #[serde(rename = "sizeX")]
    pub size_x: f64,
    /// Footprint height in plane units.
    #[serde(rename = "sizeY")]
    pub size_y: f64,
    /// The embeddable image.
    pub image: LogoImage,
}

/// The complete chart drawing: decorations plus placed logos.
///
/// The coordinate plane is a fixed 0-100 square on both axes; the viewport
/// is static.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    /// The two quadrant divider lines.
    pub dividers: Vec<DividerLine>,
    /// One label per quadrant, emitted regardless of entity count.
    pub labels: Vec<QuadrantLabel>,
    /// Placed logos for every entity with a resolved image.
    pub logos: Vec<PlacedLogo>,
}

/// One row of the visible company roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Company name.
    pub name: String,
    /// Resolved logo, when the fetch succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<LogoImage>,
    /// Token to send back in a delete action for this entry.
    #[serde(rename = "deleteToken")]
    pub delete_token: DeleteToken,
}

/// The roster entries of one quadrant, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSection {
    /// The quadrant heading.
    pub quadrant: Quadrant,
    pub entries: Vec<RosterEntry>,
}

/// The full company roster, grouped to mirror the store exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterView {
    /// One section per quadrant, in fixed enumeration order.
    pub sections: Vec<RosterSection>,
}

/// A downloadable export of the current roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportArtifact {
    /// Suggested download filename.
    pub filename: String,
    /// Media type of the encoded document.
    #[serde(rename = "mediaType")]
    pub media_type: String,
    /// The document as a base64 `data:` URI, ready to use as a download link.
    #[serde(rename = "dataUri")]
    pub data_uri: String,
}

/// Everything the presentation layer renders, derived from one store
/// snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPayload {
    /// Current chart title.
    pub title: String,
    /// Chart geometry under the current display filter.
    pub chart: ChartGeometry,
    /// Visible roster; never filtered.
    pub roster: RosterView,
    /// Export of the full roster; never filtered.
    pub export: ExportArtifact,
    /// The display filter the chart was derived with.
    #[serde(rename = "dualUseOnly")]
    pub dual_use_only: bool,
}
