//! Core types for the quadrant chart protocol.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four fixed buckets entities are grouped into.
///
/// Serialization uses the human-readable labels so clients submit the same
/// strings the chart displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// Upper-left quadrant.
    #[serde(rename = "Visionaries/Innovators")]
    VisionariesInnovators,
    /// Upper-right quadrant.
    #[serde(rename = "Leaders")]
    Leaders,
    /// Lower-left quadrant.
    #[serde(rename = "Niche Players")]
    NichePlayers,
    /// Lower-right quadrant.
    #[serde(rename = "Challengers")]
    Challengers,
}

impl Quadrant {
    /// All quadrants in their fixed enumeration order.
    ///
    /// This order governs roster grouping and export row order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::VisionariesInnovators,
        Quadrant::Leaders,
        Quadrant::NichePlayers,
        Quadrant::Challengers,
    ];

    /// The display label for this quadrant.
    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::VisionariesInnovators => "Visionaries/Innovators",
            Quadrant::Leaders => "Leaders",
            Quadrant::NichePlayers => "Niche Players",
            Quadrant::Challengers => "Challengers",
        }
    }

    /// The anchor coordinate of this quadrant on the 0-100 plane.
    ///
    /// Logo grids grow rightward and downward from the anchor.
    pub fn anchor(&self) -> (f64, f64) {
        match self {
            Quadrant::Leaders => (75.0, 75.0),
            Quadrant::Challengers => (75.0, 25.0),
            Quadrant::VisionariesInnovators => (25.0, 75.0),
            Quadrant::NichePlayers => (25.0, 25.0),
        }
    }

    /// Position of this quadrant in [`Quadrant::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Quadrant::VisionariesInnovators => 0,
            Quadrant::Leaders => 1,
            Quadrant::NichePlayers => 2,
            Quadrant::Challengers => 3,
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An embeddable logo image, carried as a `data:` URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogoImage(String);

impl LogoImage {
    /// Wrap an already-encoded `data:` URI.
    pub fn from_data_uri(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// The `data:` URI for direct embedding.
    pub fn as_data_uri(&self) -> &str {
        &self.0
    }
}

/// Opaque token identifying an entity for deletion.
///
/// The token carries the entity name and is round-tripped through the
/// presentation boundary unmodified. It is pure data: the dispatcher treats
/// it as a key into the store and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeleteToken(String);

impl DeleteToken {
    /// Create a token for the named entity.
    pub fn for_entity(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The name of the entity this token identifies.
    pub fn entity_name(&self) -> &str {
        &self.0
    }

    /// Consume the token, yielding the entity name.
    pub fn into_name(self) -> String {
        self.0
    }
}
