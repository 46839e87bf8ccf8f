//! Deterministic chart layout derivation.
//!
//! Pure functions from a store snapshot to drawable geometry: the two
//! divider lines, the four quadrant labels, and one placed logo per entity
//! with a resolved image. Placement is a 3-column grid per quadrant growing
//! rightward then downward from the quadrant anchor in fixed 10-unit steps,
//! driven entirely by each entity's insertion slot. Because slots survive
//! deletion and filtering, a logo never moves unless its own entity does.
//!
//! Quadrants with more than three rows keep growing downward without bound;
//! the chart plane does not clip or reflow. This is a known limitation of
//! the chart, inherited deliberately.

use crate::store::Snapshot;
use quadra_types::{ChartGeometry, DividerLine, PlacedLogo, Quadrant, QuadrantLabel};

/// Number of columns in each quadrant's logo grid.
const GRID_COLUMNS: usize = 3;
/// Spacing between grid cells, in plane units.
const GRID_SPACING: f64 = 10.0;
/// Rendered footprint of one logo, in plane units.
const LOGO_FOOTPRINT: f64 = 10.0;
/// Extent of the square chart plane.
const PLANE_EXTENT: f64 = 100.0;
/// Coordinate of the quadrant dividers on both axes.
const MIDLINE: f64 = 50.0;

/// The grid cell center for the given slot within a quadrant.
pub fn slot_position(quadrant: Quadrant, slot: usize) -> (f64, f64) {
    let (ax, ay) = quadrant.anchor();
    let col = (slot % GRID_COLUMNS) as f64;
    let row = (slot / GRID_COLUMNS) as f64;
    (ax + col * GRID_SPACING, ay - row * GRID_SPACING)
}

/// Derive the complete chart geometry for a snapshot.
///
/// With `dual_use_only` set, placement runs over a filtered view of the
/// snapshot; the snapshot itself is never modified. Entities without a
/// resolved logo produce no drawable artifact, but their slots still occupy
/// grid cells, so the positions of their siblings do not depend on which
/// resolutions failed.
pub fn chart_geometry(snapshot: &Snapshot, dual_use_only: bool) -> ChartGeometry {
    let filtered;
    let visible = if dual_use_only {
        filtered = snapshot.filtered_dual_use();
        &filtered
    } else {
        snapshot
    };

    let mut logos = Vec::new();
    for (quadrant, entities) in visible.iter() {
        for entity in entities {
            let Some(image) = &entity.logo else {
                continue;
            };
            let (x, y) = slot_position(quadrant, entity.slot());
            logos.push(PlacedLogo {
                name: entity.name.clone(),
                x,
                y,
                size_x: LOGO_FOOTPRINT,
                size_y: LOGO_FOOTPRINT,
                image: image.clone(),
            });
        }
    }

    ChartGeometry {
        dividers: dividers(),
        labels: labels(),
        logos,
    }
}

/// The two fixed divider lines splitting the plane into quadrants.
fn dividers() -> Vec<DividerLine> {
    vec![
        DividerLine {
            x0: MIDLINE,
            y0: 0.0,
            x1: MIDLINE,
            y1: PLANE_EXTENT,
        },
        DividerLine {
            x0: 0.0,
            y0: MIDLINE,
            x1: PLANE_EXTENT,
            y1: MIDLINE,
        },
    ]
}

/// One caption per quadrant at the chart's outer edge, always emitted.
fn labels() -> Vec<QuadrantLabel> {
    Quadrant::ALL
        .into_iter()
        .map(|quadrant| {
            let (ax, ay) = quadrant.anchor();
            let y = if ay > MIDLINE { PLANE_EXTENT } else { 0.0 };
            QuadrantLabel {
                quadrant,
                x: ax,
                y,
                text: quadrant.label().to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::EntityStore;
    use quadra_types::LogoImage;

    fn logo() -> Option<LogoImage> {
        Some(LogoImage::from_data_uri("data:image/png;base64,AA=="))
    }

    #[test]
    fn test_slot_positions_form_three_column_grid() {
        let (ax, ay) = Quadrant::Leaders.anchor();
        assert_eq!(slot_position(Quadrant::Leaders, 0), (ax, ay));
        assert_eq!(slot_position(Quadrant::Leaders, 1), (ax + 10.0, ay));
        assert_eq!(slot_position(Quadrant::Leaders, 2), (ax + 20.0, ay));
        assert_eq!(slot_position(Quadrant::Leaders, 3), (ax, ay - 10.0));
        assert_eq!(slot_position(Quadrant::Leaders, 7), (ax + 10.0, ay - 20.0));
    }

    #[test]
    fn test_empty_snapshot_still_has_decorations() {
        let store = EntityStore::new();
        let geometry = chart_geometry(&store.snapshot(), false);
        assert!(geometry.logos.is_empty());
        assert_eq!(geometry.dividers.len(), 2);
        assert_eq!(geometry.labels.len(), 4);
    }

    #[test]
    fn test_divider_lines_span_the_plane() {
        let geometry = chart_geometry(&EntityStore::new().snapshot(), false);
        let vertical = &geometry.dividers[0];
        assert_eq!((vertical.x0, vertical.x1), (50.0, 50.0));
        assert_eq!((vertical.y0, vertical.y1), (0.0, 100.0));
        let horizontal = &geometry.dividers[1];
        assert_eq!((horizontal.y0, horizontal.y1), (50.0, 50.0));
        assert_eq!((horizontal.x0, horizontal.x1), (0.0, 100.0));
    }

    #[test]
    fn test_labels_sit_at_outer_edges() {
        let geometry = chart_geometry(&EntityStore::new().snapshot(), false);
        let label_for = |q: Quadrant| {
            geometry
                .labels
                .iter()
                .find(|l| l.quadrant == q)
                .unwrap()
                .clone()
        };
        let leaders = label_for(Quadrant::Leaders);
        assert_eq!((leaders.x, leaders.y), (75.0, 100.0));
        assert_eq!(leaders.text, "Leaders");
        let niche = label_for(Quadrant::NichePlayers);
        assert_eq!((niche.x, niche.y), (25.0, 0.0));
    }

    #[test]
    fn test_unresolved_logos_hold_their_grid_cells() {
        let mut store = EntityStore::new();
        store
            .add("First", Quadrant::Leaders, false, "https://x.test/1.png", logo())
            .unwrap();
        store
            .add("Broken", Quadrant::Leaders, false, "https://x.test/2.png", None)
            .unwrap();
        store
            .add("Third", Quadrant::Leaders, false, "https://x.test/3.png", logo())
            .unwrap();
        let geometry = chart_geometry(&store.snapshot(), false);
        // Only two drawable logos, but the third keeps its slot-2 cell.
        assert_eq!(geometry.logos.len(), 2);
        let third = geometry.logos.iter().find(|l| l.name == "Third").unwrap();
        assert_eq!((third.x, third.y), (95.0, 75.0));
    }

    #[test]
    fn test_no_two_entities_share_a_cell() {
        let mut store = EntityStore::new();
        for i in 0..10 {
            store
                .add(
                    format!("E{}", i),
                    Quadrant::Challengers,
                    false,
                    "https://x.test/l.png",
                    logo(),
                )
                .unwrap();
        }
        store.delete("E3");
        store.delete("E7");
        store
            .add("Late", Quadrant::Challengers, false, "https://x.test/l.png", logo())
            .unwrap();
        let geometry = chart_geometry(&store.snapshot(), false);
        let mut cells: Vec<(i64, i64)> = geometry
            .logos
            .iter()
            .map(|l| (l.x as i64, l.y as i64))
            .collect();
        cells.sort();
        cells.dedup();
        assert_eq!(cells.len(), geometry.logos.len());
    }

    #[test]
    fn test_filtering_does_not_mutate_snapshot() {
        let mut store = EntityStore::new();
        store
            .add("A", Quadrant::Leaders, true, "https://x.test/a.png", logo())
            .unwrap();
        store
            .add("B", Quadrant::Leaders, false, "https://x.test/b.png", logo())
            .unwrap();
        let snapshot = store.snapshot();
        let before = snapshot.clone();
        let geometry = chart_geometry(&snapshot, true);
        assert_eq!(snapshot, before);
        assert_eq!(geometry.logos.len(), 1);
        assert_eq!(geometry.logos[0].name, "A");
    }

    #[test]
    fn test_filtered_entities_keep_their_slots() {
        let mut store = EntityStore::new();
        store
            .add("Plain", Quadrant::Leaders, false, "https://x.test/a.png", logo())
            .unwrap();
        store
            .add("Dual", Quadrant::Leaders, true, "https://x.test/b.png", logo())
            .unwrap();
        let geometry = chart_geometry(&store.snapshot(), true);
        // "Dual" was inserted second; the filter does not pull it to slot 0.
        assert_eq!(geometry.logos[0].name, "Dual");
        assert_eq!((geometry.logos[0].x, geometry.logos[0].y), (85.0, 75.0));
    }
}
