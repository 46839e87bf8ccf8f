//! Roster view derivation.
//!
//! Builds the displayable, delete-actionable company list from a store
//! snapshot. Grouping and ordering mirror the store exactly, and every entry
//! carries an opaque [`DeleteToken`] the client sends back verbatim to
//! remove that entry. The token is the validated entity name as pure data;
//! nothing about it is ever interpreted or evaluated.

use crate::store::Snapshot;
use quadra_types::{DeleteToken, RosterEntry, RosterSection, RosterView};

/// Build the roster view for a snapshot.
///
/// Always unfiltered: the roster lists every registered entity even while
/// the chart is showing a dual-use subset.
pub fn roster_view(snapshot: &Snapshot) -> RosterView {
    let sections = snapshot
        .iter()
        .map(|(quadrant, entities)| RosterSection {
            quadrant,
            entries: entities
                .iter()
                .map(|entity| RosterEntry {
                    name: entity.name.clone(),
                    logo: entity.logo.clone(),
                    delete_token: DeleteToken::for_entity(&entity.name),
                })
                .collect(),
        })
        .collect();
    RosterView { sections }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::EntityStore;
    use quadra_types::{LogoImage, Quadrant};

    #[test]
    fn test_roster_mirrors_store_grouping_and_order() {
        let mut store = EntityStore::new();
        store
            .add("B", Quadrant::Leaders, false, "https://x.test/b.png", None)
            .unwrap();
        store
            .add(
                "A",
                Quadrant::Leaders,
                true,
                "https://x.test/a.png",
                Some(LogoImage::from_data_uri("data:image/png;base64,AA==")),
            )
            .unwrap();
        store
            .add("C", Quadrant::NichePlayers, false, "https://x.test/c.png", None)
            .unwrap();

        let roster = roster_view(&store.snapshot());
        assert_eq!(roster.sections.len(), 4);
        assert_eq!(roster.sections[0].quadrant, Quadrant::VisionariesInnovators);
        assert!(roster.sections[0].entries.is_empty());

        let leaders = &roster.sections[1];
        assert_eq!(leaders.quadrant, Quadrant::Leaders);
        let names: Vec<&str> = leaders.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert!(leaders.entries[0].logo.is_none());
        assert!(leaders.entries[1].logo.is_some());
    }

    #[test]
    fn test_tokens_round_trip_entity_names() {
        let mut store = EntityStore::new();
        store
            .add("Acme Corp", Quadrant::Challengers, false, "https://x.test/a.png", None)
            .unwrap();
        let roster = roster_view(&store.snapshot());
        let entry = &roster.sections[Quadrant::Challengers.index()].entries[0];
        assert_eq!(entry.delete_token.entity_name(), "Acme Corp");
    }
}
