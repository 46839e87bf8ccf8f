//! Type definitions for the quadrant chart protocol
//!
//! This crate provides the shared contract between the chart engine and its
//! presentation clients, ensuring type-safe communication across the system
//! boundary. Centralizing the action and payload definitions prevents drift
//! between the engine and the clients that drive it, and makes protocol
//! compliance a compile-time property on both sides.
//!
//! ## Features
//!
//! - **Strongly typed**: quadrants, actions, and tokens are proper Rust types
//! - **Serde support**: full serialization/deserialization support
//! - **Discriminated actions**: one tagged action per request, no trigger
//!   inference
//! - **Opaque delete tokens**: roster rows carry pure-data tokens, never
//!   anything evaluated
//!
//! ## Example
//!
//! ```rust
//! use quadra_types::{Action, Quadrant};
//!
//! let action = Action::add_entity("Acme", Quadrant::Leaders, false, "https://acme.test/logo.png");
//! let json = serde_json::to_string(&action).unwrap();
//! assert!(json.contains("ADD_ENTITY"));
//! ```

pub mod actions;
pub mod payload;
pub mod types;

pub use actions::*;
pub use payload::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    #[test]
    fn test_quadrant_labels_round_trip() {
        for quadrant in Quadrant::ALL {
            let json = serde_json::to_string(&quadrant).unwrap();
            assert_eq!(json, format!("\"{}\"", quadrant.label()));
            let back: Quadrant = serde_json::from_str(&json).unwrap();
            assert_eq!(back, quadrant);
        }
    }

    #[test]
    fn test_quadrant_anchors() {
        assert_eq!(Quadrant::Leaders.anchor(), (75.0, 75.0));
        assert_eq!(Quadrant::Challengers.anchor(), (75.0, 25.0));
        assert_eq!(Quadrant::VisionariesInnovators.anchor(), (25.0, 75.0));
        assert_eq!(Quadrant::NichePlayers.anchor(), (25.0, 25.0));
    }

    #[test]
    fn test_action_tagged_serialization() {
        let action = Action::add_entity("Acme", Quadrant::Leaders, true, "https://acme.test/a.png");
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "ADD_ENTITY");
        assert_eq!(json["name"], "Acme");
        assert_eq!(json["quadrant"], "Leaders");
        assert_eq!(json["dualUse"], true);
        assert_eq!(json["logoUrl"], "https://acme.test/a.png");

        let back: Action = serde_json::from_value(json).unwrap();
        assert_eq!(back, action);
    }

    #[test]
    fn test_add_entity_dual_use_defaults_false() {
        let json = r#"{"type":"ADD_ENTITY","name":"Acme","quadrant":"Leaders","logoUrl":"https://acme.test/a.png"}"#;
        let action: Action = serde_json::from_str(json).unwrap();
        match action {
            Action::AddEntity { dual_use, .. } => assert!(!dual_use),
            _ => panic!("Expected AddEntity"),
        }
    }

    #[test]
    fn test_delete_token_is_transparent() {
        let token = DeleteToken::for_entity("Acme");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, "\"Acme\"");
        let action = Action::delete_entity(token.clone());
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "DELETE_ENTITY");
        assert_eq!(json["token"], "Acme");
        assert_eq!(token.entity_name(), "Acme");
    }

    #[test]
    fn test_reset_serialization() {
        let json = serde_json::to_value(&Action::Reset).unwrap();
        assert_eq!(json["type"], "RESET");
        let back: Action = serde_json::from_str(r#"{"type":"RESET"}"#).unwrap();
        assert_eq!(back, Action::Reset);
    }

    #[test]
    fn test_render_payload_round_trip() {
        let payload = RenderPayload {
            title: "Magic Quadrant".to_string(),
            chart: ChartGeometry {
                dividers: vec![DividerLine {
                    x0: 50.0,
                    y0: 0.0,
                    x1: 50.0,
                    y1: 100.0,
                }],
                labels: vec![QuadrantLabel {
                    quadrant: Quadrant::Leaders,
                    x: 75.0,
                    y: 100.0,
                    text: "Leaders".to_string(),
                }],
                logos: vec![PlacedLogo {
                    name: "Acme".to_string(),
                    x: 75.0,
                    y: 75.0,
                    size_x: 10.0,
                    size_y: 10.0,
                    image: LogoImage::from_data_uri("data:image/png;base64,AA=="),
                }],
            },
            roster: RosterView {
                sections: vec![RosterSection {
                    quadrant: Quadrant::Leaders,
                    entries: vec![RosterEntry {
                        name: "Acme".to_string(),
                        logo: None,
                        delete_token: DeleteToken::for_entity("Acme"),
                    }],
                }],
            },
            export: ExportArtifact {
                filename: "company_list.csv".to_string(),
                media_type: "text/csv".to_string(),
                data_uri: "data:text/csv;base64,".to_string(),
            },
            dual_use_only: false,
        };

        let json = serde_json::to_string(&payload).unwrap();
        let back: RenderPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn test_roster_entry_omits_absent_logo() {
        let entry = RosterEntry {
            name: "Acme".to_string(),
            logo: None,
            delete_token: DeleteToken::for_entity("Acme"),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("logo\""));
        assert!(json.contains("deleteToken"));
    }
}
