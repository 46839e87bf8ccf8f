//! Core engine for the Quadra quadrant chart.
//!
//! This crate implements the layout and state-reconciliation engine behind a
//! four-quadrant positioning chart: an authoritative in-memory entity store,
//! a deterministic layout derivation, and the roster and export views that
//! must stay consistent with the store after every mutation.
//!
//! # Architecture Overview
//!
//! - **Entity store**: the single mutable registry of companies, grouped by
//!   quadrant, ordered by insertion, with stable layout slots
//! - **Layout engine**: pure snapshot-to-geometry derivation with fixed
//!   divider and label decorations
//! - **Roster and export builders**: pure derivations of the visible list
//!   and the downloadable CSV document
//! - **Mutation dispatch**: one discriminated action per request, applied by
//!   [`ChartSession`], which returns all derived views together
//! - **Logo resolution**: the HTTP fetch-and-thumbnail collaborator behind
//!   the [`LogoResolver`] seam

pub mod errors;
pub mod export;
pub mod layout;
pub mod logo;
pub mod roster;
pub mod session;
pub mod store;

pub use errors::CoreError;
pub use logo::{HttpLogoResolver, LogoResolver};
pub use session::{ChartSession, DEFAULT_TITLE};
pub use store::{Entity, EntityStore, Snapshot};
