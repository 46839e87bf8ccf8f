//! The authoritative in-memory entity registry.
//!
//! The store owns every registered company, grouped by quadrant and ordered
//! by insertion. It is the single mutable piece of chart state: every other
//! view (layout, roster, export) is derived from an immutable [`Snapshot`]
//! taken after a mutation, so the derivations can never disagree with the
//! store or with each other.
//!
//! Each entity is assigned a layout slot from a per-quadrant monotonic
//! counter at insertion. Slots are never recomputed: deleting an entity
//! leaves a gap rather than shifting its siblings, which keeps every placed
//! logo stable across unrelated mutations. Counters only rewind on reset.

use crate::errors::CoreError;
use quadra_types::{LogoImage, Quadrant};

/// A registered company and its resolved logo.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Unique name across the whole store.
    pub name: String,
    /// Dual-use capability flag.
    pub dual_use: bool,
    /// The URL the logo was requested from.
    pub logo_source: String,
    /// The resolved logo, `None` when resolution failed.
    pub logo: Option<LogoImage>,
    slot: usize,
}

impl Entity {
    /// The layout slot assigned to this entity at insertion.
    pub fn slot(&self) -> usize {
        self.slot
    }
}

/// The mutable registry of all entities, grouped by quadrant.
#[derive(Debug, Default)]
pub struct EntityStore {
    quadrants: [Vec<Entity>; 4],
    next_slot: [usize; 4],
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the required fields of a prospective entity.
    ///
    /// The quadrant and flag are enforced by the type system; only the two
    /// free-text fields can be missing.
    pub fn validate_entry(name: &str, logo_source: &str) -> Result<(), CoreError> {
        if name.trim().is_empty() {
            return Err(CoreError::validation("company name must not be empty"));
        }
        if logo_source.trim().is_empty() {
            return Err(CoreError::validation("logo source must not be empty"));
        }
        Ok(())
    }

    /// Insert or overwrite an entity.
    ///
    /// Re-adding a name within its current quadrant replaces the record in
    /// place, keeping its slot. A name moving to a different quadrant is
    /// removed there first and receives a fresh slot in the target, so a
    /// name never appears in two quadrants at once. Fails without touching
    /// any state when a required field is empty.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        quadrant: Quadrant,
        dual_use: bool,
        logo_source: impl Into<String>,
        logo: Option<LogoImage>,
    ) -> Result<(), CoreError> {
        let name = name.into();
        let logo_source = logo_source.into();
        Self::validate_entry(&name, &logo_source)?;

        let target = quadrant.index();
        if let Some(existing) = self.quadrants[target].iter_mut().find(|e| e.name == name) {
            let slot = existing.slot;
            *existing = Entity {
                name,
                dual_use,
                logo_source,
                logo,
                slot,
            };
            return Ok(());
        }

        self.delete(&name);
        let slot = self.next_slot[target];
        self.next_slot[target] += 1;
        self.quadrants[target].push(Entity {
            name,
            dual_use,
            logo_source,
            logo,
            slot,
        });
        Ok(())
    }

    /// Remove the named entity and its logo, wherever it lives.
    ///
    /// Idempotent: deleting an unknown name is a no-op. Returns whether an
    /// entity was actually removed.
    pub fn delete(&mut self, name: &str) -> bool {
        for entities in &mut self.quadrants {
            if let Some(pos) = entities.iter().position(|e| e.name == name) {
                entities.remove(pos);
                return true;
            }
        }
        false
    }

    /// Whether the named entity is currently registered.
    pub fn contains(&self, name: &str) -> bool {
        self.quadrants
            .iter()
            .any(|entities| entities.iter().any(|e| e.name == name))
    }

    /// Clear all quadrants, discarding every logo, and rewind slot counters.
    pub fn reset(&mut self) {
        for entities in &mut self.quadrants {
            entities.clear();
        }
        self.next_slot = [0; 4];
    }

    /// Total entity count across all quadrants.
    pub fn len(&self) -> usize {
        self.quadrants.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// An immutable grouped view of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            quadrants: self.quadrants.clone(),
        }
    }
}

/// A point-in-time grouped view of the store used for derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    quadrants: [Vec<Entity>; 4],
}

impl Snapshot {
    /// The entities of one quadrant, in insertion order.
    pub fn entities(&self, quadrant: Quadrant) -> &[Entity] {
        &self.quadrants[quadrant.index()]
    }

    /// Iterate quadrants in their fixed enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Quadrant, &[Entity])> + '_ {
        Quadrant::ALL
            .into_iter()
            .map(move |q| (q, self.entities(q)))
    }

    /// Total entity count across all quadrants.
    pub fn total_entities(&self) -> usize {
        self.quadrants.iter().map(Vec::len).sum()
    }

    /// Derive a view containing only dual-use entities.
    ///
    /// Quadrant structure and slot assignments are preserved; empty
    /// quadrants are allowed. The underlying store is untouched.
    pub fn filtered_dual_use(&self) -> Snapshot {
        let mut quadrants: [Vec<Entity>; 4] = Default::default();
        for (i, entities) in self.quadrants.iter().enumerate() {
            quadrants[i] = entities.iter().filter(|e| e.dual_use).cloned().collect();
        }
        Snapshot { quadrants }
    }
}
