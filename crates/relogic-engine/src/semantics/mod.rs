//! Routley–Meyer ternary-relational semantics.
//!
//! A [`Model`] is a finite set of worlds with a ternary accessibility relation
//! R(a, b, c), a distinguished world and a star function sending each world to
//! its negation-conjugate. [`evaluate`] gives truth at a world for every
//! connective, [`FrameConditionChecker`] checks a model against a system's frame
//! conditions and [`RelevanceModelBuilder`] builds models that satisfy them.

mod builder;
mod evaluator;
mod frame;

use indexmap::{IndexMap, IndexSet};
use relogic_ir::Formula;
use serde::Serialize;

use crate::error::{EngineError, EngineResult};
use crate::systems::FrameConditions;

pub use builder::RelevanceModelBuilder;
pub use evaluator::evaluate;
pub use frame::{FrameCheckReport, FrameConditionChecker, FrameViolation};

pub type WorldId = usize;

/// A world and the truth values it assigns.
///
/// Keys are canonical atom strings (`bird(tweety)`) or bare predicate and variable
/// names. Lookup of an atomic formula tries its canonical string, then its
/// predicate name; anything unassigned is false.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct World {
    pub id: WorldId,
    pub assignment: IndexMap<String, bool>,
}

impl World {
    pub fn new(id: WorldId) -> Self {
        World {
            id,
            assignment: IndexMap::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: bool) -> Self {
        self.assignment.insert(key.into(), value);
        self
    }

    pub fn value(&self, key: &str) -> Option<bool> {
        self.assignment.get(key).copied()
    }

    /// Truth value of an atomic formula at this world.
    pub fn atom_value(&self, atom: &Formula) -> bool {
        self.value(atom.canonical())
            .or_else(|| atom.predicate().and_then(|p| self.value(p)))
            .unwrap_or(false)
    }

    /// Keys assigned true, in insertion order.
    pub fn true_keys(&self) -> impl Iterator<Item = &str> {
        self.assignment
            .iter()
            .filter(|(_, v)| **v)
            .map(|(k, _)| k.as_str())
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Model {
    worlds: Vec<World>,
    relation: IndexSet<(WorldId, WorldId, WorldId)>,
    distinguished: WorldId,
    star: Vec<WorldId>,
    frame_conditions: FrameConditions,
}

impl Model {
    /// Build a model, checking that every world reference is in range and that
    /// world ids match their positions.
    pub fn new(
        worlds: Vec<World>,
        relation: IndexSet<(WorldId, WorldId, WorldId)>,
        distinguished: WorldId,
        star: Vec<WorldId>,
        frame_conditions: FrameConditions,
    ) -> EngineResult<Self> {
        let n = worlds.len();
        let invalid = |reason: String| Err(EngineError::InvalidModel { reason });

        if n == 0 {
            return invalid("a model needs at least one world".to_string());
        }
        if let Some((i, w)) = worlds.iter().enumerate().find(|(i, w)| w.id != *i) {
            return invalid(format!("world at position {} has id {}", i, w.id));
        }
        if distinguished >= n {
            return invalid(format!("distinguished world {} out of range", distinguished));
        }
        if star.len() != n {
            return invalid(format!(
                "star function covers {} worlds, model has {}",
                star.len(),
                n
            ));
        }
        if let Some(w) = star.iter().find(|w| **w >= n) {
            return invalid(format!("star maps to unknown world {}", w));
        }
        if let Some(t) = relation
            .iter()
            .find(|(a, b, c)| *a >= n || *b >= n || *c >= n)
        {
            return invalid(format!("relation triple {:?} mentions an unknown world", t));
        }

        Ok(Model {
            worlds,
            relation,
            distinguished,
            star,
            frame_conditions,
        })
    }

    pub fn worlds(&self) -> &[World] {
        &self.worlds
    }

    pub fn world(&self, id: WorldId) -> Option<&World> {
        self.worlds.get(id)
    }

    pub fn world_count(&self) -> usize {
        self.worlds.len()
    }

    pub fn world_ids(&self) -> std::ops::Range<WorldId> {
        0..self.worlds.len()
    }

    pub fn relation(&self) -> &IndexSet<(WorldId, WorldId, WorldId)> {
        &self.relation
    }

    pub fn related(&self, a: WorldId, b: WorldId, c: WorldId) -> bool {
        self.relation.contains(&(a, b, c))
    }

    pub fn distinguished(&self) -> WorldId {
        self.distinguished
    }

    /// Negation-conjugate of `world`.
    pub fn star(&self, world: WorldId) -> WorldId {
        self.star.get(world).copied().unwrap_or(world)
    }

    pub fn frame_conditions(&self) -> FrameConditions {
        self.frame_conditions
    }

    /// Same model with `key` set to `value` at `world`. Out-of-range worlds are ignored.
    pub fn with_assignment(mut self, world: WorldId, key: impl Into<String>, value: bool) -> Self {
        if let Some(w) = self.worlds.get_mut(world) {
            w.assignment.insert(key.into(), value);
        }
        self
    }

    pub fn satisfies(&self, world: WorldId, formula: &Formula) -> bool {
        evaluate(formula, world, self)
    }
}
