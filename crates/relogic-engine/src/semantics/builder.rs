//! Model construction per system.

use indexmap::IndexSet;
use tracing::trace;

use super::{Model, World, WorldId};
use crate::error::{EngineError, EngineResult};
use crate::systems::{create_system, SystemKind};

/// Builds empty-valuation models whose relation satisfies a system's frame conditions.
///
/// World 0 is distinguished and the star function is the cyclic successor
/// `i ↦ (i + 1) mod n`. System B gets the identity relation R(a, a, a). T, E and R
/// get the relation of the partial idempotent monoid with world 0 as unit:
/// R(a, b, c) iff `a = 0 ∧ b = c`, `b = 0 ∧ a = c`, or `a = b = c`. That relation
/// is reflexive, commutative, associative and closed under contraction, and
/// R(0, a, b) only when a = b, so heredity holds for any valuation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RelevanceModelBuilder;

impl RelevanceModelBuilder {
    pub fn new() -> Self {
        RelevanceModelBuilder
    }

    pub fn create_model(&self, system: SystemKind, world_count: usize) -> EngineResult<Model> {
        if world_count == 0 {
            return Err(EngineError::InvalidModel {
                reason: "a model needs at least one world".to_string(),
            });
        }
        let distinguished: WorldId = 0;
        let worlds = (0..world_count).map(World::new).collect();
        let star = (0..world_count).map(|i| (i + 1) % world_count).collect();
        let relation = match system {
            SystemKind::B => identity_relation(world_count),
            SystemKind::T | SystemKind::E | SystemKind::R => {
                monoid_relation(world_count, distinguished)
            }
        };
        trace!(%system, world_count, triples = relation.len(), "built model");

        Model::new(
            worlds,
            relation,
            distinguished,
            star,
            create_system(system).frame_conditions(),
        )
    }
}

fn identity_relation(n: usize) -> IndexSet<(WorldId, WorldId, WorldId)> {
    (0..n).map(|a| (a, a, a)).collect()
}

fn monoid_relation(n: usize, unit: WorldId) -> IndexSet<(WorldId, WorldId, WorldId)> {
    let mut relation = IndexSet::new();
    for a in 0..n {
        for b in 0..n {
            for c in 0..n {
                if (a == unit && b == c) || (b == unit && a == c) || (a == b && b == c) {
                    relation.insert((a, b, c));
                }
            }
        }
    }
    relation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_worlds_rejected() {
        assert!(RelevanceModelBuilder::new()
            .create_model(SystemKind::R, 0)
            .is_err());
    }

    #[test]
    fn test_star_is_cyclic_successor() {
        let model = RelevanceModelBuilder::new()
            .create_model(SystemKind::B, 3)
            .unwrap();
        assert_eq!(model.distinguished(), 0);
        assert_eq!(model.star(0), 1);
        assert_eq!(model.star(2), 0);
    }

    #[test]
    fn test_relation_shape_per_system() {
        let builder = RelevanceModelBuilder::new();
        let b = builder.create_model(SystemKind::B, 3).unwrap();
        assert_eq!(b.relation().len(), 3);
        assert!(b.related(1, 1, 1));
        assert!(!b.related(0, 1, 1));

        let r = builder.create_model(SystemKind::R, 3).unwrap();
        assert!(r.related(0, 1, 1));
        assert!(r.related(1, 0, 1));
        assert!(r.related(2, 2, 2));
        assert!(!r.related(1, 2, 1));
        assert!(r.frame_conditions().distributivity);
    }
}
