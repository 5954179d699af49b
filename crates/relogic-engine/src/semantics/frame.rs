//! Frame-condition checks.

use serde::Serialize;
use tracing::debug;

use super::{Model, WorldId};
use crate::systems::{RelevanceSystem, SystemKind};

/// A frame condition that failed, with the triple(s) that witness it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FrameViolation {
    pub condition: &'static str,
    pub witness: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct FrameCheckReport {
    pub system: SystemKind,
    pub checked: Vec<&'static str>,
    pub violations: Vec<FrameViolation>,
}

impl FrameCheckReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FrameConditionChecker;

impl FrameConditionChecker {
    pub fn new() -> Self {
        FrameConditionChecker
    }

    /// Check `model` against every frame condition `system` requires.
    ///
    /// Each condition reports at most one violation, the first witness found.
    pub fn validate_frame_conditions(
        &self,
        model: &Model,
        system: &dyn RelevanceSystem,
    ) -> FrameCheckReport {
        let required = system.frame_conditions();
        let mut checked = Vec::new();
        let mut violations = Vec::new();

        let mut run = |enabled: bool,
                       condition: &'static str,
                       check: fn(&Model) -> Option<String>| {
            if !enabled {
                return;
            }
            checked.push(condition);
            if let Some(witness) = check(model) {
                violations.push(FrameViolation { condition, witness });
            }
        };

        run(required.reflexivity, "reflexivity", check_reflexivity);
        run(required.commutativity, "commutativity", check_commutativity);
        run(required.associativity, "associativity", check_associativity);
        run(required.contraction, "contraction", check_contraction);
        run(required.distributivity, "distributivity", check_heredity);

        debug!(
            system = %system.kind(),
            checked = checked.len(),
            failed = violations.len(),
            "frame conditions checked"
        );
        FrameCheckReport {
            system: system.kind(),
            checked,
            violations,
        }
    }
}

/// R(0, a, a) for every world a.
fn check_reflexivity(model: &Model) -> Option<String> {
    let d = model.distinguished();
    model
        .world_ids()
        .find(|&a| !model.related(d, a, a))
        .map(|a| format!("R({}, {}, {}) missing", d, a, a))
}

/// R(a, b, c) iff R(b, a, c).
fn check_commutativity(model: &Model) -> Option<String> {
    model
        .relation()
        .iter()
        .find(|&&(a, b, c)| !model.related(b, a, c))
        .map(|&(a, b, c)| format!("R({}, {}, {}) holds but R({}, {}, {}) does not", a, b, c, b, a, c))
}

/// If R(a, b, x) and R(x, c, e) then R(b, c, y) and R(a, y, e) for some y.
fn check_associativity(model: &Model) -> Option<String> {
    for &(a, b, x) in model.relation() {
        for &(x2, c, e) in model.relation() {
            if x2 != x {
                continue;
            }
            let regrouped = model
                .world_ids()
                .any(|y| model.related(b, c, y) && model.related(a, y, e));
            if !regrouped {
                return Some(format!(
                    "R({}, {}, {}) and R({}, {}, {}) but no y with R({}, {}, y) and R({}, y, {})",
                    a, b, x, x, c, e, b, c, a, e
                ));
            }
        }
    }
    None
}

/// If R(a, b, c) then R(a, b, x) and R(x, b, c) for some x.
fn check_contraction(model: &Model) -> Option<String> {
    model
        .relation()
        .iter()
        .find(|&&(a, b, c)| {
            !model
                .world_ids()
                .any(|x| model.related(a, b, x) && model.related(x, b, c))
        })
        .map(|&(a, b, c)| format!("R({}, {}, {}) has no contracting world", a, b, c))
}

/// Heredity: if R(0, a, b) then everything true at a is true at b.
fn check_heredity(model: &Model) -> Option<String> {
    let d = model.distinguished();
    for &(first, a, b) in model.relation() {
        if first != d {
            continue;
        }
        if let Some(key) = lost_key(model, a, b) {
            return Some(format!(
                "R({}, {}, {}) but {} holds at world {} and not at world {}",
                d, a, b, key, a, b
            ));
        }
    }
    None
}

fn lost_key(model: &Model, from: WorldId, to: WorldId) -> Option<String> {
    let (source, target) = (model.world(from)?, model.world(to)?);
    source
        .true_keys()
        .find(|key| target.value(key) != Some(true))
        .map(str::to_string)
}
