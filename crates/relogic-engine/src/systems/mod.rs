//! The relevance-logic hierarchy B ⊂ T ⊂ E ⊂ R.
//!
//! Each system extends the one below it: its axioms, frame conditions and theorem
//! schemas are a superset of its base's.
//!
//! ```rust
//! use relogic_engine::{create_system, is_system_stronger, SystemKind};
//!
//! let e = create_system(SystemKind::E);
//! assert!(e.frame_conditions().commutativity);
//! assert!(!e.axioms().distribution);
//! assert!(is_system_stronger(SystemKind::R, SystemKind::B));
//! ```

pub mod axioms;

use std::fmt;
use std::str::FromStr;

use relogic_ir::Formula;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

pub use axioms::{Axioms, FrameConditions, TheoremSchema};

/// The four systems, ordered weakest to strongest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SystemKind {
    B,
    T,
    E,
    R,
}

impl SystemKind {
    pub const HIERARCHY: [SystemKind; 4] = [SystemKind::B, SystemKind::T, SystemKind::E, SystemKind::R];

    pub fn is_stronger_than(&self, other: SystemKind) -> bool {
        *self > other
    }

    pub fn description(&self) -> &'static str {
        match self {
            SystemKind::B => "Basic relevance logic - only self-implication, no contraction",
            SystemKind::T => "Ticket entailment - B plus contraction",
            SystemKind::E => "Entailment - T plus commutative and associative frames, no distribution",
            SystemKind::R => "Relevant implication - E plus distribution",
        }
    }
}

impl fmt::Display for SystemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SystemKind::B => "B",
            SystemKind::T => "T",
            SystemKind::E => "E",
            SystemKind::R => "R",
        };
        f.write_str(name)
    }
}

impl FromStr for SystemKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "B" => Ok(SystemKind::B),
            "T" => Ok(SystemKind::T),
            "E" => Ok(SystemKind::E),
            "R" => Ok(SystemKind::R),
            _ => Err(EngineError::UnknownSystem {
                name: s.to_string(),
            }),
        }
    }
}

/// Common interface of the four systems.
pub trait RelevanceSystem: fmt::Debug + Send + Sync {
    fn kind(&self) -> SystemKind;

    fn axioms(&self) -> Axioms;

    fn frame_conditions(&self) -> FrameConditions;

    /// Theorem schemas recognized by this system.
    fn schemas(&self) -> Vec<TheoremSchema>;

    /// Whether `formula` is an instance of one of the system's theorem schemas.
    ///
    /// Outer universal quantifiers are stripped first, so `∀x((P(x) → P(x)))` is a
    /// theorem wherever `P(x) → P(x)` is.
    fn is_theorem_valid(&self, formula: &Formula) -> bool {
        let mut core = formula;
        while let Some((relogic_ir::Quantifier::ForAll, _, body)) = core.as_quantified() {
            core = body;
        }
        self.schemas().iter().any(|schema| schema.matches(core))
    }

    /// Minimal relevance for an inference: some premise and the conclusion contain
    /// atomic formulas with the same predicate and arity.
    fn validate_inference(&self, premises: &[Formula], conclusion: &Formula) -> bool {
        premises
            .iter()
            .any(|p| p.shares_atomic_signature_with(conclusion))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemB;

impl RelevanceSystem for SystemB {
    fn kind(&self) -> SystemKind {
        SystemKind::B
    }

    fn axioms(&self) -> Axioms {
        Axioms {
            self_implication: true,
            basic_relevance: true,
            ..Axioms::default()
        }
    }

    fn frame_conditions(&self) -> FrameConditions {
        FrameConditions {
            minimal: true,
            basic_relevance: true,
            ..FrameConditions::default()
        }
    }

    fn schemas(&self) -> Vec<TheoremSchema> {
        vec![TheoremSchema::SelfImplication]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemT {
    base: SystemB,
}

impl RelevanceSystem for SystemT {
    fn kind(&self) -> SystemKind {
        SystemKind::T
    }

    fn axioms(&self) -> Axioms {
        Axioms {
            contraction: true,
            ..self.base.axioms()
        }
    }

    fn frame_conditions(&self) -> FrameConditions {
        FrameConditions {
            reflexivity: true,
            contraction: true,
            ..self.base.frame_conditions()
        }
    }

    fn schemas(&self) -> Vec<TheoremSchema> {
        let mut schemas = self.base.schemas();
        schemas.push(TheoremSchema::Contraction);
        schemas
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemE {
    base: SystemT,
}

impl RelevanceSystem for SystemE {
    fn kind(&self) -> SystemKind {
        SystemKind::E
    }

    fn axioms(&self) -> Axioms {
        Axioms {
            entailment_axioms: true,
            distribution: false,
            ..self.base.axioms()
        }
    }

    fn frame_conditions(&self) -> FrameConditions {
        FrameConditions {
            commutativity: true,
            associativity: true,
            distributivity: false,
            ..self.base.frame_conditions()
        }
    }

    fn schemas(&self) -> Vec<TheoremSchema> {
        let mut schemas = self.base.schemas();
        schemas.extend([
            TheoremSchema::ConjunctionElimination,
            TheoremSchema::DisjunctionIntroduction,
            TheoremSchema::Suffixing,
            TheoremSchema::Prefixing,
            TheoremSchema::ConsequentConjunction,
            TheoremSchema::DoubleNegation,
        ]);
        schemas
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemR {
    base: SystemE,
}

impl RelevanceSystem for SystemR {
    fn kind(&self) -> SystemKind {
        SystemKind::R
    }

    fn axioms(&self) -> Axioms {
        Axioms {
            distribution: true,
            ..self.base.axioms()
        }
    }

    fn frame_conditions(&self) -> FrameConditions {
        FrameConditions {
            distributivity: true,
            ..self.base.frame_conditions()
        }
    }

    fn schemas(&self) -> Vec<TheoremSchema> {
        let mut schemas = self.base.schemas();
        schemas.push(TheoremSchema::Distribution);
        schemas
    }
}

pub fn create_system(kind: SystemKind) -> Box<dyn RelevanceSystem> {
    match kind {
        SystemKind::B => Box::new(SystemB),
        SystemKind::T => Box::new(SystemT::default()),
        SystemKind::E => Box::new(SystemE::default()),
        SystemKind::R => Box::new(SystemR::default()),
    }
}

/// Create a system from its name (`"B"`, `"t"`, ...).
pub fn create_system_by_name(name: &str) -> Result<Box<dyn RelevanceSystem>, EngineError> {
    Ok(create_system(name.parse()?))
}

/// The systems from weakest to strongest.
pub fn hierarchy() -> Vec<SystemKind> {
    SystemKind::HIERARCHY.to_vec()
}

pub fn is_system_stronger(a: SystemKind, b: SystemKind) -> bool {
    a.is_stronger_than(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use relogic_ir::{FormulaArena, Term};

    #[test]
    fn test_hierarchy_order() {
        assert_eq!(
            hierarchy(),
            vec![SystemKind::B, SystemKind::T, SystemKind::E, SystemKind::R]
        );
        assert!(is_system_stronger(SystemKind::R, SystemKind::B));
        assert!(is_system_stronger(SystemKind::E, SystemKind::T));
        assert!(!is_system_stronger(SystemKind::B, SystemKind::B));
        assert!(!is_system_stronger(SystemKind::T, SystemKind::E));
    }

    #[test]
    fn test_parse_system() {
        assert_eq!("r".parse::<SystemKind>().unwrap(), SystemKind::R);
        assert_eq!(" E ".parse::<SystemKind>().unwrap(), SystemKind::E);
        assert!(matches!(
            "S4".parse::<SystemKind>(),
            Err(EngineError::UnknownSystem { .. })
        ));
        assert!(create_system_by_name("x").is_err());
    }

    #[test]
    fn test_stronger_systems_extend_weaker() {
        for pair in SystemKind::HIERARCHY.windows(2) {
            let weaker = create_system(pair[0]);
            let stronger = create_system(pair[1]);
            for schema in weaker.schemas() {
                assert!(stronger.schemas().contains(&schema));
            }
            for name in weaker.frame_conditions().names() {
                assert!(stronger.frame_conditions().names().contains(&name));
            }
        }
    }

    #[test]
    fn test_distribution_only_in_r() {
        for kind in [SystemKind::B, SystemKind::T, SystemKind::E] {
            assert!(!create_system(kind).axioms().distribution);
            assert!(!create_system(kind).frame_conditions().distributivity);
        }
        assert!(create_system(SystemKind::R).axioms().distribution);
        assert!(create_system(SystemKind::R).frame_conditions().distributivity);
    }

    #[test]
    fn test_theorems_per_system() {
        let arena = FormulaArena::new();
        let p = arena.prop("P");
        let contraction = arena.implies(p.clone(), arena.and(p.clone(), p.clone()));
        let identity = arena.forall(
            "x",
            arena.implies(
                arena.atom("P", vec![Term::var("x")]),
                arena.atom("P", vec![Term::var("x")]),
            ),
        );

        let b = create_system(SystemKind::B);
        let t = create_system(SystemKind::T);
        assert!(b.is_theorem_valid(&identity));
        assert!(!b.is_theorem_valid(&contraction));
        assert!(t.is_theorem_valid(&contraction));
    }

    #[test]
    fn test_validate_inference_needs_shared_signature() {
        let arena = FormulaArena::new();
        let bird = arena.atom("bird", vec![Term::constant("tweety")]);
        let fly_x = arena.atom("fly", vec![Term::var("x")]);
        let fly = arena.atom("fly", vec![Term::constant("tweety")]);
        let fly_binary = arena.atom("fly", vec![Term::var("x"), Term::var("y")]);
        let system = create_system(SystemKind::B);

        assert!(!system.validate_inference(std::slice::from_ref(&bird), &fly));
        assert!(system.validate_inference(&[bird.clone(), fly_x], &fly));
        assert!(!system.validate_inference(&[bird, fly_binary], &fly));
    }
}
