//! SWRL-style rules and rule atoms.
//!
//! A rule is a conjunction of body atoms implying a conjunction of head
//! atoms; it renders with Unicode conjunction (`∧`) and implication (`→`)
//! glyphs.

use serde::{Deserialize, Serialize};

use super::class_expr::ClassExpression;
use super::data_range::DataRange;
use super::entity::{Entity, Individual, Iri, ObjectPropertyExpression};
use super::literal::Literal;

/// A rule: body atoms implying head atoms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub body: Vec<RuleAtom>,
    pub head: Vec<RuleAtom>,
}

impl Rule {
    /// Create a rule from body and head atom lists.
    pub fn new(body: Vec<RuleAtom>, head: Vec<RuleAtom>) -> Self {
        Rule { body, head }
    }
}

/// A single atom inside a rule body or head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RuleAtom {
    /// `C(x)` — class membership. Structurally complex predicates are
    /// parenthesized when rendered.
    ClassAtom {
        predicate: ClassExpression,
        argument: AtomArgument,
    },

    /// `D(x)` — data range membership.
    DataRangeAtom {
        predicate: DataRange,
        argument: AtomArgument,
    },

    /// `P(x, y)` over an object property.
    ObjectPropertyAtom {
        predicate: ObjectPropertyExpression,
        first: AtomArgument,
        second: AtomArgument,
    },

    /// `p(x, v)` over a data property.
    DataPropertyAtom {
        predicate: Entity,
        first: AtomArgument,
        second: AtomArgument,
    },

    /// A built-in predicate, e.g. `greaterThan(?x, 5)`.
    BuiltInAtom {
        builtin: Iri,
        arguments: Vec<AtomArgument>,
    },

    /// `sameAs(x, y)`.
    SameAsAtom {
        first: AtomArgument,
        second: AtomArgument,
    },

    /// `differentFrom(x, y)`.
    DifferentFromAtom {
        first: AtomArgument,
        second: AtomArgument,
    },
}

/// An argument position inside a rule atom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AtomArgument {
    /// A rule variable; renders as `?name` from the IRI fragment.
    Variable(Iri),
    /// A concrete individual.
    Individual(Individual),
    /// A literal constant.
    Literal(Literal),
}

impl AtomArgument {
    /// Create a variable argument from an IRI.
    pub fn variable(iri: impl Into<Iri>) -> Self {
        AtomArgument::Variable(iri.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_holds_body_and_head() {
        let atom = RuleAtom::ClassAtom {
            predicate: ClassExpression::class("http://x#C"),
            argument: AtomArgument::variable("http://x#v"),
        };
        let rule = Rule::new(vec![atom.clone()], vec![atom]);
        assert_eq!(rule.body.len(), 1);
        assert_eq!(rule.head.len(), 1);
    }
}
