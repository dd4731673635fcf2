//! Ontology axioms.
//!
//! Each axiom kind renders through a fixed template (infix connective or
//! `Keyword: ` prefix); the templates live in the renderer, not here.

use serde::{Deserialize, Serialize};

use super::class_expr::ClassExpression;
use super::data_range::DataRange;
use super::entity::{Entity, Individual, Iri, ObjectPropertyExpression};
use super::literal::Literal;

/// An ontology axiom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Axiom {
    /// `sub subClassOf sup`.
    SubClassOf {
        sub: ClassExpression,
        sup: ClassExpression,
    },

    /// `A equivalentTo B equivalentTo ...` (commutative, sorted).
    EquivalentClasses(Vec<ClassExpression>),

    /// `A disjointWith B disjointWith ...` (commutative, sorted).
    DisjointClasses(Vec<ClassExpression>),

    /// `C disjointUnionOf [A B ...]` (structural operand order).
    DisjointUnion {
        class: Entity,
        operands: Vec<ClassExpression>,
    },

    /// `Functional: P`.
    FunctionalObjectProperty(ObjectPropertyExpression),
    /// `InverseFunctional: P`.
    InverseFunctionalObjectProperty(ObjectPropertyExpression),
    /// `Symmetric: P`.
    SymmetricObjectProperty(ObjectPropertyExpression),
    /// `AntiSymmetric: P`.
    AntiSymmetricObjectProperty(ObjectPropertyExpression),
    /// `Transitive: P`.
    TransitiveObjectProperty(ObjectPropertyExpression),
    /// `Reflexive: P`.
    ReflexiveObjectProperty(ObjectPropertyExpression),
    /// `Irreflexive: P`.
    IrreflexiveObjectProperty(ObjectPropertyExpression),

    /// `Functional: p` for a data property.
    FunctionalDataProperty(Entity),

    /// `D domainOf P`.
    ObjectPropertyDomain {
        property: ObjectPropertyExpression,
        domain: ClassExpression,
    },
    /// `R rangeOf P`.
    ObjectPropertyRange {
        property: ObjectPropertyExpression,
        range: ClassExpression,
    },
    /// `D domainOf p`.
    DataPropertyDomain {
        property: Entity,
        domain: ClassExpression,
    },
    /// `R rangeOf p`.
    DataPropertyRange {
        property: Entity,
        range: DataRange,
    },

    /// `i instanceOf C`.
    ClassAssertion {
        individual: Individual,
        class: ClassExpression,
    },

    /// `s P o`.
    ObjectPropertyAssertion {
        subject: Individual,
        property: ObjectPropertyExpression,
        object: Individual,
    },
    /// `not(s P o)`.
    NegativeObjectPropertyAssertion {
        subject: Individual,
        property: ObjectPropertyExpression,
        object: Individual,
    },
    /// `s p "lex"`.
    DataPropertyAssertion {
        subject: Individual,
        property: Entity,
        value: Literal,
    },
    /// `not(s p "lex")`.
    NegativeDataPropertyAssertion {
        subject: Individual,
        property: Entity,
        value: Literal,
    },

    /// `SameIndividuals: [a, b, ...]`.
    SameIndividuals(Vec<Individual>),
    /// `DifferentIndividuals: [a, b, ...]`.
    DifferentIndividuals(Vec<Individual>),

    /// `P inverseOf Q`.
    InverseProperties {
        first: ObjectPropertyExpression,
        second: ObjectPropertyExpression,
    },

    /// `P subPropertyOf Q`.
    SubObjectPropertyOf {
        sub: ObjectPropertyExpression,
        sup: ObjectPropertyExpression,
    },

    /// `P o Q ➞ R` — a property chain implying a super-property.
    SubPropertyChainOf {
        chain: Vec<ObjectPropertyExpression>,
        sup: ObjectPropertyExpression,
    },

    /// An import declaration; renders as the imported ontology IRI.
    ImportsDeclaration { iri: Iri },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axioms_are_cloneable_and_comparable() {
        let ax = Axiom::SubClassOf {
            sub: ClassExpression::class("http://x#A"),
            sup: ClassExpression::class("http://x#B"),
        };
        assert_eq!(ax.clone(), ax);
    }
}
