//! Class (description) expressions — the heart of the expression tree.
//!
//! `ClassExpression` is a closed sum type: the renderer and the bracket
//! classifier both match on it exhaustively, so adding a variant here
//! forces every consumer to handle it.

use serde::{Deserialize, Serialize};

use super::data_range::DataRange;
use super::entity::{Entity, Individual, Iri, ObjectPropertyExpression};
use super::literal::Literal;

/// A class expression (description).
///
/// Operand lists of composite variants must be non-empty; cardinalities
/// are non-negative by construction (`u32`). Operand order of the
/// commutative variants (`IntersectionOf`, `UnionOf`) carries no logical
/// meaning — the renderer canonicalizes it at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClassExpression {
    /// A named class, resolved through the name resolver.
    Class(Entity),

    /// Intersection of class expressions (`A and B`, commutative).
    IntersectionOf(Vec<ClassExpression>),

    /// Union of class expressions (`A or B`, commutative).
    UnionOf(Vec<ClassExpression>),

    /// Complement of a class expression (`not A`).
    ComplementOf(Box<ClassExpression>),

    /// Existential restriction (`P some C`).
    SomeValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },

    /// Universal restriction (`P only C`).
    AllValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },

    /// Value restriction (`P value i`).
    HasValue {
        property: ObjectPropertyExpression,
        individual: Individual,
    },

    /// Minimum cardinality restriction (`P min n C`).
    MinCardinality {
        property: ObjectPropertyExpression,
        cardinality: u32,
        filler: Box<ClassExpression>,
    },

    /// Maximum cardinality restriction (`P max n C`).
    MaxCardinality {
        property: ObjectPropertyExpression,
        cardinality: u32,
        filler: Box<ClassExpression>,
    },

    /// Exact cardinality restriction (`P exactly n C`).
    ExactCardinality {
        property: ObjectPropertyExpression,
        cardinality: u32,
        filler: Box<ClassExpression>,
    },

    /// Local reflexivity restriction (`P some Self`).
    HasSelf { property: ObjectPropertyExpression },

    /// Enumeration of individuals (`{a b c}`, structural order).
    OneOf(Vec<Individual>),

    /// Existential data restriction (`p some D`).
    DataSomeValuesFrom {
        property: Entity,
        filler: DataRange,
    },

    /// Universal data restriction (`p only D`).
    DataAllValuesFrom {
        property: Entity,
        filler: DataRange,
    },

    /// Data value restriction (`p value "lex"`).
    DataHasValue { property: Entity, value: Literal },

    /// Minimum data cardinality restriction (`p min n D`).
    DataMinCardinality {
        property: Entity,
        cardinality: u32,
        filler: DataRange,
    },

    /// Maximum data cardinality restriction (`p max n D`).
    DataMaxCardinality {
        property: Entity,
        cardinality: u32,
        filler: DataRange,
    },

    /// Exact data cardinality restriction (`p exactly n D`).
    DataExactCardinality {
        property: Entity,
        cardinality: u32,
        filler: DataRange,
    },
}

impl ClassExpression {
    /// Create a named class expression from an IRI.
    pub fn class(iri: impl Into<Iri>) -> Self {
        ClassExpression::Class(Entity::class(iri))
    }

    /// Create an intersection of the given operands.
    pub fn intersection(operands: Vec<ClassExpression>) -> Self {
        ClassExpression::IntersectionOf(operands)
    }

    /// Create a union of the given operands.
    pub fn union(operands: Vec<ClassExpression>) -> Self {
        ClassExpression::UnionOf(operands)
    }

    /// Create the complement of this expression.
    pub fn complement(self) -> Self {
        ClassExpression::ComplementOf(Box::new(self))
    }

    /// Create an existential restriction `property some filler`.
    pub fn some(property: ObjectPropertyExpression, filler: ClassExpression) -> Self {
        ClassExpression::SomeValuesFrom {
            property,
            filler: Box::new(filler),
        }
    }

    /// Create a universal restriction `property only filler`.
    pub fn only(property: ObjectPropertyExpression, filler: ClassExpression) -> Self {
        ClassExpression::AllValuesFrom {
            property,
            filler: Box::new(filler),
        }
    }

    /// True for every restriction variant (quantifier, value, cardinality,
    /// self, and their data counterparts). Drives the `that` connector
    /// inside intersections.
    pub fn is_restriction(&self) -> bool {
        matches!(
            self,
            ClassExpression::SomeValuesFrom { .. }
                | ClassExpression::AllValuesFrom { .. }
                | ClassExpression::HasValue { .. }
                | ClassExpression::MinCardinality { .. }
                | ClassExpression::MaxCardinality { .. }
                | ClassExpression::ExactCardinality { .. }
                | ClassExpression::HasSelf { .. }
                | ClassExpression::DataSomeValuesFrom { .. }
                | ClassExpression::DataAllValuesFrom { .. }
                | ClassExpression::DataHasValue { .. }
                | ClassExpression::DataMinCardinality { .. }
                | ClassExpression::DataMaxCardinality { .. }
                | ClassExpression::DataExactCardinality { .. }
        )
    }

    /// True only for the named-class variant.
    pub fn is_named_class(&self) -> bool {
        matches!(self, ClassExpression::Class(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restriction_predicate_covers_quantifiers() {
        let p = ObjectPropertyExpression::named("http://x#p");
        let c = ClassExpression::class("http://x#C");
        assert!(ClassExpression::some(p.clone(), c.clone()).is_restriction());
        assert!(ClassExpression::only(p.clone(), c.clone()).is_restriction());
        assert!(ClassExpression::HasSelf { property: p }.is_restriction());
        assert!(!c.is_restriction());
    }

    #[test]
    fn named_class_predicate() {
        assert!(ClassExpression::class("http://x#C").is_named_class());
        assert!(!ClassExpression::class("http://x#C").complement().is_named_class());
    }
}
