//! The expression tree: a closed, polymorphic variant set.
//!
//! Nodes are immutable and externally constructed; the renderer never
//! mutates them and holds no references after a render call returns.
//! Every category the renderer understands is a variant of [`OwlObject`],
//! so rendering and bracket classification are exhaustive matches and the
//! compiler guarantees new node kinds are handled everywhere.
//!
//! ## Categories
//!
//! - **Entities** ([`Entity`]): classes, properties, individuals, datatypes
//! - **Class expressions** ([`ClassExpression`]): intersections, unions,
//!   complements, restrictions, enumerations
//! - **Data ranges** ([`DataRange`]): datatypes, enumerations, facets
//! - **Literals** ([`Literal`]): typed and untyped constants
//! - **Axioms** ([`Axiom`]): subclass, equivalence, assertions, chains
//! - **Rules** ([`Rule`], [`RuleAtom`]): SWRL-style body/head atom lists

pub mod axiom;
pub mod class_expr;
pub mod data_range;
pub mod entity;
pub mod literal;
pub mod rule;

pub use axiom::Axiom;
pub use class_expr::ClassExpression;
pub use data_range::{DataRange, Facet, FacetRestriction};
pub use entity::{Entity, EntityKind, Individual, Iri, ObjectPropertyExpression};
pub use literal::Literal;
pub use rule::{AtomArgument, Rule, RuleAtom};

use serde::{Deserialize, Serialize};

/// Top-level render input: any node category the engine understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OwlObject {
    Entity(Entity),
    Individual(Individual),
    ObjectProperty(ObjectPropertyExpression),
    Class(ClassExpression),
    DataRange(DataRange),
    Literal(Literal),
    Axiom(Axiom),
    Rule(Rule),
    Atom(RuleAtom),
}

impl From<Entity> for OwlObject {
    fn from(e: Entity) -> Self {
        OwlObject::Entity(e)
    }
}

impl From<Individual> for OwlObject {
    fn from(i: Individual) -> Self {
        OwlObject::Individual(i)
    }
}

impl From<ObjectPropertyExpression> for OwlObject {
    fn from(p: ObjectPropertyExpression) -> Self {
        OwlObject::ObjectProperty(p)
    }
}

impl From<ClassExpression> for OwlObject {
    fn from(c: ClassExpression) -> Self {
        OwlObject::Class(c)
    }
}

impl From<DataRange> for OwlObject {
    fn from(d: DataRange) -> Self {
        OwlObject::DataRange(d)
    }
}

impl From<Literal> for OwlObject {
    fn from(l: Literal) -> Self {
        OwlObject::Literal(l)
    }
}

impl From<Axiom> for OwlObject {
    fn from(a: Axiom) -> Self {
        OwlObject::Axiom(a)
    }
}

impl From<Rule> for OwlObject {
    fn from(r: Rule) -> Self {
        OwlObject::Rule(r)
    }
}

impl From<RuleAtom> for OwlObject {
    fn from(a: RuleAtom) -> Self {
        OwlObject::Atom(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_conversions_preserve_category() {
        let obj: OwlObject = ClassExpression::class("http://x#C").into();
        assert!(matches!(obj, OwlObject::Class(_)));

        let obj: OwlObject = Literal::untyped("hello").into();
        assert!(matches!(obj, OwlObject::Literal(_)));
    }
}
