//! Binary bracket classification.
//!
//! Answers one question per node: does this expression need enclosing
//! brackets when it appears as the filler of a quantifier, cardinality,
//! or complement construct? The classification is pure, inspects only the
//! node's own variant, and never recurses into children. A binary policy
//! suffices because the grammar has exactly two nesting contexts that
//! matter: bare (top level or after a connective) and filler.

use crate::model::{ClassExpression, DataRange};

/// Whether a class expression needs brackets in filler position.
pub fn class_expr_needs_brackets(expr: &ClassExpression) -> bool {
    match expr {
        ClassExpression::IntersectionOf(_)
        | ClassExpression::UnionOf(_)
        | ClassExpression::ComplementOf(_)
        | ClassExpression::SomeValuesFrom { .. }
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
        | ClassExpression::DataExactCardinality { .. } => true,

        ClassExpression::Class(_) | ClassExpression::OneOf(_) => false,
    }
}

/// Whether a data range needs brackets in filler position.
pub fn data_range_needs_brackets(range: &DataRange) -> bool {
    match range {
        DataRange::DatatypeRestriction { .. } => true,
        DataRange::Datatype(_) | DataRange::DataOneOf(_) | DataRange::DataComplementOf(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entity, Facet, FacetRestriction, Literal, ObjectPropertyExpression};

    fn prop() -> ObjectPropertyExpression {
        ObjectPropertyExpression::named("http://x#p")
    }

    fn class_c() -> ClassExpression {
        ClassExpression::class("http://x#C")
    }

    #[test]
    fn composites_need_brackets() {
        assert!(class_expr_needs_brackets(&ClassExpression::intersection(
            vec![class_c(), class_c()]
        )));
        assert!(class_expr_needs_brackets(&ClassExpression::union(vec![
            class_c(),
            class_c()
        ])));
        assert!(class_expr_needs_brackets(&class_c().complement()));
        assert!(class_expr_needs_brackets(&ClassExpression::some(
            prop(),
            class_c()
        )));
        assert!(class_expr_needs_brackets(&ClassExpression::HasSelf {
            property: prop()
        }));
        assert!(class_expr_needs_brackets(&ClassExpression::MinCardinality {
            property: prop(),
            cardinality: 1,
            filler: Box::new(class_c()),
        }));
    }

    #[test]
    fn atomic_kinds_do_not() {
        assert!(!class_expr_needs_brackets(&class_c()));
        assert!(!class_expr_needs_brackets(&ClassExpression::OneOf(vec![])));
    }

    #[test]
    fn data_ranges() {
        assert!(!data_range_needs_brackets(&DataRange::datatype("http://x#dt")));
        assert!(!data_range_needs_brackets(&DataRange::DataOneOf(vec![
            Literal::untyped("a")
        ])));
        assert!(!data_range_needs_brackets(&DataRange::DataComplementOf(
            Box::new(DataRange::datatype("http://x#dt"))
        )));
        assert!(data_range_needs_brackets(&DataRange::DatatypeRestriction {
            range: Box::new(DataRange::datatype("http://x#dt")),
            facets: vec![FacetRestriction::new(
                Facet::MinInclusive,
                Literal::typed("0", Entity::datatype("http://x#int")),
            )],
        }));
    }
}
