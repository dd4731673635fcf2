//! Data range expressions and facet restrictions.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::literal::Literal;

/// A data range: the filler side of data property restrictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataRange {
    /// A named datatype, resolved through the name resolver.
    Datatype(Entity),
    /// An enumeration of literal values, e.g. `{"a" "b"}`.
    DataOneOf(Vec<Literal>),
    /// The complement of another data range.
    DataComplementOf(Box<DataRange>),
    /// A data range narrowed by facet restrictions,
    /// e.g. `int[>= 0, < 100]`.
    DatatypeRestriction {
        range: Box<DataRange>,
        facets: Vec<FacetRestriction>,
    },
}

impl DataRange {
    /// Create a named datatype range from an IRI.
    pub fn datatype(iri: impl Into<super::entity::Iri>) -> Self {
        DataRange::Datatype(Entity::datatype(iri))
    }
}

/// A constraining facet from the XML Schema vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facet {
    MinInclusive,
    MaxInclusive,
    MinExclusive,
    MaxExclusive,
    Length,
    MinLength,
    MaxLength,
    Pattern,
    TotalDigits,
    FractionDigits,
}

impl Facet {
    /// The XSD short name, used as the rendering fallback when no infix
    /// symbol is configured for the facet.
    pub fn short_name(self) -> &'static str {
        match self {
            Facet::MinInclusive => "minInclusive",
            Facet::MaxInclusive => "maxInclusive",
            Facet::MinExclusive => "minExclusive",
            Facet::MaxExclusive => "maxExclusive",
            Facet::Length => "length",
            Facet::MinLength => "minLength",
            Facet::MaxLength => "maxLength",
            Facet::Pattern => "pattern",
            Facet::TotalDigits => "totalDigits",
            Facet::FractionDigits => "fractionDigits",
        }
    }
}

/// A single facet/value pair inside a datatype restriction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetRestriction {
    pub facet: Facet,
    pub value: Literal,
}

impl FacetRestriction {
    /// Create a facet restriction.
    pub fn new(facet: Facet, value: Literal) -> Self {
        FacetRestriction { facet, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facet_short_names_match_xsd() {
        assert_eq!(Facet::MinInclusive.short_name(), "minInclusive");
        assert_eq!(Facet::Pattern.short_name(), "pattern");
        assert_eq!(Facet::FractionDigits.short_name(), "fractionDigits");
    }

    #[test]
    fn datatype_range_wraps_entity() {
        let range = DataRange::datatype("http://www.w3.org/2001/XMLSchema#int");
        assert!(matches!(range, DataRange::Datatype(_)));
    }
}
