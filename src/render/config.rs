//! Rendering policy as plain data.
//!
//! Everything a deployment might want to customize — keyword vocabulary,
//! the simple-datatype quoting table, facet symbols — lives in
//! [`RenderConfig`], passed to the renderer at construction. Customization
//! is data, not subclassing. The config is immutable after construction,
//! which is what makes a single renderer safe to share across threads.

use std::collections::HashMap;

use crate::model::{Facet, Iri};

/// XSD datatype IRIs used by the default simple-datatype table.
pub mod xsd {
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const INT: &str = "http://www.w3.org/2001/XMLSchema#int";
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
}

/// The fixed quantifier/connective vocabulary.
#[derive(Debug, Clone)]
pub struct Keywords {
    pub and: String,
    pub or: String,
    pub not: String,
    pub some: String,
    pub only: String,
    pub value: String,
    pub min: String,
    pub max: String,
    pub exactly: String,
}

impl Default for Keywords {
    fn default() -> Self {
        Self {
            and: "and".into(),
            or: "or".into(),
            not: "not".into(),
            some: "some".into(),
            only: "only".into(),
            value: "value".into(),
            min: "min".into(),
            max: "max".into(),
            exactly: "exactly".into(),
        }
    }
}

/// Configuration for the Manchester syntax renderer.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Keyword vocabulary for connectives and quantifiers.
    pub keywords: Keywords,
    /// Datatypes rendered "simply": the flag says whether the lexical
    /// form is quoted (`true` for strings) or emitted bare (`false` for
    /// numerics and booleans). Any datatype absent from this table
    /// renders as `"lexical"^^Name`.
    pub simple_datatypes: HashMap<Iri, bool>,
    /// Infix symbols for facets; facets absent from this table fall back
    /// to their XSD short name.
    pub facet_symbols: HashMap<Facet, String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let mut simple_datatypes = HashMap::new();
        simple_datatypes.insert(Iri::new(xsd::STRING), true);
        simple_datatypes.insert(Iri::new(xsd::INT), false);
        simple_datatypes.insert(Iri::new(xsd::FLOAT), false);
        simple_datatypes.insert(Iri::new(xsd::DOUBLE), false);
        simple_datatypes.insert(Iri::new(xsd::BOOLEAN), false);

        let mut facet_symbols = HashMap::new();
        facet_symbols.insert(Facet::MinExclusive, ">".into());
        facet_symbols.insert(Facet::MaxExclusive, "<".into());
        facet_symbols.insert(Facet::MinInclusive, ">=".into());
        facet_symbols.insert(Facet::MaxInclusive, "<=".into());

        Self {
            keywords: Keywords::default(),
            simple_datatypes,
            facet_symbols,
        }
    }
}

impl RenderConfig {
    /// Look up the infix symbol for a facet, falling back to its short name.
    pub fn facet_symbol(&self, facet: Facet) -> &str {
        self.facet_symbols
            .get(&facet)
            .map(String::as_str)
            .unwrap_or_else(|| facet.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_quotes_strings_only() {
        let config = RenderConfig::default();
        assert_eq!(config.simple_datatypes.get(&Iri::new(xsd::STRING)), Some(&true));
        assert_eq!(config.simple_datatypes.get(&Iri::new(xsd::INT)), Some(&false));
        assert_eq!(config.simple_datatypes.get(&Iri::new(xsd::BOOLEAN)), Some(&false));
    }

    #[test]
    fn facet_symbols_fall_back_to_short_name() {
        let config = RenderConfig::default();
        assert_eq!(config.facet_symbol(Facet::MinInclusive), ">=");
        assert_eq!(config.facet_symbol(Facet::Pattern), "pattern");
    }

    #[test]
    fn keywords_are_overridable() {
        let config = RenderConfig {
            keywords: Keywords {
                and: "und".into(),
                ..Keywords::default()
            },
            ..RenderConfig::default()
        };
        assert_eq!(config.keywords.and, "und");
        assert_eq!(config.keywords.or, "or");
    }
}
