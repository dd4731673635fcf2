//! Literal values: typed and untyped constants.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A literal constant.
///
/// A literal is either typed (lexical form plus a datatype reference) or
/// untyped (lexical form plus an optional language tag) — never both,
/// which the enum enforces structurally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    /// A typed literal, e.g. `"1.5"^^xsd:float`.
    Typed { lexical: String, datatype: Entity },
    /// An untyped literal with an optional language tag, e.g. `"chien"@fr`.
    Untyped {
        lexical: String,
        lang: Option<String>,
    },
}

impl Literal {
    /// Create a typed literal.
    pub fn typed(lexical: impl Into<String>, datatype: Entity) -> Self {
        Literal::Typed {
            lexical: lexical.into(),
            datatype,
        }
    }

    /// Create an untyped literal without a language tag.
    pub fn untyped(lexical: impl Into<String>) -> Self {
        Literal::Untyped {
            lexical: lexical.into(),
            lang: None,
        }
    }

    /// Create an untyped literal with a language tag.
    pub fn with_lang(lexical: impl Into<String>, lang: impl Into<String>) -> Self {
        Literal::Untyped {
            lexical: lexical.into(),
            lang: Some(lang.into()),
        }
    }

    /// The raw lexical form, regardless of typing.
    pub fn lexical(&self) -> &str {
        match self {
            Literal::Typed { lexical, .. } | Literal::Untyped { lexical, .. } => lexical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity::EntityKind;

    #[test]
    fn typed_literal_carries_datatype() {
        let lit = Literal::typed("42", Entity::datatype("http://www.w3.org/2001/XMLSchema#int"));
        match &lit {
            Literal::Typed { datatype, .. } => assert_eq!(datatype.kind, EntityKind::Datatype),
            Literal::Untyped { .. } => panic!("expected typed literal"),
        }
        assert_eq!(lit.lexical(), "42");
    }

    #[test]
    fn untyped_literal_lang_is_optional() {
        assert!(matches!(
            Literal::untyped("hello"),
            Literal::Untyped { lang: None, .. }
        ));
        assert!(matches!(
            Literal::with_lang("chien", "fr"),
            Literal::Untyped { lang: Some(_), .. }
        ));
    }
}
