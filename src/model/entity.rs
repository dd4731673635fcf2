//! Named entities: the leaves of the expression tree.
//!
//! Every class, property, individual, and datatype is identified by a
//! stable [`Iri`]. Display text is *not* stored here — it is produced at
//! render time by the injected
//! [`NameResolver`](crate::render::NameResolver), so the model carries no
//! naming policy.

use serde::{Deserialize, Serialize};

use super::class_expr::ClassExpression;

/// A URI-like identifier for an entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iri(pub String);

impl Iri {
    /// Create an IRI from any string-like value.
    pub fn new(iri: impl Into<String>) -> Self {
        Iri(iri.into())
    }

    /// The full IRI text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The fragment of the IRI: text after `#`, falling back to the text
    /// after the last `/`, falling back to the whole IRI.
    pub fn fragment(&self) -> &str {
        if let Some(idx) = self.0.rfind('#') {
            &self.0[idx + 1..]
        } else if let Some(idx) = self.0.rfind('/') {
            &self.0[idx + 1..]
        } else {
            &self.0
        }
    }
}

impl std::fmt::Display for Iri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Iri {
    fn from(s: &str) -> Self {
        Iri::new(s)
    }
}

/// Classification of a named entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A named class.
    Class,
    /// An object property (relates individuals to individuals).
    ObjectProperty,
    /// A data property (relates individuals to literals).
    DataProperty,
    /// A named individual.
    Individual,
    /// A datatype (e.g., `xsd:string`).
    Datatype,
}

/// A named entity: a stable identifier plus its kind.
///
/// Entities render through the injected name resolver; the renderer
/// itself never inspects the IRI except for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    pub iri: Iri,
}

impl Entity {
    /// Create a named class entity.
    pub fn class(iri: impl Into<Iri>) -> Self {
        Entity {
            kind: EntityKind::Class,
            iri: iri.into(),
        }
    }

    /// Create an object property entity.
    pub fn object_property(iri: impl Into<Iri>) -> Self {
        Entity {
            kind: EntityKind::ObjectProperty,
            iri: iri.into(),
        }
    }

    /// Create a data property entity.
    pub fn data_property(iri: impl Into<Iri>) -> Self {
        Entity {
            kind: EntityKind::DataProperty,
            iri: iri.into(),
        }
    }

    /// Create a named individual entity.
    pub fn individual(iri: impl Into<Iri>) -> Self {
        Entity {
            kind: EntityKind::Individual,
            iri: iri.into(),
        }
    }

    /// Create a datatype entity.
    pub fn datatype(iri: impl Into<Iri>) -> Self {
        Entity {
            kind: EntityKind::Datatype,
            iri: iri.into(),
        }
    }
}

impl From<String> for Iri {
    fn from(s: String) -> Self {
        Iri(s)
    }
}

/// An individual: either a named entity or an anonymous node.
///
/// Anonymous individuals have no resolvable name; they render as an
/// inline list of their asserted types, gathered from the active
/// [`TypeAssertionSource`](crate::render::TypeAssertionSource)s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Individual {
    /// A named individual, resolved through the name resolver.
    Named(Entity),
    /// An anonymous individual, identified only by a local node id.
    Anonymous { id: String },
}

impl Individual {
    /// Create a named individual from an IRI.
    pub fn named(iri: impl Into<Iri>) -> Self {
        Individual::Named(Entity::individual(iri))
    }

    /// Create an anonymous individual with a local node id.
    pub fn anonymous(id: impl Into<String>) -> Self {
        Individual::Anonymous { id: id.into() }
    }
}

/// An object property expression: a named property or the inverse of one.
///
/// Inverses render as `inv(P)` and may nest, although nesting deeper than
/// one level is unusual in practice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectPropertyExpression {
    /// A named object property.
    Property(Entity),
    /// The inverse of an object property expression.
    InverseOf(Box<ObjectPropertyExpression>),
}

impl ObjectPropertyExpression {
    /// Create a named object property expression from an IRI.
    pub fn named(iri: impl Into<Iri>) -> Self {
        ObjectPropertyExpression::Property(Entity::object_property(iri))
    }

    /// Wrap this expression in an inverse.
    pub fn inverse(self) -> Self {
        ObjectPropertyExpression::InverseOf(Box::new(self))
    }
}

/// Asserted types of an anonymous individual, used by the renderer to
/// give anonymous nodes a readable inline form.
pub type AssertedTypes = Vec<ClassExpression>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_after_hash() {
        let iri = Iri::new("http://example.org/onto#Dog");
        assert_eq!(iri.fragment(), "Dog");
    }

    #[test]
    fn fragment_after_slash_when_no_hash() {
        let iri = Iri::new("http://example.org/onto/Dog");
        assert_eq!(iri.fragment(), "Dog");
    }

    #[test]
    fn fragment_whole_iri_as_last_resort() {
        let iri = Iri::new("Dog");
        assert_eq!(iri.fragment(), "Dog");
    }

    #[test]
    fn entity_constructors_set_kind() {
        assert_eq!(Entity::class("http://x#A").kind, EntityKind::Class);
        assert_eq!(
            Entity::object_property("http://x#p").kind,
            EntityKind::ObjectProperty
        );
        assert_eq!(Entity::datatype("http://x#dt").kind, EntityKind::Datatype);
    }

    #[test]
    fn inverse_nests() {
        let p = ObjectPropertyExpression::named("http://x#p").inverse();
        assert!(matches!(p, ObjectPropertyExpression::InverseOf(_)));
    }
}
