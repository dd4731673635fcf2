//! The Manchester syntax rendering engine.
//!
//! Converts an [`OwlObject`](crate::model::OwlObject) expression tree into
//! canonical, human-readable Manchester-style text. The engine is built
//! from four small pieces:
//!
//! - **Syntax writer** (`writer`): the depth-first walk that emits
//!   keywords, punctuation, and entity names
//! - **Bracket classifier** (`brackets`): pure per-node "needs brackets?"
//!   decisions for filler positions
//! - **Buffer** (`buffer`): render-call-scoped text plus newline/indent
//!   bookkeeping
//! - **Config** (`config`): keyword vocabulary and datatype/facet tables
//!   as plain data
//!
//! ## Usage
//!
//! ```
//! use manchester_owl::model::{ClassExpression, ObjectPropertyExpression, OwlObject};
//! use manchester_owl::render::{IriFragmentResolver, ManchesterRenderer, RenderContext};
//!
//! let expr = ClassExpression::some(
//!     ObjectPropertyExpression::named("http://example.org/onto#hasPart"),
//!     ClassExpression::class("http://example.org/onto#Engine"),
//! );
//! let renderer = ManchesterRenderer::new();
//! let ctx = RenderContext::with_resolver(&IriFragmentResolver);
//! let text = renderer.render(&OwlObject::Class(expr), &ctx).into_text();
//! assert_eq!(text, "hasPart some Engine");
//! ```
//!
//! ## Contract
//!
//! [`ManchesterRenderer::render`] never fails: an internal fault (resolver
//! error, malformed node) is caught at the entry point, converted into a
//! bounded inline `<Error! ...>` marker appended to whatever was already
//! rendered, and reported as [`Rendering::Partial`]. This makes the
//! renderer safe to call from an interactive display loop.

pub mod brackets;
pub mod buffer;
pub mod config;

mod writer;

use crate::error::{RenderError, RenderResult};
use crate::model::{ClassExpression, Entity, OwlObject};

pub use brackets::{class_expr_needs_brackets, data_range_needs_brackets};
pub use buffer::RenderBuffer;
pub use config::{Keywords, RenderConfig};

use writer::SyntaxWriter;

/// Longest error message carried by the inline marker; longer messages
/// are cut so one bad node cannot flood a document view.
const MAX_MARKER_MESSAGE: usize = 120;

/// Injected capability mapping an entity to its display text.
///
/// The renderer has no naming policy of its own: short ids, labels, and
/// prefixed names are all decided here. A resolver fault is contained by
/// the render entry point — the renderer does not retry or substitute a
/// fallback name.
pub trait NameResolver {
    fn resolve(&self, entity: &Entity) -> RenderResult<String>;
}

/// Default resolver: the IRI fragment (text after `#`, else after the
/// last `/`, else the whole IRI).
#[derive(Debug, Clone, Copy, Default)]
pub struct IriFragmentResolver;

impl NameResolver for IriFragmentResolver {
    fn resolve(&self, entity: &Entity) -> RenderResult<String> {
        Ok(entity.iri.fragment().to_string())
    }
}

/// An active context supplying the asserted types of anonymous
/// individuals. Typically one per open ontology.
pub trait TypeAssertionSource {
    /// All class expressions asserted as types of the anonymous
    /// individual with the given node id.
    fn asserted_types(&self, anonymous_id: &str) -> Vec<ClassExpression>;
}

/// Everything injected into one render call: the name resolver and the
/// active contexts for anonymous-individual type lookups.
pub struct RenderContext<'a> {
    pub resolver: &'a dyn NameResolver,
    pub contexts: &'a [&'a dyn TypeAssertionSource],
}

impl<'a> RenderContext<'a> {
    /// Create a context with a resolver and no active contexts.
    pub fn with_resolver(resolver: &'a dyn NameResolver) -> Self {
        Self {
            resolver,
            contexts: &[],
        }
    }

    /// Create a context with a resolver and active contexts.
    pub fn new(resolver: &'a dyn NameResolver, contexts: &'a [&'a dyn TypeAssertionSource]) -> Self {
        Self { resolver, contexts }
    }
}

/// Outcome of a render call: always text, possibly tagged as partial.
#[derive(Debug)]
pub enum Rendering {
    /// The whole tree rendered cleanly.
    Complete(String),
    /// A fault was contained; `text` ends with the inline error marker
    /// and preserves everything rendered before the fault.
    Partial { text: String, error: RenderError },
}

impl Rendering {
    /// The rendered text, partial or not. The render contract guarantees
    /// this is always available.
    pub fn into_text(self) -> String {
        match self {
            Rendering::Complete(text) => text,
            Rendering::Partial { text, .. } => text,
        }
    }

    /// Borrow the rendered text.
    pub fn as_str(&self) -> &str {
        match self {
            Rendering::Complete(text) => text,
            Rendering::Partial { text, .. } => text,
        }
    }

    /// Whether the walk finished without a contained fault.
    pub fn is_complete(&self) -> bool {
        matches!(self, Rendering::Complete(_))
    }
}

impl std::fmt::Display for Rendering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Renders expression trees as Manchester OWL Syntax.
///
/// Holds only immutable configuration, so a single renderer can serve
/// concurrent render calls from multiple threads; all per-call state
/// lives in the call's own buffer.
#[derive(Debug, Clone, Default)]
pub struct ManchesterRenderer {
    config: RenderConfig,
}

impl ManchesterRenderer {
    /// Create a renderer with the default keyword vocabulary and tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with custom configuration.
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render an expression tree to text.
    ///
    /// Never fails: internal faults are converted into a bounded inline
    /// `<Error! ...>` marker and the partially rendered text is preserved
    /// in [`Rendering::Partial`].
    pub fn render(&self, object: &OwlObject, ctx: &RenderContext) -> Rendering {
        let mut writer = SyntaxWriter::new(&self.config, ctx);
        match writer.write_object(object) {
            Ok(()) => Rendering::Complete(writer.into_text()),
            Err(error) => {
                tracing::debug!(%error, "contained rendering fault");
                let mut text = writer.into_text();
                text.push_str(&error_marker(&error));
                Rendering::Partial { text, error }
            }
        }
    }

    /// Render straight to a string, discarding the partial/complete tag.
    pub fn render_to_string(&self, object: &OwlObject, ctx: &RenderContext) -> String {
        self.render(object, ctx).into_text()
    }
}

/// Build the bounded inline error marker.
fn error_marker(error: &RenderError) -> String {
    let mut message = error.to_string();
    if message.len() > MAX_MARKER_MESSAGE {
        let mut cut = MAX_MARKER_MESSAGE;
        while !message.is_char_boundary(cut) {
            cut -= 1;
        }
        message.truncate(cut);
        message.push_str("...");
    }
    format!("<Error! {message}>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Individual, ObjectPropertyExpression};

    struct FailingResolver;

    impl NameResolver for FailingResolver {
        fn resolve(&self, entity: &Entity) -> RenderResult<String> {
            Err(RenderError::NameResolution {
                iri: entity.iri.as_str().to_string(),
                message: "resolver offline".into(),
            })
        }
    }

    #[test]
    fn render_is_infallible_on_resolver_fault() {
        let renderer = ManchesterRenderer::new();
        let ctx = RenderContext::with_resolver(&FailingResolver);
        let obj = OwlObject::Class(ClassExpression::class("http://x#C"));
        let rendering = renderer.render(&obj, &ctx);
        assert!(!rendering.is_complete());
        assert!(rendering.as_str().contains("<Error!"));
    }

    #[test]
    fn partial_output_is_preserved_before_the_fault() {
        struct HalfResolver;
        impl NameResolver for HalfResolver {
            fn resolve(&self, entity: &Entity) -> RenderResult<String> {
                if entity.iri.as_str().ends_with("bad") {
                    Err(RenderError::NameResolution {
                        iri: entity.iri.as_str().to_string(),
                        message: "no label".into(),
                    })
                } else {
                    Ok(entity.iri.fragment().to_string())
                }
            }
        }

        let renderer = ManchesterRenderer::new();
        let ctx = RenderContext::with_resolver(&HalfResolver);
        let expr = ClassExpression::some(
            ObjectPropertyExpression::named("http://x#hasPart"),
            ClassExpression::class("http://x#bad"),
        );
        let text = renderer.render(&OwlObject::Class(expr), &ctx).into_text();
        assert!(text.starts_with("hasPart some "));
        assert!(text.contains("<Error!"));
    }

    #[test]
    fn error_marker_is_bounded() {
        let error = RenderError::NameResolution {
            iri: "x".repeat(500),
            message: "y".repeat(500),
        };
        let marker = error_marker(&error);
        assert!(marker.len() <= MAX_MARKER_MESSAGE + "<Error! ...>".len());
        assert!(marker.starts_with("<Error! "));
        assert!(marker.ends_with("...>"));
    }

    #[test]
    fn fragment_resolver_uses_iri_fragment() {
        let resolver = IriFragmentResolver;
        let name = resolver
            .resolve(&Entity::class("http://example.org/onto#Dog"))
            .unwrap();
        assert_eq!(name, "Dog");
    }

    #[test]
    fn anonymous_individual_lists_types_from_contexts() {
        struct OneType;
        impl TypeAssertionSource for OneType {
            fn asserted_types(&self, _anonymous_id: &str) -> Vec<ClassExpression> {
                vec![ClassExpression::class("http://x#Mammal")]
            }
        }

        let renderer = ManchesterRenderer::new();
        let sources: [&dyn TypeAssertionSource; 1] = [&OneType];
        let ctx = RenderContext::new(&IriFragmentResolver, &sources);
        let text = renderer
            .render(&OwlObject::Individual(Individual::anonymous("_:b0")), &ctx)
            .into_text();
        assert_eq!(text, "Anonymous : [ Mammal ]");
    }
}
