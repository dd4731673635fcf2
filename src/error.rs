//! Rich diagnostic error types for the rendering engine.
//!
//! Follows the miette pattern: every error variant carries
//! `#[diagnostic(code(...), help(...))]` so the caller knows exactly
//! what went wrong and how to fix it. None of these errors escape
//! [`ManchesterRenderer::render`](crate::render::ManchesterRenderer::render) —
//! the entry point converts them into an inline marker and a
//! [`Rendering::Partial`](crate::render::Rendering) result.

use miette::Diagnostic;
use thiserror::Error;

/// Errors produced while walking an expression tree.
#[derive(Debug, Error, Diagnostic)]
pub enum RenderError {
    #[error("name resolution failed for <{iri}>: {message}")]
    #[diagnostic(
        code(manchester::render::name_resolution),
        help(
            "The injected name resolver could not produce display text for \
             this entity. The renderer does not substitute a fallback name; \
             fix the resolver or the entity reference. The partially rendered \
             output up to this point is preserved in Rendering::Partial."
        )
    )]
    NameResolution { iri: String, message: String },

    #[error("empty operand list for {operator}")]
    #[diagnostic(
        code(manchester::render::empty_operands),
        help(
            "Every composite expression must carry at least one operand. \
             An empty intersection, union, equivalence, or disjointness node \
             violates the data model invariant and cannot be rendered. \
             Check the code that constructed this expression tree."
        )
    )]
    EmptyOperands { operator: &'static str },
}

/// Result type for internal rendering steps.
pub type RenderResult<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_resolution_display_includes_iri() {
        let err = RenderError::NameResolution {
            iri: "http://example.org/onto#Dog".into(),
            message: "no label".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("http://example.org/onto#Dog"));
        assert!(msg.contains("no label"));
    }

    #[test]
    fn empty_operands_display_names_operator() {
        let err = RenderError::EmptyOperands {
            operator: "intersection",
        };
        assert!(format!("{err}").contains("intersection"));
    }
}
