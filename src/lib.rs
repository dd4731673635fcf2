//! # manchester-owl
//!
//! A rendering engine that converts in-memory logical-expression trees
//! (ontology axioms, class/property expressions, individuals, literals,
//! and SWRL-style rule atoms) into canonical, human-readable Manchester
//! OWL Syntax.
//!
//! ## Architecture
//!
//! - **Expression tree** (`model`): closed sum types over every node
//!   category — entities, class expressions, data ranges, literals,
//!   axioms, rules
//! - **Rendering engine** (`render`): depth-first syntax writer with
//!   deterministic canonical ordering of commutative operands, a binary
//!   bracket classifier for filler positions, and newline/indent
//!   bookkeeping for multi-line alignment
//! - **Diagnostics** (`error`): miette-powered error types, contained at
//!   the render entry point so the public contract never fails
//!
//! ## Library usage
//!
//! ```
//! use manchester_owl::model::{ClassExpression, ObjectPropertyExpression, OwlObject};
//! use manchester_owl::render::{IriFragmentResolver, ManchesterRenderer, RenderContext};
//!
//! let expr = ClassExpression::only(
//!     ObjectPropertyExpression::named("http://example.org/onto#hasTopping"),
//!     ClassExpression::some(
//!         ObjectPropertyExpression::named("http://example.org/onto#madeFrom"),
//!         ClassExpression::class("http://example.org/onto#Tomato"),
//!     ),
//! );
//! let renderer = ManchesterRenderer::new();
//! let ctx = RenderContext::with_resolver(&IriFragmentResolver);
//! assert_eq!(
//!     renderer.render_to_string(&OwlObject::Class(expr), &ctx),
//!     "hasTopping only (madeFrom some Tomato)"
//! );
//! ```

pub mod error;
pub mod model;
pub mod render;
