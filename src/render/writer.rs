//! The recursive syntax walk.
//!
//! [`SyntaxWriter`] owns the output buffer for one render call and walks
//! the expression tree depth-first, emitting keywords and punctuation.
//! Every step returns a [`RenderResult`] and propagates with `?`; only
//! the entry point in `render::mod` converts a failure into the inline
//! error marker.

use crate::error::{RenderError, RenderResult};
use crate::model::{
    AtomArgument, Axiom, ClassExpression, DataRange, Entity, FacetRestriction, Individual,
    Literal, ObjectPropertyExpression, OwlObject, Rule, RuleAtom,
};

use super::RenderContext;
use super::brackets::{class_expr_needs_brackets, data_range_needs_brackets};
use super::buffer::RenderBuffer;
use super::config::{Keywords, RenderConfig};

/// Glyph joining rule-atom conjunctions.
const CONJUNCTION: &str = " \u{2227} ";
/// Glyph between rule body and head.
const IMPLIES: &str = " \u{2192} ";
/// Glyph between a property chain and its super-property.
const CHAIN_IMPLIES: &str = " \u{279E} ";

/// Depth-first writer over the expression tree.
pub(super) struct SyntaxWriter<'a> {
    config: &'a RenderConfig,
    ctx: &'a RenderContext<'a>,
    buf: RenderBuffer,
}

impl<'a> SyntaxWriter<'a> {
    pub(super) fn new(config: &'a RenderConfig, ctx: &'a RenderContext<'a>) -> Self {
        Self {
            config,
            ctx,
            buf: RenderBuffer::new(),
        }
    }

    pub(super) fn into_text(self) -> String {
        self.buf.into_text()
    }

    fn keywords(&self) -> &'a Keywords {
        &self.config.keywords
    }

    pub(super) fn write_object(&mut self, object: &OwlObject) -> RenderResult<()> {
        match object {
            OwlObject::Entity(entity) => self.write_entity(entity),
            OwlObject::Individual(individual) => self.write_individual(individual),
            OwlObject::ObjectProperty(property) => self.write_property(property),
            OwlObject::Class(expr) => self.write_class_expr(expr),
            OwlObject::DataRange(range) => self.write_data_range(range),
            OwlObject::Literal(literal) => self.write_literal(literal),
            OwlObject::Axiom(axiom) => self.write_axiom(axiom),
            OwlObject::Rule(rule) => self.write_rule(rule),
            OwlObject::Atom(atom) => self.write_atom(atom),
        }
    }

    // ── Leaves ──────────────────────────────────────────────────────────

    fn write_entity(&mut self, entity: &Entity) -> RenderResult<()> {
        let name = self.ctx.resolver.resolve(entity)?;
        self.buf.write(&name);
        Ok(())
    }

    fn write_property(&mut self, property: &ObjectPropertyExpression) -> RenderResult<()> {
        match property {
            ObjectPropertyExpression::Property(entity) => self.write_entity(entity),
            ObjectPropertyExpression::InverseOf(inner) => {
                self.buf.write("inv(");
                self.write_property(inner)?;
                self.buf.write(")");
                Ok(())
            }
        }
    }

    fn write_individual(&mut self, individual: &Individual) -> RenderResult<()> {
        match individual {
            Individual::Named(entity) => self.write_entity(entity),
            Individual::Anonymous { id } => {
                self.buf.write("Anonymous : [");
                for source in self.ctx.contexts {
                    for ty in source.asserted_types(id) {
                        self.buf.write(" ");
                        self.write_bracketed_class(&ty)?;
                    }
                }
                self.buf.write(" ]");
                Ok(())
            }
        }
    }

    fn write_literal(&mut self, literal: &Literal) -> RenderResult<()> {
        match literal {
            Literal::Typed { lexical, datatype } => {
                match self.config.simple_datatypes.get(&datatype.iri) {
                    Some(true) => {
                        self.buf.write("\"");
                        self.buf.write(lexical);
                        self.buf.write("\"");
                    }
                    Some(false) => self.buf.write(lexical),
                    None => {
                        self.buf.write("\"");
                        self.buf.write(lexical);
                        self.buf.write("\"^^");
                        self.write_entity(datatype)?;
                    }
                }
                Ok(())
            }
            Literal::Untyped { lexical, lang } => {
                self.buf.write("\"");
                self.buf.write(lexical);
                self.buf.write("\"");
                if let Some(tag) = lang {
                    self.buf.write("@");
                    self.buf.write(tag);
                }
                Ok(())
            }
        }
    }

    // ── Class expressions ───────────────────────────────────────────────

    fn write_class_expr(&mut self, expr: &ClassExpression) -> RenderResult<()> {
        match expr {
            ClassExpression::Class(entity) => self.write_entity(entity),

            ClassExpression::IntersectionOf(operands) => self.write_intersection(operands),

            ClassExpression::UnionOf(operands) => self.write_union(operands),

            ClassExpression::ComplementOf(operand) => {
                self.buf.write(self.keywords().not.as_str());
                self.buf.write(" ");
                self.write_bracketed_class(operand)
            }

            ClassExpression::SomeValuesFrom { property, filler } => {
                self.write_property(property)?;
                self.write_spaced(self.keywords().some.as_str());
                self.write_bracketed_class(filler)
            }

            ClassExpression::AllValuesFrom { property, filler } => {
                self.write_property(property)?;
                self.write_spaced(self.keywords().only.as_str());
                self.write_bracketed_class(filler)
            }

            ClassExpression::HasValue {
                property,
                individual,
            } => {
                self.write_property(property)?;
                self.write_spaced(self.keywords().value.as_str());
                self.write_individual(individual)
            }

            ClassExpression::MinCardinality {
                property,
                cardinality,
                filler,
            } => self.write_cardinality(property, self.keywords().min.as_str(), *cardinality, filler),

            ClassExpression::MaxCardinality {
                property,
                cardinality,
                filler,
            } => self.write_cardinality(property, self.keywords().max.as_str(), *cardinality, filler),

            ClassExpression::ExactCardinality {
                property,
                cardinality,
                filler,
            } => {
                self.write_cardinality(property, self.keywords().exactly.as_str(), *cardinality, filler)
            }

            ClassExpression::HasSelf { property } => {
                self.write_property(property)?;
                self.write_spaced(self.keywords().some.as_str());
                self.buf.write("Self");
                Ok(())
            }

            ClassExpression::OneOf(individuals) => {
                self.buf.write("{");
                for (i, individual) in individuals.iter().enumerate() {
                    if i > 0 {
                        self.buf.write(" ");
                    }
                    self.write_individual(individual)?;
                }
                self.buf.write("}");
                Ok(())
            }

            ClassExpression::DataSomeValuesFrom { property, filler } => {
                self.write_entity(property)?;
                self.write_spaced(self.keywords().some.as_str());
                self.write_bracketed_data(filler)
            }

            ClassExpression::DataAllValuesFrom { property, filler } => {
                self.write_entity(property)?;
                self.write_spaced(self.keywords().only.as_str());
                self.write_bracketed_data(filler)
            }

            ClassExpression::DataHasValue { property, value } => {
                self.write_entity(property)?;
                self.write_spaced(self.keywords().value.as_str());
                self.write_literal(value)
            }

            ClassExpression::DataMinCardinality {
                property,
                cardinality,
                filler,
            } => {
                self.write_data_cardinality(property, self.keywords().min.as_str(), *cardinality, filler)
            }

            ClassExpression::DataMaxCardinality {
                property,
                cardinality,
                filler,
            } => {
                self.write_data_cardinality(property, self.keywords().max.as_str(), *cardinality, filler)
            }

            ClassExpression::DataExactCardinality {
                property,
                cardinality,
                filler,
            } => self.write_data_cardinality(
                property,
                self.keywords().exactly.as_str(),
                *cardinality,
                filler,
            ),
        }
    }

    /// Intersection: sorted operands, newline-aligned continuation lines,
    /// and the `that` connector when a named class is immediately followed
    /// by a restriction.
    fn write_intersection(&mut self, operands: &[ClassExpression]) -> RenderResult<()> {
        if operands.is_empty() {
            return Err(RenderError::EmptyOperands {
                operator: "intersection",
            });
        }
        let indent = self.buf.current_indent();
        let operands = self.sorted(operands)?;
        for (i, operand) in operands.iter().enumerate() {
            self.write_class_expr(operand)?;
            if i + 1 < operands.len() {
                self.buf.newline();
                self.buf.pad(indent);
                if operand.is_named_class() && operands[i + 1].is_restriction() {
                    self.buf.write("that ");
                } else {
                    self.buf.write(self.keywords().and.as_str());
                    self.buf.write(" ");
                }
            }
        }
        Ok(())
    }

    /// Union: sorted operands, each bracketed per the classifier.
    fn write_union(&mut self, operands: &[ClassExpression]) -> RenderResult<()> {
        if operands.is_empty() {
            return Err(RenderError::EmptyOperands { operator: "union" });
        }
        let indent = self.buf.current_indent();
        let operands = self.sorted(operands)?;
        for (i, operand) in operands.iter().enumerate() {
            self.write_bracketed_class(operand)?;
            if i + 1 < operands.len() {
                self.buf.newline();
                self.buf.pad(indent);
                self.buf.write(self.keywords().or.as_str());
                self.buf.write(" ");
            }
        }
        Ok(())
    }

    fn write_cardinality(
        &mut self,
        property: &ObjectPropertyExpression,
        keyword: &str,
        cardinality: u32,
        filler: &ClassExpression,
    ) -> RenderResult<()> {
        self.write_property(property)?;
        self.write_spaced(keyword);
        self.buf.write(&cardinality.to_string());
        self.buf.write(" ");
        self.write_bracketed_class(filler)
    }

    fn write_data_cardinality(
        &mut self,
        property: &Entity,
        keyword: &str,
        cardinality: u32,
        filler: &DataRange,
    ) -> RenderResult<()> {
        self.write_entity(property)?;
        self.write_spaced(keyword);
        self.buf.write(&cardinality.to_string());
        self.buf.write(" ");
        self.write_bracketed_data(filler)
    }

    /// Write ` keyword ` with surrounding spaces.
    fn write_spaced(&mut self, keyword: &str) {
        self.buf.write(" ");
        self.buf.write(keyword);
        self.buf.write(" ");
    }

    fn write_bracketed_class(&mut self, expr: &ClassExpression) -> RenderResult<()> {
        let brackets = class_expr_needs_brackets(expr);
        if brackets {
            self.buf.write("(");
        }
        self.write_class_expr(expr)?;
        if brackets {
            self.buf.write(")");
        }
        Ok(())
    }

    fn write_bracketed_data(&mut self, range: &DataRange) -> RenderResult<()> {
        let brackets = data_range_needs_brackets(range);
        if brackets {
            self.buf.write("(");
        }
        self.write_data_range(range)?;
        if brackets {
            self.buf.write(")");
        }
        Ok(())
    }

    // ── Data ranges ─────────────────────────────────────────────────────

    fn write_data_range(&mut self, range: &DataRange) -> RenderResult<()> {
        match range {
            DataRange::Datatype(entity) => self.write_entity(entity),

            DataRange::DataOneOf(literals) => {
                self.buf.write("{");
                for (i, literal) in literals.iter().enumerate() {
                    if i > 0 {
                        self.buf.write(" ");
                    }
                    self.write_literal(literal)?;
                }
                self.buf.write("}");
                Ok(())
            }

            DataRange::DataComplementOf(inner) => {
                self.buf.write(self.keywords().not.as_str());
                self.buf.write(" ");
                self.write_bracketed_data(inner)
            }

            DataRange::DatatypeRestriction { range, facets } => {
                self.write_data_range(range)?;
                self.buf.write("[");
                for (i, facet) in facets.iter().enumerate() {
                    if i > 0 {
                        self.buf.write(", ");
                    }
                    self.write_facet_restriction(facet)?;
                }
                self.buf.write("]");
                Ok(())
            }
        }
    }

    fn write_facet_restriction(&mut self, restriction: &FacetRestriction) -> RenderResult<()> {
        self.buf.write(self.config.facet_symbol(restriction.facet));
        self.buf.write(" ");
        self.write_literal(&restriction.value)
    }

    // ── Axioms ──────────────────────────────────────────────────────────

    fn write_axiom(&mut self, axiom: &Axiom) -> RenderResult<()> {
        match axiom {
            Axiom::SubClassOf { sub, sup } => {
                self.write_class_expr(sub)?;
                self.buf.write(" subClassOf ");
                self.write_class_expr(sup)
            }

            Axiom::EquivalentClasses(operands) => {
                self.write_commutative_axiom(operands, "equivalence", " equivalentTo ")
            }

            Axiom::DisjointClasses(operands) => {
                self.write_commutative_axiom(operands, "disjointness", " disjointWith ")
            }

            Axiom::DisjointUnion { class, operands } => {
                self.write_entity(class)?;
                self.buf.write(" disjointUnionOf [");
                let indent = self.buf.current_indent();
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        self.buf.newline();
                        self.buf.pad(indent);
                    }
                    self.write_class_expr(operand)?;
                }
                self.buf.write("]");
                Ok(())
            }

            Axiom::FunctionalObjectProperty(property) => {
                self.write_characteristic("Functional: ", property)
            }
            Axiom::InverseFunctionalObjectProperty(property) => {
                self.write_characteristic("InverseFunctional: ", property)
            }
            Axiom::SymmetricObjectProperty(property) => {
                self.write_characteristic("Symmetric: ", property)
            }
            Axiom::AntiSymmetricObjectProperty(property) => {
                self.write_characteristic("AntiSymmetric: ", property)
            }
            Axiom::TransitiveObjectProperty(property) => {
                self.write_characteristic("Transitive: ", property)
            }
            Axiom::ReflexiveObjectProperty(property) => {
                self.write_characteristic("Reflexive: ", property)
            }
            Axiom::IrreflexiveObjectProperty(property) => {
                self.write_characteristic("Irreflexive: ", property)
            }

            Axiom::FunctionalDataProperty(property) => {
                self.buf.write("Functional: ");
                self.write_entity(property)
            }

            Axiom::ObjectPropertyDomain { property, domain } => {
                self.write_class_expr(domain)?;
                self.buf.write(" domainOf ");
                self.write_property(property)
            }
            Axiom::ObjectPropertyRange { property, range } => {
                self.write_class_expr(range)?;
                self.buf.write(" rangeOf ");
                self.write_property(property)
            }
            Axiom::DataPropertyDomain { property, domain } => {
                self.write_class_expr(domain)?;
                self.buf.write(" domainOf ");
                self.write_entity(property)
            }
            Axiom::DataPropertyRange { property, range } => {
                self.write_data_range(range)?;
                self.buf.write(" rangeOf ");
                self.write_entity(property)
            }

            Axiom::ClassAssertion { individual, class } => {
                self.write_individual(individual)?;
                self.buf.write(" instanceOf ");
                self.write_class_expr(class)
            }

            Axiom::ObjectPropertyAssertion {
                subject,
                property,
                object,
            } => {
                self.write_individual(subject)?;
                self.buf.write(" ");
                self.write_property(property)?;
                self.buf.write(" ");
                self.write_individual(object)
            }

            Axiom::NegativeObjectPropertyAssertion {
                subject,
                property,
                object,
            } => {
                self.buf.write("not(");
                self.write_individual(subject)?;
                self.buf.write(" ");
                self.write_property(property)?;
                self.buf.write(" ");
                self.write_individual(object)?;
                self.buf.write(")");
                Ok(())
            }

            Axiom::DataPropertyAssertion {
                subject,
                property,
                value,
            } => {
                self.write_individual(subject)?;
                self.buf.write(" ");
                self.write_entity(property)?;
                self.buf.write(" ");
                self.write_literal(value)
            }

            Axiom::NegativeDataPropertyAssertion {
                subject,
                property,
                value,
            } => {
                self.buf.write("not(");
                self.write_individual(subject)?;
                self.buf.write(" ");
                self.write_entity(property)?;
                self.buf.write(" ");
                self.write_literal(value)?;
                self.buf.write(")");
                Ok(())
            }

            Axiom::SameIndividuals(individuals) => {
                self.write_individual_list("SameIndividuals: [", individuals)
            }
            Axiom::DifferentIndividuals(individuals) => {
                self.write_individual_list("DifferentIndividuals: [", individuals)
            }

            Axiom::InverseProperties { first, second } => {
                self.write_property(first)?;
                self.buf.write(" inverseOf ");
                self.write_property(second)
            }

            Axiom::SubObjectPropertyOf { sub, sup } => {
                self.write_property(sub)?;
                self.buf.write(" subPropertyOf ");
                self.write_property(sup)
            }

            Axiom::SubPropertyChainOf { chain, sup } => {
                for (i, link) in chain.iter().enumerate() {
                    if i > 0 {
                        self.buf.write(" o ");
                    }
                    self.write_property(link)?;
                }
                self.buf.write(CHAIN_IMPLIES);
                self.write_property(sup)
            }

            Axiom::ImportsDeclaration { iri } => {
                self.buf.write(iri.as_str());
                Ok(())
            }
        }
    }

    fn write_characteristic(
        &mut self,
        prefix: &str,
        property: &ObjectPropertyExpression,
    ) -> RenderResult<()> {
        self.buf.write(prefix);
        self.write_property(property)
    }

    fn write_commutative_axiom(
        &mut self,
        operands: &[ClassExpression],
        operator: &'static str,
        connective: &str,
    ) -> RenderResult<()> {
        if operands.is_empty() {
            return Err(RenderError::EmptyOperands { operator });
        }
        let operands = self.sorted(operands)?;
        for (i, operand) in operands.iter().enumerate() {
            if i > 0 {
                self.buf.write(connective);
            }
            self.write_class_expr(operand)?;
        }
        Ok(())
    }

    fn write_individual_list(
        &mut self,
        prefix: &str,
        individuals: &[Individual],
    ) -> RenderResult<()> {
        self.buf.write(prefix);
        for (i, individual) in individuals.iter().enumerate() {
            if i > 0 {
                self.buf.write(", ");
            }
            self.write_individual(individual)?;
        }
        self.buf.write("]");
        Ok(())
    }

    // ── Rules ───────────────────────────────────────────────────────────

    fn write_rule(&mut self, rule: &Rule) -> RenderResult<()> {
        for (i, atom) in rule.body.iter().enumerate() {
            if i > 0 {
                self.buf.write(CONJUNCTION);
            }
            self.write_atom(atom)?;
        }
        self.buf.write(IMPLIES);
        for (i, atom) in rule.head.iter().enumerate() {
            if i > 0 {
                self.buf.write(CONJUNCTION);
            }
            self.write_atom(atom)?;
        }
        Ok(())
    }

    fn write_atom(&mut self, atom: &RuleAtom) -> RenderResult<()> {
        match atom {
            RuleAtom::ClassAtom {
                predicate,
                argument,
            } => {
                // Anonymous (structurally complex) predicates get their own parens.
                let anonymous = !predicate.is_named_class();
                if anonymous {
                    self.buf.write("(");
                }
                self.write_class_expr(predicate)?;
                if anonymous {
                    self.buf.write(")");
                }
                self.write_unary_args(argument)
            }

            RuleAtom::DataRangeAtom {
                predicate,
                argument,
            } => {
                self.write_data_range(predicate)?;
                self.write_unary_args(argument)
            }

            RuleAtom::ObjectPropertyAtom {
                predicate,
                first,
                second,
            } => {
                self.write_property(predicate)?;
                self.write_binary_args(first, second)
            }

            RuleAtom::DataPropertyAtom {
                predicate,
                first,
                second,
            } => {
                self.write_entity(predicate)?;
                self.write_binary_args(first, second)
            }

            RuleAtom::BuiltInAtom { builtin, arguments } => {
                self.buf.write(builtin.fragment());
                self.buf.write("(");
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        self.buf.write(", ");
                    }
                    self.write_argument(argument)?;
                }
                self.buf.write(")");
                Ok(())
            }

            RuleAtom::SameAsAtom { first, second } => {
                self.buf.write("sameAs");
                self.write_binary_args(first, second)
            }

            RuleAtom::DifferentFromAtom { first, second } => {
                self.buf.write("differentFrom");
                self.write_binary_args(first, second)
            }
        }
    }

    fn write_unary_args(&mut self, argument: &AtomArgument) -> RenderResult<()> {
        self.buf.write("(");
        self.write_argument(argument)?;
        self.buf.write(")");
        Ok(())
    }

    fn write_binary_args(
        &mut self,
        first: &AtomArgument,
        second: &AtomArgument,
    ) -> RenderResult<()> {
        self.buf.write("(");
        self.write_argument(first)?;
        self.buf.write(", ");
        self.write_argument(second)?;
        self.buf.write(")");
        Ok(())
    }

    fn write_argument(&mut self, argument: &AtomArgument) -> RenderResult<()> {
        match argument {
            AtomArgument::Variable(iri) => {
                self.buf.write("?");
                self.buf.write(iri.fragment());
                Ok(())
            }
            AtomArgument::Individual(individual) => self.write_individual(individual),
            AtomArgument::Literal(literal) => self.write_literal(literal),
        }
    }

    // ── Canonical ordering ──────────────────────────────────────────────

    /// Sort commutative operands into a canonical order: named classes
    /// first, by resolved name; complex expressions after, by their own
    /// rendering into a scratch buffer. The sort is stable, so exact ties
    /// keep their structural order.
    fn sorted<'b>(
        &self,
        operands: &'b [ClassExpression],
    ) -> RenderResult<Vec<&'b ClassExpression>> {
        let mut keyed: Vec<(u8, String, &ClassExpression)> = Vec::with_capacity(operands.len());
        for operand in operands {
            keyed.push((self.sort_rank(operand), self.sort_key(operand)?, operand));
        }
        keyed.sort_by(|a, b| (a.0, a.1.as_str()).cmp(&(b.0, b.1.as_str())));
        Ok(keyed.into_iter().map(|(_, _, operand)| operand).collect())
    }

    fn sort_rank(&self, operand: &ClassExpression) -> u8 {
        if operand.is_named_class() { 0 } else { 1 }
    }

    fn sort_key(&self, operand: &ClassExpression) -> RenderResult<String> {
        match operand {
            ClassExpression::Class(entity) => self.ctx.resolver.resolve(entity),
            _ => {
                let mut scratch = SyntaxWriter::new(self.config, self.ctx);
                scratch.write_class_expr(operand)?;
                Ok(scratch.into_text())
            }
        }
    }
}
