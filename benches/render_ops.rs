//! Benchmarks for the rendering walk.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use manchester_owl::model::{Axiom, ClassExpression, ObjectPropertyExpression, OwlObject};
use manchester_owl::render::{IriFragmentResolver, ManchesterRenderer, RenderContext};

fn class(name: &str) -> ClassExpression {
    ClassExpression::class(format!("http://example.org/onto#{name}"))
}

fn prop(name: &str) -> ObjectPropertyExpression {
    ObjectPropertyExpression::named(format!("http://example.org/onto#{name}"))
}

/// A restriction chain nested `depth` levels deep.
fn deep_restriction(depth: usize) -> ClassExpression {
    let mut expr = class("Leaf");
    for i in 0..depth {
        expr = ClassExpression::some(prop(&format!("p{i}")), expr);
    }
    expr
}

/// A wide intersection mixing named classes and restrictions, in
/// scrambled order so the canonical sort has real work to do.
fn wide_intersection(width: usize) -> ClassExpression {
    let mut operands = Vec::with_capacity(width * 2);
    for i in (0..width).rev() {
        operands.push(class(&format!("Class{i}")));
        operands.push(ClassExpression::some(
            prop(&format!("p{i}")),
            class(&format!("Filler{i}")),
        ));
    }
    ClassExpression::intersection(operands)
}

fn bench_deep_nesting(c: &mut Criterion) {
    let renderer = ManchesterRenderer::new();
    let object = OwlObject::Class(deep_restriction(64));

    c.bench_function("render_nested_64", |bench| {
        let ctx = RenderContext::with_resolver(&IriFragmentResolver);
        bench.iter(|| black_box(renderer.render_to_string(black_box(&object), &ctx)))
    });
}

fn bench_wide_intersection(c: &mut Criterion) {
    let renderer = ManchesterRenderer::new();
    let object = OwlObject::Class(wide_intersection(32));

    c.bench_function("render_intersection_64ops", |bench| {
        let ctx = RenderContext::with_resolver(&IriFragmentResolver);
        bench.iter(|| black_box(renderer.render_to_string(black_box(&object), &ctx)))
    });
}

fn bench_subclass_axiom(c: &mut Criterion) {
    let renderer = ManchesterRenderer::new();
    let object = OwlObject::Axiom(Axiom::SubClassOf {
        sub: class("Pizza"),
        sup: wide_intersection(8),
    });

    c.bench_function("render_subclass_axiom", |bench| {
        let ctx = RenderContext::with_resolver(&IriFragmentResolver);
        bench.iter(|| black_box(renderer.render_to_string(black_box(&object), &ctx)))
    });
}

criterion_group!(
    benches,
    bench_deep_nesting,
    bench_wide_intersection,
    bench_subclass_axiom
);
criterion_main!(benches);
