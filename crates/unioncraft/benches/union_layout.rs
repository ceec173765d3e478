use criterion::{Criterion, criterion_group, criterion_main};
use unioncraft::{
    field::{Field, MetaKind, PrimitiveType},
    union::UnionLayout,
};

fn gen_struct(variant_count: usize) -> Vec<Field> {
    let mut fields = Vec::with_capacity(variant_count);

    // Deterministic mix of variants so bits, bytes and pointers all get work.
    for i in 0..variant_count {
        let discriminant = i as u16;
        let field = match i % 4 {
            0 => Field::primitive(PrimitiveType::Bool, i * 3),
            1 => Field::primitive(PrimitiveType::UInt32, i),
            2 => Field::meta(MetaKind::List, i / 2),
            _ => Field::group(vec![
                Field::primitive(PrimitiveType::Bool, i * 5),
                Field::meta(MetaKind::Enum, i),
                Field::meta(MetaKind::Struct, i / 3),
            ]),
        };
        fields.push(field.in_union(discriminant));
    }

    fields
}

fn bench_union_layout(c: &mut Criterion) {
    for &variant_count in &[1usize, 10, 50, 100] {
        let fields = gen_struct(variant_count);

        c.bench_function(&format!("resolve_{}_variants", variant_count), |b| {
            b.iter(|| {
                let _ = UnionLayout::resolve(&fields);
            })
        });
    }
}

criterion_group!(benches, bench_union_layout);
criterion_main!(benches);
