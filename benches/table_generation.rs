/// Table generation benchmarks
///
/// Measures spec parsing and C rendering for spec files of realistic size
/// (the full GL + Chromium spec has roughly 700 functions).
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glproc_gen::{BindingTableGenerator, FunctionOrder, FunctionSpec};

const CATEGORIES: &[&str] = &[
    "1.0",
    "1.1",
    "1.3",
    "GL_ARB_multitexture",
    "GL_EXT_framebuffer_object",
    "GL_chromium",
    "Chromium",
];

/// Synthetic spec text with `count` functions
fn synthetic_spec(count: usize) -> String {
    let mut text = String::new();
    for i in 0..count {
        let category = CATEGORIES[i % CATEGORIES.len()];
        text.push_str(&format!(
            "name\t\tFunction{i}\nreturn\t\tvoid\nparam\t\ttarget\t\tGLenum\nparam\t\tvalue\t\tconst GLfloat *\ncategory\t{category}\nchromium\tpack\n\n"
        ));
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("spec_parse");
    for count in [100, 700, 2000] {
        let text = synthetic_spec(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &text, |b, text| {
            b.iter(|| FunctionSpec::parse(black_box(text)).unwrap());
        });
    }
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let generator = BindingTableGenerator::default();
    let mut group = c.benchmark_group("generate");
    for count in [100, 700, 2000] {
        let spec = FunctionSpec::parse(&synthetic_spec(count)).unwrap();
        let descriptors = spec.list_all_function_descriptors(FunctionOrder::Declared);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &descriptors,
            |b, descriptors| {
                b.iter(|| generator.generate(black_box(descriptors)).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_generate);
criterion_main!(benches);
