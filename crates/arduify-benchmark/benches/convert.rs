use std::hint::black_box;

use arduify_db::{File, convert_file, parse_file};
use codspeed_criterion_compat::{Criterion, Throughput, criterion_group, criterion_main};

fn sketch(methods: usize) -> String {
    let mut text = String::from("using System;\n\nnamespace Sketches\n{\n    class Generated\n    {\n");
    for index in 0..methods {
        text.push_str(&format!(
            "        // method {index}\n        void step{index}(int[] values, int pin)\n        {{\n            for (int i = 0; i < 8; i++)\n            {{\n                if (values[i] > {index}) {{ digitalWrite(pin, HIGH); }} else {{ Serial.println(\"low\", i); }}\n            }}\n        }}\n\n"
        ));
    }
    text.push_str("    }\n}\n");
    text
}

fn benchmark_convert(c: &mut Criterion) {
    let text = sketch(64);
    let (tree, _) = arduify_parse::parse(&text);

    let mut group = c.benchmark_group("convert");
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("emit", |b| {
        b.iter(|| black_box(arduify_emit::convert(&tree)));
    });

    group.bench_function("cold_database", |b| {
        b.iter(|| {
            let db = salsa::DatabaseImpl::new();
            let file = File::new(&db, "generated.cs".into(), text.clone());
            black_box(convert_file(&db, file).clone());
        });
    });

    let db = salsa::DatabaseImpl::new();
    let file = File::new(&db, "generated.cs".into(), text.clone());
    _ = parse_file(&db, file);
    group.bench_function("warm_database", |b| {
        b.iter(|| black_box(convert_file(&db, file)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_convert);
criterion_main!(benches);
