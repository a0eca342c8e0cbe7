use addressinput_util::{is_explicit_latin_script, trim_to_null, Language};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_script_detection(c: &mut Criterion) {
    let codes = ["zh-Latn", "en", "zh-TW", "sr_Latn_RS", "ja-Jpan-JP"];

    c.bench_function("is_explicit_latin_script", |b| {
        b.iter(|| {
            for code in &codes {
                black_box(is_explicit_latin_script(black_box(code)));
            }
        })
    });

    c.bench_function("language_new", |b| {
        b.iter(|| {
            for code in &codes {
                black_box(Language::new(black_box(code)));
            }
        })
    });
}

fn bench_trim_to_null(c: &mut Criterion) {
    let inputs = ["", "   ", "  hello  ", "1600 Amphitheatre Parkway", "\t\n"];

    c.bench_function("trim_to_null", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(trim_to_null(black_box(Some(*input))));
            }
        })
    });
}

criterion_group!(benches, bench_script_detection, bench_trim_to_null);
criterion_main!(benches);
