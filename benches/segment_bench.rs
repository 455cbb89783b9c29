use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bulletins::config::Markers;
use bulletins::filtering::NoiseFilter;
use bulletins::segment::Segmenter;

/// Document holding an evening then a morning bulletin of `nb_paragraphs` paragraphs each.
fn document(nb_paragraphs: usize) -> String {
    let paragraphs: Vec<String> = (0..nb_paragraphs)
        .map(|i| {
            format!(
                "{}\nראש הממשלה נפגש הבוקר עם שר האוצר.\nבצפון נמשכים הגשמים, מזג האוויר: נאה.\n(-- לבדוק --)",
                i
            )
        })
        .collect();
    let body = paragraphs.join("\nאות מעבר\n");
    format!(
        "גלי צה\"ל 2100\nמהדורת הערב\n{body}\nאלה החדשות\nגלי צה\"ל 0800\nמהדורת הבוקר\n{body}\nאלה החדשות\nאות סיום\n",
        body = body
    )
}

pub fn segment(c: &mut Criterion) {
    let markers = Markers::default();
    let segmenter = Segmenter::new("0800", &markers);

    let mut group = c.benchmark_group("segment");
    for nb_paragraphs in [10, 100, 1000] {
        let text = document(nb_paragraphs);
        group.bench_with_input(
            BenchmarkId::from_parameter(nb_paragraphs),
            &text,
            |b, text| b.iter(|| segmenter.segment(black_box(text))),
        );
    }
    group.finish();
}

pub fn clean(c: &mut Criterion) {
    let filter = NoiseFilter::default();
    let paragraph = "ראש הממשלה נפגש הבוקר עם שר האוצר.\nעדכוני תנועה: עומסים בכביש החוף\n<<< קטע קול >>>";
    c.bench_function("noise_clean", |b| {
        b.iter(|| filter.clean(black_box(paragraph)))
    });
}

criterion_group!(benches, segment, clean);
criterion_main!(benches);
