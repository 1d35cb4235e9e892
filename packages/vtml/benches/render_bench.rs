use criterion::{black_box, criterion_group, criterion_main, Criterion};
use workbench_vtml::render;

fn render_short_description(c: &mut Criterion) {
    let source = "Welcome to <strong>VTML</strong>!<br>Use <i>italics</i>, \
        <font color=\"#ffcc00\" weight=\"bold\">color</font>, \
        and <a href=\"handbook://survival\">links</a>.";

    c.bench_function("render_short_description", |b| {
        b.iter(|| render(black_box(source)))
    });
}

fn render_long_page(c: &mut Criterion) {
    let paragraph = "<font size=18 weight=bold>Pottery</font><br>\
        Clay can be shaped into <a href=\"handbook://item-bowl\">bowls</a> and \
        <a href=\"handbook://block-storagevessel\">vessels</a>. Press <hk>toolmodeselect</hk> \
        to pick a shape.<br><itemstack type=\"block\" code=\"game:clay-blue\"></itemstack>\
        <clear>\n<i>Tip:</i> <font opacity=0.6 color=#ccc>fire them in a pit kiln.</font>\n";
    let source = paragraph.repeat(200);

    c.bench_function("render_long_page", |b| {
        b.iter(|| render(black_box(&source)))
    });
}

fn render_malformed(c: &mut Criterion) {
    let source = format!("{}<unclosed", "<i>a</b><x>b</i></font>".repeat(500));

    c.bench_function("render_malformed", |b| {
        b.iter(|| render(black_box(&source)))
    });
}

criterion_group!(benches, render_short_description, render_long_page, render_malformed);
criterion_main!(benches);
