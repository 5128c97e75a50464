use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gradient_mandelbrot::core::actions::render_frame::{FrameRenderer, RenderStrategy};
use gradient_mandelbrot::core::data::grid_size::GridSize;
use gradient_mandelbrot::core::data::viewport::Viewport;
use gradient_mandelbrot::core::palette::gradient_palette::GradientPalette;

fn bench_render_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    let palette = GradientPalette::grayscale();
    let grid = GridSize::DEFAULT_CANVAS;

    for (name, strategy) in [
        ("serial", RenderStrategy::Serial),
        ("parallel", RenderStrategy::Parallel),
    ] {
        let renderer = FrameRenderer::new(strategy);

        group.bench_function(format!("{}_default_view_500x400", name), |b| {
            b.iter(|| {
                renderer
                    .render(black_box(Viewport::default()), grid, &palette)
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_strategies);
criterion_main!(benches);
