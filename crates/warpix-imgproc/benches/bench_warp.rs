use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use warpix_image::Image;
use warpix_imgproc::{
    interpolation::InterpolationMode,
    warp::{warp_centered, TransformParams},
};

fn bench_warp_centered(c: &mut Criterion) {
    let mut group = c.benchmark_group("WarpCentered");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input image
        let image_size = [*width, *height].into();
        let image = Image::<u8, 3>::new(image_size, vec![128u8; width * height * 3]).unwrap();

        // output image
        let output = Image::<u8, 3>::from_size_pixel(image_size, [0, 0, 0]).unwrap();

        let params = TransformParams {
            x_scale: 1.2,
            theta: 45.0,
            ..Default::default()
        };

        group.bench_with_input(
            BenchmarkId::new("bilinear_par_rows", &parameter_string),
            &(&image, &output, params),
            |b, i| {
                let (src, mut dst, params) = (i.0.clone(), i.1.clone(), i.2);
                b.iter(|| {
                    warp_centered(
                        black_box(&src),
                        black_box(&mut dst),
                        black_box(&params),
                        black_box(InterpolationMode::Bilinear),
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_warp_centered);
criterion_main!(benches);
