use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use facedepth_calibration::intrinsics::CameraIntrinsics;
use facedepth_pointcloud::frame::DepthFrame;
use facedepth_pointcloud::ops::compute_point_cloud;

fn bench_compute_point_cloud(c: &mut Criterion) {
    let mut group = c.benchmark_group("PointCloud");

    for (width, height) in [(320usize, 240usize), (640, 480)] {
        let intrinsics =
            CameraIntrinsics::new(525.0, 525.0, width as f32 / 2.0, height as f32 / 2.0);
        let frame = DepthFrame::new(width, height, vec![1.5f32; width * height], intrinsics)
            .expect("valid frame");

        group.bench_with_input(
            BenchmarkId::new("compute", format!("{width}x{height}")),
            &frame,
            |b, frame| b.iter(|| black_box(compute_point_cloud(black_box(frame)))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_compute_point_cloud);
criterion_main!(benches);
