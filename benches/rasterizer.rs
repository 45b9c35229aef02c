use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rastrum::bench::{
    BarycentricMethod, BoundingBoxRasterizer, FlatShader, FrameBuffer, Triangle, DEPTH_CLEAR,
};
use rastrum::colors::{Color, BLACK, RED};
use rastrum::math::{Vec2f, Vec3f};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

const METHODS: [(&str, BarycentricMethod); 2] = [
    ("signed_area", BarycentricMethod::SignedArea),
    ("plane_solve", BarycentricMethod::PlaneSolve),
];

fn create_buffers() -> (Vec<Color>, Vec<f32>) {
    let size = (BUFFER_WIDTH * BUFFER_HEIGHT) as usize;
    (vec![BLACK; size], vec![DEPTH_CLEAR; size])
}

fn triangle(points: [(f32, f32); 3]) -> Triangle {
    Triangle::new(
        points.map(|(x, y)| Vec3f::new(x, y, 0.0)),
        [Vec2f::ZERO; 3],
    )
}

fn small_triangle() -> Triangle {
    triangle([(100.0, 100.0), (120.0, 100.0), (110.0, 120.0)])
}

fn medium_triangle() -> Triangle {
    triangle([(100.0, 100.0), (300.0, 100.0), (200.0, 300.0)])
}

fn large_triangle() -> Triangle {
    triangle([(50.0, 50.0), (750.0, 100.0), (400.0, 550.0)])
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");
    let shader = FlatShader::new(RED);

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        for (method_name, method) in METHODS {
            let rasterizer = BoundingBoxRasterizer::new(method);
            group.bench_with_input(BenchmarkId::new(method_name, name), &triangle, |b, tri| {
                let (mut color, mut depth) = create_buffers();
                b.iter(|| {
                    // Reset depth so every iteration does the full write.
                    depth.fill(DEPTH_CLEAR);
                    let mut fb =
                        FrameBuffer::new(&mut color, &mut depth, BUFFER_WIDTH, BUFFER_HEIGHT);
                    rasterizer.fill_triangle(black_box(tri), &mut fb, &shader)
                });
            });
        }
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");
    let shader = FlatShader::new(RED);

    // Generate a grid of small triangles
    let triangles: Vec<Triangle> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col as f32 * 40.0;
                let y = row as f32 * 30.0;
                triangle([(x, y), (x + 35.0, y), (x + 17.5, y + 25.0)])
            })
        })
        .collect();

    for (method_name, method) in METHODS {
        let rasterizer = BoundingBoxRasterizer::new(method);
        group.bench_function(format!("{method_name}_400_triangles"), |b| {
            let (mut color, mut depth) = create_buffers();
            b.iter(|| {
                depth.fill(DEPTH_CLEAR);
                let mut fb = FrameBuffer::new(&mut color, &mut depth, BUFFER_WIDTH, BUFFER_HEIGHT);
                for tri in &triangles {
                    rasterizer.fill_triangle(black_box(tri), &mut fb, &shader);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle, benchmark_many_triangles);
criterion_main!(benches);
