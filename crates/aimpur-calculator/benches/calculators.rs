use std::collections::HashMap;

use aimpur_calculator::attendance::{
    PROJECTION_CLASSES, attendance_projection, calculate_attendance,
};
use aimpur_calculator::paint::{PaintParams, calculate_paint};
use aimpur_calculator::room_size::{RoomDimensions, calculate_room};
use aimpur_calculator::tile::{TileParams, calculate_tiles};
use aimpur_calculator::{Calculator, FactValue};
use aimpur_types::MeasurementUnit;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_direct_calls(c: &mut Criterion) {
    let paint = PaintParams {
        needs_primer: true,
        price_per_gallon: Some(35.0),
        ..PaintParams::new(12.0, 10.0, 8.0)
    };
    let tiles = TileParams {
        tiles_per_box: Some(10.0),
        price_per_box: Some(25.0),
        ..TileParams::for_area(300.0, 12.0, 12.0)
    };
    let room = RoomDimensions::LShape { length1: 20.0, width1: 10.0, length2: 12.0, width2: 8.0 };

    c.bench_function("paint_direct", |b| b.iter(|| calculate_paint(black_box(&paint))));
    c.bench_function("tile_direct", |b| b.iter(|| calculate_tiles(black_box(&tiles))));
    c.bench_function("room_direct", |b| {
        b.iter(|| calculate_room(black_box(&room), black_box(8.0), MeasurementUnit::Feet))
    });
    c.bench_function("attendance_direct", |b| {
        b.iter(|| calculate_attendance(black_box(50.0), black_box(45.0), Some(75.0)))
    });
    c.bench_function("attendance_projection", |b| {
        b.iter(|| attendance_projection(black_box(50.0), black_box(45.0), PROJECTION_CLASSES))
    });
}

fn bench_registry_dispatch(c: &mut Criterion) {
    let calculator = Calculator::new();
    let mut args = HashMap::new();
    args.insert("length".to_string(), FactValue::from("12"));
    args.insert("width".to_string(), FactValue::from("10"));
    args.insert("height".to_string(), FactValue::from("8"));
    args.insert("finish".to_string(), FactValue::from("satin"));

    c.bench_function("paint_via_registry", |b| {
        b.iter(|| calculator.calculate_owned(black_box("paint"), black_box(&args)))
    });
}

criterion_group!(benches, bench_direct_calls, bench_registry_dispatch);
criterion_main!(benches);
