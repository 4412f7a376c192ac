//! Property tests for the calculator laws: exact geometry, ceiling rounding, idempotence,
//! attendance monotonicity, and rejection of unusable input without panicking.

use std::f64::consts::PI;

use aimpur_calculator::attendance::{attendance_projection, attendance_status, calculate_attendance};
use aimpur_calculator::paint::{PaintParams, calculate_paint};
use aimpur_calculator::room_size::{calculate_circular_room, calculate_rectangular_room};
use aimpur_calculator::tile::{TileParams, calculate_tiles};
use aimpur_types::{AttendanceStatus, MeasurementUnit, PaintFinish};
use proptest::prelude::*;

fn dimension() -> impl Strategy<Value = f64> {
    0.5f64..200.0
}

fn unusable() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        -1000.0f64..=-0.001,
    ]
}

fn finish() -> impl Strategy<Value = PaintFinish> {
    prop::sample::select(PaintFinish::ALL.to_vec())
}

proptest! {
    #[test]
    fn rectangular_room_geometry_is_exact(l in dimension(), w in dimension(), h in dimension()) {
        let room = calculate_rectangular_room(l, w, h, MeasurementUnit::Feet).unwrap();
        prop_assert_eq!(room.floor_area, l * w);
        prop_assert_eq!(room.wall_area, 2.0 * (l + w) * h);
        prop_assert!((room.wall_area - 2.0 * (l * h + w * h)).abs() <= 1e-9 * room.wall_area);
        prop_assert!(room.paint_gallons as f64 >= room.paintable_area / 350.0);
    }

    #[test]
    fn circular_room_geometry(d in dimension(), h in dimension()) {
        let room = calculate_circular_room(d, h, MeasurementUnit::Meters).unwrap();
        let expected_area = PI * (d / 2.0).powi(2);
        prop_assert!((room.floor_area - expected_area).abs() <= 1e-9 * expected_area);
        prop_assert!((room.perimeter - PI * d).abs() <= 1e-9 * PI * d);
    }

    #[test]
    fn paint_cans_round_up(
        l in dimension(), w in dimension(), h in 1.0f64..30.0,
        doors in 0u32..6, windows in 0u32..10, coats in 1u32..4,
        finish in finish(), ceiling in any::<bool>(),
    ) {
        let params = PaintParams {
            doors,
            windows,
            coats,
            finish,
            paint_ceiling: ceiling,
            ..PaintParams::new(l, w, h)
        };
        let result = calculate_paint(&params).unwrap();
        let cans = result.cans_needed as f64;
        prop_assert!(cans >= result.total_paint_needed);
        prop_assert!(cans - 1.0 < result.total_paint_needed || result.cans_needed == 0);
        prop_assert!(result.total_area >= 0.0);
    }

    #[test]
    fn calculators_are_idempotent(
        l in dimension(), w in dimension(), h in dimension(), price in 1.0f64..100.0,
    ) {
        let paint = PaintParams {
            needs_primer: true,
            price_per_gallon: Some(price),
            ..PaintParams::new(l, w, h)
        };
        prop_assert_eq!(calculate_paint(&paint), calculate_paint(&paint));

        let tiles =
            TileParams { price_per_tile: Some(price), ..TileParams::for_room(l, w, 12.0, 24.0) };
        prop_assert_eq!(calculate_tiles(&tiles), calculate_tiles(&tiles));

        prop_assert_eq!(
            calculate_rectangular_room(l, w, h, MeasurementUnit::Feet),
            calculate_rectangular_room(l, w, h, MeasurementUnit::Feet)
        );
    }

    #[test]
    fn attendance_is_monotonic_in_attended(total in 1u32..500, a in 0u32..500, b in 0u32..500) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assume!(high <= total);
        let low = calculate_attendance(f64::from(total), f64::from(low), None).unwrap();
        let high = calculate_attendance(f64::from(total), f64::from(high), None).unwrap();
        prop_assert!(low.current_percentage <= high.current_percentage);
        prop_assert!(low.status <= high.status);
    }

    #[test]
    fn attendance_status_matches_its_band(pct in 0.0f64..=100.0) {
        let status = attendance_status(pct);
        prop_assert!(status <= attendance_status((pct + 1.0).min(100.0)));
        prop_assert_eq!(status == AttendanceStatus::Excellent, pct >= 90.0);
        prop_assert_eq!(status == AttendanceStatus::Failing, pct < 60.0);
    }

    #[test]
    fn projection_climbs_toward_full_attendance(total in 1u32..400, attended in 0u32..400) {
        prop_assume!(attended <= total);
        let (total, attended) = (f64::from(total), f64::from(attended));
        let points = attendance_projection(total, attended, 20).unwrap();
        prop_assert_eq!(points.len(), 21);
        prop_assert!(points.windows(2).all(|pair| pair[0].percentage <= pair[1].percentage));
        prop_assert!(points.iter().all(|point| point.percentage <= 100.0));
        prop_assert_eq!(points[20].total, total + 20.0);
    }

    #[test]
    fn attendance_plan_reaches_target(
        total in 1u32..400, attended in 0u32..400, required in 1u32..100,
    ) {
        prop_assume!(attended <= total);
        let (total, attended, required) =
            (f64::from(total), f64::from(attended), f64::from(required));
        let result = calculate_attendance(total, attended, Some(required)).unwrap();
        let needed = result.classes_needed.unwrap() as f64;
        prop_assert!((attended + needed) / (total + needed) * 100.0 >= required - 1e-9);
    }

    #[test]
    fn tiles_with_waste_never_below_tiles_needed(area in 1.0f64..5000.0, waste in 0.0f64..50.0) {
        let params =
            TileParams { waste_percentage: waste, ..TileParams::for_area(area, 12.0, 12.0) };
        let result = calculate_tiles(&params).unwrap();
        prop_assert!(result.tiles_with_waste >= result.tiles_needed);
        let covered = result.tiles_needed as f64 * result.tile_area;
        prop_assert!(covered >= result.room_area * (1.0 - 1e-12));
    }

    #[test]
    fn any_unusable_dimension_yields_no_result(bad in unusable(), slot in 0usize..3) {
        let mut dims = [12.0, 10.0, 8.0];
        dims[slot] = bad;
        prop_assert!(calculate_paint(&PaintParams::new(dims[0], dims[1], dims[2])).is_none());
        let room = calculate_rectangular_room(dims[0], dims[1], dims[2], MeasurementUnit::Feet);
        prop_assert!(room.is_none());
        prop_assert!(calculate_tiles(&TileParams::for_area(300.0, dims[slot], 12.0)).is_none());
        prop_assert!(calculate_attendance(bad, 0.0, None).is_none());
    }
}
