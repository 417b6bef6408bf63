use proptest::prelude::*;
use ticker_chart::core::{SampleWindow, shift_by, visible_count_for};

#[test]
fn drag_left_over_wide_chart_reveals_later_samples() {
    // 1120 px / 25 samples = 44.8 px per sample; -240 px is five whole samples.
    let new_start = shift_by(0, -240.0, 1120.0, 25, 100);
    assert_eq!(new_start, 5);
}

#[test]
fn drag_right_reveals_earlier_samples() {
    assert_eq!(shift_by(40, 90.0, 1120.0, 25, 100), 38);
    assert_eq!(shift_by(1, 500.0, 1120.0, 25, 100), 0);
}

#[test]
fn negative_fractional_shift_rounds_toward_zero() {
    // -60 px is -1.34 samples: one sample forward, not two.
    assert_eq!(shift_by(10, -60.0, 1120.0, 25, 100), 11);
    // +60 px mirrors it.
    assert_eq!(shift_by(10, 60.0, 1120.0, 25, 100), 9);
}

#[test]
fn sub_sample_drags_do_not_move_the_window() {
    assert_eq!(shift_by(10, 44.0, 1120.0, 25, 100), 10);
    assert_eq!(shift_by(10, -44.0, 1120.0, 25, 100), 10);
}

#[test]
fn huge_deltas_clamp_to_data_bounds() {
    assert_eq!(shift_by(10, -1.0e9, 1120.0, 25, 100), 75);
    assert_eq!(shift_by(10, 1.0e9, 1120.0, 25, 100), 0);
}

#[test]
fn window_tracks_quarter_of_dataset() {
    let window = SampleWindow::for_total(100);
    assert_eq!(window.start(), 0);
    assert_eq!(window.count(), 25);
    assert_eq!(window.max_start(), 75);
    assert!(!window.is_flush_with_end());

    let mut window = window;
    window.set_start(500);
    assert_eq!(window.start(), 75);
    assert!(window.is_flush_with_end());
    window.reset();
    assert_eq!(window.start(), 0);
}

#[test]
fn tiny_datasets_keep_one_visible_sample() {
    for total in 1..4 {
        let window = SampleWindow::for_total(total);
        assert_eq!(window.count(), 1);
        assert_eq!(window.max_start(), total - 1);
    }

    let empty = SampleWindow::for_total(0);
    assert_eq!(empty.count(), 0);
    assert!(!empty.is_flush_with_end());
    assert!(empty.slice(&[]).is_empty());
}

proptest! {
    #[test]
    fn start_stays_in_bounds_for_any_drag_sequence(
        total in 0usize..600,
        deltas in prop::collection::vec(-50_000.0f64..50_000.0, 1..20),
        width in 1.0f64..4_000.0
    ) {
        let count = visible_count_for(total);
        let mut start = 0;
        for delta in deltas {
            start = shift_by(start, delta, width, count, total);
            prop_assert!(start <= total.saturating_sub(count));
        }
    }

    #[test]
    fn visible_count_is_floor_quarter_and_positive(total in 1usize..10_000) {
        let count = visible_count_for(total);
        prop_assert!(count >= 1);
        if total >= 4 {
            prop_assert_eq!(count, total / 4);
        }
    }
}
