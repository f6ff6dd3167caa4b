use quakeview::api::{FixedViewport, RangeSlider, SliderConfig};
use quakeview::core::DomainScale;
use quakeview::interaction::DragTarget;
use proptest::prelude::*;

fn build_slider() -> RangeSlider {
    RangeSlider::new(1970.0, 2014.0, FixedViewport(1000.0), SliderConfig::default())
        .expect("slider init")
}

proptest! {
    #[test]
    fn domain_scale_round_trip_property(
        domain_min in -5_000i32..5_000,
        span in 1i32..500,
        offset_factor in 0.0f64..=1.0,
        container_width in 1.0f64..10_000.0
    ) {
        let domain_max = domain_min + span;
        let value = domain_min + (offset_factor * f64::from(span)).floor() as i32;
        let scale = DomainScale::new(f64::from(domain_min), f64::from(domain_max))
            .expect("valid scale");

        let px = scale.to_pixels(f64::from(value), container_width).expect("to pixel");
        let recovered = scale.to_domain(px, container_width).expect("from pixel");

        prop_assert_eq!(recovered, f64::from(value));
    }

    #[test]
    fn clamped_range_is_a_fixed_point(
        begin in 1900.0f64..2100.0,
        end in 1900.0f64..2100.0
    ) {
        let mut slider = build_slider();
        let first = slider.set_range(begin, end);
        prop_assert!(first.begin <= first.end);
        prop_assert!(first.begin >= 1970.0 && first.end <= 2014.0);

        let second = slider.set_range(first.begin, first.end);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn drags_keep_selection_inside_track(
        target_index in 0usize..3,
        start_begin in 1970i32..2010,
        start_width in 0i32..5,
        moves in proptest::collection::vec(-400.0f64..400.0, 1..20)
    ) {
        let mut slider = build_slider();
        slider.set_range(f64::from(start_begin), f64::from(start_begin + start_width));
        let target = [DragTarget::LeftHandle, DragTarget::RightHandle, DragTarget::Body][target_index];

        let container = slider.geometry().container_width_px;
        let min_width = slider.config().min_width_px;
        let start_width_px = slider.selection_geometry().width_px;
        let mut x = 0.0;
        slider.pointer_down(target, x).expect("pointer down");
        for dx in moves {
            x += dx;
            slider.pointer_move(x).expect("pointer move");
            let selection = slider.selection_geometry();
            prop_assert!(selection.left_px >= -1e-9);
            prop_assert!(selection.right_px() <= container + 1e-9);
            if target == DragTarget::Body {
                prop_assert!((selection.width_px - start_width_px).abs() <= 1e-9);
            } else {
                prop_assert!(selection.width_px >= min_width - 1e-9);
            }

            let range = slider.range();
            prop_assert!(range.begin <= range.end);
            prop_assert!(range.begin >= 1970.0 && range.end <= 2014.0);
        }
        slider.pointer_up().expect("pointer up");

        let selection = slider.selection_geometry();
        prop_assert!(selection.left_px >= -1e-9);
        prop_assert!(selection.right_px() <= container + 1e-9);
        let range = slider.range();
        prop_assert_eq!(range.begin.fract(), 0.0);
        prop_assert_eq!(range.end.fract(), 0.0);
    }
}
