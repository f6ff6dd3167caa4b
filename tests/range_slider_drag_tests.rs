use std::cell::RefCell;
use std::rc::Rc;

use quakeview::api::{FixedViewport, RangeSlider, SliderConfig};
use quakeview::core::SelectionRange;
use quakeview::interaction::{DragTarget, SliderMode};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Event {
    Change(SelectionRange),
    DragEnd(SelectionRange),
}

// 440 px track over 1970..=2014: 10 px per year.
fn slider_with_range(begin: f64, end: f64) -> (RangeSlider, Rc<RefCell<Vec<Event>>>) {
    let mut slider =
        RangeSlider::new(1970.0, 2014.0, FixedViewport(600.0), SliderConfig::default())
            .expect("slider init");
    slider.set_range(begin, end);

    let log = Rc::new(RefCell::new(Vec::new()));
    let changes = log.clone();
    slider.on_change(move |range| changes.borrow_mut().push(Event::Change(range)));
    let drag_ends = log.clone();
    slider.on_drag_end(move |range| drag_ends.borrow_mut().push(Event::DragEnd(range)));
    (slider, log)
}

fn assert_geometry(slider: &RangeSlider, left_px: f64, width_px: f64) {
    let selection = slider.selection_geometry();
    assert!(
        (selection.left_px - left_px).abs() <= 1e-9,
        "left {} != {left_px}",
        selection.left_px
    );
    assert!(
        (selection.width_px - width_px).abs() <= 1e-9,
        "width {} != {width_px}",
        selection.width_px
    );
}

#[test]
fn right_handle_drag_extends_end_and_snaps_on_release() {
    let (mut slider, log) = slider_with_range(1999.0, 2002.0);

    slider.pointer_down(DragTarget::RightHandle, 320.0).expect("down");
    assert_eq!(slider.mode(), SliderMode::DraggingRight);
    slider.pointer_move(344.0).expect("move");
    assert_geometry(&slider, 290.0, 54.0);
    assert_eq!(slider.range(), SelectionRange::new(1999.0, 2004.0));

    slider.pointer_up().expect("up");
    assert_eq!(slider.mode(), SliderMode::Idle);
    assert_geometry(&slider, 290.0, 50.0);
    assert_eq!(
        *log.borrow(),
        vec![
            Event::Change(SelectionRange::new(1999.0, 2004.0)),
            Event::DragEnd(SelectionRange::new(1999.0, 2004.0)),
        ]
    );
}

#[test]
fn right_handle_is_bounded_by_track_and_min_width() {
    let (mut slider, _log) = slider_with_range(1999.0, 2002.0);

    slider.pointer_down(DragTarget::RightHandle, 320.0).expect("down");
    slider.pointer_move(820.0).expect("move");
    assert_geometry(&slider, 290.0, 150.0);
    assert_eq!(slider.range(), SelectionRange::new(1999.0, 2014.0));

    slider.pointer_move(220.0).expect("move");
    assert_geometry(&slider, 290.0, 10.0);
    assert_eq!(slider.range(), SelectionRange::new(1999.0, 2000.0));
}

#[test]
fn left_handle_collapse_pushes_left_edge_back() {
    let (mut slider, _log) = slider_with_range(1999.0, 2002.0);

    slider.pointer_down(DragTarget::LeftHandle, 290.0).expect("down");
    slider.pointer_move(320.0).expect("move");

    assert_geometry(&slider, 310.0, 10.0);
    assert_eq!(slider.range(), SelectionRange::new(2001.0, 2002.0));
}

#[test]
fn left_handle_overflow_is_absorbed_into_width() {
    let (mut slider, _log) = slider_with_range(1972.0, 1980.0);
    assert_geometry(&slider, 20.0, 80.0);

    slider.pointer_down(DragTarget::LeftHandle, 20.0).expect("down");
    slider.pointer_move(-30.0).expect("move");

    assert_geometry(&slider, 0.0, 100.0);
    assert_eq!(slider.range(), SelectionRange::new(1970.0, 1980.0));
}

#[test]
fn body_drag_is_confined_to_the_track() {
    let (mut slider, _log) = slider_with_range(2010.0, 2014.0);
    slider.pointer_down(DragTarget::Body, 420.0).expect("down");
    slider.pointer_move(520.0).expect("move");
    assert_geometry(&slider, 400.0, 40.0);
    assert_eq!(slider.range(), SelectionRange::new(2010.0, 2014.0));

    let (mut slider, _log) = slider_with_range(1999.0, 2002.0);
    slider.pointer_down(DragTarget::Body, 300.0).expect("down");
    slider.pointer_move(-200.0).expect("move");
    assert_geometry(&slider, 0.0, 30.0);
    assert_eq!(slider.range(), SelectionRange::new(1970.0, 1973.0));
}

#[test]
fn body_drag_snaps_left_edge_to_nearest_year() {
    let (mut slider, log) = slider_with_range(1999.0, 2002.0);
    slider.pointer_down(DragTarget::Body, 300.0).expect("down");
    slider.pointer_move(314.0).expect("move");
    assert_eq!(slider.range(), SelectionRange::new(2000.0, 2003.0));
    slider.pointer_up().expect("up");
    assert_geometry(&slider, 300.0, 30.0);
    assert_eq!(
        log.borrow().last().copied(),
        Some(Event::DragEnd(SelectionRange::new(2000.0, 2003.0)))
    );

    let (mut slider, _log) = slider_with_range(1999.0, 2002.0);
    slider.pointer_down(DragTarget::Body, 300.0).expect("down");
    slider.pointer_move(316.0).expect("move");
    assert_eq!(slider.range(), SelectionRange::new(2001.0, 2004.0));
    slider.pointer_up().expect("up");
    assert_geometry(&slider, 310.0, 30.0);
}

#[test]
fn every_drag_step_emits_a_change() {
    let (mut slider, log) = slider_with_range(1999.0, 2002.0);
    slider.pointer_down(DragTarget::Body, 300.0).expect("down");
    slider.pointer_move(305.0).expect("move");
    slider.pointer_move(312.0).expect("move");
    slider.pointer_move(330.0).expect("move");
    slider.pointer_up().expect("up");

    let log = log.borrow();
    assert_eq!(log.len(), 4);
    assert!(matches!(&log[..3], [Event::Change(_), Event::Change(_), Event::Change(_)]));
    assert_eq!(log[3], Event::DragEnd(SelectionRange::new(2002.0, 2005.0)));
}

#[test]
fn idle_and_zero_delta_moves_are_ignored() {
    let (mut slider, log) = slider_with_range(1999.0, 2002.0);

    slider.pointer_move(500.0).expect("idle move");
    slider.pointer_up().expect("idle up");
    assert!(log.borrow().is_empty());

    slider.pointer_down(DragTarget::Body, 300.0).expect("down");
    slider.pointer_move(300.0).expect("zero move");
    assert!(log.borrow().is_empty());
    assert_eq!(slider.range(), SelectionRange::new(1999.0, 2002.0));
}

#[test]
fn non_finite_pointer_positions_are_rejected() {
    let (mut slider, _log) = slider_with_range(1999.0, 2002.0);
    assert!(slider.pointer_down(DragTarget::Body, f64::NAN).is_err());
    assert!(slider.click_track(f64::INFINITY).is_err());
    assert_eq!(slider.range(), SelectionRange::new(1999.0, 2002.0));
}

#[test]
fn click_centers_selection_on_pointer() {
    let (mut slider, log) = slider_with_range(1999.0, 2002.0);

    slider.click_track(104.0).expect("click");
    assert_geometry(&slider, 89.0, 30.0);
    assert_eq!(slider.range(), SelectionRange::new(1979.0, 1982.0));

    slider.click_track(435.0).expect("click");
    assert_geometry(&slider, 410.0, 30.0);
    assert_eq!(slider.range(), SelectionRange::new(2011.0, 2014.0));

    slider.click_track(3.0).expect("click");
    assert_geometry(&slider, 0.0, 30.0);
    assert_eq!(slider.range(), SelectionRange::new(1970.0, 1973.0));

    assert_eq!(log.borrow().len(), 3);
    assert!(
        log.borrow()
            .iter()
            .all(|event| matches!(event, Event::Change(_)))
    );
}

#[test]
fn click_is_ignored_while_dragging() {
    let (mut slider, log) = slider_with_range(1999.0, 2002.0);
    slider.pointer_down(DragTarget::Body, 300.0).expect("down");
    slider.click_track(100.0).expect("click");

    assert_eq!(slider.range(), SelectionRange::new(1999.0, 2002.0));
    assert!(log.borrow().is_empty());
}

#[test]
fn left_handle_on_collapsed_start_grows_rightwards() {
    let (mut slider, log) = slider_with_range(1970.0, 1970.0);
    assert_geometry(&slider, 0.0, 0.0);

    slider.pointer_down(DragTarget::LeftHandle, 0.0).expect("down");
    slider.pointer_move(5.0).expect("move");
    assert_geometry(&slider, 0.0, 10.0);
    assert_eq!(slider.range(), SelectionRange::new(1970.0, 1971.0));

    slider.pointer_up().expect("up");
    assert_geometry(&slider, 0.0, 10.0);
    assert_eq!(
        *log.borrow(),
        vec![
            Event::Change(SelectionRange::new(1970.0, 1971.0)),
            Event::DragEnd(SelectionRange::new(1970.0, 1971.0)),
        ]
    );

    slider.pointer_down(DragTarget::LeftHandle, 0.0).expect("down");
    slider.pointer_move(-20.0).expect("move");
    slider.pointer_move(30.0).expect("move");
    assert!(slider.selection_geometry().left_px >= 0.0);
    assert_geometry(&slider, 0.0, 10.0);
}

#[test]
fn geometry_and_range_stay_in_sync_across_gestures() {
    let (mut slider, _log) = slider_with_range(1999.0, 2002.0);
    let scale = slider.scale();
    let container = slider.geometry().container_width_px;
    let assert_in_sync = |slider: &RangeSlider| {
        let selection = slider.selection_geometry();
        let begin = scale
            .to_domain(selection.left_px, container)
            .expect("begin");
        let end = scale
            .to_domain(selection.right_px(), container)
            .expect("end");
        assert_eq!(slider.range(), SelectionRange::new(begin, end));
    };

    slider.pointer_down(DragTarget::Body, 300.0).expect("down");
    slider.pointer_move(320.0).expect("move");
    assert_in_sync(&slider);
    slider.pointer_up().expect("up");
    assert_in_sync(&slider);

    slider.click_track(200.0).expect("click");
    assert_in_sync(&slider);

    assert!(slider.click_track(f64::NAN).is_err());
    assert_in_sync(&slider);
}
