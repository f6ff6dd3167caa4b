use approx::assert_relative_eq;

use quakeview::core::EarthquakeRecord;
use quakeview::extensions::{
    EquirectangularProjection, MAGNITUDE_RAMP, MagnitudeStyle, MarkerStyleConfig, Projection,
    place_markers,
};

fn quake(latitude: f64, longitude: f64, magnitude: f64) -> EarthquakeRecord {
    EarthquakeRecord::new("2004/12/26 00:58:53", latitude, longitude, magnitude)
}

#[test]
fn equirectangular_projection_centers_origin() {
    let projection = EquirectangularProjection::default();
    let (x, y) = projection.project(0.0, 0.0);
    assert_relative_eq!(x, 500.0);
    assert_relative_eq!(y, 250.0);

    let (x, y) = projection.project(180.0, 90.0);
    assert_relative_eq!(x, 500.0 + 158.6 * std::f64::consts::PI, epsilon = 1e-9);
    assert_relative_eq!(y, 250.0 - 158.6 * std::f64::consts::FRAC_PI_2, epsilon = 1e-9);
}

#[test]
fn radius_and_color_follow_magnitude_extent() {
    let records = vec![quake(0.0, 0.0, 5.0), quake(0.0, 0.0, 7.0), quake(0.0, 0.0, 9.0)];
    let style = MagnitudeStyle::fit(&records, MarkerStyleConfig::default())
        .expect("style")
        .expect("non-empty extent");

    assert_eq!((style.min_magnitude, style.max_magnitude), (5.0, 9.0));
    assert_relative_eq!(style.radius_px(5.0), 5.0);
    assert_relative_eq!(style.radius_px(7.0), 7.5);
    assert_relative_eq!(style.radius_px(9.0), 10.0);

    assert_eq!(style.color(5.0), MAGNITUDE_RAMP[0]);
    assert_eq!(style.color(7.0), MAGNITUDE_RAMP[4]);
    assert_eq!(style.color(9.0), MAGNITUDE_RAMP[8]);
}

#[test]
fn single_valued_extent_uses_middle_style() {
    let records = vec![quake(10.0, 20.0, 6.5), quake(-10.0, -20.0, 6.5)];
    let style = MagnitudeStyle::fit(&records, MarkerStyleConfig::default())
        .expect("style")
        .expect("non-empty extent");

    assert_relative_eq!(style.radius_px(6.5), 7.5);
    assert_eq!(style.color(6.5), MAGNITUDE_RAMP[4]);
}

#[test]
fn markers_keep_input_order_and_hover_boost() {
    let records = vec![quake(3.316, 95.854, 9.1), quake(-35.846, -72.719, 8.8)];
    let projection = |longitude: f64, latitude: f64| (longitude, -latitude);

    let markers =
        place_markers(&records, &projection, MarkerStyleConfig::default()).expect("markers");
    assert_eq!(markers.len(), 2);
    assert_eq!((markers[0].x, markers[0].y), (95.854, -3.316));
    assert_relative_eq!(markers[0].radius_px, 10.0);
    assert_relative_eq!(markers[0].hover_radius_px, 15.0);
    assert_relative_eq!(markers[1].radius_px, 5.0);

    let hovered = markers[0].to_primitive(true);
    assert_relative_eq!(hovered.radius, 15.0);
    assert_relative_eq!(markers[0].to_primitive(false).radius, 10.0);
}

#[test]
fn tooltip_rounds_coordinates_to_hundredths() {
    let records = vec![quake(3.316, 95.854, 9.1)];
    let markers = place_markers(
        &records,
        &EquirectangularProjection::default(),
        MarkerStyleConfig::default(),
    )
    .expect("markers");

    let tooltip = markers[0].tooltip();
    assert_eq!(tooltip.magnitude, 9.1);
    assert_relative_eq!(tooltip.latitude, 3.32, epsilon = 1e-12);
    assert_relative_eq!(tooltip.longitude, 95.85, epsilon = 1e-12);
}

#[test]
fn empty_selection_and_invalid_inputs() {
    let markers = place_markers(
        &[],
        &EquirectangularProjection::default(),
        MarkerStyleConfig::default(),
    )
    .expect("markers");
    assert!(markers.is_empty());

    let bad = vec![quake(0.0, 0.0, f64::NAN)];
    assert!(MagnitudeStyle::fit(&bad, MarkerStyleConfig::default()).is_err());

    let broken_projection = |_: f64, _: f64| (f64::NAN, 0.0);
    assert!(
        place_markers(
            &[quake(0.0, 0.0, 6.0)],
            &broken_projection,
            MarkerStyleConfig::default()
        )
        .is_err()
    );

    let inverted = MarkerStyleConfig {
        min_radius_px: 12.0,
        ..MarkerStyleConfig::default()
    };
    assert!(inverted.validate().is_err());
}
