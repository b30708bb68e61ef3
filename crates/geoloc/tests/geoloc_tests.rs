//! Integration tests for geolocation setup, mapping and bounds.

use espa_common::space::spheroid;
use geoloc::{GeoCoord, GeolocError, GeolocMetadata, Geoloc, ImgCoord, ProjectionCode, SpaceDef};
use test_utils::{
    affine_2x2, albers_scene, assert_approx_eq, assert_coords_approx_eq, assert_geo_approx_eq,
    polar_scene, rotated_scene, sinusoidal_tile, stub_scene, temp_test_dir, utm_scene,
    write_test_file, CountingProvider, FailingProvider, FailurePoint, IdentityProvider,
    LANDSAT_METADATA_JSON, MODIS_METADATA_JSON,
};

// ============================================================================
// Setup validation
// ============================================================================

fn assert_setup_rejected(def: SpaceDef) {
    let provider = CountingProvider::new();
    let result = Geoloc::setup_with_provider(&def, &provider);
    assert!(
        matches!(result, Err(GeolocError::Validation(_))),
        "expected validation error for {:?}",
        def
    );
    assert!(provider.requests().is_empty(), "provider was initialized");
}

#[test]
fn test_setup_rejects_zero_lines() {
    let mut def = stub_scene();
    def.lines = 0;
    assert_setup_rejected(def);
}

#[test]
fn test_setup_rejects_zero_samples() {
    let mut def = stub_scene();
    def.samples = 0;
    assert_setup_rejected(def);
}

#[test]
fn test_setup_rejects_bad_pixel_size() {
    for pixel_size in [[0.0, 30.0], [30.0, 0.0], [-30.0, 30.0], [30.0, -1.0e-9]] {
        let mut def = stub_scene();
        def.pixel_size = pixel_size;
        assert_setup_rejected(def);
    }
}

#[test]
fn test_setup_rejects_out_of_range_projection() {
    for code in [-1, 100, 1000] {
        let mut def = stub_scene();
        def.projection = ProjectionCode::from_code(code);
        assert_setup_rejected(def);
    }
}

#[test]
fn test_unknown_in_range_projection_fails_init() {
    let mut def = utm_scene();
    def.projection = ProjectionCode::from_code(4);
    assert!(matches!(
        Geoloc::setup(&def),
        Err(GeolocError::ProviderInit(_))
    ));
}

#[test]
fn test_utm_zone_zero_fails_init() {
    let def = utm_scene().with_zone(0);
    assert!(matches!(
        Geoloc::setup(&def),
        Err(GeolocError::ProviderInit(_))
    ));
}

#[test]
fn test_provider_init_failures() {
    for point in [FailurePoint::ForwardInit, FailurePoint::InverseInit] {
        let result = Geoloc::setup_with_provider(&stub_scene(), &FailingProvider::new(point));
        assert!(
            matches!(result, Err(GeolocError::ProviderInit(_))),
            "{:?}",
            point
        );
    }
}

#[test]
fn test_provider_receives_packed_angles() {
    let provider = CountingProvider::new();
    let _geoloc = Geoloc::setup_with_provider(&albers_scene(), &provider).unwrap();

    let requests = provider.requests();
    assert_eq!(requests.len(), 2);
    let request = &requests[0];
    assert_eq!(request.code, ProjectionCode::Albers);
    assert_eq!(request.spheroid, spheroid::GRS80);
    assert_eq!(request.params[2], 29_030_000.0);
    assert_eq!(request.params[4], -96_000_000.0);
    assert_eq!(requests[0], requests[1]);
}

// ============================================================================
// Fill propagation
// ============================================================================

#[test]
fn test_fill_never_reaches_provider() {
    let provider = CountingProvider::new();
    let geoloc = Geoloc::setup_with_provider(&stub_scene(), &provider).unwrap();

    let err = geoloc.to_space(&GeoCoord::fill()).unwrap_err();
    assert!(err.is_fill());
    let err = geoloc.from_space(&ImgCoord::fill()).unwrap_err();
    assert!(err.is_fill());
    assert_eq!(provider.calls(), 0);

    geoloc.from_space(&ImgCoord::new(1.0, 1.0)).unwrap();
    assert_eq!(provider.calls(), 1);
}

// ============================================================================
// Coordinate mapping
// ============================================================================

#[test]
fn test_round_trip_with_identity_provider() {
    for theta in [0.0, 7.5, -23.0] {
        let def = stub_scene().with_orientation(f64::to_radians(theta));
        let geoloc = Geoloc::setup_with_provider(&def, &IdentityProvider).unwrap();

        for (lon, lat) in [(-99.8, 39.8), (-99.5, 39.95), (-99.31, 39.5)] {
            let geo = GeoCoord::from_degrees(lon, lat);
            let img = geoloc.to_space(&geo).unwrap();
            let back = geoloc.from_space(&img).unwrap();
            assert_geo_approx_eq!(back, geo, 1e-6);
        }
    }
}

#[test]
fn test_zero_rotation_is_affine() {
    let def = stub_scene();
    let geoloc = Geoloc::setup_with_provider(&def, &IdentityProvider).unwrap();

    let geo = GeoCoord::from_degrees(-99.7, 39.9);
    let img = geoloc.to_space(&geo).unwrap();

    let expected_line = (def.ul_corner.y - geo.lat) / def.pixel_size_y();
    let expected_sample = (geo.lon - def.ul_corner.x) / def.pixel_size_x();
    assert_coords_approx_eq!(
        (img.line, img.sample),
        (expected_line, expected_sample),
        1e-9
    );
}

#[test]
fn test_pixel_corners_map_to_grid_corners() {
    let geoloc = Geoloc::setup(&affine_2x2()).unwrap();
    let (ul_lon, ul_lat) = geoloc.from_space(&ImgCoord::new(0.0, 0.0)).unwrap().to_degrees();
    let (lr_lon, lr_lat) = geoloc.from_space(&ImgCoord::new(2.0, 2.0)).unwrap().to_degrees();
    assert_coords_approx_eq!((ul_lon, ul_lat), (-100.0, 40.0), 1e-12);
    assert_coords_approx_eq!((lr_lon, lr_lat), (-99.0, 39.0), 1e-12);
}

#[test]
fn test_rotated_scene_geometry() {
    let theta = 12.0f64;
    let geoloc = Geoloc::setup(&rotated_scene(theta)).unwrap();
    let north_up = Geoloc::setup(&utm_scene()).unwrap();

    // The UL corner is the rotation pivot
    let origin = ImgCoord::new(0.0, 0.0);
    assert_geo_approx_eq!(
        geoloc.from_space(&origin).unwrap(),
        north_up.from_space(&origin).unwrap(),
        1e-9
    );

    // Walking down the first column moves along (sinθ, -cosθ)
    let map = geoloc.image_to_map(&ImgCoord::new(100.0, 0.0));
    let ul = utm_scene().ul_corner;
    let (sin, cos) = theta.to_radians().sin_cos();
    assert_approx_eq!(map.x, ul.x + 3000.0 * sin, 1e-6);
    assert_approx_eq!(map.y, ul.y - 3000.0 * cos, 1e-6);

    for img in [ImgCoord::new(0.5, 0.5), ImgCoord::new(4000.25, 120.0), ImgCoord::new(7801.0, 7621.0)] {
        let geo = geoloc.from_space(&img).unwrap();
        let back = geoloc.to_space(&geo).unwrap();
        assert_coords_approx_eq!((back.line, back.sample), (img.line, img.sample), 1e-4);
    }
}

#[test]
fn test_transform_failure_is_reported() {
    let geoloc =
        Geoloc::setup_with_provider(&stub_scene(), &FailingProvider::new(FailurePoint::Forward))
            .unwrap();
    assert!(matches!(
        geoloc.to_space(&GeoCoord::from_degrees(-99.9, 39.9)),
        Err(GeolocError::Transform(_))
    ));
}

// ============================================================================
// Bounding box
// ============================================================================

#[test]
fn test_2x2_bounds_match_corner_mapping() {
    let geoloc = Geoloc::setup(&affine_2x2()).unwrap();
    let bounds = geoloc.compute_bounds(2, 2).unwrap();

    let (ul_lon, ul_lat) = geoloc.from_space(&ImgCoord::new(0.0, 0.0)).unwrap().to_degrees();
    let (lr_lon, lr_lat) = geoloc.from_space(&ImgCoord::new(2.0, 2.0)).unwrap().to_degrees();

    assert_eq!(bounds.min_lon, ul_lon);
    assert_eq!(bounds.max_lat, ul_lat);
    assert_eq!(bounds.max_lon, lr_lon);
    assert_eq!(bounds.min_lat, lr_lat);
}

#[test]
fn test_bounds_abort_on_any_failure() {
    let geoloc = Geoloc::setup_with_provider(
        &stub_scene(),
        &FailingProvider::new(FailurePoint::InverseAfter(5)),
    )
    .unwrap();
    assert!(matches!(
        geoloc.compute_bounds(100, 120),
        Err(GeolocError::Transform(_))
    ));
}

#[test]
fn test_bounds_walk_visits_every_edge_pixel() {
    let provider = CountingProvider::new();
    let geoloc = Geoloc::setup_with_provider(&stub_scene(), &provider).unwrap();
    geoloc.compute_bounds(100, 120).unwrap();
    assert_eq!(provider.calls(), 2 * 121 + 2 * 101);
}

#[test]
fn test_utm_scene_bounds() {
    let def = utm_scene();
    let bounds = Geoloc::setup(&def)
        .unwrap()
        .compute_bounds(def.lines, def.samples)
        .unwrap();
    assert!(bounds.min_lon > -106.5 && bounds.max_lon < -103.3, "{:?}", bounds);
    assert!(bounds.min_lat > 38.3 && bounds.max_lat < 40.8, "{:?}", bounds);
    assert!(bounds.width() > 2.0);
}

#[test]
fn test_albers_scene_bounds() {
    let def = albers_scene();
    let bounds = Geoloc::setup(&def)
        .unwrap()
        .compute_bounds(def.lines, def.samples)
        .unwrap();
    assert!(bounds.min_lon > -128.0 && bounds.max_lon < -123.0, "{:?}", bounds);
    assert!(bounds.min_lat > 46.0 && bounds.max_lat < 49.0, "{:?}", bounds);
}

#[test]
fn test_sinusoidal_tile_bounds() {
    let def = sinusoidal_tile();
    let bounds = Geoloc::setup(&def)
        .unwrap()
        .compute_bounds(def.lines, def.samples)
        .unwrap();
    assert_approx_eq!(bounds.max_lat, 40.0, 1e-5);
    assert_approx_eq!(bounds.min_lat, 30.0, 1e-5);
    assert_approx_eq!(bounds.min_lon, -100.0 / 40.0f64.to_radians().cos(), 1e-4);
    assert_approx_eq!(bounds.max_lon, -90.0 / 30.0f64.to_radians().cos(), 1e-4);
}

#[test]
fn test_polar_scene_surrounds_pole() {
    let def = polar_scene();
    let geoloc = Geoloc::setup(&def).unwrap();
    let bounds = geoloc.compute_bounds(def.lines, def.samples).unwrap();
    assert!(bounds.max_lat < -85.0 && bounds.min_lat > -88.5, "{:?}", bounds);
    assert!(bounds.min_lon < -179.0 && bounds.max_lon > 179.0, "{:?}", bounds);

    let pole = geoloc.from_space(&ImgCoord::new(1250.0, 1250.0)).unwrap();
    assert_approx_eq!(pole.lat.to_degrees(), -90.0, 1e-9);
}

#[test]
fn test_polar_scene_corners_equidistant_from_pole() {
    let def = polar_scene();
    let corners = Geoloc::setup(&def).unwrap().corners(def.lines, def.samples).unwrap();
    // All four corners sit at the same distance from the pole
    assert_approx_eq!(corners.ul.1, corners.lr.1, 1e-9);
    assert_approx_eq!(corners.ur.1, corners.ll.1, 1e-9);
}

// ============================================================================
// Metadata
// ============================================================================

#[test]
fn test_landsat_metadata_file_to_bounds() {
    let dir = temp_test_dir();
    let path = write_test_file(dir.path(), "landsat.json", LANDSAT_METADATA_JSON);

    let metadata = GeolocMetadata::from_path(&path).unwrap();
    let def = metadata.space_def().unwrap();
    assert_eq!(def.ul_corner.x, 399000.0);
    assert_eq!(def.ul_corner.y, 4500000.0);
    assert_eq!((def.lines, def.samples), (7801, 7621));
    assert_eq!(def, utm_scene());

    let bounds = Geoloc::setup(&def)
        .unwrap()
        .compute_bounds(def.lines, def.samples)
        .unwrap();
    assert!(bounds.contains_point(-105.0, 39.5));
}

#[test]
fn test_modis_metadata_uses_parameter_sphere() {
    let def = GeolocMetadata::from_json(MODIS_METADATA_JSON)
        .unwrap()
        .space_def()
        .unwrap();
    assert_eq!(def.spheroid, spheroid::FROM_PARAMETERS);
    assert_eq!(def, sinusoidal_tile());
    assert!(Geoloc::setup(&def).is_ok());
}

#[test]
fn test_malformed_metadata() {
    assert!(matches!(
        GeolocMetadata::from_json("{\"projection\": 3}"),
        Err(GeolocError::Validation(_))
    ));
    assert!(matches!(
        GeolocMetadata::from_path("/nonexistent/scene.json"),
        Err(GeolocError::Validation(_))
    ));
}
