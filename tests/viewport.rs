//! Canvas geometry: transforms, zooming, framing, and minimap projection.
use kessai::viewport::{
    DEFAULT_PAN, ELEMENT_HEIGHT, ELEMENT_WIDTH, MAX_ZOOM, MIN_ZOOM, Point, Size, Viewport,
    ZOOM_STEP, connection_path,
};

const EXTENT: Size = Size {
    width: 5000.0,
    height: 5000.0,
};
const EPSILON: f64 = 1e-9;

fn assert_close(a: Point, b: Point) {
    assert!(
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON,
        "{a:?} != {b:?}"
    );
}

#[test]
fn transforms_are_inverse_over_the_zoom_range() {
    for zoom in [0.1, 0.35, 1.0, 1.7, 3.0] {
        let mut viewport = Viewport::new(EXTENT);
        viewport.zoom = zoom;
        viewport.pan = Point::new(-120.0, 60.0);

        for point in [
            Point::new(0.0, 0.0),
            Point::new(12.5, 980.25),
            Point::new(4000.0, 1.0),
        ] {
            let back = viewport.screen_to_canvas(viewport.canvas_to_screen(point));
            assert_close(back, point);
        }
    }
}

#[test]
fn screen_to_canvas_clamps_negative_coordinates() {
    let viewport = Viewport::new(EXTENT);
    // Screen origin maps to canvas (-100, -100) before clamping.
    let canvas = viewport.screen_to_canvas(Point::new(0.0, 0.0));
    assert_eq!(canvas, Point::new(0.0, 0.0));
}

#[test]
fn zoom_at_point_keeps_the_pivot_fixed() {
    let mut viewport = Viewport::new(EXTENT);
    viewport.pan = Point::new(40.0, -25.0);
    let pivot = Point::new(512.0, 384.0);
    let canvas_at_pivot = viewport.screen_to_canvas(pivot);

    viewport.zoom_at_point(1.7, pivot);

    assert!((viewport.zoom - 1.7).abs() < EPSILON);
    assert_close(viewport.canvas_to_screen(canvas_at_pivot), pivot);
}

#[test]
fn zoom_steps_multiply_and_clamp() {
    let mut viewport = Viewport::new(EXTENT);
    let size = Size::new(800.0, 600.0);

    viewport.zoom_in(size);
    assert!((viewport.zoom - ZOOM_STEP).abs() < EPSILON);
    viewport.zoom_out(size);
    assert!((viewport.zoom - 1.0).abs() < EPSILON);

    for _ in 0..20 {
        viewport.zoom_in(size);
    }
    assert_eq!(viewport.zoom, MAX_ZOOM);
    for _ in 0..40 {
        viewport.zoom_out(size);
    }
    assert_eq!(viewport.zoom, MIN_ZOOM);
}

#[test]
fn reset_restores_defaults() {
    let mut viewport = Viewport::new(EXTENT);
    viewport.zoom_at_point(2.0, Point::new(300.0, 300.0));
    viewport.reset();
    assert_eq!(viewport.zoom, 1.0);
    assert_eq!(viewport.pan, DEFAULT_PAN);
}

#[test]
fn fit_to_content_never_upscales_and_pins_top_left() {
    let mut viewport = Viewport::new(EXTENT);
    let positions = [
        Point::new(100.0, 100.0),
        Point::new(1500.0, 400.0),
        Point::new(700.0, 2000.0),
    ];
    let size = Size::new(1024.0, 768.0);
    let padding = 100.0;

    viewport.fit_to_content(&positions, size, padding);

    assert!(viewport.zoom <= 1.0);
    // The content bounding box's top-left projects to (padding, padding).
    let top_left = viewport.canvas_to_screen(Point::new(100.0, 100.0));
    assert_close(top_left, Point::new(padding, padding));
}

#[test]
fn fit_to_content_small_content_keeps_scale_one() {
    let mut viewport = Viewport::new(EXTENT);
    viewport.fit_to_content(
        &[Point::new(50.0, 50.0)],
        Size::new(1024.0, 768.0),
        100.0,
    );
    assert_eq!(viewport.zoom, 1.0);
    let top_left = viewport.canvas_to_screen(Point::new(50.0, 50.0));
    assert_close(top_left, Point::new(100.0, 100.0));
}

#[test]
fn fit_to_content_is_a_noop_without_content() {
    let mut viewport = Viewport::new(EXTENT);
    let before = viewport;
    viewport.fit_to_content(&[], Size::new(1024.0, 768.0), 100.0);
    assert_eq!(viewport, before);
}

#[test]
fn connection_path_anchors_on_element_edges() {
    let path = connection_path(
        kessai::graph::Position::new(100.0, 100.0),
        kessai::graph::Position::new(600.0, 400.0),
    );
    assert_eq!(
        path.start,
        Point::new(100.0 + ELEMENT_WIDTH, 100.0 + ELEMENT_HEIGHT / 2.0)
    );
    assert_eq!(path.end, Point::new(600.0, 400.0 + ELEMENT_HEIGHT / 2.0));

    // Control points are horizontal offsets, capped at 100.
    assert_eq!(path.control1.y, path.start.y);
    assert_eq!(path.control2.y, path.end.y);
    assert!(path.control1.x - path.start.x <= 100.0 + EPSILON);

    let data = path.path_data();
    assert!(data.starts_with("M 340 150 C "), "{data}");
}

#[test]
fn minimap_scales_positions_and_viewport() {
    let mut viewport = Viewport::new(Size::new(5000.0, 4000.0));
    viewport.zoom = 2.0;
    viewport.pan = Point::new(-500.0, -400.0);

    let projection = viewport
        .minimap_projection(
            &[Point::new(2500.0, 2000.0)],
            Size::new(200.0, 160.0),
            Size::new(1000.0, 800.0),
        )
        .expect("valid projection");

    // 2500/5000 * 200 = 100, 2000/4000 * 160 = 80.
    assert_close(projection.nodes[0], Point::new(100.0, 80.0));
    // Visible canvas starts at (250, 200) and spans 500x400.
    assert!((projection.visible.x - 10.0).abs() < EPSILON);
    assert!((projection.visible.y - 8.0).abs() < EPSILON);
    assert!((projection.visible.width - 20.0).abs() < EPSILON);
    assert!((projection.visible.height - 16.0).abs() < EPSILON);
}

#[test]
fn minimap_rejects_degenerate_sizes() {
    let viewport = Viewport::new(EXTENT);
    assert!(
        viewport
            .minimap_projection(&[], Size::new(0.0, 100.0), Size::new(800.0, 600.0))
            .is_none()
    );

    let flat = Viewport::new(Size::new(0.0, 0.0));
    assert!(
        flat.minimap_projection(&[], Size::new(200.0, 160.0), Size::new(800.0, 600.0))
            .is_none()
    );
}
