//! Pan/zoom state and coordinate transforms for the interactive canvas.
//!
//! The viewport maps canvas coordinates to screen coordinates through the
//! affine transform `screen = canvas * zoom + pan`. It operates purely on
//! positions and knows nothing about element semantics; element positions fed
//! into it must come from the latest published document snapshot.

pub mod geometry;

pub use geometry::{
    ConnectionPath, ELEMENT_HEIGHT, ELEMENT_WIDTH, Point, Rect, Size, connection_path,
};

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 3.0;
/// Multiplier applied by [`Viewport::zoom_in`] / [`Viewport::zoom_out`].
pub const ZOOM_STEP: f64 = 1.2;
/// Default origin offset so the start node is not flush against the edge.
pub const DEFAULT_PAN: Point = Point { x: 100.0, y: 100.0 };
pub const DEFAULT_FIT_PADDING: f64 = 100.0;

/// Minimap rendering of the canvas: element positions scaled into minimap
/// pixel space plus the currently visible region.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimapProjection {
    pub nodes: Vec<Point>,
    pub visible: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub pan: Point,
    /// Fixed logical canvas extent.
    pub extent: Size,
}

impl Viewport {
    pub fn new(extent: Size) -> Self {
        Self {
            zoom: 1.0,
            pan: DEFAULT_PAN,
            extent,
        }
    }

    pub fn canvas_to_screen(&self, point: Point) -> Point {
        Point {
            x: point.x * self.zoom + self.pan.x,
            y: point.y * self.zoom + self.pan.y,
        }
    }

    /// Inverse transform; canvas coordinates are clamped to be non-negative
    /// so no element can be dragged off the origin side of the canvas.
    pub fn screen_to_canvas(&self, point: Point) -> Point {
        Point {
            x: ((point.x - self.pan.x) / self.zoom).max(0.0),
            y: ((point.y - self.pan.y) / self.zoom).max(0.0),
        }
    }

    /// Re-zooms around a screen-space pivot which stays visually fixed.
    pub fn zoom_at_point(&mut self, factor: f64, pivot: Point) {
        let new_zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        let ratio = new_zoom / self.zoom;
        self.pan = Point {
            x: pivot.x - (pivot.x - self.pan.x) * ratio,
            y: pivot.y - (pivot.y - self.pan.y) * ratio,
        };
        self.zoom = new_zoom;
    }

    pub fn zoom_in(&mut self, viewport_size: Size) {
        self.zoom_at_point(ZOOM_STEP, center_of(viewport_size));
    }

    pub fn zoom_out(&mut self, viewport_size: Size) {
        self.zoom_at_point(1.0 / ZOOM_STEP, center_of(viewport_size));
    }

    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan = DEFAULT_PAN;
    }

    /// Frames the given element positions inside the viewport.
    ///
    /// The content bounding box (positions plus the fixed element footprint)
    /// is scaled by `min(avail_w / content_w, avail_h / content_h, 1)` —
    /// never upscaled past 1 — and panned so its top-left lands at
    /// `(padding, padding)` in screen space. No-op when there are no
    /// positions or the viewport size is degenerate.
    pub fn fit_to_content(&mut self, positions: &[Point], viewport_size: Size, padding: f64) {
        if positions.is_empty() || !viewport_size.is_positive() {
            return;
        }

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for p in positions {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x + ELEMENT_WIDTH);
            max_y = max_y.max(p.y + ELEMENT_HEIGHT);
        }

        let content_width = max_x - min_x;
        let content_height = max_y - min_y;
        let avail_width = (viewport_size.width - 2.0 * padding).max(1.0);
        let avail_height = (viewport_size.height - 2.0 * padding).max(1.0);

        let scale = (avail_width / content_width)
            .min(avail_height / content_height)
            .min(1.0)
            .max(MIN_ZOOM);

        self.zoom = scale;
        self.pan = Point {
            x: padding - min_x * scale,
            y: padding - min_y * scale,
        };
    }

    /// Projects element positions and the visible region into minimap pixel
    /// space. Returns `None` when the minimap or canvas extent is degenerate.
    pub fn minimap_projection(
        &self,
        positions: &[Point],
        minimap_size: Size,
        viewport_size: Size,
    ) -> Option<MinimapProjection> {
        if !minimap_size.is_positive() || !self.extent.is_positive() {
            return None;
        }

        let scale_x = minimap_size.width / self.extent.width;
        let scale_y = minimap_size.height / self.extent.height;

        let nodes = positions
            .iter()
            .map(|p| Point::new(p.x * scale_x, p.y * scale_y))
            .collect();

        // Canvas region currently on screen, unclamped on purpose: the
        // minimap shows where the viewport is even when panned past origin.
        let visible_x = -self.pan.x / self.zoom;
        let visible_y = -self.pan.y / self.zoom;
        let visible = Rect::new(
            visible_x * scale_x,
            visible_y * scale_y,
            (viewport_size.width / self.zoom) * scale_x,
            (viewport_size.height / self.zoom) * scale_y,
        );

        Some(MinimapProjection { nodes, visible })
    }
}

fn center_of(size: Size) -> Point {
    Point::new(size.width / 2.0, size.height / 2.0)
}
