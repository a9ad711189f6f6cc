use glam::Vec2;

/// Last known cursor or touch position in canvas backing pixels.
/// Written by the window-level move listeners, read once per frame;
/// last write wins.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Map client (viewport CSS) coordinates onto the canvas backing store.
/// The backing size is CSS size times devicePixelRatio, so the scale is
/// carried through the bounding rect. Degenerate rects map to the origin.
#[inline]
pub fn client_to_canvas_px(
    client_x: f32,
    client_y: f32,
    rect_left: f32,
    rect_top: f32,
    rect_width: f32,
    rect_height: f32,
    backing_width: f32,
    backing_height: f32,
) -> Vec2 {
    if rect_width <= 0.0 || rect_height <= 0.0 {
        return Vec2::ZERO;
    }
    let x_css = client_x - rect_left;
    let y_css = client_y - rect_top;
    Vec2::new(
        x_css / rect_width * backing_width,
        y_css / rect_height * backing_height,
    )
}
