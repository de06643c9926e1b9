//! Drawing-area geometry for the arc widget.
//!
//! The widget always draws on the largest centered square that fits the
//! canvas, inset by half the thickest stroke so arcs never clip at the
//! edges.

use iced::{Point, Rectangle, Size};

/// Bounding square and arc radius computed for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawingArea {
    /// Centered square region the arcs are laid out in
    pub bounds: Rectangle,
    /// Arc radius, measured from the canvas center to the stroke centerline
    pub radius: f32,
}

/// Compute the drawing area for a canvas of `size` and the widest stroke in
/// use.
///
/// Degenerate sizes are accepted and simply yield a zero or negative
/// radius; the renderer draws nothing in that case instead of failing.
pub fn drawing_area(size: Size, max_stroke_width: f32) -> DrawingArea {
    let spacing = max_stroke_width / 2.0;
    let min_dim = size.width.min(size.height);
    let radius = min_dim / 2.0 - spacing;

    let left = if size.width > min_dim {
        spacing + (size.width - min_dim) / 2.0
    } else {
        spacing
    };
    let top = if size.height > min_dim {
        spacing + (size.height - min_dim) / 2.0
    } else {
        spacing
    };
    let right = if size.width > min_dim {
        size.width - left
    } else {
        min_dim - left
    };
    let bottom = if size.height > min_dim {
        size.height - top
    } else {
        min_dim - top
    };

    DrawingArea {
        bounds: Rectangle::new(Point::new(left, top), Size::new(right - left, bottom - top)),
        radius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_surface_centers_horizontally() {
        let area = drawing_area(Size::new(200.0, 100.0), 20.0);

        // spacing = 10, min dimension = 100
        assert_eq!(area.radius, 40.0);
        assert_eq!(area.bounds.x, 60.0);
        assert_eq!(area.bounds.y, 10.0);
        assert_eq!(area.bounds.x + area.bounds.width, 140.0);
        assert_eq!(area.bounds.y + area.bounds.height, 90.0);
    }

    #[test]
    fn tall_surface_centers_vertically() {
        let area = drawing_area(Size::new(100.0, 200.0), 20.0);

        assert_eq!(area.radius, 40.0);
        assert_eq!(area.bounds.x, 10.0);
        assert_eq!(area.bounds.y, 60.0);
        assert_eq!(area.bounds.x + area.bounds.width, 90.0);
        assert_eq!(area.bounds.y + area.bounds.height, 140.0);
    }

    #[test]
    fn square_surface_uses_plain_spacing_insets() {
        let area = drawing_area(Size::new(100.0, 100.0), 8.0);

        assert_eq!(area.radius, 46.0);
        assert_eq!(area.bounds.x, 4.0);
        assert_eq!(area.bounds.y, 4.0);
        assert_eq!(area.bounds.width, 92.0);
        assert_eq!(area.bounds.height, 92.0);
    }

    #[test]
    fn degenerate_surface_yields_non_positive_radius() {
        let area = drawing_area(Size::new(0.0, 0.0), 20.0);
        assert!(area.radius <= 0.0);

        let area = drawing_area(Size::new(10.0, 10.0), 20.0);
        assert!(area.radius <= 0.0);
    }
}
