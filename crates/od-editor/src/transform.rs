//! Screen→canvas coordinate mapping.

/// Snapshot of the canvas's affine transform. Captured once at gesture
/// start and reused for the whole gesture; re-querying the live transform
/// on every pointer move forces the host to recompute layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl ViewTransform {
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Map a screen-space point into canvas space.
    pub fn to_canvas(&self, sx: f64, sy: f64) -> (f64, f64) {
        (
            (sx - self.translate_x) / self.scale_x,
            (sy - self.translate_y) / self.scale_y,
        )
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Map through an optional snapshot. Without one (canvas not mounted yet)
/// the origin is the safe answer.
pub fn canvas_point(ctm: Option<&ViewTransform>, screen: (f64, f64)) -> (f64, f64) {
    match ctm {
        Some(t) => t.to_canvas(screen.0, screen.1),
        None => (0.0, 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_passthrough() {
        assert_eq!(ViewTransform::IDENTITY.to_canvas(12.5, -3.0), (12.5, -3.0));
    }

    #[test]
    fn inverse_of_scale_and_translation() {
        let t = ViewTransform {
            scale_x: 2.0,
            scale_y: 0.5,
            translate_x: 100.0,
            translate_y: -50.0,
        };
        assert_eq!(t.to_canvas(140.0, -25.0), (20.0, 50.0));
    }

    #[test]
    fn missing_snapshot_maps_to_origin() {
        assert_eq!(canvas_point(None, (640.0, 480.0)), (0.0, 0.0));
    }
}
