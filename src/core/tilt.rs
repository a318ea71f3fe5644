//! Pointer-driven 3D tilt for card elements.
//!
//! Rotation is proportional to the pointer's offset from the card center:
//! `rotate_x = (y - cy) / divisor`, `rotate_y = (cx - x) / divisor`.

use crate::core::motion::num;

/// Card box in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CardBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Tuning for one kind of card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    /// Pixels of pointer offset per degree of rotation. Larger is subtler.
    pub divisor: f64,
    /// Uniform scale while the pointer is over the card.
    pub hover_scale: f64,
    /// CSS perspective distance in pixels.
    pub perspective: f64,
    /// Duration of the eased return to neutral.
    pub reset_ms: u32,
    /// Cast a shadow that follows the tilt.
    pub shadow: bool,
    /// Selector of children that drift with the pointer, deeper ones less.
    pub drift: Option<&'static str>,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            divisor: 20.0,
            hover_scale: 1.0,
            perspective: 1000.0,
            reset_ms: 300,
            shadow: false,
            drift: None,
        }
    }
}

/// Resting shadow for cards with [`TiltConfig::shadow`].
pub const RESTING_SHADOW: &str = "0 4px 20px rgba(103, 92, 194, 0.2)";

/// A computed tilt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
    /// Pointer offset from the center, used for drifting children.
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    /// Tilt for a pointer at client position `(x, y)` over `card`.
    pub fn at_pointer(x: f64, y: f64, card: CardBox, config: &TiltConfig) -> Self {
        let (cx, cy) = card.center();
        let offset_x = x - cx;
        let offset_y = y - cy;
        let divisor = if config.divisor > 0.0 { config.divisor } else { 1.0 };

        Self {
            rotate_x: offset_y / divisor,
            rotate_y: -offset_x / divisor,
            scale: config.hover_scale,
            offset_x,
            offset_y,
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.rotate_x == 0.0 && self.rotate_y == 0.0 && self.scale == 1.0
    }

    pub fn transform(&self, config: &TiltConfig) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) scale3d({s}, {s}, {s})",
            num(config.perspective),
            num(self.rotate_x),
            num(self.rotate_y),
            s = num(self.scale),
        )
    }

    /// Shadow that leans away from the raised edge.
    pub fn shadow(&self) -> String {
        if self.is_neutral() {
            return RESTING_SHADOW.to_string();
        }
        format!(
            "{}px {}px 20px rgba(24, 25, 38, 0.5), 0 4px 20px rgba(103, 92, 194, 0.3)",
            num(self.rotate_y / 5.0),
            num(self.rotate_x / 5.0)
        )
    }

    /// Translation of the `index`-th drifting child.
    pub fn drift(&self, index: usize) -> (f64, f64) {
        let depth = 1.0 + index as f64 * 0.5;
        (
            self.offset_x / (12.0 * depth),
            self.offset_y / (12.0 * depth),
        )
    }

    pub fn drift_transform(&self, index: usize) -> String {
        let (x, y) = self.drift(index);
        format!("translate({}px, {}px)", num(x), num(y))
    }
}

impl Default for Tilt {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> CardBox {
        CardBox::new(100.0, 200.0, 300.0, 400.0)
    }

    #[test]
    fn test_center_is_neutral_rotation() {
        let config = TiltConfig::default();
        let tilt = Tilt::at_pointer(250.0, 400.0, card(), &config);
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
        assert_eq!(tilt.drift(0), (0.0, 0.0));
    }

    #[test]
    fn test_rotation_is_linear_in_offset() {
        let config = TiltConfig {
            divisor: 15.0,
            ..TiltConfig::default()
        };
        // 30px right of and 60px below center.
        let tilt = Tilt::at_pointer(280.0, 460.0, card(), &config);
        assert_eq!(tilt.rotate_x, 4.0);
        assert_eq!(tilt.rotate_y, -2.0);
    }

    #[test]
    fn test_larger_divisor_is_subtler() {
        let soft = TiltConfig {
            divisor: 20.0,
            ..TiltConfig::default()
        };
        let sharp = TiltConfig {
            divisor: 10.0,
            ..TiltConfig::default()
        };
        let a = Tilt::at_pointer(100.0, 200.0, card(), &soft);
        let b = Tilt::at_pointer(100.0, 200.0, card(), &sharp);
        assert!(a.rotate_x.abs() < b.rotate_x.abs());
        assert!(a.rotate_y.abs() < b.rotate_y.abs());
    }

    #[test]
    fn test_neutral_transform() {
        let config = TiltConfig::default();
        assert_eq!(
            Tilt::NEUTRAL.transform(&config),
            "perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1)"
        );
        assert!(Tilt::NEUTRAL.is_neutral());
        assert_eq!(Tilt::NEUTRAL.shadow(), RESTING_SHADOW);
        assert_eq!(Tilt::NEUTRAL.drift_transform(2), "translate(0px, 0px)");
    }

    #[test]
    fn test_hover_transform() {
        let config = TiltConfig {
            divisor: 15.0,
            hover_scale: 1.05,
            ..TiltConfig::default()
        };
        let tilt = Tilt::at_pointer(280.0, 460.0, card(), &config);
        assert_eq!(
            tilt.transform(&config),
            "perspective(1000px) rotateX(4deg) rotateY(-2deg) scale3d(1.05, 1.05, 1.05)"
        );
        assert!(tilt.shadow().starts_with("-0.4px 0.8px 20px"));
    }

    #[test]
    fn test_deeper_children_drift_less() {
        let tilt = Tilt::at_pointer(370.0, 400.0, card(), &TiltConfig::default());
        assert_eq!(tilt.drift(0), (10.0, 0.0));
        let (x1, _) = tilt.drift(1);
        let (x2, _) = tilt.drift(2);
        assert!(x1 < 10.0 && x2 < x1);
    }
}
