//! Animated visual properties and their CSS rendering.

/// A property the motion engine knows how to interpolate.
///
/// Variant order is the order in which properties are stored and rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Prop {
    Opacity,
    /// Horizontal offset in pixels.
    X,
    /// Vertical offset in pixels.
    Y,
    /// Vertical offset as a percentage of the element's own height.
    YPercent,
    /// 2D rotation in degrees.
    Rotate,
    /// 3D rotation around the X axis in degrees.
    RotateX,
    /// 3D rotation around the Y axis in degrees.
    RotateY,
    Scale,
    /// Vertical background position in percent.
    BackgroundY,
}

impl Prop {
    /// Value the property has when no style is applied.
    pub fn neutral(self) -> f64 {
        match self {
            Self::Opacity | Self::Scale => 1.0,
            Self::BackgroundY => 50.0,
            _ => 0.0,
        }
    }
}

/// A sparse set of property values.
///
/// Properties that are not set render nothing and interpolate from their
/// [`Prop::neutral`] value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pose {
    values: Vec<(Prop, f64)>,
}

impl Pose {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `prop` to `value`, replacing any previous value.
    pub fn set(mut self, prop: Prop, value: f64) -> Self {
        match self.values.binary_search_by_key(&prop, |(p, _)| *p) {
            Ok(i) => self.values[i].1 = value,
            Err(i) => self.values.insert(i, (prop, value)),
        }
        self
    }

    pub fn opacity(self, value: f64) -> Self {
        self.set(Prop::Opacity, value)
    }

    pub fn x(self, value: f64) -> Self {
        self.set(Prop::X, value)
    }

    pub fn y(self, value: f64) -> Self {
        self.set(Prop::Y, value)
    }

    pub fn y_percent(self, value: f64) -> Self {
        self.set(Prop::YPercent, value)
    }

    pub fn rotate(self, value: f64) -> Self {
        self.set(Prop::Rotate, value)
    }

    pub fn rotate_x(self, value: f64) -> Self {
        self.set(Prop::RotateX, value)
    }

    pub fn rotate_y(self, value: f64) -> Self {
        self.set(Prop::RotateY, value)
    }

    pub fn scale(self, value: f64) -> Self {
        self.set(Prop::Scale, value)
    }

    pub fn background_y(self, value: f64) -> Self {
        self.set(Prop::BackgroundY, value)
    }

    pub fn get(&self, prop: Prop) -> Option<f64> {
        self.values
            .binary_search_by_key(&prop, |(p, _)| *p)
            .ok()
            .map(|i| self.values[i].1)
    }

    /// Value of `prop`, falling back to its neutral value.
    pub fn value(&self, prop: Prop) -> f64 {
        self.get(prop).unwrap_or_else(|| prop.neutral())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Interpolate between two poses.
    ///
    /// Every property present in either pose is present in the result.
    /// Properties missing on one side use that side's neutral value, so a
    /// `to` pose of `{ y: 0 }` animates from whatever `from` says.
    pub fn lerp(from: &Pose, to: &Pose, progress: f64) -> Pose {
        let mut out = Pose::new();
        for &(prop, _) in from.values.iter().chain(to.values.iter()) {
            if out.get(prop).is_some() {
                continue;
            }
            let a = from.value(prop);
            let b = to.get(prop).unwrap_or(a);
            out = out.set(prop, a + (b - a) * progress);
        }
        out
    }

    /// Render the pose as CSS declarations, in a stable order.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut decls = Vec::new();
        if let Some(opacity) = self.get(Prop::Opacity) {
            decls.push(("opacity", num(opacity)));
        }
        if let Some(transform) = self.transform() {
            decls.push(("transform", transform));
        }
        if let Some(bg) = self.get(Prop::BackgroundY) {
            decls.push(("background-position", format!("50% {}%", num(bg))));
        }
        decls
    }

    fn transform(&self) -> Option<String> {
        let mut parts = Vec::new();
        if self.get(Prop::YPercent).is_some() {
            parts.push(format!("translateY({}%)", num(self.value(Prop::YPercent))));
        }
        if self.get(Prop::X).is_some() || self.get(Prop::Y).is_some() {
            parts.push(format!(
                "translate3d({}px, {}px, 0px)",
                num(self.value(Prop::X)),
                num(self.value(Prop::Y))
            ));
        }
        if self.get(Prop::RotateX).is_some() || self.get(Prop::RotateY).is_some() {
            parts.push(format!(
                "perspective(1000px) rotateX({}deg) rotateY({}deg)",
                num(self.value(Prop::RotateX)),
                num(self.value(Prop::RotateY))
            ));
        }
        if let Some(rotate) = self.get(Prop::Rotate) {
            parts.push(format!("rotate({}deg)", num(rotate)));
        }
        if let Some(scale) = self.get(Prop::Scale) {
            parts.push(format!("scale({})", num(scale)));
        }

        (!parts.is_empty()).then(|| parts.join(" "))
    }
}

/// Format a CSS number with at most three decimals.
pub(crate) fn num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // Avoid rendering "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_and_orders() {
        let pose = Pose::new().y(10.0).opacity(0.0).y(20.0);
        assert_eq!(pose.get(Prop::Y), Some(20.0));
        assert_eq!(pose.get(Prop::Opacity), Some(0.0));
        assert_eq!(pose.get(Prop::Scale), None);
        assert_eq!(pose.value(Prop::Scale), 1.0);
    }

    #[test]
    fn test_lerp_midpoint() {
        let from = Pose::new().opacity(0.0).y(40.0);
        let to = Pose::new().opacity(1.0).y(0.0);
        let mid = Pose::lerp(&from, &to, 0.5);
        assert_eq!(mid.get(Prop::Opacity), Some(0.5));
        assert_eq!(mid.get(Prop::Y), Some(20.0));
    }

    #[test]
    fn test_lerp_missing_side_uses_neutral() {
        // `to` only: animates from the neutral value.
        let to = Pose::new().y(200.0).opacity(0.7);
        let quarter = Pose::lerp(&Pose::new(), &to, 0.25);
        assert_eq!(quarter.get(Prop::Y), Some(50.0));
        assert!((quarter.value(Prop::Opacity) - 0.925).abs() < 1e-12);

        // `from` only: holds the from value.
        let from = Pose::new().scale(0.0);
        let held = Pose::lerp(&from, &Pose::new(), 0.5);
        assert_eq!(held.get(Prop::Scale), Some(0.0));
    }

    #[test]
    fn test_declarations() {
        let pose = Pose::new().opacity(0.5).y(20.0);
        assert_eq!(
            pose.declarations(),
            vec![
                ("opacity", "0.5".to_string()),
                ("transform", "translate3d(0px, 20px, 0px)".to_string()),
            ]
        );
    }

    #[test]
    fn test_transform_composition() {
        let pose = Pose::new()
            .y(50.0)
            .rotate_x(15.0)
            .rotate_y(-10.0)
            .scale(0.9);
        assert_eq!(
            pose.transform().as_deref(),
            Some("translate3d(0px, 50px, 0px) perspective(1000px) rotateX(15deg) rotateY(-10deg) scale(0.9)")
        );
    }

    #[test]
    fn test_background_and_percent() {
        let pose = Pose::new().background_y(0.0).y_percent(-10.0);
        assert_eq!(
            pose.declarations(),
            vec![
                ("transform", "translateY(-10%)".to_string()),
                ("background-position", "50% 0%".to_string()),
            ]
        );
    }

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(40.0), "40");
        assert_eq!(num(0.12345), "0.123");
        assert_eq!(num(-0.0001), "0");
    }
}
