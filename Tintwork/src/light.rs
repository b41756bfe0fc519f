//! Seam to the host lighting component
//!
//! The host owns the light; this crate only reads its color to seed an editor
//! and writes a confirmed color back, optionally to every symmetry counterpart.

use crate::color::NormalizedColor;

/// A host light exposing mutable red/green/blue intensities.
pub trait LightComponent {
    /// Current light color.
    fn color(&self) -> NormalizedColor;

    /// Overwrite the light color.
    fn set_color(&mut self, color: NormalizedColor);
}

/// A bare color is the simplest light: it stores what it is given.
impl LightComponent for NormalizedColor {
    fn color(&self) -> NormalizedColor {
        *self
    }

    fn set_color(&mut self, color: NormalizedColor) {
        *self = color;
    }
}

/// Write `color` to a part's light and, if requested, to its symmetry counterparts.
///
/// `None` entries stand for parts without a light component and are skipped.
/// Returns the number of lights written.
pub fn apply_to_group<'a, L, I>(
    color: NormalizedColor,
    primary: Option<&mut L>,
    counterparts: I,
    include_symmetry: bool,
) -> usize
where
    L: LightComponent + ?Sized + 'a,
    I: IntoIterator<Item = Option<&'a mut L>>,
{
    let mut written = 0;

    if include_symmetry {
        for light in counterparts.into_iter().flatten() {
            light.set_color(color);
            written += 1;
        }
    }

    if let Some(light) = primary {
        light.set_color(color);
        written += 1;
    }

    tracing::debug!("Applied {} to {} light(s)", color, written);
    written
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct ModuleLight {
        light_r: f32,
        light_g: f32,
        light_b: f32,
    }

    impl LightComponent for ModuleLight {
        fn color(&self) -> NormalizedColor {
            NormalizedColor::new(self.light_r, self.light_g, self.light_b)
        }

        fn set_color(&mut self, color: NormalizedColor) {
            self.light_r = color.r;
            self.light_g = color.g;
            self.light_b = color.b;
        }
    }

    #[test]
    fn test_apply_fans_out_to_counterparts() {
        let color = NormalizedColor::new(0.2, 0.35, 0.1);
        let mut primary = ModuleLight::default();
        let mut left = ModuleLight::default();
        let mut right = ModuleLight::default();

        let written = apply_to_group(
            color,
            Some(&mut primary),
            [Some(&mut left), None, Some(&mut right)],
            true,
        );

        assert_eq!(written, 3);
        assert_eq!(primary.color(), color);
        assert_eq!(left.color(), color);
        assert_eq!(right.color(), color);
    }

    #[test]
    fn test_apply_without_symmetry_leaves_counterparts() {
        let color = NormalizedColor::new(1.0, 0.0, 0.0);
        let mut primary = ModuleLight::default();
        let mut sibling = ModuleLight::default();

        let written = apply_to_group(color, Some(&mut primary), [Some(&mut sibling)], false);

        assert_eq!(written, 1);
        assert_eq!(primary.color(), color);
        assert_eq!(sibling.color(), NormalizedColor::default());
    }

    #[test]
    fn test_apply_missing_primary_still_reaches_siblings() {
        let color = NormalizedColor::new(0.5, 0.5, 0.5);
        let mut sibling = NormalizedColor::default();

        let written = apply_to_group(color, None, [Some(&mut sibling)], true);

        assert_eq!(written, 1);
        assert_eq!(sibling, color);
    }

    #[test]
    fn test_apply_through_trait_objects() {
        let color = NormalizedColor::new(0.1, 0.2, 0.3);
        let mut a = ModuleLight::default();
        let mut b = NormalizedColor::default();
        let siblings: Vec<Option<&mut dyn LightComponent>> = vec![Some(&mut b)];

        let written = apply_to_group(color, Some(&mut a as &mut dyn LightComponent), siblings, true);

        assert_eq!(written, 2);
        assert_eq!(a.color(), color);
        assert_eq!(b, color);
    }
}
