//! Ambient light recoloring

use rand::Rng;
use tracing::info;

/// Linear RGB color, channels in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Convert hue/saturation/value (all in `[0, 1]`) to RGB
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let h = h.rem_euclid(1.0) * 6.0;
        let sector = h.floor();
        let f = h - sector;

        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match sector as u8 {
            0 => Self::new(v, t, p),
            1 => Self::new(q, v, p),
            2 => Self::new(p, v, t),
            3 => Self::new(p, q, v),
            4 => Self::new(t, p, v),
            _ => Self::new(v, p, q),
        }
    }

    /// 8-bit channels
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (quantize(self.r), quantize(self.g), quantize(self.b))
    }

    /// Convert to crossterm color
    pub fn to_crossterm(&self) -> crossterm::style::Color {
        let (r, g, b) = self.to_rgb8();
        crossterm::style::Color::Rgb { r, g, b }
    }
}

/// Point light whose color is re-rolled on demand
#[derive(Debug, Clone)]
pub struct AmbientLight {
    pub color: Color,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self { color: Color::WHITE }
    }
}

impl AmbientLight {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    /// Pick a uniformly random hue at full saturation and value
    pub fn recolor<R: Rng>(&mut self, rng: &mut R) -> Color {
        let hue: f32 = rng.gen_range(0.0..1.0);
        self.color = Color::from_hsv(hue, 1.0, 1.0);
        info!(hue, color = ?self.color, "light recolored");
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(Color::from_hsv(0.0, 1.0, 1.0).to_rgb8(), (255, 0, 0));
        assert_eq!(Color::from_hsv(1.0 / 3.0, 1.0, 1.0).to_rgb8(), (0, 255, 0));
        assert_eq!(Color::from_hsv(2.0 / 3.0, 1.0, 1.0).to_rgb8(), (0, 0, 255));
        assert_eq!(Color::from_hsv(0.5, 0.0, 1.0).to_rgb8(), (255, 255, 255));
    }

    #[test]
    fn test_recolor_is_fully_saturated() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut light = AmbientLight::default();

        for _ in 0..32 {
            let color = light.recolor(&mut rng);
            let max = color.r.max(color.g).max(color.b);
            let min = color.r.min(color.g).min(color.b);
            assert!((max - 1.0).abs() < 0.0001);
            assert!(min.abs() < 0.0001);
            assert_eq!(light.color, color);
        }
    }

    #[test]
    fn test_recolor_is_seed_deterministic() {
        let mut a = AmbientLight::default();
        let mut b = AmbientLight::default();
        let ca = a.recolor(&mut StdRng::seed_from_u64(42));
        let cb = b.recolor(&mut StdRng::seed_from_u64(42));
        assert_eq!(ca, cb);
    }
}
