//! Small drawing and animation helpers shared by the scenes

use egui::{Color32, Painter, Pos2};

/// Sine pulse in [0, 1] with the given period in seconds
pub fn pulse(time: f64, period: f64) -> f32 {
    let phase = (time / period) * std::f64::consts::TAU;
    (0.5 + 0.5 * phase.sin()) as f32
}

/// Ease-out cubic, the stage's transition curve
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Scale a color's alpha by `alpha` in [0, 1]
pub fn with_alpha(color: Color32, alpha: f32) -> Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0) as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), a)
}

/// Soft glow: layered translucent circles around a bright core
pub fn glow_circle(painter: &Painter, center: Pos2, radius: f32, color: Color32, intensity: f32) {
    for i in (1..=4).rev() {
        let t = i as f32 / 4.0;
        painter.circle_filled(center, radius * (1.0 + t * 1.6), with_alpha(color, 0.08 * intensity));
    }
    painter.circle_filled(center, radius, with_alpha(color, intensity));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_stays_in_unit_range() {
        for step in 0..200 {
            let value = pulse(step as f64 * 0.13, 2.5);
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        // Fast early, slow late
        assert!(ease_out_cubic(0.5) > 0.5);
        // Clamped outside the unit interval
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn test_with_alpha_clamps() {
        let c = Color32::from_rgb(34, 211, 238);
        assert_eq!(with_alpha(c, 2.0).a(), 255);
        assert_eq!(with_alpha(c, -1.0).a(), 0);
        assert_eq!(with_alpha(c, 1.0).r(), 34);
    }
}
