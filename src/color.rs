use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues,
/// starting from a steel blue.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (210.0 + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.6, 0.5);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Per-chart colours
// ---------------------------------------------------------------------------

/// Fill colour for the `index`-th of `total` charts.
pub fn chart_color(index: usize, total: usize) -> Color32 {
    generate_palette(total.max(1))
        .get(index)
        .copied()
        .unwrap_or(Color32::LIGHT_BLUE)
}

/// `color` with opacity `alpha` in `[0, 1]`.
pub fn with_alpha(color: Color32, alpha: f32) -> Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_colours() {
        let p = generate_palette(4);
        assert_eq!(p.len(), 4);
        for i in 0..p.len() {
            for j in i + 1..p.len() {
                assert_ne!(p[i], p[j]);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn out_of_range_index_falls_back() {
        assert_eq!(chart_color(9, 4), Color32::LIGHT_BLUE);
    }

    #[test]
    fn alpha_is_applied() {
        let c = with_alpha(Color32::from_rgb(10, 20, 30), 0.6);
        assert_eq!(c.a(), 153);
        let opaque = with_alpha(Color32::from_rgb(10, 20, 30), 2.0);
        assert_eq!(opaque, Color32::from_rgb(10, 20, 30));
    }
}
