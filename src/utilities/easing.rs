//src/utilities/easing.rs

// easing and interpolation helpers for the cube tweens

use nannou::prelude::*;

/// Quadratic ease-out: fast start, slow settle.
pub fn ease_out_quad(x: f32) -> f32 {
    1.0 - (1.0 - x) * (1.0 - x)
}

pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

pub fn lerp_color(start: Rgb<f32>, end: Rgb<f32>, t: f32) -> Rgb<f32> {
    rgb(
        lerp(start.red, end.red, t),
        lerp(start.green, end.green, t),
        lerp(start.blue, end.blue, t),
    )
}

/// Converts a packed 0xRRGGBB value into a normalized color.
pub fn rgb_from_hex(hex: u32) -> Rgb<f32> {
    rgb(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

/// Parses "#rrggbb" (the leading '#' is optional).
pub fn parse_hex_color(text: &str) -> Option<Rgb<f32>> {
    let digits = text.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok().map(rgb_from_hex)
}

pub fn color_to_array(color: Rgb<f32>) -> [f32; 3] {
    [color.red, color.green, color.blue]
}

pub fn color_from_array(values: [f32; 3]) -> Rgb<f32> {
    rgb(values[0], values[1], values[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_quad_endpoints() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
        assert!((ease_out_quad(0.5) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_ease_out_quad_is_increasing() {
        let mut last = ease_out_quad(0.0);
        for step in 1..=100 {
            let value = ease_out_quad(step as f32 / 100.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn test_lerp_color_midpoint() {
        let color = lerp_color(rgb(0.0, 0.2, 1.0), rgb(1.0, 0.4, 0.0), 0.5);
        assert!((color.red - 0.5).abs() < 1e-6);
        assert!((color.green - 0.3).abs() < 1e-6);
        assert!((color.blue - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_parse_hex_color() {
        let color = parse_hex_color("#ff8000").unwrap();
        assert_eq!(color.red, 1.0);
        assert!((color.green - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(color.blue, 0.0);

        assert!(parse_hex_color("ff8000").is_some());
        assert!(parse_hex_color("#ff80").is_none());
        assert!(parse_hex_color("#gg0000").is_none());
        assert!(parse_hex_color("#+12345").is_none());
        assert!(parse_hex_color("#-12345").is_none());
    }
}
