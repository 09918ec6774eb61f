//! Color helpers for shading scenes.

use folio_core::Rgb;

/// Scale the HSL lightness of `color` by `factor`, keeping hue and saturation.
pub fn shade(color: Rgb, factor: f32) -> Rgb {
    let (h, s, l) = rgb_to_hsl(color);
    hsl_to_rgb(h, s, (l * factor).clamp(0.0, 1.0))
}

/// Convert RGB to HSL, hue in degrees.
pub fn rgb_to_hsl(color: Rgb) -> (f32, f32, f32) {
    let r = color.0 as f32 / 255.0;
    let g = color.1 as f32 / 255.0;
    let b = color.2 as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h * 60.0, s, l)
}

/// Convert HSL to RGB, hue in degrees.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb {
    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return Rgb(v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h = h / 360.0;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    Rgb(
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Rgb, b: Rgb) -> bool {
        let d = |x: u8, y: u8| (x as i16 - y as i16).abs() <= 1;
        d(a.0, b.0) && d(a.1, b.1) && d(a.2, b.2)
    }

    #[test]
    fn test_hsl_round_trip() {
        for color in [
            Rgb::hex(0x4ADE80),
            Rgb::hex(0xBC002D),
            Rgb::hex(0x333333),
            Rgb::hex(0x6366F1),
        ] {
            let (h, s, l) = rgb_to_hsl(color);
            assert!(close(hsl_to_rgb(h, s, l), color), "{color:?}");
        }
    }

    #[test]
    fn test_shade_darkens() {
        let base = Rgb::hex(0x4ADE80);
        let dark = shade(base, 0.5);
        assert!(dark.1 < base.1);
        assert_eq!(shade(base, 0.0), Rgb(0, 0, 0));
    }
}
