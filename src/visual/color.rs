use image::Rgb;

pub const STDCOL: [Rgb<u8>; 4] = [
    Rgb([255, 0, 0]),
    Rgb([255, 255, 0]),
    Rgb([0, 0, 255]),
    Rgb([255, 0, 255]),
];

// per-layer colors fading red through green to blue, outermost first
pub fn layer_fade(count: usize) -> Vec<Rgb<u8>> {
    let half = (count / 2).max(1) as f32;
    let step = 255.0 / half;

    let mut r = 255.0f32;
    let mut g = 0.0f32;
    let mut b = 0.0f32;

    let mut res = Vec::with_capacity(count);
    for _ in 0..count {
        // f32 to u8 casts saturate on overshoot
        res.push(Rgb([r as u8, g as u8, b as u8]));

        if r > 0.0 {
            r -= step;
            g += step;
        } else {
            g -= step;
            b += step;
        }
        if r < 0.0 {
            r = 0.0;
        }
        if g < 0.0 {
            g = 0.0;
        }
    }
    res
}

#[cfg(test)]
mod tests {
    use super::layer_fade;

    #[test]
    fn fade_endpoints() {
        let fades = layer_fade(9);
        assert_eq!(fades.len(), 9);

        // starts pure red, loses all red by the midpoint, ends blue-heavy
        assert_eq!(fades[0].0, [255, 0, 0]);
        assert_eq!(fades[4].0[0], 0);
        let last = fades[8].0;
        assert!(last[2] > last[0]);
    }

    #[test]
    fn degenerate_counts() {
        assert!(layer_fade(0).is_empty());
        assert_eq!(layer_fade(1)[0].0, [255, 0, 0]);
    }
}
