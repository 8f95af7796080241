/// Convert one RGB pixel to 8-bit HSV.
///
/// Hue is expressed in half-degrees (`0..180`), saturation and value in
/// `0..=255`. Achromatic pixels get hue 0.
pub fn rgb_to_hsv(rgb: [u8; 3]) -> [u8; 3] {
    let [r, g, b] = rgb.map(i32::from);
    let v = r.max(g).max(b);
    let vmin = r.min(g).min(b);
    let diff = v - vmin;

    let s = if v == 0 {
        0
    } else {
        (diff as f32 * 255.0 / v as f32).round() as i32
    };

    let h = if diff == 0 {
        0
    } else {
        let sector = if v == r {
            (g - b) as f32 / diff as f32
        } else if v == g {
            (b - r) as f32 / diff as f32 + 2.0
        } else {
            (r - g) as f32 / diff as f32 + 4.0
        };
        // 60 degrees per sector, halved to fit a byte
        let mut half_deg = (sector * 30.0).round() as i32;
        if half_deg < 0 {
            half_deg += 180;
        }
        if half_deg >= 180 {
            half_deg -= 180;
        }
        half_deg
    };

    [h as u8, s as u8, v as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries() {
        assert_eq!(rgb_to_hsv([255, 0, 0]), [0, 255, 255]);
        assert_eq!(rgb_to_hsv([0, 255, 0]), [60, 255, 255]);
        assert_eq!(rgb_to_hsv([0, 0, 255]), [120, 255, 255]);
    }

    #[test]
    fn grays_have_no_hue_or_saturation() {
        assert_eq!(rgb_to_hsv([0, 0, 0]), [0, 0, 0]);
        assert_eq!(rgb_to_hsv([230, 230, 230]), [0, 0, 230]);
    }

    #[test]
    fn lane_yellow_lands_in_yellow_band() {
        // typical painted yellow
        let [h, s, v] = rgb_to_hsv([230, 200, 40]);
        assert!((15..=30).contains(&h), "hue {h}");
        assert!(s >= 100, "sat {s}");
        assert!(v >= 150, "val {v}");
    }

    #[test]
    fn magenta_wraps_below_180() {
        let [h, _, _] = rgb_to_hsv([255, 0, 1]);
        assert!(h < 180);
    }
}
