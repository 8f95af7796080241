use crate::image::{GrayImageU8, RgbImageU8};

// BT.601 weights in Q14 fixed point.
const R_WEIGHT: u32 = 4899;
const G_WEIGHT: u32 = 9617;
const B_WEIGHT: u32 = 1868;
const SHIFT: u32 = 14;

/// Luma of an RGB buffer, `round(0.299 R + 0.587 G + 0.114 B)`.
pub fn grayscale(rgb: &RgbImageU8) -> GrayImageU8 {
    let data = rgb
        .data
        .chunks_exact(3)
        .map(|px| {
            let y = u32::from(px[0]) * R_WEIGHT
                + u32::from(px[1]) * G_WEIGHT
                + u32::from(px[2]) * B_WEIGHT;
            ((y + (1 << (SHIFT - 1))) >> SHIFT) as u8
        })
        .collect();
    GrayImageU8 {
        w: rgb.w,
        h: rgb.h,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luma_of_extremes() {
        let mut rgb = RgbImageU8::new(3, 1);
        rgb.put_pixel(0, 0, [255, 255, 255]);
        rgb.put_pixel(1, 0, [255, 0, 0]);
        let g = grayscale(&rgb);
        assert_eq!(g.data, vec![255, 76, 0]);
    }
}
