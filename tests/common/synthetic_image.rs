pub const ASPHALT: [u8; 3] = [90, 90, 90];
pub const YELLOW: [u8; 3] = [230, 200, 40];
pub const WHITE: [u8; 3] = [240, 240, 240];

/// Painted stripe from `p0` to `p1`, `width` pixels across.
#[derive(Clone, Copy, Debug)]
pub struct Stripe {
    pub p0: [f64; 2],
    pub p1: [f64; 2],
    pub width: f64,
    pub color: [u8; 3],
}

impl Stripe {
    fn covers(&self, x: f64, y: f64) -> bool {
        let (dx, dy) = (self.p1[0] - self.p0[0], self.p1[1] - self.p0[1]);
        let len_sq = dx * dx + dy * dy;
        let t = (((x - self.p0[0]) * dx + (y - self.p0[1]) * dy) / len_sq).clamp(0.0, 1.0);
        let (cx, cy) = (self.p0[0] + t * dx - x, self.p0[1] + t * dy - y);
        (cx * cx + cy * cy).sqrt() <= self.width / 2.0
    }
}

/// Uniform RGB frame filled with `color`.
pub fn uniform_rgb(width: usize, height: usize, color: [u8; 3]) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    color.iter().copied().cycle().take(width * height * 3).collect()
}

/// Grey road with the given painted stripes.
pub fn road_rgb(width: usize, height: usize, stripes: &[Stripe]) -> Vec<u8> {
    let mut img = uniform_rgb(width, height, ASPHALT);
    for y in 0..height {
        for x in 0..width {
            if let Some(stripe) = stripes.iter().find(|s| s.covers(x as f64, y as f64)) {
                let i = (y * width + x) * 3;
                img[i..i + 3].copy_from_slice(&stripe.color);
            }
        }
    }
    img
}

/// 960×540 road: a yellow left marking and a white right marking, both
/// inside the default region of interest.
pub fn two_lane_road() -> (usize, usize, Vec<u8>) {
    let (w, h) = (960, 540);
    let stripes = [
        Stripe {
            p0: [150.0, 539.0],
            p1: [420.0, 360.0],
            width: 8.0,
            color: YELLOW,
        },
        Stripe {
            p0: [880.0, 539.0],
            p1: [620.0, 360.0],
            width: 8.0,
            color: WHITE,
        },
    ];
    (w, h, road_rgb(w, h, &stripes))
}
