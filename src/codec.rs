use image::{Rgba, RgbaImage};

use crate::constants::{ALPHA_CHANNEL, CARRIER_CHANNEL, OPAQUE_ALPHA};

pub fn encode(bytes: &[u8]) -> Option<RgbaImage> {
    if bytes.is_empty() {
        return None;
    }

    let side = grid_side(bytes.len());
    let mut image = RgbaImage::new(side, side);

    for (index, &byte) in bytes.iter().enumerate() {
        let mut pixel = Rgba([0, 0, 0, 0]);
        pixel[CARRIER_CHANNEL] = byte;
        pixel[ALPHA_CHANNEL] = OPAQUE_ALPHA;

        let index = index as u32;
        image.put_pixel(index % side, index / side, pixel);
    }

    Some(image)
}

pub fn decode(image: &RgbaImage) -> Vec<u8> {
    image
        .pixels()
        .take_while(|pixel| pixel[ALPHA_CHANNEL] != 0)
        .map(|pixel| pixel[CARRIER_CHANNEL])
        .collect()
}

fn grid_side(len: usize) -> u32 {
    let root = len.isqrt();
    if root * root == len {
        root as u32
    } else {
        root as u32 + 1
    }
}
