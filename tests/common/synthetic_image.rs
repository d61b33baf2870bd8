use gray_engine::PixelBuffer;

/// Deterministic pseudo-random interleaved image (xorshift).
pub fn noise_image(width: usize, height: usize, channels: usize, seed: u32) -> PixelBuffer {
    assert!(seed != 0, "xorshift seed must be non-zero");
    let mut state = seed;
    let data = (0..width * height * channels)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect();
    PixelBuffer::new(width, height, channels, data).expect("dimensions match data")
}

/// Single-threaded reference transform.
pub fn reference_grayscale(img: &PixelBuffer) -> Vec<u8> {
    let channels = gray_engine::image::ImageView::channels(img);
    let mut out = img.as_bytes().to_vec();
    gray_engine::worker::grayscale_in_place(&mut out, channels);
    out
}
