/// Global thresholding with Otsu's method
///
/// Returns the level that maximises between-class variance; pixels strictly
/// below it form the dark class.
pub fn otsu_threshold(gray: &[u8]) -> u8 {
    let mut histogram = [0u64; 256];
    for &pixel in gray {
        histogram[pixel as usize] += 1;
    }

    let total = gray.len() as f64;
    let sum_all: f64 = histogram
        .iter()
        .enumerate()
        .map(|(level, &count)| level as f64 * count as f64)
        .sum();

    let mut dark_count = 0u64;
    let mut dark_sum = 0f64;
    let mut best_variance = 0f64;
    let mut best = 128u8;

    // Candidate t splits levels [0, t) from [t, 255]
    for t in 1..=255usize {
        dark_count += histogram[t - 1];
        dark_sum += (t - 1) as f64 * histogram[t - 1] as f64;
        let light_count = gray.len() as u64 - dark_count;
        if dark_count == 0 || light_count == 0 {
            continue;
        }

        let dark_mean = dark_sum / dark_count as f64;
        let light_mean = (sum_all - dark_sum) / light_count as f64;
        let variance = (dark_count as f64 / total)
            * (light_count as f64 / total)
            * (dark_mean - light_mean).powi(2);

        if variance > best_variance {
            best_variance = variance;
            best = t as u8;
        }
    }

    best
}
