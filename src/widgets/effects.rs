pub const CARD_GLOW: &str = "0 0 40px rgba(0, 243, 255, 0.6)";
pub const FOCUS_OUTLINE: &str = "2px solid var(--cyber-blue)";
pub const FOCUS_OUTLINE_OFFSET: &str = "5px";

/// Lines closer than this to the pointer speed up.
pub const LINE_BOOST_RADIUS: f64 = 200.0;
/// How long a boosted line keeps its faster animation.
pub const LINE_BOOST_MS: u32 = 100;

/// Pixel offset of particle `index` for a pointer at normalized `(x, y)`.
pub fn parallax_offset(index: usize, x: f64, y: f64) -> (f64, f64) {
    let speed = 0.02 * (index as f64 + 1.0);
    ((x - 0.5) * 50.0 * speed, (y - 0.5) * 50.0 * speed)
}

pub fn parallax_transform(index: usize, x: f64, y: f64) -> String {
    let (dx, dy) = parallax_offset(index, x, y);
    format!("translate({:.2}px, {:.2}px)", dx, dy)
}

/// Shortened animation duration for a decorative line, or `None` when the
/// line is out of range or already fast.
pub fn boosted_duration(pointer_y: f64, line_top: f64, duration_secs: f64) -> Option<f64> {
    if (pointer_y - line_top).abs() < LINE_BOOST_RADIUS && duration_secs > 10.0 {
        Some(duration_secs * 0.8)
    } else {
        None
    }
}

/// Parse a computed `animation-duration` such as `"15s"` or `"1500ms"`.
pub fn parse_duration_secs(value: &str) -> Option<f64> {
    let value = value.trim();
    if let Some(ms) = value.strip_suffix("ms") {
        ms.trim().parse::<f64>().ok().map(|ms| ms / 1000.0)
    } else {
        value.strip_suffix('s')?.trim().parse().ok()
    }
}

pub fn particle_delay(index: usize) -> String {
    format!("{}s", index * 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_grows_with_particle_index() {
        assert_eq!(parallax_offset(0, 0.5, 0.5), (0.0, 0.0));
        let (x0, y0) = parallax_offset(0, 1.0, 0.0);
        let (x2, y2) = parallax_offset(2, 1.0, 0.0);
        assert!((x0 - 0.5).abs() < 1e-9);
        assert!((y0 + 0.5).abs() < 1e-9);
        assert!((x2 - 1.5).abs() < 1e-9);
        assert!((y2 + 1.5).abs() < 1e-9);
        assert_eq!(parallax_transform(2, 1.0, 0.0), "translate(1.50px, -1.50px)");
    }

    #[test]
    fn only_near_slow_lines_are_boosted() {
        assert_eq!(boosted_duration(300.0, 250.0, 20.0), Some(16.0));
        assert_eq!(boosted_duration(300.0, 550.0, 20.0), None);
        assert_eq!(boosted_duration(300.0, 250.0, 8.0), None);
    }

    #[test]
    fn durations_parse_in_seconds() {
        assert_eq!(parse_duration_secs("15s"), Some(15.0));
        assert_eq!(parse_duration_secs("1500ms"), Some(1.5));
        assert_eq!(parse_duration_secs(""), None);
        assert_eq!(parse_duration_secs("fast"), None);
    }

    #[test]
    fn particles_are_staggered_two_seconds_apart() {
        assert_eq!(particle_delay(0), "0s");
        assert_eq!(particle_delay(3), "6s");
    }
}
