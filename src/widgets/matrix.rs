use rand::Rng;

pub const MATRIX_GLYPHS: &str =
    "アカサタナハマヤラワイキシチニヒミリウクスツヌフムユルエケセテネヘメレオコソトノホモヨロン0123456789ABCDEF$#@%&";

/// Fill drawn over the whole canvas each frame; the low alpha leaves a trail.
pub const TRAIL_FILL: &str = "rgba(5, 5, 16, 0.08)";
pub const GLYPH_FILL: &str = "#00f3ff";

/// Probability that a column past the bottom restarts on a given frame.
pub const RESET_CHANCE: f64 = 0.025;

#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub x: f64,
    pub y: f64,
}

/// Column state of the falling-glyph background.
#[derive(Debug, Clone)]
pub struct MatrixRain {
    font_size: f64,
    height: f64,
    drops: Vec<u32>,
    glyphs: Vec<char>,
}

impl MatrixRain {
    pub fn new(width: f64, height: f64, font_size: f64) -> Self {
        let mut rain = Self {
            font_size: font_size.max(1.0),
            height: 0.0,
            drops: Vec::new(),
            glyphs: MATRIX_GLYPHS.chars().collect(),
        };
        rain.resize(width, height);
        rain
    }

    /// Recompute the column count. Existing columns keep their position.
    pub fn resize(&mut self, width: f64, height: f64) {
        let columns = (width.max(0.0) / self.font_size).floor() as usize;
        self.drops.resize(columns, 1);
        self.height = height.max(0.0);
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    /// Advance every column by one row and return the glyphs to draw.
    pub fn frame<R: Rng>(&mut self, rng: &mut R) -> Vec<Glyph> {
        let mut out = Vec::with_capacity(self.drops.len());
        for (column, drop) in self.drops.iter_mut().enumerate() {
            let ch = self.glyphs[rng.gen_range(0..self.glyphs.len())];
            let y = f64::from(*drop) * self.font_size;
            out.push(Glyph {
                ch,
                x: column as f64 * self.font_size,
                y,
            });
            if y > self.height && rng.gen::<f64>() < RESET_CHANCE {
                *drop = 0;
            }
            *drop += 1;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn one_column_per_font_width() {
        let rain = MatrixRain::new(140.0, 100.0, 14.0);
        assert_eq!(rain.columns(), 10);
        let rain = MatrixRain::new(13.0, 100.0, 14.0);
        assert_eq!(rain.columns(), 0);
    }

    #[test]
    fn frame_emits_one_glyph_per_column() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut rain = MatrixRain::new(70.0, 100.0, 14.0);
        let glyphs = rain.frame(&mut rng);
        assert_eq!(glyphs.len(), 5);
        for (column, glyph) in glyphs.iter().enumerate() {
            assert_eq!(glyph.x, column as f64 * 14.0);
            assert_eq!(glyph.y, 14.0);
            assert!(MATRIX_GLYPHS.contains(glyph.ch));
        }
        assert!(rain.drops().iter().all(|d| *d == 2));
    }

    #[test]
    fn columns_only_reset_after_leaving_the_canvas() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut rain = MatrixRain::new(280.0, 140.0, 14.0);
        let mut resets = 0;
        for _ in 0..2_000 {
            let before = rain.drops().to_vec();
            rain.frame(&mut rng);
            for (old, new) in before.iter().zip(rain.drops()) {
                if *new == 1 {
                    assert!(f64::from(*old) * 14.0 > 140.0);
                    resets += 1;
                } else {
                    assert_eq!(*new, old + 1);
                }
            }
        }
        assert!(resets > 0);
    }

    #[test]
    fn resize_keeps_existing_columns() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut rain = MatrixRain::new(28.0, 100.0, 14.0);
        rain.frame(&mut rng);
        rain.resize(56.0, 100.0);
        assert_eq!(rain.drops(), &[2, 2, 1, 1]);
    }
}
