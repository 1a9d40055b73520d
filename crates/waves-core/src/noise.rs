//! Seeded 2D coherent noise used to drive the organic drift of grid points.
//!
//! Classic improved Perlin noise over a shuffled permutation table. The table
//! is built once from the seed and never mutated, so a `NoiseField` is a pure
//! function of its inputs after construction and can be shared read-only
//! across every point of the grid each frame.

/// The twelve gradient vectors of improved Perlin noise. Only x/y matter for
/// 2D sampling; the z component is kept so the set stays the canonical one.
const GRAD3: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// Park–Miller linear congruential generator, kept in f64 so any finite seed
/// (conventionally a uniform random in [0,1)) produces a valid stream.
struct SeedStream {
    state: f64,
}

impl SeedStream {
    fn new(seed: f64) -> Self {
        Self { state: seed }
    }

    /// Next value in [0, 1). `rem_euclid` keeps negative seeds in range.
    fn next(&mut self) -> f64 {
        self.state = (self.state * 16807.0).rem_euclid(2_147_483_647.0);
        self.state / 2_147_483_647.0
    }
}

/// Seeded 2D gradient-noise field. `sample` is deterministic for a fixed seed
/// and continuous in both arguments.
pub struct NoiseField {
    /// Permutation table, doubled to 512 entries so corner lookups never wrap.
    perm: [u8; 512],
    /// `perm[i] % 12`, precomputed for gradient selection.
    perm_mod12: [u8; 512],
}

impl NoiseField {
    /// Build the permutation table from `seed` via a Fisher–Yates shuffle
    /// driven by the LCG stream. Non-finite seeds are the caller's bug.
    pub fn new(seed: f64) -> Self {
        let mut stream = SeedStream::new(seed);
        let mut base = [0u8; 256];
        for (i, v) in base.iter_mut().enumerate() {
            *v = i as u8;
        }
        for i in (1..256usize).rev() {
            let j = (stream.next() * (i as f64 + 1.0)) as usize;
            base.swap(i, j);
        }

        let mut perm = [0u8; 512];
        let mut perm_mod12 = [0u8; 512];
        for i in 0..512 {
            perm[i] = base[i & 255];
            perm_mod12[i] = perm[i] % 12;
        }
        Self { perm, perm_mod12 }
    }

    /// Sample the field at `(x, y)`. Output lies in [-1, 1].
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let xf = x.floor();
        let yf = y.floor();
        // Cell coordinates wrapped to the table size.
        let xi = (xf as i64 & 255) as usize;
        let yi = (yf as i64 & 255) as usize;
        // Fractional offsets within the cell.
        let x = x - xf;
        let y = y - yf;

        let u = fade(x);
        let v = fade(y);

        // Gradient indices for the four cell corners.
        let g00 = self.perm_mod12[xi + self.perm[yi] as usize] as usize;
        let g01 = self.perm_mod12[xi + self.perm[yi + 1] as usize] as usize;
        let g10 = self.perm_mod12[xi + 1 + self.perm[yi] as usize] as usize;
        let g11 = self.perm_mod12[xi + 1 + self.perm[yi + 1] as usize] as usize;

        let n00 = dot2(&GRAD3[g00], x, y);
        let n01 = dot2(&GRAD3[g01], x, y - 1.0);
        let n10 = dot2(&GRAD3[g10], x - 1.0, y);
        let n11 = dot2(&GRAD3[g11], x - 1.0, y - 1.0);

        let nx0 = lerp(n00, n10, u);
        let nx1 = lerp(n01, n11, u);
        lerp(nx0, nx1, v)
    }
}

/// Quintic fade curve `6t^5 - 15t^4 + 10t^3`; zero first and second
/// derivatives at the cell boundaries.
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
fn dot2(g: &[f64; 3], x: f64, y: f64) -> f64 {
    g[0] * x + g[1] * y
}
