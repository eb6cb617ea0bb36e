use rand::SeedableRng;
use rand_chacha::ChaChaRng;

pub trait RangeRng {
    fn gen_range(&mut self, range: std::ops::Range<usize>) -> usize;
}

impl<R: rand::Rng> RangeRng for R {
    fn gen_range(&mut self, range: std::ops::Range<usize>) -> usize {
        rand::Rng::gen_range(self, range)
    }
}

/// Returns a ChaCha generator, seeded when a seed is given so that random
/// opponents can be reproduced
pub fn seeded(seed: Option<u64>) -> ChaChaRng {
    match seed {
        Some(s) => ChaChaRng::seed_from_u64(s),
        None => ChaChaRng::from_entropy(),
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Replays a fixed list of values, for tests that need to pin down a
/// random choice
#[derive(Debug)]
pub struct ScriptedRng {
    index: usize,
    data: Vec<usize>,
}

impl ScriptedRng {
    /// Panics if `data` is empty, since there would be nothing to replay
    pub fn new(data: Vec<usize>) -> Self {
        assert!(!data.is_empty(), "ScriptedRng needs at least one value");
        Self { index: 0, data }
    }
}

impl RangeRng for ScriptedRng {
    fn gen_range(&mut self, range: std::ops::Range<usize>) -> usize {
        let v = self.data[self.index % self.data.len()];
        assert!(range.contains(&v), "{} is outside {:?}", v, range);
        self.index += 1;
        v
    }
}
