use super::dto::RandomSample;
use crate::domain::{locode::repository::LocodeRepository, shared::sampling::SampleRequest};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use std::sync::Arc;

pub struct RandomLocodesUseCase {
    repository: Arc<dyn LocodeRepository>,
}

impl RandomLocodesUseCase {
    pub fn new(repository: Arc<dyn LocodeRepository>) -> Self {
        Self { repository }
    }

    /// Shuffle every stored locode with an RNG seeded from `seed` and keep the
    /// first `request.count` of them.
    ///
    /// Keys are sorted before shuffling so equal seeds over equal stores draw
    /// the same sample.
    pub fn execute(&self, request: SampleRequest, seed: u64) -> RandomSample {
        let mut codes = self.repository.codes();
        codes.sort_unstable();

        let mut rng = StdRng::seed_from_u64(seed);
        codes.shuffle(&mut rng);
        codes.truncate(request.clamp_to(codes.len()));

        RandomSample { codes }
    }
}
