/// Sample size used when the caller does not ask for a usable one.
pub const DEFAULT_SAMPLE_SIZE: usize = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRequest {
    pub count: usize,
}

impl SampleRequest {
    /// Build a request from the raw `count` query value.
    ///
    /// Anything that is not a positive unsigned integer falls back to `default`.
    pub fn from_raw(raw: Option<&str>, default: usize) -> Self {
        let count = raw
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|v| *v > 0)
            .map(|v| usize::try_from(v).unwrap_or(usize::MAX))
            .unwrap_or(default);
        Self { count }
    }

    /// Number of items to take from a population of `available`.
    pub fn clamp_to(&self, available: usize) -> usize {
        self.count.min(available)
    }
}

impl Default for SampleRequest {
    fn default() -> Self {
        Self {
            count: DEFAULT_SAMPLE_SIZE,
        }
    }
}
