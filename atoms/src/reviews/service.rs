use super::model::ReviewsSnapshot;

/// Client-side reviews state. Every fetch gets a monotonically increasing
/// generation token; only the latest issued token may land its result, so a
/// slow earlier request can never overwrite a newer one.
#[derive(Debug, Clone, Default)]
pub struct ReviewsFeed {
    pub snapshot: Option<ReviewsSnapshot>,
    pub error: Option<String>,
    pub loading: bool,
    pub refreshing: bool,
    generation: u64,
}

impl ReviewsFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch and take its token. The first load flags `loading`,
    /// a manual refresh flags `refreshing` instead.
    pub fn begin_fetch(&mut self, manual: bool) -> u64 {
        self.generation += 1;
        self.error = None;
        if manual {
            self.refreshing = true;
        } else {
            self.loading = true;
        }
        self.generation
    }

    /// Land a fetch result. Returns false (and changes nothing) when the
    /// token has been superseded by a newer fetch.
    pub fn resolve(&mut self, token: u64, result: Result<ReviewsSnapshot, String>) -> bool {
        if token != self.generation {
            return false;
        }

        self.loading = false;
        self.refreshing = false;
        match result {
            Ok(snapshot) => self.snapshot = Some(snapshot),
            Err(error) => self.error = Some(error),
        }
        true
    }
}
