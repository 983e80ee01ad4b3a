use super::{errors::IngestError, parser::LocodeParser};
use crate::domain::locode::repository::LocodeRepository;
use crate::infrastructure::repositories::memory_locode_repository::MemoryLocodeRepository;
use std::path::PathBuf;

/// Loads an ordered list of sources into one store.
///
/// Later sources overwrite earlier entries with the same locode.
#[derive(Debug, Clone)]
pub struct LocodeLoader {
    sources: Vec<PathBuf>,
    isolate_sources: bool,
}

impl LocodeLoader {
    pub fn new(sources: Vec<PathBuf>) -> Self {
        Self {
            sources,
            isolate_sources: false,
        }
    }

    /// Reset the country context before each source instead of carrying it over.
    pub fn isolate_sources(mut self, isolate: bool) -> Self {
        self.isolate_sources = isolate;
        self
    }

    /// Build a fresh store. Nothing is returned unless every source loaded.
    pub fn load(&self) -> Result<MemoryLocodeRepository, IngestError> {
        let repo = MemoryLocodeRepository::new();
        self.load_into(&repo)?;
        Ok(repo)
    }

    /// Insert every location from every source into `repo` and return the number
    /// of distinct locodes it holds afterwards.
    pub fn load_into(&self, repo: &dyn LocodeRepository) -> Result<usize, IngestError> {
        let mut parser = LocodeParser::new();

        for path in &self.sources {
            if self.isolate_sources {
                parser.reset();
            }

            let outcome = parser
                .parse_path(path)
                .map_err(|source| IngestError::LoadFailed {
                    path: path.clone(),
                    source: Box::new(source),
                })?;

            tracing::debug!(
                source = %path.display(),
                locations = outcome.locations.len(),
                "Merging source into store"
            );
            for location in outcome.locations {
                repo.set(location.locode.clone(), location);
            }
        }

        let count = repo.count();
        tracing::info!(count, sources = self.sources.len(), "Loaded {} locations", count);
        Ok(count)
    }
}
