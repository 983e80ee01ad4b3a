use crate::domain::locode::{
    entity::Location, errors::DomainError, repository::LocodeRepository,
};
use std::sync::Arc;

pub struct LookupLocodeUseCase {
    repository: Arc<dyn LocodeRepository>,
}

impl LookupLocodeUseCase {
    pub fn new(repository: Arc<dyn LocodeRepository>) -> Self {
        Self { repository }
    }

    pub fn execute(&self, locode: &str) -> Result<Location, DomainError> {
        if locode.is_empty() {
            return Err(DomainError::ValidationError(
                "Missing 'locode' parameter".into(),
            ));
        }

        self.repository
            .get(locode)
            .ok_or_else(|| DomainError::NotFound(format!("Unknown locode {}", locode)))
    }
}
