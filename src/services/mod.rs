//! Business logic services

pub mod book_copies;
pub mod validation;

use std::sync::Arc;

use crate::{config::ValidationConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub book_copies: book_copies::BookCopiesService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, validation_config: &ValidationConfig) -> Self {
        let repository = Arc::new(repository);
        Self {
            book_copies: book_copies::BookCopiesService::new(
                repository.clone(),
                repository,
                validation::ValidationRules::from(validation_config),
            ),
        }
    }
}
