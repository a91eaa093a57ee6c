use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::value_objects::{SLUG_SEPARATOR, Slug};

/// Derives canonical slugs from one or more human-readable fields.
///
/// Each part is normalized by the injected generator and must keep at least
/// one slug character. The normalized parts are joined in the order given with
/// the slug separator, so `["Airbus", "A320"]` and `["Airbus A320"]` both
/// become `airbus-a320`.
pub struct SlugDeriver {
    generator: Arc<dyn SlugGenerator>,
}

impl SlugDeriver {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    pub fn derive(&self, parts: &[&str]) -> DomainResult<Slug> {
        if parts.is_empty() {
            return Err(DomainError::Validation(
                "slug source fields cannot be empty".into(),
            ));
        }

        let mut segments = Vec::with_capacity(parts.len());
        for part in parts {
            if part.trim().is_empty() {
                return Err(DomainError::Validation(
                    "slug source fields cannot be empty".into(),
                ));
            }
            let segment = self.generator.slugify(part);
            if segment.is_empty() {
                return Err(DomainError::Validation(format!(
                    "`{}` does not contain any slug characters",
                    part.trim()
                )));
            }
            segments.push(segment);
        }

        Slug::new(segments.join(&SLUG_SEPARATOR.to_string()))
    }
}
