pub mod airplanes;
pub mod manufacturers;
pub mod search;

pub use airplanes::{AirplaneDto, DeleteAllAirplanesDto};
pub use manufacturers::{AirplaneSummaryDto, ManufacturerDto, ManufacturerWithAirplanesDto};
pub use search::SearchResultsDto;

/// Result of an upserting create: a fresh row, or an existing row with the
/// same source fields that was overwritten.
#[derive(Debug, Clone)]
pub enum WriteOutcome<T> {
    Created(T),
    Updated(T),
}

impl<T> WriteOutcome<T> {
    pub const fn was_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Self::Created(value) | Self::Updated(value) => value,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> WriteOutcome<U> {
        match self {
            Self::Created(value) => WriteOutcome::Created(f(value)),
            Self::Updated(value) => WriteOutcome::Updated(f(value)),
        }
    }
}
