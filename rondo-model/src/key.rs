//! Strongly-typed keys for identifying carousel instances.

use uuid::Uuid;

/// Unique key for identifying carousels throughout a host application.
/// Using a strongly-typed key avoids brittle string matching and enables
/// scoped state per carousel instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CarouselKey {
    Articles,
    Projects,
    Team,
    Section(Uuid),
    Custom(&'static str),
}
