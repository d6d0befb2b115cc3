//! Id generation for stored records.

use uuid::Uuid;

/// Produces unique string ids for new records.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// UUID v4 generator, the default
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic generator for tests: `id-1`, `id-2`, ...
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
pub struct SequenceGenerator(std::sync::atomic::AtomicU64);

#[cfg(any(test, feature = "test-utils"))]
impl IdGenerator for SequenceGenerator {
    fn generate(&self) -> String {
        let n = self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed) + 1;
        format!("id-{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_ids_are_unique_and_non_empty() {
        let ids = UuidGenerator;
        let a = ids.generate();
        let b = ids.generate();
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn sequence_counts_up() {
        let ids = SequenceGenerator::default();
        assert_eq!(ids.generate(), "id-1");
        assert_eq!(ids.generate(), "id-2");
    }
}
