use crate::domain::ports::IdGenerator;
use uuid::Uuid;

/// Random (v4) UUIDs, rendered in the hyphenated lowercase form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_uuids() {
        let ids = UuidGenerator;
        let first = ids.next_id();
        let second = ids.next_id();

        assert_ne!(first, second);
        assert!(Uuid::parse_str(&first).is_ok());
        assert_eq!(first.len(), 36);
    }
}
