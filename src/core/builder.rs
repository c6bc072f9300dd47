use crate::domain::model::{Employee, ValidatedInput};

/// Builds the entity to persist. `new_id` is called exactly once.
pub fn build(validated: ValidatedInput, new_id: impl FnOnce() -> String) -> Employee {
    Employee {
        id: new_id(),
        name: validated.name,
        position: validated.position,
        level: validated.level,
    }
}
