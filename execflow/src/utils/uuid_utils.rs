//! Identifier generation.

use uuid::Uuid;

/// Generates a runtime ID (UUID v4) for a new execution frame.
#[must_use]
pub fn generate_runtime_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_ids_are_unique_v4_uuids() {
        let a = generate_runtime_id();
        let b = generate_runtime_id();
        assert_ne!(a, b);
        assert_eq!(Uuid::parse_str(&a).unwrap().get_version_num(), 4);
    }
}
