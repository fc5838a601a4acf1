//! Shared building blocks for the catalog workspace: response types and logging setup.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::ok();
        assert_eq!(h.status, "ok");
        assert!(!h.version.is_empty());
    }
}
