//! Pieces shared by every crate in the workspace: the tracing setup and the
//! small wire types that don't belong to a single resource.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::ok();
        assert_eq!(h.status, "ok");
    }
}
