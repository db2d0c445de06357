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

    #[test]
    fn health_serializes_status_only() {
        let body = serde_json::to_value(types::Health::unavailable()).unwrap();
        assert_eq!(body, serde_json::json!({"status": "unavailable"}));
    }
}
