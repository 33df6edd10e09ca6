pub mod types;
pub mod utils;

/// Plain-text body served on `/` so load balancers can tell the process is up.
pub const LIVENESS_MESSAGE: &str = "car doctor is running";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_serializes_status() {
        let h = types::Health { status: "ok" };
        let v = serde_json::to_value(&h).unwrap();
        assert_eq!(v["status"], "ok");
    }

    #[test]
    fn error_body_shape() {
        let body = types::ErrorBody::new("Forbidden Access");
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v, serde_json::json!({"error": true, "message": "Forbidden Access"}));
    }
}
