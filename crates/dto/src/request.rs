use cartsim_core::Degrees;
use cartsim_core::Meters;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub cart_id: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationUpdate {
    pub latitude: Degrees,
    pub longitude: Degrees,
    pub accuracy: Meters,
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn login_uses_camel_case() {
        let body = LoginRequest {
            cart_id: "cart001".to_string(),
            password: "qwerty".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "cartId": "cart001", "password": "qwerty" }));
    }
    #[test]
    fn update_carries_integer_accuracy() {
        let body = LocationUpdate {
            latitude: 24.812,
            longitude: 93.936,
            accuracy: 12,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["accuracy"], serde_json::json!(12));
        assert!(json["accuracy"].is_u64());
        assert_eq!(json["latitude"], serde_json::json!(24.812));
    }
}
