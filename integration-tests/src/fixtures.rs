use serde_json::{json, Map, Value};

/// A camera resource as the API returns it, with one single-member
/// relationship and one sequence relationship inline.
pub fn camera_payload() -> Value {
    json!({
        "id": 314,
        "name": "north-goal-cam",
        "active": true,
        "uptime_ratio": 0.993,
        "storage_used_gb": "153.27",
        "stream_key": "{8f14e45f-ceea-4673-9d6d-5c6f0ef9c160}",
        "created_at": "2019-01-01 00:00:00",
        "updated_at": "2019-06-15T12:30:00+03:00",
        "venue": {
            "data": {
                "id": 1,
                "name": "Montevideo",
                "created_at": "2018-03-20 08:15:00"
            }
        },
        "recordings": {
            "data": [
                { "id": 10, "title": "first-half" },
                { "id": 11, "title": "second-half" }
            ]
        }
    })
}

/// A venue resource with no inline relationships.
pub fn venue_payload() -> Value {
    json!({
        "id": 1,
        "name": "Montevideo",
        "created_at": "2018-03-20 08:15:00"
    })
}

/// Unwrap a JSON value known to be an object.
pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture is not an object: {other}"),
    }
}
