//! Shared fixtures for solarboard-core tests.

use solarboard_core::{ControlPoint, ControlPointKind, PositionsResponse, Route};

/// A three-point route: 0, 100, 300 km.
pub fn short_route() -> Route {
    Route::new(vec![
        ControlPoint::new(0.0, "S", "Start", ControlPointKind::Start),
        ControlPoint::new(100.0, "M", "Middle", ControlPointKind::Control),
        ControlPoint::new(300.0, "F", "Finish", ControlPointKind::Finish),
    ])
    .expect("valid route")
}

/// A positions snapshot shaped like the live feed.
pub fn sample_positions() -> PositionsResponse {
    serde_json::from_str(
        r#"{
            "items": [
                {"teamnum": 21, "shortname": "Agoria", "car": "Infinite", "distance": 150.04,
                 "speed": 84.36, "avg_speed": 77.12, "class": "Challenger", "competing": true},
                {"teamnum": 3, "shortname": "Brunel", "car": "Nuna", "distance": 212.6,
                 "speed": 3.2, "avg_speed": 80.5, "class": "Challenger", "competing": true},
                {"teamnum": 40, "shortname": "Retired", "car": "Ghost", "distance": 299.0,
                 "speed": 0.0, "avg_speed": 0.0, "class": "Challenger", "competing": false},
                {"teamnum": "8", "shortname": null, "distance": 150.0, "competing": true},
                {"teamnum": 55, "shortname": "Bochum", "car": "Sun", "distance": 99.9,
                 "speed": 7.8, "avg_speed": 60.0, "class": "Cruiser", "competing": true}
            ]
        }"#,
    )
    .expect("valid sample")
}
