// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Per-IP limiter for the login route. Each router built gets its own bucket
/// state; clones of that router share it.
pub fn login_rate_limit_layer() -> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(2);
    builder.burst_size(10);
    let config = builder
        .key_extractor(SmartIpKeyExtractor)
        .finish()
        .expect("valid rate limit configuration");

    GovernorLayer::new(config)
}
