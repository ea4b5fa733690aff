//! Structured log events for key service operations.
//!
//! Each function emits a `tracing` event with an `event` field.

/// Log a successful model load at startup.
pub fn model_loaded(path: &str, kind: &str) {
    tracing::info!(event = "model_loaded", path = %path, kind = %kind, "model loaded");
}

/// Log a fatal model load failure.
pub fn model_load_failed(path: &str, code: &str, diagnostic: &str) {
    tracing::error!(
        event = "model_load_failed",
        path = %path,
        code = %code,
        diagnostic = %diagnostic,
        "model could not be loaded"
    );
}

/// Log the listener address once the server is bound.
pub fn server_listening(addr: &str, cors: bool) {
    tracing::info!(event = "server_listening", addr = %addr, cors = cors, "listening");
}

/// Log a request rejected by validation.
pub fn validation_rejected(id: &str, field: &str, kind: &str) {
    tracing::warn!(
        event = "validation_rejected",
        id = %id,
        field = %field,
        kind = %kind,
        "invalid or missing feature"
    );
}

/// Log a request whose path id could not be decoded.
pub fn invalid_id(reason: &str) {
    tracing::warn!(event = "invalid_id", reason = %reason, "invalid id in path");
}

/// Log a request body that carried no usable data.
pub fn no_data(id: &str, reason: &str) {
    tracing::warn!(event = "no_data", id = %id, reason = %reason, "no data provided");
}

/// Log a stored prediction.
pub fn prediction_recorded(id: &str, raw: f64, value: f64) {
    tracing::info!(
        event = "prediction_recorded",
        id = %id,
        raw = raw,
        value = value,
        "prediction recorded"
    );
}

/// Log a failed model invocation with its full diagnostic.
pub fn prediction_failed(id: &str, code: &str, diagnostic: &str) {
    tracing::error!(
        event = "prediction_failed",
        id = %id,
        code = %code,
        diagnostic = %diagnostic,
        "prediction failed"
    );
}

/// Log a served lookup. `recorded_at` is when the prediction was stored.
pub fn prediction_retrieved(id: &str, value: f64, recorded_at: &str) {
    tracing::info!(
        event = "prediction_retrieved",
        id = %id,
        value = value,
        recorded_at = %recorded_at,
        "prediction retrieved"
    );
}

/// Log a lookup for an id with no stored prediction. Not an error.
pub fn prediction_not_found(id: &str) {
    tracing::debug!(event = "prediction_not_found", id = %id, "no prediction for id");
}

/// Log a stored value that could not be served.
pub fn retrieval_failed(id: &str, code: &str, diagnostic: &str) {
    tracing::error!(
        event = "retrieval_failed",
        id = %id,
        code = %code,
        diagnostic = %diagnostic,
        "retrieval failed"
    );
}
