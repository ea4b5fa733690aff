//! Span definitions per request kind.

/// Span covering one `POST /predict/{id}` request.
#[macro_export]
macro_rules! predict_span {
    ($id:expr) => {
        tracing::info_span!("premia.predict", id = %$id)
    };
}

/// Span covering one `GET /return_value/{id}` request.
#[macro_export]
macro_rules! retrieve_span {
    ($id:expr) => {
        tracing::info_span!("premia.retrieve", id = %$id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PREDICT: &str = "premia.predict";
    pub const RETRIEVE: &str = "premia.retrieve";
}
