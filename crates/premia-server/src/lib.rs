//! # premia-server
//!
//! Two routes over the prediction core:
//!
//! | Route | Handler |
//! |-------|---------|
//! | `POST /predict/{id}` | encode, predict, store, answer in original units |
//! | `GET /return_value/{id}` | read the stored prediction back |
//!
//! Every per-request failure becomes a JSON body with a status code at the
//! handler boundary ([`ApiError`]); nothing a request does can stop the
//! process.

pub mod error;
pub mod handlers;
pub mod payload;
pub mod router;
pub mod startup;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use startup::StartupError;
pub use state::AppState;
