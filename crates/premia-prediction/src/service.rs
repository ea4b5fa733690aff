//! PredictionService: runs the model, undoes the target transform, records results.

use std::any::Any;
use std::backtrace::Backtrace;
use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Once};

use premia_core::constants::SINGLE_ROW_BATCH;
use premia_core::errors::ModelError;
use premia_core::{FeatureVector, IPredictionStore, IRegressor, Prediction, StoredPrediction};

use crate::transform;

/// Composes the injected model and store.
///
/// The model call is synchronous and has no timeout; a hung model blocks the
/// calling worker.
#[derive(Clone)]
pub struct PredictionService {
    model: Arc<dyn IRegressor>,
    store: Arc<dyn IPredictionStore>,
}

impl PredictionService {
    pub fn new(model: Arc<dyn IRegressor>, store: Arc<dyn IPredictionStore>) -> Self {
        Self { model, store }
    }

    pub fn model_kind(&self) -> &str {
        self.model.kind()
    }

    pub fn store(&self) -> &Arc<dyn IPredictionStore> {
        &self.store
    }

    /// Predict one encoded row. Nothing is stored.
    pub fn predict(&self, vector: &FeatureVector) -> Result<Prediction, ModelError> {
        let batch = std::slice::from_ref(vector);
        tracing::debug!(features = ?vector.values(), "invoking model");

        let outputs = invoke(self.model.as_ref(), batch)?;
        if outputs.len() != SINGLE_ROW_BATCH {
            return Err(ModelError::ShapeMismatch {
                expected: SINGLE_ROW_BATCH,
                actual: outputs.len(),
            });
        }

        let prediction = to_prediction(outputs[0])?;
        tracing::debug!(raw = prediction.raw, value = prediction.value, "model prediction");
        Ok(prediction)
    }

    /// Predict and store the raw output under `id`.
    ///
    /// The store is only touched once the prediction succeeded.
    pub fn record(&self, id: &str, vector: &FeatureVector) -> Result<Prediction, ModelError> {
        let prediction = self.predict(vector)?;
        self.store.write(id, prediction.raw);
        Ok(prediction)
    }

    /// The stored prediction for `id`, converted back to original units.
    pub fn lookup(&self, id: &str) -> Result<Option<StoredPrediction>, ModelError> {
        self.store
            .read(id)
            .map(|record| {
                to_prediction(record.raw).map(|prediction| StoredPrediction {
                    prediction,
                    recorded_at: record.recorded_at,
                })
            })
            .transpose()
    }
}

/// Build both scales of a raw model output, refusing values JSON cannot carry.
fn to_prediction(raw: f64) -> Result<Prediction, ModelError> {
    if !raw.is_finite() {
        return Err(ModelError::NonFiniteOutput { value: raw });
    }
    let value = transform::expm1(raw);
    if !value.is_finite() {
        return Err(ModelError::NonFiniteOutput { value });
    }
    Ok(Prediction { raw, value })
}

/// Call the model, turning a panic inside it into a `ModelError`.
fn invoke(model: &dyn IRegressor, batch: &[FeatureVector]) -> Result<Vec<f64>, ModelError> {
    match catch(|| model.predict_batch(batch)) {
        Ok(result) => result,
        Err(detail) => {
            tracing::error!(
                event = "model_panicked",
                message = %detail.message,
                location = detail.location.as_deref().unwrap_or("unknown"),
                backtrace = %detail.backtrace,
                "model panicked"
            );
            Err(ModelError::Panicked {
                message: detail.message,
            })
        }
    }
}

/// What a caught panic left behind.
#[derive(Debug)]
struct PanicDetail {
    message: String,
    location: Option<String>,
    backtrace: String,
}

/// Location and backtrace of a panic raised inside [`catch`].
struct PanicSite {
    location: Option<String>,
    backtrace: String,
}

thread_local! {
    static CATCHING: Cell<bool> = const { Cell::new(false) };
    static LAST_SITE: RefCell<Option<PanicSite>> = const { RefCell::new(None) };
}

static HOOK: Once = Once::new();

/// Route panics raised inside [`catch`] to `LAST_SITE` instead of stderr.
/// Panics elsewhere go to the previously installed hook.
fn install_hook() {
    HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if CATCHING.with(Cell::get) {
                let site = PanicSite {
                    location: info.location().map(ToString::to_string),
                    backtrace: Backtrace::force_capture().to_string(),
                };
                LAST_SITE.with(|last| *last.borrow_mut() = Some(site));
            } else {
                previous(info);
            }
        }));
    });
}

fn catch<T>(f: impl FnOnce() -> T) -> Result<T, PanicDetail> {
    install_hook();
    CATCHING.with(|flag| flag.set(true));
    let outcome = panic::catch_unwind(AssertUnwindSafe(f));
    CATCHING.with(|flag| flag.set(false));

    outcome.map_err(|payload| {
        let site = LAST_SITE.with(|last| last.borrow_mut().take());
        let (location, backtrace) = match site {
            Some(site) => (site.location, site.backtrace),
            None => (None, String::new()),
        };
        PanicDetail {
            message: panic_message(payload.as_ref()),
            location,
            backtrace,
        }
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
