//! # premia-model
//!
//! Loads the trained regressor from a JSON artifact and exposes it as an
//! [`IRegressor`](premia_core::IRegressor).
//!
//! | Kind | Prediction |
//! |------|------------|
//! | `linear` | `intercept + Σ coefficient·feature` |
//! | `tree_ensemble` | mean (forest) or `base_score` + sum (boosting) of tree leaves |
//!
//! Every artifact declares its `feature_names`, which must equal the service's
//! feature schema exactly, order included.

pub mod artifact;
pub mod linear;
pub mod tree;

pub use artifact::{load_model, parse_model, ModelArtifact};
pub use linear::LinearModel;
pub use tree::{Aggregation, RegressionTree, TreeEnsemble, TreeNode};
