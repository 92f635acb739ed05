//! Chronic kidney disease classification over pre-trained models.
//!
//! Models are loaded once from a directory into a [`Registry`], a form collects one
//! [`InputVector`] per submission and [`classify`] asks the selected [`Predictor`] for a label.

pub mod arch;
pub mod config;
pub mod error;
pub mod input;
pub mod invoker;
pub mod predictor;
pub mod schema;
pub mod session;
pub mod store;
pub mod value;

pub use config::AppConfig;
pub use error::{ClassifierErr, Result};
pub use input::{InputVector, Validation, collect, validate};
pub use invoker::classify;
pub use predictor::{Label, Predictor};
pub use schema::FEATURES;
pub use session::{Notification, Session, Severity};
pub use store::{LoadPolicy, LoadReport, Registry, Skipped, load};
pub use value::Value;
