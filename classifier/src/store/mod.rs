mod artifact;
mod registry;

pub use artifact::{ActFnKind, LayerArtifact, ModelArtifact, ModelKind, ScalerArtifact};
pub use registry::Registry;

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{ClassifierErr, Predictor, Result};

/// Extension of the files scanned as models.
pub const MODEL_EXTENSION: &str = "json";

/// What to do when a single model file fails to load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Abort the whole load, discarding the models loaded so far.
    FailFast,
    /// Report the file and keep loading the rest.
    #[default]
    SkipInvalid,
}

impl FromStr for LoadPolicy {
    type Err = ClassifierErr;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail_fast" => Ok(Self::FailFast),
            "skip" | "skip_invalid" => Ok(Self::SkipInvalid),
            _ => Err(ClassifierErr::Config {
                key: "load policy",
                value: s.to_string(),
            }),
        }
    }
}

/// A model file left out of the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub file: PathBuf,
    pub reason: String,
}

/// The outcome of scanning a models directory.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub registry: Registry,
    pub skipped: Vec<Skipped>,
}

/// Loads every model file found directly inside `dir`.
///
/// Files are visited in path order; each one is registered under its file stem. Files without
/// the [`MODEL_EXTENSION`] and subdirectories are ignored.
///
/// # Arguments
/// * `dir` - The models directory.
/// * `policy` - How to react to a file that fails to load.
///
/// # Returns
/// The populated registry together with the skipped files.
///
/// # Errors
/// `ReadDir` if the directory cannot be listed, or the first file's error under
/// [`LoadPolicy::FailFast`].
pub fn load<P: AsRef<Path>>(dir: P, policy: LoadPolicy) -> Result<LoadReport> {
    let dir = dir.as_ref();
    let read_dir_err = |source| ClassifierErr::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = fs::read_dir(dir)
        .map_err(read_dir_err)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(read_dir_err)?;
    paths.sort();

    let mut report = LoadReport::default();

    for path in paths {
        let Some(name) = model_name(&path) else {
            continue;
        };

        match load_model(&path) {
            Ok(predictor) => {
                log::info!("loaded model {name} from {}", path.display());
                report.registry.insert(name, predictor);
            }
            Err(e) if policy == LoadPolicy::SkipInvalid => {
                log::warn!("skipping {}: {e}", path.display());
                let reason = match e {
                    ClassifierErr::InvalidArtifact { reason, .. } => reason,
                    other => other.to_string(),
                };
                report.skipped.push(Skipped { file: path, reason });
            }
            Err(e) => {
                log::error!("aborting model load: {e}");
                return Err(e);
            }
        }
    }

    log::info!(
        "{} model(s) loaded from {}, {} skipped",
        report.registry.len(),
        dir.display(),
        report.skipped.len()
    );

    Ok(report)
}

/// Reads and builds a single model file.
///
/// # Errors
/// `InvalidArtifact` naming the file if it cannot be read, parsed or built.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<Box<dyn Predictor>> {
    let path = path.as_ref();
    let invalid = |reason: String| ClassifierErr::InvalidArtifact {
        file: path.to_path_buf(),
        reason,
    };

    let json = fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    ModelArtifact::from_json(&json)
        .and_then(ModelArtifact::build)
        .map_err(|e| invalid(e.to_string()))
}

/// Returns the registry key for `path`, or `None` if it isn't a model file.
pub fn model_name(path: &Path) -> Option<String> {
    if !path.is_file() || path.extension()? != MODEL_EXTENSION {
        return None;
    }

    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
}
