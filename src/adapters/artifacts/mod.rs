//! JSON artifact adapter.
//!
//! Loads the frozen scoring artifacts exported by the training notebook:
//! - `model.json`: linear or stacking regressor
//! - `power_transformer.json`: Yeo-Johnson / Box-Cox on the skewed subset
//! - `scaler.json`: standard or min-max scaler on the full vector
//!
//! When `manifest.json` is present, every file it lists must hash to the
//! recorded SHA-256 digest before anything is parsed.

mod model;
mod transform;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::{Feature, FEATURE_NAMES};

pub use model::{LinearTerms, Model};
pub use transform::{box_cox, yeo_johnson, PowerMethod, PowerTransformer, Scaler};

pub const MODEL_FILE: &str = "model.json";
pub const POWER_TRANSFORMER_FILE: &str = "power_transformer.json";
pub const SCALER_FILE: &str = "scaler.json";
pub const MANIFEST_FILE: &str = "manifest.json";

/// Artifact files required for scoring.
pub const ARTIFACT_FILES: [&str; 3] = [MODEL_FILE, POWER_TRANSFORMER_FILE, SCALER_FILE];

const MANIFEST_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Artifact not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid artifact {file}: {reason}")]
    Invalid { file: String, reason: String },

    #[error("Integrity check failed for {0}")]
    Integrity(String),
}

/// Digest manifest binding artifact files to their SHA-256.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub version: u32,
    pub files: BTreeMap<String, String>,
}

/// The three loaded artifacts.
#[derive(Debug, Clone)]
pub struct ScoringArtifacts {
    pub model: Model,
    pub power: PowerTransformer,
    pub scaler: Scaler,
}

/// Hex SHA-256 of a byte slice.
#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

fn constant_time_eq_str(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff: u8 = 0;
    for (x, y) in a.as_bytes().iter().zip(b.as_bytes().iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

fn read(path: &Path) -> Result<Vec<u8>, ArtifactError> {
    fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ArtifactError::Missing(path.to_path_buf())
        } else {
            ArtifactError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

fn invalid(file: &str, reason: impl Into<String>) -> ArtifactError {
    ArtifactError::Invalid {
        file: file.to_string(),
        reason: reason.into(),
    }
}

fn parse<T: serde::de::DeserializeOwned>(file: &str, bytes: &[u8]) -> Result<T, ArtifactError> {
    serde_json::from_slice(bytes).map_err(|e| invalid(file, e.to_string()))
}

fn expect_names(file: &str, found: &[String], expected: &[&str]) -> Result<(), ArtifactError> {
    if found.len() != expected.len() || found.iter().zip(expected).any(|(a, b)| a != b) {
        return Err(invalid(
            file,
            format!("feature_names {found:?} do not match expected {expected:?}"),
        ));
    }
    Ok(())
}

/// Build a manifest from the current contents of `dir`.
///
/// # Errors
/// Returns `ArtifactError` if any listed file cannot be read.
pub fn build_manifest(dir: &Path, files: &[&str]) -> Result<Manifest, ArtifactError> {
    let mut map = BTreeMap::new();
    for name in files {
        let bytes = read(&dir.join(name))?;
        map.insert((*name).to_string(), sha256_hex(&bytes));
    }
    Ok(Manifest {
        version: MANIFEST_VERSION,
        files: map,
    })
}

/// Parse `manifest.json` in `dir` if it exists and check its shape.
fn read_manifest(dir: &Path) -> Result<Option<Manifest>, ArtifactError> {
    let path = dir.join(MANIFEST_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let manifest: Manifest = parse(MANIFEST_FILE, &read(&path)?)?;
    if manifest.version != MANIFEST_VERSION {
        return Err(invalid(
            MANIFEST_FILE,
            format!("unsupported version {}", manifest.version),
        ));
    }
    if manifest.files.is_empty() {
        return Err(invalid(MANIFEST_FILE, "lists no files"));
    }
    if let Some(rel) = manifest
        .files
        .keys()
        .find(|rel| Path::new(rel).components().count() != 1)
    {
        return Err(invalid(MANIFEST_FILE, format!("entry {rel} is not a plain file name")));
    }
    Ok(Some(manifest))
}

/// Check every manifest digest. Files found in `loaded` are hashed from
/// those bytes; anything else is read from `dir`.
fn check_manifest(
    dir: &Path,
    manifest: &Manifest,
    loaded: &[(&str, &[u8])],
) -> Result<(), ArtifactError> {
    for (rel, expected_hex) in &manifest.files {
        let actual_hex = match loaded.iter().find(|(name, _)| name == rel) {
            Some((_, bytes)) => sha256_hex(bytes),
            None => sha256_hex(&read(&dir.join(rel))?),
        };
        if !constant_time_eq_str(&actual_hex, &expected_hex.to_ascii_lowercase()) {
            return Err(ArtifactError::Integrity(rel.clone()));
        }
    }

    for name in ARTIFACT_FILES {
        if !manifest.files.contains_key(name) {
            tracing::warn!("{name} is not bound by {MANIFEST_FILE}");
        }
    }
    Ok(())
}

/// Verify `manifest.json` in `dir` against the files on disk.
///
/// Returns `Ok(None)` when there is no manifest.
///
/// # Errors
/// Returns `ArtifactError::Integrity` on a digest mismatch and
/// `ArtifactError::Invalid` on a malformed manifest.
pub fn verify_manifest(dir: &Path) -> Result<Option<Manifest>, ArtifactError> {
    let Some(manifest) = read_manifest(dir)? else {
        return Ok(None);
    };
    check_manifest(dir, &manifest, &[])?;
    Ok(Some(manifest))
}

/// Load and check all scoring artifacts from `dir`.
///
/// Each file is read once; the manifest digest and the parser see the
/// same bytes.
///
/// # Errors
/// Returns `ArtifactError::Missing` for the first absent file, then
/// manifest failures, then parse or contract failures.
pub fn load_artifacts(dir: &Path) -> Result<ScoringArtifacts, ArtifactError> {
    let model_bytes = read(&dir.join(MODEL_FILE))?;
    let power_bytes = read(&dir.join(POWER_TRANSFORMER_FILE))?;
    let scaler_bytes = read(&dir.join(SCALER_FILE))?;

    let manifest = read_manifest(dir)?;
    if let Some(manifest) = &manifest {
        check_manifest(
            dir,
            manifest,
            &[
                (MODEL_FILE, model_bytes.as_slice()),
                (POWER_TRANSFORMER_FILE, power_bytes.as_slice()),
                (SCALER_FILE, scaler_bytes.as_slice()),
            ],
        )?;
    }

    let model: Model = parse(MODEL_FILE, &model_bytes)?;
    expect_names(MODEL_FILE, model.feature_names(), &FEATURE_NAMES)?;
    model.validate().map_err(|r| invalid(MODEL_FILE, r))?;

    let power: PowerTransformer = parse(POWER_TRANSFORMER_FILE, &power_bytes)?;
    let power_names: Vec<&str> = Feature::POWER_TRANSFORMED.iter().map(|f| f.name()).collect();
    expect_names(POWER_TRANSFORMER_FILE, &power.feature_names, &power_names)?;
    power.validate().map_err(|r| invalid(POWER_TRANSFORMER_FILE, r))?;

    let scaler: Scaler = parse(SCALER_FILE, &scaler_bytes)?;
    expect_names(SCALER_FILE, scaler.feature_names(), &FEATURE_NAMES)?;
    scaler.validate().map_err(|r| invalid(SCALER_FILE, r))?;

    tracing::info!(
        "Loaded artifacts from {:?} (model={}, power={:?}, verified={})",
        dir,
        model.kind(),
        power.method,
        manifest.is_some()
    );

    Ok(ScoringArtifacts {
        model,
        power,
        scaler,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tempfile::tempdir;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    /// Identity-ish artifacts: raw score is the sum of features plus 480.
    pub(crate) fn write_artifacts(dir: &Path) {
        let power_names: Vec<&str> = Feature::POWER_TRANSFORMED.iter().map(|f| f.name()).collect();
        let model = Model::Linear {
            feature_names: names(&FEATURE_NAMES),
            coefficients: vec![1.0; FEATURE_NAMES.len()],
            intercept: 480.0,
        };
        let power = PowerTransformer {
            method: PowerMethod::YeoJohnson,
            feature_names: names(&power_names),
            lambdas: vec![1.0; power_names.len()],
            standardize: false,
            mean: vec![],
            scale: vec![],
        };
        let scaler = Scaler::Standard {
            feature_names: names(&FEATURE_NAMES),
            mean: vec![0.0; FEATURE_NAMES.len()],
            scale: vec![1.0; FEATURE_NAMES.len()],
        };
        fs::write(dir.join(MODEL_FILE), serde_json::to_vec(&model).expect("model json"))
            .expect("write model");
        fs::write(
            dir.join(POWER_TRANSFORMER_FILE),
            serde_json::to_vec(&power).expect("power json"),
        )
        .expect("write power");
        fs::write(dir.join(SCALER_FILE), serde_json::to_vec(&scaler).expect("scaler json"))
            .expect("write scaler");
    }

    fn write_manifest(dir: &Path) {
        let manifest = build_manifest(dir, &ARTIFACT_FILES).expect("manifest");
        fs::write(
            dir.join(MANIFEST_FILE),
            serde_json::to_vec_pretty(&manifest).expect("manifest json"),
        )
        .expect("write manifest");
    }

    #[test]
    fn test_load_without_manifest() {
        let dir = tempdir().expect("tempdir");
        write_artifacts(dir.path());
        let artifacts = load_artifacts(dir.path()).expect("load");
        assert_eq!(artifacts.model.kind(), "linear");
        assert_eq!(artifacts.power.method, PowerMethod::YeoJohnson);
    }

    #[test]
    fn test_missing_model_is_reported() {
        let dir = tempdir().expect("tempdir");
        write_artifacts(dir.path());
        fs::remove_file(dir.path().join(MODEL_FILE)).expect("remove");
        match load_artifacts(dir.path()) {
            Err(ArtifactError::Missing(path)) => assert!(path.ends_with(MODEL_FILE)),
            other => panic!("expected Missing, got {other:?}"),
        }
    }

    #[test]
    fn test_manifest_round_trip_and_tamper() {
        let dir = tempdir().expect("tempdir");
        write_artifacts(dir.path());
        write_manifest(dir.path());
        assert!(verify_manifest(dir.path()).expect("verify").is_some());
        assert!(load_artifacts(dir.path()).is_ok());

        let mut bytes = fs::read(dir.path().join(SCALER_FILE)).expect("read");
        bytes.push(b' ');
        fs::write(dir.path().join(SCALER_FILE), bytes).expect("write");
        match load_artifacts(dir.path()) {
            Err(ArtifactError::Integrity(file)) => assert_eq!(file, SCALER_FILE),
            other => panic!("expected Integrity, got {other:?}"),
        }
    }

    #[test]
    fn test_digest_is_taken_from_loaded_bytes() {
        let dir = tempdir().expect("tempdir");
        write_artifacts(dir.path());
        write_manifest(dir.path());
        let manifest = read_manifest(dir.path()).expect("read").expect("present");

        let on_disk = fs::read(dir.path().join(SCALER_FILE)).expect("read");
        assert!(check_manifest(dir.path(), &manifest, &[(SCALER_FILE, on_disk.as_slice())]).is_ok());

        // Disk is untouched; only the bytes handed to the parser differ.
        let mut changed = on_disk.clone();
        changed.push(b' ');
        match check_manifest(dir.path(), &manifest, &[(SCALER_FILE, changed.as_slice())]) {
            Err(ArtifactError::Integrity(file)) => assert_eq!(file, SCALER_FILE),
            other => panic!("expected Integrity, got {other:?}"),
        }
        assert!(verify_manifest(dir.path()).is_ok());
    }

    #[test]
    fn test_manifest_rejects_path_entries() {
        let dir = tempdir().expect("tempdir");
        write_artifacts(dir.path());
        let mut files = BTreeMap::new();
        files.insert("../model.json".to_string(), "00".to_string());
        let manifest = Manifest { version: 1, files };
        fs::write(
            dir.path().join(MANIFEST_FILE),
            serde_json::to_vec(&manifest).expect("json"),
        )
        .expect("write");
        assert!(matches!(
            verify_manifest(dir.path()),
            Err(ArtifactError::Invalid { .. })
        ));
    }

    #[test]
    fn test_feature_order_is_part_of_the_contract() {
        let dir = tempdir().expect("tempdir");
        write_artifacts(dir.path());
        let mut swapped = names(&FEATURE_NAMES);
        swapped.swap(0, 1);
        let model = Model::Linear {
            feature_names: swapped,
            coefficients: vec![1.0; FEATURE_NAMES.len()],
            intercept: 0.0,
        };
        fs::write(
            dir.path().join(MODEL_FILE),
            serde_json::to_vec(&model).expect("json"),
        )
        .expect("write");
        match load_artifacts(dir.path()) {
            Err(ArtifactError::Invalid { file, .. }) => assert_eq!(file, MODEL_FILE),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_garbage_json_is_invalid() {
        let dir = tempdir().expect("tempdir");
        write_artifacts(dir.path());
        fs::write(dir.path().join(POWER_TRANSFORMER_FILE), b"not json").expect("write");
        assert!(matches!(
            load_artifacts(dir.path()),
            Err(ArtifactError::Invalid { .. })
        ));
    }
}
