mod support;

use std::fs;

use support::wellness_env::WellnessEnvGuard;
use tempfile::tempdir;
use wellness::app_dirs::APP_DIR_NAME;
use wellness::config::{self, AppSettings, ModelSettings};
use wellness::ml::artifact::sha256_hex;
use wellness::ml::setup::{self, BUNDLED_MODEL_FILE_NAME};
use wellness::ml::{ModelLoadError, load_artifact};

const LINEAR: &str = r#"{
    "kind": "linear_regressor_v1",
    "model_version": 3,
    "feature_names": ["Sleep", "Steps", "Mood"],
    "coefficients": [4.0, 0.002, 2.5],
    "intercept": 1.0
}"#;

#[test]
fn loads_artifact_with_pinned_checksum() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("linear.json");
    fs::write(&path, LINEAR).unwrap();

    let digest = sha256_hex(LINEAR.as_bytes());
    let model = load_artifact(&path, Some(&digest.to_ascii_uppercase())).unwrap();
    assert_eq!(model.describe(), "linear regressor v3");
    assert!((model.predict(&[8.0, 10000.0, 6.0]) - 68.0).abs() < 1e-9);
}

#[test]
fn checksum_mismatch_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("linear.json");
    fs::write(&path, LINEAR).unwrap();

    let wrong = "0".repeat(64);
    let err = load_artifact(&path, Some(&wrong)).unwrap_err();
    assert!(matches!(err, ModelLoadError::ChecksumMismatch { .. }));

    let err = load_artifact(&path, Some("not-a-digest")).unwrap_err();
    assert!(matches!(err, ModelLoadError::InvalidChecksum(_)));
}

#[test]
fn schema_mismatch_fails_before_scoring() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("renamed.json");
    fs::write(
        &path,
        LINEAR.replace(r#""Mood""#, r#""Stress""#),
    )
    .unwrap();

    let err = load_artifact(&path, None).unwrap_err();
    assert!(matches!(err, ModelLoadError::SchemaMismatch { .. }));
}

#[test]
fn default_path_installs_bundled_model() {
    let base = tempdir().unwrap();
    let _guard = WellnessEnvGuard::set_config_home(base.path().to_path_buf());

    let path = setup::resolve_model_path(None).unwrap();
    let expected = base
        .path()
        .join(APP_DIR_NAME)
        .join("models")
        .join(BUNDLED_MODEL_FILE_NAME);
    assert_eq!(path, expected);
    assert_eq!(fs::read(&path).unwrap(), setup::bundled_artifact());

    let model = setup::load_from_settings(&ModelSettings::default()).unwrap();
    assert_eq!(model.describe(), "random forest v1 (4 trees)");
}

#[test]
fn configured_model_path_is_honoured() {
    let base = tempdir().unwrap();
    let _guard = WellnessEnvGuard::set_config_home(base.path().to_path_buf());

    let model_path = base.path().join("custom.json");
    fs::write(&model_path, LINEAR).unwrap();
    let settings = AppSettings {
        model: ModelSettings {
            path: Some(model_path),
            sha256: Some(sha256_hex(LINEAR.as_bytes())),
        },
        ..AppSettings::default()
    };
    config::save(&settings).unwrap();

    let loaded = config::load_or_default().unwrap();
    assert_eq!(loaded, settings);
    let model = setup::load_from_settings(&loaded.model).unwrap();
    assert_eq!(model.describe(), "linear regressor v3");
    assert!(
        !base
            .path()
            .join(APP_DIR_NAME)
            .join("models")
            .join(BUNDLED_MODEL_FILE_NAME)
            .exists()
    );
}

#[test]
fn configured_missing_model_is_fatal() {
    let base = tempdir().unwrap();
    let _guard = WellnessEnvGuard::set_config_home(base.path().to_path_buf());

    let settings = ModelSettings {
        path: Some(base.path().join("gone.json")),
        sha256: None,
    };
    let err = setup::load_from_settings(&settings).unwrap_err();
    assert!(matches!(err, ModelLoadError::Read { .. }));
}
