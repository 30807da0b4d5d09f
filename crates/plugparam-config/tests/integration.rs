//! Integration tests for plugparam-config.
//!
//! These tests go through the filesystem and the core model together.

use plugparam_config::{LayoutError, ParamLayout, ParamSpec, ScaleSpec, ValidationError};
use plugparam_core::{HostParams, ParamError};
use tempfile::TempDir;

fn synth_layout() -> ParamLayout {
    ParamLayout::new("Synth Voice")
        .with_description("Oscillator and filter controls")
        .with_param(
            ParamSpec::new("volume")
                .with_name("Volume")
                .with_unit("dB")
                .with_range(-60.0, 0.0)
                .with_default(-12.0),
        )
        .with_param(
            ParamSpec::new("cutoff")
                .with_name("Cutoff")
                .with_unit("Hz")
                .with_range(20.0, 20000.0)
                .with_scale(ScaleSpec::Log)
                .with_default(1000.0),
        )
        .with_param(
            ParamSpec::new("attack")
                .with_name("Attack")
                .with_unit("ms")
                .with_range(0.0, 2000.0)
                .with_scale(ScaleSpec::Power(3.0))
                .with_default(10.0),
        )
}

#[test]
fn test_save_load_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("voice.toml");

    let layout = synth_layout();
    layout.save(&path).unwrap();

    let loaded = ParamLayout::load(&path).unwrap();
    assert_eq!(loaded, layout);
}

#[test]
fn test_save_creates_parent_dirs() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("deeper").join("voice.toml");

    synth_layout().save(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.toml");

    let err = ParamLayout::load(&path).unwrap_err();
    assert!(matches!(err, LayoutError::ReadFile { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn test_load_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    std::fs::write(&path, "name = \"Broken\"\n[[params]\n").unwrap();

    assert!(matches!(
        ParamLayout::load(&path),
        Err(LayoutError::TomlParse(_))
    ));
}

#[test]
fn test_loaded_bank_serves_host() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("voice.toml");
    synth_layout().save(&path).unwrap();

    let mut bank = ParamLayout::load(&path).unwrap().build_bank().unwrap();
    assert_eq!(bank.param_count(), 3);

    let index = bank.find_param_by_name("VOLUME").unwrap();
    assert_eq!(bank.param_text(index).as_deref(), Some("-12.00 dB"));

    let actual = bank.set_normalized(index, 0.5).unwrap();
    assert_eq!(actual, -30.0);
    assert_eq!(bank.get("volume").unwrap().actual(), -30.0);

    bank.reset_all();
    assert_eq!(bank.get("cutoff").unwrap().actual(), 1000.0);
}

#[test]
fn test_hand_written_file_with_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("minimal.toml");
    std::fs::write(
        &path,
        r#"
name = "Minimal"

[[params]]
id = "amount"

[[params]]
id = "shape"
min = 1.0
max = 4.0
scale = { power = 2.0 }
"#,
    )
    .unwrap();

    let bank = ParamLayout::load(&path).unwrap().build_bank().unwrap();
    let amount = bank.get("amount").unwrap();
    assert_eq!((amount.minimum(), amount.maximum()), (0.0, 1.0));
    assert_eq!(amount.actual(), 0.0);

    let shape = bank.get("shape").unwrap();
    assert_eq!(shape.default_actual(), 1.0);
    assert_eq!(shape.normalized(), 0.0);
}

#[test]
fn test_invalid_file_fails_to_build() {
    let layout = ParamLayout::from_toml(
        r#"
name = "Invalid"

[[params]]
id = "cutoff"
min = 0.0
max = 20000.0
scale = "log"
"#,
    )
    .unwrap();

    let err = layout.build_bank().unwrap_err();
    assert!(matches!(
        err,
        LayoutError::Validation(ValidationError::InvalidParam {
            source: ParamError::InvalidScale { .. },
            ..
        })
    ));
}

#[test]
fn test_bank_captured_back_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("captured.toml");

    let bank = synth_layout().build_bank().unwrap();
    ParamLayout::from_bank("Synth Voice", &bank)
        .save(&path)
        .unwrap();

    let reloaded = ParamLayout::load(&path).unwrap();
    assert_eq!(reloaded.ids(), ["volume", "cutoff", "attack"]);
    assert_eq!(reloaded.get("attack").unwrap().scale, ScaleSpec::Power(3.0));
    assert_eq!(reloaded.get("volume").unwrap().default, Some(-12.0));
}
