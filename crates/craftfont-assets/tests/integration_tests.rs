//! Integration tests for the asset system.
//!
//! These tests use tempfile to create isolated test environments.

use std::io::Write;

use craftfont_assets::*;
use futures_lite::future::block_on;

// ============================================================================
// Test Asset Types
// ============================================================================

/// Loader for test config files (simple "name:value" format).
struct TestConfigLoader;

#[derive(Debug, PartialEq)]
struct TestConfig {
    name: String,
    value: i32,
}

impl AssetLoader for TestConfigLoader {
    type Asset = TestConfig;

    fn extensions(&self) -> &[&str] {
        &["cfg", "config"]
    }

    fn load(&self, ctx: LoadContext<'_>) -> Result<Self::Asset, AssetError> {
        let text = std::str::from_utf8(ctx.bytes).map_err(|e| AssetError::LoaderError {
            path: ctx.source.display_path(),
            message: format!("Invalid UTF-8: {}", e),
        })?;

        let (name, value) = text.trim().split_once(':').ok_or_else(|| AssetError::LoaderError {
            path: ctx.source.display_path(),
            message: "missing ':'".to_string(),
        })?;

        let value = value.trim().parse().map_err(|_| AssetError::LoaderError {
            path: ctx.source.display_path(),
            message: "value is not an integer".to_string(),
        })?;

        Ok(TestConfig {
            name: name.trim().to_string(),
            value,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_load_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut file = std::fs::File::create(dir.path().join("game.cfg")).expect("create");
    writeln!(file, "scale: 3").expect("write");

    let reader = FileReader::new(dir.path());
    let source = AssetSource::disk("game.cfg");
    let config = block_on(load_asset(&reader, &source, &TestConfigLoader)).expect("load");

    assert_eq!(
        config,
        TestConfig {
            name: "scale".to_string(),
            value: 3
        }
    );
}

#[test]
fn test_load_from_bytes_skips_reader() {
    let dir = tempfile::tempdir().expect("tempdir");
    let reader = FileReader::new(dir.path());
    let source = AssetSource::bytes("inline.cfg", b"width:6".to_vec());

    let config = block_on(load_asset(&reader, &source, &TestConfigLoader)).expect("load");
    assert_eq!(config.value, 6);
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let reader = FileReader::new(dir.path());
    let source = AssetSource::disk("missing.cfg");

    let err = block_on(load_asset(&reader, &source, &TestConfigLoader)).unwrap_err();
    assert!(matches!(err, AssetError::NotFound { .. }));
    assert!(err.to_string().contains("missing.cfg"));
}

#[test]
fn test_wrong_extension_is_rejected() {
    let reader = FileReader::default();
    let source = AssetSource::disk("font.png");

    let err = block_on(load_asset(&reader, &source, &TestConfigLoader)).unwrap_err();
    assert!(matches!(
        err,
        AssetError::UnsupportedExtension { ref extension } if extension == "png"
    ));
}

#[test]
fn test_loader_error_is_propagated() {
    let reader = FileReader::default();
    let source = AssetSource::bytes("bad.cfg", b"no separator".to_vec());

    let err = block_on(load_asset(&reader, &source, &TestConfigLoader)).unwrap_err();
    assert!(matches!(err, AssetError::LoaderError { .. }));
}

#[test]
fn test_state_tracks_load_outcome() {
    let reader = FileReader::default();
    let mut state: AssetState<TestConfig> = AssetState::Loading;
    assert_eq!(LoadState::from(&state), LoadState::Loading);

    let source = AssetSource::bytes("ok.cfg", b"a:1".to_vec());
    state.resolve(block_on(load_asset(&reader, &source, &TestConfigLoader)));
    assert!(state.is_ready());

    let source = AssetSource::bytes("bad.cfg", b"a:b".to_vec());
    state.resolve(block_on(load_asset(&reader, &source, &TestConfigLoader)));
    assert!(state.is_failed());
}
