//! Integration test: --backup keeps the original next to the patched file

use std::fs;
use std::process::Command;
use tempfile::tempdir;

const LEGACY_APP: &str = "def settings_dsp_info():\n    dsp_settings = DSPSettings.query.first()\n    return render_template('settings/dsp_info.html', dsp_settings=dsp_settings)\n";

#[test]
fn test_backup_preserves_original_bytes() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("app.py");
    fs::write(&target, LEGACY_APP).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_routepatch"))
        .current_dir(dir.path())
        .arg("apply")
        .arg("--backup")
        .output()
        .expect("failed to execute `routepatch apply --backup`");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Saved backup to"));

    let backup = dir.path().join("app.py.bak");
    assert_eq!(fs::read_to_string(backup).unwrap(), LEGACY_APP);
    assert_ne!(fs::read_to_string(&target).unwrap(), LEGACY_APP);
}
