//! Integration test: dry-run previews the change without touching the file

use std::fs;
use std::process::Command;
use tempfile::tempdir;

const LEGACY_APP: &str = "def settings_dsp_info():\n    dsp_settings = DSPSettings.query.first()\n    return render_template('settings/dsp_info.html', dsp_settings=dsp_settings)\n";

#[test]
fn test_dry_run_prints_diff_and_keeps_file() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("app.py");
    fs::write(&target, LEGACY_APP).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_routepatch"))
        .current_dir(dir.path())
        .arg("apply")
        .arg("--dry-run")
        .output()
        .expect("failed to execute `routepatch apply --dry-run`");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Would update app.py"));
    assert!(stdout.contains("-    return render_template('settings/dsp_info.html', dsp_settings=dsp_settings)"));
    assert!(stdout.contains("+    return render_template('settings/dsp_info.html', form_data=form_data)"));
    assert!(!stdout.contains("DSP Info route updated successfully!"));

    assert_eq!(fs::read_to_string(&target).unwrap(), LEGACY_APP);
}
