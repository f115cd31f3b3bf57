//! Integration test: the patch is a single-use migration
//!
//! The first run rewrites the handler; a second run must recognize the file
//! as already patched, change nothing, and still exit 0.

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const LEGACY_APP: &str = "@login_required\ndef settings_dsp_info():\n    dsp_settings = DSPSettings.query.filter_by(user_id=current_user.id).first()\n    return render_template('settings/dsp_info.html', dsp_settings=dsp_settings)\n";

fn run_apply(dir: &Path) -> std::process::Output {
    Command::new(assert_cmd::cargo::cargo_bin!("routepatch"))
        .current_dir(dir)
        .arg("apply")
        .output()
        .expect("failed to execute `routepatch apply`")
}

#[test]
fn test_apply_twice_second_run_is_noop() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("app.py");
    fs::write(&target, LEGACY_APP).unwrap();

    let first = run_apply(dir.path());
    assert!(first.status.success());
    let patched = fs::read_to_string(&target).unwrap();
    assert_ne!(patched, LEGACY_APP);

    let second = run_apply(dir.path());
    assert!(second.status.success());
    let stdout = String::from_utf8_lossy(&second.stdout);
    assert!(stdout.contains("already applied"));

    assert_eq!(fs::read_to_string(&target).unwrap(), patched);
}
