use std::path::Path;
use std::process::Command;
use std::sync::Once;
use tempfile::TempDir;

#[allow(dead_code)]
static INIT: Once = Once::new();

#[allow(dead_code)]
pub fn setup_test_env() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
            .is_test(true)
            .init();
    });
}

fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Fresh repository with a local identity, so commits work without global config.
#[allow(dead_code)]
pub fn setup_git_repo() -> TempDir {
    setup_test_env();

    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    git(dir.path(), &["init", "--quiet"]);
    git(dir.path(), &["config", "user.name", "Test User"]);
    git(dir.path(), &["config", "user.email", "test@example.com"]);
    git(dir.path(), &["config", "commit.gpgsign", "false"]);
    dir
}

#[allow(dead_code)]
pub fn stage_file(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).expect("Failed to write test file");
    git(dir, &["add", name]);
}

#[allow(dead_code)]
pub fn last_commit_message(dir: &Path) -> Option<String> {
    let output = Command::new("git")
        .args(["log", "-1", "--format=%B"])
        .current_dir(dir)
        .output()
        .expect("Failed to run git log");
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim_end().to_string())
}
