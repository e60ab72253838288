use std::io;
use std::path::{Path, PathBuf};

use client_runner_lib::error::LaunchError;
use client_runner_lib::launcher::{ProcessSpawner, Spawner, launch};
use client_runner_lib::run_with;
use client_runner_lib::session::Dialogs;

struct Answers(Option<PathBuf>, Option<i64>);

impl Dialogs for Answers {
    fn pick_file(&mut self) -> Result<Option<PathBuf>, LaunchError> {
        Ok(self.0.clone())
    }

    fn ask_count(&mut self) -> Result<Option<i64>, LaunchError> {
        Ok(self.1)
    }
}

#[derive(Default)]
struct Counting(Vec<PathBuf>);

impl Spawner for Counting {
    fn spawn(&mut self, path: &Path) -> io::Result<u32> {
        self.0.push(path.to_path_buf());
        Ok(self.0.len() as u32)
    }
}

#[test]
fn three_clients_of_bin_true() {
    let mut spawner = Counting::default();
    let mut out = Vec::new();
    let n = run_with(
        Answers(Some("/bin/true".into()), Some(3)),
        &mut spawner,
        &mut out,
    )
    .expect("run");
    assert_eq!(n, 3);
    assert_eq!(spawner.0, vec![PathBuf::from("/bin/true"); 3]);
    assert_eq!(String::from_utf8(out).unwrap(), "/bin/true\n3\n");
}

#[test]
fn cancelled_count_spawns_nothing() {
    let mut spawner = Counting::default();
    let mut out = Vec::new();
    let err = run_with(Answers(Some("/bin/true".into()), None), &mut spawner, &mut out)
        .unwrap_err();
    assert!(matches!(err, LaunchError::CountCancelled));
    assert!(spawner.0.is_empty());
    assert_eq!(String::from_utf8(out).unwrap(), "/bin/true\nNone\n");
}

#[test]
fn negative_count_is_an_empty_run() {
    let mut spawner = Counting::default();
    let mut out = Vec::new();
    let n = run_with(Answers(Some("/bin/true".into()), Some(-4)), &mut spawner, &mut out)
        .expect("run");
    assert_eq!(n, 0);
    assert!(spawner.0.is_empty());
}

#[test]
fn cancelled_picker_fails_on_first_real_spawn() {
    let mut out = Vec::new();
    let err = run_with(Answers(None, Some(2)), &mut ProcessSpawner, &mut out).unwrap_err();
    assert_eq!(err.launched(), 0);
    assert!(matches!(err, LaunchError::Spawn { index: 0, .. }));
    assert_eq!(String::from_utf8(out).unwrap(), "\n2\n");
}

#[test]
fn missing_executable_reports_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("client-that-does-not-exist");
    let err = launch(&mut ProcessSpawner, &missing, 5).unwrap_err();
    match err {
        LaunchError::Spawn { source, launched, path, .. } => {
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
            assert_eq!(launched, 0);
            assert_eq!(path, missing);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[cfg(unix)]
#[test]
fn real_processes_are_started_without_waiting() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::thread::sleep;
    use std::time::{Duration, Instant};

    let dir = tempfile::tempdir().expect("tempdir");
    let marker_dir = dir.path().join("markers");
    fs::create_dir(&marker_dir).unwrap();

    // Each copy drops a file named after its pid.
    let script = dir.path().join("client.sh");
    fs::write(
        &script,
        format!("#!/bin/sh\ntouch \"{}/$$\"\n", marker_dir.display()),
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    let n = launch(&mut ProcessSpawner, &script, 3).expect("launch");
    assert_eq!(n, 3);

    let deadline = Instant::now() + Duration::from_secs(10);
    while fs::read_dir(&marker_dir).unwrap().count() < 3 && Instant::now() < deadline {
        sleep(Duration::from_millis(20));
    }
    assert_eq!(fs::read_dir(&marker_dir).unwrap().count(), 3);
}
