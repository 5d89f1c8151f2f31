use assert_cmd::Command;
use assert_fs::{
    prelude::{FileWriteStr, PathChild},
    TempDir,
};
use predicates::prelude::predicate;
use std::{fs, path::Path};

fn write_solver(dir: &TempDir, name: &str, script: &str) -> std::path::PathBuf {
    let solver = dir.child(name);
    solver.write_str(script).unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(solver.path(), fs::Permissions::from_mode(0o755)).unwrap();
    }
    solver.path().to_path_buf()
}

fn check(checker: &str, solver: &Path, depth: &str, output_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("crusticheck").unwrap();
    cmd.arg("check")
        .arg("-c")
        .arg(checker)
        .arg("-s")
        .arg(solver)
        .arg("-d")
        .arg(depth)
        .arg("-o")
        .arg(output_dir)
        .arg("--seed")
        .arg("0");
    cmd
}

#[cfg(unix)]
#[test]
fn test_check_with_fixed_answers() {
    let dir = TempDir::new().unwrap();
    let counter = write_solver(&dir, "counter.sh", "#!/bin/sh\necho 'c fixed answer'\necho 's 1'\n");
    let af_solver = write_solver(&dir, "af_solver.sh", "#!/bin/sh\necho '[[]]'\n");

    let out = dir.child("mc_depth_1");
    check("MC", &counter, "1", out.path()).assert().success();
    assert_eq!(0, fs::read_dir(out.path()).unwrap().count());

    let out = dir.child("mc_depth_2");
    check("MC", &counter, "2", out.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("1 of 2 check(s) failed"));
    let failed = out.child("instance_000002");
    assert_eq!(
        "c fixed answer\ns 1\n",
        fs::read_to_string(failed.child("solver_output.txt").path()).unwrap()
    );
    assert!(fs::read_to_string(failed.child("explanation.txt").path())
        .unwrap()
        .contains("expected 2, got 1"));
    assert_eq!(
        "2\n",
        fs::read_to_string(failed.child("instance.count").path()).unwrap()
    );

    let out = dir.child("ee_depth_1");
    check("EE-CO", &af_solver, "1", out.path())
        .arg("--dialect")
        .arg("ICCMA17")
        .assert()
        .success();
    check("EE-CO", &af_solver, "1", out.path())
        .assert()
        .failure()
        .code(1);
    assert!(fs::read_to_string(out.child("instance_000001").child("explanation.txt").path())
        .unwrap()
        .contains("ICCMA19"));

    dir.close().unwrap();
}

#[test]
fn test_unknown_checker() {
    let dir = TempDir::new().unwrap();
    let solver = write_solver(&dir, "solver.sh", "#!/bin/sh\n");
    check("XX-CO", &solver, "1", dir.child("out").path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown checker"));
    dir.close().unwrap();
}

#[test]
fn test_unknown_dialect() {
    let dir = TempDir::new().unwrap();
    let solver = write_solver(&dir, "solver.sh", "#!/bin/sh\n");
    check("EE-CO", &solver, "1", dir.child("out").path())
        .arg("--dialect")
        .arg("ICCMA42")
        .assert()
        .failure()
        .code(2);
    dir.close().unwrap();
}

#[test]
fn test_missing_solver() {
    let dir = TempDir::new().unwrap();
    let out = dir.child("out");
    check("MC", dir.child("missing.sh").path(), "2", out.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("2 of 2 check(s) failed"));
    for instance in ["instance_000001", "instance_000002"] {
        let failed = out.child(instance);
        assert!(failed.child("instance.cnf").path().exists());
        assert!(fs::read_to_string(failed.child("explanation.txt").path())
            .unwrap()
            .contains("while executing solver"));
    }
    dir.close().unwrap();
}

#[cfg(unix)]
#[test]
fn test_solver_from_path() {
    let dir = TempDir::new().unwrap();
    let out = dir.child("out");
    check("MC", Path::new("echo"), "1", out.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("1 of 1 check(s) failed"));
    assert!(fs::read_to_string(out.child("instance_000001").child("explanation.txt").path())
        .unwrap()
        .contains("unexpected line"));
    dir.close().unwrap();
}
