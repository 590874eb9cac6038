use assert_cmd::prelude::*;
use filetime::FileTime;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;
use timepin::FileTimestamps;

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("timepin").unwrap();
    cmd.env_remove("SOURCE_DATE_EPOCH");
    cmd.env_remove("RUST_LOG");
    cmd
}

// Pins known timestamps on an entry. The atime sits in the far future so a
// relatime mount cannot bump it while the tool's own walks read directories.
fn pin(path: &Path, mtime_secs: i64) -> FileTimestamps {
    let stamps = FileTimestamps {
        atime: FileTime::from_unix_time(4_102_444_800, 0),
        mtime: FileTime::from_unix_time(mtime_secs, 0),
    };
    stamps.apply(path).unwrap();
    stamps
}

fn read(path: &Path) -> FileTimestamps {
    FileTimestamps::read(path).unwrap()
}

#[test]
fn modified_file_is_pinned_and_new_file_gets_epoch_zero() {
    let tmp = tempdir().unwrap();
    let a = tmp.path().join("a.txt");
    fs::write(&a, b"line one\n").unwrap();
    let original = pin(&a, 1_500_000_000);

    bin()
        .arg(tmp.path())
        .arg("sh")
        .arg("-c")
        .arg(format!(
            "echo appended >> {a} && touch {b}",
            a = a.display(),
            b = tmp.path().join("b.txt").display()
        ))
        .assert()
        .success()
        .stderr(predicate::str::contains("found new file"));

    assert_eq!(read(&a), original);
    assert_eq!(
        read(&tmp.path().join("b.txt")),
        FileTimestamps::uniform(FileTime::zero())
    );
}

#[test]
fn source_date_epoch_sets_the_fallback() {
    let tmp = tempdir().unwrap();

    bin()
        .env("SOURCE_DATE_EPOCH", "1609459200")
        .arg(tmp.path())
        .arg("sh")
        .arg("-c")
        .arg(format!("touch {}", tmp.path().join("c.txt").display()))
        .assert()
        .success();

    assert_eq!(
        read(&tmp.path().join("c.txt")),
        FileTimestamps::uniform(FileTime::from_unix_time(1_609_459_200, 0))
    );
}

#[test]
fn unparseable_source_date_epoch_falls_back_to_epoch_zero() {
    let tmp = tempdir().unwrap();

    bin()
        .env("SOURCE_DATE_EPOCH", "not-a-number")
        .arg(tmp.path())
        .arg("sh")
        .arg("-c")
        .arg(format!("touch {}", tmp.path().join("c.txt").display()))
        .assert()
        .success();

    assert_eq!(
        read(&tmp.path().join("c.txt")),
        FileTimestamps::uniform(FileTime::zero())
    );
}

#[test]
fn noop_command_leaves_every_timestamp_untouched() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("still.txt");
    fs::write(&file, b"still").unwrap();
    let file_original = pin(&file, 1_400_000_000);
    let dir_original = pin(tmp.path(), 1_400_000_000);

    bin()
        .arg(tmp.path())
        .arg("true")
        .assert()
        .success()
        .stderr(predicate::str::contains("fixing timestamp").not())
        .stderr(predicate::str::contains("found new file").not());

    assert_eq!(read(&file), file_original);
    assert_eq!(read(tmp.path()), dir_original);
}

#[test]
fn failing_command_skips_the_restore_pass() {
    let tmp = tempdir().unwrap();
    let leftover = tmp.path().join("leftover.txt");

    bin()
        .arg(tmp.path())
        .arg("sh")
        .arg("-c")
        .arg(format!("touch {} && exit 3", leftover.display()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed"));

    // The restore pass never ran: the leftover keeps its creation-time
    // metadata instead of the epoch-zero fallback.
    assert!(leftover.exists());
    assert_ne!(read(&leftover), FileTimestamps::uniform(FileTime::zero()));
}

#[test]
fn invalid_target_directory_is_fatal() {
    bin()
        .arg("/no/such/timepin/target")
        .arg("true")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid directory"));
}

#[test]
fn missing_command_is_a_usage_error() {
    let tmp = tempdir().unwrap();
    bin().arg(tmp.path()).assert().failure();
}

#[test]
fn cd_flag_runs_the_command_inside_the_target() {
    let tmp = tempdir().unwrap();

    bin()
        .arg("--cd")
        .arg(tmp.path())
        .arg("sh")
        .arg("-c")
        .arg("touch made-here.txt")
        .assert()
        .success();

    assert!(tmp.path().join("made-here.txt").exists());
}

#[test]
fn command_arguments_with_hyphens_pass_through() {
    let tmp = tempdir().unwrap();

    bin()
        .arg(tmp.path())
        .arg("sh")
        .arg("-c")
        .arg("true")
        .assert()
        .success();
}
