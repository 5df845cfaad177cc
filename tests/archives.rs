// tests/archives.rs

mod common;

use assert_cmd::prelude::*;
use common::*;
use predicates::prelude::*;
use std::fs;
use take::{take, ErrorKind, Options};
use tempfile::tempdir;

fn assert_testdir_extracted(work: &std::path::Path, final_path: &std::path::Path) {
    assert_eq!(final_path, work.join("testdir"));
    assert_eq!(
        fs::read_to_string(final_path.join("test.txt")).expect("extracted file"),
        FIXTURE_CONTENT
    );
    assert!(leftover_scratch_dirs(work).is_empty());
}

#[test]
fn test_every_archive_format_round_trips() -> Result<(), Box<dyn std::error::Error>> {
    let server = ArchiveServer::start();
    let entries = testdir_entries();
    let fixtures = [
        ("/dl/project.tar.gz", tar_gz(&entries)),
        ("/dl/project.tgz", tar_gz(&entries)),
        ("/dl/project.tar.bz2", tar_bz2(&entries)),
        ("/dl/project.tar.xz", tar_xz(&entries)),
        ("/dl/project.zip", zip(&entries)),
    ];

    for (route, bytes) in fixtures {
        server.serve(route, bytes);
        let work = tempdir()?;
        let options = Options::new_for_test(&server.url(route), work.path());

        let outcome = take(&options, None)?;

        assert!(outcome.was_downloaded(), "route: {}", route);
        assert!(!outcome.was_created() && !outcome.was_cloned());
        assert_testdir_extracted(work.path(), &outcome.final_path);
    }
    Ok(())
}

#[test]
fn test_tar_without_directory_entries_still_finds_root() -> Result<(), Box<dyn std::error::Error>> {
    let server = ArchiveServer::start();
    server.serve(
        "/implicit.tar.gz",
        tar_gz(&[("testdir/test.txt", FIXTURE_CONTENT)]),
    );
    let work = tempdir()?;

    let outcome = take(
        &Options::new_for_test(&server.url("/implicit.tar.gz"), work.path()),
        None,
    )?;

    assert_testdir_extracted(work.path(), &outcome.final_path);
    Ok(())
}

#[test]
fn test_flat_tarball_fails_extraction_and_cleans_up() -> Result<(), Box<dyn std::error::Error>> {
    let server = ArchiveServer::start();
    server.serve("/flat.tar.gz", tar_gz(&[("README", "no directory here")]));
    let work = tempdir()?;

    let err = take(
        &Options::new_for_test(&server.url("/flat.tar.gz"), work.path()),
        None,
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ExtractionFailed);
    assert!(err.to_string().contains("no directory found in archive"));
    assert_eq!(fs::read_dir(work.path())?.count(), 0);
    Ok(())
}

#[test]
fn test_http_error_is_download_failure() -> Result<(), Box<dyn std::error::Error>> {
    let server = ArchiveServer::start();
    server.fail("/missing.tar.gz", 404);
    server.fail("/broken.zip", 500);
    let work = tempdir()?;

    for route in ["/missing.tar.gz", "/broken.zip"] {
        let err = take(&Options::new_for_test(&server.url(route), work.path()), None)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DownloadFailed, "route: {}", route);
    }
    assert_eq!(fs::read_dir(work.path())?.count(), 0);
    Ok(())
}

#[test]
fn test_garbage_body_is_extraction_failure() -> Result<(), Box<dyn std::error::Error>> {
    let server = ArchiveServer::start();
    server.serve("/garbage.zip", b"<html>not a zip</html>".to_vec());
    server.serve("/garbage.tar.bz2", b"<html>not bzip2</html>".to_vec());
    let work = tempdir()?;

    for route in ["/garbage.zip", "/garbage.tar.bz2"] {
        let err = take(&Options::new_for_test(&server.url(route), work.path()), None)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExtractionFailed, "route: {}", route);
    }
    assert!(leftover_scratch_dirs(work.path()).is_empty());
    Ok(())
}

#[test]
fn test_existing_destination_requires_force() -> Result<(), Box<dyn std::error::Error>> {
    let server = ArchiveServer::start();
    server.serve("/p.tar.gz", tar_gz(&testdir_entries()));
    let work = tempdir()?;
    fs::create_dir(work.path().join("testdir"))?;
    fs::write(work.path().join("testdir/local.txt"), "keep me")?;
    let url = server.url("/p.tar.gz");

    let err = take(&Options::new_for_test(&url, work.path()), None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DestinationExists);
    assert_eq!(
        fs::read_to_string(work.path().join("testdir/local.txt"))?,
        "keep me"
    );
    assert!(leftover_scratch_dirs(work.path()).is_empty());

    let mut forced = Options::new_for_test(&url, work.path());
    forced.force = true;
    let outcome = take(&forced, None)?;
    assert_testdir_extracted(work.path(), &outcome.final_path);
    assert!(!work.path().join("testdir/local.txt").exists());
    Ok(())
}

#[test]
fn test_zip_without_common_root_uses_archive_name() -> Result<(), Box<dyn std::error::Error>> {
    let server = ArchiveServer::start();
    server.serve(
        "/files/site-v2.zip",
        zip(&[("index.html", "<h1>hi</h1>"), ("css/app.css", "body {}")]),
    );
    let work = tempdir()?;

    let outcome = take(
        &Options::new_for_test(&server.url("/files/site-v2.zip"), work.path()),
        None,
    )?;

    assert_eq!(outcome.final_path, work.path().join("site-v2"));
    assert_eq!(
        fs::read_to_string(outcome.final_path.join("index.html"))?,
        "<h1>hi</h1>"
    );
    assert!(outcome.final_path.join("css/app.css").is_file());
    Ok(())
}

/// Every file below `dir`, recursively.
fn files_under(dir: &std::path::Path) -> std::io::Result<Vec<std::path::PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(files_under(&path)?);
        } else {
            files.push(path);
        }
    }
    Ok(files)
}

#[test]
fn test_zip_with_backslash_names_keeps_content() -> Result<(), Box<dyn std::error::Error>> {
    let server = ArchiveServer::start();
    server.serve("/win.zip", zip(&[("proj\\a.txt", FIXTURE_CONTENT)]));
    let work = tempdir()?;

    let outcome = take(
        &Options::new_for_test(&server.url("/win.zip"), work.path()),
        None,
    )?;

    let files = files_under(&outcome.final_path)?;
    assert_eq!(files.len(), 1, "files: {:?}", files);
    assert_eq!(fs::read_to_string(&files[0])?, FIXTURE_CONTENT);
    assert!(leftover_scratch_dirs(work.path()).is_empty());
    Ok(())
}

#[test]
fn test_zip_ignores_macos_metadata_root() -> Result<(), Box<dyn std::error::Error>> {
    let server = ArchiveServer::start();
    server.serve(
        "/mac.zip",
        zip(&[
            ("testdir/", ""),
            ("testdir/test.txt", FIXTURE_CONTENT),
            ("__MACOSX/testdir/._test.txt", "resource fork"),
        ]),
    );
    let work = tempdir()?;

    let outcome = take(
        &Options::new_for_test(&server.url("/mac.zip"), work.path()),
        None,
    )?;

    assert_testdir_extracted(work.path(), &outcome.final_path);
    assert!(!work.path().join("__MACOSX").exists());
    Ok(())
}

#[test]
fn test_cli_downloads_into_current_directory() -> Result<(), Box<dyn std::error::Error>> {
    let server = ArchiveServer::start();
    server.serve("/cli.tgz", tar_gz(&testdir_entries()));
    let work = tempdir()?;
    let expected = work.path().canonicalize()?.join("testdir");

    let output = take_cmd()
        .arg(server.url("/cli.tgz"))
        .current_dir(work.path())
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.trim_end(), expected.to_string_lossy());
    assert_eq!(
        fs::read_to_string(expected.join("test.txt"))?,
        FIXTURE_CONTENT
    );
    Ok(())
}

#[test]
fn test_cli_download_failure_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let server = ArchiveServer::start();
    server.fail("/gone.zip", 404);
    let work = tempdir()?;

    take_cmd()
        .arg(server.url("/gone.zip"))
        .current_dir(work.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to download"));
    Ok(())
}
