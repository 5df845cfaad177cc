// tests/common.rs
#![allow(dead_code)] // Each integration test uses a different subset of these helpers.

use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use std::process::Command;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Content of the single file inside every fixture archive.
pub const FIXTURE_CONTENT: &str = "hello from the archive\n";

// Helper function to get the binary command
pub fn take_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("take"))
}

/// A local HTTP server serving archive bytes.
///
/// The server runs on its own multi-threaded runtime so blocking callers
/// (the library's `reqwest` client or a spawned binary) can talk to it from
/// ordinary `#[test]` functions.
pub struct ArchiveServer {
    // Dropped before the runtime that drives it.
    server: MockServer,
    rt: Runtime,
}

impl ArchiveServer {
    pub fn start() -> Self {
        let rt = Runtime::new().expect("failed to build tokio runtime");
        let server = rt.block_on(MockServer::start());
        Self { server, rt }
    }

    /// Serves `body` with status 200 at `route`.
    pub fn serve(&self, route: &str, body: Vec<u8>) {
        self.respond(route, ResponseTemplate::new(200).set_body_bytes(body));
    }

    /// Answers `route` with an empty body and the given status.
    pub fn fail(&self, route: &str, status: u16) {
        self.respond(route, ResponseTemplate::new(status));
    }

    fn respond(&self, route: &str, template: ResponseTemplate) {
        self.rt.block_on(
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(template)
                .mount(&self.server),
        );
    }

    pub fn url(&self, route: &str) -> String {
        format!("{}{}", self.server.uri(), route)
    }
}

/// Builds an uncompressed tar stream from `(path, content)` pairs.
///
/// Paths ending in `/` become directory entries.
fn tar_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());
    for (name, content) in entries {
        let mut header = tar::Header::new_gnu();
        if name.ends_with('/') {
            header.set_entry_type(tar::EntryType::Directory);
            header.set_size(0);
            header.set_mode(0o755);
            header.set_cksum();
            builder
                .append_data(&mut header, name, std::io::empty())
                .expect("append dir");
        } else {
            header.set_size(content.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder
                .append_data(&mut header, name, content.as_bytes())
                .expect("append file");
        }
    }
    builder.into_inner().expect("finish tar")
}

pub fn tar_gz(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut encoder =
        flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(&tar_bytes(entries)).expect("gzip");
    encoder.finish().expect("gzip finish")
}

pub fn tar_bz2(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut encoder = bzip2::write::BzEncoder::new(Vec::new(), bzip2::Compression::default());
    encoder.write_all(&tar_bytes(entries)).expect("bzip2");
    encoder.finish().expect("bzip2 finish")
}

pub fn tar_xz(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut encoder = xz2::write::XzEncoder::new(Vec::new(), 6);
    encoder.write_all(&tar_bytes(entries)).expect("xz");
    encoder.finish().expect("xz finish")
}

pub fn zip(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();
    for (name, content) in entries {
        if name.ends_with('/') {
            writer.add_directory(*name, options).expect("zip dir");
        } else {
            writer.start_file(*name, options).expect("zip file");
            writer.write_all(content.as_bytes()).expect("zip write");
        }
    }
    writer.finish().expect("zip finish").into_inner()
}

/// The canonical fixture: one top-level directory `testdir` holding `test.txt`.
pub fn testdir_entries() -> Vec<(&'static str, &'static str)> {
    vec![("testdir/", ""), ("testdir/test.txt", FIXTURE_CONTENT)]
}

/// Names of `.take-*` scratch directories left in `dir`.
pub fn leftover_scratch_dirs(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .expect("read working dir")
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with(".take-"))
        .collect()
}

/// Initializes a repository at `repo_path` with one committed file.
#[cfg(feature = "git")]
pub fn init_repo_with_commit(
    repo_path: &Path,
    filename: &str,
    content: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = git2::Repository::init(repo_path)?;
    fs::write(repo_path.join(filename), content)?;

    let mut index = repo.index()?;
    index.add_path(Path::new(filename))?;
    index.write()?;
    let oid = index.write_tree()?;
    let tree = repo.find_tree(oid)?;

    let signature = git2::Signature::now("Test User", "test@example.com")?;
    repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        "Initial commit",
        &tree,
        &[],
    )?;
    Ok(())
}
