// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Locate, bootstrap and run the Tectonic typesetting engine.
//!
//! Responsibilities:
//! - Reuse a local or explicitly configured binary; otherwise download the
//!   release archive, optionally verify its digest, and unpack it.
//! - Run the engine on one `.tex` file and report whether the PDF appeared.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{debug, error, info, warn};
use url::Url;

use crate::models::build::{BuildConfig, COMPILER_ARCHIVE, COMPILER_BINARY, CompilerSettings};
use crate::utils::{ensure_extension, hash_file};

/// Result of one compiler run, judged only by the expected PDF.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompileOutcome {
    Produced(PathBuf),
    Missing(PathBuf),
}

impl CompileOutcome {
    pub fn pdf(&self) -> &Path {
        match self {
            CompileOutcome::Produced(path) | CompileOutcome::Missing(path) => path,
        }
    }

    pub fn is_produced(&self) -> bool {
        matches!(self, CompileOutcome::Produced(_))
    }
}

/// Return a usable compiler path, downloading and unpacking it when absent.
pub fn ensure_compiler(config: &BuildConfig) -> Result<PathBuf> {
    let settings = &config.compiler;
    if let Some(explicit) = &settings.explicit {
        if !explicit.is_file() {
            bail!("Configured compiler {:?} does not exist", explicit);
        }
        debug!(compiler = %explicit.display(), "Using configured compiler");
        return absolute(explicit);
    }

    let binary = config.output(COMPILER_BINARY);
    if binary.is_file() {
        debug!(compiler = %binary.display(), "Compiler already present");
        return absolute(&binary);
    }

    let url = settings.url.as_ref().ok_or_else(|| {
        anyhow!(
            "{} not found in {:?} and no download URL is available for this platform; pass --compiler or --compiler-url",
            COMPILER_BINARY,
            config.work_dir
        )
    })?;

    fs::create_dir_all(&config.work_dir)
        .with_context(|| format!("Failed to create working directory {:?}", config.work_dir))?;
    let archive = config.output(COMPILER_ARCHIVE);
    info!(url = %url, "Downloading compiler");
    let fetched = fetch_and_unpack(url, &archive, config);
    let cleaned = remove_archive(&archive);
    fetched?;
    cleaned?;

    if !binary.is_file() {
        bail!("Archive from {} did not contain {}", url, COMPILER_BINARY);
    }
    info!(compiler = %binary.display(), "Compiler installed");
    absolute(&binary)
}

/// Download, verify and extract; the archive is left for the caller to remove.
fn fetch_and_unpack(url: &Url, archive: &Path, config: &BuildConfig) -> Result<()> {
    download(url, archive, &config.compiler)?;
    if let Some(expected) = &config.compiler.sha256 {
        verify_digest(archive, expected)?;
    }
    extract_archive(archive, &config.work_dir)
}

/// Delete the downloaded archive, whether or not installation succeeded.
fn remove_archive(archive: &Path) -> Result<()> {
    match fs::remove_file(archive) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err)
            .with_context(|| format!("Failed to remove compiler archive {:?}", archive)),
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).with_context(|| format!("Failed to resolve {:?}", path))
}

fn download(url: &Url, target: &Path, settings: &CompilerSettings) -> Result<()> {
    let client = reqwest::blocking::Client::builder()
        .timeout(settings.timeout)
        .build()
        .context("Failed to build HTTP client")?;
    let mut response = client
        .get(url.clone())
        .send()
        .with_context(|| format!("Failed to download {}", url))?
        .error_for_status()
        .with_context(|| format!("Server rejected download of {}", url))?;

    let mut file =
        File::create(target).with_context(|| format!("Failed to create {:?}", target))?;
    let bytes = response
        .copy_to(&mut file)
        .with_context(|| format!("Failed to write {:?}", target))?;
    debug!(bytes, archive = %target.display(), "Download complete");
    Ok(())
}

/// Compare the file's SHA-256 against an expected hex digest (case-insensitive).
pub fn verify_digest(path: &Path, expected: &str) -> Result<()> {
    let actual = hash_file(path)?;
    if !actual.eq_ignore_ascii_case(expected.trim()) {
        bail!(
            "Checksum mismatch for {:?}: expected {}, got {}",
            path,
            expected.trim(),
            actual
        );
    }
    debug!(archive = %path.display(), "Checksum verified");
    Ok(())
}

/// Unpack every entry of a zip archive below `dest`.
///
/// Entries whose names escape `dest` abort the extraction. Unix permission
/// bits stored in the archive are restored.
pub fn extract_archive(archive: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive).with_context(|| format!("Failed to open {:?}", archive))?;
    let mut zip = zip::ZipArchive::new(file)
        .with_context(|| format!("Failed to read zip archive {:?}", archive))?;

    for idx in 0..zip.len() {
        let mut entry = zip
            .by_index(idx)
            .with_context(|| format!("Failed to read entry {} of {:?}", idx, archive))?;
        let Some(relative) = entry.enclosed_name() else {
            bail!("Refusing unsafe archive entry {:?}", entry.name());
        };
        let out_path = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)
                .with_context(|| format!("Failed to create {:?}", out_path))?;
            continue;
        }
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }
        let mut out =
            File::create(&out_path).with_context(|| format!("Failed to create {:?}", out_path))?;
        io::copy(&mut entry, &mut out)
            .with_context(|| format!("Failed to extract {:?}", out_path))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                fs::set_permissions(&out_path, fs::Permissions::from_mode(mode))
                    .with_context(|| format!("Failed to set permissions on {:?}", out_path))?;
            }
        }
        debug!(entry = %out_path.display(), "Extracted");
    }
    Ok(())
}

/// Run `compiler` on `tex` inside `work_dir` and check for the matching PDF.
pub fn compile(compiler: &Path, work_dir: &Path, tex: &str) -> Result<CompileOutcome> {
    info!(tex, "Compiling");
    let status = Command::new(compiler)
        .arg(tex)
        .current_dir(work_dir)
        .status()
        .with_context(|| format!("Failed to run compiler {:?}", compiler))?;
    if !status.success() {
        warn!(tex, %status, "Compiler exited with an error");
    }

    let pdf = ensure_extension(work_dir.join(tex), "pdf");
    if pdf.is_file() {
        info!(pdf = %pdf.display(), "PDF generated");
        Ok(CompileOutcome::Produced(pdf))
    } else {
        error!(pdf = %pdf.display(), "Compilation did not produce the expected PDF");
        Ok(CompileOutcome::Missing(pdf))
    }
}

/// Open a produced document with the system viewer.
pub fn open_document(path: &Path) -> Result<()> {
    open::that(path).with_context(|| format!("Failed to open {:?}", path))
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};
    use std::io::{Read, Write};
    use std::net::{SocketAddr, TcpListener};
    use std::thread::{self, JoinHandle};

    use tempfile::TempDir;
    use url::Url;
    use zip::write::{FileOptions, ZipWriter};

    use super::{CompileOutcome, compile, ensure_compiler, extract_archive, verify_digest};
    use crate::models::build::{BuildConfig, COMPILER_ARCHIVE, COMPILER_BINARY};

    fn write_zip(path: &std::path::Path, entries: &[(&str, &[u8])]) {
        let mut zip = ZipWriter::new(File::create(path).unwrap());
        for (name, data) in entries {
            let options: FileOptions<'_, ()> = FileOptions::default().unix_permissions(0o755);
            zip.start_file(*name, options).unwrap();
            zip.write_all(data).unwrap();
        }
        zip.finish().unwrap();
    }

    fn offline_config(dir: &std::path::Path) -> BuildConfig {
        let mut config = BuildConfig::new(dir);
        config.compiler.url = None;
        config
    }

    /// Serve `body` once over plain HTTP on a loopback port.
    fn serve_once(body: Vec<u8>) -> (SocketAddr, JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let header = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/zip\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            stream.write_all(header.as_bytes()).unwrap();
            stream.write_all(&body).unwrap();
            stream.flush().unwrap();
        });
        (addr, handle)
    }

    fn release_zip(dir: &std::path::Path) -> Vec<u8> {
        let path = dir.join("release.zip");
        write_zip(&path, &[(COMPILER_BINARY, b"engine")]);
        fs::read(path).unwrap()
    }

    fn download_config(dir: &std::path::Path, addr: SocketAddr) -> BuildConfig {
        let mut config = BuildConfig::new(dir.join("work"));
        config.compiler.url = Some(Url::parse(&format!("http://{addr}/tectonic.zip")).unwrap());
        config.compiler.sha256 = None;
        config
    }

    #[test]
    fn ensure_compiler_downloads_and_unpacks_release() {
        let tmp = TempDir::new().unwrap();
        let (addr, server) = serve_once(release_zip(tmp.path()));
        let config = download_config(tmp.path(), addr);

        let path = ensure_compiler(&config).unwrap();
        server.join().unwrap();

        let binary = config.output(COMPILER_BINARY);
        assert_eq!(path, binary.canonicalize().unwrap());
        assert_eq!(fs::read(&binary).unwrap(), b"engine");
        assert!(!config.output(COMPILER_ARCHIVE).exists());
    }

    // A rejected download must not leave the archive behind.
    #[test]
    fn ensure_compiler_removes_archive_on_digest_mismatch() {
        let tmp = TempDir::new().unwrap();
        let (addr, server) = serve_once(release_zip(tmp.path()));
        let mut config = download_config(tmp.path(), addr);
        config.compiler.sha256 = Some("0".repeat(64));

        let err = ensure_compiler(&config).unwrap_err();
        server.join().unwrap();

        assert!(format!("{err:#}").contains("Checksum mismatch"));
        assert!(!config.output(COMPILER_ARCHIVE).exists());
        assert!(!config.output(COMPILER_BINARY).exists());
    }

    // A binary already in the working directory means no download is attempted.
    #[test]
    fn ensure_compiler_reuses_local_binary() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(COMPILER_BINARY), b"binary").unwrap();

        let path = ensure_compiler(&offline_config(tmp.path())).unwrap();

        assert_eq!(path, tmp.path().join(COMPILER_BINARY).canonicalize().unwrap());
        assert!(!tmp.path().join("tectonic.zip").exists());
    }

    #[test]
    fn ensure_compiler_honours_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let explicit = tmp.path().join("custom-tex");
        let mut config = offline_config(tmp.path());
        config.compiler.explicit = Some(explicit.clone());

        assert!(ensure_compiler(&config).is_err());
        fs::write(&explicit, b"binary").unwrap();
        assert_eq!(
            ensure_compiler(&config).unwrap(),
            explicit.canonicalize().unwrap()
        );
    }

    #[test]
    fn ensure_compiler_without_url_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = ensure_compiler(&offline_config(tmp.path())).unwrap_err();
        assert!(err.to_string().contains("--compiler"));
    }

    #[test]
    fn extract_archive_unpacks_entries() {
        let tmp = TempDir::new().unwrap();
        let archive = tmp.path().join("tectonic.zip");
        write_zip(&archive, &[("tectonic", b"engine"), ("share/readme.txt", b"hi")]);

        extract_archive(&archive, tmp.path()).unwrap();

        assert_eq!(fs::read(tmp.path().join("tectonic")).unwrap(), b"engine");
        assert_eq!(fs::read(tmp.path().join("share/readme.txt")).unwrap(), b"hi");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(tmp.path().join("tectonic"))
                .unwrap()
                .permissions()
                .mode();
            assert_eq!(mode & 0o777, 0o755);
        }
    }

    // Entries pointing outside the destination must not be written anywhere.
    #[test]
    fn extract_archive_refuses_path_traversal() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("dest");
        fs::create_dir_all(&dest).unwrap();
        let archive = tmp.path().join("evil.zip");
        write_zip(&archive, &[("../escaped.txt", b"nope")]);

        assert!(extract_archive(&archive, &dest).is_err());
        assert!(!tmp.path().join("escaped.txt").exists());
    }

    #[test]
    fn verify_digest_compares_case_insensitively() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("abc");
        fs::write(&path, b"abc").unwrap();

        verify_digest(
            &path,
            "BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD",
        )
        .unwrap();
        assert!(verify_digest(&path, "00").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn compile_reports_pdf_presence() {
        let tmp = TempDir::new().unwrap();
        let compiler = std::path::Path::new("true");

        let missing = compile(compiler, tmp.path(), "paper.tex").unwrap();
        assert_eq!(missing, CompileOutcome::Missing(tmp.path().join("paper.pdf")));

        fs::write(tmp.path().join("paper.pdf"), b"%PDF").unwrap();
        let produced = compile(compiler, tmp.path(), "paper.tex").unwrap();
        assert!(produced.is_produced());
        assert_eq!(produced.pdf(), tmp.path().join("paper.pdf"));
    }

    #[test]
    fn compile_fails_when_compiler_cannot_start() {
        let tmp = TempDir::new().unwrap();
        let compiler = tmp.path().join("no-such-compiler");
        assert!(compile(&compiler, tmp.path(), "paper.tex").is_err());
    }
}
