// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::{JdkSwapError, Result};
use crate::platform::permissions::set_mode;
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tar::{Archive as TarArchive, EntryType};

/// Counts of what an extraction produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtractSummary {
    pub directories: usize,
    pub files: usize,
    pub links: usize,
}

/// Extract a gzip-compressed tar archive into `destination`.
///
/// Entries are written in stream order at `destination/<entry path>`. Entry
/// paths are joined as-is: names containing `..` or absolute paths are NOT
/// confined to `destination`. Only feed this archives from a trusted source.
pub fn extract_tar_gz(archive_path: &Path, destination: &Path) -> Result<ExtractSummary> {
    let file = File::open(archive_path).map_err(|e| {
        JdkSwapError::Extract(format!("Cannot open {}: {e}", archive_path.display()))
    })?;
    let mut archive = TarArchive::new(GzDecoder::new(file));

    fs::create_dir_all(destination).map_err(|e| {
        JdkSwapError::Extract(format!("Cannot create {}: {e}", destination.display()))
    })?;

    let entries = archive
        .entries()
        .map_err(|e| JdkSwapError::Extract(format!("Cannot read archive: {e}")))?;

    let mut summary = ExtractSummary::default();
    for entry in entries {
        let mut entry =
            entry.map_err(|e| JdkSwapError::Extract(format!("Cannot read archive entry: {e}")))?;
        let entry_path = entry
            .path()
            .map_err(|e| JdkSwapError::Extract(format!("Invalid entry name: {e}")))?
            .into_owned();
        let target = entry_destination(destination, &entry_path);
        let entry_type = entry.header().entry_type();

        let outcome = match entry_type {
            EntryType::Directory => {
                create_directory(&target).map(|_| summary.directories += 1)
            }
            EntryType::Regular | EntryType::Continuous => {
                let mode = entry.header().mode().ok();
                let size = entry.size();
                write_file(&mut entry, &target, size, mode).map(|_| summary.files += 1)
            }
            EntryType::Symlink => unpack_symlink(&mut entry, &target).map(|_| summary.links += 1),
            EntryType::Link => {
                hard_link(&entry, destination, &target).map(|_| summary.links += 1)
            }
            other => {
                log::debug!("Skipping {other:?} entry {}", entry_path.display());
                Ok(())
            }
        };

        outcome.map_err(|e| {
            JdkSwapError::Extract(format!("Entry '{}': {e}", entry_path.display()))
        })?;

        let extracted = summary.directories + summary.files + summary.links;
        if extracted > 0 && extracted % 100 == 0 {
            log::debug!("Extracted {extracted} entries...");
        }
    }

    log::info!(
        "Extracted {} directories, {} files and {} links into {}",
        summary.directories,
        summary.files,
        summary.links,
        destination.display()
    );
    Ok(summary)
}

fn create_directory(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)?;
    set_mode(path, 0o755)
}

fn write_file<R: io::Read>(
    reader: &mut R,
    target: &Path,
    size: u64,
    mode: Option<u32>,
) -> io::Result<()> {
    ensure_parent(target)?;
    // A read-only file from an earlier run cannot be truncated in place.
    remove_existing(target)?;

    let mut file = File::create(target)?;
    let copied = io::copy(reader, &mut file)?;
    if copied != size {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("archive ended after {copied} of {size} bytes"),
        ));
    }

    if let Some(mode) = mode {
        set_mode(target, mode & 0o777)?;
    }
    Ok(())
}

fn unpack_symlink<R: io::Read>(entry: &mut tar::Entry<'_, R>, target: &Path) -> io::Result<()> {
    ensure_parent(target)?;
    remove_existing(target)?;
    entry.unpack(target)?;
    Ok(())
}

/// Hard link names are relative to the archive root, not to the link itself.
fn hard_link<R: io::Read>(
    entry: &tar::Entry<'_, R>,
    destination: &Path,
    target: &Path,
) -> io::Result<()> {
    let link_name = entry.link_name()?.ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidData, "hard link without a link name")
    })?;
    let source = entry_destination(destination, &link_name);

    ensure_parent(target)?;
    remove_existing(target)?;
    fs::hard_link(&source, target)
}

// Entries left over from an earlier extraction of the same version.
fn remove_existing(target: &Path) -> io::Result<()> {
    match fs::symlink_metadata(target) {
        Ok(_) => fs::remove_file(target),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

fn ensure_parent(target: &Path) -> io::Result<()> {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Path an entry named `entry_path` is written to. Joined verbatim, see [`extract_tar_gz`].
pub fn entry_destination(destination: &Path, entry_path: &Path) -> PathBuf {
    destination.join(entry_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;
    use tempfile::{TempDir, tempdir};

    enum Item<'a> {
        Dir(&'a str),
        File(&'a str, &'a [u8], u32),
        Symlink(&'a str, &'a str),
    }

    fn build_tar_gz(dir: &TempDir, items: &[Item<'_>]) -> PathBuf {
        let archive_path = dir.path().join("fixture.tar.gz");
        let file = File::create(&archive_path).unwrap();
        let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));

        for item in items {
            let mut header = tar::Header::new_gnu();
            match item {
                Item::Dir(name) => {
                    header.set_entry_type(EntryType::Directory);
                    header.set_mode(0o755);
                    header.set_size(0);
                    header.set_cksum();
                    builder.append_data(&mut header, name, io::empty()).unwrap();
                }
                Item::File(name, content, mode) => {
                    header.set_entry_type(EntryType::Regular);
                    header.set_mode(*mode);
                    header.set_size(content.len() as u64);
                    header.set_cksum();
                    builder.append_data(&mut header, name, *content).unwrap();
                }
                Item::Symlink(name, target) => {
                    header.set_entry_type(EntryType::Symlink);
                    header.set_mode(0o777);
                    header.set_size(0);
                    builder.append_link(&mut header, name, target).unwrap();
                }
            }
        }

        builder.into_inner().unwrap().finish().unwrap();
        archive_path
    }

    #[test]
    fn test_extract_directory_and_two_files() -> Result<()> {
        let work = tempdir()?;
        let archive = build_tar_gz(
            &work,
            &[
                Item::Dir("pkg/"),
                Item::File("pkg/a.txt", b"alpha", 0o644),
                Item::File("pkg/nested/b.bin", &[0u8, 1, 2, 3, 255], 0o644),
            ],
        );

        let dest = work.path().join("out");
        let summary = extract_tar_gz(&archive, &dest)?;

        assert_eq!(
            summary,
            ExtractSummary {
                directories: 1,
                files: 2,
                links: 0
            }
        );
        assert!(dest.join("pkg").is_dir());
        assert_eq!(fs::read(dest.join("pkg/a.txt"))?, b"alpha");
        assert_eq!(fs::read(dest.join("pkg/nested/b.bin"))?, vec![0u8, 1, 2, 3, 255]);
        Ok(())
    }

    #[test]
    fn test_extract_creates_missing_destination() -> Result<()> {
        let work = tempdir()?;
        let archive = build_tar_gz(&work, &[Item::File("root.txt", b"root", 0o644)]);

        let dest = work.path().join("jdk-dump").join("21");
        extract_tar_gz(&archive, &dest)?;

        assert_eq!(fs::read_to_string(dest.join("root.txt"))?, "root");
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_extract_preserves_file_modes() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let work = tempdir()?;
        let archive = build_tar_gz(
            &work,
            &[
                Item::Dir("jdk/bin/"),
                Item::File("jdk/bin/javac", b"#!/bin/sh\n", 0o755),
                Item::File("jdk/release", b"JAVA_VERSION=21", 0o644),
            ],
        );

        let dest = work.path().join("out");
        extract_tar_gz(&archive, &dest)?;

        let javac = fs::metadata(dest.join("jdk/bin/javac"))?.permissions().mode();
        let release = fs::metadata(dest.join("jdk/release"))?.permissions().mode();
        assert_eq!(javac & 0o777, 0o755);
        assert_eq!(release & 0o777, 0o644);
        let bin = fs::metadata(dest.join("jdk/bin"))?.permissions().mode();
        assert_eq!(bin & 0o777, 0o755);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_extract_symlinks() -> Result<()> {
        let work = tempdir()?;
        let archive = build_tar_gz(
            &work,
            &[
                Item::Dir("jdk/lib/"),
                Item::File("jdk/lib/libjli.dylib", b"lib", 0o644),
                Item::Symlink("jdk/libjli.dylib", "lib/libjli.dylib"),
            ],
        );

        let dest = work.path().join("out");
        let summary = extract_tar_gz(&archive, &dest)?;
        assert_eq!(summary.links, 1);

        let link = dest.join("jdk/libjli.dylib");
        assert!(fs::symlink_metadata(&link)?.file_type().is_symlink());
        assert_eq!(fs::read_link(&link)?, PathBuf::from("lib/libjli.dylib"));
        assert_eq!(fs::read(&link)?, b"lib");

        // Re-extracting over the same tree must not trip over the existing link.
        extract_tar_gz(&archive, &dest)?;
        assert!(fs::symlink_metadata(&link)?.file_type().is_symlink());
        Ok(())
    }

    #[test]
    fn test_reextract_overwrites_files() -> Result<()> {
        let work = tempdir()?;
        let archive = build_tar_gz(&work, &[Item::File("a.txt", b"fresh", 0o644)]);

        let dest = work.path().join("out");
        fs::create_dir_all(&dest)?;
        fs::write(dest.join("a.txt"), b"stale and longer")?;

        extract_tar_gz(&archive, &dest)?;
        assert_eq!(fs::read(dest.join("a.txt"))?, b"fresh");
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_reextract_over_read_only_files() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let work = tempdir()?;
        let first = build_tar_gz(
            &work,
            &[
                Item::Dir("jdk/legal/"),
                Item::File("jdk/legal/LICENSE", b"old terms", 0o444),
            ],
        );
        let dest = work.path().join("out");
        extract_tar_gz(&first, &dest)?;
        let license = dest.join("jdk/legal/LICENSE");
        assert_eq!(fs::metadata(&license)?.permissions().mode() & 0o777, 0o444);

        let second = build_tar_gz(
            &work,
            &[
                Item::Dir("jdk/legal/"),
                Item::File("jdk/legal/LICENSE", b"new terms", 0o444),
            ],
        );
        extract_tar_gz(&second, &dest)?;

        assert_eq!(fs::read(&license)?, b"new terms");
        assert_eq!(fs::metadata(&license)?.permissions().mode() & 0o777, 0o444);
        Ok(())
    }

    #[test]
    fn test_missing_archive() {
        let work = tempdir().unwrap();
        let err = extract_tar_gz(&work.path().join("nope.tar.gz"), work.path()).unwrap_err();
        assert!(matches!(err, JdkSwapError::Extract(msg) if msg.contains("Cannot open")));
    }

    #[test]
    fn test_not_gzip() {
        let work = tempdir().unwrap();
        let bogus = work.path().join("bogus.tar.gz");
        fs::write(&bogus, b"<html>Not Found</html>").unwrap();

        let err = extract_tar_gz(&bogus, &work.path().join("out")).unwrap_err();
        assert!(matches!(err, JdkSwapError::Extract(_)));
    }

    #[test]
    fn test_truncated_archive_names_entry() {
        let work = tempdir().unwrap();
        let big = vec![b'x'; 64 * 1024];
        let archive = build_tar_gz(&work, &[Item::File("jdk/big.bin", &big, 0o644)]);

        // Keep the gzip header and part of the data, drop the rest.
        let bytes = fs::read(&archive).unwrap();
        let mut decoder = flate2::read::GzDecoder::new(&bytes[..]);
        let mut tar_bytes = Vec::new();
        io::Read::read_to_end(&mut decoder, &mut tar_bytes).unwrap();
        let truncated_tar = &tar_bytes[..512 + 1024];

        let truncated = work.path().join("truncated.tar.gz");
        let mut encoder = GzEncoder::new(File::create(&truncated).unwrap(), Compression::fast());
        encoder.write_all(truncated_tar).unwrap();
        encoder.finish().unwrap();

        let err = extract_tar_gz(&truncated, &work.path().join("out")).unwrap_err();
        assert!(matches!(err, JdkSwapError::Extract(msg) if msg.contains("jdk/big.bin")));
    }

    #[test]
    fn test_entry_destination_is_unsanitized() {
        // Documents the accepted risk: parent components are kept verbatim.
        let dest = Path::new("/work/jdk-dump/21");
        assert_eq!(
            entry_destination(dest, Path::new("../escape.txt")),
            PathBuf::from("/work/jdk-dump/21/../escape.txt")
        );
    }
}
