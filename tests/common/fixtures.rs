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

/// Shared fixtures for building fake Corretto archives
use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::Write;
use tar::{Builder, EntryType, Header};

/// Contents of the fake `java` launcher inside fixture archives.
#[allow(dead_code)]
pub const JAVA_LAUNCHER: &[u8] = b"#!/bin/sh\necho \"openjdk fixture\"\n";

/// Creates a gzip-compressed tar laid out like a macOS Corretto bundle
///
/// ```text
/// amazon-corretto-<version>.jdk/
///   Contents/Info.plist
///   Contents/Home/release
///   Contents/Home/bin/java      (mode 0644, not yet executable)
///   Contents/Home/lib/libjli.dylib
/// ```
///
/// # Arguments
/// * `version` - The version label (e.g., "17")
///
/// # Returns
/// The archive bytes, ready to be served by a mock server
#[allow(dead_code)]
pub fn corretto_archive(version: &str) -> Vec<u8> {
    let root = format!("amazon-corretto-{version}.jdk");
    let mut builder = Builder::new(GzEncoder::new(Vec::new(), Compression::default()));

    for dir in ["", "Contents/", "Contents/Home/", "Contents/Home/bin/", "Contents/Home/lib/"] {
        append_dir(&mut builder, &format!("{root}/{dir}"));
    }
    append_file(
        &mut builder,
        &format!("{root}/Contents/Info.plist"),
        b"<plist version=\"1.0\"></plist>\n",
        0o644,
    );
    append_file(
        &mut builder,
        &format!("{root}/Contents/Home/release"),
        format!("JAVA_VERSION=\"{version}\"\n").as_bytes(),
        0o644,
    );
    append_file(
        &mut builder,
        &format!("{root}/Contents/Home/bin/java"),
        JAVA_LAUNCHER,
        0o644,
    );
    append_file(
        &mut builder,
        &format!("{root}/Contents/Home/lib/libjli.dylib"),
        &[0u8; 64],
        0o644,
    );

    let mut encoder = builder.into_inner().unwrap();
    encoder.flush().unwrap();
    encoder.finish().unwrap()
}

fn append_dir<W: Write>(builder: &mut Builder<W>, path: &str) {
    let mut header = Header::new_gnu();
    header.set_entry_type(EntryType::Directory);
    header.set_size(0);
    header.set_mode(0o755);
    builder.append_data(&mut header, path, std::io::empty()).unwrap();
}

fn append_file<W: Write>(builder: &mut Builder<W>, path: &str, data: &[u8], mode: u32) {
    let mut header = Header::new_gnu();
    header.set_entry_type(EntryType::Regular);
    header.set_size(data.len() as u64);
    header.set_mode(mode);
    builder.append_data(&mut header, path, data).unwrap();
}
