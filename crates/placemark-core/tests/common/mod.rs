#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Writes a zip archive at `dir/name`. Members whose name ends in `/` become
/// directories.
pub fn write_kmz(dir: &Path, name: &str, members: &[(&str, &str)]) -> PathBuf {
    write_kmz_with(dir, name, members, SimpleFileOptions::default())
}

/// Like [`write_kmz`] but members are stored uncompressed, so their bytes
/// appear verbatim in the file.
pub fn write_stored_kmz(dir: &Path, name: &str, members: &[(&str, &str)]) -> PathBuf {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    write_kmz_with(dir, name, members, options)
}

fn write_kmz_with(
    dir: &Path,
    name: &str,
    members: &[(&str, &str)],
    options: SimpleFileOptions,
) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).unwrap();
    let mut zip = ZipWriter::new(file);

    for (member, content) in members {
        if member.ends_with('/') {
            zip.add_directory(*member, options).unwrap();
        } else {
            zip.start_file(*member, options).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
    }

    zip.finish().unwrap();
    path
}

/// Wraps `body` in `<kml><Document>..</Document></kml>`.
pub fn kml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2"><Document>{body}</Document></kml>"#
    )
}

pub fn placemark(coordinates: &str) -> String {
    format!("<Placemark><name>p</name><Point><coordinates>{coordinates}</coordinates></Point></Placemark>")
}

pub fn folder(body: &str) -> String {
    format!("<Folder><name>f</name>{body}</Folder>")
}
