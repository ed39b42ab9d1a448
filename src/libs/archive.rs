// Archive extraction for the three formats the supported tools actually ship:
// zip, tar+gzip and tar+xz. The kind is resolved once from the file name and
// carried as a variant, instead of re-branching on the extension at every
// call site.
//
// Two extraction shapes exist because release archives come in two shapes:
// a full tree that becomes the versioned install directory, and a single
// named member for tools that bury one binary inside a larger archive.

// The 'colored' crate helps us make our console output look pretty and readable.
use colored::Colorize;
// Our custom logging macros.
use crate::log_debug;
// Decompressors for the two tar flavors.
use flate2::read::GzDecoder;
use xz2::read::XzDecoder;
// For extracting zip archives.
use zip::ZipArchive;
use zip::result::ZipError;

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::libs::error::{InstallError, Result};

/// The archive formats we know how to unpack, resolved from the trailing
/// file-name extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Zip,
    TarGz,
    TarXz,
}

impl ArchiveKind {
    /// Determines the archive kind from a file name's trailing extension.
    ///
    /// # Returns
    /// * `Ok(ArchiveKind)` for `.zip`, `.gz`/`.tgz` and `.xz`/`.txz` names.
    /// * `InstallError::UnsupportedFormat` for anything else, including a
    ///   missing extension. This is fatal; there is no content sniffing
    ///   fallback.
    pub fn from_path(path: &Path) -> Result<ArchiveKind> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        match ext.as_deref() {
            Some("zip") => Ok(ArchiveKind::Zip),
            Some("gz") | Some("tgz") => Ok(ArchiveKind::TarGz),
            Some("xz") | Some("txz") => Ok(ArchiveKind::TarXz),
            _ => Err(InstallError::UnsupportedFormat(
                path.file_name()
                    .unwrap_or(path.as_os_str())
                    .to_string_lossy()
                    .into_owned(),
            )),
        }
    }
}

/// Extracts an archive into `dest_dir`.
///
/// Without `strip_subdir` every entry is unpacked verbatim, preserving the
/// archive's internal directory structure. With `strip_subdir`, entries
/// whose path starts with `<strip_subdir>/` lose that leading component and
/// everything else is silently skipped; the subdirectory marker entry
/// itself is skipped too. That flattens archives which wrap their payload
/// in a single version-named top-level folder.
///
/// Tar entries keep the permission bits recorded in the archive; zip entries
/// get the archive's unix mode where one is present. Whatever executable
/// bit the installed tool needs is re-applied by the install step anyway.
///
/// Malformed archives and decode errors propagate uninterpreted, and a
/// partially extracted tree is left in place.
pub fn extract(archive: &Path, dest_dir: &Path, strip_subdir: Option<&str>) -> Result<()> {
    let kind = ArchiveKind::from_path(archive)?;
    log_debug!(
        "[Archive] Extracting {} into {} (strip: {:?})",
        archive.display().to_string().blue(),
        dest_dir.display().to_string().cyan(),
        strip_subdir
    );
    fs::create_dir_all(dest_dir)?;

    match kind {
        ArchiveKind::Zip => extract_zip(archive, dest_dir, strip_subdir),
        ArchiveKind::TarGz => {
            extract_tar(GzDecoder::new(File::open(archive)?), dest_dir, strip_subdir)
        }
        ArchiveKind::TarXz => {
            extract_tar(XzDecoder::new(File::open(archive)?), dest_dir, strip_subdir)
        }
    }
}

/// Extracts exactly one named member of an archive to `dest_file`,
/// creating or truncating the destination. Used for tools that ship as a
/// single binary inside a larger archive; nothing else in the archive is
/// touched.
///
/// # Returns
/// * `InstallError::MissingMember` if no entry matches `member` exactly.
pub fn extract_member(archive: &Path, member: &str, dest_file: &Path) -> Result<()> {
    let kind = ArchiveKind::from_path(archive)?;
    log_debug!(
        "[Archive] Extracting member '{}' of {} to {}",
        member.yellow(),
        archive.display(),
        dest_file.display().to_string().cyan()
    );
    if let Some(parent) = dest_file.parent() {
        fs::create_dir_all(parent)?;
    }

    match kind {
        ArchiveKind::Zip => {
            let mut zip = ZipArchive::new(File::open(archive)?)?;
            let mut entry = match zip.by_name(member) {
                Ok(entry) => entry,
                Err(ZipError::FileNotFound) => {
                    return Err(InstallError::MissingMember {
                        archive: archive.to_path_buf(),
                        member: member.to_string(),
                    });
                }
                Err(e) => return Err(e.into()),
            };
            let mut out = File::create(dest_file)?;
            io::copy(&mut entry, &mut out)?;
            Ok(())
        }
        ArchiveKind::TarGz => {
            copy_tar_member(GzDecoder::new(File::open(archive)?), archive, member, dest_file)
        }
        ArchiveKind::TarXz => {
            copy_tar_member(XzDecoder::new(File::open(archive)?), archive, member, dest_file)
        }
    }
}

/// Applies the strip rule to one entry path. `None` means "skip this entry":
/// either it lies outside the prefix or it is the prefix marker itself.
fn stripped_entry_path(entry_path: &Path, strip_subdir: Option<&str>) -> Option<PathBuf> {
    match strip_subdir {
        None => Some(entry_path.to_path_buf()),
        Some(prefix) => {
            // Component-wise prefix match, so "tool-1.2" does not swallow
            // entries under "tool-1.2.3/".
            let rel = entry_path.strip_prefix(prefix).ok()?;
            if rel.as_os_str().is_empty() {
                None
            } else {
                Some(rel.to_path_buf())
            }
        }
    }
}

fn extract_tar<R: Read>(reader: R, dest_dir: &Path, strip_subdir: Option<&str>) -> Result<()> {
    let mut tar = tar::Archive::new(reader);
    for entry in tar.entries()? {
        let mut entry = entry?;
        let entry_path = entry.path()?.into_owned();
        let rel = match stripped_entry_path(&entry_path, strip_subdir) {
            Some(rel) => rel,
            None => continue,
        };
        let out = dest_dir.join(rel);
        if let Some(parent) = out.parent() {
            fs::create_dir_all(parent)?;
        }
        // `unpack` restores the mode bits recorded in the tar header.
        entry.unpack(&out)?;
    }
    Ok(())
}

fn extract_zip(archive: &Path, dest_dir: &Path, strip_subdir: Option<&str>) -> Result<()> {
    let mut zip = ZipArchive::new(File::open(archive)?)?;
    for index in 0..zip.len() {
        let mut entry = zip.by_index(index)?;
        let entry_path = PathBuf::from(entry.name());
        let rel = match stripped_entry_path(&entry_path, strip_subdir) {
            Some(rel) => rel,
            None => continue,
        };
        let out = dest_dir.join(rel);
        if entry.is_dir() {
            fs::create_dir_all(&out)?;
            continue;
        }
        if let Some(parent) = out.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = File::create(&out)?;
        io::copy(&mut entry, &mut file)?;
        // Zip carries unix modes only when built on unix; restore them when
        // present so extracted trees keep their executable bits.
        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&out, fs::Permissions::from_mode(mode))?;
        }
    }
    Ok(())
}

fn copy_tar_member<R: Read>(
    reader: R,
    archive: &Path,
    member: &str,
    dest_file: &Path,
) -> Result<()> {
    let mut tar = tar::Archive::new(reader);
    for entry in tar.entries()? {
        let mut entry = entry?;
        if entry.path()? == Path::new(member) {
            let mut out = File::create(dest_file)?;
            io::copy(&mut entry, &mut out)?;
            return Ok(());
        }
    }
    Err(InstallError::MissingMember {
        archive: archive.to_path_buf(),
        member: member.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;
    use tempfile::TempDir;
    use xz2::write::XzEncoder;

    // Fabricates a zip with the shape release archives typically have:
    // a version-named top-level folder wrapping the payload.
    fn sample_zip(dir: &Path) -> PathBuf {
        let path = dir.join("tool-1.2.3.zip");
        let mut zip = zip::ZipWriter::new(File::create(&path).unwrap());
        let dir_opts = zip::write::FileOptions::default();
        let exec = zip::write::FileOptions::default().unix_permissions(0o755);
        let plain = zip::write::FileOptions::default().unix_permissions(0o644);

        zip.add_directory("tool-1.2.3/", dir_opts).unwrap();
        zip.add_directory("tool-1.2.3/bin/", dir_opts).unwrap();
        zip.start_file("tool-1.2.3/bin/thing", exec).unwrap();
        zip.write_all(b"#!/bin/sh\necho thing\n").unwrap();
        zip.start_file("tool-1.2.3/README", plain).unwrap();
        zip.write_all(b"read me\n").unwrap();
        zip.start_file("unrelated/notes.txt", plain).unwrap();
        zip.write_all(b"outside the prefix\n").unwrap();
        zip.finish().unwrap();
        path
    }

    fn tar_tree<W: Write>(builder: &mut tar::Builder<W>) {
        let mut dir = tar::Header::new_gnu();
        dir.set_entry_type(tar::EntryType::dir());
        dir.set_size(0);
        dir.set_mode(0o755);
        builder
            .append_data(&mut dir, "tool-1.2.3", std::io::empty())
            .unwrap();

        let payload = b"#!/bin/sh\necho thing\n";
        let mut exec = tar::Header::new_gnu();
        exec.set_size(payload.len() as u64);
        exec.set_mode(0o755);
        builder
            .append_data(&mut exec, "tool-1.2.3/bin/thing", &payload[..])
            .unwrap();

        let readme = b"read me\n";
        let mut plain = tar::Header::new_gnu();
        plain.set_size(readme.len() as u64);
        plain.set_mode(0o644);
        builder
            .append_data(&mut plain, "tool-1.2.3/README", &readme[..])
            .unwrap();

        let notes = b"outside the prefix\n";
        let mut outside = tar::Header::new_gnu();
        outside.set_size(notes.len() as u64);
        outside.set_mode(0o644);
        builder
            .append_data(&mut outside, "unrelated/notes.txt", &notes[..])
            .unwrap();
    }

    fn sample_tar_gz(dir: &Path) -> PathBuf {
        let path = dir.join("tool-1.2.3.tar.gz");
        let encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        let mut builder = tar::Builder::new(encoder);
        tar_tree(&mut builder);
        builder.into_inner().unwrap().finish().unwrap();
        path
    }

    fn sample_tar_xz(dir: &Path) -> PathBuf {
        let path = dir.join("tool-1.2.3.tar.xz");
        let encoder = XzEncoder::new(File::create(&path).unwrap(), 6);
        let mut builder = tar::Builder::new(encoder);
        tar_tree(&mut builder);
        builder.into_inner().unwrap().finish().unwrap();
        path
    }

    fn assert_stripped_layout(dest: &Path) {
        assert!(dest.join("bin/thing").is_file());
        assert!(dest.join("README").is_file());
        // The marker directory and everything outside the prefix are absent.
        assert!(!dest.join("tool-1.2.3").exists());
        assert!(!dest.join("unrelated").exists());
        assert!(!dest.join("notes.txt").exists());
    }

    #[test]
    fn kind_is_resolved_from_the_trailing_extension() {
        assert_eq!(
            ArchiveKind::from_path(Path::new("a/tool.zip")).unwrap(),
            ArchiveKind::Zip
        );
        assert_eq!(
            ArchiveKind::from_path(Path::new("tool-1.0.tar.gz")).unwrap(),
            ArchiveKind::TarGz
        );
        assert_eq!(
            ArchiveKind::from_path(Path::new("tool-1.0.tar.xz")).unwrap(),
            ArchiveKind::TarXz
        );
    }

    #[test]
    fn unknown_or_missing_extensions_are_rejected() {
        for name in ["tool.rar", "tool.tar.bz2", "tool"] {
            let err = ArchiveKind::from_path(Path::new(name)).unwrap_err();
            assert!(matches!(err, InstallError::UnsupportedFormat(_)), "{name}");
        }
    }

    #[test]
    fn zip_extracts_verbatim_without_strip() {
        let tmp = TempDir::new().unwrap();
        let archive = sample_zip(tmp.path());
        let dest = tmp.path().join("out");

        extract(&archive, &dest, None).unwrap();
        assert!(dest.join("tool-1.2.3/bin/thing").is_file());
        assert!(dest.join("tool-1.2.3/README").is_file());
        assert!(dest.join("unrelated/notes.txt").is_file());
    }

    #[test]
    fn zip_strip_flattens_and_skips_foreign_entries() {
        let tmp = TempDir::new().unwrap();
        let archive = sample_zip(tmp.path());
        let dest = tmp.path().join("out");

        extract(&archive, &dest, Some("tool-1.2.3")).unwrap();
        assert_stripped_layout(&dest);
        assert_eq!(
            fs::read(dest.join("README")).unwrap(),
            b"read me\n".to_vec()
        );
    }

    #[cfg(unix)]
    #[test]
    fn zip_restores_recorded_unix_modes() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = TempDir::new().unwrap();
        let archive = sample_zip(tmp.path());
        let dest = tmp.path().join("out");

        extract(&archive, &dest, Some("tool-1.2.3")).unwrap();
        let mode = fs::metadata(dest.join("bin/thing")).unwrap().permissions().mode();
        assert_ne!(mode & 0o111, 0);
    }

    #[test]
    fn tar_gz_strip_flattens_and_skips_foreign_entries() {
        let tmp = TempDir::new().unwrap();
        let archive = sample_tar_gz(tmp.path());
        let dest = tmp.path().join("out");

        extract(&archive, &dest, Some("tool-1.2.3")).unwrap();
        assert_stripped_layout(&dest);
    }

    #[cfg(unix)]
    #[test]
    fn tar_preserves_permission_bits() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = TempDir::new().unwrap();
        let archive = sample_tar_gz(tmp.path());
        let dest = tmp.path().join("out");

        extract(&archive, &dest, None).unwrap();
        let mode = fs::metadata(dest.join("tool-1.2.3/bin/thing"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn tar_xz_strip_flattens_and_skips_foreign_entries() {
        let tmp = TempDir::new().unwrap();
        let archive = sample_tar_xz(tmp.path());
        let dest = tmp.path().join("out");

        extract(&archive, &dest, Some("tool-1.2.3")).unwrap();
        assert_stripped_layout(&dest);
    }

    #[test]
    fn member_extraction_copies_exactly_one_file() {
        let tmp = TempDir::new().unwrap();
        let archive = sample_tar_xz(tmp.path());
        let dest = tmp.path().join("just-thing");

        extract_member(&archive, "tool-1.2.3/bin/thing", &dest).unwrap();
        assert_eq!(
            fs::read(&dest).unwrap(),
            b"#!/bin/sh\necho thing\n".to_vec()
        );
        // Nothing else was unpacked alongside it.
        assert!(!tmp.path().join("tool-1.2.3").exists());
    }

    #[test]
    fn member_extraction_reports_missing_members() {
        let tmp = TempDir::new().unwrap();
        for archive in [sample_zip(tmp.path()), sample_tar_gz(tmp.path())] {
            let err =
                extract_member(&archive, "tool-1.2.3/bin/absent", &tmp.path().join("x")).unwrap_err();
            assert!(matches!(err, InstallError::MissingMember { .. }));
        }
    }
}
