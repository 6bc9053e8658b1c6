//! Per-entry metadata rendering for the listing builtin.

use std::ffi::CStr;
use std::fs::Metadata;
use std::os::unix::fs::MetadataExt;

use chrono::{Local, TimeZone};

/// ctime(3)'s fixed-width layout, without the trailing newline.
const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Renders one long-format line: type and permissions, hard-link count,
/// owner, group, size, last-status-change time, entry name.
pub fn detail_line(name: &str, meta: &Metadata) -> String {
    format!(
        "{} {} {} {} {:>5} {} {}",
        mode_string(meta.mode()),
        meta.nlink(),
        owner_name(),
        group_name(),
        meta.size(),
        format_timestamp(meta.ctime()),
        name
    )
}

/// Ten characters: the type glyph followed by `rwx` triplets for owner,
/// group, and other, with `-` where a bit is absent.
pub fn mode_string(mode: u32) -> String {
    let mut out = String::with_capacity(10);
    out.push(type_glyph(mode));
    let bits = [
        (libc::S_IRUSR as u32, 'r'),
        (libc::S_IWUSR as u32, 'w'),
        (libc::S_IXUSR as u32, 'x'),
        (libc::S_IRGRP as u32, 'r'),
        (libc::S_IWGRP as u32, 'w'),
        (libc::S_IXGRP as u32, 'x'),
        (libc::S_IROTH as u32, 'r'),
        (libc::S_IWOTH as u32, 'w'),
        (libc::S_IXOTH as u32, 'x'),
    ];
    for (bit, glyph) in bits {
        out.push(if mode & bit != 0 { glyph } else { '-' });
    }
    out
}

fn type_glyph(mode: u32) -> char {
    match mode & libc::S_IFMT as u32 {
        m if m == libc::S_IFDIR as u32 => 'd',
        m if m == libc::S_IFIFO as u32 => 'p',
        m if m == libc::S_IFLNK as u32 => 'l',
        _ => '-',
    }
}

/// Name of the invoking user. Every entry is attributed to the user running
/// the interpreter; per-file ownership is not resolved.
pub fn owner_name() -> String {
    unsafe {
        let uid = libc::getuid();
        let pw = libc::getpwuid(uid);
        if pw.is_null() {
            return uid.to_string();
        }
        CStr::from_ptr((*pw).pw_name).to_string_lossy().into_owned()
    }
}

/// Name of the invoking group, with the same attribution caveat as
/// [`owner_name`].
pub fn group_name() -> String {
    unsafe {
        let gid = libc::getgid();
        let gr = libc::getgrgid(gid);
        if gr.is_null() {
            return gid.to_string();
        }
        CStr::from_ptr((*gr).gr_name).to_string_lossy().into_owned()
    }
}

/// Renders seconds-since-epoch in the fixed 24-column ctime layout.
pub fn format_timestamp(secs: i64) -> String {
    Local
        .timestamp_opt(secs, 0)
        .earliest()
        .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| secs.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn mode_string_renders_directory_bits() {
        let mode = libc::S_IFDIR as u32 | 0o755;
        assert_eq!(mode_string(mode), "drwxr-xr-x");
    }

    #[test]
    fn mode_string_renders_fifo_and_symlink_glyphs() {
        assert!(mode_string(libc::S_IFIFO as u32 | 0o644).starts_with('p'));
        assert!(mode_string(libc::S_IFLNK as u32 | 0o777).starts_with('l'));
    }

    #[test]
    fn mode_string_masks_absent_bits() {
        let mode = libc::S_IFREG as u32 | 0o640;
        assert_eq!(mode_string(mode), "-rw-r-----");
    }

    #[test]
    fn timestamp_is_fixed_width() {
        let rendered = format_timestamp(1_700_000_000);
        assert_eq!(rendered.len(), 24);
        assert!(!rendered.ends_with('\n'));
    }

    #[test]
    fn owner_and_group_resolve_to_something() {
        assert!(!owner_name().is_empty());
        assert!(!group_name().is_empty());
    }

    #[test]
    fn detail_line_carries_all_columns() {
        let dir = env::temp_dir().join(format!("murex-fsinfo-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let file = dir.join("sample.txt");
        fs::write(&file, b"12345").unwrap();

        let meta = fs::symlink_metadata(&file).unwrap();
        let line = detail_line("sample.txt", &meta);

        assert!(line.starts_with('-'));
        assert_eq!(line.split_whitespace().next().unwrap().len(), 10);
        assert!(line.contains(&owner_name()));
        assert!(line.contains(" 5 "));
        assert!(line.ends_with("sample.txt"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
