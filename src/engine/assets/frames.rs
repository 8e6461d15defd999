// Frame sequence discovery by filename prefix
//
// An animation is stored as numbered images such as `walk1.bmp`, `walk2.bmp`,
// `walk10.bmp`. Older asset drops used other spellings for both the directory
// and the prefix, so every animation carries a list of fallbacks.

use log::debug;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// Where to look for one animation's frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSource {
    /// Subdirectory of the assets root holding the frames
    pub subdir: &'static str,
    /// Preferred filename prefix
    pub prefix: &'static str,
    /// Alternate prefixes, tried in order after `prefix`
    pub fallback_prefixes: &'static [&'static str],
    /// Expected file extension, without the dot
    pub extension: &'static str,
}

impl FrameSource {
    /// All prefixes in search order
    pub fn prefixes(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.prefix).chain(self.fallback_prefixes.iter().copied())
    }
}

/// Resolve the ordered frame paths for an animation.
///
/// Searches `root/<subdir>` with each prefix, then `root` itself with each
/// prefix, and returns the first non-empty match. An empty result means the
/// animation is absent.
pub fn resolve_frames(root: &Path, source: &FrameSource) -> Vec<PathBuf> {
    let subdir = root.join(source.subdir);

    for dir in [subdir.as_path(), root] {
        for prefix in source.prefixes() {
            let frames = collect_frames_by_prefix(dir, prefix, source.extension);
            if !frames.is_empty() {
                debug!(
                    "Resolved {} frame(s) for '{}' in {}",
                    frames.len(),
                    prefix,
                    dir.display()
                );
                return frames;
            }
        }
    }

    Vec::new()
}

/// Collect regular files in `dir` whose extension equals `extension` and whose
/// stem starts with `prefix` (both case-insensitive), ordered by frame index
/// and then by file name.
pub fn collect_frames_by_prefix(dir: &Path, prefix: &str, extension: &str) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let prefix = prefix.to_ascii_lowercase();
    let mut frames: Vec<(i64, String, PathBuf)> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter_map(|entry| {
            let path = entry.path();
            let ext = path.extension()?.to_string_lossy().into_owned();
            let stem = path.file_stem()?.to_string_lossy().to_ascii_lowercase();
            if !ext.eq_ignore_ascii_case(extension) || !stem.starts_with(&prefix) {
                return None;
            }
            let name = path.file_name()?.to_string_lossy().into_owned();
            Some((frame_index(&stem, prefix.len()), name, path))
        })
        .collect();

    frames.sort_by(|(a_index, a_name, _), (b_index, b_name, _)| {
        match a_index.cmp(b_index) {
            Ordering::Equal => a_name.cmp(b_name),
            other => other,
        }
    });

    frames.into_iter().map(|(_, _, path)| path).collect()
}

/// Parse the ASCII digit run starting at byte `prefix_len` of `stem`.
///
/// Returns -1 when there are no digits there, so unnumbered frames sort first.
/// Runs too long to fit saturate instead of wrapping.
pub fn frame_index(stem: &str, prefix_len: usize) -> i64 {
    let Some(rest) = stem.as_bytes().get(prefix_len..) else {
        return -1;
    };

    let digits = rest.iter().take_while(|b| b.is_ascii_digit());
    let mut value: i64 = 0;
    let mut has_digits = false;
    for digit in digits {
        has_digits = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
    }

    if has_digits {
        value
    } else {
        -1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::test_support::touch;

    const IDLE: FrameSource = FrameSource {
        subdir: "idel",
        prefix: "idle",
        fallback_prefixes: &["idel"],
        extension: "bmp",
    };

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_frame_index_parsing() {
        assert_eq!(frame_index("idle1", 4), 1);
        assert_eq!(frame_index("idle10", 4), 10);
        assert_eq!(frame_index("idle007b", 4), 7);
        assert_eq!(frame_index("idlex", 4), -1);
        assert_eq!(frame_index("idle", 4), -1);
        assert_eq!(frame_index("idle-3", 4), -1);
        assert_eq!(frame_index("idle99999999999999999999999", 4), i64::MAX);
    }

    #[test]
    fn test_numeric_ordering_with_unnumbered_first() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["idle2.bmp", "idle10.bmp", "idleX.bmp", "idle1.bmp"] {
            touch(dir.path(), name);
        }

        let frames = collect_frames_by_prefix(dir.path(), "idle", "bmp");
        assert_eq!(
            names(&frames),
            vec!["idleX.bmp", "idle1.bmp", "idle2.bmp", "idle10.bmp"]
        );
    }

    #[test]
    fn test_ties_broken_by_file_name() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["walk1b.bmp", "walk01.bmp", "walk1a.bmp", "walkZ.bmp", "walkA.bmp"] {
            touch(dir.path(), name);
        }

        let frames = collect_frames_by_prefix(dir.path(), "walk", "bmp");
        assert_eq!(
            names(&frames),
            vec!["walkA.bmp", "walkZ.bmp", "walk01.bmp", "walk1a.bmp", "walk1b.bmp"]
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "PUNCH1.BMP");
        touch(dir.path(), "Punch2.bmp");
        touch(dir.path(), "punch3.png");
        touch(dir.path(), "kick1.bmp");

        let frames = collect_frames_by_prefix(dir.path(), "punch", "bmp");
        assert_eq!(names(&frames), vec!["PUNCH1.BMP", "Punch2.bmp"]);
    }

    #[test]
    fn test_directories_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("idle5.bmp")).unwrap();
        touch(dir.path(), "idle1.bmp");

        let frames = collect_frames_by_prefix(dir.path(), "idle", "bmp");
        assert_eq!(names(&frames), vec!["idle1.bmp"]);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let frames = collect_frames_by_prefix(&dir.path().join("nope"), "idle", "bmp");
        assert!(frames.is_empty());
        assert!(resolve_frames(&dir.path().join("nope"), &IDLE).is_empty());
    }

    #[test]
    fn test_canonical_prefix_in_subdir_wins() {
        let root = tempfile::tempdir().unwrap();
        let subdir = root.path().join("idel");
        std::fs::create_dir(&subdir).unwrap();
        touch(&subdir, "idle1.bmp");
        touch(&subdir, "idel1.bmp");
        touch(root.path(), "idle9.bmp");

        let frames = resolve_frames(root.path(), &IDLE);
        assert_eq!(frames, vec![subdir.join("idle1.bmp")]);
    }

    #[test]
    fn test_fallback_prefix_in_subdir() {
        let root = tempfile::tempdir().unwrap();
        let subdir = root.path().join("idel");
        std::fs::create_dir(&subdir).unwrap();
        touch(&subdir, "idel2.bmp");
        touch(&subdir, "idel1.bmp");
        touch(root.path(), "idle1.bmp");

        let frames = resolve_frames(root.path(), &IDLE);
        assert_eq!(names(&frames), vec!["idel1.bmp", "idel2.bmp"]);
    }

    #[test]
    fn test_root_searched_after_subdir() {
        let root = tempfile::tempdir().unwrap();
        touch(root.path(), "idel1.bmp");
        touch(root.path(), "idle3.bmp");

        let frames = resolve_frames(root.path(), &IDLE);
        assert_eq!(frames, vec![root.path().join("idle3.bmp")]);
    }

    #[test]
    fn test_root_fallback_prefix_last() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("idel")).unwrap();
        touch(root.path(), "idel1.bmp");

        let frames = resolve_frames(root.path(), &IDLE);
        assert_eq!(frames, vec![root.path().join("idel1.bmp")]);
    }

    #[test]
    fn test_prefix_iteration_order() {
        let source = FrameSource {
            subdir: "walk",
            prefix: "walk",
            fallback_prefixes: &["rewalk", "wlk"],
            extension: "bmp",
        };
        assert_eq!(
            source.prefixes().collect::<Vec<_>>(),
            vec!["walk", "rewalk", "wlk"]
        );
    }
}
