//! System font discovery for the rasterizer.
//!
//! No font binary ships with the crate; a sans-serif TTF is located on disk
//! at export time. Export fails with a reportable error when none exists.

use std::fs;
use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings};

use crate::error::{CardError, CardResult};

/// Well-known font locations, tried in order before any directory scan.
const CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Verdana.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// Directories scanned recursively when no candidate matched.
const SCAN_ROOTS: &[&str] = &["/usr/share/fonts", "/usr/local/share/fonts"];

/// Load the first usable system font.
pub fn load_system_font() -> CardResult<Font> {
    for path in CANDIDATES {
        if let Some(font) = try_load(Path::new(path)) {
            tracing::debug!(path, "loaded export font");
            return Ok(font);
        }
    }

    for root in SCAN_ROOTS {
        if let Some(path) = find_ttf(Path::new(root), 3) {
            if let Some(font) = try_load(&path) {
                tracing::debug!(path = %path.display(), "loaded export font via scan");
                return Ok(font);
            }
        }
    }

    Err(CardError::FontUnavailable)
}

fn try_load(path: &Path) -> Option<Font> {
    let bytes = fs::read(path).ok()?;
    Font::from_bytes(bytes, FontSettings::default()).ok()
}

/// Depth-limited search for the first `.ttf` under a directory.
fn find_ttf(dir: &Path, depth: u8) -> Option<PathBuf> {
    if depth == 0 {
        return None;
    }
    let mut entries: Vec<_> = fs::read_dir(dir).ok()?.flatten().map(|e| e.path()).collect();
    entries.sort();
    for path in &entries {
        if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("ttf")) {
            return Some(path.clone());
        }
    }
    for path in &entries {
        if path.is_dir() {
            if let Some(found) = find_ttf(path, depth - 1) {
                return Some(found);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_ttf_depth_zero_finds_nothing() {
        assert!(find_ttf(Path::new("/usr/share/fonts"), 0).is_none());
    }

    #[test]
    fn try_load_missing_file_is_none() {
        assert!(try_load(Path::new("/no/such/font.ttf")).is_none());
    }
}
