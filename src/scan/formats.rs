/// Recognized media formats
///
/// Two fixed extension tables, checked in order: a file whose extension is
/// in neither table is not media and gets dropped by the scanner.

use crate::state::data::MediaKind;

/// Audio formats the browser recognizes
pub const AUDIO_FORMATS: [&str; 4] = [".mp3", ".wav", ".ogg", ".m4a"];

/// Image formats the browser recognizes
pub const IMAGE_FORMATS: [&str; 4] = [".jpg", ".jpeg", ".png", ".gif"];

/// Derive the lookup extension for a filename: everything after the last
/// `.`, lower-cased, with a `.` prefix.
///
/// Derivation never fails. A name with no `.` degrades to the whole
/// lower-cased name behind a `.` prefix ("README" becomes ".readme"),
/// and a name ending in `.` degrades to just ".". Dotfiles like ".gif"
/// therefore derive ".gif" and count as media.
pub fn derive_extension(name: &str) -> String {
    let last = name.rsplit('.').next().unwrap_or(name);
    format!(".{}", last.to_lowercase())
}

/// Classify a filename against the format tables, audio first.
/// Returns `None` for anything that is not recognized media.
pub fn classify(name: &str) -> Option<MediaKind> {
    let ext = derive_extension(name);
    if AUDIO_FORMATS.contains(&ext.as_str()) {
        Some(MediaKind::Audio)
    } else if IMAGE_FORMATS.contains(&ext.as_str()) {
        Some(MediaKind::Image)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_extension_basic() {
        assert_eq!(derive_extension("song.mp3"), ".mp3");
        assert_eq!(derive_extension("photo.JPEG"), ".jpeg");
        assert_eq!(derive_extension("archive.tar.gz"), ".gz");
    }

    #[test]
    fn test_derive_extension_degenerate_names() {
        // No dot: the whole name is the extension
        assert_eq!(derive_extension("README"), ".readme");
        // Trailing dot: empty last segment
        assert_eq!(derive_extension("weird."), ".");
        // Leading dot: the rest of the name is the last segment
        assert_eq!(derive_extension(".gif"), ".gif");
        assert_eq!(derive_extension(""), ".");
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("song.MP3"), Some(MediaKind::Audio));
        assert_eq!(classify("photo.PNG"), Some(MediaKind::Image));
        assert_eq!(classify("Beat.WaV"), Some(MediaKind::Audio));
    }

    #[test]
    fn test_classify_unknown_extension_is_dropped() {
        assert_eq!(classify("notes.txt"), None);
        assert_eq!(classify("movie.mp4"), None);
        assert_eq!(classify("nodots"), None);
    }

    #[test]
    fn test_classify_every_table_entry() {
        for ext in ["mp3", "wav", "ogg", "m4a"] {
            assert_eq!(classify(&format!("track.{ext}")), Some(MediaKind::Audio));
        }
        for ext in ["jpg", "jpeg", "png", "gif"] {
            assert_eq!(classify(&format!("pic.{ext}")), Some(MediaKind::Image));
        }
    }
}
