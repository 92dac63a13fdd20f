/// Recursive folder scanner
///
/// Walks a user-chosen folder depth-first and sorts every file into the
/// audio or image bucket by extension. The walk runs on a blocking thread
/// so the UI stays responsive.

use std::path::{Path, PathBuf};
use tokio::task;
use walkdir::WalkDir;

use crate::scan::formats;
use crate::state::data::{MediaFile, MediaKind, ScanResult};

/// Errors that can interrupt a scan
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("scan task error: {0}")]
    Task(#[from] task::JoinError),
}

/// Scan a folder for audio and image files.
///
/// Always returns a result: any failure during the walk (permission
/// denied partway through, an unreadable entry, the worker thread dying)
/// discards whatever was found so far and yields the empty `ScanResult`.
/// An empty result is therefore also what a failed scan looks like.
pub async fn scan_folder(root: PathBuf) -> ScanResult {
    println!("🔍 Scanning folder: {}", root.display());

    match run_walk(root).await {
        Ok(found) => {
            println!(
                "✅ Scan complete: {} audio files, {} images",
                found.audio.len(),
                found.images.len()
            );
            found
        }
        Err(e) => {
            eprintln!("⚠️  Scan failed: {e}");
            ScanResult::default()
        }
    }
}

async fn run_walk(root: PathBuf) -> Result<ScanResult, ScanError> {
    Ok(task::spawn_blocking(move || walk_folder(&root)).await??)
}

/// Walk the tree under `root`, classifying every file by extension.
/// Stops at the first error; partial progress is discarded by the caller.
fn walk_folder(root: &Path) -> Result<ScanResult, ScanError> {
    let mut found = ScanResult::default();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        let kind = match formats::classify(&name) {
            Some(kind) => kind,
            None => continue,
        };

        let size = entry.metadata()?.len();
        let file = MediaFile {
            name,
            path: entry.into_path(),
            size,
        };

        match kind {
            MediaKind::Audio => found.audio.push(file),
            MediaKind::Image => found.images.push(file),
        }
    }

    Ok(found)
}
