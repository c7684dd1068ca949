//! Document I/O and page-count sniffing

use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// Load a PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(doc)
}

/// Save the imposed document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, ImposeError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}

/// Best-effort page count from raw PDF bytes.
///
/// Returns 0 when the bytes are not a readable PDF; callers treat 0 as
/// "no calculation possible" rather than guessing.
pub fn sniff_page_count(bytes: &[u8]) -> usize {
    Document::load_mem(bytes)
        .map(|doc| doc.get_pages().len())
        .unwrap_or(0)
}

/// Best-effort page count of a file on disk; 0 when unreadable.
pub async fn sniff_page_count_file(path: impl AsRef<Path>) -> usize {
    match tokio::fs::read(path).await {
        Ok(bytes) => sniff_page_count(&bytes),
        Err(_) => 0,
    }
}
