use crate::error::PackageError;
use crate::fetcher::Fetcher;
use crate::progress::{Progress, ProgressEvent, Stage};
use crate::results::{ImageTask, PageResult};
use crate::utils::{last_path_segment, sanitize_slug};
use std::io::{Cursor, Write};
use std::time::Duration;
use zip::ZipWriter;
use zip::write::FileOptions;

/// Archive entry name: `<page-slug>__<kind>__<image-name>`
///
/// The image name keeps its extension; the page slug is restricted to
/// `[A-Za-z0-9_-]`.
pub fn entry_name(task: &ImageTask<'_>) -> String {
    let page_slug =
        sanitize_slug(&last_path_segment(task.page_url).unwrap_or_else(|| "page".to_string()));
    let image_name = last_path_segment(task.image_url).unwrap_or_else(|| "image".to_string());
    format!("{}__{}__{}", page_slug, task.kind, image_name)
}

/// Downloads every discovered image and zips them in memory
///
/// Returns `Ok(None)` when no result carries an image. Images that fail to
/// download are left out of the archive without further notice. Only a
/// failure of the zip writer itself is an error.
pub async fn package<P>(
    fetcher: &Fetcher,
    results: &[PageResult],
    delay: Duration,
    progress: &mut P,
) -> Result<Option<Vec<u8>>, PackageError>
where
    P: Progress + ?Sized,
{
    let tasks = ImageTask::collect(results);
    if tasks.is_empty() {
        ::log::info!("No images to package");
        return Ok(None);
    }

    let total = tasks.len();
    ::log::info!("Downloading {} image(s)", total);
    let entries = download_all(fetcher, &tasks, delay, progress).await;
    ::log::info!("Packaging {} of {} image(s)", entries.len(), total);

    write_archive(&entries).map(Some)
}

/// Fetches each task in order; a name seen twice keeps the later bytes
async fn download_all<P>(
    fetcher: &Fetcher,
    tasks: &[ImageTask<'_>],
    delay: Duration,
    progress: &mut P,
) -> Vec<(String, Vec<u8>)>
where
    P: Progress + ?Sized,
{
    let total = tasks.len();
    let mut entries: Vec<(String, Vec<u8>)> = Vec::with_capacity(total);

    for (idx, task) in tasks.iter().enumerate() {
        match fetcher.fetch_bytes(task.image_url).await {
            Ok(bytes) => {
                let name = entry_name(task);
                match entries.iter_mut().find(|(existing, _)| *existing == name) {
                    Some(entry) => {
                        ::log::debug!("Replacing duplicate archive entry {}", name);
                        entry.1 = bytes;
                    }
                    None => entries.push((name, bytes)),
                }
            }
            Err(e) => {
                ::log::debug!("Skipping image {}: {}", task.image_url, e);
            }
        }

        progress.report(ProgressEvent {
            stage: Stage::Download,
            completed: idx + 1,
            total,
            url: task.image_url.to_string(),
        });

        if idx + 1 < total {
            tokio::time::sleep(delay).await;
        }
    }

    entries
}

fn write_archive(entries: &[(String, Vec<u8>)]) -> Result<Vec<u8>, PackageError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644);

    for (name, bytes) in entries {
        zip.start_file(name.as_str(), options)?;
        zip.write_all(bytes)?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}
