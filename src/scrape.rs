use crate::fetcher::Fetcher;
use crate::parsers;
use crate::progress::{Progress, ProgressEvent, Stage};
use crate::results::PageResult;
use crate::utils::normalize_url;
use std::time::Duration;

/// Fetches and extracts every URL in order, pausing `delay` between pages
///
/// Always returns exactly one result per input URL, in input order. A failed
/// fetch is logged and recorded as an error result; it never ends the batch.
pub async fn scrape<S, P>(
    fetcher: &Fetcher,
    urls: &[S],
    delay: Duration,
    progress: &mut P,
) -> Vec<PageResult>
where
    S: AsRef<str>,
    P: Progress + ?Sized,
{
    let total = urls.len();
    let mut results = Vec::with_capacity(total);
    ::log::info!("Scraping {} URL(s) with a {:?} delay", total, delay);

    for (idx, raw) in urls.iter().enumerate() {
        let url = normalize_url(raw.as_ref());
        let result = scrape_page(fetcher, url).await;

        progress.report(ProgressEvent {
            stage: Stage::Scrape,
            completed: idx + 1,
            total,
            url: result.url.clone(),
        });
        results.push(result);

        if idx + 1 < total {
            tokio::time::sleep(delay).await;
        }
    }

    let ok = results.iter().filter(|r| r.is_ok()).count();
    ::log::info!("Scraping complete - {}/{} pages fetched", ok, total);
    results
}

/// One fetch + extract cycle
pub async fn scrape_page(fetcher: &Fetcher, url: String) -> PageResult {
    let body = match fetcher.fetch_page(&url).await {
        Ok(body) => body,
        Err(e) => {
            ::log::warn!("Failed to fetch {}: {}", url, e);
            return PageResult::error(url);
        }
    };

    let extraction = parsers::extract(&body);
    ::log::debug!(
        "{}: hero={:?} og={:?}",
        url,
        extraction.hero_url(),
        extraction.og_image
    );
    PageResult::ok(
        url,
        extraction.hero.map(|hero| hero.src),
        extraction.og_image,
    )
}
