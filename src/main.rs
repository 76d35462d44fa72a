use clap::Parser;
use page_images::report::{self, Summary};
use page_images::{LogProgress, Scraper};
use std::error::Error;
use std::io::Read;
use std::path::Path;

mod args;
use args::{Args, check_delay, collect_urls};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging; progress lines are info-level, on stderr
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command-line arguments
    let args = Args::parse();

    let mut urls = collect_urls(args.urls.iter().map(String::as_str));
    if let Some(input) = &args.input {
        let text = read_input(input)?;
        urls.extend(collect_urls(text.lines()));
    }
    if urls.is_empty() {
        return Err("Please enter at least one URL.".into());
    }

    let mut scraper = match &args.config {
        Some(path) => Scraper::from_config_file(path)?,
        None => Scraper::default(),
    };
    // --delay wins over the config file; either way the CLI range applies
    if let Some(delay) = args.delay {
        scraper = scraper.with_delay_secs(delay);
    }
    check_delay(scraper.config().page_delay_secs)?;
    let session = scraper.build()?;

    eprintln!(
        "Scraping {} URL(s) with a {}s delay...",
        urls.len(),
        session.config().page_delay_secs
    );
    let start_time = std::time::Instant::now();
    let results = session.scrape(urls.as_slice(), &mut LogProgress).await;
    ::log::info!(
        "Scraped {} pages in {:.2} seconds",
        results.len(),
        start_time.elapsed().as_secs_f64()
    );

    let summary = Summary::from_results(&results);
    println!("{}", report::render_table(&results));
    println!("{}", summary);
    println!();
    println!("{}", report::render_raw(&results));

    if let Some(path) = &args.csv {
        std::fs::write(path, report::to_csv(&results))?;
        eprintln!("Wrote CSV to {}", path.display());
    }

    if args.no_images || !summary.has_images() {
        return Ok(());
    }

    match session.package(&results, &mut LogProgress).await? {
        Some(archive) => {
            std::fs::write(&args.zip, &archive)?;
            eprintln!(
                "Wrote {} bytes of images to {}",
                archive.len(),
                args.zip.display()
            );
        }
        None => eprintln!("No images to download"),
    }

    Ok(())
}

/// Reads URL text from a file, or stdin for `-`
fn read_input(path: &Path) -> std::io::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
    }
}
