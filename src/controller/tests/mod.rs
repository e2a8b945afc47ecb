
use crate::results::{ImageResult, SearchResultPage};

/// Build a result page with `count` distinct images
pub(super) fn result_page(page: u32, total_pages: u32, count: usize) -> SearchResultPage {
    let results = (0..count)
        .map(|i| ImageResult {
            id: format!("p{page}-{i}"),
            display_url: format!("https://images.example.com/p{page}-{i}?w=1080"),
            download_url: format!("https://example.com/photos/p{page}-{i}/download"),
            alt_text: format!("image {i} on page {page}"),
            dominant_color: "#262626".to_string(),
            width: 3000 + i as u32,
            height: 2000,
        })
        .collect();
    SearchResultPage::new(page, total_pages, results)
}
