use crate::controller::ViewState;
use crate::results::ImageResult;
use std::fmt::Write;

/// Widest alt text shown on a card
const MAX_ALT_CHARS: usize = 60;

/// Render the view as plain text for a terminal
pub fn render_view(view: &ViewState) -> String {
    let mut out = String::new();

    let Some(query) = view.query() else {
        let _ = writeln!(
            out,
            "Type something to search (safe search {}).",
            on_off(view.safe_search().is_enabled())
        );
        return out;
    };

    let _ = writeln!(
        out,
        "Results for '{}' (safe search {})",
        query.text(),
        on_off(query.safe_search().is_enabled())
    );

    if view.is_loading() {
        let _ = writeln!(out, "  loading...");
        if view.visible_images().is_empty() {
            return out;
        }
    }

    let images = view.visible_images();
    if images.is_empty() {
        let _ = writeln!(out, "  no images found");
    }
    for (index, image) in images.iter().enumerate() {
        render_card(&mut out, index + 1, image);
    }

    let _ = writeln!(out, "{}", pager_line(view));
    out
}

fn render_card(out: &mut String, number: usize, image: &ImageResult) {
    let alt = if image.alt_text.is_empty() {
        "(no description)".to_string()
    } else if image.alt_text.chars().count() > MAX_ALT_CHARS {
        let cut: String = image.alt_text.chars().take(MAX_ALT_CHARS).collect();
        format!("{cut}...")
    } else {
        image.alt_text.clone()
    };

    let _ = writeln!(
        out,
        "{:>3}. {}  {}x{}  {}",
        number, alt, image.width, image.height, image.dominant_color
    );
    let _ = writeln!(out, "     view:     {}", image.display_url);
    let _ = writeln!(out, "     download: {}", image.download_url);
}

/// Pagination controls, showing only the directions that are available
pub fn pager_line(view: &ViewState) -> String {
    let previous = if view.has_previous() { "< prev" } else { "      " };
    let next = if view.has_next() { "next >" } else { "" };
    format!(
        "{}   page {} of {}   {}",
        previous,
        view.page(),
        view.total_pages(),
        next
    )
    .trim_end()
    .to_string()
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::SearchController;
    use crate::query::PageStep;
    use crate::results::SearchResultPage;

    fn image(id: &str, alt: &str) -> ImageResult {
        ImageResult {
            id: id.to_string(),
            display_url: format!("https://images.example.com/{id}"),
            download_url: format!("https://example.com/photos/{id}/download"),
            alt_text: alt.to_string(),
            dominant_color: "#a6a6a6".to_string(),
            width: 640,
            height: 480,
        }
    }

    #[test]
    fn test_render_empty_view() {
        let controller = SearchController::default();
        assert!(render_view(controller.state()).starts_with("Type something to search"));
    }

    #[test]
    fn test_render_loading_hides_results() {
        let mut controller = SearchController::default();
        let request = controller.submit_query("cat").unwrap().unwrap();
        controller.complete(
            request.generation,
            Ok(SearchResultPage::new(1, 3, vec![image("a", "a cat")])),
        );
        controller.go_to_page(PageStep::Next);

        let text = render_view(controller.state());
        assert!(text.contains("loading..."));
        assert!(!text.contains("a cat"));
    }

    #[test]
    fn test_render_cards_and_pager() {
        let mut controller = SearchController::default();
        let request = controller.submit_query("cat").unwrap().unwrap();
        controller.complete(
            request.generation,
            Ok(SearchResultPage::new(
                1,
                3,
                vec![image("a", "orange cat on a sofa"), image("b", "")],
            )),
        );

        let text = render_view(controller.state());
        assert!(text.contains("  1. orange cat on a sofa  640x480  #a6a6a6"));
        assert!(text.contains("  2. (no description)"));
        assert!(text.contains("download: https://example.com/photos/b/download"));
        assert!(text.trim_end().ends_with("page 1 of 3   next >"));
        assert!(!text.contains("< prev"));
    }

    #[test]
    fn test_render_no_results() {
        let mut controller = SearchController::default();
        let request = controller.submit_query("qwxzv").unwrap().unwrap();
        controller.complete(request.generation, Ok(SearchResultPage::new(1, 0, vec![])));

        let text = render_view(controller.state());
        assert!(text.contains("no images found"));
        assert!(text.contains("page 1 of 0"));
    }
}
