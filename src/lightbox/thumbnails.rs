// src/lightbox/thumbnails.rs
use scraper::{Html, Selector};

use super::gallery::ImageItem;

/// Index the page's gallery thumbnails into the ordered list the lightbox
/// owns for the rest of the page session. Each `.gallery-item` contributes
/// its `data-src` attribute as the image source and the nested `img`
/// element's `alt` as the accessible label. Items without a source are
/// skipped; a missing label degrades to the empty string.
pub fn index_thumbnails(html: &str) -> Vec<ImageItem> {
    let document = Html::parse_document(html);
    let item_selector = Selector::parse(".gallery-item").expect("Failed to parse item selector");
    let img_selector = Selector::parse("img").expect("Failed to parse img selector");

    document
        .select(&item_selector)
        .filter_map(|item| {
            let source = item.value().attr("data-src")?.to_string();
            let alt_text = item
                .select(&img_selector)
                .next()
                .and_then(|img| img.value().attr("alt"))
                .unwrap_or("")
                .to_string();
            Some(ImageItem { source, alt_text })
        })
        .collect()
}
