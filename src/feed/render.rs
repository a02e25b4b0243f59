// src/feed/render.rs
use crate::models::Post;

use super::client::FeedState;

/// At most this many cards are rendered; longer feeds truncate silently.
pub const MAX_CARDS: usize = 6;

/// Shown when a caption is empty.
const DEFAULT_CAPTION: &str = "Maharaja Restaurant";
const VIEW_POST_LABEL: &str = "View Post";
const EMPTY_MESSAGE: &str = "Follow us on Instagram @maharajarestoran for our latest dishes and events.";
const FAILED_MESSAGE: &str = "Unable to load Instagram posts right now. Please try again later.";

/// Produce the feed container's markup for a load outcome. Cards link to
/// the post permalink in a new browsing context with no opener or referrer
/// leakage; empty and failed states each render their own static message.
pub fn render_feed(state: &FeedState) -> String {
    match state {
        FeedState::Loaded(posts) => posts.iter().take(MAX_CARDS).map(render_card).collect(),
        FeedState::Empty => fallback_markup(EMPTY_MESSAGE),
        FeedState::Failed => fallback_markup(FAILED_MESSAGE),
    }
}

fn render_card(post: &Post) -> String {
    let caption = if post.caption.is_empty() {
        DEFAULT_CAPTION
    } else {
        &post.caption
    };

    format!(
        "<a class=\"instagram-card\" href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">\
         <p class=\"instagram-caption\">{caption}</p>\
         <span class=\"instagram-view\">{label}</span>\
         </a>",
        href = escape_html(&post.permalink),
        caption = escape_html(caption),
        label = VIEW_POST_LABEL,
    )
}

fn fallback_markup(message: &str) -> String {
    format!("<p class=\"instagram-fallback\">{}</p>", message)
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
