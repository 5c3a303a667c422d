use crate::core::models::{DisplayMessage, PhotoRecord};
use crate::global_constants;

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
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

pub fn message_markup(message: &DisplayMessage) -> String {
    format!(
        "<div class=\"{}\">{}</div>",
        message.kind.css_class(),
        message.text
    )
}

pub fn searching_markup() -> String {
    format!(
        "<div class=\"loading\"><div class=\"spinner\"></div>{}</div>",
        global_constants::USER_MESSAGE_SEARCHING
    )
}

pub fn search_failure_markup(description: &str) -> String {
    format!(
        "<div class=\"error-message\">Search failed: {}<br><small>{}</small></div>",
        escape_html(description),
        global_constants::USER_MESSAGE_CHECK_LOGS
    )
}

pub fn no_results_markup() -> String {
    concat!(
        "<div class=\"no-results\">",
        "<div class=\"no-results-icon\">&#128269;</div>",
        "<p>No photos found matching your search.</p>",
        "<p><small>Try uploading some photos or searching for different terms.</small></p>",
        "</div>"
    )
    .to_string()
}

pub fn results_markup(results: &[PhotoRecord]) -> String {
    if results.is_empty() {
        return no_results_markup();
    }

    results.iter().map(photo_card_markup).collect()
}

fn is_web_url(url: &str) -> bool {
    reqwest::Url::parse(url)
        .map(|parsed| matches!(parsed.scheme(), "http" | "https"))
        .unwrap_or(false)
}

fn photo_card_markup(photo: &PhotoRecord) -> String {
    let label_chips: String = photo
        .labels
        .iter()
        .map(|label| format!("<span class=\"label-tag\">{}</span>", escape_html(label)))
        .collect();

    // Anything other than http(s) could run script from the href, so it only
    // gets the placeholder image and no link.
    if !is_web_url(&photo.url) {
        log::warn!("[MARKUP] Not linking photo with non-web URL: {}", photo.url);
        return format!(
            concat!(
                "<div class=\"photo-card\">",
                "<img src=\"{placeholder}\" alt=\"Photo\">",
                "<div class=\"photo-info\"><div class=\"labels\">{chips}</div></div>",
                "</div>"
            ),
            placeholder = global_constants::IMAGE_ERROR_PLACEHOLDER,
            chips = label_chips,
        );
    }

    format!(
        concat!(
            "<a class=\"photo-card\" href=\"{url}\" target=\"_blank\" rel=\"noopener\">",
            "<img src=\"{url}\" alt=\"Photo\" onerror=\"this.src='{placeholder}'\">",
            "<div class=\"photo-info\"><div class=\"labels\">{chips}</div></div>",
            "</a>"
        ),
        url = escape_html(&photo.url),
        placeholder = global_constants::IMAGE_ERROR_PLACEHOLDER,
        chips = label_chips,
    )
}
