use crate::core::TaskResult;
use crate::errors::TaskError;
use chrono::Local;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use tracing::info;
use url::Url;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const MAX_LINKS: usize = 20;
const MAX_IMAGES: usize = 10;

/// Fetches a web page and extracts a structured report from it.
///
/// # Arguments
///
/// * `url` - Page to fetch; must be an absolute http/https URL
/// * `selector` - Optional CSS selector; when present only matching
///   elements are extracted, otherwise the full page is summarized
///
/// # Returns
///
/// An ordered `TaskResult::Record` with the page metadata followed by
/// either `selected_content` or `full_text` plus `links` and `images`
pub(super) async fn scrape_website(
    url: &str,
    selector: Option<&str>,
) -> Result<TaskResult, TaskError> {
    let target = Url::parse(url)
        .map_err(|e| TaskError::InvalidInput(format!("invalid URL '{}': {}", url, e)))?;
    if target.scheme() != "http" && target.scheme() != "https" {
        return Err(TaskError::InvalidInput(format!(
            "unsupported URL scheme '{}'",
            target.scheme()
        )));
    }

    let client = Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;
    let response = client.get(target).send().await?.error_for_status()?;
    let status_code = response.status().as_u16();
    let bytes = response.bytes().await?;

    // Html is not Send, so all parsing stays on this side of the awaits.
    let body = String::from_utf8_lossy(&bytes);
    let report = build_report(url, status_code, bytes.len(), &body, selector)?;
    info!("Website scraped successfully: {}", url);
    Ok(TaskResult::Record(report))
}

fn build_report(
    url: &str,
    status_code: u16,
    content_length: usize,
    body: &str,
    selector: Option<&str>,
) -> Result<Vec<(String, String)>, TaskError> {
    let document = Html::parse_document(body);
    let mut report = vec![
        ("url".to_string(), url.to_string()),
        ("status_code".to_string(), status_code.to_string()),
        ("title".to_string(), page_title(&document)),
        ("timestamp".to_string(), Local::now().to_rfc3339()),
        ("content_length".to_string(), content_length.to_string()),
    ];

    match selector {
        Some(sel) => {
            let parsed = Selector::parse(sel).map_err(|e| {
                TaskError::Scrape(format!("invalid CSS selector '{}': {}", sel, e))
            })?;
            let matches: Vec<String> = document
                .select(&parsed)
                .map(|element| element_text(&element))
                .collect();
            report.push(("selected_content".to_string(), matches.join("\n")));
        }
        None => {
            report.push(("full_text".to_string(), visible_text(&document)));
            report.push(("links".to_string(), collect_links(&document)));
            report.push(("images".to_string(), collect_images(&document)));
        }
    }
    Ok(report)
}

fn page_title(document: &Html) -> String {
    let title_selector = Selector::parse("title").unwrap();
    document
        .select(&title_selector)
        .next()
        .map(|element| element_text(&element))
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| "Sin título".to_string())
}

/// All visible text of the page, whitespace-collapsed. Text inside
/// `script`, `style` and `noscript` elements is skipped.
fn visible_text(document: &Html) -> String {
    let mut chunks = Vec::new();
    for node in document.root_element().descendants() {
        if let Some(text) = node.value().as_text() {
            let hidden = node.ancestors().any(|ancestor| {
                matches!(
                    ancestor.value().as_element().map(|el| el.name()),
                    Some("script" | "style" | "noscript")
                )
            });
            if !hidden {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    chunks.push(trimmed.to_string());
                }
            }
        }
    }
    chunks.join(" ")
}

fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn collect_links(document: &Html) -> String {
    let link_selector = Selector::parse("a[href]").unwrap();
    document
        .select(&link_selector)
        .take(MAX_LINKS)
        .map(|element| {
            let href = element.value().attr("href").unwrap_or_default();
            let text = element_text(&element);
            if text.is_empty() {
                href.to_string()
            } else {
                format!("{} ({})", text, href)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn collect_images(document: &Html) -> String {
    let image_selector = Selector::parse("img[src]").unwrap();
    document
        .select(&image_selector)
        .take(MAX_IMAGES)
        .map(|element| {
            let src = element.value().attr("src").unwrap_or_default();
            let alt = element.value().attr("alt").unwrap_or_default().trim();
            if alt.is_empty() {
                src.to_string()
            } else {
                format!("{} ({})", alt, src)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><head><title> Demo page </title>
    <style>body { color: red; }</style>
    <script>var hidden = "secret";</script></head>
    <body><h1>Hello</h1> <p>world</p>
    <a href="/one">First</a><a href="/two"></a>
    <img src="/a.png" alt="Logo"><img src="/b.png">
    </body></html>"#;

    fn value<'a>(report: &'a [(String, String)], key: &str) -> &'a str {
        report
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap()
    }

    #[test]
    fn report_without_selector_has_text_links_and_images() {
        let report = build_report("http://example.com", 200, PAGE.len(), PAGE, None).unwrap();
        let keys: Vec<&str> = report.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            [
                "url",
                "status_code",
                "title",
                "timestamp",
                "content_length",
                "full_text",
                "links",
                "images"
            ]
        );
        assert_eq!(value(&report, "title"), "Demo page");
        assert_eq!(value(&report, "status_code"), "200");

        let full_text = value(&report, "full_text");
        assert!(full_text.contains("Hello world"));
        assert!(!full_text.contains("secret"));
        assert!(!full_text.contains("color: red"));

        let links = value(&report, "links");
        assert!(links.contains("First (/one)"));
        assert!(links.lines().any(|line| line == "/two"));

        let images = value(&report, "images");
        assert!(images.contains("Logo (/a.png)"));
        assert!(images.lines().any(|line| line == "/b.png"));
    }

    #[test]
    fn selector_replaces_the_generic_extraction() {
        let report = build_report("http://example.com", 200, PAGE.len(), PAGE, Some("p")).unwrap();
        let keys: Vec<&str> = report.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            [
                "url",
                "status_code",
                "title",
                "timestamp",
                "content_length",
                "selected_content"
            ]
        );
        assert_eq!(value(&report, "selected_content"), "world");
    }

    #[test]
    fn missing_title_falls_back_to_placeholder() {
        let page = "<html><body>x</body></html>";
        let report = build_report("http://example.com", 200, page.len(), page, None).unwrap();
        assert_eq!(value(&report, "title"), "Sin título");
    }

    #[test]
    fn link_and_image_lists_are_capped() {
        let mut page = String::from("<html><body>");
        for i in 0..30 {
            page.push_str(&format!("<a href=\"/l{i}\">link {i}</a>"));
        }
        for i in 0..15 {
            page.push_str(&format!("<img src=\"/i{i}.png\">"));
        }
        page.push_str("</body></html>");
        let report = build_report("http://example.com", 200, page.len(), &page, None).unwrap();
        assert_eq!(value(&report, "links").lines().count(), 20);
        assert_eq!(value(&report, "images").lines().count(), 10);
    }

    #[test]
    fn invalid_selector_is_reported() {
        let err = build_report("http://example.com", 200, 0, "<p>x</p>", Some("p[")).unwrap_err();
        assert!(err.to_string().contains("invalid CSS selector"));
    }

    #[tokio::test]
    async fn rejects_unparsable_urls() {
        let err = scrape_website("not a url", None).await.unwrap_err();
        assert!(err.to_string().contains("invalid URL"));
    }

    #[tokio::test]
    async fn rejects_non_http_schemes() {
        let err = scrape_website("ftp://example.com/file", None).await.unwrap_err();
        assert!(matches!(err, TaskError::InvalidInput(_)));
        assert!(err.to_string().contains("unsupported URL scheme"));
    }
}
