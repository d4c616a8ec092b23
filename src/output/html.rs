// src/output/html.rs
// =============================================================================
// HTML renderer.
//
// Produces a standalone page with one table: each row links the repository
// name to its GitHub page and shows the description next to it.
//
// Repository names and descriptions are user-controlled text, so every value
// is escaped before it is placed into the markup.
// =============================================================================

use std::borrow::Cow;

use crate::repo::RepositoryRecord;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>GitHub Repositories</title>
</head>
<body>
    <h1>GitHub Repositories</h1>
    <table border="1">
        <thead>
            <tr>
                <th>Name</th>
                <th>Description</th>
            </tr>
        </thead>
        <tbody>
"#;

const PAGE_TAIL: &str = r#"        </tbody>
    </table>
</body>
</html>
"#;

pub fn render(records: &[RepositoryRecord]) -> String {
    let mut page = String::from(PAGE_HEAD);

    // An empty list still produces the table, just with an empty <tbody>
    for record in records {
        page.push_str(&render_row(record));
    }
    page.push_str(PAGE_TAIL);
    page
}

fn render_row(record: &RepositoryRecord) -> String {
    format!(
        "            <tr>\n                <td><a href=\"{}\">{}</a></td>\n                <td>{}</td>\n            </tr>\n",
        escape_html(record.url()),
        escape_html(record.name()),
        escape_html(record.description()),
    )
}

fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

// Escapes text for use in element content and quoted attribute values
//
// Returns the input unchanged (no allocation) when nothing needs escaping
fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| escape_char(c).is_some()) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match escape_char(c) {
            Some(entity) => escaped.push_str(entity),
            None => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn selector(css: &str) -> Selector {
        Selector::parse(css).unwrap()
    }

    #[test]
    fn test_one_anchor_per_record() {
        let records = vec![
            RepositoryRecord::new("A", "https://github.com/octocat/A", None),
            RepositoryRecord::new("B", "https://github.com/octocat/B", Some("Tool".to_string())),
        ];
        let document = Html::parse_document(&render(&records));

        let anchors: Vec<_> = document.select(&selector("tbody a[href]")).collect();
        assert_eq!(anchors.len(), records.len());
        for (anchor, record) in anchors.iter().zip(&records) {
            assert_eq!(anchor.value().attr("href"), Some(record.url()));
            assert_eq!(anchor.text().collect::<String>(), record.name());
        }

        let cells: Vec<String> = document
            .select(&selector("tbody td:nth-child(2)"))
            .map(|td| td.text().collect())
            .collect();
        assert_eq!(cells, vec!["No description", "Tool"]);
    }

    #[test]
    fn test_header_row() {
        let document = Html::parse_document(&render(&[]));
        let headers: Vec<String> = document
            .select(&selector("thead th"))
            .map(|th| th.text().collect())
            .collect();
        assert_eq!(headers, vec!["Name", "Description"]);
    }

    #[test]
    fn test_empty_list_has_empty_body() {
        let document = Html::parse_document(&render(&[]));
        assert_eq!(document.select(&selector("tbody")).count(), 1);
        assert_eq!(document.select(&selector("tbody tr")).count(), 0);
        assert_eq!(document.select(&selector("a")).count(), 0);
    }

    #[test]
    fn test_markup_in_fields_is_escaped() {
        let records = vec![RepositoryRecord::new(
            "<script>alert(1)</script>",
            "https://example.com/\"onmouseover=\"x",
            Some("<b>bold</b> & 'quoted'".to_string()),
        )];
        let html = render(&records);

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));

        let document = Html::parse_document(&html);
        assert_eq!(document.select(&selector("script")).count(), 0);
        assert_eq!(document.select(&selector("b")).count(), 0);

        let anchor = document.select(&selector("tbody a")).next().unwrap();
        assert_eq!(anchor.text().collect::<String>(), "<script>alert(1)</script>");
        assert_eq!(
            anchor.value().attr("href"),
            Some("https://example.com/\"onmouseover=\"x")
        );
        assert_eq!(anchor.value().attr("onmouseover"), None);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("<a href='x'>"), "&lt;a href=&#39;x&#39;&gt;");
        assert_eq!(escape_html("\"q\""), "&quot;q&quot;");
    }
}
