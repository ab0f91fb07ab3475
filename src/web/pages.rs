//! Server-rendered HTML pages

use crate::recent::RecentEntry;
use crate::selector::SheetUser;
use crate::vocabulary::Vocabulary;

const STYLE: &str = r#"
body { font-family: -apple-system, "Segoe UI", sans-serif; margin: 2rem auto; max-width: 52rem; color: #1f2328; }
form { display: grid; grid-template-columns: 12rem 1fr; gap: .6rem 1rem; align-items: center; }
input, select { padding: .35rem; font-size: 1rem; }
button { grid-column: 2; padding: .5rem 1rem; font-size: 1rem; }
.notice { background: #eef6ee; border: 1px solid #9ac49a; padding: .75rem 1rem; margin-bottom: 1.5rem; }
table { border-collapse: collapse; width: 100%; }
th, td { text-align: left; padding: .45rem .6rem; border-bottom: 1px solid #d0d7de; }
nav a { margin-right: 1rem; }
"#;

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{style}</style>\n</head>\n<body>\n\
         <nav><a href=\"/\">Generate</a><a href=\"/latest_topics\">Latest topics</a><a href=\"/gdn\">GDN</a></nav>\n\
         <h1>{title}</h1>\n{body}\n</body>\n</html>\n",
        title = escape_html(title),
        style = STYLE,
        body = body
    )
}

fn vocabulary_select(vocab: Vocabulary) -> String {
    let mut html = format!(
        "<label for=\"{name}\">{label}</label>\n<select id=\"{name}\" name=\"{name}\">\n\
         <option value=\"random\">Random</option>\n",
        name = vocab.field_name(),
        label = vocab.label()
    );
    for entry in vocab.entries() {
        let escaped = escape_html(entry);
        html.push_str(&format!(
            "<option value=\"{0}\">{0}</option>\n",
            escaped
        ));
    }
    html.push_str("</select>\n");
    html
}

/// Generation form, optionally with the outcome of the previous submission
pub fn index_page(description: Option<&str>) -> String {
    let mut body = String::new();

    if let Some(description) = description {
        body.push_str(&format!(
            "<div class=\"notice\">{}</div>\n",
            escape_html(description)
        ));
    }

    body.push_str("<form method=\"post\" action=\"/\">\n");
    body.push_str("<label for=\"user\">User</label>\n<select id=\"user\" name=\"user\">\n");
    for user in SheetUser::ALL {
        body.push_str(&format!(
            "<option value=\"{0}\">{0}</option>\n",
            user.as_str()
        ));
    }
    body.push_str("</select>\n");
    body.push_str(
        "<label for=\"topic\">Topic</label>\n<input id=\"topic\" name=\"topic\" required>\n",
    );
    for vocab in Vocabulary::ALL {
        body.push_str(&vocabulary_select(vocab));
    }
    body.push_str("<button type=\"submit\">Generate headlines</button>\n</form>");

    layout("Ad Headline Generator", &body)
}

pub fn latest_topics_page(user: SheetUser, entries: &[RecentEntry]) -> String {
    let mut body = format!(
        "<p>Most recent entries for <strong>{}</strong>, newest first.</p>\n",
        user.as_str()
    );

    if entries.is_empty() {
        body.push_str("<p>No headlines yet.</p>");
        return layout("Latest Topics", &body);
    }

    body.push_str("<table>\n<tr><th>Topic</th><th>Tone</th><th>Headline</th></tr>\n");
    for entry in entries {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(&entry.topic),
            escape_html(&entry.tone),
            escape_html(&entry.headline)
        ));
    }
    body.push_str("</table>");

    layout("Latest Topics", &body)
}

pub fn gdn_page() -> String {
    layout(
        "GDN",
        "<p>Display network ad copy lives here. Use the generator to create headlines.</p>",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#x27;s&quot;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain 🦵"), "plain 🦵");
    }

    #[test]
    fn test_index_page_lists_vocabularies_and_users() {
        let html = index_page(None);
        assert!(html.contains("name=\"engagement_format\""));
        assert!(html.contains("name=\"emotional_trigger\""));
        assert!(html.contains("name=\"tone\""));
        assert!(html.contains("<option value=\"matt\">"));
        assert!(html.contains("<option value=\"january\">"));
        assert!(html.contains("Offer Announcement + Call to Action"));
        assert!(!html.contains("class=\"notice\""));
    }

    #[test]
    fn test_index_page_escapes_description() {
        let html = index_page(Some("3 headlines about <script> have been generated."));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_latest_topics_page() {
        let entries = vec![RecentEntry {
            topic: "knee pain".to_string(),
            tone: "Calm".to_string(),
            headline: "🦵 Walk Again".to_string(),
        }];
        let html = latest_topics_page(SheetUser::January, &entries);
        assert!(html.contains("<td>knee pain</td><td>Calm</td><td>🦵 Walk Again</td>"));

        let empty = latest_topics_page(SheetUser::Matt, &[]);
        assert!(empty.contains("No headlines yet."));
    }
}
