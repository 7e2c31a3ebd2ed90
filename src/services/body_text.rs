use scraper::{Html, Selector};

/// `<noscript>` is kept: it is what the page shows when scripting is off.
const INVISIBLE_TAGS: [&str; 3] = ["script", "style", "template"];

/// Visible text of the `<body>` element, one space between text nodes.
pub fn extract_body_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let Some(body) = Selector::parse("body")
        .ok()
        .and_then(|selector| document.select(&selector).next())
    else {
        return String::new();
    };

    let mut text = String::new();
    for node in body.descendants() {
        let Some(text_node) = node.value().as_text() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|elem| INVISIBLE_TAGS.contains(&elem.name()))
        });
        if hidden {
            continue;
        }

        let t = text_node.trim();
        if !t.is_empty() {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(t);
        }
    }

    text
}
