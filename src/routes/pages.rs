//! Server-side rendering for the pairing form page
//!
//! One template covers both states: the empty form, and the form with the
//! generated pairing text (or an error banner) underneath.

/// Escape text for interpolation into HTML
pub fn escape_html(value: &str) -> String {
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

/// Render the pairing page
///
/// `result` is the generated pairing text, `error` a user-facing error
/// message. Both are escaped before interpolation.
pub fn render_index(result: Option<&str>, error: Option<&str>) -> String {
    let result_html = result
        .map(|text| {
            format!(
                "<section class=\"result\">\n      <h2>Suggested pairing</h2>\n      <p>{}</p>\n    </section>",
                escape_html(text)
            )
        })
        .unwrap_or_default();

    let error_html = error
        .map(|text| format!("<p class=\"error\">{}</p>", escape_html(text)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Wine &amp; Cheese Pairing</title>
  <style>
    body {{ font-family: Georgia, serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; color: #2b2118; }}
    label {{ display: block; margin-top: 0.75rem; }}
    input, select {{ width: 100%; padding: 0.4rem; margin-top: 0.25rem; }}
    button {{ margin-top: 1rem; padding: 0.5rem 1.5rem; }}
    .result {{ margin-top: 2rem; padding: 1rem; background: #f7f2e9; border-left: 4px solid #7b2d26; }}
    .error {{ margin-top: 1rem; padding: 0.75rem; background: #fbeaea; border-left: 4px solid #a33; }}
  </style>
</head>
<body>
  <h1>Wine &amp; Cheese Pairing</h1>
  <p>Pick a season and location, or leave them blank and we will guess from your connection.</p>
  {error_html}
  <form method="post" action="/">
    <label>Season
      <select name="season">
        <option value="">Infer for me</option>
        <option value="spring">Spring</option>
        <option value="summer">Summer</option>
        <option value="autumn">Autumn</option>
        <option value="winter">Winter</option>
      </select>
    </label>
    <label>Location
      <input type="text" name="location" placeholder="e.g. France">
    </label>
    <label>Wine style
      <input type="text" name="wine_style" placeholder="e.g. dry red">
    </label>
    <label>Cheese type
      <input type="text" name="cheese_type" placeholder="e.g. soft, washed rind">
    </label>
    <label>Budget
      <input type="text" name="budget" placeholder="e.g. under 20 euros">
    </label>
    <label>Dietary notes
      <input type="text" name="dietary" placeholder="e.g. vegetarian rennet">
    </label>
    <button type="submit">Suggest a pairing</button>
  </form>
    {result_html}
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"wine" & 'cheese'</b>"#),
            "&lt;b&gt;&quot;wine&quot; &amp; &#39;cheese&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_empty_form_has_no_result_section() {
        let html = render_index(None, None);
        assert!(html.contains("<form"));
        assert!(html.contains("name=\"season\""));
        assert!(html.contains("name=\"dietary\""));
        assert!(!html.contains("Suggested pairing"));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_result_is_rendered_and_escaped() {
        let html = render_index(Some("Chablis <i>&</i> Comte"), None);
        assert!(html.contains("Suggested pairing"));
        assert!(html.contains("Chablis &lt;i&gt;&amp;&lt;/i&gt; Comte"));
        assert!(!html.contains("<i>&</i>"));
    }

    #[test]
    fn test_error_banner() {
        let html = render_index(None, Some("service unavailable"));
        assert!(html.contains("class=\"error\""));
        assert!(html.contains("service unavailable"));
    }
}
