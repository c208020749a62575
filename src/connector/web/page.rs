use crate::domain::ExpertiseLevel;

pub const TITLE: &str = "Solar Industry AI Assistant";
pub const DESCRIPTION: &str =
    "Get expert advice on solar technology, installation, maintenance, and more.";

/// Prompts offered under the form, each with the level it is pitched at.
pub const EXAMPLES: [(&str, ExpertiseLevel); 3] = [
    (
        "What factors should I consider when installing solar panels?",
        ExpertiseLevel::General,
    ),
    (
        "Calculate the ROI for a 10kW solar system in California",
        ExpertiseLevel::Technical,
    ),
    (
        "Latest efficiency improvements in PERC solar cells?",
        ExpertiseLevel::Expert,
    ),
];

/// Everything needed to draw the page once.
#[derive(Debug, Default)]
pub struct FormView<'a> {
    pub query: &'a str,
    pub expertise: &'a str,
    pub response: Option<&'a str>,
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render(view: &FormView<'_>) -> String {
    // A non-standard level is still forwarded; it just checks no radio.
    let selected = if view.expertise.is_empty() {
        Some(ExpertiseLevel::default())
    } else {
        ExpertiseLevel::parse(view.expertise)
    };

    let radios: String = ExpertiseLevel::ALL
        .iter()
        .map(|level| {
            let checked = if Some(*level) == selected { " checked" } else { "" };
            format!(
                "<label><input type=\"radio\" name=\"expertise\" value=\"{0}\"{1}> {0}</label>\n",
                level.as_str(),
                checked
            )
        })
        .collect();

    let examples: String = EXAMPLES
        .iter()
        .map(|(query, level)| {
            format!(
                "<li><form method=\"get\" action=\"/\">\
<input type=\"hidden\" name=\"query\" value=\"{q}\">\
<input type=\"hidden\" name=\"expertise\" value=\"{l}\">\
<button type=\"submit\">{q} ({l})</button></form></li>\n",
                q = escape_html(query),
                l = level.as_str()
            )
        })
        .collect();

    let response = view.response.map(escape_html).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<h1>{title}</h1>
<p>{description}</p>
<form method="post" action="/ask">
<label for="query">Ask your solar-related question</label><br>
<textarea id="query" name="query" rows="4" cols="80" placeholder="Type your question here...">{query}</textarea>
<fieldset>
<legend>Your expertise level</legend>
{radios}</fieldset>
<button type="submit">Submit</button>
</form>
<label for="response">Response</label><br>
<textarea id="response" rows="12" cols="80" readonly>{response}</textarea>
<h2>Examples</h2>
<ul>
{examples}</ul>
</body>
</html>
"#,
        title = TITLE,
        description = DESCRIPTION,
        query = escape_html(view.query),
        radios = radios,
        response = response,
        examples = examples,
    )
}
