//! Shared HTML layout for the chart pages.

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Where the chart pages load ECharts from.
///
/// Chart files are written to disk and opened without the server, so the
/// script has to come from a public CDN rather than a static route.
pub const ECHARTS_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@5.5.1/dist/echarts.min.js";

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "display: flex; flex-direction: column; \
    align-items: center; gap: 2rem; padding: 2rem 1.5rem; margin: 0 auto; \
    font-family: sans-serif;";

// Chart container
pub const CHART_CONTAINER_STYLE: &str = "width: 100%; max-width: 960px; min-height: 420px;";

pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
    /// JavaScript source code.
    ScriptSource(PreEscaped<String>),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Sales Statistics" }

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptSource(text) => script { (text) }
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }
            }

            body
            {
                (content)
            }
        }
    }
}
