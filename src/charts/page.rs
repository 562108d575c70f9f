//! The HTML page that shows both charts for a month.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use maud::{Markup, PreEscaped, html};

use crate::{
    AppState, Error,
    html::{CHART_CONTAINER_STYLE, ECHARTS_SCRIPT_URL, HeadElement, PAGE_CONTAINER_STYLE, base},
    month::RequestedMonth,
    statistics::{MonthQuery, category_counts, price_range_counts, require_month},
    stores::TransactionStore,
};

use super::{SalesChart, category_chart, price_range_chart};

/// Renders the HTML containers for `charts`.
pub(crate) fn charts_view(charts: &[SalesChart]) -> Markup {
    html!(
        section id="charts" style=(PAGE_CONTAINER_STYLE)
        {
            @for chart in charts {
                div id=(chart.id) style=(CHART_CONTAINER_STYLE) {}
            }
        }
    )
}

/// Generates JavaScript initialization code for `charts`.
///
/// Each chart is initialised once the document has loaded and resizes with
/// the window.
pub(crate) fn charts_script(charts: &[SalesChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);
                }})();"#,
                chart.id,
                chart.options()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

fn charts_page(month: &RequestedMonth, charts: &[SalesChart]) -> Markup {
    let content = html!(
        header style=(PAGE_CONTAINER_STYLE)
        {
            h1 { "Sales for " (month) }
        }

        (charts_view(charts))
    );

    let scripts = [
        HeadElement::ScriptLink(ECHARTS_SCRIPT_URL.to_owned()),
        charts_script(charts),
    ];

    base(&month.to_string(), &scripts, &content)
}

/// Route handler for the page showing the price range and category charts
/// for a month.
pub async fn get_charts_page<S>(
    State(state): State<AppState<S>>,
    Query(query): Query<MonthQuery>,
) -> Result<Response, Error>
where
    S: TransactionStore + Clone + Send + Sync + 'static,
{
    let month = require_month(query)?;
    let store = &state.transaction_store;

    let charts = [
        price_range_chart(&month, &price_range_counts(store, &month)?),
        category_chart(&month, &category_counts(store, &month)?),
    ];

    Ok(Html(charts_page(&month, &charts).into_string()).into_response())
}
