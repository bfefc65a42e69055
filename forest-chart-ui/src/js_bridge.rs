//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart functions live in `assets/js/*.js`, are embedded at
//! compile time, evaluated as globals (no ES modules) and exposed via
//! `window.*`. This module provides safe Rust wrappers that serialize the
//! chart series and call those globals.

// Embed the D3 chart JS files at compile time
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('forest-ui JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files declare `renderLineChart` / `renderBarChart` via
/// `function` declarations. They are evaluated at global scope via indirect
/// eval once D3 is ready, then explicitly promoted to `window.*` so the
/// render wrappers below can find them. Call once at app startup.
pub fn init_charts() {
    let all_js = [LINE_CHART_JS, BAR_CHART_JS].join("\n");

    // Stash the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__forestChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__forestChartScripts);
                    delete window.__forestChartScripts;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    window.__forestChartsReady = true;
                    console.log('forest charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Upper bound on the 100 ms render polls (~10 s). An abandoned render --
/// the container removed before the scripts load -- must not leave an
/// interval running forever.
const MAX_RENDER_POLLS: u32 = 100;

fn render_chart_js(renderer: &str, container_id: &str, data_json: &str, config_json: &str) -> String {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    format!(
        r#"
        (function() {{
            var attempts = 0;
            var poll = setInterval(function() {{
                if (++attempts > {MAX_RENDER_POLLS}) {{
                    clearInterval(poll);
                    return;
                }}
                if (window.__forestChartsReady &&
                    typeof window.{renderer} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{renderer}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[forest-ui] {renderer} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

fn render_chart(renderer: &str, container_id: &str, data_json: &str, config_json: &str) {
    call_js(&render_chart_js(renderer, container_id, data_json, config_json));
}

/// Render a line chart (CO2 emissions over time).
///
/// Polls until D3 has loaded, the chart scripts are initialized and the
/// container element exists before rendering.
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_chart("renderLineChart", container_id, data_json, config_json);
}

/// Render a bar chart (tree cover loss by year).
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_chart("renderBarChart", container_id, data_json, config_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_poll_is_bounded_and_clears_its_interval() {
        let js = render_chart_js("renderLineChart", "emissions-chart", "{}", "{}");
        assert!(js.contains(&format!("attempts > {}", MAX_RENDER_POLLS)));
        // The give-up branch must clear the interval, not just stop rendering.
        let give_up = js.find("clearInterval(poll);").unwrap();
        assert!(give_up < js.find("window.__forestChartsReady").unwrap());
    }

    #[test]
    fn render_js_escapes_quotes_and_newlines() {
        let js = render_chart_js("renderBarChart", "c", "{'a':\n1}", "{}");
        assert!(js.contains("{\\'a\\':1}"));
    }
}
