//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are loaded at
//! runtime. They are evaluated as globals (no ES modules) and exposed via
//! `window.*`. This module provides safe Rust wrappers that serialize data
//! and call those globals, plus the CSV download shim.

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static PERFORMANCE_CHART_JS: &str = include_str!("../assets/js/performance-chart.js");
static VOLUME_CHART_JS: &str = include_str!("../assets/js/volume-chart.js");
static DONUT_CHART_JS: &str = include_str!("../assets/js/donut-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('IMC JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderPerformanceChart(...)`
/// via `function` declarations. To make them globally accessible (not
/// block-scoped inside the polling callback), they are evaluated at global
/// scope via indirect eval once D3 is ready and then promoted to
/// `window.*` explicitly.
pub fn init_charts() {
    let all_js = [
        TOOLTIP_JS,
        PERFORMANCE_CHART_JS,
        VOLUME_CHART_JS,
        DONUT_CHART_JS,
    ]
    .join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__imcChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__imcChartScripts);
                    delete window.__imcChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderPerformanceChart !== 'undefined') window.renderPerformanceChart = renderPerformanceChart;
                    if (typeof renderVolumeChart !== 'undefined') window.renderVolumeChart = renderVolumeChart;
                    if (typeof renderBudgetDonut !== 'undefined') window.renderBudgetDonut = renderBudgetDonut;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__imcChartsReady = true;
                    console.log('IMC charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render a chart via a named window-global renderer, polling until D3,
/// the chart scripts, and the container DOM element are all ready.
fn render_via(renderer: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__imcChartsReady &&
                    typeof window.{renderer} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{renderer}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[IMC] {renderer} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the reach/engagement area chart.
pub fn render_performance_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_via("renderPerformanceChart", container_id, data_json, config_json);
}

/// Render the stock-volume bar chart with event spike markers.
pub fn render_volume_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_via("renderVolumeChart", container_id, data_json, config_json);
}

/// Render the budget allocation donut.
pub fn render_budget_donut(container_id: &str, data_json: &str, config_json: &str) {
    render_via("renderBudgetDonut", container_id, data_json, config_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

/// Trigger a browser download of CSV content under the given filename.
///
/// The content is embedded as a JSON string literal so newlines and quotes
/// survive the eval round-trip.
pub fn download_csv(filename: &str, contents: &str) {
    let payload = serde_json::to_string(contents).unwrap_or_default();
    call_js(&format!(
        r#"
        var blob = new Blob([{payload}], {{ type: 'text/csv;charset=utf-8;' }});
        var url = URL.createObjectURL(blob);
        var a = document.createElement('a');
        a.href = url;
        a.download = '{filename}';
        document.body.appendChild(a);
        a.click();
        document.body.removeChild(a);
        URL.revokeObjectURL(url);
        "#,
    ));
}
