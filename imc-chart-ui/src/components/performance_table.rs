//! Channel performance table with selection filtering and CSV export.
//!
//! Row clicks drive the channel filter with toggle semantics; the table
//! itself re-projects through `project::budget_rows` so a filtered view
//! and the chart always agree on the selection.

use crate::state::AppState;
use dioxus::prelude::*;
use imc_core::budget::ChannelBudget;
use imc_core::channel::Channel;
use imc_data::project;

const TH_STYLE: &str = "padding: 10px 16px; text-align: left; font-size: 11px; \
    text-transform: uppercase; color: #94a3b8; background: rgba(30,41,59,0.5);";
const TD_STYLE: &str = "padding: 12px 16px; border-bottom: 1px solid #1e293b; \
    font-size: 13px; color: #cbd5e1;";

/// Unicode glyph per channel, the presentation-side icon lookup.
fn channel_glyph(channel: Channel) -> &'static str {
    match channel {
        Channel::Strategy => "\u{1F527}",    // wrench
        Channel::Email => "\u{2709}",        // envelope
        Channel::Meta => "\u{1F4E3}",        // megaphone
        Channel::LinkedIn => "\u{1F4BC}",    // briefcase
        Channel::XTwitter => "\u{1F4AC}",    // speech bubble
        Channel::GoogleAds => "\u{1F50D}",   // magnifier
        Channel::Influencers => "\u{1F310}", // globe
    }
}

fn ctr_color(ctr: f64) -> &'static str {
    if ctr >= 2.5 {
        "#4ade80"
    } else if ctr > 0.0 {
        "#fbbf24"
    } else {
        "#64748b"
    }
}

fn format_usd(value: f64) -> String {
    format!("${}", super::kpi_card::format_thousands(value))
}

/// Channel performance table. Click a row to filter the dashboard to that
/// channel; click it again (or the clear button) to remove the filter.
#[component]
pub fn PerformanceTable() -> Element {
    let mut state = use_context::<AppState>();
    let channels = state.channels.read().clone();
    let selection = (state.selection)();
    let rows: Vec<ChannelBudget> = project::budget_rows(selection, &channels)
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        div {
            style: "background: rgba(15,23,42,0.7); border: 1px solid #1e293b; \
                    border-radius: 12px; overflow: hidden;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; padding: 16px 20px;",
                h3 {
                    style: "margin: 0; font-size: 16px; color: #f8fafc;",
                    "Channel Performance Details"
                }
                div {
                    style: "display: flex; gap: 8px;",
                    if selection.is_some() {
                        button {
                            style: "background: none; border: 1px solid #475569; color: #cbd5e1; \
                                    border-radius: 6px; padding: 6px 12px; font-size: 12px; cursor: pointer;",
                            onclick: move |_| state.clear_selection(),
                            "Clear filter"
                        }
                    }
                    button {
                        style: "background: #1d4ed8; border: none; color: #f8fafc; \
                                border-radius: 6px; padding: 6px 12px; font-size: 12px; cursor: pointer;",
                        onclick: move |_| state.export_csv(),
                        "Export CSV"
                    }
                }
            }
            table {
                style: "width: 100%; border-collapse: collapse;",
                thead {
                    tr {
                        th { style: TH_STYLE, "Channel" }
                        th { style: TH_STYLE, "Budget" }
                        th { style: TH_STYLE, "Spent" }
                        th { style: TH_STYLE, "Impressions" }
                        th { style: TH_STYLE, "CTR (%)" }
                    }
                }
                tbody {
                    for row in rows {
                        TableRow {
                            key: "{row.channel.label()}",
                            row: row.clone(),
                            selected: selection == Some(row.channel),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TableRow(row: ChannelBudget, selected: bool) -> Element {
    let mut state = use_context::<AppState>();
    let channel = row.channel;
    let row_style = if selected {
        "cursor: pointer; background: rgba(29,78,216,0.2);"
    } else {
        "cursor: pointer;"
    };

    let spent = if row.cost > 0.0 {
        format_usd(row.cost)
    } else {
        "N/A".to_string()
    };
    let impressions = if row.impressions > 0 {
        super::kpi_card::format_thousands(row.impressions as f64)
    } else {
        "N/A".to_string()
    };
    let ctr = if row.ctr_percent > 0.0 {
        format!("{:.2}", row.ctr_percent)
    } else {
        "N/A".to_string()
    };
    let ctr_style = format!("{TD_STYLE} color: {}; font-weight: 600;", ctr_color(row.ctr_percent));

    rsx! {
        tr {
            style: row_style,
            onclick: move |_| state.select_channel(channel),
            td {
                style: TD_STYLE,
                span { style: "margin-right: 8px;", "{channel_glyph(channel)}" }
                span { style: "color: #f8fafc; font-weight: 500;", "{channel.label()}" }
            }
            td { style: TD_STYLE, "{format_usd(row.allocated)}" }
            td { style: TD_STYLE, "{spent}" }
            td { style: TD_STYLE, "{impressions}" }
            td { style: ctr_style, "{ctr}" }
        }
    }
}
