//! Budget allocation panel: D3 donut plus a per-channel share legend.

use crate::state::AppState;
use dioxus::prelude::*;
use imc_core::channel::Channel;

/// Chart color per channel, shared between the legend and the donut data
/// the app feeds to D3.
pub fn channel_color(channel: Channel) -> &'static str {
    match channel {
        Channel::Strategy => "#eab308",
        Channel::Email => "#3b82f6",
        Channel::Meta => "#ec4899",
        Channel::LinkedIn => "#14b8a6",
        Channel::XTwitter => "#8b5cf6",
        Channel::GoogleAds => "#f97316",
        Channel::Influencers => "#ef4444",
    }
}

/// Props for BudgetPanel
#[derive(Props, Clone, PartialEq)]
pub struct BudgetPanelProps {
    /// DOM id the donut renders into
    pub chart_id: String,
}

/// Budget allocation donut with a share-percentage legend underneath.
#[component]
pub fn BudgetPanel(props: BudgetPanelProps) -> Element {
    let state = use_context::<AppState>();
    let channels = state.channels.read().clone();

    rsx! {
        div {
            style: "background: rgba(15,23,42,0.7); border: 1px solid #1e293b; \
                    border-radius: 12px; padding: 20px;",
            h3 {
                style: "margin: 0 0 12px 0; font-size: 16px; color: #f8fafc;",
                "Budget Allocation"
            }
            div {
                id: "{props.chart_id}",
                style: "display: flex; justify-content: center; min-height: 220px;",
            }
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 6px 16px; \
                        margin-top: 16px; font-size: 12px;",
                for row in channels {
                    div {
                        style: "display: flex; align-items: center;",
                        span {
                            style: "width: 10px; height: 10px; border-radius: 50%; \
                                    background: {channel_color(row.channel)}; margin-right: 8px;",
                        }
                        span { style: "color: #cbd5e1;", "{row.channel.label()}" }
                        span {
                            style: "margin-left: auto; color: #94a3b8;",
                            "{row.share_percent:.0}%"
                        }
                    }
                }
            }
        }
    }
}
