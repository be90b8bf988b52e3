//! Dashboard header with client name, campaign title, and duration badge.

use crate::state::AppState;
use dioxus::prelude::*;

/// Static campaign header. Reads metadata from AppState.
#[component]
pub fn CampaignHeader() -> Element {
    let state = use_context::<AppState>();
    let meta = state.meta.read().clone();

    let Some(meta) = meta else {
        return rsx! {};
    };

    rsx! {
        header {
            style: "display: flex; justify-content: space-between; align-items: center; \
                    padding-bottom: 16px; border-bottom: 1px solid #1e293b; gap: 16px; flex-wrap: wrap;",
            div {
                h1 {
                    style: "margin: 0; font-size: 22px; color: #f8fafc;",
                    "{meta.client_name}"
                }
                p {
                    style: "margin: 4px 0 0 0; font-size: 13px; color: #94a3b8;",
                    "{meta.campaign_title}"
                }
            }
            div {
                style: "background: rgba(15,23,42,0.5); border: 1px solid #334155; \
                        border-radius: 8px; padding: 8px 12px; font-size: 13px; color: #cbd5e1;",
                "Duration: {meta.duration}"
            }
        }
    }
}
