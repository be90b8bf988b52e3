//! Campaign roadmap panel.
//!
//! Renders the phase list with status glyphs and flashes phases that
//! completed within the current highlight window. The panel only reads
//! timeline state; advancing goes through `AppState::advance_timeline`.

use crate::state::AppState;
use dioxus::prelude::*;
use imc_core::timeline::PhaseStatus;

/// Status glyph and accent color for a phase marker.
fn status_decor(status: PhaseStatus) -> (&'static str, &'static str) {
    match status {
        PhaseStatus::Completed => ("\u{2713}", "#4ade80"),
        PhaseStatus::InProgress => ("\u{25B6}", "#60a5fa"),
        PhaseStatus::Upcoming => ("\u{25CB}", "#64748b"),
    }
}

/// The campaign roadmap with transient completion highlighting.
#[component]
pub fn TimelinePanel() -> Element {
    let mut state = use_context::<AppState>();
    let timeline = state.timeline.read().clone();
    let recently = state.recently_completed.read().clone();

    rsx! {
        div {
            style: "background: rgba(15,23,42,0.7); border: 1px solid #1e293b; \
                    border-radius: 12px; padding: 20px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; \
                        margin-bottom: 16px;",
                h3 {
                    style: "margin: 0; font-size: 16px; color: #f8fafc;",
                    "Campaign Roadmap"
                }
                if timeline.has_remaining() {
                    button {
                        style: "background: none; border: 1px solid #475569; color: #cbd5e1; \
                                border-radius: 6px; padding: 4px 10px; font-size: 11px; cursor: pointer;",
                        onclick: move |_| state.advance_timeline(),
                        "Advance phase"
                    }
                }
            }
            div {
                style: "border-left: 1px solid #334155; padding-left: 20px; \
                        display: flex; flex-direction: column; gap: 20px;",
                for phase in timeline.phases() {
                    PhaseEntry {
                        key: "{phase.id}",
                        duration: phase.duration.clone(),
                        title: phase.title.clone(),
                        description: phase.description.clone(),
                        status: phase.status,
                        highlighted: recently.contains(&phase.id),
                    }
                }
            }
        }
    }
}

#[component]
fn PhaseEntry(
    duration: String,
    title: String,
    description: String,
    status: PhaseStatus,
    highlighted: bool,
) -> Element {
    let (glyph, color) = status_decor(status);
    let entry_style = if highlighted {
        "position: relative; border-radius: 8px; padding: 8px; \
         background: rgba(74,222,128,0.15); transition: background 0.3s;"
    } else {
        "position: relative; padding: 8px; transition: background 0.3s;"
    };

    rsx! {
        div {
            style: entry_style,
            span {
                style: "position: absolute; left: -31px; top: 10px; width: 20px; height: 20px; \
                        border-radius: 50%; background: #0f172a; border: 2px solid {color}; \
                        color: {color}; font-size: 11px; display: flex; \
                        align-items: center; justify-content: center;",
                "{glyph}"
            }
            p {
                style: "margin: 0; font-size: 11px; text-transform: uppercase; \
                        letter-spacing: 0.05em; color: #94a3b8;",
                "{duration} - "
                span { style: "color: {color}; font-weight: 700;", "{status.label()}" }
            }
            h4 {
                style: "margin: 4px 0 0 0; font-size: 14px; color: #f1f5f9;",
                "{title}"
            }
            p {
                style: "margin: 4px 0 0 0; font-size: 12px; color: #94a3b8;",
                "{description}"
            }
        }
    }
}
