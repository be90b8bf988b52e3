//! Chart container component with loading state.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// Panel heading shown above the chart
    pub title: String,
    /// Whether the chart is still loading
    #[props(default = false)]
    pub loading: bool,
    /// Optional minimum height in pixels
    #[props(default = 320)]
    pub min_height: u32,
}

/// A titled panel wrapping a div that D3.js renders into.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let body_style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "background: rgba(15,23,42,0.7); border: 1px solid #1e293b; \
                    border-radius: 12px; padding: 20px;",
            h3 {
                style: "margin: 0 0 12px 0; font-size: 16px; color: #f8fafc;",
                "{props.title}"
            }
            div {
                style: "{body_style}",
                if props.loading {
                    div {
                        style: "position: absolute; top: 50%; left: 50%; \
                                transform: translate(-50%, -50%); color: #64748b;",
                        "Loading chart..."
                    }
                }
                div {
                    id: "{props.id}",
                    style: "width: 100%;",
                }
            }
        }
    }
}
