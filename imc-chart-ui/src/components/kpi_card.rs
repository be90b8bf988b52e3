//! KPI card with an animated count-up value and a period-over-period delta.

use crate::hooks::use_count_up;
use dioxus::prelude::*;

/// How long each KPI value animates toward a new target, ms.
const COUNT_UP_DURATION_MS: u32 = 1500;

const CARD_STYLE: &str = "background: rgba(15,23,42,0.7); border: 1px solid #1e293b; \
    border-radius: 12px; padding: 20px; flex: 1; min-width: 200px;";

/// Props for KpiCard
#[derive(Props, Clone, PartialEq)]
pub struct KpiCardProps {
    pub title: String,
    /// Target value; changes ease from the currently displayed value.
    pub value: ReadOnlySignal<f64>,
    /// Period-over-period change, percent.
    pub change: f64,
    #[props(default = false)]
    pub is_percentage: bool,
    #[props(default = false)]
    pub is_currency: bool,
    /// Total budget; when set, a progress bar shows value/total.
    #[props(default)]
    pub total: Option<f64>,
}

/// A KPI card: title, count-up value, delta arrow, optional budget bar.
#[component]
pub fn KpiCard(props: KpiCardProps) -> Element {
    let displayed = use_count_up(props.value, COUNT_UP_DURATION_MS);

    let shown = *displayed.read();
    let value_text = if props.is_currency {
        format!("${}", format_thousands(shown))
    } else if props.is_percentage {
        format!("{shown:.1}%")
    } else {
        format_thousands(shown)
    };

    let positive = props.change >= 0.0;
    let (arrow, delta_color) = if positive {
        ("\u{2197}", "#4ade80")
    } else {
        ("\u{2198}", "#f87171")
    };
    let delta_text = match props.total {
        Some(_) if props.is_currency => format!("{:.1}% of Budget", props.change),
        _ => format!("{:.1}%", props.change.abs()),
    };

    rsx! {
        div {
            style: CARD_STYLE,
            p {
                style: "margin: 0; font-size: 13px; color: #94a3b8;",
                "{props.title}"
            }
            h2 {
                style: "margin: 8px 0 4px 0; font-size: 28px; color: #f8fafc;",
                "{value_text}"
            }
            p {
                style: "margin: 0; font-size: 13px;",
                span { style: "color: {delta_color};", "{arrow} {delta_text}" }
                span { style: "color: #64748b;", " vs last period" }
            }
            if let Some(total) = props.total {
                BudgetBar { value: shown, total }
            }
        }
    }
}

/// Thin progress bar for the budget-spent card.
#[component]
fn BudgetBar(value: f64, total: f64) -> Element {
    let percent = if total > 0.0 {
        (100.0 * value / total).clamp(0.0, 100.0)
    } else {
        0.0
    };
    rsx! {
        div {
            style: "margin-top: 12px;",
            div {
                style: "width: 100%; height: 6px; background: #334155; border-radius: 3px;",
                div {
                    style: "width: {percent}%; height: 6px; background: #fbbf24; border-radius: 3px;",
                }
            }
            p {
                style: "margin: 4px 0 0 0; font-size: 11px; color: #94a3b8; text-align: right;",
                "${format_thousands(total)} Total"
            }
        }
    }
}

/// Format a value with thousands separators, rounded to an integer.
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let negative = rounded < 0;
    let digits = rounded.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if negative {
        format!("-{out}")
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::format_thousands;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1000.0), "1,000");
        assert_eq!(format_thousands(325_480.0), "325,480");
        assert_eq!(format_thousands(1_234_567.0), "1,234,567");
    }

    #[test]
    fn rounds_and_keeps_sign() {
        assert_eq!(format_thousands(1999.6), "2,000");
        assert_eq!(format_thousands(-1234.0), "-1,234");
    }
}
