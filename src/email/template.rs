//! Renders reports as self-contained HTML emails.
//!
//! Email clients ignore stylesheets and scripts, so every element carries its
//! own inline style.

use maud::{DOCTYPE, Markup, html};

use crate::{
    email::report::{BudgetAlert, EmailTemplateProps, MonthlyReport, Report},
    html::format_currency,
};

const BODY_STYLE: &str = "background-color: #f6f9fc; \
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;";
const CONTAINER_STYLE: &str = "background-color: #ffffff; margin: 0 auto; padding: 20px; \
    border-radius: 5px; box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1); max-width: 600px;";
const PREVIEW_STYLE: &str = "display: none; overflow: hidden; line-height: 1px; \
    opacity: 0; max-height: 0; max-width: 0;";
const TITLE_STYLE: &str =
    "color: #1f2937; font-size: 24px; font-weight: bold; text-align: center; margin: 0 0 20px;";
const SECTION_HEADING_STYLE: &str =
    "color: #1f2937; font-size: 18px; font-weight: 600; margin: 0 0 16px;";
const TEXT_STYLE: &str = "color: #4b5563; font-size: 16px; line-height: 1.5; margin: 0 0 16px;";
const INSIGHT_STYLE: &str =
    "color: #4b5563; font-size: 16px; line-height: 1.5; margin: 8px 0; padding-left: 16px;";
const SECTION_STYLE: &str = "margin-top: 24px; padding: 20px; background-color: #f9fafb; \
    border-radius: 5px; border: 1px solid #e5e7eb;";
const STATS_CONTAINER_STYLE: &str =
    "margin: 24px 0; padding: 20px; background-color: #f9fafb; border-radius: 5px;";
const STAT_STYLE: &str = "margin-bottom: 12px; padding: 12px; background-color: #fff; \
    border-radius: 4px; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);";
const STAT_LABEL_STYLE: &str = "color: #6b7280; font-size: 14px; margin: 0 0 4px;";
const STAT_VALUE_STYLE: &str = "color: #1f2937; font-size: 18px; font-weight: 600; margin: 0;";
const ROW_STYLE: &str = "display: flex; justify-content: space-between; align-items: center; \
    padding: 12px 0; border-bottom: 1px solid #e5e7eb;";
const FOOTER_STYLE: &str = "color: #6b7280; font-size: 14px; text-align: center; \
    margin-top: 24px; padding-top: 16px; border-top: 1px solid #e5e7eb;";

/// Render the email for `props`, see [render_email].
pub fn render_email_props(props: &EmailTemplateProps) -> Markup {
    render_email(&props.user_name, &props.report())
}

/// Render `report` as a complete HTML document addressed to `user_name`.
///
/// An empty `user_name` is greeted as "there".
pub fn render_email(user_name: &str, report: &Report) -> Markup {
    match report {
        Report::MonthlyReport(report) => monthly_report_email(user_name, report),
        Report::BudgetAlert(alert) => budget_alert_email(user_name, alert),
        Report::Unknown(_) => fallback_email(user_name),
    }
}

/// Convert a category label into a display name, e.g. "housing" to "Housing".
pub fn format_category_name(category: &str) -> String {
    match category {
        "housing" => "Housing".to_owned(),
        "groceries" => "Groceries".to_owned(),
        "transportation" => "Transportation".to_owned(),
        "entertainment" => "Entertainment".to_owned(),
        "utilities" => "Utilities".to_owned(),
        other => {
            let mut chars = other.chars();

            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

fn monthly_report_email(user_name: &str, report: &MonthlyReport) -> Markup {
    let content = html! {
        (greeting(user_name))
        p style=(TEXT_STYLE) {
            "Here’s your financial summary for " (report.month) ":"
        }

        div class="stats" style=(STATS_CONTAINER_STYLE) {
            (stat("income", "Total Income", report.total_income))
            (stat("expenses", "Total Expenses", report.total_expenses))
            (stat("net", "Net", report.net()))
        }

        @if !report.by_category.is_empty() {
            div class="categories" style=(SECTION_STYLE) {
                h2 style=(SECTION_HEADING_STYLE) { "Expenses by Category" }

                @for (category, amount) in &report.by_category {
                    div class="category" data-category=(category) style=(ROW_STYLE) {
                        span style=(TEXT_STYLE) { (format_category_name(category)) }
                        span class="amount" style=(TEXT_STYLE) { (format_currency(*amount)) }
                    }
                }
            }
        }

        @if !report.insights.is_empty() {
            div class="insights" style=(SECTION_STYLE) {
                h2 style=(SECTION_HEADING_STYLE) { "Welth Insights" }

                @for insight in &report.insights {
                    p class="insight" style=(INSIGHT_STYLE) { "• " (insight) }
                }
            }
        }

        (footer("Thank you for using Welth. Keep tracking your finances for better financial health!"))
    };

    email_document(
        "Your Monthly Financial Report",
        "Monthly Financial Report",
        content,
    )
}

fn budget_alert_email(user_name: &str, alert: &BudgetAlert) -> Markup {
    let content = html! {
        (greeting(user_name))
        p style=(TEXT_STYLE) {
            "You’ve used " (format!("{:.1}", alert.percentage_used)) "% of your monthly budget."
        }

        div class="stats" style=(STATS_CONTAINER_STYLE) {
            (stat("budget", "Budget Amount", alert.budget_amount))
            (stat("spent", "Spent So Far", alert.total_expenses))
            (stat("remaining", "Remaining", alert.remaining()))
        }

        (footer("Consider reviewing your spending to stay within budget."))
    };

    email_document("Budget Alert", "Budget Alert", content)
}

fn fallback_email(user_name: &str) -> Markup {
    let content = html! {
        (greeting(user_name))
        p style=(TEXT_STYLE) {
            "There seems to be an issue with your email content. Please contact support."
        }
    };

    email_document("Financial Update", "Financial Update", content)
}

fn email_document(preview: &str, title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
            }
            body style=(BODY_STYLE) {
                div class="preview" style=(PREVIEW_STYLE) { (preview) }
                div class="container" style=(CONTAINER_STYLE) {
                    h1 style=(TITLE_STYLE) { (title) }
                    (content)
                }
            }
        }
    }
}

fn greeting(user_name: &str) -> Markup {
    let name = if user_name.is_empty() {
        "there"
    } else {
        user_name
    };

    html! {
        p class="greeting" style=(TEXT_STYLE) { "Hello " (name) "," }
    }
}

fn stat(id: &str, label: &str, value: f64) -> Markup {
    html! {
        div class="stat" data-stat=(id) style=(STAT_STYLE) {
            p style=(STAT_LABEL_STYLE) { (label) }
            p class="stat-value" style=(STAT_VALUE_STYLE) { (format_currency(value)) }
        }
    }
}

fn footer(text: &str) -> Markup {
    html! {
        p class="footer" style=(FOOTER_STYLE) { (text) }
    }
}
