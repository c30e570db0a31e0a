//! Sample props for previewing the email templates.

use std::{fmt, str::FromStr};

use serde_json::json;

use crate::email::report::{BUDGET_ALERT, EmailTemplateProps, MONTHLY_REPORT};

/// The emails that have sample data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    /// A monthly report for "John Doe".
    MonthlyReport,
    /// A budget alert for "Jane Smith".
    BudgetAlert,
}

impl PreviewKind {
    /// The email type tag for this preview.
    pub fn as_str(self) -> &'static str {
        match self {
            PreviewKind::MonthlyReport => MONTHLY_REPORT,
            PreviewKind::BudgetAlert => BUDGET_ALERT,
        }
    }
}

impl fmt::Display for PreviewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreviewKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            MONTHLY_REPORT => Ok(PreviewKind::MonthlyReport),
            BUDGET_ALERT => Ok(PreviewKind::BudgetAlert),
            other => Err(format!(
                "unknown preview \"{other}\", expected \"{MONTHLY_REPORT}\" or \"{BUDGET_ALERT}\""
            )),
        }
    }
}

/// Get the sample props for `kind`.
pub fn preview_props(kind: PreviewKind) -> EmailTemplateProps {
    match kind {
        PreviewKind::MonthlyReport => EmailTemplateProps {
            user_name: "John Doe".to_owned(),
            kind: MONTHLY_REPORT.to_owned(),
            data: json!({
                "month": "December",
                "stats": {
                    "totalIncome": 5000,
                    "totalExpenses": 3500,
                    "byCategory": {
                        "housing": 1500,
                        "groceries": 600,
                        "transportation": 400,
                        "entertainment": 300,
                        "utilities": 700
                    }
                },
                "insights": [
                    "Your housing expenses are 43% of your total spending - consider reviewing your housing costs.",
                    "Great job keeping entertainment expenses under control this month!",
                    "Setting up automatic savings could help you save 20% more of your income."
                ]
            }),
        },
        PreviewKind::BudgetAlert => EmailTemplateProps {
            user_name: "Jane Smith".to_owned(),
            kind: BUDGET_ALERT.to_owned(),
            data: json!({
                "percentageUsed": 85,
                "budgetAmount": 4000,
                "totalExpenses": 3400
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::email::report::Report;

    use super::{PreviewKind, preview_props};

    #[test]
    fn monthly_preview_is_fully_populated() {
        let props = preview_props(PreviewKind::MonthlyReport);

        let Report::MonthlyReport(report) = props.report() else {
            panic!("want monthly report");
        };
        assert_eq!(props.user_name, "John Doe");
        assert_eq!(report.month, "December");
        assert_eq!(report.net(), 1500.0);
        assert_eq!(report.by_category.len(), 5);
        assert_eq!(report.insights.len(), 3);
    }

    #[test]
    fn budget_preview_is_fully_populated() {
        let props = preview_props(PreviewKind::BudgetAlert);

        let Report::BudgetAlert(alert) = props.report() else {
            panic!("want budget alert");
        };
        assert_eq!(props.user_name, "Jane Smith");
        assert_eq!(alert.percentage_used, 85.0);
        assert_eq!(alert.remaining(), 600.0);
    }

    #[test]
    fn parses_kind_tags() {
        for kind in [PreviewKind::MonthlyReport, PreviewKind::BudgetAlert] {
            assert_eq!(kind.to_string().parse::<PreviewKind>(), Ok(kind));
        }

        assert!("weekly".parse::<PreviewKind>().is_err());
    }
}
