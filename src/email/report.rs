//! The report variants that can be sent by email and the normalisation of
//! loosely typed template props into them.
//!
//! Callers send props as JSON, where any field may be missing or have the
//! wrong type. [Report::from_props] fills in a default for every such field so
//! that rendering never has to deal with partial data.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

/// The type tag for a monthly report.
pub const MONTHLY_REPORT: &str = "monthly-report";
/// The type tag for a budget alert.
pub const BUDGET_ALERT: &str = "budget-alert";
/// The month label used when the payload does not name one.
pub const DEFAULT_MONTH: &str = "Current Month";

/// The loosely typed input to an email template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailTemplateProps {
    /// The recipient's name, used in the greeting.
    #[serde(default)]
    pub user_name: String,
    /// The report type tag, e.g. [MONTHLY_REPORT].
    #[serde(rename = "type", default)]
    pub kind: String,
    /// The report payload, its shape depends on `kind`.
    #[serde(default)]
    pub data: Value,
}

impl EmailTemplateProps {
    /// Normalise the props into a [Report].
    pub fn report(&self) -> Report {
        Report::from_props(&self.kind, &self.data)
    }
}

/// The closed set of emails that can be rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// A summary of a month's income and expenses.
    MonthlyReport(MonthlyReport),
    /// A warning that most of the monthly budget has been spent.
    BudgetAlert(BudgetAlert),
    /// An unrecognised type tag, rendered as a generic notice.
    Unknown(String),
}

impl Report {
    /// Build a report from a type tag and a payload.
    ///
    /// An empty tag is treated as [MONTHLY_REPORT]. This never fails: missing
    /// or malformed payload fields take their default values and unknown tags
    /// become [Report::Unknown].
    pub fn from_props(kind: &str, data: &Value) -> Self {
        let kind = if kind.is_empty() { MONTHLY_REPORT } else { kind };

        match kind {
            MONTHLY_REPORT => Report::MonthlyReport(MonthlyReport::from_payload(data)),
            BUDGET_ALERT => Report::BudgetAlert(BudgetAlert::from_payload(data)),
            other => {
                tracing::warn!("Unknown email type \"{other}\", using the fallback template");
                Report::Unknown(other.to_owned())
            }
        }
    }
}

/// A fully populated monthly report.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    /// The name of the month, e.g. "December".
    pub month: String,
    /// The income for the month in dollars.
    pub total_income: f64,
    /// The expenses for the month in dollars.
    pub total_expenses: f64,
    /// The expenses for each category label.
    pub by_category: BTreeMap<String, f64>,
    /// Free-text observations about the month's spending.
    pub insights: Vec<String>,
}

impl MonthlyReport {
    /// Income minus expenses.
    pub fn net(&self) -> f64 {
        self.total_income - self.total_expenses
    }

    fn from_payload(data: &Value) -> Self {
        let payload = parse_payload::<MonthlyReportPayload>(data);
        let stats = payload.stats.unwrap_or_default();

        Self {
            month: payload
                .month
                .filter(|month| !month.is_empty())
                .unwrap_or_else(|| DEFAULT_MONTH.to_owned()),
            total_income: stats.total_income.unwrap_or_default(),
            total_expenses: stats.total_expenses.unwrap_or_default(),
            by_category: stats
                .by_category
                .unwrap_or_default()
                .into_iter()
                .filter_map(|(category, amount)| Some((category, amount.as_f64()?)))
                .collect(),
            insights: payload
                .insights
                .unwrap_or_default()
                .into_iter()
                .filter_map(|insight| match insight {
                    Value::String(text) => Some(text),
                    _ => None,
                })
                .collect(),
        }
    }
}

/// A fully populated budget alert.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetAlert {
    /// How much of the budget has been used, e.g. `85.0` for 85%.
    pub percentage_used: f64,
    /// The budget for the month in dollars.
    pub budget_amount: f64,
    /// The amount spent so far in dollars.
    pub total_expenses: f64,
}

impl BudgetAlert {
    /// The budget left over, negative when over budget.
    pub fn remaining(&self) -> f64 {
        self.budget_amount - self.total_expenses
    }

    fn from_payload(data: &Value) -> Self {
        let payload = parse_payload::<BudgetAlertPayload>(data);

        Self {
            percentage_used: payload.percentage_used.unwrap_or_default(),
            budget_amount: payload.budget_amount.unwrap_or_default(),
            total_expenses: payload.total_expenses.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MonthlyReportPayload {
    #[serde(default, deserialize_with = "lenient")]
    month: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    stats: Option<MonthlyStatsPayload>,
    #[serde(default, deserialize_with = "lenient")]
    insights: Option<Vec<Value>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MonthlyStatsPayload {
    #[serde(default, deserialize_with = "lenient")]
    total_income: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    total_expenses: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    by_category: Option<Map<String, Value>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BudgetAlertPayload {
    #[serde(default, deserialize_with = "lenient")]
    percentage_used: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    budget_amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    total_expenses: Option<f64>,
}

/// Deserialize a field, treating a value of the wrong type as missing.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;

    Ok(serde_json::from_value(value).ok())
}

fn parse_payload<T: DeserializeOwned + Default>(data: &Value) -> T {
    match data {
        Value::Object(_) => T::deserialize(data).unwrap_or_default(),
        Value::Null => T::default(),
        other => {
            tracing::warn!("Expected an object for the email payload, got {other}");
            T::default()
        }
    }
}
