//! Transactional emails: normalising report payloads, rendering them as HTML
//! and delivering them through an email provider.

mod dispatch;
mod endpoint;
mod preview;
mod report;
mod sender;
mod template;

pub use dispatch::{SendEmailRequest, send_email};
pub use endpoint::{EmailState, get_email_preview, send_email_endpoint};
pub use preview::{PreviewKind, preview_props};
pub use report::{
    BUDGET_ALERT, BudgetAlert, DEFAULT_MONTH, EmailTemplateProps, MONTHLY_REPORT, MonthlyReport,
    Report,
};
pub use sender::{
    DeliveryError, DeliveryReceipt, EmailMessage, EmailSender, RESEND_API_BASE, ResendSender,
};
pub use template::{format_category_name, render_email, render_email_props};
