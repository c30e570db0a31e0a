use std::sync::{Arc, Mutex};

use crate::email::{DeliveryError, DeliveryReceipt, EmailMessage, EmailSender};

/// An [EmailSender] that records every message and returns a canned response.
#[derive(Debug, Clone)]
pub(crate) struct FakeSender {
    response: Result<DeliveryReceipt, DeliveryError>,
    sent: Arc<Mutex<Vec<EmailMessage>>>,
}

impl FakeSender {
    pub(crate) fn accepting(id: &str) -> Self {
        Self {
            response: Ok(DeliveryReceipt { id: id.to_owned() }),
            sent: Arc::default(),
        }
    }

    pub(crate) fn failing(error: DeliveryError) -> Self {
        Self {
            response: Err(error),
            sent: Arc::default(),
        }
    }

    /// The messages passed to [EmailSender::send] so far.
    pub(crate) fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl EmailSender for FakeSender {
    async fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt, DeliveryError> {
        self.sent.lock().unwrap().push(message.clone());
        self.response.clone()
    }
}
