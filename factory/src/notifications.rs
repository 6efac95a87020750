use log::info;

use crate::{Channel, Notification};

#[derive(Debug, Default)]
pub struct EmailNotification;

#[derive(Debug, Default)]
pub struct SmsNotification;

#[derive(Debug, Default)]
pub struct PushNotification;

impl Notification for EmailNotification {
    fn channel(&self) -> Channel {
        Channel::Email
    }

    fn send(&self, message: &str, recipient: &str) {
        info!(target: "notification::email", "✉️ EMAIL to {}: {}", recipient, message);
        info!(target: "notification::email", "Email sent via SMTP");
    }
}

impl Notification for SmsNotification {
    fn channel(&self) -> Channel {
        Channel::Sms
    }

    fn send(&self, message: &str, recipient: &str) {
        info!(target: "notification::sms", "📱 SMS to {}: {}", recipient, message);
        info!(target: "notification::sms", "SMS handed to carrier");
    }
}

impl Notification for PushNotification {
    fn channel(&self) -> Channel {
        Channel::Push
    }

    fn send(&self, message: &str, recipient: &str) {
        info!(target: "notification::push", "🔔 PUSH to device {}: {}", recipient, message);
        info!(target: "notification::push", "Push notification sent");
    }
}
