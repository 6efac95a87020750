use crate::{
    notifications::{EmailNotification, PushNotification, SmsNotification},
    Notification, NotificationService,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct EmailNotificationService;

#[derive(Debug, Default, Clone, Copy)]
pub struct SmsNotificationService;

#[derive(Debug, Default, Clone, Copy)]
pub struct PushNotificationService;

impl NotificationService for EmailNotificationService {
    fn create_notification(&self) -> Box<dyn Notification> {
        Box::new(EmailNotification)
    }
}

impl NotificationService for SmsNotificationService {
    fn create_notification(&self) -> Box<dyn Notification> {
        Box::new(SmsNotification)
    }
}

impl NotificationService for PushNotificationService {
    fn create_notification(&self) -> Box<dyn Notification> {
        Box::new(PushNotification)
    }
}
