use factory::{
    service_for, EmailNotificationService, NotificationService, PushNotificationService,
    SmsNotificationService,
};
use log::info;

use crate::{config::app::AppConfig, error::AppError};

pub fn run(config: &AppConfig) -> Result<(), AppError> {
    let deliveries: [(Box<dyn NotificationService>, &str); 3] = [
        (Box::new(EmailNotificationService), "tom@example.com"),
        (Box::new(SmsNotificationService), "+33612345678"),
        (Box::new(PushNotificationService), "device_token_abc123"),
    ];
    for (service, recipient) in &deliveries {
        service.notify(&config.broadcast_message, recipient);
    }

    info!("--- Channel picked from a label ---");
    for (label, recipient) in [("sms", "+33698765432"), ("fax", "benjamin@example.com")] {
        service_for(label).notify(&config.broadcast_message, recipient);
    }
    Ok(())
}
