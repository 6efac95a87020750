use log::debug;
use strum::{Display, EnumString};

mod notifications;
mod services;

pub use notifications::{EmailNotification, PushNotification, SmsNotification};
pub use services::{EmailNotificationService, PushNotificationService, SmsNotificationService};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Channel {
    Email,
    Sms,
    Push,
}

pub trait Notification {
    fn channel(&self) -> Channel;

    fn send(&self, message: &str, recipient: &str);
}

pub trait NotificationService {
    fn create_notification(&self) -> Box<dyn Notification>;

    fn notify(&self, message: &str, recipient: &str) {
        let notification = self.create_notification();
        debug!("Dispatching through {} channel", notification.channel());
        notification.send(message, recipient);
    }
}

impl Channel {
    pub fn service(self) -> Box<dyn NotificationService> {
        match self {
            Channel::Email => Box::new(EmailNotificationService),
            Channel::Sms => Box::new(SmsNotificationService),
            Channel::Push => Box::new(PushNotificationService),
        }
    }
}

pub fn service_for(label: &str) -> Box<dyn NotificationService> {
    let channel = label.parse::<Channel>().unwrap_or_else(|_| {
        debug!("Unknown channel '{}', falling back to {}", label, Channel::Email);
        Channel::Email
    });
    channel.service()
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::{service_for, Channel, Notification, NotificationService};

    mock! {
        TestNotification {}

        impl Notification for TestNotification {
            fn channel(&self) -> Channel;

            fn send(&self, message: &str, recipient: &str);
        }
    }

    mock! {
        TestService {}

        impl NotificationService for TestService {
            fn create_notification(&self) -> Box<dyn Notification>;
        }
    }

    fn single_use_notification() -> Box<dyn Notification> {
        let mut notification = MockTestNotification::new();
        notification.expect_channel().return_const(Channel::Sms);
        notification
            .expect_send()
            .withf(|message: &str, recipient: &str| {
                message == "shipped" && recipient == "+33612345678"
            })
            .times(1)
            .return_const(());
        Box::new(notification)
    }

    #[test]
    fn test_notify_should_create_a_notification_per_call() {
        // Given
        let mut service = MockTestService::new();
        service
            .expect_create_notification()
            .times(2)
            .returning(single_use_notification);

        // When
        service.notify("shipped", "+33612345678");
        service.notify("shipped", "+33612345678");
    }

    #[test]
    fn test_channel_parse() {
        assert_eq!(Ok(Channel::Email), "email".parse::<Channel>());
        assert_eq!(Ok(Channel::Sms), "SMS".parse::<Channel>());
        assert_eq!(Ok(Channel::Push), "Push".parse::<Channel>());
        assert!("pigeon".parse::<Channel>().is_err());
    }

    #[test]
    fn test_service_for_should_pick_matching_channel() {
        for channel in [Channel::Email, Channel::Sms, Channel::Push] {
            let service = service_for(&channel.to_string());
            assert_eq!(channel, service.create_notification().channel());
        }
    }

    #[test]
    fn test_service_for_should_fall_back_to_email() {
        let service = service_for("carrier pigeon");
        assert_eq!(Channel::Email, service.create_notification().channel());
    }
}
