use std::cell::RefCell;

use log::info;

use crate::{subject_observer::Subscriber, NewsFeed};

pub const DEFAULT_CHANNEL: &str = "Email";

pub struct Reader {
    name: String,
    channel: String,
    inbox: RefCell<Vec<String>>,
}

impl Reader {
    pub fn new(name: impl Into<String>, channel: impl Into<String>) -> Self {
        Reader {
            name: name.into(),
            channel: channel.into(),
            inbox: RefCell::new(vec![]),
        }
    }

    pub fn with_default_channel(name: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_CHANNEL)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn received(&self) -> Vec<String> {
        self.inbox.borrow().clone()
    }

    fn icon(&self) -> &'static str {
        match self.channel.as_str() {
            "Email" => "📧",
            "SMS" => "📱",
            "Push" => "🔔",
            _ => "📬",
        }
    }
}

impl Subscriber<NewsFeed> for Reader {
    fn update(&self, subject: &NewsFeed) {
        if let Some(latest) = subject.latest() {
            info!(
                "{} [{}] {} received: \"{}\"",
                self.icon(),
                self.channel,
                self.name,
                latest
            );
            self.inbox.borrow_mut().push(latest.to_owned());
        }
    }
}
