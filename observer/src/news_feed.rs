use std::rc::Rc;

use log::{debug, info};

use crate::subject_observer::{SharedSubscribers, Subject, Subscriber};

#[derive(Default)]
pub struct NewsFeed {
    subscribers: SharedSubscribers<Self>,
    items: Vec<String>,
}

impl Subject for NewsFeed {
    fn attach(&mut self, subscriber: Rc<dyn Subscriber<Self>>) {
        self.subscribers.push(subscriber);
        debug!("Subscriber attached, {} in total", self.subscribers.len());
    }

    fn detach(&mut self, subscriber: Rc<dyn Subscriber<Self>>) {
        self.subscribers.retain(|sub| !Rc::ptr_eq(sub, &subscriber));
        debug!("Subscriber detached, {} left", self.subscribers.len());
    }

    fn notify(&self) {
        // `&self` keeps the list and the latest item frozen for the whole round.
        for sub in &self.subscribers {
            sub.update(self);
        }
    }
}

impl NewsFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&mut self, item: impl Into<String>) {
        let item = item.into();
        info!("📰 New item published: \"{}\"", item);
        self.items.push(item);
        self.notify();
    }

    pub fn latest(&self) -> Option<&str> {
        self.items.last().map(String::as_str)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
