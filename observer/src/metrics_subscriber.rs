use std::cell::Cell;

use dipstick::{Counter, Gauge, Input, InputScope, Log};

use crate::{subject_observer::Subscriber, NewsFeed};

pub struct MetricsSubscriber {
    received: Counter,
    item_length: Gauge,
    delivered: Cell<usize>,
}

impl MetricsSubscriber {
    pub fn to_log() -> Self {
        let scope = Log::to_log().level(log::Level::Info).metrics();
        MetricsSubscriber {
            received: scope.counter("news_received"),
            item_length: scope.gauge("news_item_length"),
            delivered: Cell::new(0),
        }
    }

    pub fn delivered(&self) -> usize {
        self.delivered.get()
    }
}

impl Subscriber<NewsFeed> for MetricsSubscriber {
    fn update(&self, subject: &NewsFeed) {
        if let Some(latest) = subject.latest() {
            self.received.count(1);
            self.item_length.value(latest.chars().count());
            self.delivered.set(self.delivered.get() + 1);
        }
    }
}
