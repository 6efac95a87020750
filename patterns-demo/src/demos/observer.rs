use std::rc::Rc;

use log::info;
use observer::{subject_observer::Subject, MetricsSubscriber, NewsFeed, Reader};

use crate::{config::app::AppConfig, error::AppError};

pub fn run(_config: &AppConfig) -> Result<(), AppError> {
    let mut feed = NewsFeed::new();
    let tom = Rc::new(Reader::new("Tom", "Email"));
    let benjamin = Rc::new(Reader::new("Benjamin", "SMS"));
    let alice = Rc::new(Reader::new("Alice", "Push"));
    let metrics = Rc::new(MetricsSubscriber::to_log());

    info!("--- Phase 1: subscriptions ---");
    for reader in [&tom, &benjamin, &alice] {
        feed.attach(reader.clone());
        info!("✅ {} subscribed to the news", reader.name());
    }
    feed.attach(metrics.clone());

    info!("--- Phase 2: publication ---");
    feed.publish("The Observer pattern makes notifications simple!");

    info!("--- Phase 3: unsubscription ---");
    feed.detach(benjamin.clone());
    info!("❌ {} unsubscribed from the news", benjamin.name());

    info!("--- Phase 4: new publication ---");
    feed.publish("A new release is out with new features!");

    info!(
        "{} item(s) published, {} delivery(ies) counted, {} received {} item(s)",
        feed.items().len(),
        metrics.delivered(),
        benjamin.name(),
        benjamin.received().len()
    );
    Ok(())
}
