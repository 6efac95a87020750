mod metrics_subscriber;
mod news_feed;
mod reader;
pub mod subject_observer;

pub use metrics_subscriber::MetricsSubscriber;
pub use news_feed::NewsFeed;
pub use reader::{Reader, DEFAULT_CHANNEL};
