use std::rc::Rc;

pub trait Subscriber<S> {
    fn update(&self, subject: &S);
}

pub trait Subject: Sized {
    fn attach(&mut self, subscriber: Rc<dyn Subscriber<Self>>);
    fn detach(&mut self, subscriber: Rc<dyn Subscriber<Self>>);
    fn notify(&self);
}

pub type SharedSubscribers<S> = Vec<Rc<dyn Subscriber<S>>>;
