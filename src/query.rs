use leptos::callback::{Callable, Callback};
use leptos::prelude::*;

/// Receives requests to replace the current search query.
///
/// The search field only emits the new value; whoever owns the query decides
/// where it is stored (a signal, a callback into a reducer, ...).
pub trait QuerySink {
    fn request(&self, next: String);
}

impl QuerySink for Callback<String> {
    fn request(&self, next: String) {
        self.run(next);
    }
}

impl QuerySink for WriteSignal<String> {
    fn request(&self, next: String) {
        self.set(next);
    }
}

impl QuerySink for RwSignal<String> {
    fn request(&self, next: String) {
        self.set(next);
    }
}

/// Adapts a plain closure into a sink.
pub struct FnSink<F>(pub F);

impl<F> QuerySink for FnSink<F>
where
    F: Fn(String),
{
    fn request(&self, next: String) {
        (self.0)(next);
    }
}

/// Hands the full raw text of a change event to `sink`, exactly once and
/// without touching it. Empty strings are passed through like any other.
pub fn forward_change<S>(raw: String, sink: &S)
where
    S: QuerySink + ?Sized,
{
    sink.request(raw);
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use std::cell::RefCell;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<String>>,
    }

    impl QuerySink for Recorder {
        fn request(&self, next: String) {
            self.calls.borrow_mut().push(next);
        }
    }

    #[test]
    fn forwards_full_value_once() {
        let sink = Recorder::default();
        forward_change("rust for beginners".to_string(), &sink);
        assert_eq!(*sink.calls.borrow(), vec!["rust for beginners".to_string()]);
    }

    #[test]
    fn forwards_each_event_separately() {
        let sink = Recorder::default();
        for value in ["a", "ab", "abc"] {
            forward_change(value.to_string(), &sink);
        }
        assert_eq!(*sink.calls.borrow(), vec!["a", "ab", "abc"]);
    }

    #[test]
    fn clearing_forwards_empty_string() {
        let sink = Recorder::default();
        forward_change("x".to_string(), &sink);
        forward_change(String::new(), &sink);
        assert_eq!(*sink.calls.borrow(), vec!["x".to_string(), String::new()]);
    }

    #[test]
    fn value_is_not_trimmed_or_normalized() {
        let sink = Recorder::default();
        forward_change("  Data\tScience \u{e9} ".to_string(), &sink);
        assert_eq!(sink.calls.borrow()[0], "  Data\tScience \u{e9} ");
    }

    #[test]
    fn closure_sink_calls_closure() {
        let seen = RefCell::new(Vec::new());
        let sink = FnSink(|next: String| seen.borrow_mut().push(next));
        forward_change("poetry".to_string(), &sink);
        forward_change(String::new(), &sink);
        assert_eq!(*seen.borrow(), vec!["poetry".to_string(), String::new()]);
    }

    #[test]
    fn callback_sink_runs_callback() {
        let owner = Owner::new();
        owner.with(|| {
            let seen = Arc::new(Mutex::new(Vec::new()));
            let callback = Callback::new({
                let seen = Arc::clone(&seen);
                move |next: String| seen.lock().unwrap().push(next)
            });
            forward_change("algebra".to_string(), &callback);
            assert_eq!(*seen.lock().unwrap(), vec!["algebra".to_string()]);
        });
    }

    #[test]
    fn signal_sinks_store_value() {
        let owner = Owner::new();
        owner.with(|| {
            let query = RwSignal::new(String::from("old"));
            forward_change("new".to_string(), &query);
            assert_eq!(query.get_untracked(), "new");

            let (read, write) = signal(String::new());
            forward_change("physics".to_string(), &write);
            assert_eq!(read.get_untracked(), "physics");
        });
    }
}
