//! The aggregate logs its terminal transition, and nothing after it.

use std::io;
use std::sync::{Arc, Mutex};

use fan_in::callback::{when_all, Completion};
use fan_in::prelude::*;
use futures_lite::future::block_on;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn with_captured_logs(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("fan_in=trace"))
        .with_writer(captured.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.contents()
}

#[test]
fn failure_is_logged_once() {
    let logs = with_captured_logs(|| {
        let cell = std::cell::RefCell::new(vec![]);
        let slots = &cell;
        let tasks = (0..3).map(move |_| {
            move |done: Completion<u8, &'static str>| slots.borrow_mut().push(done)
        });
        when_all(tasks, |_| {});

        let mut handles = cell.take().into_iter();
        let first = handles.next().unwrap();
        handles.next().unwrap().err("boom");
        handles.next().unwrap().err("again");
        first.ok(1);
    });

    assert_eq!(logs.matches("fan-in failed").count(), 1, "{logs}");
    assert!(logs.contains("index=1"), "{logs}");
    assert!(!logs.contains("fan-in succeeded"), "{logs}");
}

#[test]
fn success_is_logged() {
    let logs = with_captured_logs(|| {
        let res = block_on(vec![std::future::ready(Ok::<_, ()>(1))].all());
        assert_eq!(res, Ok(vec![1]));
    });

    assert_eq!(logs.matches("fan-in succeeded").count(), 1, "{logs}");
    assert!(logs.contains("tasks=1"), "{logs}");
}
