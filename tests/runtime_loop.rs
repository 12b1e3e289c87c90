use std::sync::Arc;

use mvu::app::{Message, Model, Program, TopLevel};
use mvu::config::RuntimeConfig;
use mvu::error::RuntimeError;
use mvu::update::Update;
use mvu::{Dispatcher, Runtime};
use parking_lot::Mutex;

#[derive(Debug, Clone, Default, PartialEq)]
struct Log {
    entries: Vec<String>,
}

impl Model for Log {}

#[derive(Debug)]
enum Msg {
    Push(String),
    Fetch(u32),
    Fetched(u32),
    Stop,
}

impl Message for Msg {}

#[derive(Debug, PartialEq)]
enum Fx {
    Request(u32),
    Note(String),
    Quit,
}

struct LogProgram;

impl Program for LogProgram {
    type Model = Log;
    type Message = Msg;
    type Effect = Fx;
    type Flags = Vec<Fx>;

    fn init(effects: Vec<Fx>) -> TopLevel<Log, Fx> {
        Update::save(Log::default()).and_add_effects(effects)
    }

    fn update(message: Msg, mut model: Log) -> TopLevel<Log, Fx> {
        match message {
            Msg::Push(entry) => {
                model.entries.push(entry.clone());
                Update::with_effect(model, Fx::Note(entry))
            }
            Msg::Fetch(id) => Update::with_effect(model, Fx::Request(id)),
            Msg::Fetched(id) => {
                model.entries.push(format!("fetched {id}"));
                Update::save(model)
            }
            Msg::Stop => Update::with_effect(model, Fx::Quit),
        }
    }
}

/// Records every effect and answers requests synchronously.
fn recording_executor(
    seen: Arc<Mutex<Vec<String>>>,
) -> impl FnMut(Fx, &Dispatcher<Msg>) {
    move |effect: Fx, dispatch: &Dispatcher<Msg>| {
        seen.lock().push(format!("{effect:?}"));
        match effect {
            Fx::Request(id) => dispatch.send(Msg::Fetched(id)).expect("runtime alive"),
            Fx::Quit => dispatch.quit().expect("runtime alive"),
            Fx::Note(note) => assert!(!note.is_empty()),
        }
    }
}

#[tokio::test]
async fn init_effects_run_and_feed_back() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let runtime = Runtime::<LogProgram, _>::new(
        vec![Fx::Request(1), Fx::Request(2)],
        recording_executor(seen.clone()),
        RuntimeConfig::default(),
    );

    let model = runtime.run().await.expect("runtime should finish");
    assert_eq!(model.entries, vec!["fetched 1", "fetched 2"]);
    assert_eq!(*seen.lock(), vec!["Request(1)", "Request(2)"]);
}

#[tokio::test]
async fn messages_are_processed_in_order_until_dispatchers_drop() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut runtime = Runtime::<LogProgram, _>::new(
        Vec::new(),
        recording_executor(seen.clone()),
        RuntimeConfig::default(),
    );
    let dispatch = runtime.dispatcher();
    dispatch.send(Msg::Push("a".into())).unwrap();
    dispatch.send(Msg::Fetch(7)).unwrap();
    dispatch.send(Msg::Push("b".into())).unwrap();
    drop(dispatch);

    let model = runtime.run().await.unwrap();
    // The reply to Fetch(7) is queued behind "b".
    assert_eq!(model.entries, vec!["a", "b", "fetched 7"]);
    assert_eq!(
        *seen.lock(),
        vec!["Note(\"a\")", "Request(7)", "Note(\"b\")"]
    );
}

#[tokio::test]
async fn quit_stops_before_later_messages() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut runtime = Runtime::<LogProgram, _>::new(
        Vec::new(),
        recording_executor(seen.clone()),
        RuntimeConfig::default(),
    );
    let dispatch = runtime.dispatcher();
    dispatch.send(Msg::Push("kept".into())).unwrap();
    dispatch.quit().unwrap();
    dispatch.send(Msg::Push("dropped".into())).unwrap();

    let model = runtime.run().await.unwrap();
    assert_eq!(model.entries, vec!["kept"]);
    assert!(seen.lock().iter().all(|e| !e.contains("dropped")));
    assert!(dispatch.is_closed());
}

#[tokio::test]
async fn quit_effect_lands_behind_queued_messages() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut runtime = Runtime::<LogProgram, _>::new(
        Vec::new(),
        recording_executor(seen.clone()),
        RuntimeConfig::default(),
    );
    let dispatch = runtime.dispatcher();
    dispatch.send(Msg::Push("a".into())).unwrap();
    dispatch.send(Msg::Stop).unwrap();
    dispatch.send(Msg::Push("b".into())).unwrap();

    let model = runtime.run().await.unwrap();
    assert_eq!(model.entries, vec!["a", "b"]);
    assert_eq!(seen.lock().last().map(String::as_str), Some("Note(\"b\")"));
}

#[tokio::test]
async fn message_budget_is_enforced() {
    let mut runtime = Runtime::<LogProgram, _>::new(
        Vec::new(),
        |_: Fx, _: &Dispatcher<Msg>| {},
        RuntimeConfig {
            max_messages: Some(2),
        },
    );
    let dispatch = runtime.dispatcher();
    for n in 0..3 {
        dispatch.send(Msg::Push(n.to_string())).unwrap();
    }
    drop(dispatch);

    let result = runtime.run().await;
    assert!(matches!(
        result,
        Err(RuntimeError::MessageBudgetExceeded { limit: 2 })
    ));
}

#[tokio::test]
async fn spawned_effects_keep_runtime_alive() {
    let mut runtime = Runtime::<LogProgram, _>::new(
        Vec::new(),
        |effect: Fx, dispatch: &Dispatcher<Msg>| {
            if let Fx::Request(id) = effect {
                let dispatch = dispatch.clone();
                tokio::spawn(async move {
                    tokio::task::yield_now().await;
                    let _ = dispatch.send(Msg::Fetched(id));
                });
            }
        },
        RuntimeConfig::default(),
    );
    let dispatch = runtime.dispatcher();
    dispatch.send(Msg::Fetch(3)).unwrap();
    drop(dispatch);

    let model = runtime.run().await.unwrap();
    assert_eq!(model.entries, vec!["fetched 3"]);
}

#[test]
fn model_is_initialised_eagerly() {
    let runtime = Runtime::<LogProgram, _>::new(
        vec![Fx::Note("boot".into())],
        |_: Fx, _: &Dispatcher<Msg>| {},
        RuntimeConfig::default(),
    );
    assert_eq!(runtime.model(), &Log::default());
}
