use hostsink::{
    ContextRegistry, HostLevel, HostLogSink, HostObject, Level, LogEvent, LogEventSink,
    MessageTemplateFormatter, RecordingLogger, CONTEXT_ID_KEY,
};
use std::sync::Arc;
use std::thread;

#[derive(Debug)]
struct SceneEntity {
    #[allow(dead_code)]
    name: &'static str,
}
impl HostObject for SceneEntity {}

fn sink_with(logger: Arc<RecordingLogger>, registry: Arc<ContextRegistry>) -> HostLogSink {
    HostLogSink::new(Box::new(MessageTemplateFormatter::new()))
        .with_logger(logger)
        .with_registry(registry)
}

#[test]
fn warning_without_context() {
    let logger = Arc::new(RecordingLogger::new());
    let sink = sink_with(logger.clone(), Arc::new(ContextRegistry::new()));

    sink.emit(&LogEvent::new(Level::Warning, "disk low"))
        .expect("emit succeeds");

    let calls = logger.take_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].level, HostLevel::Warning);
    assert_eq!(calls[0].message, "disk low");
    assert!(calls[0].context.is_none());
}

#[test]
fn error_with_registered_entity_then_consumed() {
    let logger = Arc::new(RecordingLogger::new());
    let registry = Arc::new(ContextRegistry::new());
    let sink = sink_with(logger.clone(), registry.clone());

    let entity: Arc<dyn HostObject> = Arc::new(SceneEntity { name: "entity_x" });
    registry.register(42, entity.clone());

    let event = LogEvent::new(Level::Error, "entity fault").with_property(CONTEXT_ID_KEY, 42);

    sink.emit(&event).expect("emit succeeds");
    let calls = logger.take_calls();
    assert_eq!(calls[0].level, HostLevel::Error);
    assert_eq!(calls[0].message, "entity fault");
    let attached = calls[0].context.clone().expect("context attached");
    assert!(Arc::ptr_eq(&attached, &entity));

    // The same identifier again: the association was consumed on read.
    sink.emit(&event).expect("emit succeeds");
    let calls = logger.take_calls();
    assert_eq!(calls[0].message, "entity fault");
    assert!(calls[0].context.is_none());
}

#[test]
fn rendered_properties_reach_the_host() {
    let logger = Arc::new(RecordingLogger::new());
    let sink = sink_with(logger.clone(), Arc::new(ContextRegistry::new()));

    let event = LogEvent::new(Level::Information, "job {id} finished in {secs}s")
        .with_property("id", 23)
        .with_property("secs", 3.4);
    sink.emit(&event).expect("emit succeeds");

    assert_eq!(logger.take_calls()[0].message, "job 23 finished in 3.4s");
}

#[test]
fn concurrent_producers_each_get_exactly_one_host_call() {
    let logger = Arc::new(RecordingLogger::new());
    let registry = Arc::new(ContextRegistry::new());
    let sink = Arc::new(sink_with(logger.clone(), registry.clone()));

    registry.register(7, Arc::new(SceneEntity { name: "shared" }));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let sink = sink.clone();
            thread::spawn(move || {
                let event = LogEvent::new(Level::Information, "worker message")
                    .with_property(CONTEXT_ID_KEY, 7)
                    .with_property("worker", i as i64);
                sink.emit(&event).expect("emit succeeds");
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("Thread should complete successfully");
    }

    let calls = logger.take_calls();
    assert_eq!(calls.len(), 8, "one host call per delivered event");
    let with_context = calls.iter().filter(|call| call.context.is_some()).count();
    assert_eq!(with_context, 1, "a single registration attaches to exactly one event");
    assert!(registry.is_empty());
}
