// src/extract/record.rs
// =============================================================================
// The observability handle handed to the fetcher.
//
// Instead of reaching for a global logger, the fetcher is given something
// that implements `Recorder` when it is built. In the real program that is
// a `TracingRecorder`, which forwards events to the tracing subscriber set
// up in main.rs. Tests use `MemoryRecorder` and look at what was recorded.
// =============================================================================

/// Receives one human-readable event per failure
///
/// `Send + Sync` so a single recorder can be shared by every fetch task.
pub trait Recorder: Send + Sync {
    fn record(&self, event: &str);
}

/// Sends every event to `tracing` at ERROR level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRecorder;

impl Recorder for TracingRecorder {
    fn record(&self, event: &str) {
        tracing::error!("{}", event);
    }
}

#[cfg(test)]
pub use memory::MemoryRecorder;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_recorder_keeps_events_in_order() {
        let recorder = MemoryRecorder::default();
        recorder.record("first");
        recorder.record("second");
        assert_eq!(recorder.events(), vec!["first", "second"]);
    }

    #[test]
    fn test_recorders_work_as_trait_objects() {
        let recorders: Vec<Box<dyn Recorder>> =
            vec![Box::new(TracingRecorder), Box::new(MemoryRecorder::default())];
        for recorder in &recorders {
            recorder.record("event");
        }
    }
}
