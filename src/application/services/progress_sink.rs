/// Receives the human-readable progress lines of a workflow, one per call.
pub trait ProgressSink: Send + Sync {
    fn writeln(&self, line: &str);
}

impl<F> ProgressSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn writeln(&self, line: &str) {
        self(line)
    }
}

/// Discards every line
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn writeln(&self, _line: &str) {}
}
