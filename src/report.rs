// Stage diagnostics, separated from tracing so tests can capture them.

/// Sink for the human-readable status lines each stage emits.
pub trait Reporter {
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
}

/// Prints diagnostics to stdout with status glyphs.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn success(&self, message: &str) {
        println!("✅ {message}");
    }

    fn failure(&self, message: &str) {
        println!("❌ {message}");
    }
}
