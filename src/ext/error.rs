use std::error::Error;

/// Walks `source()` chains.
pub trait ErrorExt {
    /// This error's message followed by every source, outermost first.
    fn chain_messages(&self) -> Vec<String>;
    /// All messages in the chain joined by `": "`.
    fn full_message(&self) -> String;
    /// The innermost source, or `None` when there is no source.
    fn root_cause(&self) -> Option<&(dyn Error + 'static)>;
    fn innermost_message(&self) -> String;
    fn log_error(&self, context: &str);
}

impl<E: Error + ?Sized> ErrorExt for E {
    fn chain_messages(&self) -> Vec<String> {
        let mut messages = vec![self.to_string()];
        let mut source = self.source();
        while let Some(err) = source {
            messages.push(err.to_string());
            source = err.source();
        }
        messages
    }

    fn full_message(&self) -> String {
        self.chain_messages().join(": ")
    }

    fn root_cause(&self) -> Option<&(dyn Error + 'static)> {
        let mut current = self.source()?;
        while let Some(next) = current.source() {
            current = next;
        }
        Some(current)
    }

    fn innermost_message(&self) -> String {
        match self.root_cause() {
            Some(root) => root.to_string(),
            None => self.to_string(),
        }
    }

    fn log_error(&self, context: &str) {
        tracing::error!("❌ {}: {}", context, self.full_message());
    }
}
