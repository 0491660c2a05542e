//! Render sink abstraction.
//!
//! The reply assembler pushes the whole text-so-far to a sink after every
//! delta. The sink decides how to display it; it never sees the delta alone.

/// Receiver of the accumulated assistant reply.
pub trait RenderSink {
    /// Display `full_text`, replacing whatever was shown for this reply.
    fn render(&mut self, full_text: &str);
}

/// Collects every rendered snapshot. Handy in tests and benches.
impl RenderSink for Vec<String> {
    fn render(&mut self, full_text: &str) {
        self.push(full_text.to_string());
    }
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn render(&mut self, full_text: &str) {
        (**self).render(full_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_records_snapshots() {
        let mut sink: Vec<String> = Vec::new();
        sink.render("He");
        sink.render("Hello");
        assert_eq!(sink, vec!["He".to_string(), "Hello".to_string()]);
    }

    #[test]
    fn test_mut_ref_sink_forwards() {
        fn render_into<S: RenderSink>(mut sink: S) {
            sink.render("x");
        }

        let mut inner: Vec<String> = Vec::new();
        render_into(&mut inner);
        assert_eq!(inner, vec!["x".to_string()]);
    }
}
