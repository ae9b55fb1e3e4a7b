//! Segment trait definition.

use crate::segments::types::Fragment;

/// Interface the host uses on every render tick.
///
/// Rendering is split in two steps: [`compute`](Segment::compute) produces the
/// raw value (`None` when there is nothing to show) and
/// [`render`](Segment::render) turns it into styled fragments. Neither step
/// reports errors; failures degrade to "no fragment".
pub trait Segment: Send + Sync {
    /// The canonical name of this segment (e.g., "mem_cpu_load").
    fn name(&self) -> &'static str;

    /// Human-readable description of what the segment shows and its options.
    fn description(&self) -> &'static str;

    /// Current value of the segment.
    fn compute(&self) -> Option<String>;

    /// Turn a value into fragments; `None` hides the segment.
    fn render(&self, value: Option<&str>) -> Option<Vec<Fragment>>;

    /// Compute and render in one step.
    fn fragments(&self) -> Option<Vec<Fragment>> {
        let value = self.compute();
        self.render(value.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticSegment(Option<&'static str>);

    impl Segment for StaticSegment {
        fn name(&self) -> &'static str {
            "static"
        }

        fn description(&self) -> &'static str {
            "Always shows the same text"
        }

        fn compute(&self) -> Option<String> {
            self.0.map(str::to_string)
        }

        fn render(&self, value: Option<&str>) -> Option<Vec<Fragment>> {
            value.map(|v| vec![Fragment::new(v, self.name())])
        }
    }

    #[test]
    fn test_fragments_renders_computed_value() {
        let fragments = StaticSegment(Some("hi")).fragments().unwrap();
        assert_eq!(fragments, vec![Fragment::new("hi", "static")]);
    }

    #[test]
    fn test_fragments_hidden_when_absent() {
        assert!(StaticSegment(None).fragments().is_none());
    }
}
