//! The reporting boundary the battery signals into.

use std::time::Instant;

use heap_tally::Snapshot;

/// Metadata announcing a new scenario to a [`Sink`].
///
/// Carries the same fields the host harness's scenario-start entry point
/// takes: a source-language label, free-form element and node labels, the
/// container type name, the element type name and a "favorite" flag marking
/// the container selection the harness author cares most about.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScenarioInfo<'a> {
    language: &'a str,
    elements_label: &'a str,
    nodes_label: &'a str,
    container: &'a str,
    element_type: &'a str,
    favorite: bool,
}

impl<'a> ScenarioInfo<'a> {
    /// Creates scenario metadata from the raw label set.
    #[must_use]
    pub fn new(
        language: &'a str,
        elements_label: &'a str,
        nodes_label: &'a str,
        container: &'a str,
        element_type: &'a str,
        favorite: bool,
    ) -> Self {
        Self {
            language,
            elements_label,
            nodes_label,
            container,
            element_type,
            favorite,
        }
    }

    /// The source-language label, e.g. `"Rust"`.
    #[must_use]
    pub fn language(&self) -> &'a str {
        self.language
    }

    /// Free-form label describing the element storage, possibly empty.
    #[must_use]
    pub fn elements_label(&self) -> &'a str {
        self.elements_label
    }

    /// Free-form label describing the node storage, possibly empty.
    #[must_use]
    pub fn nodes_label(&self) -> &'a str {
        self.nodes_label
    }

    /// The container type name, e.g. `"LinkedList"`.
    #[must_use]
    pub fn container(&self) -> &'a str {
        self.container
    }

    /// The element type name, e.g. `"Integer"`.
    #[must_use]
    pub fn element_type(&self) -> &'a str {
        self.element_type
    }

    /// Whether this scenario is the harness author's selected variant.
    #[must_use]
    pub fn favorite(&self) -> bool {
        self.favorite
    }
}

/// Receives scenario and test boundary signals from the battery.
///
/// The battery signals where each measured region begins and ends; what to do
/// with those boundaries (timing, formatting, aggregation) is entirely up to
/// the sink. Boundary calls are strictly nested and sequential: one scenario
/// at a time, one named test at a time within it.
pub trait Sink {
    /// Announces a new scenario.
    fn begin_scenario(&mut self, scenario: &ScenarioInfo<'_>);

    /// Closes the current scenario with the heap traffic accumulated across
    /// all of its repeats.
    fn end_scenario(&mut self, stats: Snapshot);

    /// Marks the start of one named timed sub-operation.
    fn begin_test(&mut self, name: &str);

    /// Marks the end of the sub-operation started last.
    fn end_test(&mut self);

    /// Reports a non-fatal counting mismatch observed during a traversal.
    ///
    /// This is a best-effort diagnostic for the benchmark author; the battery
    /// continues with the next operation after reporting.
    fn counting_error(&mut self, message: &str);
}

/// A [`Sink`] that prints boundaries with wall-clock timing to stdout.
///
/// Counting errors go to stderr. This is the bundled stand-in for the
/// external test-running executable that normally owns timing and reporting.
#[derive(Debug)]
pub struct ConsoleSink {
    active_test: Option<(String, Instant)>,
}

impl ConsoleSink {
    /// Creates a console sink with no test in progress.
    #[expect(
        clippy::new_without_default,
        reason = "construction is deliberate, a default sink has no meaning here"
    )]
    #[must_use]
    pub fn new() -> Self {
        Self { active_test: None }
    }
}

#[cfg_attr(test, mutants::skip)] // Too difficult to test console output reliably - manually tested.
impl Sink for ConsoleSink {
    fn begin_scenario(&mut self, scenario: &ScenarioInfo<'_>) {
        let favorite = if scenario.favorite() { " *" } else { "" };
        println!(
            "=== {} {}<{}>{favorite} ===",
            scenario.language(),
            scenario.container(),
            scenario.element_type()
        );
    }

    fn end_scenario(&mut self, stats: Snapshot) {
        println!("  total: {stats}");
    }

    fn begin_test(&mut self, name: &str) {
        self.active_test = Some((name.to_owned(), Instant::now()));
    }

    fn end_test(&mut self) {
        if let Some((name, started)) = self.active_test.take() {
            println!("  {name}: {:?}", started.elapsed());
        }
    }

    fn counting_error(&mut self, message: &str) {
        eprintln!("{message}");
    }
}
