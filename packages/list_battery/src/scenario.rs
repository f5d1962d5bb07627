//! The scenario runner: the fixed battery of measured operations.

use std::collections::LinkedList;
use std::hint::black_box;

use crate::config::BatteryConfig;
use crate::element::Element;
use crate::sink::{ScenarioInfo, Sink};

/// Source-language label reported in scenario metadata.
const LANGUAGE: &str = "Rust";

/// Container type name reported in scenario metadata.
const CONTAINER: &str = "LinkedList";

/// Runs the full battery: the integer scenario followed by the string
/// scenario.
///
/// # Examples
///
/// ```no_run
/// use list_battery::{BatteryConfig, ConsoleSink, run_battery};
///
/// let config = BatteryConfig::new(100_000, 10);
/// let mut sink = ConsoleSink::new();
/// run_battery(&config, &mut sink);
/// ```
pub fn run_battery(config: &BatteryConfig, sink: &mut dyn Sink) {
    run_scenario::<i32>(config, sink);
    run_scenario::<String>(config, sink);
}

/// Runs one scenario: the operation sequence repeated
/// [`repeat_count`](BatteryConfig::repeat_count) times over freshly
/// constructed lists of `E`.
///
/// The allocation counters are reset before the scenario and read once at
/// the end, so the totals handed to [`Sink::end_scenario`] accumulate across
/// all repeats, including the allocations performed by container
/// construction and copying.
pub fn run_scenario<E: Element>(config: &BatteryConfig, sink: &mut dyn Sink) {
    heap_tally::reset();

    sink.begin_scenario(&ScenarioInfo::new(
        LANGUAGE,
        "",
        "",
        CONTAINER,
        E::TYPE_NAME,
        true,
    ));

    for _ in 0..config.repeat_count() {
        run_repeat::<E>(config, sink);
    }

    sink.end_scenario(heap_tally::snapshot());
}

/// One repeat of the operation sequence over a fresh list.
///
/// The list and its copy drop at the end of this scope, so their frees land
/// inside the scenario's measurement window.
fn run_repeat<E: Element>(config: &BatteryConfig, sink: &mut dyn Sink) {
    let mut list: LinkedList<E> = LinkedList::new();

    sink.begin_test("fill");
    fill(&mut list, config.items_count());
    sink.end_test();

    sink.begin_test("copy");
    let copy = list.clone();
    sink.end_test();
    // Keep the copy from being optimized away before it drops.
    black_box(&copy);

    sink.begin_test("cursor loop");
    let count = count_with_cursor(&list);
    sink.end_test();
    validate_count(sink, "cursor loop", count, config.items_count());

    sink.begin_test("for-of loop");
    let count = count_with_for(&list);
    sink.end_test();
    validate_count(sink, "for-of loop", count, config.items_count());

    sink.begin_test("count_if");
    let count = count_matching(&list);
    sink.end_test();
    validate_count(sink, "count_if", count, config.items_count());
}

/// Inserts `items_count` copies of the element's test value at the tail.
fn fill<E: Element>(list: &mut LinkedList<E>, items_count: usize) {
    for _ in 0..items_count {
        list.push_back(E::test_value());
    }
}

/// Front-to-back traversal with an explicit cursor, counting matches.
#[expect(
    clippy::while_let_on_iterator,
    reason = "explicit cursor advancement is the iteration style under measurement"
)]
fn count_with_cursor<E: Element>(list: &LinkedList<E>) -> usize {
    let mut count = 0_usize;
    let mut cursor = list.iter();
    while let Some(element) = cursor.next() {
        if element.matches() {
            // Never going to overflow usize, so no point doing slower checked
            // arithmetic here.
            count = count.wrapping_add(1);
        }
    }
    count
}

/// By-element traversal, counting matches.
fn count_with_for<E: Element>(list: &LinkedList<E>) -> usize {
    let mut count = 0_usize;
    for element in list {
        if element.matches() {
            count = count.wrapping_add(1);
        }
    }
    count
}

/// Bulk predicate count over the full list range.
fn count_matching<E: Element>(list: &LinkedList<E>) -> usize {
    list.iter().filter(|element| element.matches()).count()
}

/// Flags a counting mismatch through the sink. Non-fatal: the battery moves
/// on to the next operation.
fn validate_count(sink: &mut dyn Sink, test_name: &str, observed: usize, expected: usize) {
    if observed != expected {
        sink.counting_error(&format!(
            "{LANGUAGE} error while counting in {test_name}: expected {expected}, observed {observed}"
        ));
    }
}
