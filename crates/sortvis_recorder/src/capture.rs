//! Operation capture

use sortvis_algorithms::SortingAlgorithm;
use sortvis_core::{OperationFeed, OperationLog, SortableItem};

/// Run `algorithm` on a copy of `items` and record every operation it emits.
///
/// `items` itself is never touched; the algorithm only mutates the copy.
pub fn capture(algorithm: &dyn SortingAlgorithm, items: &[SortableItem]) -> OperationLog {
    let mut working = items.to_vec();
    let mut operations = Vec::new();

    {
        let mut feed = OperationFeed::new();
        let listener = feed.attach(|operation| operations.push(operation.clone()));
        algorithm.sort(&mut working, &mut feed);
        feed.detach(listener);
    }

    let log = OperationLog::new(items.to_vec(), operations);
    let stats = log.stats();
    tracing::debug!(
        algorithm = algorithm.name(),
        items = items.len(),
        comparisons = stats.comparisons,
        changes = stats.changes,
        "captured operation log"
    );

    log
}

/// Serialize a captured log as pretty-printed JSON
pub fn capture_json(log: &OperationLog) -> serde_json::Result<String> {
    serde_json::to_string_pretty(log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortvis_algorithms::{InsertionSort, SelectionSort};
    use sortvis_core::Operation;

    fn items(values: &[u32]) -> Vec<SortableItem> {
        values.iter().copied().map(SortableItem::new).collect()
    }

    #[test]
    fn test_input_untouched() {
        let input = items(&[3, 2, 1]);
        let before = input.clone();
        let log = capture(&SelectionSort, &input);

        assert_eq!(input, before);
        assert_eq!(log.initial(), before.as_slice());
        assert_eq!(
            log.final_state().iter().map(|i| i.value).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_empty_selection_log() {
        let log = capture(&SelectionSort, &[]);
        assert!(log.is_empty());
        assert!(log.initial().is_empty());
    }

    #[test]
    fn test_insertion_trace() {
        let input = items(&[3, 1, 2]);
        let log = capture(&InsertionSort, &input);
        let stats = log.stats();

        assert_eq!(stats.changes, 2);
        assert_eq!(stats.comparisons, 2);
        assert!(matches!(log.get(0), Some(Operation::Comparison { .. })));
        assert_eq!(log.final_state(), &[input[1], input[2], input[0]]);
    }

    #[test]
    fn test_json_export() {
        let log = capture(&InsertionSort, &items(&[2, 1]));
        let json = capture_json(&log).unwrap();
        let parsed: OperationLog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, log);
    }
}
