//! Property-based tests for registration invariants.
//!
//! Uses proptest to generate mapping lists and verb subsets and checks that
//! the built table reflects them exactly.

use jebatch::{
    BatchRequest, BatchRequestElement, BuildError, ErrorKind, HandlerError, KindHierarchy,
    MethodBuilder, MethodTable, Verb,
};
use proptest::prelude::*;

type Table = MethodTable<String, String, u32>;

fn kind_strategy() -> impl Strategy<Value = ErrorKind> {
    prop::sample::select(vec!["NotFound", "Validation", "Conflict", "Runtime", "Timeout"])
        .prop_map(ErrorKind::new)
}

fn mapping_strategy() -> impl Strategy<Value = Vec<(ErrorKind, u16)>> {
    prop::collection::vec((kind_strategy(), 100u16..=599), 0..12)
}

fn register(builder: MethodBuilder<String, String, u32>, verb: Verb) -> MethodBuilder<String, String, u32> {
    match verb {
        Verb::Get => builder.for_get(|id| Ok(id.to_string())).and(),
        Verb::GetAll => builder.for_get_all(|| Ok(Vec::new())).and(),
        Verb::Post => builder.for_post(|_| Ok(1)).and(),
        Verb::Put => builder.for_put(|_, _| Ok(())).and(),
        Verb::Patch => builder.for_patch(|_, _| Ok(())).and(),
        Verb::Delete => builder.for_delete(|_| Ok(())).and(),
    }
}

proptest! {
    #[test]
    fn prop_mappings_keep_registration_order(mappings in mapping_strategy()) {
        let mut scope = Table::builder().for_delete(|_| Ok(()));
        for (kind, status) in &mappings {
            scope = scope.with_error(kind.clone(), *status).unwrap();
        }
        let table = scope.build();

        let registered: Vec<(ErrorKind, u16)> = table
            .error_mappings(Verb::Delete)
            .unwrap()
            .iter()
            .map(|m| (m.kind().clone(), m.status()))
            .collect();
        prop_assert_eq!(registered, mappings);
    }

    #[test]
    fn prop_first_matching_mapping_wins(
        mappings in mapping_strategy(),
        failure in kind_strategy(),
    ) {
        let mut scope = Table::builder().for_get(|_| Ok(String::new()));
        for (kind, status) in &mappings {
            scope = scope.with_error(kind.clone(), *status).unwrap();
        }
        let table = scope.build();

        let expected = mappings
            .iter()
            .find(|(kind, _)| *kind == failure)
            .map(|(_, status)| *status);
        let resolved = table
            .get()
            .unwrap()
            .status_for(&failure, &KindHierarchy::new());
        prop_assert_eq!(resolved, expected);
    }

    #[test]
    fn prop_unmapped_failures_fall_back_to_500(
        mappings in mapping_strategy(),
        failure in kind_strategy(),
    ) {
        let thrown = failure.clone();
        let mut scope = Table::builder()
            .for_get(move |_| Err(HandlerError::new(thrown.clone(), "failed")));
        for (kind, status) in &mappings {
            scope = scope.with_error(kind.clone(), *status).unwrap();
        }
        let table = scope.build();

        let response = table.process("api/things", BatchRequest::new(vec![BatchRequestElement::get(1)]));

        let expected = mappings
            .iter()
            .find(|(kind, _)| *kind == failure)
            .map_or(500, |(_, status)| *status);
        prop_assert_eq!(response.statuses(), vec![expected]);
    }

    #[test]
    fn prop_table_contains_exactly_registered_verbs(
        verbs in prop::sample::subsequence(Verb::ALL.to_vec(), 0..=Verb::ALL.len()),
    ) {
        let table = verbs
            .iter()
            .fold(Table::builder(), |builder, verb| register(builder, *verb))
            .build();

        prop_assert_eq!(table.verbs(), verbs.clone());
        for verb in Verb::ALL {
            prop_assert_eq!(table.contains(verb), verbs.contains(&verb));
        }
    }

    #[test]
    fn prop_out_of_range_statuses_are_rejected(
        status in prop_oneof![0u16..100, 600u16..=u16::MAX],
    ) {
        let result = Table::builder()
            .for_get_all(|| Ok(Vec::new()))
            .with_error(ErrorKind::new("Runtime"), status);

        prop_assert_eq!(result.unwrap_err(), BuildError::InvalidStatus { status });
    }
}
