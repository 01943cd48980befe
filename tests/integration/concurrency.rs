//! A built table is shared read-only between concurrent dispatchers.

use crate::common::{AccountStore, NewAccount, account_table, init_logging};
use jebatch::{BatchRequest, BatchRequestElement, Verb};
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_batches_share_one_table() {
    init_logging();
    let store = AccountStore::default();
    let table = Arc::new(account_table(&store).unwrap());

    let mut handles = Vec::new();
    for task in 0..8 {
        let table = Arc::clone(&table);
        handles.push(tokio::spawn(async move {
            let requests = (0..5)
                .map(|i| {
                    BatchRequestElement::post(NewAccount {
                        owner: format!("owner-{task}-{i}"),
                    })
                })
                .collect::<BatchRequest<_, _>>();
            table.process("api/accounts", requests)
        }));
    }

    for handle in handles {
        let response = handle.await.unwrap();
        assert_eq!(response.statuses(), vec![201; 5]);
    }

    assert_eq!(store.len(), 40);
    assert_eq!(table.verbs(), Verb::ALL.to_vec());
}

#[tokio::test]
async fn test_table_moves_into_blocking_task() {
    let store = AccountStore::with_accounts(&["ann"]);
    let table = account_table(&store).unwrap();

    let response = tokio::task::spawn_blocking(move || {
        table.process(
            "api/accounts",
            BatchRequest::new(vec![BatchRequestElement::get(1), BatchRequestElement::delete(1)]),
        )
    })
    .await
    .unwrap();

    assert_eq!(response.statuses(), vec![200, 200]);
    assert_eq!(store.len(), 0);
}
