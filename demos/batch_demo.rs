//! # Batch Demo
//!
//! Registers handlers for an in-memory user collection, maps failure kinds
//! to statuses and runs a mixed batch against the table. Logging goes through
//! the `log` facade; this demo installs `env_logger` as the backend.

use jebatch::{
    BatchConfig, BatchRequest, BatchRequestElement, ErrorKind, HandlerError, HandlerResult,
    KindHierarchy, MethodTable,
};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

const RUNTIME: ErrorKind = ErrorKind::new("Runtime");
const NOT_FOUND: ErrorKind = ErrorKind::new("NotFound");
const VALIDATION: ErrorKind = ErrorKind::new("Validation");

type Users = Arc<Mutex<BTreeMap<u64, String>>>;

fn lock_failure() -> HandlerError {
    HandlerError::new(RUNTIME, "user store lock poisoned")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .format_timestamp_secs()
        .init();

    let users: Users = Arc::new(Mutex::new(BTreeMap::from([(1, "ann".to_string())])));

    let hierarchy = KindHierarchy::new()
        .with_parent(NOT_FOUND, RUNTIME)?
        .with_parent(VALIDATION, RUNTIME)?;

    let store = Arc::clone(&users);
    let get = move |id: u64| -> HandlerResult<String> {
        let users = store.lock().map_err(|_| lock_failure())?;
        users
            .get(&id)
            .cloned()
            .ok_or_else(|| HandlerError::new(NOT_FOUND, format!("no user {id}")))
    };

    let store = Arc::clone(&users);
    let get_all = move || -> HandlerResult<Vec<String>> {
        let users = store.lock().map_err(|_| lock_failure())?;
        Ok(users.values().cloned().collect())
    };

    let store = Arc::clone(&users);
    let post = move |name: String| -> HandlerResult<u64> {
        if name.trim().is_empty() {
            return Err(HandlerError::new(VALIDATION, "name must not be blank"));
        }
        let mut users = store.lock().map_err(|_| lock_failure())?;
        let id = users.keys().next_back().map_or(1, |last| last + 1);
        users.insert(id, name);
        Ok(id)
    };

    let store = Arc::clone(&users);
    let put = move |id: u64, name: String| -> HandlerResult<()> {
        let mut users = store.lock().map_err(|_| lock_failure())?;
        match users.get_mut(&id) {
            Some(existing) => {
                *existing = name;
                Ok(())
            }
            None => Err(HandlerError::new(NOT_FOUND, format!("no user {id}"))),
        }
    };

    let store = Arc::clone(&users);
    let delete = move |id: u64| -> HandlerResult<()> {
        let mut users = store.lock().map_err(|_| lock_failure())?;
        users
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| HandlerError::new(NOT_FOUND, format!("no user {id}")))
    };

    let table = MethodTable::<String, String, u64>::builder()
        .with_config(BatchConfig::default().with_hierarchy(hierarchy))?
        .for_get(get)
        .with_error(NOT_FOUND, 404)?
        .and()
        .for_get_all(get_all)
        .and()
        .for_post(post)
        .with_error(VALIDATION, 400)?
        .and()
        .for_put(put)
        .with_error(NOT_FOUND, 404)?
        .with_error(VALIDATION, 400)?
        .and()
        .for_delete(delete)
        .with_error(NOT_FOUND, 404)?
        .build();

    log::info!("Registered verbs: {:?}", table.verbs());

    let request = BatchRequest::new(vec![
        BatchRequestElement::post("bob".to_string()),
        BatchRequestElement::post("   ".to_string()),
        BatchRequestElement::put(2, "robert".to_string()),
        BatchRequestElement::get(2),
        BatchRequestElement::delete(9),
        BatchRequestElement::patch(1, "annie".to_string()),
        BatchRequestElement::get_all(),
    ]);

    let response = table.process("api/users", request);

    for element in &response.responses {
        println!(
            "{} {} {:?} {}",
            element.status, element.resource_path, element.body, element.message
        );
    }

    Ok(())
}
