use std::future::Future;

use futures::future;
use log::debug;
use tokio::task::JoinHandle;

use crate::error::Error;

/// Result of one submitted call, tagged with the identifier it was made for.
#[derive(Debug)]
pub struct Outcome<T> {
    pub id: String,
    pub result: Result<T, Error>,
}

/// Submits one call per identifier without waiting on earlier calls, then
/// collects every result in submission order.
///
/// Each call is spawned the moment it is built, so all of them are in flight
/// before the first is awaited. Outcomes are joined strictly in input order
/// even when the transport finishes them in a different one. A call that
/// fails (or panics) only fails its own outcome; the caller always gets back
/// exactly as many outcomes as identifiers went in.
pub async fn submit_all<F, Fut, T>(ids: Vec<String>, op: F) -> Vec<Outcome<T>>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<T, Error>> + Send + 'static,
    T: Send + 'static,
{
    // fan-out: every call leaves before the first result is looked at
    let mut handles: Vec<JoinHandle<Result<T, Error>>> = Vec::with_capacity(ids.len());
    let mut submitted: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        handles.push(tokio::spawn(op(id.clone())));
        submitted.push(id);
    }
    debug!("{} calls in flight", handles.len());

    // fan-in; join_all yields results in the order the calls were submitted
    let mut outcomes = Vec::with_capacity(submitted.len());
    for (id, joined) in submitted.into_iter().zip(future::join_all(handles).await) {
        let result = match joined {
            Ok(res) => res,
            Err(e) => Err(Error::Task(e)),
        };
        outcomes.push(Outcome { id, result });
    }
    outcomes
}
