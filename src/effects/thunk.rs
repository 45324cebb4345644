//! Thunks: action sequences that need to read state or wait on the
//! count service.

use super::api::{CountApi, CountResponse, FetchError};
use crate::counter::{count_is_odd, CounterAction};
use crate::store::{Dispatch, FetchDispatch};
use stillwater::effect::Effect;
use stillwater::prelude::*;
use uuid::Uuid;

/// Dispatch `IncrementByAmount(amount)` if the current count is odd.
///
/// State is read when the thunk runs, not captured earlier, so it composes
/// with fetches that settle in between. Returns whether it dispatched.
pub fn increment_if_odd<D: Dispatch + ?Sized>(store: &D, amount: i64) -> bool {
    let state = store.get_state();
    if !count_is_odd().check(&state) {
        return false;
    }

    store.dispatch(CounterAction::IncrementByAmount(amount).into());
    true
}

/// Effect that asks the environment's count service for `amount`.
///
/// The environment is the service itself, so tests can run the same
/// effect against a mock.
pub fn fetch_count<A: CountApi>(
    amount: i64,
) -> impl Effect<Output = CountResponse, Error = FetchError, Env = A> {
    from_async(move |api: &A| {
        let api = api.clone();
        async move { api.fetch_count(amount).await }
    })
}

/// Fetch `amount` from the count service and add it to the counter.
///
/// Dispatches `counter/fetchCount/pending` before suspending on the
/// service, then `fulfilled` or `rejected` when it settles. All three
/// actions share one request id. Overlapping calls are neither fenced nor
/// deduplicated.
pub async fn increment_async<S>(store: &S, amount: i64) -> Result<i64, FetchError>
where
    S: FetchDispatch + ?Sized,
{
    let request_id = Uuid::new_v4();
    store.dispatch(CounterAction::fetch_pending(request_id, amount).into());

    let response = fetch_count::<S::Api>(amount).run(store.api()).await;
    match response {
        Ok(CountResponse { data }) => {
            store.dispatch(CounterAction::fetch_fulfilled(request_id, data).into());
            Ok(data)
        }
        Err(error) => {
            tracing::warn!(%request_id, amount, %error, "Count fetch rejected");
            let message = error.to_string();
            store.dispatch(CounterAction::fetch_rejected(request_id, message).into());
            Err(error)
        }
    }
}
