//! # Mock Clients
//!
//! A [`MockClient<T>`] hands out a real [`ResourceClient<T>`] whose action
//! requests are answered from a queue of scripted replies instead of a running
//! actor. This lets one actor be tested for real while the actors in its context are
//! replaced, e.g. a real order actor over a mocked cart.
//!
//! | | MockClient | Real Actor |
//! |---|---|---|
//! | **State** | Scripted replies | Real store |
//! | **Error Injection** | `return_err` | Requires specific state |
//! | **Use Case** | Isolating a dependency | Testing the actor itself |
//!
//! ```rust,ignore
//! let mut cart_mock = MockClient::<Cart>::new();
//! cart_mock
//!     .expect_action(CartId(1))
//!     .return_ok(CartActionResult::Summary(summary));
//! let cart_client = CartClient::new(cart_mock.client());
//! // ... drive the code under test ...
//! cart_mock.verify();
//! ```
//!
//! For step-by-step control use [`create_mock_client`] with the
//! [`expect_create`], [`expect_get`] and [`expect_action`] helpers.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

type Outcome<T, R> = Result<R, FrameworkError<<T as ActorEntity>::Error>>;

/// A scripted action reply, matched against the next incoming request.
struct Expectation<T: ActorEntity> {
    id: T::Id,
    response: Outcome<T, T::ActionResult>,
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn push<T: ActorEntity>(queue: &Queue<T>, expectation: Expectation<T>) {
    queue
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .push_back(expectation);
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in FIFO order. A request that is not an action on
/// the next expected id panics the background task, which surfaces in the test
/// as `ActorDropped` and a failing `verify()`.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a
    /// Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .pop_front();

                match (request, next) {
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (_, next) => {
                        let expected = match next {
                            Some(e) => format!("Action({})", e.id),
                            None => "nothing".to_string(),
                        };
                        panic!("Unexpected request; expected {expected}");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects an action on `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len();
        assert!(
            remaining == 0,
            "Not all expectations were met. {remaining} remaining"
        );
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        push(
            &self.expectations,
            Expectation {
                id: self.id,
                response: Ok(result),
            },
        );
    }

    pub fn return_err(self, error: FrameworkError<T::Error>) {
        push(
            &self.expectations,
            Expectation {
                id: self.id,
                response: Err(error),
            },
        );
    }
}

// =============================================================================
// STEP-BY-STEP HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: it pulls requests with the `expect_*` helpers,
/// asserts on their payloads and answers through the returned responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message, if it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message, if it is an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
