//! # Generic Actor Server
//!
//! [`ResourceActor`] owns the store for one entity type and applies requests
//! strictly in arrival order.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This is the "server" half: it owns the `store` and the receiving end of the
/// channel. Each actor runs in its own Tokio task and handles one message at a
/// time, so the store needs no `Mutex`.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2.  **Wire**: pass dependencies (other clients) to `actor.run(context)`.
/// 3.  **Run**: spawn the future returned by `run`.
///
/// # Operations
///
/// * **Create**: draws an id from the generator, builds the entity with
///   `T::from_create_params`, runs `on_create`, stores it and answers with a
///   clone. If either step fails nothing is stored.
/// * **Get**: clone of the entity, or `None`.
/// * **List**: clones of every stored entity, in id-insertion order.
/// * **Delete**: runs `on_delete`, then removes the entity. An `on_delete`
///   error leaves the entity stored.
/// * **Action**: runs `handle_action` in place and answers with its result.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the channel capacity; once full, client calls wait for
    /// space. `next_id_fn` is called once per successful or attempted create.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// `context` is passed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Cart" rather than "freshcart::model::cart::Cart"
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id_fn)();
                    let created = match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => match item.on_create(&context).await {
                            Ok(()) => Ok(item),
                            Err(e) => {
                                warn!(entity_type, %id, error = %e, "on_create failed");
                                Err(e)
                            }
                        },
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Create failed");
                            Err(e)
                        }
                    };
                    let reply = created.map(|item| {
                        self.order.push(id.clone());
                        self.store.insert(id.clone(), item.clone());
                        info!(entity_type, %id, size = self.store.len(), "Created");
                        item
                    });
                    let _ = respond_to.send(reply.map_err(FrameworkError::Entity));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self
                        .order
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::Entity(e)));
                        continue;
                    }
                    self.store.remove(&id);
                    self.order.retain(|stored| stored != &id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = item.handle_action(action, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result.map_err(FrameworkError::Entity));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: u32,
        value: i64,
    }

    #[derive(Debug)]
    struct CounterCreate {
        start: i64,
    }

    #[derive(Debug)]
    enum CounterAction {
        Add(i64),
    }

    #[derive(Debug, thiserror::Error, PartialEq)]
    enum CounterError {
        #[error("negative start")]
        NegativeStart,
        #[error("would go negative")]
        Underflow,
        #[error("locked")]
        Locked,
    }

    #[async_trait]
    impl ActorEntity for Counter {
        type Id = u32;
        type Create = CounterCreate;
        type Action = CounterAction;
        type ActionResult = i64;
        type Context = ();
        type Error = CounterError;

        fn from_create_params(id: u32, params: CounterCreate) -> Result<Self, CounterError> {
            if params.start < 0 {
                return Err(CounterError::NegativeStart);
            }
            Ok(Self {
                id,
                value: params.start,
            })
        }

        async fn on_delete(&self, _ctx: &()) -> Result<(), CounterError> {
            if self.value >= 100 {
                return Err(CounterError::Locked);
            }
            Ok(())
        }

        async fn handle_action(
            &mut self,
            action: CounterAction,
            _ctx: &(),
        ) -> Result<i64, CounterError> {
            match action {
                CounterAction::Add(delta) => {
                    let next = self.value + delta;
                    if next < 0 {
                        return Err(CounterError::Underflow);
                    }
                    self.value = next;
                    Ok(next)
                }
            }
        }
    }

    fn spawn_counter_actor() -> ResourceClient<Counter> {
        let seq = Arc::new(AtomicU32::new(1));
        let (actor, client) =
            ResourceActor::<Counter>::new(8, move || seq.fetch_add(1, Ordering::SeqCst));
        tokio::spawn(actor.run(()));
        client
    }

    #[tokio::test]
    async fn test_create_returns_stored_entity() {
        let client = spawn_counter_actor();

        let created = client.create(CounterCreate { start: 5 }).await.unwrap();
        assert_eq!(created, Counter { id: 1, value: 5 });

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_failed_create_stores_nothing() {
        let client = spawn_counter_actor();

        let err = client.create(CounterCreate { start: -1 }).await.unwrap_err();
        assert_eq!(err, FrameworkError::Entity(CounterError::NegativeStart));
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_action_keeps_state() {
        let client = spawn_counter_actor();
        let counter = client.create(CounterCreate { start: 2 }).await.unwrap();

        let err = client
            .perform_action(counter.id, CounterAction::Add(-3))
            .await
            .unwrap_err();
        assert_eq!(err, FrameworkError::Entity(CounterError::Underflow));

        let value = client
            .perform_action(counter.id, CounterAction::Add(1))
            .await
            .unwrap();
        assert_eq!(value, 3);
    }

    #[tokio::test]
    async fn test_list_keeps_creation_order_after_delete() {
        let client = spawn_counter_actor();
        for start in [10, 20, 30] {
            client.create(CounterCreate { start }).await.unwrap();
        }

        client.delete(2).await.unwrap();
        let values: Vec<i64> = client
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.value)
            .collect();
        assert_eq!(values, vec![10, 30]);
    }

    #[tokio::test]
    async fn test_refused_delete_keeps_entity() {
        let client = spawn_counter_actor();
        let counter = client.create(CounterCreate { start: 100 }).await.unwrap();

        let err = client.delete(counter.id).await.unwrap_err();
        assert_eq!(err, FrameworkError::Entity(CounterError::Locked));
        assert_eq!(client.get(counter.id).await.unwrap(), Some(counter));
        assert_eq!(client.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let client = spawn_counter_actor();

        let err = client
            .perform_action(42, CounterAction::Add(1))
            .await
            .unwrap_err();
        assert_eq!(err, FrameworkError::NotFound("42".to_string()));
        assert_eq!(client.get(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_closed_actor_is_unavailable() {
        let (actor, client) = ResourceActor::<Counter>::new(1, || 1);
        drop(actor);

        let err = client.get(1).await.unwrap_err();
        assert!(err.is_unavailable());
    }
}
