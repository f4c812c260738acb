use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Entity trait, ids, store)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Sync + Debug;

    // --- Custom Actions ---
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, String>;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), String> { Ok(()) }

    // --- Action Handler ---

    /// Handle a custom domain-specific action. Runs as a single
    /// load-mutate-save step inside the actor.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

/// Source of fresh ids for newly created entities.
pub trait IdGenerator<Id>: Send + 'static {
    fn next_id(&mut self) -> Id;
}

impl<Id, F> IdGenerator<Id> for F
where
    F: FnMut() -> Id + Send + 'static,
{
    fn next_id(&mut self) -> Id {
        self()
    }
}

/// Hands out 1, 2, 3, ... for the lifetime of the process.
#[derive(Debug, Default)]
pub struct SequentialIds {
    last: u64,
}

impl<Id: From<u64>> IdGenerator<Id> for SequentialIds {
    fn next_id(&mut self) -> Id {
        self.last += 1;
        Id::from(self.last)
    }
}

/// Keyed entity storage. Last write wins.
#[derive(Debug)]
pub struct EntityStore<T: Entity> {
    items: HashMap<T::Id, T>,
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self { items: HashMap::new() }
    }
}

impl<T: Entity> EntityStore<T> {
    /// Insert or replace by the entity's own id.
    pub fn save(&mut self, item: T) {
        self.items.insert(item.id().clone(), item);
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.get(id)
    }

    pub fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.items.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Request rejected: {0}")]
    Rejected(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreatePayload,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: EntityStore<T>,
    ids: Box<dyn IdGenerator<T::Id>>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        ids: impl IdGenerator<T::Id>,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: EntityStore::default(),
            ids: Box::new(ids),
        };
        (actor, ResourceClient::new(sender))
    }

    #[instrument(name = "resource_actor", skip(self))]
    pub async fn run(mut self) {
        info!("ResourceActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.handle_create(params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let _ = respond_to.send(self.handle_action(id, action));
                }
            }
        }
        info!(stored = self.store.len(), "ResourceActor stopped");
    }

    fn handle_create(&mut self, params: T::CreatePayload) -> Result<T::Id, FrameworkError> {
        let id = self.ids.next_id();
        let mut item = T::from_create(id.clone(), params).map_err(FrameworkError::Rejected)?;
        item.on_create().map_err(FrameworkError::Rejected)?;
        self.store.save(item);
        debug!(%id, "Entity created");
        Ok(id)
    }

    fn handle_action(&mut self, id: T::Id, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        match self.store.get_mut(&id) {
            Some(item) => item.handle_action(action).map_err(FrameworkError::Rejected),
            None => {
                warn!(%id, "Action on unknown entity");
                Err(FrameworkError::NotFound(id.to_string()))
            }
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::CreatePayload) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Create { params, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Get { id, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Action { id, action, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Tally {
        id: u64,
        label: String,
        count: u32,
    }

    #[derive(Debug)]
    struct TallyCreate {
        label: String,
    }

    #[derive(Debug)]
    enum TallyAction {
        Bump,
        Reset,
    }

    impl Entity for Tally {
        type Id = u64;
        type CreatePayload = TallyCreate;
        type Action = TallyAction;
        type ActionResult = u32;

        fn id(&self) -> &u64 { &self.id }

        fn from_create(id: u64, payload: TallyCreate) -> Result<Self, String> {
            if payload.label.is_empty() {
                return Err("label required".to_string());
            }
            Ok(Self { id, label: payload.label, count: 0 })
        }

        fn handle_action(&mut self, action: TallyAction) -> Result<u32, String> {
            match action {
                TallyAction::Bump => self.count += 1,
                TallyAction::Reset => self.count = 0,
            }
            Ok(self.count)
        }
    }

    #[test]
    fn test_sequential_ids_start_at_one() {
        let mut ids = SequentialIds::default();
        let first: u64 = ids.next_id();
        let second: u64 = ids.next_id();
        assert_eq!((first, second), (1, 2));
    }

    #[test]
    fn test_store_save_replaces_by_id() {
        let mut store = EntityStore::<Tally>::default();
        store.save(Tally { id: 7, label: "a".into(), count: 0 });
        store.save(Tally { id: 7, label: "b".into(), count: 3 });
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&7).map(|t| t.count), Some(3));
        assert!(store.get(&8).is_none());
    }

    #[tokio::test]
    async fn test_resource_actor_with_actions() {
        let (actor, client) = ResourceActor::<Tally>::new(10, SequentialIds::default());
        tokio::spawn(actor.run());

        let id = client.create(TallyCreate { label: "visits".into() }).await.unwrap();
        assert_eq!(id, 1);

        assert_eq!(client.perform_action(id, TallyAction::Bump).await.unwrap(), 1);
        assert_eq!(client.perform_action(id, TallyAction::Bump).await.unwrap(), 2);

        let tally = client.get(id).await.unwrap().unwrap();
        assert_eq!(tally.count, 2);

        assert_eq!(client.perform_action(id, TallyAction::Reset).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_injected_id_generator() {
        let (actor, client) = ResourceActor::<Tally>::new(10, || 42u64);
        tokio::spawn(actor.run());

        let id = client.create(TallyCreate { label: "fixed".into() }).await.unwrap();
        assert_eq!(id, 42);
    }

    #[tokio::test]
    async fn test_missing_entity_and_rejected_create() {
        let (actor, client) = ResourceActor::<Tally>::new(10, SequentialIds::default());
        tokio::spawn(actor.run());

        assert_eq!(client.get(99).await, Ok(None));
        assert_eq!(
            client.perform_action(99, TallyAction::Bump).await,
            Err(FrameworkError::NotFound("99".to_string()))
        );
        assert_eq!(
            client.create(TallyCreate { label: String::new() }).await,
            Err(FrameworkError::Rejected("label required".to_string()))
        );
    }

    #[tokio::test]
    async fn test_client_reports_closed_actor() {
        let (actor, client) = ResourceActor::<Tally>::new(10, SequentialIds::default());
        drop(actor);
        assert_eq!(client.get(1).await, Err(FrameworkError::ActorClosed));
    }
}
