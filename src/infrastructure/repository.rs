//! Employee repository: the in-memory list and its persisted mirror

use crate::domain::{demo_employees, Employee, EmployeeId};
use crate::error::Result;
use crate::infrastructure::config::DEFAULT_STORAGE_KEY;
use crate::infrastructure::{Config, KeyValueStore};
use tracing::{debug, info, warn};

/// What happened to the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Loaded,
    Added,
    Updated,
    Deleted,
}

/// Sent to subscribers after every change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    pub version: u64,
    pub kind: ChangeKind,
}

/// Handle returned by [`EmployeeRepository::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&ChangeEvent, &[Employee])>;

/// Owns the authoritative employee list and keeps the store in sync with it.
///
/// Every mutation rewrites the whole list under the storage key. Writes are
/// best-effort: a failing store is logged and the in-memory list keeps the
/// change.
pub struct EmployeeRepository<S: KeyValueStore> {
    store: S,
    key: String,
    seed_demo_data: bool,
    items: Vec<Employee>,
    version: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S: KeyValueStore> EmployeeRepository<S> {
    /// Repository using the default `employees` key, with demo seeding on
    pub fn new(store: S) -> Self {
        EmployeeRepository {
            store,
            key: DEFAULT_STORAGE_KEY.to_string(),
            seed_demo_data: true,
            items: Vec::new(),
            version: 0,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn from_config(store: S, config: &Config) -> Self {
        let mut repository = Self::new(store);
        repository.key = config.storage_key.clone();
        repository.seed_demo_data = config.seed_demo_data;
        repository
    }

    /// Seed the store on first run, then load whatever it holds.
    ///
    /// An empty stored value counts as absent.
    pub fn initialize(&mut self) -> Result<()> {
        let existing = self.store.get(&self.key)?;
        let absent = existing.as_deref().map_or(true, str::is_empty);

        if absent && self.seed_demo_data {
            info!(key = %self.key, "No stored employees, writing demo data");
            self.items = demo_employees();
            self.persist();
        }

        if let Some(text) = self.store.get(&self.key)? {
            if !text.is_empty() {
                self.items = serde_json::from_str(&text)?;
                debug!(key = %self.key, count = self.items.len(), "Loaded employees");
            }
        }

        self.notify(ChangeKind::Loaded);
        Ok(())
    }

    /// Current list, read-only
    pub fn list(&self) -> &[Employee] {
        &self.items
    }

    /// First employee with the given id
    pub fn find(&self, id: &EmployeeId) -> Option<&Employee> {
        self.items.iter().find(|e| e.id.as_ref() == Some(id))
    }

    /// Bumped after every change; callers can poll it instead of subscribing
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Append to the end of the list. Ids are not checked for duplicates.
    pub fn add(&mut self, employee: Employee) {
        self.items.push(employee);
        self.persist();
        self.notify(ChangeKind::Added);
    }

    /// Replace the first employee with a matching id, keeping its position.
    /// Does nothing (and writes nothing) when no id matches.
    pub fn update(&mut self, employee: Employee) {
        let Some(index) = self.items.iter().position(|e| e.id == employee.id) else {
            debug!(id = ?employee.id, "Update skipped, no matching employee");
            return;
        };

        self.items[index] = employee;
        self.persist();
        self.notify(ChangeKind::Updated);
    }

    /// Remove every employee with the given id, then persist even if none matched
    pub fn delete(&mut self, id: &EmployeeId) {
        let before = self.items.len();
        self.items.retain(|e| e.id.as_ref() != Some(id));
        debug!(%id, removed = before - self.items.len(), "Deleted employees");

        self.persist();
        self.notify(ChangeKind::Deleted);
    }

    /// Register a callback run after every change
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ChangeEvent, &[Employee]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false when the subscription was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn persist(&mut self) {
        let text = match serde_json::to_string(&self.items) {
            Ok(text) => text,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to serialize employees");
                return;
            }
        };

        match self.store.set(&self.key, &text) {
            Ok(()) => debug!(key = %self.key, bytes = text.len(), "Persisted employees"),
            Err(e) => warn!(key = %self.key, error = %e, "Failed to persist employees"),
        }
    }

    fn notify(&mut self, kind: ChangeKind) {
        self.version += 1;
        let event = ChangeEvent {
            version: self.version,
            kind,
        };

        for (_, listener) in self.listeners.iter_mut() {
            listener(&event, &self.items);
        }
    }
}
