//! # Address Repository
//!
//! [`AddressBook`] owns the in-memory collection and the [`DataStore`] that persists it.
//! It is the only component allowed to mutate either.
//!
//! ## Lock-Step
//!
//! Memory and store never diverge after a completed operation. Every mutation follows
//! the same shape:
//!
//! 1. Apply the change in memory.
//! 2. Persist the whole collection (or delete the key, for `clear`).
//! 3. If persisting fails, **revert** step 1 and return [`CepError::Persistence`].
//!
//! So a failed `add` leaves the new address out of the collection, a failed `remove`
//! puts the entry back at its original position, and a failed `clear` restores the
//! previous contents.
//!
//! ## Ordering
//!
//! Newest first. `add` prepends; nothing else changes positions.
//!
//! ## Loading
//!
//! [`AddressBook::load_all`] never fails. Missing data yields an empty book; corrupt or
//! unreadable data also yields an empty book, logged and reported in the
//! [`LoadReport`]. Before the first `add` or `clear` after such a load, the unusable
//! value is moved aside with [`DataStore::set_aside`] (`addresses.json.bak` on disk).
//! If that move fails the mutation is refused and nothing is overwritten.
//!
//! ## Listeners
//!
//! Views register with [`AddressBook::subscribe`] and are called with the current
//! collection after every effective mutation and after each load.
//!
//! ## Concurrency
//!
//! Single-threaded. All mutations take `&mut self`, so there is at most one writer and
//! no locking.

use crate::error::{CepError, Result};
use crate::model::{Address, BookState};
use crate::store::DataStore;
use uuid::Uuid;

type Listener = Box<dyn FnMut(&[Address])>;

/// Outcome of [`AddressBook::load_all`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    /// Set when stored data could not be used and the book started empty.
    pub warning: Option<String>,
}

pub struct AddressBook<S: DataStore> {
    store: S,
    addresses: Vec<Address>,
    listeners: Vec<Listener>,
    /// The stored value could not be loaded and has not been set aside yet.
    unreadable: bool,
}

impl<S: DataStore> AddressBook<S> {
    /// An empty book over `store`. Call [`load_all`](Self::load_all) to read persisted data.
    pub fn new(store: S) -> Self {
        Self {
            store,
            addresses: Vec::new(),
            listeners: Vec::new(),
            unreadable: false,
        }
    }

    /// Creates a book and loads whatever `store` holds.
    pub fn open(store: S) -> (Self, LoadReport) {
        let mut book = Self::new(store);
        let report = book.load_all();
        (book, report)
    }

    pub fn load_all(&mut self) -> LoadReport {
        self.unreadable = false;
        let report = match self.store.load() {
            Ok(Some(addresses)) => {
                self.addresses = addresses;
                LoadReport {
                    loaded: self.addresses.len(),
                    warning: None,
                }
            }
            Ok(None) => {
                self.addresses.clear();
                LoadReport::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored addresses unusable, starting empty");
                self.addresses.clear();
                self.unreadable = true;
                LoadReport {
                    loaded: 0,
                    warning: Some(format!("Stored addresses were ignored: {}", e)),
                }
            }
        };
        tracing::debug!(count = report.loaded, "loaded address book");
        self.notify();
        report
    }

    /// Prepends `address` and persists. Rolls back on store failure.
    pub fn add(&mut self, address: Address) -> Result<()> {
        if self.get(&address.id).is_some() {
            return Err(CepError::Api(format!(
                "Address {} is already in the collection",
                address.id
            )));
        }

        self.set_aside_unreadable()?;
        let id = address.id;
        self.addresses.insert(0, address);
        if let Err(e) = self.store.save(&self.addresses) {
            self.addresses.remove(0);
            tracing::warn!(%id, error = %e, "add rolled back");
            return Err(e);
        }

        tracing::info!(%id, count = self.addresses.len(), "address added");
        self.notify();
        Ok(())
    }

    /// Removes the address with `id`. Absent ids are a no-op returning `Ok(None)`.
    pub fn remove(&mut self, id: &Uuid) -> Result<Option<Address>> {
        let Some(position) = self.addresses.iter().position(|a| a.id == *id) else {
            return Ok(None);
        };

        let removed = self.addresses.remove(position);
        if let Err(e) = self.store.save(&self.addresses) {
            self.addresses.insert(position, removed);
            tracing::warn!(%id, error = %e, "remove rolled back");
            return Err(e);
        }

        tracing::info!(%id, count = self.addresses.len(), "address removed");
        self.notify();
        Ok(Some(removed))
    }

    /// Empties the book and deletes the persisted entry. Returns how many were removed.
    pub fn clear(&mut self) -> Result<usize> {
        self.set_aside_unreadable()?;
        let previous = std::mem::take(&mut self.addresses);
        if let Err(e) = self.store.delete() {
            self.addresses = previous;
            tracing::warn!(error = %e, "clear rolled back");
            return Err(e);
        }

        let removed = previous.len();
        if removed > 0 {
            tracing::info!(removed, "address book cleared");
            self.notify();
        }
        Ok(removed)
    }

    /// Newest first.
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    pub fn get(&self, id: &Uuid) -> Option<&Address> {
        self.addresses.iter().find(|a| a.id == *id)
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn state(&self) -> BookState {
        if self.addresses.is_empty() {
            BookState::Empty
        } else {
            BookState::Populated
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Hands the store back, e.g. to reopen it as after a restart.
    pub fn into_store(self) -> S {
        self.store
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&[Address]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Keeps an unreadable stored value from being overwritten or deleted.
    fn set_aside_unreadable(&mut self) -> Result<()> {
        if !self.unreadable {
            return Ok(());
        }
        match self.store.set_aside() {
            Ok(Some(backup)) => {
                tracing::warn!(backup = %backup.display(), "unreadable addresses set aside");
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "could not set unreadable addresses aside");
                return Err(e);
            }
        }
        self.unreadable = false;
        Ok(())
    }

    fn notify(&mut self) {
        for listener in self.listeners.iter_mut() {
            listener(&self.addresses);
        }
    }
}
