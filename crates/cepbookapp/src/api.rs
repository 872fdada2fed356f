//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all cepbook operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., parsing selector strings into [`AddressSelector`]s)
//! - **Guards lookups** with a busy flag
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Busy Flag
//!
//! A lookup is the only blocking operation. While one is in flight [`CepBookApi::is_busy`]
//! is true and another `add_address` is rejected with [`CepError::Api`]. Observers that
//! cannot borrow the API (a spinner, a resolver wrapper) can hold a [`BusyFlag`] handle.
//! Delete, clear and list never consult the flag.
//!
//! ## Generic Over DataStore
//!
//! `CepBookApi<S: DataStore>` is generic over the storage backend:
//! - Production: `CepBookApi<FileStore>`
//! - Testing: `CepBookApi<InMemoryStore>`

use crate::commands;
use crate::error::{CepError, Result};
use crate::filter;
use crate::index::{parse_selector, AddressSelector};
use crate::lookup::CepResolver;
use crate::model::{Address, BookState};
use crate::repository::{AddressBook, LoadReport};
use crate::store::DataStore;
use std::cell::Cell;
use std::rc::Rc;

/// Shared, read-only view of the API's busy state.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Rc<Cell<bool>>);

impl BusyFlag {
    pub fn is_set(&self) -> bool {
        self.0.get()
    }

    fn set(&self, value: bool) {
        self.0.set(value);
    }
}

/// Clears the flag when dropped, including on early return.
struct BusyGuard<'a>(&'a BusyFlag);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// The main API facade for cepbook operations.
pub struct CepBookApi<S: DataStore> {
    book: AddressBook<S>,
    load_report: LoadReport,
    busy: BusyFlag,
}

impl<S: DataStore> CepBookApi<S> {
    /// Opens the book over `store`, loading whatever it holds.
    pub fn new(store: S) -> Self {
        let (book, load_report) = AddressBook::open(store);
        Self {
            book,
            load_report,
            busy: BusyFlag::default(),
        }
    }

    /// What happened when the stored collection was loaded.
    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_set()
    }

    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    pub fn add_address<R: CepResolver + ?Sized>(
        &mut self,
        resolver: &R,
        code: &str,
    ) -> Result<commands::CmdResult> {
        if self.busy.is_set() {
            return Err(CepError::Api(
                "A lookup is already in progress".to_string(),
            ));
        }
        self.busy.set(true);
        let _guard = BusyGuard(&self.busy);
        commands::add::run(&mut self.book, resolver, code)
    }

    pub fn list(&self, query: &str) -> Result<commands::CmdResult> {
        commands::list::run(&self.book, query)
    }

    /// The filtered view, without indexes.
    pub fn visible(&self, query: &str) -> Vec<&Address> {
        filter::filter(self.book.addresses(), query)
    }

    pub fn view<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::view::run(&self.book, &selectors)
    }

    pub fn delete<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::run(&mut self.book, &selectors)
    }

    /// Number of addresses a [`clear`](Self::clear) would remove.
    pub fn clear_preview(&self) -> usize {
        commands::clear::preview(&self.book)
    }

    pub fn clear(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.book)
    }

    pub fn state(&self) -> BookState {
        self.book.state()
    }

    pub fn book(&self) -> &AddressBook<S> {
        &self.book
    }

    /// Registers a listener re-rendered after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&[Address]) + 'static) {
        self.book.subscribe(listener);
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<AddressSelector>> {
    if inputs.is_empty() {
        return Err(CepError::Api("No address selected".to_string()));
    }
    inputs
        .iter()
        .map(|input| parse_selector(input.as_ref()).map_err(CepError::Api))
        .collect()
}
