//! # Session Lifecycle
//!
//! A session has three phases:
//!
//! 1. **Construct or hydrate** - [`Canteen::open`] loads the data file, or starts
//!    empty when there is none.
//! 2. **Mutate** - the shell calls into [`Canteen::menu`] and [`Canteen::orders`].
//! 3. **Persist** - [`Canteen::save`] overwrites the data file when the user
//!    chooses "Save and Exit".
//!
//! There is no global state: the `Canteen` is built in `main` and lent to the shell.
//! The menu and the order book are separate values; the order book borrows the menu
//! only for the duration of a call that needs it.
//!
//! This module also sets up logging via [`setup_tracing`].

pub mod canteen;
pub mod tracing;

pub use canteen::*;
pub use self::tracing::*;
