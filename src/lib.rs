//! # Canteen
//!
//! > **Menu and order book for a small canteen.**
//!
//! The crate tracks the dishes on offer, takes customer orders against them, follows
//! each order's status, and keeps everything in one JSON file between runs.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Store ([`framework`])
//! A generic, ordered [`ResourceStore`](framework::ResourceStore) driven by the
//! [`Entity`](framework::Entity) trait. It owns the id counters and the create/update/delete
//! plumbing, so the domain modules only describe behaviour.
//!
//! ### 2. The Domain ([`model`], [`menu`], [`orders`])
//! - [`Menu`](menu::Menu) owns the [`Dish`](model::Dish)es.
//! - [`OrderManager`](orders::OrderManager) owns the [`Order`](model::Order)s and checks each
//!   new order against the menu it is handed.
//!
//! Orders refer to dishes by id only. A dish removed later simply disappears from the
//! order's dish list and total.
//!
//! ### 3. Persistence ([`persistence`])
//! [`DataFile`](persistence::DataFile) loads the whole state at startup and overwrites it on
//! save. A missing file starts an empty canteen; a malformed one is an error.
//!
//! ### 4. The Session ([`lifecycle`], [`config`], [`shell`])
//! [`Canteen`](lifecycle::Canteen) ties the pieces together for one run, [`config::Cli`]
//! reads the command line, and [`shell::Shell`] is the numbered text menu.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Start with ./data.json
//! cargo run
//!
//! # Use another file and show one log line per change
//! cargo run -- --data-file /var/lib/canteen.json --log info
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod menu;
pub mod model;
pub mod orders;
pub mod persistence;
pub mod shell;
