//! # Pedido Store
//!
//! > **A shopping-cart store for a storefront front end.**
//!
//! The cart ("pedido") holds at most one order: a list of lines, each pairing a product with a
//! quantity. Consumers ask for the total item count or the quantity of one product, and request
//! additions and removals. Every change produces a brand-new immutable order that is published to
//! subscribers; earlier snapshots are never touched.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why a Store Actor?
//!
//! The cart is shared by many consumers that may act concurrently. Running it as a single Tokio
//! task that owns the state gives us:
//! - **No lost updates**: each command computes the next order from the current one, in arrival order.
//! - **Cheap reads**: queries read the last published snapshot without a round trip.
//! - **Change detection by revision**: a new revision means "re-render", even if the lines compare equal.
//!
//! ## 🚀 Core Concepts
//!
//! ### Generics: The Power of `S`
//! The engine is `StoreActor<S: StoreState>`. The cart is just one `StoreState`; the loop that
//! receives commands, publishes snapshots and answers callers is written once.
//!
//! ### Mocking: Testing without Pain
//! Client wrappers can be tested against a `MockStore` that answers from a queue of expectations.
//! See the [`framework::mock`] module for a complete guide.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Framework failures ([`FrameworkError`](framework::FrameworkError)) are mapped into
//! [`CartError`](cart_actor::CartError) at the client boundary, so consumers match on one enum.
//!
//! ### 2. Async Context Injection
//! The quantity rules are injected via `run()`, not at construction time, so a store and its
//! client can exist before the rules are chosen.
//!
//! ### 3. Concurrency Model
//! One task per session, messages processed sequentially, no locks around the order.
//!
//! ### 4. Observability
//! `tracing` everywhere: one span per client command, one event per publish.
//! See the [`lifecycle::tracing`] module for details.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic store: state trait, snapshots, message loop, client, mocks.
//! - **Key items**: [`StoreState`](framework::StoreState), [`StoreActor`](framework::StoreActor),
//!   [`Snapshot`](framework::Snapshot).
//!
//! ### 2. The Data ([`model`])
//! Pure values: [`Product`](model::Product), [`Order`](model::Order) and its lines.
//!
//! ### 3. The Cart ([`cart_actor`])
//! The [`Cart`](cart_actor::Cart) state and the rules its commands follow.
//!
//! ### 4. The Interface ([`clients`])
//! - **Key items**: [`CartClient`](clients::CartClient) with `total_item_count`, `quantity_of`,
//!   `add_product`, `remove_product`.
//!
//! ### 5. The Scope ([`lifecycle`])
//! - **Key items**: [`CartSession`](lifecycle::CartSession), [`CartConfig`](lifecycle::CartConfig).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod cart_actor;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
