//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging for the cart.
//!
//! ## What Gets Traced
//!
//! - **Store Lifecycle**: startup, shutdown request, final revision
//! - **Commands**: every dispatch with its payload (`debug`), every publish with its revision (`info`)
//! - **Rejections**: commands refused by the quantity rules (`warn`)
//! - **Client Calls**: one span per `add_product` / `remove_product` carrying the product id
//!
//! ## Usage Examples
//!
//! ```bash
//! # Publishes and lifecycle only
//! RUST_LOG=info cargo run
//!
//! # Full command payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the store engine
//! RUST_LOG=pedido_store::framework=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Cart session started config=CartConfig { buffer_size: 32, publish: Always, quantities: AcceptAny }
//! INFO Store started state_type="Cart"
//! INFO add_product{product_id=P1 quantity=3}: Published state_type="Cart" revision=1
//! ```

/// Initializes the tracing subscriber.
///
/// Filtering comes from `RUST_LOG`; the output is compact and hides module paths, since every
/// store event already carries `state_type`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
