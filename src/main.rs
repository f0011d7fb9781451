//! # Pedido Store Demo
//!
//! Walks one cart session through the typical storefront flow:
//! 1.  Starting a [`CartSession`].
//! 2.  Adding two products, one of them twice.
//! 3.  Removing more than present (ignored), then removing part of a line.
//! 4.  Shutting the session down.

use pedido_store::lifecycle::{setup_tracing, CartSession};
use pedido_store::model::Product;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting cart session");
    let session = CartSession::new();
    let cart = session.client();

    let keyboard = Product::new("P1", "Keyboard", 49.9);
    let mouse = Product::new("P2", "Mouse", 19.5);

    let span = tracing::info_span!("filling_cart");
    async {
        cart.add_product(keyboard.clone(), 2).await?;
        cart.add_product(mouse.clone(), 1).await?;
        cart.add_product(keyboard.clone(), 1).await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    info!(
        total = cart.total_item_count().map_err(|e| e.to_string())?,
        keyboards = cart.quantity_of(&keyboard.id).map_err(|e| e.to_string())?,
        "Cart filled"
    );

    // Asking for more than the line holds leaves it untouched.
    let snapshot = cart
        .remove_product(mouse.clone(), 5)
        .await
        .map_err(|e| e.to_string())?;
    info!(
        revision = snapshot.revision(),
        mice = snapshot.quantity_of(&mouse.id),
        "Oversized removal ignored"
    );

    let snapshot = cart
        .remove_product(keyboard.clone(), 2)
        .await
        .map_err(|e| e.to_string())?;
    info!(
        revision = snapshot.revision(),
        total = snapshot.total_item_count(),
        "Keyboards removed"
    );

    if let Some(order) = cart.order().map_err(|e| e.to_string())? {
        for line in order.lines() {
            info!(
                product_id = %line.product.id,
                name = %line.product.name,
                quantity = line.quantity,
                "Order line"
            );
        }
    }

    session.shutdown().await.map_err(|e| e.to_string())?;
    info!("Done");
    Ok(())
}
