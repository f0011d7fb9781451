use pedido_store::cart_actor::{CartError, QuantityPolicy};
use pedido_store::clients::CartClient;
use pedido_store::framework::{PublishPolicy, StoreHandle};
use pedido_store::lifecycle::{CartConfig, CartSession};
use pedido_store::model::{Product, ProductId};
use std::sync::Arc;

#[tokio::test]
async fn test_every_accepted_command_gets_a_new_revision() {
    let session = CartSession::new();
    let cart = session.client();

    let first = cart.add_product(Product::with_id("P1"), 1).await.unwrap();
    assert_eq!(first.revision(), 1);

    // Republished even though nothing changed
    let unchanged = cart.remove_product(Product::with_id("P1"), 9).await.unwrap();
    assert_eq!(unchanged.revision(), 2);
    assert_eq!(unchanged.order(), first.order());

    let unknown = cart.remove_product(Product::with_id("P7"), 1).await.unwrap();
    assert_eq!(unknown.revision(), 3);

    // Change detection by reference: each publish carries its own order
    let (Some(before), Some(after)) = (first.shared_order(), unknown.shared_order()) else {
        panic!("Order not started");
    };
    assert!(!Arc::ptr_eq(&before, &after));
}

#[tokio::test]
async fn test_on_change_policy_skips_no_effect_removes() {
    let session =
        CartSession::with_config(CartConfig::default().with_publish(PublishPolicy::OnChange));
    let cart = session.client();

    cart.add_product(Product::with_id("P1"), 1).await.unwrap();
    let unchanged = cart.remove_product(Product::with_id("P1"), 9).await.unwrap();
    assert_eq!(unchanged.revision(), 1);

    let changed = cart.remove_product(Product::with_id("P1"), 1).await.unwrap();
    assert_eq!(changed.revision(), 2);
    assert_eq!(changed.quantity_of(&ProductId::from("P1")), 0);
}

#[tokio::test]
async fn test_accept_any_quantity_by_default() {
    let session = CartSession::new();
    let cart = session.client();

    cart.add_product(Product::with_id("P1"), 3).await.unwrap();
    cart.add_product(Product::with_id("P1"), -1).await.unwrap();
    cart.add_product(Product::with_id("P2"), 0).await.unwrap();

    assert_eq!(cart.quantity_of(&ProductId::from("P1")).unwrap(), 2);
    assert_eq!(cart.order().unwrap().unwrap().len(), 2);
}

#[tokio::test]
async fn test_reject_non_positive_quantities() {
    let session = CartSession::with_config(
        CartConfig::default().with_quantities(QuantityPolicy::RejectNonPositive),
    );
    let cart = session.client();

    assert_eq!(
        cart.add_product(Product::with_id("P1"), 0).await.unwrap_err(),
        CartError::InvalidQuantity(0)
    );
    assert_eq!(
        cart.add_product(Product::with_id("P1"), -2).await.unwrap_err(),
        CartError::InvalidQuantity(-2)
    );

    // Nothing was published
    let snapshot = cart.snapshot().unwrap();
    assert_eq!(snapshot.revision(), 0);
    assert!(snapshot.order().is_none());

    // The store keeps serving after a rejection
    cart.add_product(Product::with_id("P1"), 2).await.unwrap();
    assert_eq!(cart.total_item_count().unwrap(), 2);
}

#[tokio::test]
async fn test_reject_non_positive_removes() {
    let session = CartSession::with_config(
        CartConfig::default().with_quantities(QuantityPolicy::RejectNonPositive),
    );
    let cart = session.client();
    cart.add_product(Product::with_id("P1"), 1).await.unwrap();

    assert_eq!(
        cart.remove_product(Product::with_id("P1"), -100).await.unwrap_err(),
        CartError::InvalidQuantity(-100)
    );
    assert_eq!(
        cart.remove_product(Product::with_id("P1"), 0).await.unwrap_err(),
        CartError::InvalidQuantity(0)
    );

    let snapshot = cart.snapshot().unwrap();
    assert_eq!(snapshot.quantity_of(&ProductId::from("P1")), 1);
    assert_eq!(snapshot.revision(), 1);
}

#[tokio::test]
async fn test_negative_remove_raises_line_by_default() {
    let session = CartSession::new();
    let cart = session.client();
    cart.add_product(Product::with_id("P1"), 1).await.unwrap();

    let snapshot = cart.remove_product(Product::with_id("P1"), -100).await.unwrap();

    assert_eq!(snapshot.quantity_of(&ProductId::from("P1")), 101);
}

#[tokio::test]
async fn test_subscribers_are_notified_of_publishes() {
    let session = CartSession::new();
    let cart = session.client();
    let mut updates = cart.subscribe().unwrap();

    let mut totals = vec![];

    cart.add_product(Product::with_id("P1"), 2).await.unwrap();
    let first = CartClient::changed(&mut updates).await.unwrap();
    totals.push(first.total_item_count());

    cart.add_product(Product::with_id("P2"), 3).await.unwrap();
    let second = CartClient::changed(&mut updates).await.unwrap();
    totals.push(second.total_item_count());

    assert_eq!(totals, vec![2, 5]);
    assert_eq!((first.revision(), second.revision()), (1, 2));
}

#[tokio::test]
async fn test_subscription_ends_with_session() {
    let session = CartSession::new();
    let cart = session.client();
    let mut updates = cart.subscribe().unwrap();

    session.shutdown().await.unwrap();

    assert_eq!(
        CartClient::changed(&mut updates).await.unwrap_err(),
        CartError::InactiveSession
    );
}

#[tokio::test]
async fn test_concurrent_adds_are_not_lost() {
    let session = CartSession::with_config(CartConfig::default().with_buffer_size(4));
    let cart = session.client();

    let mut handles = vec![];
    for task in 0..20 {
        let cart = cart.clone();
        handles.push(tokio::spawn(async move {
            cart.add_product(Product::with_id("P1"), 1).await?;
            cart.add_product(Product::with_id(format!("T{task}")), 2).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let snapshot = cart.fetch().await.unwrap();
    assert_eq!(snapshot.quantity_of(&ProductId::from("P1")), 20);
    assert_eq!(snapshot.total_item_count(), 60);
    assert_eq!(snapshot.revision(), 40);
    assert_eq!(snapshot.order().map(|order| order.len()), Some(21));
}

#[tokio::test]
async fn test_earlier_snapshots_stay_unchanged() {
    let session = CartSession::new();
    let cart = session.client();

    let first = cart.add_product(Product::with_id("P1"), 1).await.unwrap();
    let held_order = cart.order().unwrap().unwrap();

    cart.add_product(Product::with_id("P1"), 4).await.unwrap();
    cart.add_product(Product::with_id("P2"), 1).await.unwrap();

    assert_eq!(first.revision(), 1);
    assert_eq!(first.total_item_count(), 1);
    assert_eq!(held_order.len(), 1);
    assert_eq!(held_order.quantity_of(&ProductId::from("P1")), 1);
    assert_eq!(cart.total_item_count().unwrap(), 6);
}
