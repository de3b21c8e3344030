//! Integration tests for the checkout handshake

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use testresult::TestResult;

use teahouse::prelude::*;

/// Gateway that counts submissions and answers with a fixed result.
#[derive(Debug, Default)]
struct CountingGateway {
    calls: Arc<AtomicUsize>,
    fail: bool,
}

#[async_trait]
impl OrderGateway for CountingGateway {
    async fn submit(&self, order: &OrderRequest) -> Result<OrderAcknowledgement, OrderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(OrderError::UnexpectedResponse("connection refused".to_string()));
        }

        Ok(OrderAcknowledgement {
            success: true,
            order_id: Some(format!("ORD{}", order.items.len())),
            message: None,
        })
    }
}

fn add_classic(store: &mut CartStore<&MemorySlot>) -> Result<CartLine, CartError> {
    let menu = builtin_menu();
    let item = find_item(&menu, MenuItemId(1))
        .unwrap_or_else(|| unreachable!("classic milk tea is on the menu"));

    store.add_line(item, Selection::new(MenuItemId(1)).quantity(1))
}

#[tokio::test]
async fn empty_checkout_touches_nothing() -> TestResult {
    let slot = MemorySlot::new();
    let gateway = CountingGateway::default();
    let mut store = CartStore::restore(&slot);

    let outcome = checkout(&mut store, &gateway).await?;

    assert_eq!(outcome, CheckoutOutcome::EmptyCart);
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    assert_eq!(slot.contents(), None, "no persisted mutation expected");

    Ok(())
}

#[tokio::test]
async fn successful_checkout_submits_once_and_clears() -> TestResult {
    let slot = MemorySlot::new();
    let gateway = CountingGateway::default();
    let mut store = CartStore::restore(&slot);

    add_classic(&mut store)?;
    add_classic(&mut store)?;

    let outcome = checkout(&mut store, &gateway).await?;

    assert_eq!(outcome.to_string(), "Order placed! Order ID: ORD2");
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    assert!(CartStore::restore(&slot).is_empty());

    Ok(())
}

#[tokio::test]
async fn failing_endpoint_still_empties_cart() -> TestResult {
    let slot = MemorySlot::new();
    let gateway = CountingGateway {
        fail: true,
        ..CountingGateway::default()
    };
    let mut store = CartStore::restore(&slot);

    add_classic(&mut store)?;

    let outcome = checkout(&mut store, &gateway).await?;

    assert_eq!(outcome, CheckoutOutcome::Simulated);
    assert!(store.is_empty());
    assert!(CartStore::restore(&slot).is_empty());

    Ok(())
}

#[tokio::test]
async fn unreachable_backend_falls_back_to_simulated_success() -> TestResult {
    let slot = MemorySlot::new();
    let client = ShopApiClient::new(ShopApiConfig {
        base_url: "http://127.0.0.1:9".to_string(),
    });
    let mut store = CartStore::restore(&slot);

    add_classic(&mut store)?;

    let outcome = checkout(&mut store, &client).await?;

    assert_eq!(outcome, CheckoutOutcome::Simulated);
    assert!(store.is_empty());

    Ok(())
}
