use smart_queue::clients::{actor_client::ActorClient, OrderClient};
use smart_queue::framework::{mock::MockClient, FrameworkError};
use smart_queue::model::{Cart, Category, MenuItem, MenuItemCreate, Order, OrderStatus};
use smart_queue::order_actor::OrderError;

fn tea() -> MenuItem {
    MenuItem::new("item_1", "Thai iced tea", 45, Category::Drink, "")
}

fn noodles() -> MenuItem {
    MenuItem::new("item_2", "Boat noodles", 120, Category::Food, "")
}

/// Tickets are `A` + zero-padded sequence, strictly increasing per process
/// lifetime.
#[tokio::test]
async fn tickets_are_sequential_and_unique() {
    let (actor, client) = smart_queue::order_actor::new();
    let handle = tokio::spawn(actor.run(()));

    let mut tickets = Vec::new();
    for _ in 0..3 {
        let mut cart = Cart::new();
        cart.add(tea());
        let ticket = client.place_order("Som", &mut cart).await.unwrap().unwrap();
        tickets.push(ticket);
    }
    assert_eq!(tickets, vec!["A001", "A002", "A003"]);

    drop(client);
    handle.await.unwrap();
}

/// Placing with an empty cart is a quiet no-op: no order, no ticket consumed.
#[tokio::test]
async fn empty_cart_never_creates_an_order() {
    let (actor, client) = smart_queue::order_actor::new();
    let _handle = tokio::spawn(actor.run(()));

    let mut cart = Cart::new();
    let result = client.place_order("Som", &mut cart).await.unwrap();
    assert_eq!(result, None);
    assert!(client.all_orders().await.unwrap().is_empty());

    // The next real order still gets the first ticket.
    cart.add(tea());
    let ticket = client.place_order("Som", &mut cart).await.unwrap().unwrap();
    assert_eq!(ticket, "A001");
}

/// A blank customer name becomes the generic placeholder.
#[tokio::test]
async fn blank_customer_name_is_replaced() {
    let (actor, client) = smart_queue::order_actor::new();
    let _handle = tokio::spawn(actor.run(()));

    let mut cart = Cart::new();
    cart.add(tea());
    let ticket = client.place_order("  ", &mut cart).await.unwrap().unwrap();

    let order = client.get(ticket).await.unwrap().unwrap();
    assert_eq!(order.customer_name, "Guest");
}

/// Only the four forward edges are accepted; anything else leaves the
/// status untouched.
#[tokio::test]
async fn invalid_transitions_leave_status_unchanged() {
    let (actor, client) = smart_queue::order_actor::new();
    let _handle = tokio::spawn(actor.run(()));

    let mut cart = Cart::new();
    cart.add(tea());
    let ticket = client.place_order("Som", &mut cart).await.unwrap().unwrap();

    // Pending cannot jump straight to Completed or Ready.
    for target in [OrderStatus::Completed, OrderStatus::Ready] {
        let err = client.advance(&ticket, target).await.unwrap_err();
        assert!(matches!(err, OrderError::InvalidTransition(_)));
        let order = client.get(ticket.clone()).await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
    }

    // Walk the happy path, then check no backward move is possible.
    client.advance(&ticket, OrderStatus::Preparing).await.unwrap();
    client.advance(&ticket, OrderStatus::Ready).await.unwrap();
    let err = client
        .advance(&ticket, OrderStatus::Preparing)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InvalidTransition(_)));

    // Terminal states accept nothing further.
    client.advance(&ticket, OrderStatus::Completed).await.unwrap();
    let err = client
        .advance(&ticket, OrderStatus::Cancelled)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InvalidTransition(_)));
}

#[tokio::test]
async fn advancing_an_unknown_ticket_is_not_found() {
    let (actor, client) = smart_queue::order_actor::new();
    let _handle = tokio::spawn(actor.run(()));

    let err = client
        .advance("A999", OrderStatus::Preparing)
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::NotFound("A999".to_string()));
}

/// An order's snapshot and total are fixed at placement time: deleting the
/// menu item afterwards changes nothing.
#[tokio::test]
async fn order_snapshot_survives_catalog_deletes() {
    let (menu_actor, menu_client) = smart_queue::menu_actor::new();
    let (order_actor, order_client) = smart_queue::order_actor::new();
    let _menu_handle = tokio::spawn(menu_actor.run(()));
    let _order_handle = tokio::spawn(order_actor.run(()));

    let item_id = menu_client
        .add_item(MenuItemCreate {
            name: "Thai iced tea".to_string(),
            price: 45,
            category: Category::Drink,
            description: String::new(),
        })
        .await
        .unwrap();
    let item = menu_client.get(item_id.clone()).await.unwrap().unwrap();

    let mut cart = Cart::new();
    cart.add(item.clone());
    cart.add(item);
    let ticket = order_client
        .place_order("Som", &mut cart)
        .await
        .unwrap()
        .unwrap();

    menu_client.remove_item(&item_id).await.unwrap();
    assert!(menu_client.list_items().await.unwrap().is_empty());

    let order = order_client.get(ticket).await.unwrap().unwrap();
    assert_eq!(order.total, 90);
    assert_eq!(order.lines.len(), 1);
    assert_eq!(order.lines[0].item.name, "Thai iced tea");
    assert_eq!(order.lines[0].quantity, 2);
}

/// Reset wipes the history, empties the cart, and restarts tickets at A001.
#[tokio::test]
async fn reset_restarts_ticket_numbering() {
    let (actor, client) = smart_queue::order_actor::new();
    let _handle = tokio::spawn(actor.run(()));

    for _ in 0..2 {
        let mut cart = Cart::new();
        cart.add(tea());
        client.place_order("Som", &mut cart).await.unwrap();
    }

    let mut cart = Cart::new();
    cart.add(noodles());
    client.reset_all(&mut cart).await.unwrap();

    assert!(cart.is_empty());
    assert!(client.all_orders().await.unwrap().is_empty());

    cart.add(tea());
    let ticket = client.place_order("Nok", &mut cart).await.unwrap().unwrap();
    assert_eq!(ticket, "A001");
}

/// Pattern: client + mock. A failed create must leave the cart untouched —
/// placement is atomic.
#[tokio::test]
async fn failed_placement_leaves_cart_intact() {
    let mut mock = MockClient::<Order>::new();
    mock.expect_create().return_err(FrameworkError::ActorClosed);

    let client = OrderClient::new(mock.client());

    let mut cart = Cart::new();
    cart.add(tea());
    cart.add(tea());

    let result = client.place_order("Som", &mut cart).await;
    assert!(result.is_err());
    assert_eq!(cart.item_count(), 2);

    mock.verify();
}
