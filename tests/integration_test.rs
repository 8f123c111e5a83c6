use smart_queue::clients::actor_client::ActorClient;
use smart_queue::lifecycle::ShopSystem;
use smart_queue::model::{Cart, Category, MenuItemCreate, OrderStatus};

/// Full end-to-end flow: two customers order, the merchant works the queue.
#[tokio::test]
async fn two_customers_through_the_queue() {
    let system = ShopSystem::new();
    system.seed_default_menu().await.unwrap();

    let menu = system.menu_client.list_items().await.unwrap();
    assert_eq!(menu.len(), 4);
    let tea = menu
        .iter()
        .find(|i| i.price == 45)
        .expect("seeded tea missing")
        .clone();
    let noodles = menu
        .iter()
        .find(|i| i.price == 120)
        .expect("seeded noodles missing")
        .clone();
    let nam_prik = menu
        .iter()
        .find(|i| i.price == 65)
        .expect("seeded nam prik missing")
        .clone();

    // Som orders one tea; Nok orders noodles and nam prik.
    let mut cart = Cart::new();
    cart.add(tea);
    let som_ticket = system
        .order_client
        .place_order("Som", &mut cart)
        .await
        .unwrap()
        .unwrap();
    assert!(cart.is_empty());

    cart.add(noodles);
    cart.add(nam_prik);
    let nok_ticket = system
        .order_client
        .place_order("Nok", &mut cart)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(som_ticket, "A001");
    assert_eq!(nok_ticket, "A002");

    let som = system
        .order_client
        .get(som_ticket.clone())
        .await
        .unwrap()
        .unwrap();
    let nok = system
        .order_client
        .get(nok_ticket.clone())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(som.total, 45);
    assert_eq!(nok.total, 185);
    assert_eq!(som.status, OrderStatus::Pending);
    assert_eq!(nok.status, OrderStatus::Pending);

    // Both show on the merchant panel, neither on the pickup board yet.
    let active = system.order_client.active_orders().await.unwrap();
    assert_eq!(active.len(), 2);
    assert!(system.order_client.ready_orders().await.unwrap().is_empty());
    let preparing = system.order_client.in_progress_orders().await.unwrap();
    assert_eq!(preparing.len(), 2);

    // The merchant accepts Som's order and finishes it.
    system
        .order_client
        .advance(&som_ticket, OrderStatus::Preparing)
        .await
        .unwrap();
    system
        .order_client
        .advance(&som_ticket, OrderStatus::Ready)
        .await
        .unwrap();

    let ready = system.order_client.ready_orders().await.unwrap();
    assert_eq!(ready.len(), 1);
    assert_eq!(ready[0].ticket, "A001");
    assert_eq!(ready[0].customer_name, "Som");

    // Nok's order gets rejected; it leaves the active view but stays in
    // the history.
    system
        .order_client
        .advance(&nok_ticket, OrderStatus::Cancelled)
        .await
        .unwrap();
    let active = system.order_client.active_orders().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].ticket, "A001");
    assert_eq!(system.order_client.all_orders().await.unwrap().len(), 2);

    system.shutdown().await.unwrap();
}

/// Catalog edits are merchant add/remove; removal never disturbs the rest
/// of the list and unknown ids are a quiet no-op.
#[tokio::test]
async fn merchant_edits_the_catalog() {
    let system = ShopSystem::new();

    let id_a = system
        .menu_client
        .add_item(MenuItemCreate {
            name: "Roselle soda".to_string(),
            price: 50,
            category: Category::Drink,
            description: String::new(),
        })
        .await
        .unwrap();
    system
        .menu_client
        .add_item(MenuItemCreate {
            name: "Sticky rice with mango".to_string(),
            price: 80,
            category: Category::Food,
            description: String::new(),
        })
        .await
        .unwrap();

    system.menu_client.remove_item(&id_a).await.unwrap();
    // Removing again (or a bogus id) is fine.
    system.menu_client.remove_item(&id_a).await.unwrap();
    system.menu_client.remove_item("item_999").await.unwrap();

    let names: Vec<String> = system
        .menu_client
        .list_items()
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.name)
        .collect();
    assert_eq!(names, vec!["Sticky rice with mango".to_string()]);

    system.shutdown().await.unwrap();
}

/// The shop reset clears orders and restarts tickets regardless of how far
/// the sequence had advanced.
#[tokio::test]
async fn reset_spans_the_whole_shop() {
    let system = ShopSystem::new();
    system.seed_default_menu().await.unwrap();
    let menu = system.menu_client.list_items().await.unwrap();

    let mut cart = Cart::new();
    for _ in 0..3 {
        cart.add(menu[0].clone());
        system
            .order_client
            .place_order("Som", &mut cart)
            .await
            .unwrap();
    }

    cart.add(menu[1].clone());
    system.order_client.reset_all(&mut cart).await.unwrap();
    assert!(cart.is_empty());
    assert!(system.order_client.all_orders().await.unwrap().is_empty());

    // The menu is untouched by an order reset.
    assert_eq!(system.menu_client.list_items().await.unwrap().len(), 4);

    cart.add(menu[0].clone());
    let ticket = system
        .order_client
        .place_order("Nok", &mut cart)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(ticket, "A001");

    system.shutdown().await.unwrap();
}
