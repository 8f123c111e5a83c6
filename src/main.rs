//! Demo binary: runs one scripted day at the shop.

use smart_queue::assistant::Assistant;
use smart_queue::config::Config;
use smart_queue::lifecycle::{setup_tracing, ShopSystem};
use smart_queue::merchant::MerchantGate;
use smart_queue::model::{Cart, OrderStatus};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();
    let config = Config::from_env()?;

    let system = ShopSystem::new();
    system.seed_default_menu().await?;

    let menu = system.menu_client.list_items().await?;
    println!("Menu:");
    for item in &menu {
        println!("  {} — {} ({:?})", item.name, item.price, item.category);
    }

    // A customer fills a cart and checks out.
    let mut cart = Cart::new();
    cart.add(menu[0].clone());
    cart.add(menu[0].clone());
    cart.add(menu[1].clone());
    println!("\nCart total: {}", cart.total());

    let ticket = system
        .order_client
        .place_order("Som", &mut cart)
        .await?
        .ok_or("cart was unexpectedly empty")?;
    println!("Your queue ticket: {ticket}");

    // The merchant logs in and works the order.
    let gate = MerchantGate::from_config(&config);
    let role = gate.login(config.merchant_passcode.as_deref().unwrap_or(""));
    if role.is_merchant() {
        system
            .order_client
            .advance(&ticket, OrderStatus::Preparing)
            .await?;
        system
            .order_client
            .advance(&ticket, OrderStatus::Ready)
            .await?;
    } else {
        println!("(set MERCHANT_PASSCODE to run the merchant flow)");
    }

    println!("\nQueue board:");
    for order in system.order_client.ready_orders().await? {
        println!("  ready:     {} ({})", order.ticket, order.customer_name);
    }
    for order in system.order_client.in_progress_orders().await? {
        println!("  preparing: {} ({})", order.ticket, order.customer_name);
    }

    // One question for the assistant (fixed reply unless API_KEY is set).
    let assistant = Assistant::from_config(&config);
    let reply = assistant.ask("Which drink is the least sweet?", &menu).await;
    println!("\nAssistant: {reply}");

    system.shutdown().await?;
    Ok(())
}
