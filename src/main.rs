mod domain;
mod pricing;
mod messages;
mod clients;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod order_actor;

use rust_decimal_macros::dec;
use tracing::{info, Instrument};
use crate::domain::{Customer, OrderStatus, Product};
use crate::messages::{ApplyDiscount, CreateOrder, OrderQuery, PlaceOrder};
use crate::app_system::{CheckoutConfig, CheckoutSystem, setup_tracing};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = CheckoutConfig::from_env()?;
    let system = CheckoutSystem::new(&config);

    let customer = Customer::new(1, "John Doe", "Cool Streem 10, London N13LR");
    let tv = Product::new(1, "Awesome TV", dec!(10.50));
    let pc = Product::new(2, "Awesome PC", dec!(150.99));

    // Simulates the incoming API calls of a checkout
    let span = tracing::info_span!("checkout", customer = %customer.name);
    let order = async {
        let order_id = system.checkout_client.create_order(CreateOrder {
            customer_id: customer.id,
            cart: vec![tv, pc],
        }).await?;

        system.checkout_client.apply_discount(ApplyDiscount {
            order_id,
            discount_code: Some("BlackFridaySpecial".to_string()),
        }).await?;

        system.checkout_client.place_order(PlaceOrder {
            order_id,
            order_status: OrderStatus::Ordered,
        }).await?;

        system.checkout_client.get_order(OrderQuery { order_id }).await
    }
    .instrument(span)
    .await?;

    info!(order_id = %order.id, customer_id = %order.customer_id, status = %order.status, "Order info");
    info!(products = order.cart.len(), "Cart");
    for product in &order.cart {
        info!(name = %product.name, price = %product.price, "Cart item");
    }
    info!(
        code = order.discount_code_applied.as_deref().unwrap_or("none"),
        percent = %(order.discount_rate * dec!(100)).normalize(),
        "Discount code applied"
    );
    info!(shipping = %order.shipping, total = %order.total.round_dp(2), "Totals");

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
