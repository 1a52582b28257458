//! Price-based ordering of orders.
//!
//! Sorting is done by callers; these are the key extractor and comparator they
//! plug into `sort_by`.

use core::borrow::Borrow;
use core::cmp::Ordering;

use crate::order::Order;

/// Sort key: the unit price of the ordered product.
pub fn price_key(order: &Order) -> f64 {
    order.product().price()
}

/// Compare two orders by [`price_key`].
///
/// Uses `f64::total_cmp`, so every price (NaN included) has a place and the
/// comparison is a total order.
pub fn cmp_by_price(a: &Order, b: &Order) -> Ordering {
    price_key(a).total_cmp(&price_key(b))
}

/// Stable ascending sort by product price.
///
/// Works on owned orders as well as on borrowed ones (`&mut [&Order]`), so a
/// caller can reorder a view without giving up the orders themselves.
pub fn sort_by_price<O: Borrow<Order>>(orders: &mut [O]) {
    tracing::debug!(count = orders.len(), "sorting orders by price");
    orders.sort_by(|a, b| cmp_by_price(a.borrow(), b.borrow()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use bookshop_parties::Customer;
    use bookshop_products::{Book, Product};
    use proptest::prelude::*;

    fn customer(first: &str, surname: &str) -> Arc<Customer> {
        Arc::new(Customer::new(
            first,
            surname,
            "Warszawa",
            format!("{}@example.com", first.to_lowercase()),
        ))
    }

    fn book(name: &str, price: f64) -> Arc<dyn Product> {
        Arc::new(Book::new(name, "", price, "Author", 2000))
    }

    #[test]
    fn price_key_reads_product_price() {
        let order = Order::new(customer("Joanna", "Kielan"), book("Delirium", 49.99), 1);
        assert_eq!(price_key(&order), 49.99);
    }

    #[test]
    fn sorts_sample_orders_cheapest_first() {
        let lebkowski = Order::new(
            customer("Mateusz", "Lebkowski"),
            book("Krzyżacy", 99.99),
            2,
        );
        let kielan = Order::new(customer("Joanna", "Kielan"), book("Delirium", 49.99), 1);

        let mut orders = vec![lebkowski, kielan];
        sort_by_price(&mut orders);

        assert_eq!(orders[0].customer().surname(), "Kielan");
        assert_eq!(orders[0].product().name(), "Delirium");
        assert_eq!(orders[0].quantity(), 1);
        assert_eq!(price_key(&orders[0]), 49.99);

        assert_eq!(orders[1].customer().surname(), "Lebkowski");
        assert_eq!(orders[1].product().name(), "Krzyżacy");
        assert_eq!(orders[1].quantity(), 2);
        assert_eq!(price_key(&orders[1]), 99.99);
    }

    #[test]
    fn equal_prices_keep_input_order() {
        let mut orders = vec![
            Order::new(customer("A", "First"), book("X", 10.0), 1),
            Order::new(customer("B", "Second"), book("Y", 5.0), 1),
            Order::new(customer("C", "Third"), book("Z", 10.0), 1),
        ];
        sort_by_price(&mut orders);

        let surnames: Vec<&str> = orders.iter().map(|o| o.customer().surname()).collect();
        assert_eq!(surnames, vec!["Second", "First", "Third"]);
    }

    #[test]
    fn sorts_borrowed_orders_without_moving_them() {
        let pricey = Order::new(customer("A", "A"), book("A", 20.0), 1);
        let cheap = Order::new(customer("B", "B"), book("B", 2.0), 1);

        let mut view: Vec<&Order> = vec![&pricey, &cheap];
        sort_by_price(&mut view);

        assert!(core::ptr::eq(view[0], &cheap));
        assert!(core::ptr::eq(view[1], &pricey));
    }

    #[test]
    fn comparator_orders_by_price_only() {
        let cheap = Order::new(customer("Z", "Z"), book("Z", 1.0), 100);
        let pricey = Order::new(customer("A", "A"), book("A", 2.0), 1);

        assert_eq!(cmp_by_price(&cheap, &pricey), Ordering::Less);
        assert_eq!(cmp_by_price(&pricey, &cheap), Ordering::Greater);
        assert_eq!(cmp_by_price(&cheap, &cheap), Ordering::Equal);
    }

    #[test]
    fn empty_and_single_lists_are_fine() {
        let mut none: Vec<Order> = Vec::new();
        sort_by_price(&mut none);
        assert!(none.is_empty());

        let mut one = vec![Order::new(customer("A", "A"), book("A", 3.0), 1)];
        sort_by_price(&mut one);
        assert_eq!(price_key(&one[0]), 3.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: after sorting, prices never decrease.
        #[test]
        fn sorted_prices_are_non_decreasing(
            prices in prop::collection::vec(-1_000_000.0f64..1_000_000.0f64, 0..20)
        ) {
            let shopper = customer("Joanna", "Kielan");
            let mut orders: Vec<Order> = prices
                .iter()
                .enumerate()
                .map(|(i, price)| Order::new(Arc::clone(&shopper), book(&format!("Book {i}"), *price), 1))
                .collect();

            sort_by_price(&mut orders);

            prop_assert_eq!(orders.len(), prices.len());
            for pair in orders.windows(2) {
                prop_assert!(price_key(&pair[0]) <= price_key(&pair[1]));
            }
        }
    }
}
