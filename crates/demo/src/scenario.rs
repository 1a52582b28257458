//! The demonstration run: print orders, sort people, sort orders by price,
//! clone an order.

use std::io::{self, Write};
use std::sync::Arc;

use tracing::info;

use bookshop_core::Clock;
use bookshop_parties::Customer;
use bookshop_people::Person;
use bookshop_products::{Book, Product};
use bookshop_sales::{Order, sort_by_price};

/// Sample customers and books the demo orders are built from.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub kielan: Arc<Customer>,
    pub lebkowski: Arc<Customer>,
    pub krzyzacy: Arc<dyn Product>,
    pub delirium: Arc<dyn Product>,
}

impl Catalog {
    pub fn sample() -> Self {
        Self {
            kielan: Arc::new(Customer::new(
                "Joanna",
                "Kielan",
                "Warszawa, ul. Kondratowicza 1",
                "joanna.kielan@gmail.com",
            )),
            lebkowski: Arc::new(Customer::new(
                "Mateusz",
                "Lebkowski",
                "Warszawa, ul. Żurawia 4",
                "mateusz.lebkowski@gmail.com",
            )),
            krzyzacy: Arc::new(Book::new(
                "Krzyżacy",
                "Lektura szkolna",
                99.99,
                "Henryk Sienkiewicz",
                1899,
            )),
            delirium: Arc::new(Book::new(
                "Delirium",
                "Young Adult",
                49.99,
                "Lauren Oliver",
                2011,
            )),
        }
    }

    /// `(Kielan, 1 x Delirium)` and `(Lebkowski, 2 x Krzyżacy)`, in that order.
    pub fn sample_orders(&self) -> (Order, Order) {
        (
            Order::new(Arc::clone(&self.kielan), Arc::clone(&self.delirium), 1),
            Order::new(Arc::clone(&self.lebkowski), Arc::clone(&self.krzyzacy), 2),
        )
    }
}

/// Three people sharing a birth year, deliberately out of order.
pub fn sample_people() -> Vec<Person> {
    vec![
        Person::new("Mateusz", "Lebkowski", 2000),
        Person::new("Patryk", "Wiecek", 2000),
        Person::new("Joanna", "Kielan", 2000),
    ]
}

/// Run the whole demonstration, writing every rendering to `out`.
///
/// Ages are computed against `clock`.
pub fn run<W: Write>(out: &mut W, clock: &dyn Clock) -> io::Result<()> {
    info!(year = clock.current_year(), "running bookshop demo");

    let catalog = Catalog::sample();
    let (first_order, second_order) = catalog.sample_orders();

    writeln!(out, "{first_order}")?;
    writeln!(out, "{second_order}")?;

    let mut people = sample_people();
    people.sort();
    info!(count = people.len(), "sorted people");

    writeln!(out, "\nSorted people:")?;
    for person in &people {
        writeln!(out, "{}", person.render_at(clock))?;
    }

    let mut orders = vec![&second_order, &first_order];
    sort_by_price(&mut orders);
    info!(count = orders.len(), "sorted orders by price");

    writeln!(out, "\nSorted orders by price:")?;
    for order in &orders {
        writeln!(out, "{order}")?;
    }

    let mut cloned_order = first_order.clone();
    cloned_order.set_quantity(4);
    info!(
        original_quantity = first_order.quantity(),
        cloned_quantity = cloned_order.quantity(),
        "cloned order"
    );

    writeln!(out, "\nOriginal order:")?;
    writeln!(out, "{first_order}")?;
    writeln!(out, "\nCloned order:")?;
    writeln!(out, "{cloned_order}")?;

    info!("bookshop demo finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshop_core::FixedClock;

    #[test]
    fn sample_orders_share_catalog_entities() {
        let catalog = Catalog::sample();
        let (first, second) = catalog.sample_orders();

        assert_eq!(first.customer().surname(), "Kielan");
        assert_eq!(first.product().name(), "Delirium");
        assert_eq!(first.quantity(), 1);
        assert_eq!(second.customer().surname(), "Lebkowski");
        assert_eq!(second.product().name(), "Krzyżacy");
        assert_eq!(second.quantity(), 2);

        let (again, _) = catalog.sample_orders();
        assert!(first.shares_customer_with(&again));
        assert!(first.shares_product_with(&again));
    }

    #[test]
    fn sample_people_share_a_birth_year() {
        let people = sample_people();
        assert_eq!(people.len(), 3);
        assert!(people.iter().all(|p| p.birth_year() == 2000));
    }

    #[test]
    fn propagates_write_errors() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = run(&mut FailingWriter, &FixedClock(2024)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
