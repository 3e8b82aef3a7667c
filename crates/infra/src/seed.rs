//! Deterministic demo data.
//!
//! Seeding runs once at startup against empty stores. A fixed RNG seed keeps
//! the generated data set identical across restarts, which makes manual
//! poking at the API repeatable.

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use forgecrm_core::{CustomerId, DetailId, ProductId};
use forgecrm_customers::{Customer, CustomerDetail, CustomerRepository};
use forgecrm_products::{ProductDetail, ProductRepository};

const FIRST_NAMES: &[&str] = &[
    "Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald", "Margaret", "Tony", "Niklaus", "Radia",
    "John", "Frances", "Dennis", "Kathleen", "Ken",
];

const LAST_NAMES: &[&str] = &[
    "Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth", "Hamilton", "Hoare", "Wirth",
    "Perlman", "Backus", "Allen", "Ritchie", "Booth", "Thompson",
];

const STREETS: &[&str] = &[
    "Main St", "Oak Ave", "Maple Dr", "Cedar Ln", "Elm St", "Pine Rd", "Birch Blvd", "Walnut Way",
];

const CITIES: &[&str] = &[
    "Springfield", "Riverton", "Fairview", "Kingston", "Ashland", "Georgetown", "Salem", "Clayton",
];

const PRODUCT_ADJECTIVES: &[&str] = &[
    "Rustic", "Sleek", "Ergonomic", "Durable", "Compact", "Refined", "Practical", "Handcrafted",
];

const PRODUCT_NOUNS: &[&str] = &[
    "Widget", "Gadget", "Keyboard", "Lamp", "Chair", "Notebook", "Bottle", "Backpack", "Mug",
    "Cable",
];

/// Knobs for the generated data set.
#[derive(Debug, Clone, Copy)]
pub struct SeedConfig {
    pub customers: usize,
    pub rng_seed: u64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            customers: 25,
            rng_seed: 42,
        }
    }
}

/// Populate both stores with generated customers, details, and products.
///
/// No-op when the customer store already has data, so a warm restart never
/// duplicates records.
pub fn seed_stores(
    customers: &dyn CustomerRepository,
    products: &dyn ProductRepository,
    config: SeedConfig,
) {
    if !customers.is_empty() {
        tracing::debug!("stores already populated, skipping seed");
        return;
    }

    let mut rng = StdRng::seed_from_u64(config.rng_seed);
    let mut product_count = 0usize;

    for i in 0..config.customers {
        let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
        let name = format!("{first} {last}");
        // Index keeps emails unique across duplicate name draws.
        let email = format!("{}.{}{}@example.com", first.to_lowercase(), last.to_lowercase(), i);
        let phone = format!(
            "+1 555-{:04}",
            rng.gen_range(0..10_000),
        );
        // Spread creation times so listing order is meaningful.
        let created = Utc::now() - Duration::minutes((config.customers - i) as i64);

        let mut customer = match Customer::new(CustomerId::new(), &name, &email, &phone, created) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(error = %e, "skipping invalid generated customer");
                continue;
            }
        };
        let customer_id = customer.id_typed();

        if rng.gen_bool(0.7) {
            let address = format!(
                "{} {}, {}",
                rng.gen_range(1..1000),
                STREETS[rng.gen_range(0..STREETS.len())],
                CITIES[rng.gen_range(0..CITIES.len())],
            );
            let notes = if rng.gen_bool(0.3) { "Prefers email contact" } else { "" };
            if let Ok(detail) =
                CustomerDetail::new(DetailId::new(), &address, notes, customer_id, created)
            {
                customer.set_detail(detail, created);
            }
        }

        customers.add(customer);

        for _ in 0..rng.gen_range(1..=5) {
            let product_name = format!(
                "{} {}",
                PRODUCT_ADJECTIVES[rng.gen_range(0..PRODUCT_ADJECTIVES.len())],
                PRODUCT_NOUNS[rng.gen_range(0..PRODUCT_NOUNS.len())],
            );
            let price_cents = rng.gen_range(99..=99_999);
            let stock = rng.gen_range(0..=500);
            // Roughly one product in five stays unassigned.
            let owner = if rng.gen_bool(0.8) { Some(customer_id) } else { None };

            match ProductDetail::new(
                ProductId::new(),
                &product_name,
                "Seeded demo product",
                price_cents,
                stock,
                owner,
                created,
            ) {
                Ok(product) => {
                    products.add(product);
                    product_count += 1;
                }
                Err(e) => tracing::warn!(error = %e, "skipping invalid generated product"),
            }
        }
    }

    tracing::info!(
        customers = config.customers,
        products = product_count,
        "seeded in-memory stores"
    );
}
