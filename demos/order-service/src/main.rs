use anyhow::Context;
use autowire::prelude::*;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing_subscriber::EnvFilter;

pub trait Catalog: Send + Sync {
    fn price_of(&self, sku: &str) -> Option<u64>;
}

#[derive(Default, Injectable)]
pub struct InMemoryCatalog {
    prices: RwLock<HashMap<String, u64>>,
}

impl InMemoryCatalog {
    fn with_prices(prices: &[(&str, u64)]) -> Self {
        let prices = prices
            .iter()
            .map(|(sku, price)| (sku.to_string(), *price))
            .collect();
        Self {
            prices: RwLock::new(prices),
        }
    }
}

impl Catalog for InMemoryCatalog {
    fn price_of(&self, sku: &str) -> Option<u64> {
        self.prices.read().ok()?.get(sku).copied()
    }
}

interface!(dyn Catalog => [InMemoryCatalog]);

/// Tax rate in basis points.
pub struct TaxRate(pub u64);

#[derive(Default, Injectable)]
pub struct AuditLog {
    entries: RwLock<Vec<String>>,
}

impl AuditLog {
    fn record(&self, entry: String) {
        if let Ok(mut entries) = self.entries.write() {
            entries.push(entry);
        }
    }

    fn count(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }
}

#[derive(Default, Injectable)]
pub struct PricingSvc {
    #[inject]
    catalog: Inject<dyn Catalog>,
    #[inject]
    audit: Inject<AuditLog>,
}

impl PricingSvc {
    fn quote(&self, sku: &str, quantity: u64) -> Option<u64> {
        let total = self.catalog.load().price_of(sku)? * quantity;
        self.audit.load().record(format!("quoted {quantity} x {sku} = {total}"));
        Some(total)
    }
}

#[derive(Default, Injectable)]
pub struct OrderSvc {
    #[inject]
    pricing: Inject<PricingSvc>,
    #[inject]
    audit: Inject<AuditLog>,
}

#[derive(Default, Injectable)]
pub struct AppConfig;

#[configuration]
impl AppConfig {
    #[provide]
    fn catalog(&self) -> InMemoryCatalog {
        InMemoryCatalog::with_prices(&[("apple", 120), ("pear", 95)])
    }

    #[provide]
    fn tax_rate(&self) -> TaxRate {
        TaxRate(825)
    }
}

fn checkout(orders: Arc<OrderSvc>, tax: Arc<TaxRate>) -> Option<u64> {
    let net = orders.pricing.load().quote("apple", 3)?;
    Some(net + net * tax.0 / 10_000)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    tracing::info!("Wiring order service...");

    let injector = Injector::builder()
        .configs(Arc::new(AppConfig))
        .apply(Arc::new(OrderSvc::default()))
        .build();

    let total = injector
        .invoke(checkout)
        .context("checkout dependencies are not registered")?
        .context("unknown sku")?;

    let orders = injector
        .get::<OrderSvc>()
        .context("order service was not registered")?;
    let audit = orders.audit.try_get()?;
    let shared_log = Arc::ptr_eq(&audit, &orders.pricing.try_get()?.audit.try_get()?);
    tracing::info!(
        "Checkout total: {} ({} audit entries, shared log: {})",
        total,
        audit.count(),
        shared_log
    );

    Ok(())
}
