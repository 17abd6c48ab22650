use std::cmp::Ordering;
use std::fs;
use std::io;
use std::io::Write;

use chrono::Local;
use chrono::NaiveDate;
use clap::ValueEnum;
use log::info;
use serde::Deserialize;

use crate::cli::ProductsArgs;
use crate::error::CliError;

/// A product card of the eco marketplace.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct Product {
    pub name: String,
    pub price: f64,
    pub expiry: NaiveDate,
    pub location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum PriceOrder {
    /// Keep the catalogue order.
    #[default]
    None,

    /// Cheapest first.
    LowToHigh,

    /// Most expensive first.
    HighToLow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum ExpiryFilter {
    /// Keep every product.
    #[default]
    All,

    /// Keep the products whose expiry date has been reached.
    Soon,

    /// Keep the products that expire after today.
    Later,
}

impl ExpiryFilter {
    fn keeps(self, product: &Product, today: NaiveDate) -> bool {
        match self {
            ExpiryFilter::All => true,
            ExpiryFilter::Soon => product.expiry <= today,
            ExpiryFilter::Later => product.expiry > today,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ProductFilters {
    pub price: PriceOrder,
    pub expiry: ExpiryFilter,
    pub location: String,
}

impl ProductFilters {
    const ANY_LOCATION: &str = "all";

    fn keeps(&self, product: &Product, today: NaiveDate) -> bool {
        let location = self.location == Self::ANY_LOCATION || product.location == self.location;
        location && self.expiry.keeps(product, today)
    }
}

impl From<&ProductsArgs> for ProductFilters {
    fn from(args: &ProductsArgs) -> Self {
        Self {
            price: args.price,
            expiry: args.expiry,
            location: args.location.clone(),
        }
    }
}

pub(crate) fn products(args: ProductsArgs) -> Result<(), CliError> {
    let text = fs::read_to_string(&args.file)?;
    let catalogue: Vec<Product> = serde_json::from_str(&text)?;
    let filters = ProductFilters::from(&args);

    let shown = apply_filters(&catalogue, &filters, Local::now().date_naive());

    info!(
        "ecodash shows {shown} of {total} product(s) from `{path}`",
        shown = shown.len(),
        total = catalogue.len(),
        path = args.file.display()
    );

    let mut stdout = io::stdout().lock();
    write_table(&mut stdout, &shown)?;

    Ok(())
}

/// Keeps the products matching `filters` and orders them by price.
///
/// Products with the same price keep their catalogue order.
pub(crate) fn apply_filters<'a>(
    catalogue: &'a [Product],
    filters: &ProductFilters,
    today: NaiveDate,
) -> Vec<&'a Product> {
    let mut shown: Vec<&Product> = catalogue
        .iter()
        .filter(|product| filters.keeps(product, today))
        .collect();

    match filters.price {
        PriceOrder::None => {}
        PriceOrder::LowToHigh => shown.sort_by(|a, b| by_price(a, b)),
        PriceOrder::HighToLow => shown.sort_by(|a, b| by_price(b, a)),
    }

    shown
}

fn by_price(a: &Product, b: &Product) -> Ordering {
    a.price.total_cmp(&b.price)
}

fn write_table<W: Write>(out: &mut W, products: &[&Product]) -> io::Result<()> {
    let name_width = products
        .iter()
        .map(|p| p.name.chars().count())
        .chain(std::iter::once("Name".len()))
        .max()
        .unwrap_or_default();

    writeln!(
        out,
        "{:<name_width$}  {:>10}  {:<10}  Location",
        "Name", "Price", "Expiry"
    )?;

    for product in products {
        writeln!(
            out,
            "{:<name_width$}  {:>10.2}  {:<10}  {}",
            product.name,
            product.price,
            product.expiry.format("%Y-%m-%d").to_string(),
            product.location
        )?;
    }

    Ok(())
}
