//! [`Report`] definition.

use std::fmt;

use rust_decimal::Decimal;
use service::{
    query::{dataset, report::breakdown},
    read::sale::list,
};

/// Terminal report of the fetched sales.
#[derive(Clone, Copy, Debug)]
pub struct Report<'r> {
    /// Fetched [`dataset::Output`].
    pub dataset: &'r dataset::Output,

    /// [`breakdown::Output`] of the fetched sales.
    pub breakdown: &'r breakdown::Output,

    /// [`list::Page`] of the fetched sales to list.
    pub page: &'r list::Page,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            dataset,
            breakdown,
            page,
        } = *self;
        let metrics = &dataset.metrics;

        writeln!(
            f,
            "{} sales of {} vehicles",
            dataset.sales.len(),
            dataset.vehicles.len(),
        )?;
        writeln!(f)?;
        row(f, "Total sales", metrics.total_sales)?;
        row(f, "Total revenue", metrics.total_revenue)?;
        row(f, "Average sale price", metrics.average_sale_price)?;
        row(f, "Total profit", metrics.total_profit)?;
        row(
            f,
            "Conversion rate",
            format_args!(
                "{}%",
                (metrics.conversion_rate.value() * Decimal::ONE_HUNDRED)
                    .normalize(),
            ),
        )?;
        row(f, "Top selling brand", Optional(&metrics.top_selling_brand))?;
        row(f, "Top selling model", Optional(&metrics.top_selling_model))?;

        writeln!(f)?;
        writeln!(f, "Sales by month:")?;
        for m in &breakdown.months {
            row(f, &m.month.to_string(), format_args!("{:>5}", m.sales))?;
        }

        writeln!(f)?;
        writeln!(f, "Sales by kind:")?;
        for (kind, count) in &breakdown.kinds {
            row(f, &kind.to_string(), format_args!("{count:>5}"))?;
        }

        writeln!(f)?;
        writeln!(f, "Top brands by revenue:")?;
        for (brand, revenue) in &breakdown.top_brands {
            row(f, brand.as_ref(), revenue)?;
        }

        writeln!(f)?;
        writeln!(f, "Latest sales:")?;
        for list::Edge { node: sale, .. } in &page.edges {
            writeln!(
                f,
                "  {}  {:<5} {:<28} {:<14} {:>10}",
                sale.sold_at.to_rfc3339(),
                sale.vehicle.kind.to_string(),
                sale.vehicle.model.to_string(),
                sale.region.name(),
                sale.price.to_string(),
            )?;
        }
        if page.page_info().has_next_page {
            writeln!(
                f,
                "  ... and {} more",
                dataset.sales.len() - page.edges.len(),
            )?;
        }
        Ok(())
    }
}

/// Writes a single labeled `value` line.
fn row(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: impl fmt::Display,
) -> fmt::Result {
    writeln!(f, "  {label:<20} {value}")
}

/// [`fmt::Display`]s an [`Option`] as `-` when there is nothing.
struct Optional<'v, T>(&'v Option<T>);

impl<T: fmt::Display> fmt::Display for Optional<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => fmt::Display::fmt(v, f),
            None => f.write_str("-"),
        }
    }
}
