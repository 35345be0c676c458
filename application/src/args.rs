//! [`Args`] definitions.

use std::num::NonZeroUsize;

use clap::Parser;
use common::{DateTime, Money};
use service::{
    domain::vehicle,
    read::sale::list::{Filter, Needle, Period, PriceRange},
};

/// Sales analytics report over generated vehicle sales.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Kind of the sold vehicles (`car` or `bike`).
    #[arg(long)]
    pub kind: Option<vehicle::Kind>,

    /// Case-insensitive part of the vehicle brand.
    #[arg(long)]
    pub brand: Option<String>,

    /// Case-insensitive part of the sale region.
    #[arg(long)]
    pub region: Option<String>,

    /// RFC 3339 date and time the sales happened not before.
    ///
    /// Applies only together with `--to`.
    #[arg(long, value_parser = DateTime::from_rfc3339)]
    pub from: Option<DateTime>,

    /// RFC 3339 date and time the sales happened not after.
    ///
    /// Applies only together with `--from`.
    #[arg(long, value_parser = DateTime::from_rfc3339)]
    pub to: Option<DateTime>,

    /// Minimal sale price.
    #[arg(long)]
    pub min_price: Option<Money>,

    /// Maximal sale price.
    #[arg(long)]
    pub max_price: Option<Money>,

    /// Number of sales to list, at least one.
    #[arg(short, long, default_value = "10")]
    pub page: NonZeroUsize,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }

    /// Returns the [`Filter`] described by these [`Args`].
    ///
    /// [`None`] is returned if no filtering is requested at all.
    #[must_use]
    pub fn filter(&self) -> Option<Filter> {
        let price = (self.min_price.is_some() || self.max_price.is_some())
            .then(|| {
                let default = PriceRange::default();
                PriceRange {
                    min: self.min_price.unwrap_or(default.min),
                    max: self.max_price.unwrap_or(default.max),
                }
            });

        let filter = Filter {
            kind: self.kind,
            brand: self.brand.as_deref().and_then(Needle::new),
            region: self.region.as_deref().and_then(Needle::new),
            period: Period {
                start: self.from.map(DateTime::coerce),
                end: self.to.map(DateTime::coerce),
            },
            price,
        };
        (!filter.is_empty()).then_some(filter)
    }
}

#[cfg(test)]
mod spec {
    use clap::Parser as _;
    use common::{DateTime, Money};
    use service::{
        domain::vehicle,
        read::sale::list::{Needle, PriceRange},
    };

    use super::Args;

    fn args(flags: &[&str]) -> Args {
        Args::try_parse_from(["report"].iter().chain(flags)).unwrap()
    }

    #[test]
    fn defaults_to_no_filter() {
        let args = args(&[]);

        assert_eq!(args.config, "config.toml");
        assert_eq!(args.page.get(), 10);
        assert_eq!(args.filter(), None);
    }

    #[test]
    fn ignores_empty_needles() {
        assert_eq!(args(&["--brand", "", "--region", ""]).filter(), None);
    }

    #[test]
    fn builds_filter() {
        let filter = args(&[
            "--kind",
            "Bike",
            "--brand",
            "HON",
            "--region",
            "asia",
            "--from",
            "2024-02-01T00:00:00Z",
            "--to",
            "2024-03-01T00:00:00Z",
        ])
        .filter()
        .unwrap();

        assert_eq!(filter.kind, Some(vehicle::Kind::Bike));
        assert_eq!(filter.brand, Needle::new("hon"));
        assert_eq!(filter.region, Needle::new("Asia"));
        assert_eq!(
            filter.period.start.map(|d| d.coerce::<()>()),
            Some(DateTime::from_rfc3339("2024-02-01T00:00:00Z").unwrap()),
        );
        assert_eq!(filter.price, None);
    }

    #[test]
    fn completes_price_range_with_defaults() {
        let filter = args(&["--min-price", "5000"]).filter().unwrap();

        assert_eq!(
            filter.price,
            Some(PriceRange {
                min: Money::whole(5_000),
                ..PriceRange::default()
            }),
        );

        let filter = args(&["--max-price", "20000.50"]).filter().unwrap();
        let price = filter.price.unwrap();
        assert_eq!(price.min, Money::ZERO);
        assert_eq!(price.max.to_string(), "20000.50");
    }

    #[test]
    fn rejects_malformed_flags() {
        let parse = |flags: &[&str]| {
            Args::try_parse_from(["report"].iter().chain(flags))
        };

        assert!(parse(&["--kind", "truck"]).is_err());
        assert!(parse(&["--from", "2024-02-01"]).is_err());
        assert!(parse(&["--min-price", "-1"]).is_err());
        assert!(parse(&["--page", "0"]).is_err());
        assert_eq!(parse(&["--page", "3"]).unwrap().page.get(), 3);
    }
}
