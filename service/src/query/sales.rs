//! [`Query`] collection related to lists of [`Sale`]s.

use std::convert::Infallible;

use crate::{
    domain::Sale,
    read::sale::list::{self, Filter},
    Query, Service,
};

/// [`Query`] narrowing [`Sale`]s with a [`Filter`].
#[derive(Clone, Copy, Debug)]
pub struct ApplyFilter<'s> {
    /// [`Sale`]s to narrow.
    pub sales: &'s [Sale],

    /// [`Filter`] to apply.
    pub filter: &'s Filter,
}

impl<Src> Query<ApplyFilter<'_>> for Service<Src> {
    type Ok = Vec<Sale>;
    type Err = Infallible;

    async fn execute(
        &self,
        ApplyFilter { sales, filter }: ApplyFilter<'_>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(filter.apply(sales))
    }
}

/// [`Query`] selecting a [`list::Page`] of [`Sale`]s.
#[derive(Clone, Debug)]
pub struct ListSales<'s> {
    /// [`Sale`]s to select from, in their listing order.
    pub sales: &'s [Sale],

    /// [`list::Selector`] of the [`list::Page`].
    pub selector: list::Selector,
}

impl<Src> Query<ListSales<'_>> for Service<Src> {
    type Ok = list::Page;
    type Err = Infallible;

    async fn execute(
        &self,
        ListSales { sales, selector }: ListSales<'_>,
    ) -> Result<Self::Ok, Self::Err> {
        let list::Selector { arguments, filter } = selector;

        let filtered = filter.apply(sales);
        let (page, has_more) = arguments.window(&filtered, |s| &s.id);

        Ok(list::Page::new(
            &arguments,
            page.iter().map(|s| (s.id, s.clone())),
            has_more,
        ))
    }
}

/// [`Query`] counting [`Sale`]s passing a [`Filter`].
#[derive(Clone, Copy, Debug)]
pub struct CountSales<'s> {
    /// [`Sale`]s to count.
    pub sales: &'s [Sale],

    /// [`Filter`] the counted [`Sale`]s pass.
    pub filter: &'s Filter,
}

impl<Src> Query<CountSales<'_>> for Service<Src> {
    type Ok = list::TotalCount;
    type Err = Infallible;

    async fn execute(
        &self,
        CountSales { sales, filter }: CountSales<'_>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(sales.iter().filter(|s| filter.matches(s)).count().into())
    }
}

#[cfg(test)]
mod spec {
    use common::{pagination::Kind as PageKind, Money};

    use crate::{
        domain::{vehicle::Kind, Sale},
        fixture,
        read::sale::list::{
            Arguments, Filter, Needle, PriceRange, Selector, TotalCount,
        },
        Config, Query as _, Service,
    };

    use super::{ApplyFilter, CountSales, ListSales};

    fn service() -> Service<()> {
        Service::new(
            Config {
                size: crate::read::dataset::Size::default(),
                since: common::DateTime::UNIX_EPOCH,
                ttl: std::time::Duration::from_secs(30),
                seed: Some(1),
            },
            (),
        )
    }

    fn pool() -> Vec<Sale> {
        (0..7)
            .map(|i| {
                let kind = if i % 2 == 0 { Kind::Car } else { Kind::Bike };
                fixture::sale_of(kind, "Honda", 10_000 + i * 1_000, 100, 50)
            })
            .collect()
    }

    fn prices(sales: impl IntoIterator<Item = Money>) -> Vec<String> {
        sales.into_iter().map(|m| m.to_string()).collect()
    }

    #[tokio::test]
    async fn applies_filter() {
        let sales = pool();
        let filter = Filter {
            kind: Some(Kind::Bike),
            ..Filter::default()
        };

        let filtered = service()
            .execute(ApplyFilter {
                sales: &sales,
                filter: &filter,
            })
            .await
            .unwrap();

        assert_eq!(
            prices(filtered.iter().map(|s| s.price)),
            ["11000", "13000", "15000"],
        );
    }

    #[tokio::test]
    async fn lists_pages_forward() {
        let sales = pool();
        let service = service();

        let args = Arguments::new(Some(3), None, None, None, 10).unwrap();
        let page = service
            .execute(ListSales {
                sales: &sales,
                selector: Selector {
                    arguments: args,
                    filter: Filter::default(),
                },
            })
            .await
            .unwrap();

        assert_eq!(page.kind, PageKind::Forward);
        assert_eq!(
            prices(page.edges.iter().map(|e| e.node.price)),
            ["10000", "11000", "12000"],
        );
        let info = page.page_info();
        assert!(info.has_next_page);
        assert_eq!(info.end_cursor, Some(sales[2].id));

        let args =
            Arguments::new(Some(3), info.end_cursor, None, None, 10).unwrap();
        let next = service
            .execute(ListSales {
                sales: &sales,
                selector: Selector {
                    arguments: args,
                    filter: Filter::default(),
                },
            })
            .await
            .unwrap();

        assert_eq!(
            prices(next.edges.iter().map(|e| e.node.price)),
            ["13000", "14000", "15000"],
        );
        assert!(next.page_info().has_next_page);
    }

    #[tokio::test]
    async fn lists_filtered_pages_backward() {
        let sales = pool();
        let filter = Filter {
            kind: Some(Kind::Car),
            ..Filter::default()
        };

        let args = Arguments::new(None, None, Some(2), None, 10).unwrap();
        let page = service()
            .execute(ListSales {
                sales: &sales,
                selector: Selector {
                    arguments: args,
                    filter,
                },
            })
            .await
            .unwrap();

        assert_eq!(
            prices(page.edges.iter().map(|e| e.node.price)),
            ["14000", "16000"],
        );
        assert!(page.page_info().has_previous_page);
        assert!(!page.page_info().has_next_page);
    }

    #[tokio::test]
    async fn counts_sales() {
        let sales = pool();
        let filter = Filter {
            brand: Needle::new("HON"),
            price: Some(PriceRange {
                min: Money::whole(12_000),
                max: Money::whole(14_000),
            }),
            ..Filter::default()
        };

        let count = service()
            .execute(CountSales {
                sales: &sales,
                filter: &filter,
            })
            .await
            .unwrap();

        assert_eq!(count, TotalCount::from(3));
    }
}
