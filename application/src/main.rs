use std::{io, sync::OnceLock};

use application::{Args, Config, Report, Service};
use service::{
    infra::clock,
    query::{report::Breakdown, FetchDataset, ListSales},
    read::sale::list,
    Query as _,
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    _ = start().await;
}

async fn start() -> Result<(), ()> {
    let args = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let config = Config::new(&args.config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(config.log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let config = config.service().map_err(|e| {
        log::error!("invalid dataset configuration: {e}");
    })?;

    let service = Service::synthetic(config, clock::System);

    let filter = args.filter();
    if let Some(filter) = &filter {
        log::info!("filtering sales with {filter:?}");
    }
    let dataset = service
        .execute(FetchDataset { filter })
        .await
        .map_err(|e| {
            log::error!("failed to fetch dataset: {e}");
        })?;

    let breakdown = service
        .execute(Breakdown {
            sales: &dataset.sales,
        })
        .await
        .unwrap_or_else(|e| match e {});

    let page_size = args.page.get();
    let arguments =
        list::Arguments::new(Some(page_size), None, None, None, page_size)
            .ok_or_else(|| {
                log::error!("`{page_size}` is not a valid page size");
            })?;
    let page = service
        .execute(ListSales {
            sales: &dataset.sales,
            selector: list::Selector {
                arguments,
                filter: list::Filter::default(),
            },
        })
        .await
        .unwrap_or_else(|e| match e {});

    println!(
        "{}",
        Report {
            dataset: &dataset,
            breakdown: &breakdown,
            page: &page,
        },
    );

    Ok(())
}
