use rand::Rng;
use tracing::{info, warn};

use crate::{
    args::SeederArgs,
    error::{AppError, AppResult, ValidationError},
    generate::{Generator, GeneratorSettings, SeedGenerator},
    http::{Dispatcher, DryRunSink, EndpointUrls, HttpSink, PayloadSink, build_client},
    metrics::RunMetrics,
    shutdown::{setup_signal_shutdown_handler, shutdown_channel},
};

use super::summary::print_summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunOutcome {
    Completed,
    Interrupted,
}

/// Runs a full seeding pass with the sink selected by `args`.
///
/// # Errors
///
/// Returns an error for an invalid base URL, a client that cannot be built,
/// an aborting transport failure, or transport failures tolerated by
/// `--keep-going`.
pub(crate) async fn run_seed(args: &SeederArgs) -> AppResult<RunMetrics> {
    let urls = EndpointUrls::parse(&args.base_url)?;
    if args.dry_run {
        info!("Dry run: payloads are printed instead of sent.");
        return run_with_sink(args, DryRunSink).await;
    }
    let client = build_client(args)?;
    run_with_sink(args, HttpSink::new(client, urls)).await
}

pub(crate) async fn run_with_sink<S>(args: &SeederArgs, sink: S) -> AppResult<RunMetrics>
where
    S: PayloadSink,
{
    let settings = GeneratorSettings {
        max_tags: args.max_tags,
        path_length: args.path_length,
    };
    let mut generator = SeedGenerator::from_seed(settings, args.seed);
    let (shutdown_tx, shutdown_rx) = shutdown_channel();
    let mut dispatcher = Dispatcher::new(sink, args.keep_going)?.with_shutdown(shutdown_rx);
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);

    info!(
        "Seeding {} with {} items (seed: {})",
        args.base_url,
        args.items.get(),
        args.seed
            .map_or_else(|| "random".to_owned(), |seed| seed.to_string())
    );
    let result = generate_test_data(&mut generator, &mut dispatcher, args.items.get()).await;

    drop(shutdown_tx.send(()));
    signal_handle.await?;

    let (_sink, metrics) = dispatcher.into_parts();
    if !args.no_summary {
        print_summary(&metrics);
    }

    if result? == RunOutcome::Interrupted {
        warn!(
            "Stopped after {} of {} items.",
            metrics.iterations(),
            args.items.get()
        );
    }
    if metrics.totals().transport_errors > 0 {
        return Err(AppError::validation(ValidationError::TransportErrors));
    }
    Ok(metrics)
}

/// Runs `items` iterations. Each one generates a fresh item, then flips a
/// coin for the URL call and another for the snippet call.
///
/// Every iteration yields to the runtime first so the signal task gets to
/// run even when the sink never awaits. A shutdown is honored between
/// calls, including inside an iteration.
///
/// # Errors
///
/// Propagates a transport failure from the dispatcher.
pub(crate) async fn generate_test_data<S, R>(
    generator: &mut Generator<R>,
    dispatcher: &mut Dispatcher<S>,
    items: u64,
) -> AppResult<RunOutcome>
where
    S: PayloadSink,
    R: Rng,
{
    for _ in 0..items {
        tokio::task::yield_now().await;
        if dispatcher.stop_requested() {
            return Ok(RunOutcome::Interrupted);
        }

        let item = generator.next_item();
        if generator.coin_flip() {
            dispatcher.send_url(&item.url, &item.tags).await?;
        }
        if generator.coin_flip() {
            if dispatcher.stop_requested() {
                return Ok(RunOutcome::Interrupted);
            }
            dispatcher
                .send_snippet(&item.url, &item.snippet, &item.tags)
                .await?;
        }
        dispatcher.metrics_mut().record_iteration();
    }
    Ok(RunOutcome::Completed)
}
