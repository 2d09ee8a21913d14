//! Profiling for the search, built with `--features instrumentation`.
//!
//! Two things are collected until the process exits: wall time per tracing
//! span (the search entry points and the heuristics), and the `SearchStats`
//! of every move the agents select.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tracing::span;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

use crate::search::SearchStats;

#[derive(Clone, Copy, Default)]
struct SpanTiming {
    calls: u64,
    total: Duration,
}

#[derive(Clone, Copy, Default)]
struct SearchTotals {
    searches: u64,
    nodes: u64,
    leaves: u64,
    cutoffs: u64,
    deadline_polls: u64,
}

static SPAN_TIMINGS: Lazy<Mutex<HashMap<&'static str, SpanTiming>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

static SEARCH_TOTALS: Lazy<Mutex<SearchTotals>> =
    Lazy::new(|| Mutex::new(SearchTotals::default()));

// a poisoned lock only means a panic elsewhere; the counters are still usable
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Adds the counters of one completed `select_move` to the totals.
pub fn record_search(stats: &SearchStats) {
    let mut totals = lock(&SEARCH_TOTALS);
    totals.searches += 1;
    totals.nodes += stats.nodes() as u64;
    totals.leaves += stats.leaves() as u64;
    totals.cutoffs += stats.cutoffs() as u64;
    totals.deadline_polls += stats.deadline_polls() as u64;
}

/// Stamps each span on entry and charges the elapsed time to its name on exit.
struct SpanTimer;

impl<S> Layer<S> for SpanTimer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_enter(&self, id: &span::Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(Instant::now());
        }
    }

    fn on_exit(&self, id: &span::Id, ctx: Context<'_, S>) {
        let span = match ctx.span(id) {
            Some(span) => span,
            None => return,
        };
        let entered = match span.extensions_mut().remove::<Instant>() {
            Some(entered) => entered,
            None => return,
        };

        let mut timings = lock(&SPAN_TIMINGS);
        let timing = timings.entry(span.name()).or_default();
        timing.calls += 1;
        timing.total += entered.elapsed();
    }
}

/// Installs the span timer as the global subscriber. Span events are also
/// printed when `RUST_LOG` is set to anything but `off`.
pub fn init_tracing() {
    let log_spans = std::env::var("RUST_LOG")
        .map_or(false, |filter| !filter.is_empty() && filter != "off");

    let installed = if log_spans {
        let events = tracing_subscriber::fmt::layer().with_target(false).compact();
        tracing::subscriber::set_global_default(
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(SpanTimer)
                .with(events),
        )
    } else {
        tracing::subscriber::set_global_default(
            tracing_subscriber::registry()
                .with(EnvFilter::new("trace"))
                .with(SpanTimer),
        )
    };

    if let Err(err) = installed {
        eprintln!("failed to install tracing subscriber: {}", err);
    }
}

/// Prints the search counters and the span timings, slowest span first.
pub fn print_timing_statistics() {
    let totals = *lock(&SEARCH_TOTALS);
    let mut timings: Vec<(&'static str, SpanTiming)> = lock(&SPAN_TIMINGS)
        .iter()
        .map(|(name, timing)| (*name, *timing))
        .collect();
    timings.sort_by(|a, b| b.1.total.cmp(&a.1.total));

    eprintln!("\n{:=<72}", "");
    if totals.searches == 0 {
        eprintln!("No searches recorded.");
    } else {
        let per_search = |count: u64| count as f64 / totals.searches as f64;
        eprintln!("{} searches", totals.searches);
        eprintln!("{:<16} {:>14} {:>16}", "Counter", "Total", "Per search");
        for (label, count) in [
            ("nodes", totals.nodes),
            ("leaves", totals.leaves),
            ("cutoffs", totals.cutoffs),
            ("deadline polls", totals.deadline_polls),
        ]
        .iter()
        {
            eprintln!("{:<16} {:>14} {:>16.1}", label, count, per_search(*count));
        }
    }

    eprintln!("{:-<72}", "");
    if timings.is_empty() {
        eprintln!("No spans timed.");
        return;
    }
    eprintln!(
        "{:<32} {:>10} {:>12} {:>14}",
        "Span", "Calls", "Total (ms)", "Avg (µs)"
    );
    for (name, timing) in timings.iter().filter(|(_, timing)| timing.calls > 0) {
        let total_ms = timing.total.as_secs_f64() * 1_000.0;
        let avg_us = timing.total.as_secs_f64() * 1_000_000.0 / timing.calls as f64;
        eprintln!(
            "{:<32} {:>10} {:>12.2} {:>14.2}",
            name, timing.calls, total_ms, avg_us
        );
    }
    eprintln!("{:=<72}\n", "");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_search_accumulates_counters() {
        let before = *lock(&SEARCH_TOTALS);
        record_search(&SearchStats::default());
        let after = *lock(&SEARCH_TOTALS);

        // agent tests running in parallel may record searches too
        assert!(after.searches > before.searches);
        assert!(after.nodes >= before.nodes);
    }
}
