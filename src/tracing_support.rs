//! Logging and span timing.
//!
//! With the `tracing` feature enabled this re-exports the `tracing` macros the
//! crate uses and installs a `tracing_subscriber` stack on request.  With it
//! disabled the same names resolve to no-op replacements, so call sites never
//! need their own `cfg` attributes.

use std::time::Duration;

/// Accumulated time spent inside spans with a given name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanTiming {
    pub name: &'static str,
    pub total: Duration,
    pub count: usize,
}

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        sync::Once,
        time::{Duration, Instant},
    };

    use tracing::level_filters::LevelFilter;
    use tracing_subscriber::{
        Layer, Registry, fmt, layer::Context, layer::SubscriberExt, registry::LookupSpan,
        util::SubscriberInitExt,
    };

    use super::SpanTiming;

    thread_local! {
        static SPAN_TIMINGS: RefCell<BTreeMap<&'static str, (Duration, usize)>> =
            const { RefCell::new(BTreeMap::new()) };
    }

    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(&id) {
                let name = span.metadata().name();
                if let Some(start) = span.extensions().get::<Instant>() {
                    let elapsed = start.elapsed();
                    SPAN_TIMINGS.with(|totals| {
                        let mut totals = totals.borrow_mut();
                        let entry = totals.entry(name).or_insert((Duration::ZERO, 0));
                        entry.0 += elapsed;
                        entry.1 += 1;
                    });
                }
            }
        }
    }

    fn level_for(verbosity: u8) -> LevelFilter {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Installs a global subscriber that logs to stderr and records span
    /// timings.  `verbosity` counts up from warnings only (0) to everything
    /// (3 or more).  Only the first call has any effect, and a subscriber
    /// installed elsewhere takes precedence.
    pub fn init_tracing(verbosity: u8) {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = Registry::default()
                .with(TimingLayer)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_filter(level_for(verbosity)),
                )
                .try_init();
        });
    }

    /// Returns the span timings recorded on this thread, slowest first.
    pub fn span_timings() -> Vec<SpanTiming> {
        SPAN_TIMINGS.with(|totals| {
            let mut timings: Vec<_> = totals
                .borrow()
                .iter()
                .map(|(&name, &(total, count))| SpanTiming { name, total, count })
                .collect();
            timings.sort_by(|a, b| b.total.cmp(&a.total));
            timings
        })
    }

    /// Discards the span timings recorded on this thread.
    pub fn reset_span_timings() {
        SPAN_TIMINGS.with(|totals| totals.borrow_mut().clear());
    }

    pub use tracing::{debug, info_span, trace};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use super::SpanTiming;

    pub fn init_tracing(_verbosity: u8) {}

    pub fn span_timings() -> Vec<SpanTiming> {
        Vec::new()
    }

    pub fn reset_span_timings() {}

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __densegraph_noop_span {
        ($($args:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __densegraph_noop_event {
        ($($args:tt)*) => {{}};
    }

    pub use crate::__densegraph_noop_event as debug;
    pub use crate::__densegraph_noop_event as trace;
    pub use crate::__densegraph_noop_span as info_span;

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;

/// Formats timings as one `name: total (count×)` line per span.
pub fn format_span_timings(timings: &[SpanTiming]) -> String {
    timings
        .iter()
        .map(|t| format!("{}: {:?} ({}x)", t.name, t.total, t.count))
        .collect::<Vec<_>>()
        .join("\n")
}
