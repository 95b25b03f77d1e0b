//! Diagnostic output

use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

use crate::algorithms::Verbosity;

/// Handle for changing the verbosity after the subscriber is installed
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
}

/// Install the global subscriber, writing compact lines to stderr
///
/// `RUST_LOG` takes precedence over `verbosity`.
pub fn init_logging(verbosity: Verbosity) -> anyhow::Result<LogHandle> {
    let (subscriber, handle) = subscriber(verbosity, std::io::stderr);
    subscriber.try_init()?;
    Ok(handle)
}

/// Compact line subscriber with a reloadable level filter
fn subscriber<W>(
    verbosity: Verbosity,
    writer: W,
) -> (impl Subscriber + Send + Sync + 'static, LogHandle)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(env_filter(verbosity));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .compact()
            .with_target(true)
            .with_level(true)
            .with_writer(writer),
    );

    (subscriber, LogHandle { filter: handle })
}

impl LogHandle {
    /// Reload the level filter
    pub fn set_verbosity(&self, verbosity: Verbosity) -> anyhow::Result<()> {
        self.filter.reload(env_filter(verbosity))?;
        Ok(())
    }
}

fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::from(verbosity).into()))
}
