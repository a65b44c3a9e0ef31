//! Default-sink rotation
//!
//! Linear pipeline: query the default sink, enumerate the sink list, pick
//! the next entry by position, issue the switch. Any failure aborts the
//! chain before the switch command is issued.

use sinkcycle_pactl::{CommandRunner, PactlClient, Sink, SystemRunner};
use tracing::info;

use crate::error::{CycleError, Result};

/// Terminal states of a cycle invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Switched to this sink.
    Switched(Sink),
    /// The server reported no default sink; nothing to rotate from.
    NoDefaultSink,
}

/// Sink following `current` in the list, wrapping past the end.
///
/// An empty `current` means the server has no default sink and there is
/// nothing to rotate from; a non-empty `current` that matches no entry is
/// a loud error, never a guess. Matching is exact identifier equality.
pub fn next_sink<'a>(sinks: &'a [Sink], current: &str) -> Result<Option<&'a Sink>> {
    if current.is_empty() {
        return Ok(None);
    }

    let position = sinks
        .iter()
        .position(|sink| sink.name == current)
        .ok_or_else(|| CycleError::NotFound {
            current: current.to_string(),
            sink_count: sinks.len(),
        })?;

    Ok(Some(&sinks[(position + 1) % sinks.len()]))
}

/// Orchestrates the query → rotate → switch pipeline over a pactl client.
pub struct SinkCycler<R = SystemRunner> {
    client: PactlClient<R>,
}

impl SinkCycler<SystemRunner> {
    /// Cycler talking to the real `pactl` binary.
    pub fn new() -> Self {
        Self::with_client(PactlClient::new())
    }
}

impl Default for SinkCycler<SystemRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> SinkCycler<R> {
    /// Cycler over a custom client (scripted runners in tests, alternate
    /// binaries from config).
    pub fn with_client(client: PactlClient<R>) -> Self {
        Self { client }
    }

    /// Switch the default sink to the next enumerated one.
    pub fn cycle(&self) -> Result<CycleOutcome> {
        let Some(current) = self.client.default_sink()? else {
            info!("no default sink reported, nothing to cycle");
            return Ok(CycleOutcome::NoDefaultSink);
        };

        let sinks = self.client.list_sinks()?;
        let next = match next_sink(&sinks, &current)? {
            Some(sink) => sink.clone(),
            None => return Ok(CycleOutcome::NoDefaultSink),
        };

        info!(current = %current, next = %next.name, "rotating default sink");
        self.client.set_default_sink(&next.name)?;

        Ok(CycleOutcome::Switched(next))
    }

    /// Current default sink identifier, without switching.
    pub fn current(&self) -> Result<Option<String>> {
        Ok(self.client.default_sink()?)
    }

    /// Enumerated sink list, without switching.
    pub fn sinks(&self) -> Result<Vec<Sink>> {
        Ok(self.client.list_sinks()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sink(index: u32, name: &str) -> Sink {
        Sink {
            index,
            name: name.to_string(),
            description: String::new(),
            serial: None,
        }
    }

    fn three_sinks() -> Vec<Sink> {
        vec![sink(1, "sink1"), sink(2, "sink2"), sink(3, "sink3")]
    }

    #[test]
    fn rotates_to_the_following_sink() {
        let sinks = three_sinks();
        let next = next_sink(&sinks, "sink1").unwrap().unwrap();
        assert_eq!(next.name, "sink2");
    }

    #[test]
    fn wraps_from_last_to_first() {
        let sinks = three_sinks();
        let next = next_sink(&sinks, "sink3").unwrap().unwrap();
        assert_eq!(next.name, "sink1");
    }

    #[test]
    fn single_sink_wraps_to_itself() {
        let sinks = vec![sink(7, "only")];
        let next = next_sink(&sinks, "only").unwrap().unwrap();
        assert_eq!(next.name, "only");
    }

    #[test]
    fn unknown_current_is_not_found() {
        let sinks = three_sinks();
        let err = next_sink(&sinks, "sink9").unwrap_err();
        assert!(matches!(
            err,
            CycleError::NotFound { ref current, sink_count: 3 } if current == "sink9"
        ));
    }

    #[test]
    fn empty_list_with_a_current_is_not_found() {
        let err = next_sink(&[], "sink1").unwrap_err();
        assert!(matches!(err, CycleError::NotFound { sink_count: 0, .. }));
    }

    #[test]
    fn empty_current_rotates_nothing() {
        let sinks = three_sinks();
        assert!(next_sink(&sinks, "").unwrap().is_none());
    }
}
