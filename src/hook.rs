//! Glue between a host text field and the placeholder extractor.
//!
//! The host calls [`InputChangeHook::on_input_change`] with the field's full
//! current value on every change event. Each call runs exactly one
//! extraction and hands the result to a [`VariableSink`] before returning.

use crate::extract::{PlaceholderExtractor, VariableExtractor};
use log::trace;

/// Receives the variable names extracted after each change event.
pub trait VariableSink {
    fn receive(&mut self, variables: Vec<String>);
}

/// Any `FnMut(Vec<String>)` closure can act as a sink.
impl<F> VariableSink for F
where
    F: FnMut(Vec<String>),
{
    fn receive(&mut self, variables: Vec<String>) {
        self(variables)
    }
}

/// Runs one extraction per input change and forwards the result.
///
/// There is no debouncing, batching or caching: `n` change events produce
/// exactly `n` calls to the sink, in order.
pub struct InputChangeHook<S, E = PlaceholderExtractor> {
    extractor: E,
    sink: S,
    events_handled: u64,
}

impl<S: VariableSink> InputChangeHook<S> {
    /// Hook using the standard `{{ name }}` syntax
    pub fn new(sink: S) -> Self {
        Self::with_extractor(PlaceholderExtractor::new(), sink)
    }
}

impl<S, E> InputChangeHook<S, E>
where
    S: VariableSink,
    E: VariableExtractor,
{
    pub fn with_extractor(extractor: E, sink: S) -> Self {
        Self {
            extractor,
            sink,
            events_handled: 0,
        }
    }

    /// Handle a change event carrying the field's full current value.
    pub fn on_input_change(&mut self, value: &str) {
        let variables = self.extractor.extract_variables(value);
        self.events_handled += 1;
        trace!(
            "Input change #{}: {} byte(s), variables {:?}",
            self.events_handled,
            value.len(),
            variables
        );
        self.sink.receive(variables);
    }

    /// Number of change events handled so far
    pub fn events_handled(&self) -> u64 {
        self.events_handled
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
