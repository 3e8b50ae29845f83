use std::time::Duration;

use crate::{
    FallbackSummarizer, ModelState, PrimarySummarizer, SummarizationService, UnavailablePolicy,
};

pub struct SummarizationServiceBuilder<P = (), F = ()> {
    primary: P,
    fallback: F,
    model_state: ModelState,
    unavailable_policy: UnavailablePolicy,
    primary_timeout: Option<Duration>,
}

impl SummarizationServiceBuilder {
    /// `model_state` is the outcome of the startup self-test.
    pub fn new(model_state: ModelState) -> Self {
        Self {
            primary: (),
            fallback: (),
            model_state,
            unavailable_policy: UnavailablePolicy::default(),
            primary_timeout: None,
        }
    }
}

impl<P, F> SummarizationServiceBuilder<P, F> {
    pub fn primary<P2: PrimarySummarizer + Send + Sync + 'static>(
        self,
        primary: P2,
    ) -> SummarizationServiceBuilder<P2, F> {
        SummarizationServiceBuilder {
            primary,
            fallback: self.fallback,
            model_state: self.model_state,
            unavailable_policy: self.unavailable_policy,
            primary_timeout: self.primary_timeout,
        }
    }

    pub fn fallback<F2: FallbackSummarizer + Send + Sync + 'static>(
        self,
        fallback: F2,
    ) -> SummarizationServiceBuilder<P, F2> {
        SummarizationServiceBuilder {
            primary: self.primary,
            fallback,
            model_state: self.model_state,
            unavailable_policy: self.unavailable_policy,
            primary_timeout: self.primary_timeout,
        }
    }

    pub fn unavailable_policy(mut self, policy: UnavailablePolicy) -> Self {
        self.unavailable_policy = policy;
        self
    }

    /// A primary call running longer than `timeout` is abandoned and the
    /// fallback takes over, exactly as for an inference error.
    pub fn primary_timeout(mut self, timeout: Duration) -> Self {
        self.primary_timeout = Some(timeout);
        self
    }
}

impl<P, F> SummarizationServiceBuilder<P, F>
where
    P: PrimarySummarizer + Send + Sync + 'static,
    F: FallbackSummarizer + Send + Sync + 'static,
{
    pub fn build(self) -> SummarizationService<P, F> {
        SummarizationService {
            primary: self.primary,
            fallback: self.fallback,
            model_state: self.model_state,
            unavailable_policy: self.unavailable_policy,
            primary_timeout: self.primary_timeout,
        }
    }
}
