//! Request execution pipeline: VALIDATE → EXECUTE → LOG.
//!
//! One `Pipeline` instance is built per request type at wiring time and
//! shared across requests. The pipeline owns the validator set and the
//! handler; `send` is the single entry point.

use std::time::Instant;

use crate::error::AppError;
use crate::response::FromRejection;
use crate::validation::{FieldErrors, Validator};

/// A request the pipeline can execute.
pub trait Request: core::fmt::Debug + Send + 'static {
    /// Response shape the handler produces (and the pipeline can fabricate
    /// a failure in).
    type Response: FromRejection + Send;

    /// Stable name used in logs.
    const NAME: &'static str;
}

/// The operation behind a request.
pub trait Handler<R: Request>: Send + Sync {
    fn handle(&self, request: R) -> Result<R::Response, AppError>;
}

impl<R, F> Handler<R> for F
where
    R: Request,
    F: Fn(R) -> Result<R::Response, AppError> + Send + Sync,
{
    fn handle(&self, request: R) -> Result<R::Response, AppError> {
        self(request)
    }
}

/// Ordered wrapper around one handler.
///
/// On validation failure the handler is never invoked; a failure response in
/// the handler's declared shape is fabricated instead. Handler errors
/// propagate to the caller untouched, but the LOG stage runs either way.
pub struct Pipeline<R: Request> {
    validators: Vec<Box<dyn Validator<R>>>,
    handler: Box<dyn Handler<R>>,
}

impl<R: Request> Pipeline<R> {
    pub fn new(handler: impl Handler<R> + 'static) -> Self {
        Self {
            validators: Vec::new(),
            handler: Box::new(handler),
        }
    }

    pub fn with_validator(mut self, validator: impl Validator<R> + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Execute the pipeline for one request.
    pub fn send(&self, request: R) -> Result<R::Response, AppError> {
        let mut failures = FieldErrors::new();
        for validator in &self.validators {
            validator.validate(&request, &mut failures);
        }

        if !failures.is_empty() {
            tracing::info!(
                request = R::NAME,
                fields = failures.len(),
                "request rejected by validation"
            );
            return Ok(R::Response::rejected("Validation failed".to_string(), failures));
        }

        tracing::debug!(request = R::NAME, payload = ?request, "handling request");
        let started = Instant::now();
        let result = self.handler.handle(request);
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(_) => tracing::info!(request = R::NAME, elapsed_ms, "handled request"),
            Err(e) => tracing::info!(request = R::NAME, elapsed_ms, error = %e, "request failed"),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::Response;
    use crate::validation::rules;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug)]
    struct Echo {
        text: String,
    }

    impl Request for Echo {
        type Response = Response<String>;
        const NAME: &'static str = "test.echo";
    }

    struct RequireText;

    impl Validator<Echo> for RequireText {
        fn validate(&self, request: &Echo, errors: &mut FieldErrors) {
            rules::required(errors, "text", &request.text, "Text is required");
        }
    }

    struct FlagTooLong;

    impl Validator<Echo> for FlagTooLong {
        fn validate(&self, request: &Echo, errors: &mut FieldErrors) {
            rules::max_length(errors, "text", &request.text, 5, "Text too long");
        }
    }

    fn counting_pipeline(counter: Arc<AtomicUsize>) -> Pipeline<Echo> {
        Pipeline::new(move |req: Echo| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Response::succeed(req.text, "ok"))
        })
        .with_validator(RequireText)
        .with_validator(FlagTooLong)
    }

    #[test]
    fn invalid_request_short_circuits_without_invoking_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let pipeline = counting_pipeline(calls.clone());

        let resp = pipeline.send(Echo { text: "   ".into() }).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message, "Validation failed");
        assert_eq!(
            resp.validation_errors.as_ref().unwrap()["text"],
            vec!["Text is required"]
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn all_validators_aggregate_into_one_failure_map() {
        let calls = Arc::new(AtomicUsize::new(0));
        let pipeline = counting_pipeline(calls.clone());

        // Blank AND too long once trimmed-length rules are considered:
        // craft a value that trips only the length validator plus a second
        // manual failure to prove aggregation across validators.
        let resp = pipeline.send(Echo { text: "0123456789".into() }).unwrap();
        assert!(!resp.success);
        assert_eq!(
            resp.validation_errors.as_ref().unwrap()["text"],
            vec!["Text too long"]
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn valid_request_runs_handler_exactly_once_and_returns_result_unmodified() {
        let calls = Arc::new(AtomicUsize::new(0));
        let pipeline = counting_pipeline(calls.clone());

        let resp = pipeline.send(Echo { text: "hi".into() }).unwrap();
        assert!(resp.success);
        assert_eq!(resp.data.as_deref(), Some("hi"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn handler_errors_propagate_after_logging() {
        let pipeline: Pipeline<Echo> =
            Pipeline::new(|_req: Echo| Err(AppError::not_found("nope"))).with_validator(RequireText);

        let err = pipeline.send(Echo { text: "hi".into() }).unwrap_err();
        assert_eq!(err, AppError::NotFound("nope".into()));
    }
}
