//! # Unprocessed-item extractor
//!
//! [`Unprocessed`] tells the executor which items of a handler output still need
//! another pass. It is an optional capability with a defined default:
//! [`Unprocessed::none`] treats every invocation as fully processed, so batches
//! are never retried.
//!
//! ```text
//! handler(batch) ──► output ──► Unprocessed::extract(&output)
//!                                  ├─ []       → batch complete
//!                                  └─ [items]  → retry with these items
//! ```
//!
//! Items and outputs are opaque to the executor. To see them in the per-attempt
//! debug record, attach renderers with [`Unprocessed::describe_items`] and
//! [`Unprocessed::describe_output`]; their text lands in
//! [`Event::batch_items`](crate::Event::batch_items) and
//! [`Event::batch_output`](crate::Event::batch_output).

use std::fmt;
use std::sync::Arc;

type ExtractFn<I, O> = dyn Fn(&O) -> Vec<I> + Send + Sync;
type ItemsFn<I> = dyn Fn(&[I]) -> String + Send + Sync;
type OutputFn<O> = dyn Fn(&O) -> String + Send + Sync;

/// Extracts the items a handler reported as unprocessed.
///
/// # Example
/// ```rust
/// use batchvisor::Unprocessed;
///
/// struct Output { failed: Vec<u32> }
///
/// let extractor: Unprocessed<u32, Output> = Unprocessed::with(|out: &Output| out.failed.clone());
/// assert_eq!(extractor.extract(&Output { failed: vec![7] }), vec![7]);
///
/// let none: Unprocessed<u32, Output> = Unprocessed::none();
/// assert!(none.extract(&Output { failed: vec![7] }).is_empty());
/// ```
pub struct Unprocessed<I, O> {
    f: Option<Arc<ExtractFn<I, O>>>,
    items: Option<Arc<ItemsFn<I>>>,
    output: Option<Arc<OutputFn<O>>>,
}

impl<I, O> Unprocessed<I, O> {
    /// Every invocation is considered fully processed.
    #[must_use]
    pub fn none() -> Self {
        Self {
            f: None,
            items: None,
            output: None,
        }
    }

    /// Uses `f` to extract unprocessed items.
    ///
    /// `f` may return either `Vec<I>` or `Option<Vec<I>>`; `None` and an empty
    /// vector both mean "nothing left".
    pub fn with<F, R>(f: F) -> Self
    where
        F: Fn(&O) -> R + Send + Sync + 'static,
        R: Into<Option<Vec<I>>> + 'static,
        I: 'static,
        O: 'static,
    {
        Self {
            f: Some(Arc::new(move |out: &O| f(out).into().unwrap_or_default())),
            ..Self::none()
        }
    }

    /// Renders the items handed to each attempt into its debug record.
    ///
    /// # Example
    /// ```rust
    /// use batchvisor::Unprocessed;
    ///
    /// let u: Unprocessed<u32, usize> =
    ///     Unprocessed::none().describe_items(|items: &[u32]| format!("{items:?}"));
    /// assert_eq!(u.render_items(&[1, 2]).as_deref(), Some("[1, 2]"));
    /// assert_eq!(u.render_output(&2), None);
    /// ```
    #[must_use]
    pub fn describe_items<F>(mut self, f: F) -> Self
    where
        F: Fn(&[I]) -> String + Send + Sync + 'static,
    {
        self.items = Some(Arc::new(f));
        self
    }

    /// Renders each handler output into the debug record of its attempt.
    #[must_use]
    pub fn describe_output<F>(mut self, f: F) -> Self
    where
        F: Fn(&O) -> String + Send + Sync + 'static,
    {
        self.output = Some(Arc::new(f));
        self
    }

    /// Returns the unprocessed items reported in `output`.
    pub fn extract(&self, output: &O) -> Vec<I> {
        match &self.f {
            Some(f) => f(output),
            None => Vec::new(),
        }
    }

    /// Text for `items`, if an item renderer is attached.
    pub fn render_items(&self, items: &[I]) -> Option<String> {
        self.items.as_ref().map(|f| f(items))
    }

    /// Text for `output`, if an output renderer is attached.
    pub fn render_output(&self, output: &O) -> Option<String> {
        self.output.as_ref().map(|f| f(output))
    }
}

impl<I, O> Default for Unprocessed<I, O> {
    fn default() -> Self {
        Self::none()
    }
}

impl<I, O> Clone for Unprocessed<I, O> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            items: self.items.clone(),
            output: self.output.clone(),
        }
    }
}

impl<I, O> fmt::Debug for Unprocessed<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unprocessed")
            .field("extractor", &self.f.is_some())
            .field("describe_items", &self.items.is_some())
            .field("describe_output", &self.output.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reports_nothing() {
        let u: Unprocessed<u8, Vec<u8>> = Unprocessed::default();
        assert!(u.extract(&vec![1, 2, 3]).is_empty());
        assert_eq!(u.render_items(&[1]), None);
        assert_eq!(u.render_output(&vec![1]), None);
    }

    #[test]
    fn test_option_returning_extractor() {
        let u: Unprocessed<u8, Option<Vec<u8>>> = Unprocessed::with(|out: &Option<Vec<u8>>| out.clone());
        assert!(u.extract(&None).is_empty());
        assert_eq!(u.extract(&Some(vec![4])), vec![4]);
    }

    #[test]
    fn test_clone_shares_extractor_and_renderers() {
        let u: Unprocessed<u8, u8> = Unprocessed::with(|out: &u8| vec![*out; 2])
            .describe_output(|out: &u8| format!("out={out}"));
        let v = u.clone();
        assert_eq!(v.extract(&3), vec![3, 3]);
        assert_eq!(v.render_output(&3).as_deref(), Some("out=3"));
    }

    #[test]
    fn test_renderers_do_not_change_extraction() {
        let u: Unprocessed<u8, Vec<u8>> = Unprocessed::with(|out: &Vec<u8>| out.clone())
            .describe_items(|items: &[u8]| items.len().to_string());
        assert_eq!(u.extract(&vec![9]), vec![9]);
        assert_eq!(u.render_items(&[1, 2, 3]).as_deref(), Some("3"));
    }
}
