//! Asynchronous element streams.
//!
//! [`ExtendedSet::stream`] hands the elements of a set to a background task
//! on the current Tokio runtime, which feeds them one at a time through a
//! bounded channel. The consumer sees a [`futures::Stream`].
//!
//! The producer only ever waits for the consumer to take the next element.
//! Dropping the stream closes the channel, the producer's next send fails,
//! and the task ends. A consumer that stops reading early never leaves a
//! task behind.
//!
//! This module requires the `async` feature.

use futures::Stream;
use futures::stream;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::error::{Error, Result};
use crate::extended::ExtendedSet;

/// Elements in flight between producer and consumer.
const CHANNEL_CAPACITY: usize = 1;

impl<T: Clone + Send + 'static> ExtendedSet<T> {
    /// Returns a stream of the set's elements in a fresh random order.
    ///
    /// The stream works on a snapshot taken when this method is called, so
    /// the set may change while the stream is consumed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingRuntime`] when called outside a Tokio runtime.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::extended_set;
    /// use futures::StreamExt;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() -> eqset::Result<()> {
    /// let set = extended_set![1, 2, 3];
    /// let mut values: Vec<i32> = set.stream()?.collect().await;
    /// values.sort_unstable();
    /// assert_eq!(values, vec![1, 2, 3]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn stream(&self) -> Result<impl Stream<Item = T> + Send + 'static> {
        let runtime = Handle::try_current().map_err(|_| Error::MissingRuntime)?;
        let snapshot = self.iter_buffered();
        let (sender, receiver) = mpsc::channel(CHANNEL_CAPACITY);

        runtime.spawn(async move {
            let mut sent = 0_usize;
            for element in snapshot {
                if sender.send(element).await.is_err() {
                    tracing::trace!(sent, "element stream dropped by consumer");
                    return;
                }
                sent += 1;
            }
            tracing::trace!(sent, "element stream completed");
        });

        Ok(stream::unfold(receiver, |mut receiver| async move {
            receiver.recv().await.map(|element| (element, receiver))
        }))
    }
}
