use futures::channel::oneshot;
use tracing::error;

#[derive(Debug)]
pub struct AwaitingType<T>(pub oneshot::Receiver<anyhow::Result<T>>);

#[derive(Debug, Default)]
pub enum DataState<T> {
    #[default]
    None,
    AwaitingResponse(AwaitingType<T>),
    Present(T),
    Failed(String),
}

impl<T> DataState<T> {
    /// Starts loading the data if nothing has been requested yet, otherwise
    /// does nothing
    ///
    /// Note: F needs to return AwaitingType<T> and not T because it needs to be
    /// able to be pending and T is not
    pub fn get<F>(&mut self, fetch_fn: F)
    where
        F: FnOnce() -> AwaitingType<T>,
    {
        if self.is_none() {
            *self = DataState::AwaitingResponse(fetch_fn());
        }
    }

    /// Waits for an outstanding request to finish
    pub async fn settle(&mut self) {
        if let DataState::AwaitingResponse(rx) = self {
            let outcome = (&mut rx.0).await;
            *self = Self::from_outcome(outcome);
        }
    }

    pub fn set_result(&mut self, result: anyhow::Result<T>) {
        *self = Self::from_outcome(Ok(result));
    }

    /// Forget the data so the next [`Self::get`] fetches again
    pub fn reset(&mut self) {
        *self = DataState::None;
    }

    fn from_outcome(outcome: Result<anyhow::Result<T>, oneshot::Canceled>) -> Self {
        match outcome {
            Ok(Ok(data)) => DataState::Present(data),
            Ok(Err(e)) => {
                let err_msg = e.to_string();
                error!(err_msg, "Error response received instead of the data");
                DataState::Failed(err_msg)
            }
            Err(e) => {
                let err_msg = format!("Error receiving on channel. Error: {e:?}");
                error!(err_msg, "Error receiving on channel");
                DataState::Failed(err_msg)
            }
        }
    }

    pub fn present(&self) -> Option<&T> {
        match self {
            DataState::Present(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            DataState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Returns `true` if the data state is [`None`].
    ///
    /// [`None`]: DataState::None
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
