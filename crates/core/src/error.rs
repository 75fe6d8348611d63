use thiserror::Error;

use crate::model::{EndpointsError, ProfileError, UploadError};
use crate::timer::TimerError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error(transparent)]
    Endpoints(#[from] EndpointsError),
    #[error(transparent)]
    Timer(#[from] TimerError),
}
