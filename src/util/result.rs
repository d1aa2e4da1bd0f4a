use std::error::Error;

pub(crate) trait ResultExtension<T> {
    /// Unwraps the value, panicking with the [`Display`](std::fmt::Display) message of the error
    /// otherwise. For trait impls that have no way to return an error, like [`Extend`].
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
