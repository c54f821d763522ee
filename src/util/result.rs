use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps the value, or panics at the caller's location using the error's own message. Used
    /// by the infallible-looking conveniences (like [`Extend`]) layered over fallible operations.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{error}"),
        }
    }
}
