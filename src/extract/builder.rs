//! A builder for an [`Extractor`].

use crate::core::SpliceType;
use crate::core::Window;
use crate::extract::Extractor;
use crate::extract::collision::OverlapPolicy;
use crate::extract::scanner::Motif;

/// An error that occurs when a required field was never provided to the
/// [`Builder`].
#[derive(Debug)]
pub enum MissingError {
    /// No window was provided to the [`Builder`].
    Window,

    /// No splice type was provided to the [`Builder`].
    SpliceType,
}

impl std::fmt::Display for MissingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingError::Window => write!(f, "window"),
            MissingError::SpliceType => write!(f, "splice type"),
        }
    }
}

impl std::error::Error for MissingError {}

/// An error related to a [`Builder`].
#[derive(Debug)]
pub enum Error {
    /// An error where a required field was never provided to the [`Builder`].
    Missing(MissingError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Missing(err) => write!(f, "missing required field: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A builder for an [`Extractor`].
///
/// The window and the splice type are required. The overlap policy defaults
/// to [`OverlapPolicy::Strict`] and the motif defaults to the splice type's
/// canonical motif.
#[derive(Debug, Default)]
pub struct Builder {
    /// The fragment window.
    window: Option<Window>,

    /// The splice type.
    splice_type: Option<SpliceType>,

    /// The overlap policy.
    policy: OverlapPolicy,

    /// The candidate motif.
    motif: Option<Motif>,
}

impl Builder {
    /// Sets the fragment window.
    pub fn window(mut self, window: Window) -> Self {
        self.window = Some(window);
        self
    }

    /// Sets the splice type.
    pub fn splice_type(mut self, splice_type: SpliceType) -> Self {
        self.splice_type = Some(splice_type);
        self
    }

    /// Sets the overlap policy.
    pub fn policy(mut self, policy: OverlapPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Overrides the candidate motif.
    pub fn motif(mut self, motif: Motif) -> Self {
        self.motif = Some(motif);
        self
    }

    /// Consumes `self` to attempt to build an [`Extractor`].
    ///
    /// # Examples
    ///
    /// ```
    /// use splicefrag::core::SpliceType;
    /// use splicefrag::core::Window;
    /// use splicefrag::extract::Builder;
    /// use splicefrag::extract::collision::OverlapPolicy;
    ///
    /// let extractor = Builder::default()
    ///     .window(Window::new(2, 3))
    ///     .splice_type(SpliceType::Acceptor)
    ///     .try_build()?;
    ///
    /// assert_eq!(extractor.policy(), OverlapPolicy::Strict);
    /// assert_eq!(extractor.motif().as_str(), "AG");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_build(self) -> Result<Extractor> {
        let window = self.window.ok_or(Error::Missing(MissingError::Window))?;
        let splice_type = self
            .splice_type
            .ok_or(Error::Missing(MissingError::SpliceType))?;
        let motif = self
            .motif
            .unwrap_or_else(|| Motif::for_splice_type(splice_type));

        Ok(Extractor {
            window,
            splice_type,
            policy: self.policy,
            motif,
        })
    }
}
