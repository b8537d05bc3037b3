pub mod diagnostic;
pub mod error;
pub mod tolerance;
pub mod traits;

pub use diagnostic::{Diagnostic, Outcome};
pub use error::{OutlineError, Result};
pub use tolerance::Tolerance;
