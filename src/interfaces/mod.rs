//! Presentation adapters: everything that turns raw text into calls to the
//! application layer and results back into text. Display rounding lives here
//! and nowhere else.

pub mod csv;
pub mod format;
pub mod json;
pub mod outcome;
pub mod text;
