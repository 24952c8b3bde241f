//! Inline markup for résumé text fields.
//!
//! A small marker grammar — `**bold**`, `*italic*`, `__underline__`,
//! `[text](url)` — rendered into three independent targets through the
//! [`RenderTarget`] trait:
//!
//! - [`Target::Display`]: semantic HTML (`<strong>`, `<em>`, `<u>`, `<a>`)
//! - [`Target::Typeset`]: LaTeX commands (`\textbf`, `\textit`, `\underline`)
//! - [`Target::Plain`]: markers stripped, canonical semantic text
//!
//! Text is tokenized once into a segment stream ([`tokenize`]); each target
//! folds that stream, escaping only plain-text leaves so target-native
//! syntax inserted by the backend is never re-escaped. Malformed or
//! unbalanced markers always degrade to literal characters; nothing here
//! returns an error.
//!
//! The crate also provides the selection [`toggle`] engine used by editors
//! to add or remove a mark over a character range.
//!
//! # Example
//!
//! ```
//! use lumina_markup::{render, Target};
//!
//! let text = "Built **scalable** systems serving *2M+* users";
//! assert_eq!(
//!     render(text, Target::Display),
//!     "Built <strong>scalable</strong> systems serving <em>2M+</em> users"
//! );
//! assert_eq!(
//!     render(text, Target::Plain),
//!     "Built scalable systems serving 2M+ users"
//! );
//! ```

mod backend;
mod display;
mod escape;
mod plain;
mod token;
mod toggle;
mod typeset;

pub use backend::{RenderTarget, Target, render};
pub use display::DisplayTarget;
pub use escape::{escape_html, escape_tex};
pub use plain::PlainTarget;
pub use token::{Mark, Segment, tokenize};
pub use toggle::{Toggle, ToggleKind, toggle};
pub use typeset::TypesetTarget;
