//! Prompt templates for the inference client layer.
//!
//! A template is plain text split into lines, where each `{s}` marker is
//! filled from an ordered list of substitutions. The list is shared across
//! the whole template in document order.
//!
//! ```
//! use buildkit_promptkit::format;
//!
//! let prompt = format("foo is {s}\nand bar is {s} lol", &["hello", "world"]).unwrap();
//! assert_eq!(prompt, "foo is hello\nand bar is world lol");
//! ```

pub mod error;
pub mod format;
pub mod template;

pub use error::{PromptError, PromptResult};
pub use format::{format, placeholder_count, PLACEHOLDER};
pub use template::PromptTemplate;
