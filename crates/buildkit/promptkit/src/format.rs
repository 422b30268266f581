//! Positional `{s}` substitution over line-oriented templates.

use crate::error::PromptResult;

/// Marker replaced by the next unused substitution.
pub const PLACEHOLDER: &str = "{s}";

/// Expand `template`, filling each `{s}` from `substitutions` in document order.
///
/// Rules:
/// - The template is split on `\n`; empty lines are skipped.
/// - Substitutions are consumed left to right across line boundaries.
/// - A placeholder with no substitution left is dropped without a trace.
/// - Unused substitutions are ignored.
/// - Lines are rejoined with `\n` and the result never ends with one.
///
/// The only failure is the output buffer failing to grow.
pub fn format<S: AsRef<str>>(template: &str, substitutions: &[S]) -> PromptResult<String> {
    let mut out = String::new();
    let mut next = 0usize;

    for line in template.split('\n').filter(|line| !line.is_empty()) {
        let mut fragments = line.split(PLACEHOLDER);
        if let Some(first) = fragments.next() {
            push(&mut out, first)?;
        }
        for fragment in fragments {
            if let Some(substitution) = substitutions.get(next) {
                push(&mut out, substitution.as_ref())?;
                next += 1;
            }
            push(&mut out, fragment)?;
        }
        push(&mut out, "\n")?;
    }

    // Every line appended a newline; drop the last one. No lines, nothing to drop.
    out.pop();

    if next < substitutions.len() {
        tracing::trace!(
            used = next,
            supplied = substitutions.len(),
            "prompt substitutions left unused"
        );
    }
    Ok(out)
}

/// Number of `{s}` markers [`format`] would visit in `template`.
pub fn placeholder_count(template: &str) -> usize {
    template.matches(PLACEHOLDER).count()
}

fn push(out: &mut String, text: &str) -> PromptResult<()> {
    out.try_reserve(text.len())?;
    out.push_str(text);
    Ok(())
}
