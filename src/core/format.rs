//! Message formatting: positional placeholder substitution and pseudo-localization.
//!
//! Templates address arguments with `{N}` placeholders. A placeholder whose
//! index has no matching argument is left in the output untouched, so a
//! missing argument is visible in the UI instead of failing the render.

use std::sync::LazyLock;
use std::sync::atomic::{AtomicBool, Ordering};

use regex::{Captures, Regex};

/// Fullwidth left square bracket, opens pseudo-localized text.
pub const PSEUDO_OPEN: char = '\u{FF3B}'; // ［

/// Fullwidth right square bracket, closes pseudo-localized text.
pub const PSEUDO_CLOSE: char = '\u{FF3D}'; // ］

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{(\d+)\}").unwrap());

static PSEUDO_TRANSLATION: AtomicBool = AtomicBool::new(false);

/// Enable or disable pseudo-localization for every subsequent [`format`] call.
///
/// Strings that were already produced are not affected.
pub fn set_pseudo_translation(enabled: bool) {
    PSEUDO_TRANSLATION.store(enabled, Ordering::SeqCst);
}

/// Whether pseudo-localization is currently enabled.
pub fn is_pseudo_translation() -> bool {
    PSEUDO_TRANSLATION.load(Ordering::SeqCst)
}

/// Format `template` with positional `args`, honouring the process-wide pseudo flag.
///
/// # Examples
///
/// ```
/// use nlsbundle::core::format;
///
/// let text = format("Hello {0}, you have {1} items", &["Ana", "3"]);
/// assert_eq!(text, "Hello Ana, you have 3 items");
/// ```
pub fn format<S: AsRef<str>>(template: &str, args: &[S]) -> String {
    format_with(template, args, is_pseudo_translation())
}

/// Format `template` with an explicit pseudo-localization setting.
pub fn format_with<S: AsRef<str>>(template: &str, args: &[S], pseudo: bool) -> String {
    let result = substitute(template, args);
    if pseudo { pseudo_localize(&result) } else { result }
}

fn substitute<S: AsRef<str>>(template: &str, args: &[S]) -> String {
    if args.is_empty() {
        return template.to_string();
    }

    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            // Indices too large for usize can never match an argument.
            let arg = caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| args.get(index));
            match arg {
                Some(arg) => arg.as_ref().to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Double every `a`, `o`, `u`, `e`, `i` and wrap the text in fullwidth brackets.
fn pseudo_localize(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2 + 6);
    result.push(PSEUDO_OPEN);
    for c in text.chars() {
        result.push(c);
        if matches!(c, 'a' | 'o' | 'u' | 'e' | 'i') {
            result.push(c);
        }
    }
    result.push(PSEUDO_CLOSE);
    result
}
