//! # Numeric Field Validation
//!
//! Turns the text of an input field into a typed value. A `None` result
//! always means "do not proceed"; it is never a stand-in for a default.
//!
//! Decimal commas are accepted (`"0,5"` reads as `0.5`). When conversion
//! fails and the field must not be empty, the field flashes red. Predicate
//! failures do not flash.
//!
//! ```rust
//! use giwaxs_core::validation::{validate_scientific_value, TextField};
//!
//! let mut field = TextField::new("abc");
//! assert_eq!(validate_scientific_value::<f64>(&mut field, false, &[]), None);
//! assert!(field.flash_state().is_some());
//! ```

use std::str::FromStr;
use std::time::Instant;

use crate::flash::Flash;
use crate::stylesheet::Rgb;

/// A check applied to a converted value
pub type Predicate<'a, T> = &'a dyn Fn(&T) -> bool;

/// An input field that can be read and flashed
pub trait ValidatedField {
    /// Current text of the field
    fn text(&self) -> &str;

    /// Start a color flash on the field
    fn flash(&mut self, color: Rgb);
}

/// Plain text field state with an attached flash effect
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextField {
    text: String,
    flash: Option<Flash>,
}

impl TextField {
    pub fn new(text: impl Into<String>) -> Self {
        TextField {
            text: text.into(),
            flash: None,
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The flash effect, if one was ever started. It stays attached after it finishes.
    pub fn flash_state(&self) -> Option<&Flash> {
        self.flash.as_ref()
    }

    /// Whether a flash is still animating at `now`
    pub fn is_flashing(&self, now: Instant) -> bool {
        self.flash.map_or(false, |f| !f.is_finished(now))
    }

    /// Border tint at `now`; exactly black once the flash is over
    pub fn tint_at(&self, now: Instant) -> Option<Rgb> {
        self.flash.map(|f| if f.is_finished(now) { Rgb::BLACK } else { f.tint_at(now) })
    }
}

impl ValidatedField for TextField {
    fn text(&self) -> &str {
        &self.text
    }

    fn flash(&mut self, color: Rgb) {
        self.flash = Some(Flash::start(color, Instant::now()));
    }
}

/// Field text with decimal commas replaced by points
pub fn normalized_text(field: &impl ValidatedField) -> String {
    field.text().replace(',', ".")
}

/// Field text without conversion (decimal commas still normalized)
pub fn raw_value(field: &impl ValidatedField) -> String {
    normalized_text(field)
}

/// Convert the field text to `T` and check it against `predicates`.
///
/// * conversion failure: flashes the field red unless `allow_empty`, returns `None`
/// * any predicate false: returns `None`, no flash
pub fn validate_scientific_value<T: FromStr>(
    field: &mut impl ValidatedField,
    allow_empty: bool,
    predicates: &[Predicate<'_, T>],
) -> Option<T> {
    let text = normalized_text(field);

    let value = match text.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            if !allow_empty {
                field.flash(Rgb::RED);
            }
            return None;
        }
    };

    if predicates.iter().all(|check| check(&value)) {
        Some(value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate_f64(text: &str, allow_empty: bool, predicates: &[Predicate<'_, f64>]) -> (Option<f64>, bool) {
        let mut field = TextField::new(text);
        let value = validate_scientific_value::<f64>(&mut field, allow_empty, predicates);
        (value, field.flash_state().is_some())
    }

    #[test]
    fn test_comma_behaves_like_point() {
        for (comma, point) in [("0,5", "0.5"), ("1,5e-3", "1.5e-3"), ("abc,d", "abc.d"), ("1,2,3", "1.2.3")] {
            assert_eq!(validate_f64(comma, false, &[]), validate_f64(point, false, &[]));
        }
        assert_eq!(validate_f64("12,25", false, &[]).0, Some(12.25));
    }

    #[test]
    fn test_parse_failure_flashes_when_empty_not_allowed() {
        assert_eq!(validate_f64("not a number", false, &[]), (None, true));
        assert_eq!(validate_f64("", false, &[]), (None, true));
    }

    #[test]
    fn test_empty_allowed_does_not_flash() {
        assert_eq!(validate_f64("", true, &[]), (None, false));
        assert_eq!(validate_f64("x", true, &[]), (None, false));
    }

    #[test]
    fn test_every_predicate_must_pass() {
        let positive = |v: &f64| *v > 0.0;
        let below_ten = |v: &f64| *v < 10.0;

        assert_eq!(validate_f64("5", false, &[&positive, &below_ten]), (Some(5.0), false));
        assert_eq!(validate_f64("50", false, &[&positive, &below_ten]), (None, false));
        assert_eq!(validate_f64("-5", false, &[&positive, &below_ten]), (None, false));
    }

    #[test]
    fn test_integer_target() {
        let mut field = TextField::new(" 400 ");
        assert_eq!(validate_scientific_value::<u32>(&mut field, false, &[]), Some(400));

        let mut field = TextField::new("1,5");
        assert_eq!(validate_scientific_value::<u32>(&mut field, false, &[]), None);
        assert!(field.flash_state().is_some());
    }

    #[test]
    fn test_normalized_text_replaces_every_comma() {
        let field = TextField::new("1,000,5");
        assert_eq!(normalized_text(&field), "1.000.5");
        assert_eq!(normalized_text(&TextField::new("")), "");
    }

    #[test]
    fn test_raw_value_only_normalizes() {
        let field = TextField::new("q,range");
        assert_eq!(raw_value(&field), "q.range");
    }

    #[test]
    fn test_tint_settles_on_black() {
        let mut field = TextField::new("?");
        assert_eq!(field.tint_at(Instant::now()), None);

        let _ = validate_scientific_value::<f64>(&mut field, false, &[]);
        let started = Instant::now();
        assert_ne!(field.tint_at(started), Some(Rgb::BLACK));

        let end = started + crate::flash::FLASH_DURATION;
        assert!(!field.is_flashing(end));
        assert_eq!(field.tint_at(end), Some(Rgb::BLACK));
    }

    #[test]
    fn test_flash_stays_attached() {
        let mut field = TextField::new("?");
        let _ = validate_scientific_value::<f64>(&mut field, false, &[]);
        let later = Instant::now() + std::time::Duration::from_secs(5);
        assert!(!field.is_flashing(later));
        assert!(field.flash_state().is_some());
    }
}
