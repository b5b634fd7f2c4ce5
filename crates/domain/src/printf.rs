//! Printf-style positional substitution.
//!
//! Supports the verbs `%v %s %d %t %f %g %e %q %x %X %%`, the flags
//! `- + 0 space #`, width and precision. Mismatches never fail; they leave a
//! marker in the output instead:
//!
//! - wrong verb for the argument: `%!d(string=abc)`
//! - no argument left: `%!s(MISSING)`
//! - arguments left over: `%!(EXTRA int=5, string=x)`
//! - `%` at the very end: `%!(NOVERB)`
//!
//! Every marker starts with [`VERB_ERROR_MARKER`]. [`Formatted`] remembers
//! where the first emitted marker begins, so a literal `%!` inside an argument
//! is never mistaken for one.

use crate::detail::{Detail, Scalar};
use std::borrow::Cow;
use std::fmt::Write as _;

/// Prefix shared by every substitution error marker.
pub const VERB_ERROR_MARKER: &str = "%!";

/// One substitution argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg<'a> {
    /// Absent value.
    Nil,
    /// Text.
    Str(&'a str),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Floating point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Any other value; accepted by `%v` and `%s` only.
    Other {
        /// Type label used in error markers.
        type_name: &'static str,
        /// Display text.
        text: Cow<'a, str>,
    },
}

impl Arg<'_> {
    const fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Str(_) => "string",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float64",
            Self::Bool(_) => "bool",
            Self::Other { type_name, .. } => *type_name,
        }
    }

    fn plain(&self) -> String {
        match self {
            Self::Nil => "<nil>".to_string(),
            Self::Str(text) => (*text).to_string(),
            Self::Int(value) => value.to_string(),
            Self::Uint(value) => value.to_string(),
            Self::Float(value) => {
                let formatted = float_general(value.abs(), None, false);
                if value.is_sign_negative() && !value.is_nan() {
                    format!("-{formatted}")
                } else {
                    formatted
                }
            },
            Self::Bool(value) => value.to_string(),
            Self::Other { text, .. } => text.to_string(),
        }
    }
}

impl<'a> From<&'a Detail> for Arg<'a> {
    fn from(detail: &'a Detail) -> Self {
        match detail {
            Detail::Nil => Self::Nil,
            Detail::Scalar(Scalar::Str(text)) => Self::Str(text),
            Detail::Scalar(Scalar::Int(value)) => Self::Int(*value),
            Detail::Scalar(Scalar::Uint(value)) => Self::Uint(*value),
            Detail::Scalar(Scalar::Float(value)) => Self::Float(*value),
            Detail::Scalar(Scalar::Bool(value)) => Self::Bool(*value),
            Detail::Scalar(Scalar::Opaque(text)) => Self::Other {
                type_name: "opaque",
                text: Cow::Borrowed(text),
            },
            Detail::MessageNumber(number) => Self::Int(number.get()),
            Detail::Severity(severity) => Self::Other {
                type_name: "severity",
                text: Cow::Borrowed(severity.as_str()),
            },
            Detail::Error(error) => Self::Other {
                type_name: "error",
                text: Cow::Owned(error.message()),
            },
            Detail::Map(map) => {
                let entries: Vec<String> = map
                    .iter()
                    .map(|(key, value)| format!("{key}:{value}"))
                    .collect();
                Self::Other {
                    type_name: "map",
                    text: Cow::Owned(format!("map[{}]", entries.join(" "))),
                }
            },
            Detail::Duration(duration) => Self::Other {
                type_name: "duration",
                text: Cow::Owned(format!("{duration:?}")),
            },
        }
    }
}

/// Substitution output plus the offset of the first error marker it emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatted {
    text: String,
    first_error: Option<usize>,
}

impl Formatted {
    /// The full output, markers included.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Byte offset of the first emitted marker.
    #[must_use]
    pub const fn first_error(&self) -> Option<usize> {
        self.first_error
    }

    /// Output before the first emitted marker.
    #[must_use]
    pub fn until_first_error(&self) -> &str {
        self.first_error
            .and_then(|offset| self.text.get(..offset))
            .unwrap_or(&self.text)
    }

    /// The full output, markers included.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    fn mark_error(&mut self) {
        if self.first_error.is_none() {
            self.first_error = Some(self.text.len());
        }
    }
}

/// Substitute details into `template`.
#[must_use]
pub fn format_details(template: &str, details: &[Detail]) -> String {
    substitute_details(template, details).into_string()
}

/// Substitute details into `template`, keeping the first marker offset.
#[must_use]
pub fn substitute_details(template: &str, details: &[Detail]) -> Formatted {
    let args: Vec<Arg<'_>> = details.iter().map(Arg::from).collect();
    substitute(template, &args)
}

/// Substitute `args` into `template`.
#[must_use]
pub fn sprintf(template: &str, args: &[Arg<'_>]) -> String {
    substitute(template, args).into_string()
}

/// Substitute `args` into `template`, keeping the first marker offset.
#[must_use]
pub fn substitute(template: &str, args: &[Arg<'_>]) -> Formatted {
    let mut formatted = Formatted {
        text: String::with_capacity(template.len()),
        first_error: None,
    };
    let mut chars = template.chars().peekable();
    let mut used = 0usize;

    while let Some(ch) = chars.next() {
        if ch != '%' {
            formatted.text.push(ch);
            continue;
        }

        let mut directive = Directive::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => directive.minus = true,
                '+' => directive.plus = true,
                '0' => directive.zero = true,
                ' ' => directive.space = true,
                '#' => directive.sharp = true,
                _ => break,
            }
            chars.next();
        }
        directive.width = read_number(&mut chars);
        if chars.peek() == Some(&'.') {
            chars.next();
            directive.precision = Some(read_number(&mut chars).unwrap_or(0));
        }

        let Some(verb) = chars.next() else {
            formatted.mark_error();
            formatted.text.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            formatted.text.push('%');
            continue;
        }
        let Some(arg) = args.get(used) else {
            formatted.mark_error();
            let _ = write!(formatted.text, "%!{verb}(MISSING)");
            continue;
        };
        used += 1;

        match render(verb, &directive, arg) {
            Some(piece) => piece.pad_into(&mut formatted.text, &directive),
            None => {
                formatted.mark_error();
                bad_verb(&mut formatted.text, verb, arg);
            },
        }
    }

    if let Some(extra) = args.get(used..).filter(|rest| !rest.is_empty()) {
        let listed: Vec<String> = extra
            .iter()
            .map(|arg| match arg {
                Arg::Nil => "<nil>".to_string(),
                _ => format!("{}={}", arg.type_name(), arg.plain()),
            })
            .collect();
        formatted.mark_error();
        let _ = write!(formatted.text, "%!(EXTRA {})", listed.join(", "));
    }

    formatted
}

#[derive(Debug, Default)]
struct Directive {
    minus: bool,
    plus: bool,
    zero: bool,
    space: bool,
    sharp: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

impl Directive {
    const fn sign(&self, negative: bool) -> &'static str {
        if negative {
            "-"
        } else if self.plus {
            "+"
        } else if self.space {
            " "
        } else {
            ""
        }
    }
}

struct Piece {
    sign: &'static str,
    prefix: &'static str,
    body: String,
    numeric: bool,
}

impl Piece {
    const fn text(body: String) -> Self {
        Self {
            sign: "",
            prefix: "",
            body,
            numeric: false,
        }
    }

    fn pad_into(self, out: &mut String, directive: &Directive) {
        let len = self.sign.len() + self.prefix.len() + self.body.chars().count();
        let fill = directive.width.map_or(0, |width| width.saturating_sub(len));

        if directive.minus {
            out.push_str(self.sign);
            out.push_str(self.prefix);
            out.push_str(&self.body);
            out.extend(std::iter::repeat_n(' ', fill));
        } else if directive.zero && self.numeric {
            out.push_str(self.sign);
            out.push_str(self.prefix);
            out.extend(std::iter::repeat_n('0', fill));
            out.push_str(&self.body);
        } else {
            out.extend(std::iter::repeat_n(' ', fill));
            out.push_str(self.sign);
            out.push_str(self.prefix);
            out.push_str(&self.body);
        }
    }
}

fn read_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|ch| ch.to_digit(10)) {
        chars.next();
        let current = value.unwrap_or(0);
        let digit = usize::try_from(digit).unwrap_or_default();
        value = Some(current.saturating_mul(10).saturating_add(digit));
    }
    value
}

fn render(verb: char, directive: &Directive, arg: &Arg<'_>) -> Option<Piece> {
    match (verb, arg) {
        ('v', Arg::Nil) => Some(Piece::text("<nil>".to_string())),
        ('v' | 'd', Arg::Int(value)) => {
            Some(integer(directive, *value < 0, value.unsigned_abs(), Radix::Decimal))
        },
        ('v' | 'd', Arg::Uint(value)) => Some(integer(directive, false, *value, Radix::Decimal)),
        ('x', Arg::Int(value)) => Some(integer(
            directive,
            *value < 0,
            value.unsigned_abs(),
            Radix::Lower,
        )),
        ('X', Arg::Int(value)) => Some(integer(
            directive,
            *value < 0,
            value.unsigned_abs(),
            Radix::Upper,
        )),
        ('x', Arg::Uint(value)) => Some(integer(directive, false, *value, Radix::Lower)),
        ('X', Arg::Uint(value)) => Some(integer(directive, false, *value, Radix::Upper)),
        ('x' | 'X', Arg::Str(text)) => {
            let mut body = String::with_capacity(text.len() * 2);
            for byte in text.bytes() {
                let _ = if verb == 'x' {
                    write!(body, "{byte:02x}")
                } else {
                    write!(body, "{byte:02X}")
                };
            }
            Some(Piece {
                sign: "",
                prefix: hex_prefix(directive, verb),
                body,
                numeric: false,
            })
        },
        ('v' | 's', Arg::Str(text)) => Some(Piece::text(truncate_chars(text, directive.precision))),
        ('q', Arg::Str(text)) => Some(Piece::text(format!("{text:?}"))),
        ('v' | 't', Arg::Bool(value)) => Some(Piece::text(value.to_string())),
        ('v' | 'g' | 'e' | 'f', Arg::Float(value)) => Some(float(directive, verb, *value)),
        ('v' | 's', Arg::Other { text, .. }) => {
            Some(Piece::text(truncate_chars(text, directive.precision)))
        },
        _ => None,
    }
}

fn bad_verb(out: &mut String, verb: char, arg: &Arg<'_>) {
    let _ = match arg {
        Arg::Nil => write!(out, "%!{verb}(<nil>)"),
        _ => write!(out, "%!{verb}({}={})", arg.type_name(), arg.plain()),
    };
}

#[derive(Clone, Copy)]
enum Radix {
    Decimal,
    Lower,
    Upper,
}

const fn hex_prefix(directive: &Directive, verb: char) -> &'static str {
    match (directive.sharp, verb) {
        (true, 'X') => "0X",
        (true, _) => "0x",
        _ => "",
    }
}

fn integer(directive: &Directive, negative: bool, magnitude: u64, radix: Radix) -> Piece {
    let (mut body, prefix) = match radix {
        Radix::Decimal => (magnitude.to_string(), ""),
        Radix::Lower => (format!("{magnitude:x}"), hex_prefix(directive, 'x')),
        Radix::Upper => (format!("{magnitude:X}"), hex_prefix(directive, 'X')),
    };
    if let Some(precision) = directive.precision {
        let missing = precision.saturating_sub(body.len());
        if missing > 0 {
            body.insert_str(0, &"0".repeat(missing));
        }
    }
    Piece {
        sign: directive.sign(negative),
        prefix,
        body,
        numeric: directive.precision.is_none(),
    }
}

fn float(directive: &Directive, verb: char, value: f64) -> Piece {
    let negative = value.is_sign_negative() && !value.is_nan();
    if value.is_nan() {
        return Piece::text("NaN".to_string());
    }
    if value.is_infinite() {
        let sign = if negative { "-" } else { "+" };
        return Piece::text(format!("{sign}Inf"));
    }

    let magnitude = value.abs();
    let body = match verb {
        'f' => format!("{magnitude:.*}", directive.precision.unwrap_or(6)),
        'e' => go_exponent(&format!("{magnitude:.*e}", directive.precision.unwrap_or(6))),
        _ => float_general(magnitude, directive.precision, directive.sharp),
    };
    Piece {
        sign: directive.sign(negative),
        prefix: "",
        body,
        numeric: true,
    }
}

/// `%g` on a non-negative finite value.
fn float_general(magnitude: f64, precision: Option<usize>, sharp: bool) -> String {
    let Some(precision) = precision else {
        let scientific = format!("{magnitude:e}");
        let exponent = exponent_of(&scientific);
        return if magnitude != 0.0 && !(-4..6).contains(&exponent) {
            go_exponent(&scientific)
        } else {
            format!("{magnitude}")
        };
    };

    let digits = precision.max(1);
    let scientific = format!("{magnitude:.*e}", digits - 1);
    let exponent = exponent_of(&scientific);
    let limit = i32::try_from(digits).unwrap_or(i32::MAX);
    if magnitude != 0.0 && (exponent < -4 || exponent >= limit) {
        let (mantissa, _) = scientific.split_once('e').unwrap_or((&scientific, "0"));
        let mantissa = if sharp {
            mantissa.to_string()
        } else {
            trim_fraction(mantissa)
        };
        return go_exponent(&format!("{mantissa}e{exponent}"));
    }
    let decimals = usize::try_from(limit - 1 - exponent).unwrap_or(0);
    let fixed = format!("{magnitude:.decimals$}");
    if sharp { fixed } else { trim_fraction(&fixed) }
}

fn exponent_of(scientific: &str) -> i32 {
    scientific
        .split_once('e')
        .and_then(|(_, exponent)| exponent.parse().ok())
        .unwrap_or(0)
}

fn trim_fraction(number: &str) -> String {
    if number.contains('.') {
        number
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        number.to_string()
    }
}

/// Rewrite Rust's `1.5e3` exponent form as `1.5e+03`.
fn go_exponent(scientific: &str) -> String {
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = exponent
                .strip_prefix('-')
                .map_or(("+", exponent), |digits| ("-", digits));
            format!("{mantissa}e{sign}{digits:0>2}")
        },
        None => scientific.to_string(),
    }
}

fn truncate_chars(text: &str, precision: Option<usize>) -> String {
    match precision {
        Some(limit) => text.chars().take(limit).collect(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::details;
    use crate::severity::Severity;

    #[test]
    fn substitutes_strings_and_integers() {
        let text = format_details("The favorite number for %s is %d", &details!["Robert", 7]);
        assert_eq!(text, "The favorite number for Robert is 7");
    }

    #[test]
    fn wrong_verb_leaves_marker() {
        let text = format_details("Value: %d", &details!["abc"]);
        assert_eq!(text, "Value: %!d(string=abc)");
        let formatted = substitute_details("Value: %d", &details!["abc"]);
        assert_eq!(formatted.first_error(), Some(7));
        assert_eq!(formatted.until_first_error(), "Value: ");
    }

    #[test]
    fn missing_and_extra_arguments_leave_markers() {
        assert_eq!(format_details("%s and %s", &details!["one"]), "one and %!s(MISSING)");
        assert_eq!(
            format_details("A test of INFO", &details!["x", 5]),
            "A test of INFO%!(EXTRA string=x, int=5)"
        );
        assert_eq!(format_details("100%", &details![]), "100%!(NOVERB)");
        assert_eq!(format_details("100%%", &details![]), "100%");
    }

    #[test]
    fn width_flags_and_precision() {
        let args = [Arg::Int(42)];
        assert_eq!(sprintf("senzing-9999%04d", &args), "senzing-99990042");
        assert_eq!(sprintf("[%5d]", &args), "[   42]");
        assert_eq!(sprintf("[%-5d]", &args), "[42   ]");
        assert_eq!(sprintf("[%+d]", &args), "[+42]");
        assert_eq!(sprintf("%#x %X", &[Arg::Int(255), Arg::Int(-255)]), "0xff -FF");
        assert_eq!(sprintf("%05d", &[Arg::Int(-7)]), "-0007");
        assert_eq!(sprintf("%.3s", &[Arg::Str("abcdef")]), "abc");
        assert_eq!(sprintf("%q", &[Arg::Str("say \"hi\"")]), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn floats_follow_general_and_fixed_forms() {
        assert_eq!(sprintf("%v", &[Arg::Float(1.5)]), "1.5");
        assert_eq!(sprintf("%v", &[Arg::Float(100.0)]), "100");
        assert_eq!(sprintf("%v", &[Arg::Float(1_000_000.0)]), "1e+06");
        assert_eq!(sprintf("%v", &[Arg::Float(0.000_01)]), "1e-05");
        assert_eq!(sprintf("%.2f", &[Arg::Float(3.14159)]), "3.14");
        assert_eq!(sprintf("%f", &[Arg::Float(-2.5)]), "-2.500000");
        assert_eq!(sprintf("%e", &[Arg::Float(1500.0)]), "1.500000e+03");
        assert_eq!(sprintf("%.3g", &[Arg::Float(1234.5678)]), "1.23e+03");
        assert_eq!(sprintf("%.3g", &[Arg::Float(1.0)]), "1");
    }

    #[test]
    fn non_scalar_details_use_their_display_text() {
        let text = format_details(
            "%s at %v (%v)",
            &details![
                Severity::Warn,
                Detail::error_msg("0019E|Configuration not found"),
                Option::<i64>::None
            ],
        );
        assert_eq!(text, "WARN at 0019E|Configuration not found (<nil>)");
        assert_eq!(format_details("%t/%d", &details![true, false]), "true/%!d(bool=false)");
    }

    #[test]
    fn literal_markers_in_arguments_are_not_errors() {
        let formatted = substitute_details("Info for %s", &details!["50%!off"]);
        assert_eq!(formatted.first_error(), None);
        assert_eq!(formatted.until_first_error(), "Info for 50%!off");

        let formatted = substitute_details("%s then %d", &details!["a%!b", "c"]);
        assert_eq!(formatted.as_str(), "a%!b then %!d(string=c)");
        assert_eq!(formatted.until_first_error(), "a%!b then ");

        assert_eq!(substitute("%s", &[]).until_first_error(), "");
    }
}
