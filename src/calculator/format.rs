//! Textual rendering of calculation operands and results.

/// Magnitude at and above which numbers switch to scientific notation
const SCI_UPPER: f64 = 1e16;

/// Non-zero magnitude below which numbers switch to scientific notation
const SCI_LOWER: f64 = 1e-4;

/// Formats a number using the shortest representation that round-trips.
/// Integral values keep a trailing ".0" so that operands always read as real
/// numbers, and very large or very small magnitudes use a signed exponent of
/// at least two digits, for example "1e+20" or "1.5e-05".
pub fn number(v: f64) -> String {
    if v.is_nan() {
        return String::from("nan");
    }

    if v.is_infinite() {
        return String::from(if v.is_sign_negative() { "-inf" } else { "inf" });
    }

    let magnitude = v.abs();
    if magnitude != 0.0 && !(SCI_LOWER..SCI_UPPER).contains(&magnitude) {
        return scientific(v);
    }

    let s = format!("{}", v);
    if s.contains('.') {
        s
    } else {
        format!("{}.0", s)
    }
}

/// Formats a finite, non-zero number in scientific notation
fn scientific(v: f64) -> String {
    let s = format!("{:e}", v);
    let Some((mantissa, exponent)) = s.split_once('e') else {
        return s;
    };

    match exponent.parse::<i32>() {
        Ok(exp) if exp < 0 => format!("{}e-{:02}", mantissa, -exp),
        Ok(exp) => format!("{}e+{:02}", mantissa, exp),
        Err(_) => s,
    }
}
