#![deny(warnings)]

use crate::scanner::Scanner;

/*
 * The caller of these functions is expected to setup the scanner for a
 * clear start, ie: call scanner.ignore() to start fresh
 */

// scan numbers like [0-9]+(\.[0-9]*)? or \.[0-9]+
// No exponent form: on this keypad 'e' is Euler's constant, not
// scientific notation, so the number ends at the first non-digit.
pub fn scan_number<I: Iterator<Item = char>>(scanner: &mut Scanner<I>) -> Option<String> {
    let backtrack = scanner.pos();
    let digits = "0123456789";
    let has_int = scanner.skip_all(digits);
    // fractional part; a trailing dot after digits still reads as a number
    let has_dot = scanner.accept('.').is_some();
    let has_frac = has_dot && scanner.skip_all(digits);
    if !has_int && !has_frac {
        scanner.set_pos(backtrack);
        return None;
    }
    Some(scanner.extract_string())
}

// scan one operator or grouping glyph; Unicode keypad forms included
pub fn scan_calc_op<I: Iterator<Item = char>>(scanner: &mut Scanner<I>) -> Option<String> {
    if scanner.accept_any("+-−*×/÷%^!()").is_some() {
        Some(scanner.extract_string())
    } else {
        None
    }
}

// scan [a-zA-Z_][a-zA-Z0-9_]*
pub fn scan_identifier<I: Iterator<Item = char>>(scanner: &mut Scanner<I>) -> Option<String> {
    let alfa = concat!("abcdefghijklmnopqrstuvwxyz",
                       "ABCDEFGHIJKLMNOPQRSTUVWXYZ_");
    let alnum = concat!("0123456789",
                        "abcdefghijklmnopqrstuvwxyz",
                        "ABCDEFGHIJKLMNOPQRSTUVWXYZ_");
    scanner.accept_any(alfa)?;
    scanner.skip_all(alnum);
    Some(scanner.extract_string())
}

///////////////////////////////////////////////////////////////////////////////
