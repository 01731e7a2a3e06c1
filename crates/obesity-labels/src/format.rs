/// Fallback formatting for names missing from the translation table.
///
/// Underscores become spaces. An alphabetic character is uppercased when the
/// preceding character is not alphabetic and lowercased otherwise, so
/// `"Alto_consumo"` becomes `"Alto Consumo"` and `"b_fuma"` becomes `"B Fuma"`.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_alphabetic = false;
    for ch in text.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if previous_alphabetic {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            previous_alphabetic = true;
        } else {
            out.push(ch);
            previous_alphabetic = false;
        }
    }
    out
}
