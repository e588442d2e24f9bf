use cow_utils::CowUtils;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Named character references that are decoded in text and attribute values
pub static CHARACTER_ENTITY_REFS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "lt" => "<",
    "gt" => ">",
    "apos" => "'",
    "quot" => "\"",
    "amp" => "&",
};

lazy_static! {
    static ref ENTITY_REF: Regex = Regex::new(r"&([A-Za-z]+);").expect("valid regex");
}

/// Decodes the known named character references in `text`. Names are matched case-insensitively,
/// unknown references are left untouched.
pub fn replace_entity_refs(text: &str) -> Cow<'_, str> {
    ENTITY_REF.replace_all(text, |caps: &Captures| {
        let name = caps[1].cow_to_lowercase();
        match CHARACTER_ENTITY_REFS.get(name.as_ref()) {
            Some(replacement) => (*replacement).to_string(),
            None => caps[0].to_string(),
        }
    })
}
