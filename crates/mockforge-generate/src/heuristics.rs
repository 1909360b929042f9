//! Name-based generation policy.
//!
//! Every policy here is an ordered table of `(predicate, policy)` pairs
//! evaluated top to bottom, first match wins. Keeping the tables as
//! plain data keeps the heuristics inspectable and easy to extend.

use std::sync::OnceLock;

use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, CountryName, StreetName};
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::{Paragraph, Sentence, Word, Words};
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};
use regex::Regex;
use sha2::{Digest, Sha256};

use mockforge_core::{MockRecord, MockValue};

/// Predicate over a lowercased field name.
#[derive(Debug, Clone, Copy)]
pub enum NameMatch {
    EndsWith(&'static str),
    StartsWith(&'static str),
    Contains(&'static str),
    Equals(&'static str),
}

impl NameMatch {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            NameMatch::EndsWith(suffix) => name.ends_with(suffix),
            NameMatch::StartsWith(prefix) => name.starts_with(prefix),
            NameMatch::Contains(needle) => name.contains(needle),
            NameMatch::Equals(exact) => name == *exact,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum IntPolicy {
    Range(i64, i64),
    OneOf(&'static [i64]),
    /// Fixed-width number, e.g. 4 digits => [1000, 9999].
    Digits(u32),
}

const INT_RULES: &[(NameMatch, IntPolicy)] = &[
    // Specific id rules outrank the generic suffix rule so that a
    // field named `user_id` is not swallowed by the id-suffix match.
    (NameMatch::Contains("user_id"), IntPolicy::Range(1, 100)),
    (NameMatch::Contains("product_id"), IntPolicy::Range(1, 1_000)),
    (NameMatch::EndsWith("id"), IntPolicy::Range(1, 10_000)),
    (NameMatch::Contains("age"), IntPolicy::Range(18, 65)),
    (NameMatch::Contains("quantity"), IntPolicy::Range(0, 100)),
    (NameMatch::Contains("stock"), IntPolicy::Range(0, 1_000)),
    (NameMatch::Contains("count"), IntPolicy::Range(0, 50)),
    (
        NameMatch::Contains("status_code"),
        IntPolicy::OneOf(&[200, 201, 400, 404, 500]),
    ),
    (NameMatch::Contains("code"), IntPolicy::Digits(4)),
    (NameMatch::Contains("year"), IntPolicy::Range(2000, 2024)),
];

const DEFAULT_INT_RANGE: (i64, i64) = (1, 1_000);

/// Integer biased by the field name.
pub fn integer(field: &str, rng: &mut dyn RngCore) -> i64 {
    let name = field.to_lowercase();
    let policy = INT_RULES
        .iter()
        .find(|(matcher, _)| matcher.matches(&name))
        .map(|(_, policy)| *policy)
        .unwrap_or(IntPolicy::Range(DEFAULT_INT_RANGE.0, DEFAULT_INT_RANGE.1));

    match policy {
        IntPolicy::Range(min, max) => rng.random_range(min..=max),
        IntPolicy::OneOf(values) => values.choose(rng).copied().unwrap_or(0),
        IntPolicy::Digits(width) => {
            let min = 10_i64.pow(width.saturating_sub(1));
            let max = 10_i64.pow(width) - 1;
            rng.random_range(min..=max)
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum StringKind {
    Email,
    PersonName,
    Username,
    Title,
    Paragraphs,
    Paragraph,
    BodyText,
    Address,
    Street,
    City,
    Country,
    Phone,
    Url,
    AvatarUrl,
    ImageUrl,
    DateStr,
    TimestampStr,
    Code,
    Token,
    Uuid,
    Choice(&'static [&'static str]),
    PasswordHash,
    HexColor,
    CurrencyCode,
}

/// Regex patterns applied to the lowercased field name, in priority
/// order. Earlier, broader patterns deliberately shadow later ones
/// (`name` wins over `username`), matching the original policy.
const STRING_RULES: &[(&str, StringKind)] = &[
    ("email", StringKind::Email),
    ("name", StringKind::PersonName),
    ("fullname", StringKind::PersonName),
    ("username", StringKind::Username),
    ("title", StringKind::Title),
    ("content", StringKind::Paragraphs),
    ("description", StringKind::Paragraph),
    ("body", StringKind::BodyText),
    ("address", StringKind::Address),
    ("street", StringKind::Street),
    ("city", StringKind::City),
    ("country", StringKind::Country),
    ("phone", StringKind::Phone),
    ("tel", StringKind::Phone),
    ("mobile", StringKind::Phone),
    ("url", StringKind::Url),
    ("website", StringKind::Url),
    ("avatar", StringKind::AvatarUrl),
    ("image", StringKind::ImageUrl),
    ("date", StringKind::DateStr),
    ("_at$", StringKind::TimestampStr),
    ("_on$", StringKind::DateStr),
    ("code", StringKind::Code),
    ("token", StringKind::Token),
    ("uuid", StringKind::Uuid),
    ("status", StringKind::Choice(&["active", "inactive", "pending"])),
    ("state", StringKind::Choice(&["draft", "published", "archived"])),
    ("type", StringKind::Choice(&["admin", "user", "guest"])),
    ("role", StringKind::Choice(&["admin", "editor", "viewer"])),
    ("password", StringKind::PasswordHash),
    ("color", StringKind::HexColor),
    ("currency$", StringKind::CurrencyCode),
];

fn compiled_string_rules() -> &'static [(Regex, StringKind)] {
    static RULES: OnceLock<Vec<(Regex, StringKind)>> = OnceLock::new();
    RULES.get_or_init(|| {
        STRING_RULES
            .iter()
            .filter_map(|(pattern, kind)| Regex::new(pattern).ok().map(|re| (re, *kind)))
            .collect()
    })
}

/// String biased by the field name.
pub fn string(field: &str, rng: &mut dyn RngCore) -> String {
    let name = field.to_lowercase();
    for (pattern, kind) in compiled_string_rules() {
        if pattern.is_match(&name) {
            return render_string(*kind, rng);
        }
    }

    // Boolean-shaped names with a declared string type keep the
    // literal true/false wording.
    if name.starts_with("is_") || name.starts_with("has_") {
        return if rng.random_bool(0.5) { "true" } else { "false" }.to_string();
    }

    short_text(rng, 50)
}

fn render_string(kind: StringKind, rng: &mut dyn RngCore) -> String {
    match kind {
        StringKind::Email => SafeEmail().fake_with_rng(rng),
        StringKind::PersonName => Name().fake_with_rng(rng),
        StringKind::Username => {
            let name: String = Word().fake_with_rng(rng);
            format!("{}{}", name, rng.random_range(1..=999))
        }
        StringKind::Title => Sentence(3..5).fake_with_rng(rng),
        StringKind::Paragraphs => Paragraph(2..4).fake_with_rng(rng),
        StringKind::Paragraph => Paragraph(1..3).fake_with_rng(rng),
        StringKind::BodyText => Paragraph(3..6).fake_with_rng(rng),
        StringKind::Address => {
            let building: String = BuildingNumber().fake_with_rng(rng);
            let street: String = StreetName().fake_with_rng(rng);
            let city: String = CityName().fake_with_rng(rng);
            format!("{building} {street}, {city}")
        }
        StringKind::Street => {
            let building: String = BuildingNumber().fake_with_rng(rng);
            let street: String = StreetName().fake_with_rng(rng);
            format!("{building} {street}")
        }
        StringKind::City => CityName().fake_with_rng(rng),
        StringKind::Country => CountryName().fake_with_rng(rng),
        StringKind::Phone => PhoneNumber().fake_with_rng(rng),
        StringKind::Url => {
            let host: String = Word().fake_with_rng(rng);
            let path: String = Word().fake_with_rng(rng);
            format!("https://www.{host}.com/{path}")
        }
        StringKind::AvatarUrl => image_url(rng, 100, 100),
        StringKind::ImageUrl => image_url(rng, 640, 480),
        StringKind::DateStr => date(rng),
        StringKind::TimestampStr => timestamp(rng),
        StringKind::Code => alphanumeric_code(rng),
        StringKind::Token => {
            let mut bytes = [0_u8; 16];
            rng.fill_bytes(&mut bytes);
            hex::encode(bytes)
        }
        StringKind::Uuid => random_uuid(rng),
        StringKind::Choice(values) => values.choose(rng).unwrap_or(&"unknown").to_string(),
        StringKind::PasswordHash => {
            format!("$sha256${}", hex::encode(Sha256::digest(b"password123")))
        }
        StringKind::HexColor => format!("#{:06x}", rng.random_range(0..0x100_0000_u32)),
        StringKind::CurrencyCode => ["USD", "EUR", "GBP", "IDR", "BRL", "JPY"]
            .choose(rng)
            .unwrap_or(&"USD")
            .to_string(),
    }
}

const BOOL_RULES: &[(NameMatch, f64)] = &[
    (NameMatch::StartsWith("is_"), 0.5),
    (NameMatch::StartsWith("has_"), 0.5),
    (NameMatch::StartsWith("can_"), 0.5),
    (NameMatch::Contains("active"), 0.8),
    (NameMatch::Contains("verified"), 0.7),
    (NameMatch::Contains("enabled"), 0.9),
];

/// Boolean with a true-probability biased by the field name.
pub fn boolean(field: &str, rng: &mut dyn RngCore) -> bool {
    let name = field.to_lowercase();
    let probability = BOOL_RULES
        .iter()
        .find(|(matcher, _)| matcher.matches(&name))
        .map(|(_, p)| *p)
        .unwrap_or(0.5);
    rng.random_bool(probability)
}

/// Uniform float in [0, 1000] with two decimal places.
pub fn float(rng: &mut dyn RngCore) -> f64 {
    let value: f64 = rng.random_range(0.0..=1000.0);
    (value * 100.0).round() / 100.0
}

/// List value biased by the field name; unmatched names yield an empty
/// list rather than failing.
pub fn array(field: &str, rng: &mut dyn RngCore) -> MockValue {
    let name = field.to_lowercase();
    if name.contains("tags") {
        return MockValue::List(word_list(rng, 3));
    }
    if name.contains("categories") {
        return MockValue::List(word_list(rng, 2));
    }
    if name.contains("images") {
        let count = rng.random_range(1..=3);
        let urls = (0..count)
            .map(|_| MockValue::Text(image_url(rng, 640, 480)))
            .collect();
        return MockValue::List(urls);
    }
    if name.contains("items") {
        let count = rng.random_range(1..=5);
        let items = (0..count)
            .map(|_| {
                let mut item = MockRecord::with_capacity(2);
                item.insert("id", MockValue::Int(rng.random_range(1..=100)));
                item.insert("name", MockValue::Text(Word().fake_with_rng(rng)));
                MockValue::Record(item)
            })
            .collect();
        return MockValue::List(items);
    }
    MockValue::List(Vec::new())
}

/// Random calendar date in [2000, 2024] as `YYYY-MM-DD`.
pub fn date(rng: &mut dyn RngCore) -> String {
    let year = rng.random_range(2000..=2024);
    let month = rng.random_range(1..=12_u32);
    let day = rng.random_range(1..=28_u32);
    chrono::NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_default()
        .format("%Y-%m-%d")
        .to_string()
}

/// Random timestamp in [2000, 2024] as `YYYY-MM-DD HH:MM:SS`.
pub fn timestamp(rng: &mut dyn RngCore) -> String {
    let seconds = rng.random_range(0..86_400_u32);
    let time = chrono::NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
        .unwrap_or_default()
        .format("%H:%M:%S");
    format!("{} {}", date(rng), time)
}

/// Generic fallback for fields whose type cannot be resolved at all.
/// Generation never fails here; the worst case is short filler text.
pub fn guess(field: &str, rng: &mut dyn RngCore) -> MockValue {
    let name = field.to_lowercase();
    if name.ends_with("_id") || name == "id" {
        return MockValue::Int(rng.random_range(1..=1_000));
    }
    if name.starts_with("is_") || name.starts_with("has_") || name.starts_with("can_") {
        return MockValue::Bool(rng.random_bool(0.5));
    }
    if name.contains("date") || name.contains("time") {
        return MockValue::Text(date(rng));
    }
    MockValue::Text(short_text(rng, 30))
}

/// UUID-shaped string built from engine-owned randomness so seeded runs
/// stay reproducible.
pub fn random_uuid(rng: &mut dyn RngCore) -> String {
    let mut bytes = [0_u8; 16];
    rng.fill_bytes(&mut bytes);
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    uuid::Uuid::from_bytes(bytes).to_string()
}

fn word_list(rng: &mut dyn RngCore, count: usize) -> Vec<MockValue> {
    let words: Vec<String> = Words(count..count + 1).fake_with_rng(rng);
    words.into_iter().map(MockValue::Text).collect()
}

fn image_url(rng: &mut dyn RngCore, width: u32, height: u32) -> String {
    format!(
        "https://picsum.photos/{width}/{height}?random={}",
        rng.random_range(1..=1_000)
    )
}

fn alphanumeric_code(rng: &mut dyn RngCore) -> String {
    static PATTERN: OnceLock<Option<rand_regex::Regex>> = OnceLock::new();
    let compiled = PATTERN.get_or_init(|| rand_regex::Regex::compile("[A-Z]{2}[0-9]{3}", 4).ok());
    match compiled {
        Some(pattern) => rng.sample(pattern),
        None => format!(
            "{}{}{:03}",
            rng.random_range(b'A'..=b'Z') as char,
            rng.random_range(b'A'..=b'Z') as char,
            rng.random_range(0..1_000)
        ),
    }
}

fn short_text(rng: &mut dyn RngCore, max_len: usize) -> String {
    let mut text: String = Sentence(3..8).fake_with_rng(rng);
    text.truncate(max_len);
    text
}
