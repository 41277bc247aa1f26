//! Placeholder text for demo pages and generated records
//!
//! All output is deterministic so generated content and rendered pages are
//! stable across runs.

const LOREM_IPSUM: &str = "Bacon ipsum dolor amet strip steak t-bone chicken, sirloin \
    sausage ham hock landjaeger jowl. Pork belly frankfurter kielbasa, ribeye \
    capicola short loin tongue drumstick meatball. Short ribs corned beef beef \
    ribs, pastrami brisket tail turducken fatback leberkas. Shankle tri-tip \
    picanha ground round, spare ribs venison pancetta boudin buffalo.";

const WORDS: &[&str] = &[
    "bacon", "strip", "steak", "chicken", "sirloin", "sausage", "landjaeger", "jowl",
    "frankfurter", "kielbasa", "ribeye", "capicola", "tongue", "drumstick", "meatball",
    "pastrami", "brisket", "turducken", "fatback", "leberkas", "shankle", "picanha",
    "venison", "pancetta", "boudin", "buffalo",
];

/// A paragraph of placeholder text
#[must_use]
pub const fn lorem_ipsum() -> &'static str {
    LOREM_IPSUM
}

/// Placeholder word number `index`, cycling through the word list
#[must_use]
pub fn word(index: usize) -> &'static str {
    WORDS[index % WORDS.len()]
}

/// A short capitalized title made of `count` words starting at `index`
#[must_use]
pub fn title(index: usize, count: usize) -> String {
    let mut title = (index..index + count)
        .map(word)
        .collect::<Vec<_>>()
        .join(" ");
    if let Some(first) = title.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    title
}
