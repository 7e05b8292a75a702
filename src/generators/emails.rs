//! Email generator: strings shaped like RFC 5322 §3.4.1 addr-spec,
//! simplified: no comments, no quoted strings. Exactly one `@` separating
//! a non-empty local part from a non-empty dotted domain.

use rand::rngs::StdRng;
use rand::Rng;

use super::Generator;

// Restricted atext subset for the local part; dotless so a single atom is
// always a valid dot-atom.
const LOCAL_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789_+-";
const LABEL_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const TLD_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

const MAX_LOCAL: usize = 12;
const MAX_LABEL: usize = 10;
const MIN_TLD: usize = 2;
const MAX_TLD: usize = 4;

/// Email-shaped strings: `local@label.tld`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Emails;

impl Emails {
    pub fn new() -> Self {
        Self
    }
}

fn draw_part(rng: &mut StdRng, chars: &[u8], min: usize, max: usize) -> String {
    let len = rng.random_range(min..=max);
    (0..len).map(|_| chars[rng.random_range(0..chars.len())] as char).collect()
}

fn shorten(part: &str) -> Vec<String> {
    let mut out = Vec::new();
    if part.len() > 1 {
        out.push(part[..1].to_string());
        let half = part.len() - part.len() / 2;
        if half > 1 && half < part.len() {
            out.push(part[..half].to_string());
        }
    }
    out
}

impl Generator for Emails {
    type Value = String;

    fn draw(&self, rng: &mut StdRng) -> String {
        let local = draw_part(rng, LOCAL_CHARS, 1, MAX_LOCAL);
        let label = draw_part(rng, LABEL_CHARS, 1, MAX_LABEL);
        let tld = draw_part(rng, TLD_CHARS, MIN_TLD, MAX_TLD);
        format!("{local}@{label}.{tld}")
    }

    fn shrink(&self, value: &String) -> Vec<String> {
        // Values are our own draws, so the shape `local@label.tld` holds.
        let Some((local, domain)) = value.split_once('@') else {
            return Vec::new();
        };
        let Some((label, tld)) = domain.split_once('.') else {
            return Vec::new();
        };

        let mut candidates = Vec::new();
        for shorter in shorten(local) {
            candidates.push(format!("{shorter}@{label}.{tld}"));
        }
        for shorter in shorten(label) {
            candidates.push(format!("{local}@{shorter}.{tld}"));
        }
        if tld.len() > MIN_TLD {
            candidates.push(format!("{local}@{label}.{}", &tld[..MIN_TLD]));
        }

        // Content simplification: same shape, all-'a' parts.
        let simplest = format!(
            "{}@{}.{}",
            "a".repeat(local.len()),
            "a".repeat(label.len()),
            "a".repeat(tld.len())
        );
        if simplest != *value {
            candidates.push(simplest);
        }

        candidates.retain(|c| c != value);
        candidates
    }
}
