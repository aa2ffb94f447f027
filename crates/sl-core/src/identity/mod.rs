//! Content-derived item identifiers.
//!
//! Ids are a 32-bit rolling hash (`h = h * 31 + unit`, two's-complement wrap)
//! over the UTF-16 code units of the content, rendered as `item_<base36>`.
//! The arithmetic matches the ids the web client derives for the same list,
//! so both sides agree on what a given item is called.
//!
//! Collisions are resolved by probing `content_1`, `content_2`, ... until a
//! free id turns up. There is no upper bound on the probe; with a 32-bit id
//! space against lists of a few hundred items this is an accepted risk, not a
//! proven guarantee.

use crate::ids::ItemId;
use crate::ports::ContentRegistryPort;

pub const ID_PREFIX: &str = "item_";

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Hash `content` (or `content_<counter>` when `counter > 0`) into an id.
pub fn simple_hash(content: &str, counter: u32) -> ItemId {
    let hash = if counter > 0 {
        rolling_hash(&format!("{content}_{counter}"))
    } else {
        rolling_hash(content)
    };
    // Widen first so i32::MIN maps to 2147483648 instead of overflowing.
    let magnitude = i64::from(hash).unsigned_abs();
    ItemId::from_string(format!("{ID_PREFIX}{}", to_base36(magnitude)))
}

/// First probe of `content` whose id is not live in `registry`.
pub fn unique_id(content: &str, registry: &dyn ContentRegistryPort) -> ItemId {
    let mut counter = 0;
    let mut id = simple_hash(content, counter);

    while registry.contains(&id) {
        counter += 1;
        #[cfg(feature = "tracing")]
        tracing::debug!(item_id = %id, counter, "item id collision, probing next counter");
        id = simple_hash(content, counter);
    }

    id
}

fn rolling_hash(input: &str) -> i32 {
    input
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}
