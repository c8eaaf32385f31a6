use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::index::step;
use crate::{CopyKind, DisplaySlot};

/// Computes the render window (previous, current, next) around `current`.
///
/// Returns `None` for an empty collection. With fewer than three items the window still has three
/// slots; the repeated ones are tagged so renderers can tell the on-screen instances apart:
/// - one item: `[original, copy, copy2]`
/// - two items: `[original, original, copy]` where the last slot repeats the first
pub fn display_slots(count: usize, current: usize) -> Option<[DisplaySlot; 3]> {
    if count == 0 {
        return None;
    }
    let copies = match count {
        1 => [CopyKind::Original, CopyKind::Copy, CopyKind::Copy2],
        2 => [CopyKind::Original, CopyKind::Original, CopyKind::Copy],
        _ => [CopyKind::Original; 3],
    };
    let slot = |i: usize, delta: i64| DisplaySlot {
        index: step(current, delta, count),
        copy: copies[i],
    };
    Some([slot(0, -1), slot(1, 0), slot(2, 1)])
}

impl DisplaySlot {
    /// Builds the render key for this slot from the item's own key.
    ///
    /// Originals keep their key; duplicates get `-copy` / `-copy2` appended.
    pub fn key<K: fmt::Display + ?Sized>(&self, key: &K) -> String {
        match self.copy.suffix() {
            Some(suffix) => format!("{key}-{suffix}"),
            None => key.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayItem<'a, T> {
    pub slot: DisplaySlot,
    pub item: &'a T,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyedDisplayItem<'a, T> {
    pub slot: DisplaySlot,
    pub item: &'a T,
    /// The item's key, suffixed when the slot is a duplicate. `None` if the item has no key.
    pub key: Option<String>,
}

/// Resolves the render window against the item collection.
///
/// Returns an empty `Vec` when `items` is empty, three entries otherwise.
pub fn display_window<T>(items: &[T], current: usize) -> Vec<DisplayItem<'_, T>> {
    let Some(slots) = display_slots(items.len(), current) else {
        return Vec::new();
    };
    slots
        .into_iter()
        .map(|slot| DisplayItem {
            slot,
            item: &items[slot.index],
        })
        .collect()
}

/// Like [`display_window`], also rewriting identity keys of duplicated slots.
///
/// `key_of` returns the key an item carries, if any.
pub fn display_window_keyed<T, K: fmt::Display>(
    items: &[T],
    current: usize,
    mut key_of: impl FnMut(&T) -> Option<K>,
) -> Vec<KeyedDisplayItem<'_, T>> {
    display_window(items, current)
        .into_iter()
        .map(|d| KeyedDisplayItem {
            slot: d.slot,
            item: d.item,
            key: key_of(d.item).map(|k| d.slot.key(&k)),
        })
        .collect()
}
