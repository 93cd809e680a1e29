use heapless::Vec;

/// Slot budget rule used when splitting
///
/// The two rules differ at the boundaries, and callers depend on each, so
/// both are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SplitPolicy {
    /// Up to `max - 1` delimited pieces, then whatever is left of the input
    /// goes into the last slot. Always yields at least one slot when
    /// `max > 0`, even for empty input.
    Bounded,
    /// Up to `max` pieces. Stops at the end of input, so a trailing
    /// delimiter adds no empty slot and empty input yields nothing. Input
    /// left over when the budget runs out is dropped.
    Dynamic,
}

/// Split `input` on `delimiter` into `slots`, returning how many were filled
///
/// `slots.len()` is the slot budget; nothing is written past it. Adjacent
/// delimiters give empty slots. An empty delimiter never matches.
pub fn split<'a>(
    input: &'a str,
    delimiter: &str,
    policy: SplitPolicy,
    slots: &mut [&'a str],
) -> usize {
    let max = slots.len();
    let mut count = 0;
    let mut pos = 0;

    match policy {
        SplitPolicy::Bounded => {
            if max == 0 {
                return 0;
            }
            while count < max - 1 {
                let Some(at) = find_from(input, delimiter, pos) else {
                    break;
                };
                slots[count] = &input[pos..at];
                count += 1;
                pos = at + delimiter.len();
            }
            slots[count] = &input[pos..];
            count + 1
        }
        SplitPolicy::Dynamic => {
            while count < max && pos < input.len() {
                match find_from(input, delimiter, pos) {
                    Some(at) => {
                        slots[count] = &input[pos..at];
                        count += 1;
                        pos = at + delimiter.len();
                    }
                    None => {
                        slots[count] = &input[pos..];
                        count += 1;
                        break;
                    }
                }
            }
            count
        }
    }
}

/// [`split`] with [`SplitPolicy::Bounded`]
pub fn split_bounded<'a>(input: &'a str, delimiter: &str, slots: &mut [&'a str]) -> usize {
    split(input, delimiter, SplitPolicy::Bounded, slots)
}

/// [`split`] with [`SplitPolicy::Dynamic`]
pub fn split_dynamic<'a>(input: &'a str, delimiter: &str, slots: &mut [&'a str]) -> usize {
    split(input, delimiter, SplitPolicy::Dynamic, slots)
}

fn find_from(input: &str, delimiter: &str, pos: usize) -> Option<usize> {
    if delimiter.is_empty() {
        return None;
    }
    input[pos..].find(delimiter).map(|offset| pos + offset)
}

/// Number of `\n` characters in `text`
pub fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}

/// Split result holding at most `N` pieces borrowed from the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens<'a, const N: usize> {
    slots: Vec<&'a str, N>,
}

impl<'a, const N: usize> Tokens<'a, N> {
    /// Split `input` using `N` as the slot budget
    pub fn split(input: &'a str, delimiter: &str, policy: SplitPolicy) -> Self {
        let mut slots: [&'a str; N] = [""; N];
        let count = split(input, delimiter, policy, &mut slots);
        Self {
            slots: slots[..count].iter().copied().collect(),
        }
    }

    /// Number of filled slots
    pub fn count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Get a slot by index
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.slots.get(index).copied()
    }

    /// The first slot, usually the command name
    pub fn first(&self) -> Option<&'a str> {
        self.get(0)
    }

    pub fn as_slice(&self) -> &[&'a str] {
        &self.slots
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.slots.iter().copied()
    }
}
