//! The greeting message sequence.

/// Template lines for the greeting sequence. `{name}` is replaced with the
/// recipient's name when the list is built.
const GREETING_LINES: [&str; 4] = [
    "Hello {name},",
    "It's Your Special Day, Yeyey!",
    "I had to make something unforgettable for you, because you are so special to me!",
    "Do you want to see what I've created just for you?",
];

/// An ordered, immutable list of messages to display one at a time.
///
/// Indices handed out by the sequencer are always in `[0, len - 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageList {
    messages: Vec<String>,
}

impl MessageList {
    /// Builds the greeting sequence for the given recipient.
    pub fn greeting(recipient: &str) -> Self {
        let messages = GREETING_LINES
            .iter()
            .map(|line| line.replace("{name}", recipient))
            .collect();
        Self { messages }
    }

    /// Builds a list from arbitrary lines. Empty lists are not meaningful
    /// to the sequencer; callers provide at least one message.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            messages: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of messages in the sequence.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Index of the final message.
    pub fn last_index(&self) -> usize {
        self.messages.len().saturating_sub(1)
    }

    /// Returns the message at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.messages.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_interpolates_recipient() {
        let list = MessageList::greeting("Khadijah");
        assert_eq!(list.len(), 4);
        assert_eq!(list.get(0), Some("Hello Khadijah,"));
        // Only the first line carries the placeholder.
        assert_eq!(list.get(1), Some("It's Your Special Day, Yeyey!"));
    }

    #[test]
    fn test_index_bounds() {
        let list = MessageList::greeting("A");
        assert_eq!(list.last_index(), 3);
        assert!(list.get(3).is_some());
        assert!(list.get(4).is_none());
    }

    #[test]
    fn test_from_lines() {
        let list = MessageList::from_lines(["one", "two"]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.last_index(), 1);
        assert_eq!(list.get(1), Some("two"));
    }
}
