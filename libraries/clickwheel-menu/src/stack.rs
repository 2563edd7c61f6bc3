//! Navigation stack
//!
//! Frames are pushed on drill-down and popped on back. The bottom frame is
//! the root menu and is never popped.

use crate::item::MenuItem;

/// Opaque identity of a pushed frame
///
/// Asynchronous listings carry the id of the frame they fill; a result whose
/// frame has since been popped is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(u64);

/// One level of the menu hierarchy
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationFrame {
    id: FrameId,
    title: String,
    items: Vec<MenuItem>,
}

impl NavigationFrame {
    /// Frame identity
    pub fn id(&self) -> FrameId {
        self.id
    }

    /// Header shown above the list
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rows of this frame
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub(crate) fn replace_items(&mut self, items: Vec<MenuItem>) {
        self.items = items;
    }
}

/// Stack of frames, never empty
#[derive(Debug, Clone)]
pub struct NavigationStack {
    frames: Vec<NavigationFrame>,
    next_id: u64,
}

impl NavigationStack {
    /// Create a stack holding only the root frame
    pub fn new(root_title: impl Into<String>, root_items: Vec<MenuItem>) -> Self {
        Self {
            frames: vec![NavigationFrame {
                id: FrameId(0),
                title: root_title.into(),
                items: root_items,
            }],
            next_id: 1,
        }
    }

    /// Push a frame and return its id
    pub fn push(&mut self, title: impl Into<String>, items: Vec<MenuItem>) -> FrameId {
        let id = FrameId(self.next_id);
        self.next_id += 1;
        self.frames.push(NavigationFrame {
            id,
            title: title.into(),
            items,
        });
        id
    }

    /// Pop the top frame; the root stays
    pub fn pop(&mut self) -> Option<NavigationFrame> {
        if self.frames.len() > 1 {
            self.frames.pop()
        } else {
            None
        }
    }

    /// Frame currently shown
    pub fn top(&self) -> &NavigationFrame {
        // frames is never empty
        &self.frames[self.frames.len() - 1]
    }

    /// Number of frames, root included
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Whether `id` is still on the stack
    pub fn contains(&self, id: FrameId) -> bool {
        self.frames.iter().any(|f| f.id == id)
    }

    /// Mutable access to a frame by id
    pub fn frame_mut(&mut self, id: FrameId) -> Option<&mut NavigationFrame> {
        self.frames.iter_mut().find(|f| f.id == id)
    }

    /// Frames from root to top
    pub fn frames(&self) -> &[NavigationFrame] {
        &self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_never_popped() {
        let mut stack = NavigationStack::new("Root", Vec::new());
        assert!(stack.pop().is_none());
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top().title(), "Root");
    }

    #[test]
    fn ids_are_unique_across_pops() {
        let mut stack = NavigationStack::new("Root", Vec::new());
        let first = stack.push("A", Vec::new());
        stack.pop();
        let second = stack.push("B", Vec::new());

        assert_ne!(first, second);
        assert!(!stack.contains(first));
        assert!(stack.contains(second));
    }

    #[test]
    fn frame_lookup_by_id() {
        let mut stack = NavigationStack::new("Root", Vec::new());
        let id = stack.push("Songs", Vec::new());
        stack.push("Deeper", Vec::new());

        let frame = stack.frame_mut(id).unwrap();
        frame.replace_items(vec![MenuItem::placeholder("x")]);
        assert_eq!(stack.frames()[1].items().len(), 1);
    }
}
