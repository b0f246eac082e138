//! Gutter stack.
//!
//! A gutter is a fixed-width decorative column beside a line. Its layout is
//! kept as a stack of immutable [`GutterState`] snapshots: pushing a partial
//! change copies every other field from the current top, and popping restores
//! exactly the previous snapshot. The base state can never be popped.

use markup::metrics::pad;
use markup::{Align, Color, ansi};

use crate::error::GutterError;

/// One scope of gutter layout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GutterState {
    /// Field width in visible columns. Zero hides the gutter.
    pub width: usize,
    /// Cell content, possibly already styled.
    pub content: String,
    pub align: Align,
    /// Background applied to the whole padded field.
    pub background: Option<Color>,
}

impl GutterState {
    pub fn new(width: usize, content: impl Into<String>, align: Align) -> Self {
        Self {
            width,
            content: content.into(),
            align,
            background: None,
        }
    }

    pub fn with_background(mut self, color: impl Into<Color>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Render this state as a field of `width` visible columns.
    ///
    /// ```
    /// use markup::Align;
    /// use printer::GutterState;
    ///
    /// assert_eq!(GutterState::new(3, "5", Align::Middle).render(), " 5 ");
    /// assert_eq!(GutterState::new(0, "5", Align::Middle).render(), "");
    /// ```
    pub fn render(&self) -> String {
        if self.width == 0 {
            return String::new();
        }

        let field = pad(&self.content, self.width, self.align);
        match self.background {
            Some(color) => ansi::on(color, &field),
            None => field,
        }
    }
}

/// Stack of gutter states with an enabled flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gutter {
    base: GutterState,
    pushed: Vec<GutterState>,
    enabled: bool,
}

impl Default for Gutter {
    fn default() -> Self {
        Self::from_state(GutterState::default())
    }
}

impl Gutter {
    /// An enabled gutter whose base state shows `content` in `width` columns,
    /// centered.
    pub fn new(content: impl Into<String>, width: usize) -> Self {
        Self::from_state(GutterState::new(width, content, Align::Middle))
    }

    pub fn from_state(base: GutterState) -> Self {
        Self {
            base,
            pushed: Vec::new(),
            enabled: true,
        }
    }

    /// The state currently in effect.
    pub fn top(&self) -> &GutterState {
        self.pushed.last().unwrap_or(&self.base)
    }

    /// Number of scopes pushed on top of the base state.
    pub fn depth(&self) -> usize {
        self.pushed.len()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Toggle rendering without touching the stack.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn derive(&mut self, change: impl FnOnce(&mut GutterState)) {
        let mut state = self.top().clone();
        change(&mut state);
        self.pushed.push(state);
    }

    pub fn push_width(&mut self, width: usize) {
        self.derive(|state| state.width = width);
    }

    pub fn push_content(&mut self, content: impl Into<String>) {
        let content = content.into();
        self.derive(|state| state.content = content);
    }

    pub fn push_align(&mut self, align: Align) {
        self.derive(|state| state.align = align);
    }

    pub fn push_background(&mut self, color: impl Into<Color>) {
        let color = color.into();
        self.derive(|state| state.background = Some(color));
    }

    /// Push new width, content and alignment; the background is inherited.
    pub fn push_all(&mut self, width: usize, content: impl Into<String>, align: Align) {
        let content = content.into();
        self.derive(|state| {
            state.width = width;
            state.content = content;
            state.align = align;
        });
    }

    /// Push a complete snapshot.
    pub fn push_state(&mut self, state: GutterState) {
        self.pushed.push(state);
    }

    /// Remove the `n` most recent states.
    ///
    /// Fails without modifying the stack if that would remove the base state.
    ///
    /// ```
    /// use printer::{Gutter, GutterError};
    ///
    /// let mut gutter = Gutter::default();
    /// gutter.push_width(3);
    /// assert_eq!(
    ///     gutter.pop(2),
    ///     Err(GutterError::Underflow { requested: 2, available: 1 })
    /// );
    /// assert_eq!(gutter.depth(), 1);
    /// ```
    pub fn pop(&mut self, n: usize) -> Result<(), GutterError> {
        let available = self.pushed.len();
        if n > available {
            return Err(GutterError::Underflow {
                requested: n,
                available,
            });
        }
        self.pushed.truncate(available - n);
        Ok(())
    }

    /// Pop down to the base state.
    pub fn clear(&mut self) {
        self.pushed.clear();
    }

    /// Replace the state currently in effect, which is the base state when
    /// nothing has been pushed.
    pub fn replace_top(&mut self, state: GutterState) {
        match self.pushed.last_mut() {
            Some(top) => *top = state,
            None => self.base = state,
        }
    }

    /// Render the top state, or nothing when disabled.
    pub fn render(&self) -> String {
        if !self.enabled {
            return String::new();
        }
        self.top().render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markup::NamedColor;

    #[test]
    fn partial_push_copies_other_fields() {
        let mut gutter = Gutter::from_state(
            GutterState::new(2, "x", Align::Left).with_background(NamedColor::Blue),
        );
        gutter.push_width(5);

        let top = gutter.top();
        assert_eq!(top.width, 5);
        assert_eq!(top.content, "x");
        assert_eq!(top.align, Align::Left);
        assert_eq!(top.background, Some(Color::Named(NamedColor::Blue)));
    }

    #[test]
    fn push_all_inherits_background() {
        let mut gutter = Gutter::default();
        gutter.push_background(Color::Rgb(1, 1, 1));
        gutter.push_all(1, "┃", Align::Right);

        assert_eq!(
            gutter.top(),
            &GutterState::new(1, "┃", Align::Right).with_background(Color::Rgb(1, 1, 1))
        );
    }

    #[test]
    fn pop_restores_previous_state() {
        let mut gutter = Gutter::new("a", 1);
        let before = gutter.top().clone();

        gutter.push_content("b");
        gutter.push_align(Align::Right);
        gutter.push_width(4);
        gutter.pop(3).unwrap();

        assert_eq!(gutter.top(), &before);
        assert_eq!(gutter.depth(), 0);
    }

    #[test]
    fn pop_zero_is_a_no_op() {
        let mut gutter = Gutter::default();
        assert!(gutter.pop(0).is_ok());
    }

    #[test]
    fn underflow_leaves_stack_untouched() {
        let mut gutter = Gutter::default();
        assert_eq!(
            gutter.pop(1),
            Err(GutterError::Underflow {
                requested: 1,
                available: 0
            })
        );
        assert_eq!(gutter.top(), &GutterState::default());
    }

    #[test]
    fn clear_keeps_base() {
        let mut gutter = Gutter::new("base", 4);
        gutter.push_content("one");
        gutter.push_content("two");
        gutter.clear();
        assert_eq!(gutter.depth(), 0);
        assert_eq!(gutter.top().content, "base");
    }

    #[test]
    fn replace_top_without_pushes_changes_base() {
        let mut gutter = Gutter::default();
        gutter.replace_top(GutterState::new(2, "7", Align::Right));
        assert_eq!(gutter.depth(), 0);
        assert_eq!(gutter.render(), " 7");
    }

    #[test]
    fn render_centers_content() {
        let mut gutter = Gutter::default();
        gutter.push_width(3);
        gutter.push_content("5");
        assert_eq!(gutter.render(), " 5 ");
    }

    #[test]
    fn render_zero_width_is_empty() {
        let gutter = Gutter::new("hidden", 0);
        assert_eq!(gutter.render(), "");
    }

    #[test]
    fn disabled_gutter_keeps_state() {
        let mut gutter = Gutter::new("x", 1);
        gutter.set_enabled(false);
        assert_eq!(gutter.render(), "");

        gutter.set_enabled(true);
        assert_eq!(gutter.render(), "x");
    }

    #[test]
    fn background_covers_padded_field() {
        let mut gutter = Gutter::new("x", 3);
        gutter.push_background(Color::Rgb(0, 0, 255));
        assert_eq!(gutter.render(), "\x1b[48;2;0;0;255m x \x1b[0m");
    }
}
