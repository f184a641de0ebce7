use ratatui::{
    prelude::{Buffer, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use super::color;

/// Keys (alternatives) and what they do.
pub type KeyBinding<'a> = (&'a [&'a str], &'a str);

/// One-line controls footer: `Controls: W/↑-Rotate, A/D/←/→-Move, ...`.
#[derive(Debug)]
pub struct KeyBindingDisplay<'a> {
    bindings: &'a [KeyBinding<'a>],
}

impl<'a> KeyBindingDisplay<'a> {
    pub fn new(bindings: &'a [KeyBinding<'a>]) -> Self {
        Self { bindings }
    }
}

const KEY_STYLE: Style = Style::new().fg(color::GREEN).add_modifier(Modifier::BOLD);
const SEPARATOR_STYLE: Style = Style::new().fg(color::GRAY);
const DESCRIPTION_STYLE: Style = Style::new().fg(color::GREEN);

impl Widget for KeyBindingDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled("Controls: ", KEY_STYLE)];

        for (i, (keys, desc)) in self.bindings.iter().copied().enumerate() {
            if i > 0 {
                spans.push(Span::styled(", ", SEPARATOR_STYLE));
            }
            for (j, key) in keys.iter().copied().enumerate() {
                if j > 0 {
                    spans.push(Span::styled("/", SEPARATOR_STYLE));
                }
                spans.push(Span::styled(key, KEY_STYLE));
            }
            spans.push(Span::styled("-", SEPARATOR_STYLE));
            spans.push(Span::styled(desc, DESCRIPTION_STYLE));
        }

        Line::from(spans).centered().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::test_util;

    #[test]
    fn test_footer_text() {
        let bindings: &[KeyBinding] = &[(&["W", "↑"], "Rotate"), (&["Q"], "Quit")];
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        KeyBindingDisplay::new(bindings).render(area, &mut buf);
        let line = test_util::lines(&buf).concat();
        assert_eq!(line.trim(), "Controls: W/↑-Rotate, Q-Quit");
    }
}
