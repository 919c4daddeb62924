//! Markdown to styled terminal lines.
//!
//! Maps pulldown-cmark events onto ratatui lines. Covers the constructs
//! slides actually use: headings, paragraphs, emphasis, inline and fenced
//! code, lists, block quotes, and thematic breaks. Anything unrecognized
//! falls back to plain text.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::theme::Theme;

/// Width of the rendered thematic-break line.
const RULE_WIDTH: usize = 24;

/// Renders a slide's markdown source into display lines.
pub fn render_markdown(source: &str, theme: &Theme) -> Vec<Line<'static>> {
    let mut renderer = Renderer::new(theme);
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    for event in Parser::new_ext(source, options) {
        renderer.handle(event);
    }
    renderer.finish()
}

struct Renderer<'t> {
    theme: &'t Theme,
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    style_stack: Vec<Style>,
    /// One entry per open list: next ordered number, or None for bullets.
    list_stack: Vec<Option<u64>>,
    quote_depth: usize,
    code_block: Option<String>,
}

impl<'t> Renderer<'t> {
    fn new(theme: &'t Theme) -> Self {
        Self {
            theme,
            lines: Vec::new(),
            spans: Vec::new(),
            style_stack: vec![Style::default()],
            list_stack: Vec::new(),
            quote_depth: 0,
            code_block: None,
        }
    }

    fn current_style(&self) -> Style {
        self.style_stack.last().copied().unwrap_or_default()
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => {
                if let Some(buffer) = self.code_block.as_mut() {
                    buffer.push_str(&text);
                } else {
                    self.spans
                        .push(Span::styled(text.into_string(), self.current_style()));
                }
            }
            Event::Code(code) => {
                let style = self.current_style().fg(self.theme.code);
                self.spans.push(Span::styled(code.into_string(), style));
            }
            Event::SoftBreak => self.spans.push(Span::raw(" ")),
            Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.flush_line();
                self.lines.push(Line::from(Span::styled(
                    "─".repeat(RULE_WIDTH),
                    Style::default().fg(self.theme.footer),
                )));
                self.lines.push(Line::default());
            }
            Event::TaskListMarker(done) => {
                let marker = if done { "[x] " } else { "[ ] " };
                self.spans
                    .push(Span::styled(marker, Style::default().fg(self.theme.accent)));
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush_line();
                let mut style = Style::default()
                    .fg(self.theme.heading)
                    .add_modifier(Modifier::BOLD);
                if level == HeadingLevel::H1 {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                self.style_stack.push(style);
            }
            Tag::Emphasis => self.push_inline(Modifier::ITALIC),
            Tag::Strong => self.push_inline(Modifier::BOLD),
            Tag::Strikethrough => self.push_inline(Modifier::CROSSED_OUT),
            Tag::Link { .. } => self.push_inline(Modifier::UNDERLINED),
            Tag::BlockQuote(_) => {
                self.flush_line();
                self.quote_depth += 1;
            }
            Tag::CodeBlock(_) => {
                self.flush_line();
                self.code_block = Some(String::new());
            }
            Tag::List(start) => self.list_stack.push(start),
            Tag::Item => {
                self.flush_line();
                let indent = "  ".repeat(self.list_stack.len().saturating_sub(1));
                let marker = match self.list_stack.last_mut() {
                    Some(Some(number)) => {
                        let marker = format!("{indent}{number}. ");
                        *number += 1;
                        marker
                    }
                    _ => format!("{indent}• "),
                };
                self.spans
                    .push(Span::styled(marker, Style::default().fg(self.theme.accent)));
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) => {
                self.style_stack.pop();
                self.flush_line();
                self.lines.push(Line::default());
            }
            TagEnd::Paragraph => {
                self.flush_line();
                self.lines.push(Line::default());
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link => {
                self.style_stack.pop();
            }
            TagEnd::BlockQuote(_) => {
                self.flush_line();
                self.quote_depth = self.quote_depth.saturating_sub(1);
            }
            TagEnd::CodeBlock => {
                if let Some(buffer) = self.code_block.take() {
                    let style = Style::default().fg(self.theme.code);
                    for line in buffer.lines() {
                        self.lines.push(Line::from(vec![
                            Span::raw("  "),
                            Span::styled(line.to_string(), style),
                        ]));
                    }
                }
                self.lines.push(Line::default());
            }
            TagEnd::Item => self.flush_line(),
            TagEnd::List(_) => {
                self.list_stack.pop();
                if self.list_stack.is_empty() {
                    self.lines.push(Line::default());
                }
            }
            _ => {}
        }
    }

    fn push_inline(&mut self, modifier: Modifier) {
        self.style_stack.push(self.current_style().add_modifier(modifier));
    }

    fn flush_line(&mut self) {
        if self.spans.is_empty() {
            return;
        }
        let mut spans = Vec::with_capacity(self.spans.len() + 1);
        if self.quote_depth > 0 {
            spans.push(Span::styled(
                "▌ ".repeat(self.quote_depth),
                Style::default().fg(self.theme.accent),
            ));
        }
        spans.append(&mut self.spans);
        self.lines.push(Line::from(spans));
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush_line();
        while self
            .lines
            .last()
            .is_some_and(|line| line.spans.is_empty())
        {
            self.lines.pop();
        }
        self.lines
    }
}
