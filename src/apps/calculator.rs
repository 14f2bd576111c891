use crossterm::event::{Event, KeyCode};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::Paragraph;

use crate::registry::{AppComponent, AppContext};
use crate::ui::UiFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Op::Add => lhs + rhs,
            Op::Sub => lhs - rhs,
            Op::Mul => lhs * rhs,
            Op::Div => {
                if rhs == 0.0 {
                    f64::NAN
                } else {
                    lhs / rhs
                }
            }
        }
    }

    fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }
}

/// Keyboard-driven four-function calculator.
pub struct CalculatorApp {
    accumulator: f64,
    pending: Option<Op>,
    entry: String,
}

impl CalculatorApp {
    pub fn new() -> Self {
        Self {
            accumulator: 0.0,
            pending: None,
            entry: String::new(),
        }
    }

    fn entry_value(&self) -> f64 {
        self.entry.parse().unwrap_or(0.0)
    }

    fn commit_pending(&mut self) {
        let value = self.entry_value();
        self.accumulator = match self.pending.take() {
            Some(op) => op.apply(self.accumulator, value),
            None => value,
        };
        self.entry.clear();
    }

    fn display(&self) -> String {
        if self.entry.is_empty() {
            format_number(self.accumulator)
        } else {
            self.entry.clone()
        }
    }
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "error".to_string();
    }
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

impl AppComponent for CalculatorApp {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &AppContext) {
        let display_style = if ctx.focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let mut lines = vec![
            Line::styled(format!(" {}", self.display()), display_style),
            Line::raw(""),
        ];
        if let Some(op) = self.pending {
            lines.push(Line::raw(format!(
                " {} {} _",
                format_number(self.accumulator),
                op.symbol()
            )));
        }
        lines.push(Line::raw(" digits  + - * /  enter  c clears"));
        frame.render_widget(Paragraph::new(Text::from(lines)), area);
    }

    fn handle_event(&mut self, event: &Event, _ctx: &AppContext) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        match key.code {
            KeyCode::Char(ch @ ('0'..='9' | '.')) => {
                self.entry.push(ch);
                true
            }
            KeyCode::Char(ch @ ('+' | '-' | '*' | '/')) => {
                self.commit_pending();
                self.pending = Some(match ch {
                    '+' => Op::Add,
                    '-' => Op::Sub,
                    '*' => Op::Mul,
                    _ => Op::Div,
                });
                true
            }
            KeyCode::Char('=') | KeyCode::Enter => {
                self.commit_pending();
                true
            }
            KeyCode::Char('c') => {
                *self = Self::new();
                true
            }
            KeyCode::Backspace => {
                self.entry.pop();
                true
            }
            _ => false,
        }
    }
}
