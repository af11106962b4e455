use crate::history::History;
use tally::{evaluate, MathContext};

/// Platform feedback hook: a short pulse is requested on every key press.
/// Platforms without haptics install nothing and the request is silent.
pub trait Haptics {
    fn pulse(&self);
}

#[derive(Clone, Debug, PartialEq)]
pub enum Key {
    Clear,
    Delete,
    Equals,
    Op(String),
    Input(String),
}

impl Key {
    const OPERATORS: [&'static str; 6] = ["+", "−", "×", "÷", "%", "^"];

    /// Classify a button value the way the keypad sends them: "C", "DEL",
    /// "=", the operator glyphs, and everything else as append text
    /// (digits, ".", "sin(", "π", "^2", ...).
    pub fn from_label(value: &str) -> Key {
        match value {
            "C" => Key::Clear,
            "DEL" => Key::Delete,
            "=" => Key::Equals,
            v if Self::OPERATORS.contains(&v) => Key::Op(v.to_string()),
            v => Key::Input(v.to_string()),
        }
    }
}

/// The input state machine. Two states: typing an expression, or showing
/// a committed result (`result_shown`). Everything else is derived.
pub struct Calculator {
    expression: String,
    live_preview: String,
    last_equation: String,
    result_shown: bool,
    history: History,
    context: MathContext,
    haptics: Option<Box<dyn Haptics>>,
}

impl Calculator {
    pub fn new() -> Calculator {
        Calculator::with_context(MathContext::new())
    }

    pub fn with_context(context: MathContext) -> Calculator {
        Calculator {
            expression: String::new(),
            live_preview: String::new(),
            last_equation: String::new(),
            result_shown: false,
            history: History::new(),
            context,
            haptics: None,
        }
    }

    pub fn set_haptics(&mut self, sink: Box<dyn Haptics>) {
        self.haptics = Some(sink);
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn live_preview(&self) -> &str {
        &self.live_preview
    }

    pub fn last_equation(&self) -> &str {
        &self.last_equation
    }

    pub fn result_shown(&self) -> bool {
        self.result_shown
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn context_mut(&mut self) -> &mut MathContext {
        &mut self.context
    }

    pub fn press(&mut self, key: Key) {
        tracing::trace!(?key, "key pressed");
        self.pulse();
        match key {
            Key::Clear => {
                self.expression.clear();
                self.live_preview.clear();
                self.last_equation.clear();
                self.result_shown = false;
            }
            Key::Delete => {
                if self.result_shown {
                    // backspace on a shown result wipes the whole thing
                    self.expression.clear();
                    self.last_equation.clear();
                    self.result_shown = false;
                } else {
                    self.expression.pop();
                }
                self.refresh_preview();
            }
            Key::Equals => self.commit(),
            Key::Op(op) => {
                if self.result_shown {
                    // chain a new operation off the previous result
                    self.result_shown = false;
                    self.last_equation.clear();
                }
                self.expression.push_str(&op);
                self.refresh_preview();
            }
            Key::Input(text) => {
                if self.result_shown {
                    self.expression.clear();
                    self.last_equation.clear();
                    self.result_shown = false;
                }
                self.expression.push_str(&text);
                self.refresh_preview();
            }
        }
    }

    /// Load a history entry back into the buffer for editing.
    /// Returns false and changes nothing for an unknown id.
    pub fn select_history(&mut self, id: u64) -> bool {
        let expression = match self.history.find(id) {
            Some(entry) => entry.expression.clone(),
            None => return false,
        };
        tracing::debug!(id, "history entry selected");
        self.expression = expression;
        self.live_preview.clear();
        self.result_shown = false;
        true
    }

    // Equals: an empty buffer or a failing expression changes nothing;
    // the buffer stays editable either way.
    fn commit(&mut self) {
        if self.expression.is_empty() {
            return;
        }
        match evaluate(&self.expression, &self.context) {
            Ok(result) => {
                self.history.record(&self.expression, &result);
                tracing::debug!(
                    expression = %self.expression,
                    %result,
                    "equals committed"
                );
                self.last_equation = std::mem::replace(&mut self.expression, result);
                self.result_shown = true;
                self.live_preview.clear();
            }
            Err(err) => {
                tracing::debug!(expression = %self.expression, %err, "equals rejected");
            }
        }
    }

    // preview only makes sense once the buffer holds something beyond a
    // bare number: an operator, a postfix, a root glyph or a grouping
    fn previewable(expr: &str) -> bool {
        expr.chars().any(|c| {
            matches!(
                c,
                '+' | '-' | '−' | '×' | '÷' | '*' | '/' | '%' | '^' | '√' | '∛' | '('
            )
        })
    }

    fn refresh_preview(&mut self) {
        if self.result_shown
            || self.expression.is_empty()
            || !Self::previewable(&self.expression)
        {
            self.live_preview.clear();
            return;
        }
        // failures while mid-expression stay silent, never an error marker
        self.live_preview = evaluate(&self.expression, &self.context).unwrap_or_default();
    }

    fn pulse(&self) {
        if let Some(sink) = &self.haptics {
            sink.pulse();
        }
    }
}

impl Default for Calculator {
    fn default() -> Calculator {
        Calculator::new()
    }
}
