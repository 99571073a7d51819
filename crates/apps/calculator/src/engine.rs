//! Chained infix calculator state machine.
//!
//! Operators evaluate left to right as they are chained (`2 + 3 * 4` is
//! `(2 + 3) * 4`), matching how desk calculators behave.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcAction {
    Digit(char),
    Decimal,
    Binary(BinaryOp),
    Equals,
    Clear,
    Backspace,
    ToggleSign,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    entry: String,
    accumulator: Option<f64>,
    pending_op: Option<BinaryOp>,
    replace_entry: bool,
    error: Option<&'static str>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            entry: "0".to_string(),
            accumulator: None,
            pending_op: None,
            replace_entry: false,
            error: None,
        }
    }
}

impl CalculatorState {
    pub fn apply(&mut self, action: CalcAction) {
        match action {
            CalcAction::Digit(digit) => self.input_digit(digit),
            CalcAction::Decimal => self.input_decimal(),
            CalcAction::Binary(op) => self.set_pending_operation(op),
            CalcAction::Equals => self.equals(),
            CalcAction::Clear => *self = Self::default(),
            CalcAction::Backspace => self.backspace(),
            CalcAction::ToggleSign => self.toggle_sign(),
        }
    }

    /// Text shown in the main display: the error message when one is set,
    /// otherwise the current entry.
    pub fn display_text(&self) -> String {
        match self.error {
            Some(message) => message.to_string(),
            None => self.entry.clone(),
        }
    }

    /// Secondary line showing the pending expression, if any.
    pub fn expression_text(&self) -> String {
        match (self.accumulator, self.pending_op) {
            (Some(acc), Some(op)) if self.replace_entry => {
                format!("{} {}", format_number(acc), op.symbol())
            }
            (Some(acc), Some(op)) => {
                format!("{} {} {}", format_number(acc), op.symbol(), self.entry)
            }
            _ => String::new(),
        }
    }

    fn current_value(&self) -> Option<f64> {
        if self.error.is_some() {
            return None;
        }
        self.entry.parse::<f64>().ok()
    }

    fn input_digit(&mut self, digit: char) {
        if self.error.is_some() {
            *self = Self::default();
        }
        if self.replace_entry {
            self.entry = "0".to_string();
            self.replace_entry = false;
        }
        if self.entry == "0" {
            self.entry = digit.to_string();
        } else if self.entry == "-0" {
            self.entry = format!("-{digit}");
        } else {
            self.entry.push(digit);
        }
    }

    fn input_decimal(&mut self) {
        if self.error.is_some() {
            *self = Self::default();
        }
        if self.replace_entry {
            self.entry = "0".to_string();
            self.replace_entry = false;
        }
        if !self.entry.contains('.') {
            self.entry.push('.');
        }
    }

    fn backspace(&mut self) {
        if self.error.is_some() {
            *self = Self::default();
            return;
        }
        if self.replace_entry {
            self.entry = "0".to_string();
            self.replace_entry = false;
            return;
        }
        self.entry.pop();
        if self.entry.is_empty() || self.entry == "-" {
            self.entry = "0".to_string();
        }
    }

    fn toggle_sign(&mut self) {
        if self.error.is_some() || self.entry == "0" {
            return;
        }
        if let Some(stripped) = self.entry.strip_prefix('-') {
            self.entry = stripped.to_string();
        } else {
            self.entry = format!("-{}", self.entry);
        }
    }

    fn set_pending_operation(&mut self, op: BinaryOp) {
        let Some(current) = self.current_value() else {
            return;
        };

        let base = match (self.accumulator, self.pending_op, self.replace_entry) {
            // Operator pressed twice in a row just swaps the pending op.
            (Some(acc), Some(_), true) => acc,
            (Some(acc), Some(pending), false) => match apply_binary(acc, pending, current) {
                Ok(value) => value,
                Err(message) => {
                    self.set_error(message);
                    return;
                }
            },
            _ => current,
        };

        self.accumulator = Some(base);
        self.pending_op = Some(op);
        self.entry = format_number(base);
        self.replace_entry = true;
    }

    fn equals(&mut self) {
        let (Some(acc), Some(op)) = (self.accumulator, self.pending_op) else {
            return;
        };
        let Some(rhs) = self.current_value() else {
            return;
        };

        match apply_binary(acc, op, rhs) {
            Ok(result) => {
                self.entry = format_number(result);
                self.accumulator = None;
                self.pending_op = None;
                self.replace_entry = true;
                self.error = None;
            }
            Err(message) => self.set_error(message),
        }
    }

    fn set_error(&mut self, message: &'static str) {
        *self = Self::default();
        self.error = Some(message);
        self.replace_entry = true;
    }
}

pub fn apply_binary(lhs: f64, op: BinaryOp, rhs: f64) -> Result<f64, &'static str> {
    let result = match op {
        BinaryOp::Add => lhs + rhs,
        BinaryOp::Subtract => lhs - rhs,
        BinaryOp::Multiply => lhs * rhs,
        BinaryOp::Divide => {
            if rhs == 0.0 {
                return Err("Cannot divide by zero");
            }
            lhs / rhs
        }
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err("Overflow")
    }
}

pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{value:.0}");
    }

    let mut text = format!("{value:.12}");
    while text.contains('.') && text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

pub fn keyboard_action(key: &str) -> Option<CalcAction> {
    match key {
        "0" | "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" => {
            key.chars().next().map(CalcAction::Digit)
        }
        "." | "," => Some(CalcAction::Decimal),
        "+" => Some(CalcAction::Binary(BinaryOp::Add)),
        "-" => Some(CalcAction::Binary(BinaryOp::Subtract)),
        "*" | "x" | "X" => Some(CalcAction::Binary(BinaryOp::Multiply)),
        "/" => Some(CalcAction::Binary(BinaryOp::Divide)),
        "=" | "Enter" => Some(CalcAction::Equals),
        "Backspace" => Some(CalcAction::Backspace),
        "Escape" => Some(CalcAction::Clear),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(state: &mut CalculatorState, actions: &[CalcAction]) {
        for action in actions {
            state.apply(*action);
        }
    }

    fn digits(state: &mut CalculatorState, text: &str) {
        for digit in text.chars() {
            state.apply(CalcAction::Digit(digit));
        }
    }

    #[test]
    fn chained_operations_evaluate_left_to_right() {
        let mut calc = CalculatorState::default();
        digits(&mut calc, "2");
        calc.apply(CalcAction::Binary(BinaryOp::Add));
        digits(&mut calc, "3");
        calc.apply(CalcAction::Binary(BinaryOp::Multiply));
        assert_eq!(calc.display_text(), "5");
        digits(&mut calc, "4");
        calc.apply(CalcAction::Equals);
        assert_eq!(calc.display_text(), "20");
    }

    #[test]
    fn divide_by_zero_reports_an_error_cleared_by_the_next_entry() {
        let mut calc = CalculatorState::default();
        digits(&mut calc, "8");
        press(
            &mut calc,
            &[
                CalcAction::Binary(BinaryOp::Divide),
                CalcAction::Digit('0'),
                CalcAction::Equals,
            ],
        );
        assert_eq!(calc.display_text(), "Cannot divide by zero");

        calc.apply(CalcAction::Digit('7'));
        assert_eq!(calc.display_text(), "7");
    }

    #[test]
    fn decimal_point_is_only_accepted_once() {
        let mut calc = CalculatorState::default();
        digits(&mut calc, "1");
        press(&mut calc, &[CalcAction::Decimal, CalcAction::Decimal]);
        digits(&mut calc, "5");
        assert_eq!(calc.display_text(), "1.5");
    }

    #[test]
    fn swapping_the_pending_operator_does_not_evaluate() {
        let mut calc = CalculatorState::default();
        digits(&mut calc, "6");
        press(
            &mut calc,
            &[
                CalcAction::Binary(BinaryOp::Add),
                CalcAction::Binary(BinaryOp::Multiply),
            ],
        );
        digits(&mut calc, "2");
        calc.apply(CalcAction::Equals);
        assert_eq!(calc.display_text(), "12");
    }

    #[test]
    fn backspace_trims_to_zero() {
        let mut calc = CalculatorState::default();
        digits(&mut calc, "42");
        press(&mut calc, &[CalcAction::Backspace, CalcAction::Backspace]);
        assert_eq!(calc.display_text(), "0");
        calc.apply(CalcAction::Backspace);
        assert_eq!(calc.display_text(), "0");
    }

    #[test]
    fn toggle_sign_flips_and_ignores_zero() {
        let mut calc = CalculatorState::default();
        calc.apply(CalcAction::ToggleSign);
        assert_eq!(calc.display_text(), "0");
        digits(&mut calc, "9");
        calc.apply(CalcAction::ToggleSign);
        assert_eq!(calc.display_text(), "-9");
        calc.apply(CalcAction::ToggleSign);
        assert_eq!(calc.display_text(), "9");
    }

    #[test]
    fn format_number_trims_float_noise() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(-3.25), "-3.25");
    }

    #[test]
    fn keyboard_map_covers_the_original_shortcuts() {
        assert_eq!(keyboard_action("7"), Some(CalcAction::Digit('7')));
        assert_eq!(keyboard_action("Enter"), Some(CalcAction::Equals));
        assert_eq!(
            keyboard_action("/"),
            Some(CalcAction::Binary(BinaryOp::Divide))
        );
        assert_eq!(keyboard_action("Escape"), Some(CalcAction::Clear));
        assert_eq!(keyboard_action("q"), None);
    }
}
