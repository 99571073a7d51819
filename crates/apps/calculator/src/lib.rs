//! Calculator desktop app.

use leptos::ev::KeyboardEvent;
use leptos::*;

mod engine;

use engine::{keyboard_action, BinaryOp, CalcAction, CalculatorState};

#[derive(Clone, Copy)]
struct CalcKeySpec {
    id: &'static str,
    label: &'static str,
    class_name: &'static str,
    action: CalcAction,
}

// Laid out as the classic four-column keypad; `wide` keys span two columns.
const CALC_KEYS: [CalcKeySpec; 19] = [
    CalcKeySpec { id: "clear", label: "Clear", class_name: "util wide", action: CalcAction::Clear },
    CalcKeySpec { id: "back", label: "⌫", class_name: "util", action: CalcAction::Backspace },
    CalcKeySpec { id: "divide", label: "÷", class_name: "operator", action: CalcAction::Binary(BinaryOp::Divide) },
    CalcKeySpec { id: "7", label: "7", class_name: "digit", action: CalcAction::Digit('7') },
    CalcKeySpec { id: "8", label: "8", class_name: "digit", action: CalcAction::Digit('8') },
    CalcKeySpec { id: "9", label: "9", class_name: "digit", action: CalcAction::Digit('9') },
    CalcKeySpec { id: "multiply", label: "×", class_name: "operator", action: CalcAction::Binary(BinaryOp::Multiply) },
    CalcKeySpec { id: "4", label: "4", class_name: "digit", action: CalcAction::Digit('4') },
    CalcKeySpec { id: "5", label: "5", class_name: "digit", action: CalcAction::Digit('5') },
    CalcKeySpec { id: "6", label: "6", class_name: "digit", action: CalcAction::Digit('6') },
    CalcKeySpec { id: "subtract", label: "-", class_name: "operator", action: CalcAction::Binary(BinaryOp::Subtract) },
    CalcKeySpec { id: "1", label: "1", class_name: "digit", action: CalcAction::Digit('1') },
    CalcKeySpec { id: "2", label: "2", class_name: "digit", action: CalcAction::Digit('2') },
    CalcKeySpec { id: "3", label: "3", class_name: "digit", action: CalcAction::Digit('3') },
    CalcKeySpec { id: "add", label: "+", class_name: "operator", action: CalcAction::Binary(BinaryOp::Add) },
    CalcKeySpec { id: "sign", label: "+/-", class_name: "digit", action: CalcAction::ToggleSign },
    CalcKeySpec { id: "0", label: "0", class_name: "digit", action: CalcAction::Digit('0') },
    CalcKeySpec { id: "decimal", label: ".", class_name: "digit", action: CalcAction::Decimal },
    CalcKeySpec { id: "equals", label: "=", class_name: "operator equals", action: CalcAction::Equals },
];

#[component]
pub fn CalculatorApp() -> impl IntoView {
    let calc = create_rw_signal(CalculatorState::default());

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        if let Some(action) = keyboard_action(&ev.key()) {
            ev.prevent_default();
            calc.update(|state| state.apply(action));
        }
    };

    view! {
        <div class="app-calculator" tabindex="0" on:keydown=on_keydown>
            <div class="calc-display-panel">
                <div class="calc-expression">{move || calc.get().expression_text()}</div>
                <div class="calc-display" role="status" aria-live="polite">
                    {move || calc.get().display_text()}
                </div>
            </div>

            <div class="calc-keypad" role="group" aria-label="Calculator keys">
                <For each=move || CALC_KEYS.to_vec() key=|spec| spec.id let:spec>
                    <button
                        type="button"
                        class=format!("calc-key {}", spec.class_name)
                        on:click=move |_| calc.update(|state| state.apply(spec.action))
                    >
                        {spec.label}
                    </button>
                </For>
            </div>
        </div>
    }
}
