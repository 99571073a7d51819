//! Snake game desktop app.

use std::time::Duration;

use glassdesk_app_contract::AppLifecycleEvent;
use leptos::*;

mod engine;

use engine::{Direction, SnakeGame, GRID_SIZE, TICK_MS};

const CELL_PX: i32 = 20;

#[component]
pub fn SnakeApp(lifecycle: ReadSignal<AppLifecycleEvent>) -> impl IntoView {
    let game = create_rw_signal(SnakeGame::default());
    let playing = create_rw_signal(false);

    // The interval runs for the lifetime of the window; the simulation only
    // advances while playing and while the hosting window is visible.
    if let Ok(interval) = set_interval_with_handle(
        move || {
            if !playing.get_untracked() {
                return;
            }
            if lifecycle.get_untracked() == AppLifecycleEvent::Minimized {
                return;
            }
            game.update(|g| g.step(glassdesk_host::random_unit));
            if game.get_untracked().game_over() {
                playing.set(false);
            }
        },
        Duration::from_millis(TICK_MS),
    ) {
        on_cleanup(move || interval.clear());
    }

    let keyboard = window_event_listener(ev::keydown, move |ev| {
        if !playing.get_untracked() {
            return;
        }
        let direction = match ev.key().as_str() {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        };
        if let Some(direction) = direction {
            ev.prevent_default();
            game.update(|g| g.steer(direction));
        }
    });
    on_cleanup(move || keyboard.remove());

    let toggle_playing = move |_| {
        if !game.get_untracked().game_over() {
            playing.set(!playing.get_untracked());
        }
    };
    let reset = move |_| {
        game.update(|g| g.reset());
        playing.set(false);
    };

    let board_style = format!(
        "width:{}px;height:{}px;grid-template-columns:repeat({GRID_SIZE},1fr);grid-template-rows:repeat({GRID_SIZE},1fr);",
        GRID_SIZE * CELL_PX,
        GRID_SIZE * CELL_PX,
    );

    view! {
        <div class="app-snake">
            <div class="snake-header">
                <h2>"Snake Game"</h2>
                <div class="snake-controls">
                    <span class="snake-score">
                        {move || format!("Score: {}", game.get().score())}
                    </span>
                    <button
                        type="button"
                        disabled=move || game.get().game_over()
                        on:click=toggle_playing
                    >
                        {move || if playing.get() { "Pause" } else { "Play" }}
                    </button>
                    <button type="button" on:click=reset>"Reset"</button>
                </div>
            </div>

            <Show when=move || game.get().game_over() fallback=|| ()>
                <div class="snake-game-over">
                    <strong>"Game Over!"</strong>
                    <span>{move || format!("Final Score: {}", game.get().score())}</span>
                </div>
            </Show>

            <div class="snake-board" style=board_style>
                <For
                    each=move || (0..GRID_SIZE * GRID_SIZE)
                    key=|index| *index
                    let:index
                >
                    {
                        let x = index % GRID_SIZE;
                        let y = index / GRID_SIZE;
                        let cell_class = move || {
                            let g = game.get();
                            if g.is_head(x, y) {
                                "snake-cell head"
                            } else if g.is_snake(x, y) {
                                "snake-cell body"
                            } else if g.is_food(x, y) {
                                "snake-cell food"
                            } else {
                                "snake-cell"
                            }
                        };
                        view! { <div class=cell_class></div> }
                    }
                </For>
            </div>

            <p class="snake-hint">"Use arrow keys to control the snake"</p>
        </div>
    }
}
