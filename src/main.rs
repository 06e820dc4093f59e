//! Demo page hosting both components.
//! Owns the parent-side state: the current bet and the game phase.

use log::{info, warn, LevelFilter};
use wager_panels::{logging, BetSelection, GamePhase, PaymentPage, SizeSelection};
use yew::prelude::*;

const DEMO_PHASES: [GamePhase; 4] = [
    GamePhase::Betting,
    GamePhase::Locked,
    GamePhase::Drawing,
    GamePhase::Settled,
];

/// Next phase in the demo cycle.
fn next_phase(phase: GamePhase) -> GamePhase {
    let idx = DEMO_PHASES.iter().position(|&p| p == phase).unwrap_or(0);
    DEMO_PHASES[(idx + 1) % DEMO_PHASES.len()]
}

#[function_component]
pub fn App() -> Html {
    let selected_bet = use_state(|| None::<BetSelection>);
    let game_phase = use_state(GamePhase::default);

    let on_selection = {
        let selected_bet = selected_bet.clone();
        Callback::from(move |bet: BetSelection| {
            info!("Selected {} ({}) as {}", bet.bet_type, bet.display_type, bet.label);
            selected_bet.set(Some(bet));
        })
    };

    let on_cycle_phase = {
        let game_phase = game_phase.clone();
        Callback::from(move |_: MouseEvent| game_phase.set(next_phase(*game_phase)))
    };

    html! {
        <div class="app-container">
            <section class="betting-options">
                <div class="phase-row">
                    <span class="phase">{ format!("Phase: {:?}", *game_phase) }</span>
                    <button class="phase-button" onclick={on_cycle_phase}>{ "Next phase" }</button>
                </div>
                <SizeSelection
                    selected_bet={(*selected_bet).clone()}
                    game_phase={*game_phase}
                    {on_selection}
                />
                if let Some(bet) = &*selected_bet {
                    <p class="current-bet">{ format!("Current bet: {}", bet.label) }</p>
                }
            </section>
            <PaymentPage />
        </div>
    }
}

/// Entry point: installs logging and renders the demo.
fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = logging::init(LevelFilter::Info) {
        warn!("Logger already installed: {}", e);
    }
    yew::Renderer::<App>::new().render();
}
