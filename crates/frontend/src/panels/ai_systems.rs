use crate::shared::components::{StatCard, StatusBadge};
use contracts::domain::ai_systems::{AiSubsystem, SubsystemHealth};
use contracts::enums::StatusTone;
use leptos::prelude::*;

fn sample_subsystems() -> Vec<AiSubsystem> {
    vec![
        AiSubsystem {
            id: "flight-optimizer".into(),
            name: "Flight Path Optimizer".into(),
            kind: "Route Planning".into(),
            health: SubsystemHealth::Active,
            accuracy: 94,
        },
        AiSubsystem {
            id: "maintenance-predictor".into(),
            name: "Predictive Maintenance AI".into(),
            kind: "Maintenance".into(),
            health: SubsystemHealth::Active,
            accuracy: 96,
        },
        AiSubsystem {
            id: "passenger-flow".into(),
            name: "Passenger Flow AI".into(),
            kind: "Terminal Operations".into(),
            health: SubsystemHealth::Training,
            accuracy: 88,
        },
        AiSubsystem {
            id: "weather-analyzer".into(),
            name: "Weather Impact Analyzer".into(),
            kind: "Safety".into(),
            health: SubsystemHealth::Active,
            accuracy: 91,
        },
    ]
}

/// Health grid of the automation subsystems.
#[component]
pub fn AiControlCenter() -> impl IntoView {
    let subsystems = sample_subsystems();

    view! {
        <div class="panel">
            <h2 class="panel__title">"AI Control Center"</h2>

            <div class="stat-grid">
                <StatCard label="Subsystems Online" value="3 / 4" icon_name="cpu" tone=StatusTone::Positive />
                <StatCard label="Avg Accuracy" value="92.3%" icon_name="trending-up" tone=StatusTone::Info />
                <StatCard label="In Training" value="1" icon_name="clock" tone=StatusTone::Caution />
                <StatCard label="Decisions Today" value="412" icon_name="activity" tone=StatusTone::Neutral />
            </div>

            <div class="card-grid">
                {subsystems
                    .into_iter()
                    .map(|sys| {
                        view! {
                            <div class="subsystem-card">
                                <div class="subsystem-card__head">
                                    <span class="subsystem-card__name">{sys.name}</span>
                                    <StatusBadge label=sys.health.label() tone=sys.health.tone() />
                                </div>
                                <span class="subsystem-card__kind">{sys.kind}</span>
                                <div class="subsystem-card__meter">
                                    <div
                                        class="subsystem-card__fill"
                                        style=format!("width: {}%", sys.accuracy)
                                    ></div>
                                </div>
                                <span class="subsystem-card__accuracy">
                                    {format!("{}% accuracy", sys.accuracy)}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
