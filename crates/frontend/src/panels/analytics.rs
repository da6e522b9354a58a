use crate::shared::components::{StatCard, StatusBadge};
use contracts::domain::analytics::{ImpactLevel, Prediction};
use contracts::enums::StatusTone;
use leptos::prelude::*;

fn sample_predictions() -> Vec<Prediction> {
    vec![
        Prediction {
            category: "Flight Delays".into(),
            prediction: "15% increase expected".into(),
            confidence: 87,
            impact: ImpactLevel::Medium,
        },
        Prediction {
            category: "Maintenance Needs".into(),
            prediction: "Engine service required".into(),
            confidence: 94,
            impact: ImpactLevel::High,
        },
        Prediction {
            category: "Passenger Flow".into(),
            prediction: "Peak traffic Thu-Fri".into(),
            confidence: 92,
            impact: ImpactLevel::Low,
        },
        Prediction {
            category: "Fuel Consumption".into(),
            prediction: "3% under monthly budget".into(),
            confidence: 89,
            impact: ImpactLevel::Low,
        },
    ]
}

/// Model predictions with confidence and expected impact.
#[component]
pub fn PredictiveAnalytics() -> impl IntoView {
    let predictions = sample_predictions();

    view! {
        <div class="panel">
            <h2 class="panel__title">"Predictive Analytics"</h2>

            <div class="stat-grid">
                <StatCard label="Active Models" value="4" icon_name="trending-up" tone=StatusTone::Info />
                <StatCard label="Avg Confidence" value="90.5%" icon_name="check-circle" tone=StatusTone::Positive />
                <StatCard label="High-Impact Findings" value="1" icon_name="alert-triangle" tone=StatusTone::Caution />
                <StatCard label="Data Points / Day" value="1.2M" icon_name="activity" tone=StatusTone::Neutral />
            </div>

            <div class="card-grid">
                {predictions
                    .into_iter()
                    .map(|p| {
                        view! {
                            <div class="prediction-card">
                                <div class="prediction-card__head">
                                    <span class="prediction-card__category">{p.category}</span>
                                    <StatusBadge label=p.impact.label() tone=p.impact.tone() />
                                </div>
                                <p class="prediction-card__text">{p.prediction}</p>
                                <div class="prediction-card__meter">
                                    <div
                                        class="prediction-card__fill"
                                        style=format!("width: {}%", p.confidence)
                                    ></div>
                                </div>
                                <span class="prediction-card__confidence">
                                    {format!("{}% confidence", p.confidence)}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
