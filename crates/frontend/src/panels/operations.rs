use crate::shared::components::{StatCard, StatusBadge};
use contracts::domain::flights::{Flight, FlightStatus};
use contracts::enums::StatusTone;
use leptos::prelude::*;

fn sample_flights() -> Vec<Flight> {
    vec![
        Flight {
            id: "UG001".into(),
            route: "Kampala → Nairobi".into(),
            aircraft: "Boeing 737-800".into(),
            status: FlightStatus::OnTime,
            departure: "08:30".into(),
            arrival: "10:45".into(),
            passengers: 156,
            gate: "A2".into(),
        },
        Flight {
            id: "UG002".into(),
            route: "Entebbe → Dubai".into(),
            aircraft: "Airbus A330".into(),
            status: FlightStatus::Delayed,
            departure: "14:20".into(),
            arrival: "20:30".into(),
            passengers: 283,
            gate: "B1".into(),
        },
        Flight {
            id: "UG003".into(),
            route: "Gulu → Kampala".into(),
            aircraft: "DHC-8-400".into(),
            status: FlightStatus::Boarding,
            departure: "16:45".into(),
            arrival: "17:30".into(),
            passengers: 68,
            gate: "C3".into(),
        },
    ]
}

/// Departures board with the day's key figures.
#[component]
pub fn FlightOperations() -> impl IntoView {
    let flights = sample_flights();

    view! {
        <div class="panel">
            <h2 class="panel__title">"Flight Operations Dashboard"</h2>

            <div class="stat-grid">
                <StatCard label="Active Flights" value="24" icon_name="plane" tone=StatusTone::Info />
                <StatCard label="On-Time Rate" value="92%" icon_name="check-circle" tone=StatusTone::Positive />
                <StatCard label="Passengers Today" value="3,247" icon_name="users" tone=StatusTone::Caution />
                <StatCard label="Aircraft in Service" value="18" icon_name="activity" tone=StatusTone::Neutral />
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Flight"</th>
                        <th>"Route"</th>
                        <th>"Aircraft"</th>
                        <th>"Status"</th>
                        <th>"Departure"</th>
                        <th>"Arrival"</th>
                        <th>"Passengers"</th>
                        <th>"Gate"</th>
                    </tr>
                </thead>
                <tbody>
                    {flights
                        .into_iter()
                        .map(|flight| {
                            view! {
                                <tr>
                                    <td class="data-table__id">{flight.id}</td>
                                    <td>{flight.route}</td>
                                    <td>{flight.aircraft}</td>
                                    <td>
                                        <StatusBadge
                                            label=flight.status.label()
                                            tone=flight.status.tone()
                                        />
                                    </td>
                                    <td>{flight.departure}</td>
                                    <td>{flight.arrival}</td>
                                    <td>{flight.passengers}</td>
                                    <td>{flight.gate}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
