//! Marker surface for the tracking panel.
//!
//! The map collaborator is a black box to the rest of the app: it consumes a
//! center coordinate, a zoom level and marker descriptors, and reports marker
//! clicks back. Tile rendering is out of scope; the surface places markers
//! with a linear viewport transform and clips whatever falls outside.

use crate::shared::icons::icon;
use contracts::enums::StatusTone;
use leptos::prelude::*;

/// One marker on the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub id: String,
    pub longitude: f64,
    pub latitude: f64,
    /// Degrees, 0 = north; rotates the glyph.
    pub heading: f64,
    pub tone: StatusTone,
}

/// Maps a coordinate to percent offsets inside the viewport, `None` when the
/// marker falls outside.
fn marker_position(center: (f64, f64), zoom: f64, lon: f64, lat: f64) -> Option<(f64, f64)> {
    let scale = zoom.max(1.0) * 4.0;
    let x = 50.0 + (lon - center.0) * scale;
    let y = 50.0 - (lat - center.1) * scale;
    if (0.0..=100.0).contains(&x) && (0.0..=100.0).contains(&y) {
        Some((x, y))
    } else {
        None
    }
}

#[component]
pub fn MapView(
    /// (longitude, latitude) at the viewport center
    center: (f64, f64),
    zoom: f64,
    #[prop(into)] markers: Signal<Vec<MapMarker>>,
    #[prop(optional, into)] on_marker_click: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <div class="map-view">
            {move || {
                markers
                    .get()
                    .into_iter()
                    .filter_map(|marker| {
                        let (x, y) = marker_position(
                            center,
                            zoom,
                            marker.longitude,
                            marker.latitude,
                        )?;
                        let id = marker.id.clone();
                        Some(view! {
                            <button
                                class=format!("map-view__marker map-view__marker--{}", marker.tone.code())
                                style=format!("left: {:.1}%; top: {:.1}%;", x, y)
                                title=marker.id.clone()
                                on:click=move |_| {
                                    if let Some(cb) = on_marker_click {
                                        cb.run(id.clone());
                                    }
                                }
                            >
                                <span
                                    class="map-view__glyph"
                                    style=format!("transform: rotate({:.0}deg)", marker.heading)
                                >
                                    {icon("plane")}
                                </span>
                            </button>
                        })
                    })
                    .collect_view()
            }}
            <div class="map-view__footer">
                {format!("center {:.4}, {:.4} / zoom {:.0}", center.0, center.1, zoom)}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_marker_sits_mid_viewport() {
        let pos = marker_position((32.44, 0.04), 10.0, 32.44, 0.04);
        assert_eq!(pos, Some((50.0, 50.0)));
    }

    #[test]
    fn offset_marker_shifts_with_the_coordinate() {
        let (x, y) = marker_position((32.0, 0.0), 10.0, 32.5, 0.25).expect("in view");
        assert!(x > 50.0);
        assert!(y < 50.0);
    }

    #[test]
    fn far_marker_is_clipped() {
        assert_eq!(marker_position((32.0, 0.0), 10.0, 45.0, 0.0), None);
        assert_eq!(marker_position((32.0, 0.0), 10.0, 32.0, 30.0), None);
    }
}
