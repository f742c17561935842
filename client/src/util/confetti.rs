//! One-shot confetti burst for the favorite celebration.
//!
//! Fire-and-forget: spawns a short-lived DOM overlay and removes it after
//! the animation ends. No-op outside the browser.

#[cfg(test)]
#[path = "confetti_test.rs"]
mod confetti_test;

/// Pieces per burst.
#[cfg(feature = "hydrate")]
const PIECE_COUNT: usize = 80;

/// Overlay lifetime in milliseconds; matches the CSS animation length.
#[cfg(feature = "hydrate")]
const BURST_MS: u32 = 1800;

/// Colors cycled across pieces.
#[cfg(feature = "hydrate")]
const COLORS: [&str; 5] = ["#f94144", "#f9c74f", "#90be6d", "#577590", "#f3722c"];

/// Fire a single celebration burst.
pub fn burst() {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };
        let Ok(overlay) = document.create_element("div") else {
            return;
        };
        overlay.set_class_name("confetti");

        for index in 0..PIECE_COUNT {
            let Ok(piece) = document.create_element("span") else {
                continue;
            };
            piece.set_class_name("confetti__piece");
            let left = js_sys::Math::random() * 100.0;
            let delay = js_sys::Math::random() * 0.6;
            let color = COLORS[index % COLORS.len()];
            let _ = piece.set_attribute(
                "style",
                &format!("left:{left:.1}%;animation-delay:{delay:.2}s;background:{color}"),
            );
            let _ = overlay.append_child(&piece);
        }
        let _ = body.append_child(&overlay);

        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(BURST_MS).await;
            overlay.remove();
        });
    }
}
